pub mod error;
pub mod events;
pub mod name;
pub mod ports;
pub mod repo;
pub mod service;
