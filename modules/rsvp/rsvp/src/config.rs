use anyhow::bail;
use serde::{Deserialize, Serialize};

/// Widest name every supported backend stores (MySQL `VARCHAR(255)`).
pub const MAX_NAME_LENGTH_LIMIT: usize = 255;

/// Configuration for the rsvp module (`rsvp` section of the server config).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RsvpConfig {
    /// Longest accepted name, in characters, after whitespace collapsing.
    pub max_name_length: usize,
    /// Buffer size of the live feed; slower subscribers skip what they miss.
    pub events_capacity: usize,
}

impl Default for RsvpConfig {
    fn default() -> Self {
        Self {
            max_name_length: 100,
            events_capacity: 64,
        }
    }
}

impl RsvpConfig {
    /// # Errors
    /// Returns an error if `max_name_length` is zero or wider than the
    /// `rsvps` columns.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.max_name_length == 0 || self.max_name_length > MAX_NAME_LENGTH_LIMIT {
            bail!(
                "rsvp.max_name_length must be between 1 and {MAX_NAME_LENGTH_LIMIT}, got {}",
                self.max_name_length
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn partial_section_keeps_defaults() {
        let cfg: RsvpConfig = serde_json::from_str(r#"{"max_name_length": 40}"#).unwrap();
        assert_eq!(cfg.max_name_length, 40);
        assert_eq!(cfg.events_capacity, 64);
    }

    #[test]
    fn max_name_length_is_bounded_by_the_columns() {
        assert!(RsvpConfig::default().validate().is_ok());

        let widest = RsvpConfig {
            max_name_length: MAX_NAME_LENGTH_LIMIT,
            ..RsvpConfig::default()
        };
        assert!(widest.validate().is_ok());

        for max_name_length in [0, MAX_NAME_LENGTH_LIMIT + 1, 1000] {
            let cfg = RsvpConfig {
                max_name_length,
                ..RsvpConfig::default()
            };
            assert!(cfg.validate().is_err(), "{max_name_length} should be rejected");
        }
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let res = serde_json::from_str::<RsvpConfig>(r#"{"max_len": 40}"#);
        assert!(res.is_err());
    }
}
