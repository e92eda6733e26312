use utoipa::OpenApi;

use super::{dto, handlers};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::submit_rsvp,
        handlers::list_rsvps,
        handlers::get_stats,
        handlers::rsvp_events,
    ),
    components(schemas(
        dto::RsvpDto,
        dto::SubmitRsvpReq,
        dto::SubmissionDto,
        dto::RsvpStatsDto,
        dto::RsvpEvent,
        problem_details::Problem,
    )),
    tags((name = "rsvp", description = "Guest attendance confirmations"))
)]
pub struct RsvpApiDoc;
