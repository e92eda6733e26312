use problem_details::Problem;
use rsvp_sdk::SubmissionOutcome;

use crate::domain::error::DomainError;

/// Map domain error to an RFC 9457 Problem.
///
/// The `code` is the snake_case outcome name so clients can pick their own
/// wording; store failures keep their cause out of the response body.
pub fn domain_error_to_problem(e: &DomainError, instance: &str) -> Problem {
    let problem = match e {
        DomainError::EmptyName => problem_details::bad_request("Please enter your name"),
        DomainError::InvalidFormat { reason } => {
            problem_details::unprocessable(format!("Invalid name: {reason}"))
        }
        DomainError::DuplicateName { .. } => {
            problem_details::conflict("An RSVP under this name has already been received")
        }
        DomainError::StoreUnavailable(cause) => {
            tracing::error!(error = ?cause, "RSVP store unavailable");
            problem_details::service_unavailable(
                "The RSVP store is unavailable, please try again later",
            )
        }
    };

    problem
        .with_code(outcome_of(e).as_str())
        .with_instance(instance)
        .with_current_trace()
}

fn outcome_of(e: &DomainError) -> SubmissionOutcome {
    match e {
        DomainError::EmptyName => SubmissionOutcome::EmptyName,
        DomainError::InvalidFormat { .. } => SubmissionOutcome::InvalidFormat,
        DomainError::DuplicateName { .. } => SubmissionOutcome::DuplicateName,
        DomainError::StoreUnavailable(_) => SubmissionOutcome::StoreUnavailable,
    }
}
