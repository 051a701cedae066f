//! Error taxonomy presented to the user.
//!
//! HTTP-level error statuses (4xx/5xx) are deliberately *not* errors here:
//! the executor hands every obtained response to the formatter, preserving
//! the distinction between "could not reach the service" and "the service
//! answered with an error".

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("No Content Provided - either provide a filename or pipe content to the command")]
    NoContent,
    #[error("Invalid output specified: {0}")]
    InvalidOutput(String),
    #[error("The ELS API could not be reached. Are you connected to the internet? Have you used the correct profile?")]
    ApiUnreachable,
    #[error("Unexpected Response (status {0})")]
    UnexpectedResponse(u16),
    #[error("Profile not found: {0}")]
    ProfileNotFound(String),
    #[error("Request Failed: (StatusCode = {0})")]
    RequestFailed(u16),
}
