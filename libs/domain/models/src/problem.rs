//! The error taxonomy of §7 and its RFC 7807 rendering. Kept framework
//! agnostic (no axum dependency) so every layer — resolver, compute,
//! verification, the EAS client — can return the same error type; the HTTP
//! surface is the only place that maps it onto a status code and body.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum DomainError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("payload exceeds the configured size limit")]
    PayloadTooLarge,
    #[error("rate limit exceeded")]
    RateLimited,
    #[error("{0}")]
    NotImplemented(String),
    #[error("{0}")]
    Internal(String),
}

impl DomainError {
    pub fn invalid(detail: impl Into<String>) -> Self {
        DomainError::InvalidInput(detail.into())
    }

    /// The URL slug used in the problem `type` field, e.g. `invalid-input`.
    pub fn slug(&self) -> &'static str {
        match self {
            DomainError::InvalidInput(_) => "invalid-input",
            DomainError::NotFound(_) => "not-found",
            DomainError::Unauthorized(_) => "unauthorised",
            DomainError::PayloadTooLarge => "payload-too-large",
            DomainError::RateLimited => "rate-limited",
            DomainError::NotImplemented(_) => "not-implemented",
            DomainError::Internal(_) => "internal",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            DomainError::InvalidInput(_) => "Invalid Input",
            DomainError::NotFound(_) => "Not Found",
            DomainError::Unauthorized(_) => "Unauthorised",
            DomainError::PayloadTooLarge => "Payload Too Large",
            DomainError::RateLimited => "Rate Limited",
            DomainError::NotImplemented(_) => "Not Implemented",
            DomainError::Internal(_) => "Internal Error",
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            DomainError::InvalidInput(_) => 400,
            DomainError::Unauthorized(_) => 401,
            DomainError::NotFound(_) => 404,
            DomainError::PayloadTooLarge => 413,
            DomainError::RateLimited => 429,
            DomainError::NotImplemented(_) => 501,
            DomainError::Internal(_) => 500,
        }
    }

    pub fn to_problem(&self, instance: impl Into<String>) -> ProblemDetails {
        ProblemDetails {
            problem_type: format!("https://astral.global/errors/{}", self.slug()),
            title: self.title().to_string(),
            status: self.status(),
            detail: self.to_string(),
            instance: instance.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub instance: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_maps_to_400() {
        let err = DomainError::invalid("bad geometry");
        let problem = err.to_problem("/compute/v0/distance");
        assert_eq!(problem.status, 400);
        assert_eq!(problem.problem_type, "https://astral.global/errors/invalid-input");
        assert_eq!(problem.instance, "/compute/v0/distance");
    }

    #[test]
    fn rate_limited_maps_to_429() {
        assert_eq!(DomainError::RateLimited.status(), 429);
    }
}
