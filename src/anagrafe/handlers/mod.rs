pub mod health;
pub use self::health::health;

pub mod user_register;
pub use self::user_register::register;

pub mod user_login;
pub use self::user_login::login;

// common functions for the handlers
use axum::{http::StatusCode, Json};
use regex::Regex;
use serde_json::{json, Value};

pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

/// 400 with a field-specific message
pub fn bad_request(message: &str) -> (StatusCode, Json<Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": message })))
}

/// 500 with a generic message, details stay in the server logs
pub fn internal_error() -> (StatusCode, Json<Value>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Internal server error" })),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert!(valid_email("a@x.com"));
        assert!(valid_email("first.last@sub.domain.org"));

        assert!(!valid_email(""));
        assert!(!valid_email("plainaddress"));
        assert!(!valid_email("missing@tld"));
        assert!(!valid_email("spaces in@x.com"));
        assert!(!valid_email("two@@x.com"));
    }

    #[test]
    fn test_internal_error_is_generic() {
        let (status, body) = internal_error();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.0["error"], "Internal server error");
    }

    #[test]
    fn test_bad_request_message() {
        let (status, body) = bad_request("Email already exists");

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.0["error"], "Email already exists");
    }
}
