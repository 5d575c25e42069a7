use crate::anagrafe::{
    handlers::{bad_request, internal_error},
    password,
    store::AccountStore,
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct LoginRequest {
    email: String,
    #[schema(value_type = String)]
    password: SecretString,
}

/// Identical status and body for unknown email and wrong password, a caller
/// must not be able to tell which one failed
fn unauthorized() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": "Invalid email or password" })),
    )
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", content_type = "application/json"),
        (status = 401, description = "Invalid email or password"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "login"
)]
// axum handler for login
#[instrument]
pub async fn login(
    store: Extension<AccountStore>,
    payload: Option<Json<LoginRequest>>,
) -> impl IntoResponse {
    let req: LoginRequest = match payload {
        Some(Json(payload)) => payload,
        None => return bad_request("Missing payload"),
    };

    debug!("login request: {:?}", req);

    if req.email.trim().is_empty() {
        return bad_request("Email is required");
    }

    if req.password.expose_secret().is_empty() {
        return bad_request("Password is required");
    }

    let account = match store.find_by_email(&req.email).await {
        Ok(Some(account)) => account,
        Ok(None) => {
            debug!("Account not found");

            return unauthorized();
        }
        Err(e) => {
            error!("Error looking up account: {:?}", e);

            return internal_error();
        }
    };

    let matched = match password::verify_async(req.password, account.password_hash.clone()).await {
        Ok(matched) => matched,
        Err(e) => {
            error!("Error verifying password: {:?}", e);

            return internal_error();
        }
    };

    if matched {
        debug!("Login successful");

        (
            StatusCode::OK,
            Json(json!({
                "message": "Login successful",
                "email": account.email,
                "name": account.name,
            })),
        )
    } else {
        debug!("Password mismatch");

        unauthorized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unauthorized_is_generic() {
        // Both failure paths share this constructor, so unknown email and
        // wrong password are indistinguishable to the caller
        let (status, body) = unauthorized();

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body.0["error"], "Invalid email or password");
    }

    #[test]
    fn test_request_rejects_unknown_fields() {
        let raw = json!({ "email": "a@x.com", "password": "pw", "remember_me": true });

        assert!(serde_json::from_value::<LoginRequest>(raw).is_err());
    }

    #[test]
    fn test_request_debug_redacts_password() {
        let raw = json!({ "email": "a@x.com", "password": "hunter2" });

        let req: LoginRequest = serde_json::from_value(raw).unwrap();

        assert!(!format!("{req:?}").contains("hunter2"));
    }

    #[test]
    fn test_success_body_has_no_hash_field() {
        let body = json!({
            "message": "Login successful",
            "email": "a@x.com",
            "name": "A",
        });

        assert!(body.get("password").is_none());
        assert!(body.get("password_hash").is_none());
        assert_eq!(body.as_object().unwrap().len(), 3);
    }
}
