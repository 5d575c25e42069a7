use crate::anagrafe::{
    handlers::{bad_request, internal_error, valid_email},
    password,
    store::{Account, AccountStore, StoreError},
};
use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;

#[derive(ToSchema, Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct RegisterRequest {
    name: String,
    email: String,
    #[schema(value_type = String)]
    password: SecretString,
    age: i32,
    address: String,
}

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration successful", content_type = "application/json"),
        (status = 400, description = "Missing field, invalid email or email already exists"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "register"
)]
// axum handler for register
#[instrument]
pub async fn register(
    store: Extension<AccountStore>,
    payload: Option<Json<RegisterRequest>>,
) -> impl IntoResponse {
    let req: RegisterRequest = match payload {
        Some(Json(payload)) => payload,
        None => return bad_request("Missing payload"),
    };

    debug!("register request: {:?}", req);

    if req.name.trim().is_empty() {
        return bad_request("Name is required");
    }

    if !valid_email(&req.email) {
        return bad_request("Invalid email");
    }

    if req.password.expose_secret().is_empty() {
        return bad_request("Password is required");
    }

    if req.address.trim().is_empty() {
        return bad_request("Address is required");
    }

    // Advisory pre-check, the unique index on email is the real guarantee
    match store.find_by_email(&req.email).await {
        Ok(Some(_)) => {
            error!("Email already exists");

            return bad_request("Email already exists");
        }
        Ok(None) => (),
        Err(e) => {
            error!("Error checking if account exists: {:?}", e);

            return internal_error();
        }
    }

    let password_hash = match password::hash_async(req.password).await {
        Ok(hash) => hash,
        Err(e) => {
            error!("Error hashing password: {:?}", e);

            return internal_error();
        }
    };

    let account = Account {
        name: req.name,
        email: req.email,
        password_hash,
        age: req.age,
        address: req.address,
    };

    match store.create(&account).await {
        Ok(()) => (
            StatusCode::CREATED,
            Json(json!({ "message": "User registered successfully" })),
        ),
        // Lost the insert race against a concurrent register for this email
        Err(StoreError::DuplicateEmail) => bad_request("Email already exists"),
        Err(StoreError::Database(e)) => {
            error!("Error inserting account: {:?}", e);

            internal_error()
        }
    }
}
