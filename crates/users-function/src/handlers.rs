//! Route handlers for the users API

use chrono::Utc;
use edge_function_sdk::prelude::*;

use crate::users::{User, UserDirectory, CREATED_USER_ID};

/// GET /users - list the fixed user records
pub fn list_users(
    _req: &Request,
    directory: &UserDirectory,
) -> Result<Response, HandlerError> {
    let users = directory.all();

    Ok(Response::ok(json!({
        "users": users,
        "count": users.len(),
        "timestamp": Utc::now().to_rfc3339(),
    })))
}

#[derive(Debug, Default, Deserialize)]
struct CreateUserInput {
    name: Option<String>,
    email: Option<String>,
}

/// POST /users - synthesize a user record from the request body.
///
/// An absent body validates like an empty object; a malformed one is a
/// serialization failure and surfaces as a 500 at the router boundary.
pub fn create_user(
    req: &Request,
    _directory: &UserDirectory,
) -> Result<Response, HandlerError> {
    let input = req.json::<Option<CreateUserInput>>()?.unwrap_or_default();

    // Validation order fixes which missing field gets reported.
    let name = input
        .name
        .ok_or_else(|| HandlerError::Validation("Missing required field: name".to_string()))?;
    let email = input
        .email
        .ok_or_else(|| HandlerError::Validation("Missing required field: email".to_string()))?;

    let user = User {
        id: CREATED_USER_ID,
        name,
        email,
        created_at: Some(Utc::now().to_rfc3339()),
    };

    Ok(Response::created(json!({
        "message": "User created",
        "user": user,
    })))
}

/// GET /users/{id} - fetch one user; the id is the last path segment
pub fn get_user_by_id(
    req: &Request,
    directory: &UserDirectory,
) -> Result<Response, HandlerError> {
    let id = req.path.rsplit('/').next().unwrap_or_default();

    match directory.find(id) {
        Some(user) => Ok(Response::ok(json!({ "user": user }))),
        None => Err(HandlerError::NotFound(format!("User {} not found", id))),
    }
}
