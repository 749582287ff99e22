//! Users API handlers.
//!
//! ```text
//! GET    /users
//! POST   /users
//! GET    /users/{id}
//! PUT    /users/{id}
//! DELETE /users/{id}
//! ```
//!
//! Each handler is a 1:1 translation onto one [`UserStore`] operation; no
//! validation or response shaping happens here beyond mapping store failures
//! onto the shared error envelope.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::json;

use crate::domain::ports::{UserStore, UserStoreError};
use crate::domain::{Error, NewUser, User, UserId, UserPatch};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

fn map_store_error(error: UserStoreError) -> Error {
    match error {
        UserStoreError::NotFound { id } => Error::not_found(format!("user {id} not found"))
            .with_details(json!({ "id": id.as_i64() })),
        UserStoreError::Connection { message } => Error::service_unavailable(message),
        UserStoreError::Query { message } => Error::internal(message),
    }
}

fn missing_user_error(id: UserId) -> Error {
    map_store_error(UserStoreError::not_found(id))
}

/// List all users in store order.
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "Users", body = [User]),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<User>>> {
    let users = state.users.list().await.map_err(map_store_error)?;
    Ok(web::Json(users))
}

/// Create a user; the store assigns the identifier.
#[utoipa::path(
    post,
    path = "/users",
    request_body = NewUser,
    responses(
        (status = 201, description = "Created user", body = User),
        (status = 400, description = "Malformed payload", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<NewUser>,
) -> ApiResult<HttpResponse> {
    let user = state
        .users
        .create(payload.into_inner())
        .await
        .map_err(map_store_error)?;
    Ok(HttpResponse::Created().json(user))
}

/// Fetch a single user by identifier.
#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User", body = User),
        (status = 404, description = "Unknown user", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{id}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::new(path.into_inner());
    let user = state.users.get(id).await.map_err(map_store_error)?;
    // The store reports absence as `None`; surface it as 404 at this boundary.
    user.map(web::Json).ok_or_else(|| missing_user_error(id))
}

/// Merge partial fields into an existing user.
#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserPatch,
    responses(
        (status = 200, description = "Updated user", body = User),
        (status = 400, description = "Malformed payload", body = Error),
        (status = 404, description = "Unknown user", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{id}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
    payload: web::Json<UserPatch>,
) -> ApiResult<web::Json<User>> {
    let id = UserId::new(path.into_inner());
    let user = state
        .users
        .update(id, payload.into_inner())
        .await
        .map_err(map_store_error)?;
    Ok(web::Json(user))
}

/// Delete a user. Idempotent: deleting an absent identifier succeeds.
#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "Deleted (or already absent)"),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{id}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = UserId::new(path.into_inner());
    state.users.delete(id).await.map_err(map_store_error)?;
    Ok(HttpResponse::NoContent().finish())
}
