//! Handlers for user CRUD endpoints.
//!
//! Each handler validates its input, calls [`crate::application::services::UserService`]
//! and maps the outcome to a response. Failures from the service are returned
//! unchanged with `?` and rendered by [`ApiError`]'s `IntoResponse`.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::pagination::{ListUsersQuery, PagedResponse};
use crate::api::dto::user::{CreateUserRequest, UpdateUserRequest, UserItem};
use crate::api::extract::{ApiJson, LenientQuery, UserIdPath};
use crate::error::ApiError;
use crate::state::AppState;

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// {
///   "username": "testuser",
///   "email": "test@example.com",
///   "phoneNumber": "1234567890"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 "Missing required fields" if any field is absent, null or empty;
/// the user service is not called in that case.
pub async fn create_user_handler(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> Result<(StatusCode, Json<UserItem>), ApiError> {
    let new_user = payload.into_new_user()?;

    let user = state.user_service.add(new_user).await?;

    Ok((StatusCode::CREATED, Json(user.into())))
}

/// Lists users page by page.
///
/// # Endpoint
///
/// `GET /users?page=1&limit=10`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1, min: 1)
/// - `limit` (optional): Items per page (default: 10, min: 1, max: 100)
///
/// Unparsable values and malformed query strings fall back to the defaults;
/// there is no validation error.
pub async fn list_users_handler(
    State(state): State<AppState>,
    LenientQuery(query): LenientQuery<ListUsersQuery>,
) -> Result<Json<PagedResponse<UserItem>>, ApiError> {
    let params = query.to_params();

    let page = state.user_service.list(params).await?;

    Ok(Json(page.into()))
}

/// Fetches a single user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 "User not found" if no user has this id.
pub async fn get_user_handler(
    UserIdPath(id): UserIdPath,
    State(state): State<AppState>,
) -> Result<Json<UserItem>, ApiError> {
    let user = match id {
        Some(id) => state.user_service.get_by_id(id).await?,
        None => None,
    };

    user.map(|u| Json(u.into()))
        .ok_or_else(ApiError::user_not_found)
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PUT /users/{id}`
///
/// All body fields are optional; only supplied fields change.
///
/// # Errors
///
/// Returns 404 "User not found" if no user has this id.
pub async fn update_user_handler(
    UserIdPath(id): UserIdPath,
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> Result<Json<UserItem>, ApiError> {
    let user = match id {
        Some(id) => state.user_service.update(id, payload.into_patch()).await?,
        None => None,
    };

    user.map(|u| Json(u.into()))
        .ok_or_else(ApiError::user_not_found)
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// Responds `204 No Content` with an empty body.
///
/// # Errors
///
/// Returns 404 "User not found" if no user has this id.
pub async fn delete_user_handler(
    UserIdPath(id): UserIdPath,
    State(state): State<AppState>,
) -> Result<StatusCode, ApiError> {
    let deleted = match id {
        Some(id) => state.user_service.delete(id).await?,
        None => false,
    };

    if !deleted {
        return Err(ApiError::user_not_found());
    }

    Ok(StatusCode::NO_CONTENT)
}
