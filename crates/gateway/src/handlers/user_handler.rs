//! User handlers.

use axum::{
    extract::{Extension, State},
    response::Json,
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::AppResult;
use domain::{User, UserCreate, UserQuery, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE, DEFAULT_SORT_FIELD};

use crate::extractors::{UserIdPath, ValidatedJson, ValidatedQuery};
use crate::middleware::CurrentUser;
use crate::state::AppState;

/// User create/replace request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UserCreateRequest {
    /// Display name
    #[schema(example = "Lee")]
    pub name: String,
    /// Contact email
    #[validate(email(message = "value is not a valid email address"))]
    #[schema(example = "lee@gmail.com")]
    pub email: String,
}

impl From<UserCreateRequest> for UserCreate {
    fn from(req: UserCreateRequest) -> Self {
        UserCreate::new(req.name, req.email)
    }
}

fn default_page() -> u64 {
    DEFAULT_PAGE_NUMBER
}

fn default_per_page() -> u64 {
    DEFAULT_PAGE_SIZE
}

fn default_sort_by() -> Option<String> {
    Some(DEFAULT_SORT_FIELD.to_string())
}

/// Listing parameters
#[derive(Debug, Deserialize, Validate, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListUsersParams {
    /// One-based page number
    #[serde(default = "default_page")]
    #[validate(range(min = 1, message = "page must be at least 1"))]
    #[param(minimum = 1, default = 1)]
    pub page: u64,
    /// Records per page
    #[serde(default = "default_per_page")]
    #[validate(range(min = 1, message = "per_page must be at least 1"))]
    #[param(minimum = 1, default = 10)]
    pub per_page: u64,
    /// Case-insensitive name substring
    pub name: Option<String>,
    /// `id`, `name` or `email`; other values leave order unchanged
    #[serde(default = "default_sort_by")]
    #[param(default = "id")]
    pub sort_by: Option<String>,
}

impl From<ListUsersParams> for UserQuery {
    fn from(params: ListUsersParams) -> Self {
        UserQuery {
            page: params.page,
            per_page: params.per_page,
            name: params.name,
            sort_by: params.sort_by,
        }
    }
}

/// Plain acknowledgement body
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "User deleted")]
    pub message: String,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

/// List users (admin only)
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(ListUsersParams),
    responses(
        (status = 200, description = "One page of users", body = Vec<User>),
        (status = 400, description = "Invalid query parameters"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn list_users(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedQuery(params): ValidatedQuery<ListUsersParams>,
) -> AppResult<Json<Vec<User>>> {
    let query = UserQuery::from(params);
    let users = state
        .user_service
        .list_users(&current_user.subject, &query)
        .await?;
    Ok(Json(users))
}

/// Get user by ID (any authenticated caller)
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User record", body = User),
        (status = 400, description = "Invalid user ID"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> AppResult<Json<User>> {
    let user = state.user_service.get_user(&current_user.subject, id).await?;
    Ok(Json(user))
}

/// Create user (admin only)
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    security(("bearer_auth" = [])),
    request_body = UserCreateRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only")
    )
)]
pub async fn create_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserCreateRequest>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service
        .create_user(&current_user.subject, payload.into())
        .await?;
    Ok(Json(user))
}

/// Replace a user's name and email (admin only)
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    request_body = UserCreateRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
    ValidatedJson(payload): ValidatedJson<UserCreateRequest>,
) -> AppResult<Json<User>> {
    let user = state
        .user_service
        .update_user(&current_user.subject, id, payload.into())
        .await?;
    Ok(Json(user))
}

/// Delete user (admin only)
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted", body = MessageResponse),
        (status = 400, description = "Invalid user ID"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden - Admin only"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    Extension(current_user): Extension<CurrentUser>,
    State(state): State<AppState>,
    UserIdPath(id): UserIdPath,
) -> AppResult<Json<MessageResponse>> {
    state
        .user_service
        .delete_user(&current_user.subject, id)
        .await?;

    Ok(Json(MessageResponse {
        message: "User deleted".to_string(),
    }))
}
