//! User handlers.

use askama::Template;
use axum::{
    extract::State,
    response::{Html, Json},
    routing::get,
    Router,
};

use crate::api::views::{HtmlError, UserListTemplate};
use crate::api::AppState;
use crate::domain::UserResponse;
use crate::errors::AppResult;

/// HTML user routes
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/", get(user_list))
}

/// JSON user routes
pub fn user_api_routes() -> Router<AppState> {
    Router::new().route("/", get(list_users_json))
}

/// Render every user into the user list page
pub async fn user_list(State(state): State<AppState>) -> Result<Html<String>, HtmlError> {
    let users = state.user_service.list_users().await?;
    let page = UserListTemplate::new(users);

    Ok(Html(page.render()?))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "List of all users", body = Vec<UserResponse>),
        (status = 500, description = "Database error")
    )
)]
pub async fn list_users_json(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
