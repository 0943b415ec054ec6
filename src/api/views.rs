//! Server-rendered HTML views.
//!
//! Templates live under `templates/` and are compiled in by askama.

use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::domain::User;
use crate::errors::AppError;

/// Context for `users/user_list.html`
#[derive(Debug, Template)]
#[template(path = "users/user_list.html")]
pub struct UserListTemplate {
    pub users: Vec<User>,
}

impl UserListTemplate {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }
}

/// Context for `error.html`
#[derive(Debug, Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub status: u16,
    pub reason: String,
    pub message: String,
}

impl ErrorTemplate {
    fn from_error(error: &AppError) -> Self {
        let status = error.status();
        Self {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Error").to_string(),
            message: error.user_message(),
        }
    }
}

/// Error wrapper for HTML routes; renders the generic error page.
#[derive(Debug)]
pub struct HtmlError(pub AppError);

impl<E> From<E> for HtmlError
where
    E: Into<AppError>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for HtmlError {
    fn into_response(self) -> Response {
        let status = self.0.status();
        match ErrorTemplate::from_error(&self.0).render() {
            Ok(body) => (status, Html(body)).into_response(),
            Err(e) => {
                tracing::error!("Failed to render error page: {:?}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::domain::UserRole;

    fn user(name: &str, role: UserRole) -> User {
        User {
            id: Uuid::new_v4(),
            email: format!("{}@example.com", name.to_lowercase()),
            name: name.to_string(),
            role,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_renders_one_row_per_user() {
        let page = UserListTemplate::new(vec![
            user("Ada", UserRole::Admin),
            user("Bob", UserRole::User),
        ])
        .render()
        .unwrap();

        assert_eq!(page.matches("class=\"user-row\"").count(), 2);
        assert!(page.contains("ada@example.com"));
        assert!(page.contains("class=\"role-admin\""));
        assert!(page.contains("2 user(s)"));
    }

    #[test]
    fn test_renders_empty_state() {
        let page = UserListTemplate::new(vec![]).render().unwrap();

        assert!(page.contains("No users found."));
        assert!(!page.contains("user-row"));
    }

    #[test]
    fn test_escapes_user_supplied_values() {
        let page = UserListTemplate::new(vec![user("<script>alert(1)</script>", UserRole::User)])
            .render()
            .unwrap();

        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_error_page_hides_internal_details() {
        let response = HtmlError(AppError::internal("pool exhausted")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let page = ErrorTemplate::from_error(&AppError::internal("pool exhausted"))
            .render()
            .unwrap();
        assert!(page.contains("500 Internal Server Error"));
        assert!(!page.contains("pool exhausted"));
    }
}
