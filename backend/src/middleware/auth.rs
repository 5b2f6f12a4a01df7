use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::{
    error::AppError,
    models::user::User,
    state::AppState,
    utils::jwt::verify_access_token,
};

pub async fn auth(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate_request(bearer_header(request.headers()), &state).await?;
    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

// Auth + require admin role for admin-only routes
pub async fn auth_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = authenticate_request(bearer_header(request.headers()), &state).await?;
    if !user.is_admin() {
        tracing::debug!(user_id = %user.id, "non-admin attempted an admin route");
        return Err(AppError::Forbidden("Access denied".into()));
    }

    request.extensions_mut().insert(user);
    Ok(next.run(request).await)
}

fn bearer_header(headers: &axum::http::HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

fn parse_bearer_token(header: &str) -> Option<&str> {
    let (scheme, rest) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = rest.trim();
    (!token.is_empty()).then_some(token)
}

async fn authenticate_request(
    auth_header: Option<&str>,
    state: &AppState,
) -> Result<User, AppError> {
    let token = auth_header
        .and_then(parse_bearer_token)
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".into()))?;

    let claims = verify_access_token(token, &state.config.jwt_secret)
        .map_err(|_| AppError::Unauthorized("Invalid or expired token".into()))?;

    let user = state
        .users
        .find_by_id(&claims.sub)
        .await?
        .ok_or_else(|| AppError::Unauthorized("User not found".into()))?;

    // A token is only good for the role it was issued under.
    if claims.role != user.role.as_str() {
        tracing::debug!(user_id = %user.id, token_role = %claims.role, "token role mismatch");
        return Err(AppError::Unauthorized("Invalid or expired token".into()));
    }

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Config,
        models::user::UserRole,
        utils::jwt::create_access_token,
    };

    async fn seeded(role: UserRole) -> (AppState, User) {
        let state = AppState::in_memory(Config::default());
        let user = state
            .users
            .create(User::new(
                "Alice".into(),
                "alice@example.com".into(),
                "hash".into(),
                role,
            ))
            .await
            .expect("seed user");
        (state, user)
    }

    fn bearer(state: &AppState, user: &User, role: &str) -> String {
        let token = create_access_token(
            user.id.clone(),
            role.into(),
            &state.config.jwt_secret,
            1,
        )
        .expect("token");
        format!("Bearer {}", token)
    }

    #[tokio::test]
    async fn authenticate_request_returns_the_stored_user() {
        let (state, user) = seeded(UserRole::Employee).await;
        let header = bearer(&state, &user, "employee");

        let found = authenticate_request(Some(&header), &state)
            .await
            .expect("authenticated");
        assert_eq!(found.id, user.id);
    }

    #[tokio::test]
    async fn token_role_must_match_the_account_role() {
        let (state, user) = seeded(UserRole::Employee).await;
        let header = bearer(&state, &user, "admin");

        let result = authenticate_request(Some(&header), &state).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[tokio::test]
    async fn missing_header_is_unauthorized() {
        let (state, _) = seeded(UserRole::Admin).await;
        let result = authenticate_request(None, &state).await;
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn parse_bearer_token_accepts_any_scheme_casing() {
        assert_eq!(parse_bearer_token("Bearer abc"), Some("abc"));
        assert_eq!(parse_bearer_token("bearer  abc "), Some("abc"));
        assert_eq!(parse_bearer_token("BEARER abc"), Some("abc"));
    }

    #[test]
    fn parse_bearer_token_rejects_other_schemes_and_blanks() {
        assert_eq!(parse_bearer_token("Basic abc"), None);
        assert_eq!(parse_bearer_token("Bearer "), None);
        assert_eq!(parse_bearer_token("abc"), None);
    }
}
