//! Authentication plumbing — signup/login handlers, JWT issuance, and the
//! bearer-token extractor. Thin by design; the analysis engine does not
//! depend on any of this.

use axum::{
    async_trait,
    extract::{FromRequestParts, State},
    http::{header::AUTHORIZATION, request::Parts},
    Json,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::user::ROLE_USER;
use crate::state::AppState;

const TOKEN_TTL_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub role: String,
    pub exp: usize,
}

pub fn create_token(secret: &str, username: &str, role: &str) -> Result<String, AppError> {
    let claims = Claims {
        sub: username.to_string(),
        role: role.to_string(),
        exp: (Utc::now() + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!("token encoding failed: {e}")))
}

pub fn decode_token(secret: &str, token: &str) -> Result<Claims, AppError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::Unauthorized)
}

/// Authenticated caller, extracted from a `Bearer` token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
    pub role: String,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized)?;
        let token = header.strip_prefix("Bearer ").ok_or(AppError::Unauthorized)?;
        let claims = decode_token(&state.config.jwt_secret, token)?;
        Ok(AuthUser {
            username: claims.sub,
            role: claims.role,
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub access_token: String,
    pub role: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub role: String,
}

/// POST /api/v1/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<SignupResponse>, AppError> {
    if state.store.find_user(&req.username).await?.is_some() {
        return Err(AppError::Validation("Username already exists".to_string()));
    }

    let user = state
        .store
        .create_user(&req.username, &req.password, ROLE_USER)
        .await?;
    let token = create_token(&state.config.jwt_secret, &user.username, &user.role)?;

    Ok(Json(SignupResponse {
        message: "User created successfully".to_string(),
        access_token: token,
        role: user.role,
    }))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    Json(req): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state
        .store
        .find_user(&req.username)
        .await?
        .filter(|u| u.password == req.password)
        .ok_or(AppError::Unauthorized)?;

    let token = create_token(&state.config.jwt_secret, &user.username, &user.role)?;

    Ok(Json(LoginResponse {
        access_token: token,
        token_type: "bearer".to_string(),
        role: user.role,
    }))
}
