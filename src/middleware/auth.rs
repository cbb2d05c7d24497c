use axum::{extract::FromRequestParts, http::header};
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};

use crate::{checkout::Prefill, error::AppError, state::AppState};

/// ID-token claims issued by the identity provider.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
}

impl AuthUser {
    pub fn prefill(&self) -> Prefill {
        Prefill {
            name: self.name.clone(),
            email: self.email.clone(),
            contact: self.phone_number.clone(),
        }
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or(AppError::Unauthorized)?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::BadRequest("Invalid Authorization header".into()))?;

        let token = auth_str
            .strip_prefix("Bearer ")
            .map(str::trim)
            .ok_or_else(|| AppError::BadRequest("Invalid Authorization scheme".into()))?;

        let Some(secret) = state.jwt_secret.as_deref() else {
            tracing::warn!("rejecting authenticated request: no JWT secret configured");
            return Err(AppError::Unauthorized);
        };

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(secret.as_bytes()),
            &Validation::default(),
        )
        .map_err(|err| {
            tracing::debug!(error = %err, "token rejected");
            AppError::Unauthorized
        })?;

        if decoded.claims.sub.is_empty() {
            return Err(AppError::Unauthorized);
        }

        Ok(AuthUser {
            user_id: decoded.claims.sub,
            name: decoded.claims.name,
            email: decoded.claims.email,
            phone_number: decoded.claims.phone_number,
        })
    }
}
