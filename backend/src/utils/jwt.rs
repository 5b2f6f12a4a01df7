use anyhow::anyhow;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // user_id
    pub role: String,
    pub exp: i64,    // expiration time
    pub iat: i64,    // issued at
    pub jti: String, // JWT ID
}

impl Claims {
    pub fn new(user_id: String, role: String, expiration_hours: u64) -> anyhow::Result<Self> {
        let lifetime = i64::try_from(expiration_hours)
            .ok()
            .and_then(Duration::try_hours)
            .ok_or_else(|| anyhow!("Token lifetime of {} hours is out of range", expiration_hours))?;
        let now = Utc::now();
        let exp = now
            .checked_add_signed(lifetime)
            .ok_or_else(|| anyhow!("Token lifetime of {} hours is out of range", expiration_hours))?;

        Ok(Self {
            sub: user_id,
            role,
            exp: exp.timestamp(),
            iat: now.timestamp(),
            jti: Uuid::new_v4().to_string(),
        })
    }
}

pub fn create_access_token(
    user_id: String,
    role: String,
    secret: &str,
    expiration_hours: u64,
) -> anyhow::Result<String> {
    let claims = Claims::new(user_id, role, expiration_hours)?;
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_ref()),
    )?;

    Ok(token)
}

pub fn verify_access_token(token: &str, secret: &str) -> anyhow::Result<Claims> {
    let validation = Validation::default();
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_ref()),
        &validation,
    )?;

    Ok(token_data.claims)
}
