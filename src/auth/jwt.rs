use chrono::Duration;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    auth::claims::Claims,
    errors::{AppError, AppResult},
    models::domain::Role,
};

/// Issues and verifies the signed identity tokens handed out on signup and login.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    lifetime: Duration,
}

impl JwtService {
    pub fn new(secret: &SecretString, expiration_hours: i64) -> Self {
        Self::with_lifetime(secret, Duration::hours(expiration_hours))
    }

    pub fn with_lifetime(secret: &SecretString, lifetime: Duration) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();
        let mut validation = Validation::default();
        validation.leeway = 0;

        Self {
            encoding_key: EncodingKey::from_secret(secret_bytes),
            decoding_key: DecodingKey::from_secret(secret_bytes),
            validation,
            lifetime,
        }
    }

    pub fn issue(&self, username: &str, role: Role) -> AppResult<String> {
        let claims = Claims::new(username, role, self.lifetime);

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to create JWT: {}", e)))
    }

    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::InvalidToken("token has expired".to_string()),
                ErrorKind::InvalidSignature => {
                    AppError::InvalidToken("signature is invalid".to_string())
                }
                _ => AppError::InvalidToken(e.to_string()),
            })
    }
}
