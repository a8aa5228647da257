use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::Error};
use uuid::Uuid;

use crate::{model::role::Role, models::Claims};

fn now() -> usize {
    Utc::now().timestamp().max(0) as usize
}

pub fn generate_session_token(
    username: String,
    role: Role,
    secret: &str,
    ttl: usize,
) -> Result<(String, Claims), Error> {
    let claims = Claims {
        sub: username,
        role,
        exp: now() + ttl,
        jti: Uuid::new_v4().to_string(),
    };

    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )?;

    Ok((token, claims))
}

pub fn verify_token(token: &str, secret: &str) -> Result<Claims, Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_verifies_with_same_secret_only() {
        let (token, claims) =
            generate_session_token("admin@company.com".into(), Role::Admin, "s3cret", 60).unwrap();

        let decoded = verify_token(&token, "s3cret").unwrap();
        assert_eq!(decoded.sub, "admin@company.com");
        assert_eq!(decoded.role, Role::Admin);
        assert_eq!(decoded.jti, claims.jti);

        assert!(verify_token(&token, "other").is_err());
    }
}
