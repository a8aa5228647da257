use crate::auth::jwt::verify_token;
use crate::config::Config;
use crate::models::Claims;
use actix_web::middleware::Next;
use actix_web::{
    Error, HttpMessage, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    error::ErrorInternalServerError,
    http::header::AUTHORIZATION,
    web::Data,
};
use serde_json::json;
use tracing::{debug, warn};

fn reject(req: ServiceRequest, message: &str) -> ServiceResponse<BoxBody> {
    warn!(path = %req.path(), message, "Rejected unauthenticated request");
    let resp = HttpResponse::Unauthorized().json(json!({ "message": message }));
    req.into_response(resp.map_into_boxed_body())
}

/// Extracts and verifies the bearer token of a request.
fn bearer_claims(req: &ServiceRequest, secret: &str) -> Result<Claims, &'static str> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .ok_or("Missing Authorization header")?
        .to_str()
        .map_err(|_| "Invalid Authorization header encoding")?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or("Authorization header must start with Bearer")?;

    verify_token(token, secret).map_err(|e| {
        debug!(error = %e, "Token verification failed");
        "Invalid or expired token"
    })
}

/// Bearer-token check for the `/api` scope. A no-op unless `REQUIRE_AUTH`
/// is set, so the dashboard can also run without signing in first.
pub async fn auth_middleware(
    req: ServiceRequest,
    next: Next<BoxBody>,
) -> Result<ServiceResponse<BoxBody>, Error> {
    let config = req
        .app_data::<Data<Config>>()
        .ok_or_else(|| ErrorInternalServerError("App config missing"))?
        .clone();

    if !config.require_auth {
        return next.call(req).await;
    }

    match bearer_claims(&req, &config.jwt_secret) {
        Ok(claims) => {
            debug!(user = %claims.sub, role = %claims.role, "Authorized request");
            req.extensions_mut().insert(claims);
            next.call(req).await
        }
        Err(message) => Ok(reject(req, message)),
    }
}
