//! Session middleware for Axum
//!
//! Every request gets a [`RequestContext`] in its extensions. A valid
//! `Authorization: Bearer <token>` header makes it a customer session;
//! anything else (no header, bad signature, expired token) is anonymous.
//! Handlers decide what an anonymous caller may do; those that require a
//! login take [`CurrentCustomer`], which answers 401 before the body is read.

use axum::{
    body::Body,
    extract::{FromRequestParts, State},
    http::{header, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::domain::DomainError;
use crate::infrastructure::crypto::jwt::{verify_token, JwtConfig, SessionClaims};
use crate::interfaces::http::common::{domain_error, ApiError};

/// State for the session middleware
#[derive(Clone)]
pub struct SessionState {
    pub jwt_config: JwtConfig,
}

/// The logged-in customer behind a request
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionCustomer {
    pub customer_id: i32,
}

impl SessionCustomer {
    fn from_claims(claims: &SessionClaims) -> Option<Self> {
        Some(Self {
            customer_id: claims.customer_id()?,
        })
    }
}

/// Per-request identity. Extract with `Extension<RequestContext>`.
#[derive(Clone, Debug, Default)]
pub struct RequestContext {
    pub customer: Option<SessionCustomer>,
}

impl RequestContext {
    pub fn customer_id(&self) -> Option<i32> {
        self.customer.as_ref().map(|c| c.customer_id)
    }
}

fn extract_token(auth_header: &str) -> Option<&str> {
    auth_header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolve the session for a raw `Authorization` header value
pub fn resolve_session(auth_header: Option<&str>, jwt_config: &JwtConfig) -> RequestContext {
    let customer = auth_header
        .and_then(extract_token)
        .and_then(|token| match verify_token(token, jwt_config) {
            Ok(claims) => SessionCustomer::from_claims(&claims),
            Err(e) => {
                debug!(error = %e, "Ignoring invalid session token");
                None
            }
        });

    RequestContext { customer }
}

/// Extractor for endpoints that require a logged-in customer.
///
/// Parts-only, so it runs ahead of any body extractor: an anonymous caller
/// gets 401 whatever the body looks like.
#[derive(Clone, Debug)]
pub struct CurrentCustomer(pub SessionCustomer);

impl<S> FromRequestParts<S> for CurrentCustomer
where
    S: Send + Sync,
{
    type Rejection = ApiError<()>;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<RequestContext>()
            .and_then(|ctx| ctx.customer.clone())
            .map(CurrentCustomer)
            .ok_or_else(|| domain_error(DomainError::Unauthorized("Please log in first".into())))
    }
}

/// Attach a [`RequestContext`] to every request. Never rejects.
pub async fn session_middleware(
    State(state): State<SessionState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let context = resolve_session(auth_header, &state.jwt_config);
    request.extensions_mut().insert(context);

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::crypto::jwt::create_token;

    fn config() -> JwtConfig {
        JwtConfig {
            secret: "middleware-secret".into(),
            expiration_hours: 1,
            issuer: "table-booking".into(),
        }
    }

    #[test]
    fn bearer_token_becomes_customer_session() {
        let cfg = config();
        let token = create_token(5, "Lena", &cfg).unwrap();
        let header = format!("Bearer {}", token);

        let ctx = resolve_session(Some(&header), &cfg);
        assert_eq!(ctx.customer, Some(SessionCustomer { customer_id: 5 }));
        assert_eq!(ctx.customer_id(), Some(5));
    }

    #[test]
    fn missing_or_malformed_header_is_anonymous() {
        let cfg = config();
        assert!(resolve_session(None, &cfg).customer.is_none());
        assert!(resolve_session(Some("Basic abc"), &cfg).customer.is_none());
        assert!(resolve_session(Some("Bearer "), &cfg).customer.is_none());
        assert!(resolve_session(Some("Bearer not-a-jwt"), &cfg).customer.is_none());
    }

    #[tokio::test]
    async fn current_customer_requires_a_session() {
        let (mut parts, _) = Request::new(()).into_parts();
        let err = CurrentCustomer::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert_eq!(err.0, axum::http::StatusCode::UNAUTHORIZED);

        parts.extensions.insert(RequestContext::default());
        assert!(CurrentCustomer::from_request_parts(&mut parts, &()).await.is_err());

        parts.extensions.insert(RequestContext {
            customer: Some(SessionCustomer { customer_id: 9 }),
        });
        let CurrentCustomer(customer) = CurrentCustomer::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(customer.customer_id, 9);
    }

    #[test]
    fn token_from_another_secret_is_anonymous() {
        let other = JwtConfig {
            secret: "different".into(),
            ..config()
        };
        let token = create_token(5, "Lena", &other).unwrap();
        let header = format!("Bearer {}", token);
        assert!(resolve_session(Some(&header), &config()).customer.is_none());
    }
}
