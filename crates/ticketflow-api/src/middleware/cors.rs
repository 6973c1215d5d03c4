use axum::{
    extract::{Request, State},
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, ACCESS_CONTROL_MAX_AGE, ORIGIN, VARY,
        },
        HeaderMap, HeaderValue, Method, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::{config::CorsConfig, state::AppState};

const ALLOWED_METHODS: &str = "GET, POST, OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type, Authorization";

/// CORS for browser clients.
///
/// Answers every `OPTIONS` preflight with 204 and stamps the CORS headers on
/// every other response, errors included. With `enabled = false` the origin
/// list is ignored and any origin is allowed.
pub async fn apply_cors(
    State(state): State<Arc<AppState>>,
    req: Request,
    next: Next,
) -> Response {
    let cors = &state.config.cors;
    let origin = req.headers().get(ORIGIN).cloned();

    let mut response = if req.method() == Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };

    insert_cors_headers(response.headers_mut(), cors, origin.as_ref());
    response
}

fn insert_cors_headers(headers: &mut HeaderMap, cors: &CorsConfig, origin: Option<&HeaderValue>) {
    if allows_any_origin(cors) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    } else if let Some(origin) = origin.filter(|o| is_listed(cors, o)) {
        headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, origin.clone());
        headers.append(VARY, HeaderValue::from_static("origin"));
    }

    headers.insert(ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOWED_METHODS));
    headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOWED_HEADERS));
    headers.insert(ACCESS_CONTROL_MAX_AGE, HeaderValue::from(cors.max_age_secs));
}

fn allows_any_origin(cors: &CorsConfig) -> bool {
    !cors.enabled || cors.origins.iter().any(|o| o == "*")
}

fn is_listed(cors: &CorsConfig, origin: &HeaderValue) -> bool {
    origin
        .to_str()
        .map(|o| cors.origins.iter().any(|allowed| allowed == o))
        .unwrap_or(false)
}
