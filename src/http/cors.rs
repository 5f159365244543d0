use crate::cli::Args;
use http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

pub fn layer(args: &Args) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(allowed_origins(args))
        .allow_headers([
            http::header::USER_AGENT,
            http::header::REFERER,
            http::header::ORIGIN,
            http::header::ACCESS_CONTROL_REQUEST_METHOD,
            http::header::ACCESS_CONTROL_REQUEST_HEADERS,
            http::header::CONTENT_TYPE,
            http::HeaderName::from_static("sec-fetch-mode"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

/// A `*` entry allows every origin.
fn allowed_origins(args: &Args) -> AllowOrigin {
    if args.allowed_origins.iter().any(|origin| origin == "*") {
        return AllowOrigin::any();
    }
    let origins = args
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring the allowed origin `{origin}`: not a valid header value.");
                None
            }
        })
        .collect::<Vec<_>>();
    AllowOrigin::list(origins)
}
