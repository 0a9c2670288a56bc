use http::header::HeaderName;
use http::{HeaderValue, Method};
use scribe_config::CorsConfig;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};

/// Build a Tower CORS layer for the browser editor
///
/// Only the methods the editor endpoints use are allowed. Unparseable
/// origins and header names are skipped with a warning.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let mut layer = CorsLayer::new().allow_methods([Method::GET, Method::POST, Method::OPTIONS]);

    layer = if config.any_origin() {
        layer.allow_origin(AllowOrigin::any())
    } else {
        let origins: Vec<HeaderValue> = config
            .origins
            .iter()
            .filter_map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .inspect_err(|_| tracing::warn!(%origin, "ignoring invalid CORS origin"))
                    .ok()
            })
            .collect();
        layer.allow_origin(origins)
    };

    layer = if config.any_header() {
        layer.allow_headers(AllowHeaders::any())
    } else {
        let headers: Vec<HeaderName> = config
            .headers
            .iter()
            .filter_map(|name| {
                name.parse::<HeaderName>()
                    .inspect_err(|_| tracing::warn!(%name, "ignoring invalid CORS header"))
                    .ok()
            })
            .collect();
        layer.allow_headers(headers)
    };

    if let Some(duration) = config.max_age_duration() {
        layer = layer.max_age(duration);
    }

    layer
}
