use tower_http::cors::{Any, CorsLayer};
use tracing::warn;

use crate::config::CorsConfig;

/// Build a CORS layer from config.
///
/// # Panics
///
/// Panics if `allow_credentials` is `true` while `allowed_origins` contains
/// `"*"` — the CORS specification forbids that combination and browsers
/// reject the response.
pub fn build_cors_layer(cfg: &CorsConfig) -> CorsLayer {
    let has_wildcard_origin = cfg.allowed_origins.iter().any(|o| o == "*");

    assert!(
        !(has_wildcard_origin && cfg.allow_credentials),
        "CORS misconfiguration: allowed_origins=['*'] cannot be combined with \
         allow_credentials=true. Specify explicit origins when using credentials."
    );

    if has_wildcard_origin {
        warn!(
            "CORS is configured with allowed_origins=['*']; any website may call \
             the API cross-origin"
        );
    }

    let mut layer = CorsLayer::new();

    if has_wildcard_origin {
        layer = layer.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cfg
            .allowed_origins
            .iter()
            .filter_map(|s| http::HeaderValue::from_str(s).ok())
            .collect();
        if !origins.is_empty() {
            layer = layer.allow_origin(origins);
        }
    }

    if cfg.allowed_methods.iter().any(|m| m == "*") {
        layer = layer.allow_methods(Any);
    } else {
        let methods: Vec<http::Method> = cfg
            .allowed_methods
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !methods.is_empty() {
            layer = layer.allow_methods(methods);
        }
    }

    if cfg.allowed_headers.iter().any(|h| h == "*") {
        layer = layer.allow_headers(Any);
    } else {
        let headers: Vec<http::HeaderName> = cfg
            .allowed_headers
            .iter()
            .filter_map(|s| s.parse().ok())
            .collect();
        if !headers.is_empty() {
            layer = layer.allow_headers(headers);
        }
    }

    if cfg.allow_credentials {
        layer = layer.allow_credentials(true);
    }

    if cfg.max_age_seconds > 0 {
        layer = layer.max_age(std::time::Duration::from_secs(cfg.max_age_seconds));
    }

    layer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_permissive_layer() {
        let _layer = build_cors_layer(&CorsConfig::default());
    }

    #[test]
    #[should_panic(expected = "CORS misconfiguration")]
    fn wildcard_origin_with_credentials_panics() {
        let cfg = CorsConfig {
            allow_credentials: true,
            ..CorsConfig::default()
        };
        let _layer = build_cors_layer(&cfg);
    }
}
