//! Locale routing middleware.
//!
//! Every page is served under a `/{locale}` prefix. Requests for a page path
//! without a supported prefix are redirected to the same path under the
//! locale negotiated from `Accept-Language`. API routes, internal assets and
//! anything that looks like a file pass through untouched.

use crate::i18n::{negotiate, LocaleRegistry};
use axum::{
    body::Body,
    extract::State,
    http::{
        header::{ACCEPT_LANGUAGE, LOCATION},
        HeaderValue, Request, StatusCode,
    },
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Prefix of routes served by this application that are not pages.
pub const API_PREFIX: &str = "/api";

/// Prefix of assets served by this application itself.
pub const ASSET_PREFIX: &str = "/static";

/// Outcome of routing one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Serve the request as is
    PassThrough,

    /// Send the client to `location`
    Redirect {
        location: String,
        status: StatusCode,
    },
}

/// Stateless locale router; cheap to share between requests.
#[derive(Debug, Clone)]
pub struct LocaleRouter {
    registry: LocaleRegistry,
    api_prefixes: Vec<String>,
    asset_prefixes: Vec<String>,
}

/// True if `path` is `prefix` itself or lies below it.
fn is_under(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

impl LocaleRouter {
    /// Router with the default exempt prefixes ([`API_PREFIX`], [`ASSET_PREFIX`]).
    pub fn new(registry: LocaleRegistry) -> Self {
        Self {
            registry,
            api_prefixes: vec![API_PREFIX.to_string()],
            asset_prefixes: vec![ASSET_PREFIX.to_string()],
        }
    }

    /// Exempt another non-page prefix from localization.
    pub fn with_api_prefix(mut self, prefix: &str) -> Self {
        self.api_prefixes.push(prefix.trim_end_matches('/').to_string());
        self
    }

    /// Exempt another asset prefix from localization.
    pub fn with_asset_prefix(mut self, prefix: &str) -> Self {
        self.asset_prefixes.push(prefix.trim_end_matches('/').to_string());
        self
    }

    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    fn is_asset(&self, path: &str) -> bool {
        self.asset_prefixes.iter().any(|prefix| is_under(path, prefix))
    }

    fn is_exempt(&self, path: &str) -> bool {
        self.is_asset(path) || self.api_prefixes.iter().any(|prefix| is_under(path, prefix))
    }

    /// True if the first path segment is a supported locale tag.
    pub fn has_locale(&self, path: &str) -> bool {
        let first = path.trim_start_matches('/').split('/').next().unwrap_or("");
        self.registry.is_supported(first)
    }

    /// Decide what to do with a request.
    ///
    /// # Arguments
    /// * `path` - Request path, starting with `/`
    /// * `query` - Raw query string without `?`, copied to the redirect
    /// * `accept_language` - Raw `Accept-Language` value, if any
    pub fn route(
        &self,
        path: &str,
        query: Option<&str>,
        accept_language: Option<&str>,
    ) -> RouteDecision {
        if path.contains('.') && !self.is_asset(path) {
            return RouteDecision::PassThrough;
        }
        if self.is_exempt(path) || self.has_locale(path) {
            return RouteDecision::PassThrough;
        }

        let language = negotiate(accept_language, &self.registry);

        let mut location = if path.is_empty() || path == "/" {
            format!("/{}/", language.code())
        } else {
            format!("/{}{}", language.code(), path)
        };
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            location.push('?');
            location.push_str(query);
        }

        RouteDecision::Redirect {
            location,
            status: StatusCode::TEMPORARY_REDIRECT,
        }
    }
}

/// axum middleware applying [`LocaleRouter::route`] to every request.
pub async fn localize(
    State(router): State<Arc<LocaleRouter>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let uri = request.uri();
    let accept_language = request
        .headers()
        .get(ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok());

    match router.route(uri.path(), uri.query(), accept_language) {
        RouteDecision::PassThrough => next.run(request).await,
        RouteDecision::Redirect { location, status } => {
            debug!("Redirecting {} to {}", uri.path(), location);
            match HeaderValue::from_str(&location) {
                Ok(value) => (status, [(LOCATION, value)]).into_response(),
                Err(e) => {
                    warn!("Cannot redirect {} ({}), serving as is", uri.path(), e);
                    next.run(request).await
                }
            }
        }
    }
}
