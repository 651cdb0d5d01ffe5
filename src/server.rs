//! HTTP server: shared state, routing table and graceful shutdown.

use crate::api::ApiClient;
use crate::config::Config;
use crate::handlers;
use crate::locale_router::{localize, LocaleRouter};
use anyhow::{Context, Result};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let api = ApiClient::new(&config.api_base_url);
        Self { config, api }
    }
}

pub type SharedState = Arc<AppState>;

/// Build the application router.
///
/// Page routes all start with `/:locale`. The locale middleware wraps every
/// route and the fallback, so unprefixed page paths are redirected before
/// routing.
pub fn build_router(state: SharedState) -> Router {
    let locale_router = Arc::new(LocaleRouter::new(state.config.locales.clone()));

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/static/style.css", get(handlers::stylesheet))
        .route("/:locale", get(handlers::home))
        .route("/:locale/", get(handlers::home))
        .route(
            "/:locale/create-event",
            get(handlers::create_event_page).post(handlers::create_event),
        )
        // Public event page
        .route("/:locale/event/:uuid", get(handlers::event_details))
        .route("/:locale/event/:uuid/ics", get(handlers::event_ics))
        .route("/:locale/event/:uuid/comments", post(handlers::add_comment))
        .route(
            "/:locale/event/:uuid/comments/:comment_uuid/delete",
            post(handlers::delete_comment),
        )
        // Event administration
        .route(
            "/:locale/event/:uuid/:edit_uuid",
            get(handlers::event_admin).post(handlers::update_event),
        )
        .route(
            "/:locale/event/:uuid/:edit_uuid/delete",
            post(handlers::delete_event),
        )
        .route(
            "/:locale/event/:uuid/:edit_uuid/participants/:participant_id/delete",
            post(handlers::remove_participant),
        )
        .route(
            "/:locale/event/:uuid/:edit_uuid/invitations",
            post(handlers::create_invitation),
        )
        .route(
            "/:locale/event/:uuid/:edit_uuid/invitations/:invitation_uuid/delete",
            post(handlers::delete_invitation),
        )
        .route(
            "/:locale/event/:uuid/:edit_uuid/personalized-invitations",
            post(handlers::create_personalized_invitation),
        )
        .route(
            "/:locale/event/:uuid/:edit_uuid/personalized-invitations/:invitation_uuid/delete",
            post(handlers::delete_personalized_invitation),
        )
        // Invitations
        .route(
            "/:locale/invitation/accept/:invitation_uuid",
            get(handlers::accept_invitation_page).post(handlers::accept_invitation),
        )
        .route(
            "/:locale/personalized-invitation/accept/:invitation_uuid",
            get(handlers::accept_personalized_invitation_page)
                .post(handlers::accept_personalized_invitation),
        )
        .fallback(handlers::not_found)
        .with_state(state)
        .layer(middleware::from_fn_with_state(locale_router, localize))
        .layer(TraceLayer::new_for_http())
}

/// Bind to `0.0.0.0:{port}` and serve until SIGINT or SIGTERM.
pub async fn run(config: Config) -> Result<()> {
    let address = format!("0.0.0.0:{}", config.port);
    let app = build_router(Arc::new(AppState::new(config)));

    info!("Binding to {}", address);
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;
    info!("Server running on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
