mod handlers;
pub mod middleware;

use std::sync::Arc;

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use briefing_core::{BriefingComposer, ProjectRepository};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::extraction::KeywordExtractor;

pub use handlers::{AnalyzePdfRequest, BriefingListItem, SelectBriefingInput};
pub use middleware::SecurityConfig;

/// Shared state for all handlers.
///
/// The repository is process-scoped: restarting the server starts with an
/// empty briefing list.
#[derive(Clone)]
pub struct AppState {
    pub repository: ProjectRepository,
    pub composer: Arc<BriefingComposer>,
    pub extractor: Option<Arc<dyn KeywordExtractor>>,
}

impl AppState {
    pub fn new(composer: BriefingComposer) -> Self {
        Self {
            repository: ProjectRepository::new(),
            composer: Arc::new(composer),
            extractor: None,
        }
    }

    pub fn with_extractor(mut self, extractor: impl KeywordExtractor + 'static) -> Self {
        self.extractor = Some(Arc::new(extractor));
        self
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(BriefingComposer::default())
    }
}

pub fn create_router(state: AppState, security: SecurityConfig) -> Router {
    let api = Router::new()
        // Briefings
        .route(
            "/briefings",
            get(handlers::list_briefings).post(handlers::create_briefing),
        )
        .route(
            "/briefings/{id}",
            get(handlers::get_briefing)
                .put(handlers::update_briefing)
                .delete(handlers::delete_briefing),
        )
        .route("/briefings/{id}/export", get(handlers::export_briefing))
        // Current selection
        .route(
            "/current",
            get(handlers::get_current)
                .put(handlers::set_current)
                .delete(handlers::clear_current),
        )
        // Keyword extraction
        .route("/analyze-pdf", post(handlers::analyze_pdf))
        .route_layer(from_fn_with_state(security, middleware::auth_middleware))
        // Health (never behind auth)
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api/v1", api)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
