use crate::chat::advisor::AdvisorChat;
use crate::planner::service::DegreePlannerService;

/// Shared application state injected into all route handlers via Axum extractors.
/// Every service is constructed once in `main` and cloned cheaply per request.
#[derive(Clone)]
pub struct AppState {
    pub planner: DegreePlannerService,
    pub advisor: AdvisorChat,
}
