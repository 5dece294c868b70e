use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::knowledge::{section_content, SectionContent};
use crate::models::section::SectionId;
use crate::navigation::{PageTransition, ViewSnapshot};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct NavigateRequest {
    pub section: SectionId,
}

#[derive(Deserialize)]
pub struct ScrollRequest {
    pub offset: f64,
}

#[derive(Serialize)]
pub struct NavigationResponse {
    pub transition: PageTransition,
    pub view: ViewSnapshot,
}

/// GET /api/v1/sessions/:id/view
pub async fn handle_get_view(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ViewSnapshot>, AppError> {
    let session = state.sessions.get(id).await?;
    let snapshot = session.view.lock().snapshot();
    Ok(Json(snapshot))
}

/// POST /api/v1/sessions/:id/view/navigate
///
/// Unknown section names never reach here; the JSON extractor rejects them.
pub async fn handle_navigate(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<NavigateRequest>,
) -> Result<Json<NavigationResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    let response = {
        let mut view = session.view.lock();
        let transition = view.navigate(req.section);
        NavigationResponse {
            transition,
            view: view.snapshot(),
        }
    };
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/view/enter
pub async fn handle_enter(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NavigationResponse>, AppError> {
    let session = state.sessions.get(id).await?;
    let response = {
        let mut view = session.view.lock();
        let transition = view.enter_from_cover();
        NavigationResponse {
            transition,
            view: view.snapshot(),
        }
    };
    Ok(Json(response))
}

/// POST /api/v1/sessions/:id/view/menu
pub async fn handle_toggle_menu(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ViewSnapshot>, AppError> {
    let session = state.sessions.get(id).await?;
    let snapshot = {
        let mut view = session.view.lock();
        view.toggle_menu();
        view.snapshot()
    };
    Ok(Json(snapshot))
}

/// POST /api/v1/sessions/:id/view/scroll
pub async fn handle_scroll(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ScrollRequest>,
) -> Result<Json<ViewSnapshot>, AppError> {
    if !req.offset.is_finite() {
        return Err(AppError::Validation("offset must be a finite number".to_string()));
    }
    let session = state.sessions.get(id).await?;
    let snapshot = {
        let mut view = session.view.lock();
        view.record_scroll(req.offset);
        view.snapshot()
    };
    Ok(Json(snapshot))
}

/// GET /api/v1/sections/:section
pub async fn handle_get_section(Path(section): Path<SectionId>) -> Json<SectionContent> {
    Json(section_content(section))
}
