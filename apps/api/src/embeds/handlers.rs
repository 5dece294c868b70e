use axum::{extract::State, Json};

use crate::embeds::Embed;
use crate::state::AppState;

/// GET /api/v1/embeds
pub async fn handle_list_embeds(State(state): State<AppState>) -> Json<Vec<Embed>> {
    Json(state.embeds.as_ref().clone())
}
