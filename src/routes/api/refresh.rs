use axum::extract::State;
use axum::Json;

use crate::state::refresh::RefreshOutcome;
use crate::state::SharedState;

pub(super) async fn post(State(state): SharedState) -> Json<RefreshOutcome> {
    Json(state.refresh_posts().await)
}
