//! Equipment catalog route.

#[cfg(test)]
#[path = "equipment_test.rs"]
mod equipment_test;

use axum::extract::State;
use axum::response::Json;
use sandbox::catalog::EquipmentResponse;

use crate::state::AppState;

/// `GET /equipment` — the catalog of equipment blocks, in display order.
pub async fn list_equipment(State(state): State<AppState>) -> Json<EquipmentResponse> {
    tracing::debug!(count = state.catalog.len(), "serving equipment catalog");
    Json(EquipmentResponse { equipment: state.catalog.to_vec() })
}
