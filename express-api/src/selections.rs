use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use express_order::{BookingSummary, PassengerDetails, Selection, ToggleOutcome};
use express_shared::FareClass;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SelectClassRequest {
    pub train_id: String,
    pub fare_class: FareClass,
}

#[derive(Debug, Serialize)]
pub struct SeatResponse {
    pub number: u32,
    pub available: bool,
    pub selected: bool,
}

#[derive(Debug, Serialize)]
pub struct SelectionResponse {
    pub id: Uuid,
    pub train_id: Option<String>,
    pub train_number: Option<String>,
    pub fare_class: Option<FareClass>,
    pub class_label: Option<&'static str>,
    pub seat_map: Vec<SeatResponse>,
    pub seats: Vec<u32>,
    pub seats_label: String,
    pub unit_price: Option<i32>,
    pub total_price: i32,
    /// Whether the customer may continue to the booking form
    pub can_continue: bool,
}

impl From<&Selection> for SelectionResponse {
    fn from(selection: &Selection) -> Self {
        Self {
            id: selection.id,
            train_id: selection.train.as_ref().map(|t| t.id.clone()),
            train_number: selection.train.as_ref().map(|t| t.number.clone()),
            fare_class: selection.fare_class,
            class_label: selection.fare_class.map(|c| c.label()),
            seat_map: selection
                .seat_map
                .iter()
                .map(|seat| SeatResponse {
                    number: seat.number,
                    available: seat.available,
                    selected: selection.is_selected(seat.number),
                })
                .collect(),
            seats: selection.seats.clone(),
            seats_label: selection.seats_label(),
            unit_price: selection.unit_price(),
            total_price: selection.total_price(),
            can_continue: !selection.seats.is_empty(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ToggleSeatResponse {
    pub outcome: ToggleOutcome,
    pub selection: SelectionResponse,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/selections", post(create_selection))
        .route("/v1/selections/{id}", get(get_selection).delete(delete_selection))
        .route("/v1/selections/{id}/class", put(select_class))
        .route("/v1/selections/{id}/seats/{number}", post(toggle_seat))
        .route("/v1/selections/{id}/booking", post(prepare_booking))
}

/// POST /v1/selections
async fn create_selection(
    State(state): State<AppState>,
) -> (StatusCode, Json<SelectionResponse>) {
    let selection = state.selections.lock().await.create();
    info!("Selection {} created", selection.id);

    (StatusCode::CREATED, Json(SelectionResponse::from(&selection)))
}

/// GET /v1/selections/{id}
async fn get_selection(
    State(state): State<AppState>,
    Path(selection_id): Path<Uuid>,
) -> Result<Json<SelectionResponse>, AppError> {
    let selections = state.selections.lock().await;
    let selection = selections.get(&selection_id)
        .ok_or_else(|| AppError::NotFoundError(format!("Selection {} not found", selection_id)))?;

    Ok(Json(SelectionResponse::from(selection)))
}

/// PUT /v1/selections/{id}/class
/// Draws a new seat grid for the chosen class and clears chosen seats
async fn select_class(
    State(state): State<AppState>,
    Path(selection_id): Path<Uuid>,
    Json(req): Json<SelectClassRequest>,
) -> Result<Json<SelectionResponse>, AppError> {
    let train = state.train_repo.get_train(&req.train_id).await?
        .ok_or_else(|| AppError::NotFoundError(format!("Train {} not found", req.train_id)))?;

    // Lock order: selections, then generator. The grid is drawn only once the request is accepted.
    let mut selections = state.selections.lock().await;
    let mut generator = state.seat_generator.lock().await;
    let selection = selections.select_class(&selection_id, train, req.fare_class, |offer| {
        generator.generate_for(offer)
    })?;
    info!(
        "Selection {}: train {} class {}",
        selection_id, req.train_id, req.fare_class
    );

    Ok(Json(SelectionResponse::from(selection)))
}

/// POST /v1/selections/{id}/seats/{number}
/// Adds or removes a seat; taken seats are left alone
async fn toggle_seat(
    State(state): State<AppState>,
    Path((selection_id, seat_number)): Path<(Uuid, u32)>,
) -> Result<Json<ToggleSeatResponse>, AppError> {
    let mut selections = state.selections.lock().await;
    let (outcome, selection) = selections.toggle_seat(&selection_id, seat_number)?;

    Ok(Json(ToggleSeatResponse {
        outcome,
        selection: SelectionResponse::from(selection),
    }))
}

/// POST /v1/selections/{id}/booking
/// Summary for the booking dialog. Nothing is reserved, stored or charged.
async fn prepare_booking(
    State(state): State<AppState>,
    Path(selection_id): Path<Uuid>,
    Json(passenger): Json<PassengerDetails>,
) -> Result<Json<BookingSummary>, AppError> {
    let selections = state.selections.lock().await;
    let selection = selections.get(&selection_id)
        .ok_or_else(|| AppError::NotFoundError(format!("Selection {} not found", selection_id)))?;

    let summary = BookingSummary::from_selection(selection, passenger)?;
    info!(
        "Booking summary for selection {}: train {} seats [{}] total {}",
        selection_id, summary.train_number, summary.seats_label, summary.total_price
    );

    Ok(Json(summary))
}

/// DELETE /v1/selections/{id}
async fn delete_selection(
    State(state): State<AppState>,
    Path(selection_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.selections.lock().await.remove(&selection_id)?;
    Ok(StatusCode::NO_CONTENT)
}
