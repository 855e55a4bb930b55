use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{NaiveDate, NaiveTime};
use express_core::{FareOffer, SearchQuery, Train};
use express_shared::FareClass;
use serde::Serialize;
use tracing::info;

use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub route: String,
    pub date: Option<NaiveDate>,
    pub trains: Vec<TrainResponse>,
}

#[derive(Debug, Serialize)]
pub struct TrainResponse {
    pub id: String,
    pub number: String,
    pub departure: NaiveTime,
    pub arrival: NaiveTime,
    pub duration: String,
    pub classes: Vec<FareClassResponse>,
}

#[derive(Debug, Serialize)]
pub struct FareClassResponse {
    pub fare_class: FareClass,
    pub label: &'static str,
    pub available: u32,
    pub price: i32,
    /// False when sold out; the class cannot be chosen
    pub bookable: bool,
}

impl FareClassResponse {
    fn new(fare_class: FareClass, offer: &FareOffer) -> Self {
        Self {
            fare_class,
            label: fare_class.label(),
            available: offer.available,
            price: offer.price,
            bookable: offer.is_bookable(),
        }
    }
}

impl From<&Train> for TrainResponse {
    fn from(train: &Train) -> Self {
        Self {
            id: train.id.clone(),
            number: train.number.clone(),
            departure: train.departure,
            arrival: train.arrival,
            duration: train.duration.clone(),
            classes: train
                .fares
                .iter()
                .map(|(class, offer)| FareClassResponse::new(class, offer))
                .collect(),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/trains/search", post(search_trains))
        .route("/v1/trains/{id}", get(get_train))
}

/// POST /v1/trains/search
/// The sample timetable is returned for any complete query
async fn search_trains(
    State(state): State<AppState>,
    Json(query): Json<SearchQuery>,
) -> Result<Json<SearchResponse>, AppError> {
    query.validate()?;

    let trains = state.train_repo.list_trains().await?;
    info!("Search {} on {:?}: {} trains", query.route_label(), query.date, trains.len());

    Ok(Json(SearchResponse {
        route: query.route_label(),
        date: query.date,
        trains: trains.iter().map(TrainResponse::from).collect(),
    }))
}

/// GET /v1/trains/{id}
async fn get_train(
    State(state): State<AppState>,
    Path(train_id): Path<String>,
) -> Result<Json<TrainResponse>, AppError> {
    let train = state.train_repo.get_train(&train_id).await?
        .ok_or_else(|| AppError::NotFoundError(format!("Train {} not found", train_id)))?;

    Ok(Json(TrainResponse::from(&train)))
}
