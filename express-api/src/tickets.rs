use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use express_core::{Ticket, TicketAction, TicketStatus};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TicketsQuery {
    pub status: Option<String>,
}

impl TicketsQuery {
    /// Missing or empty means no filter
    fn status_filter(&self) -> Result<Option<TicketStatus>, AppError> {
        match self.status.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(code) => Ok(Some(code.parse::<TicketStatus>()?)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TicketResponse {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub class_label: &'static str,
    pub status_label: &'static str,
    pub actions: &'static [TicketAction],
}

impl From<Ticket> for TicketResponse {
    fn from(ticket: Ticket) -> Self {
        Self {
            class_label: ticket.fare_class.label(),
            status_label: ticket.status.label(),
            actions: ticket.status.actions(),
            ticket,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/tickets", get(list_tickets))
        .route("/v1/tickets/{id}", get(get_ticket))
}

/// GET /v1/tickets?status=active
async fn list_tickets(
    State(state): State<AppState>,
    Query(query): Query<TicketsQuery>,
) -> Result<Json<Vec<TicketResponse>>, AppError> {
    let status = query.status_filter()?;
    let tickets = state.ticket_repo.list_tickets(status).await?;

    Ok(Json(tickets.into_iter().map(TicketResponse::from).collect()))
}

/// GET /v1/tickets/{id}
async fn get_ticket(
    State(state): State<AppState>,
    Path(ticket_id): Path<String>,
) -> Result<Json<TicketResponse>, AppError> {
    let ticket = state.ticket_repo.get_ticket(&ticket_id).await?
        .ok_or_else(|| AppError::NotFoundError(format!("Ticket {} not found", ticket_id)))?;

    Ok(Json(TicketResponse::from(ticket)))
}
