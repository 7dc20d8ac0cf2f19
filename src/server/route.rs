use crate::model::League;
use crate::store::{PlayerStore, StoreError};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::sync::Arc;
use tracing::{debug, info, instrument};

pub type SharedStore = Arc<dyn PlayerStore>;

/// Routes:
/// - `GET /players/:name` returns the score as plain text, `404` for unknown players
/// - `POST /players/:name` records a win and returns `202`
/// - `GET /league` returns the league as JSON
///
/// `/players/` with an empty name matches no route and gets `404`.
pub fn create_player_route(store: SharedStore) -> Router {
    Router::new()
        .route("/players/:name", get(get_player_score).post(record_win))
        .route("/league", get(get_league))
        .with_state(store)
}

#[instrument(skip(store))]
async fn get_player_score(
    State(store): State<SharedStore>,
    Path(name): Path<String>,
) -> Result<Response, StoreError> {
    let score = store.get_player_score(&name).await?;
    let status = if score == 0 {
        debug!("Player not found");
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };
    Ok((status, score.to_string()).into_response())
}

#[instrument(skip(store))]
async fn record_win(
    State(store): State<SharedStore>,
    Path(name): Path<String>,
) -> Result<StatusCode, StoreError> {
    store.record_win(&name).await?;
    info!("Win recorded");
    Ok(StatusCode::ACCEPTED)
}

#[instrument(skip(store))]
async fn get_league(State(store): State<SharedStore>) -> Result<Json<League>, StoreError> {
    let league = store.get_league().await?;
    debug!(player_count = league.len(), "Serving league");
    Ok(Json(league))
}
