use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};

use wolf_core::{
    HoleRecord, HoleResult, PlayerMedals, PlayerName, PlayerScores, RoundRecord, Scorecard,
};

use crate::config::LimitsConfig;
use crate::error::AppError;
use crate::round_store::StoredRound;
use crate::state::AppState;

/// Validate the player list against configured limits.
///
/// The engine itself accepts any names; the host refuses names it could not
/// display and rosters larger than it is configured for.
fn validate_players(players: &[PlayerName], limits: &LimitsConfig) -> Result<(), AppError> {
    if players.is_empty() {
        return Err(AppError::BadRequest("No players provided".to_string()));
    }
    if players.len() > limits.max_players {
        return Err(AppError::BadRequest(format!(
            "Too many players: {} (max {})",
            players.len(),
            limits.max_players
        )));
    }
    for name in players {
        if name.trim().is_empty() {
            return Err(AppError::BadRequest("Player name is empty".to_string()));
        }
        if name.chars().count() > limits.max_name_len {
            return Err(AppError::BadRequest(format!(
                "Player name exceeds {} chars",
                limits.max_name_len
            )));
        }
    }
    Ok(())
}

fn validate_hole_count(holes: usize, limits: &LimitsConfig) -> Result<(), AppError> {
    if holes == 0 {
        return Err(AppError::BadRequest("Round needs at least one hole".to_string()));
    }
    if holes > limits.max_holes {
        return Err(AppError::BadRequest(format!(
            "Too many holes: {holes} (max {})",
            limits.max_holes
        )));
    }
    Ok(())
}

fn round_not_found(id: &str) -> AppError {
    AppError::NotFound(format!("Round {id} not found"))
}

/// Request body for a one-off scorecard computation.
#[derive(Debug, Deserialize)]
pub struct ScorecardRequest {
    pub players: Vec<PlayerName>,
    pub scores: Vec<HoleRecord>,
}

/// POST /api/v1/scorecard — score hole records without storing anything.
pub async fn post_scorecard(
    State(state): State<AppState>,
    Json(body): Json<ScorecardRequest>,
) -> Result<Json<Scorecard>, AppError> {
    let limits = &state.config.limits;
    validate_players(&body.players, limits)?;
    if body.scores.len() > limits.max_holes {
        return Err(AppError::BadRequest(format!(
            "Too many holes: {} (max {})",
            body.scores.len(),
            limits.max_holes
        )));
    }
    let card = Scorecard::compute_with(&body.players, &body.scores, &state.config.scoring)?;
    Ok(Json(card))
}

/// Request body for starting a round.
#[derive(Debug, Deserialize)]
pub struct CreateRoundBody {
    pub players: Vec<PlayerName>,
    pub holes: usize,
}

/// A stored round together with its freshly computed scorecard.
#[derive(Debug, Serialize)]
pub struct RoundResponse {
    pub id: String,
    pub round: RoundRecord,
    pub scorecard: Scorecard,
}

impl RoundResponse {
    fn build(stored: &StoredRound, state: &AppState) -> Result<Self, AppError> {
        let scorecard = Scorecard::compute_with(
            &stored.round.players,
            &stored.round.scores,
            &state.config.scoring,
        )?;
        Ok(Self {
            id: stored.id.clone(),
            round: stored.round.clone(),
            scorecard,
        })
    }
}

/// POST /api/v1/rounds — start a new round.
pub async fn create_round(
    State(state): State<AppState>,
    Json(body): Json<CreateRoundBody>,
) -> Result<(StatusCode, Json<RoundResponse>), AppError> {
    let limits = &state.config.limits;
    validate_players(&body.players, limits)?;
    validate_hole_count(body.holes, limits)?;

    let round = RoundRecord::new(body.players, body.holes)?;
    let mut store = state.rounds.write().await;
    let id = store.insert(round);
    tracing::info!(round_id = %id, holes = body.holes, "Round created");

    let stored = store.get(&id).ok_or_else(|| round_not_found(&id))?;
    Ok((StatusCode::CREATED, Json(RoundResponse::build(stored, &state)?)))
}

/// POST /api/v1/rounds/import — store a saved round from its JSON snapshot.
pub async fn import_round(
    State(state): State<AppState>,
    body: String,
) -> Result<(StatusCode, Json<RoundResponse>), AppError> {
    let round = RoundRecord::decode(&body)?;
    let limits = &state.config.limits;
    validate_players(&round.players, limits)?;
    validate_hole_count(round.declared_holes(), limits)?;
    let round = round.repaired(&state.config.scoring)?;

    let mut store = state.rounds.write().await;
    let id = store.insert(round);
    tracing::info!(round_id = %id, "Round imported");

    let stored = store.get(&id).ok_or_else(|| round_not_found(&id))?;
    Ok((StatusCode::CREATED, Json(RoundResponse::build(stored, &state)?)))
}

/// Summary of a round for the history list.
#[derive(Debug, Serialize)]
pub struct RoundSummary {
    pub id: String,
    pub date: String,
    pub players: Vec<PlayerName>,
    pub holes: usize,
    pub holes_played: usize,
    pub in_progress: bool,
    pub total_scores: PlayerScores,
    pub wolf_scores: PlayerScores,
    pub medals: PlayerMedals,
}

impl From<&StoredRound> for RoundSummary {
    fn from(stored: &StoredRound) -> Self {
        let round = &stored.round;
        let medals = match wolf_core::medals(&round.players, &round.wolf_scores) {
            Ok(medals) => medals,
            Err(e) => {
                tracing::warn!(
                    round_id = %stored.id,
                    error = %e,
                    "Cached Wolf scores unusable, listing without medals"
                );
                PlayerMedals::new()
            },
        };
        Self {
            id: stored.id.clone(),
            date: round.date.clone(),
            players: round.players.clone(),
            holes: round.holes,
            holes_played: round.holes_played(),
            in_progress: round.in_progress,
            total_scores: round.total_scores.clone(),
            wolf_scores: round.wolf_scores.clone(),
            medals,
        }
    }
}

/// GET /api/v1/rounds — round history, newest first.
pub async fn list_rounds(State(state): State<AppState>) -> Json<Vec<RoundSummary>> {
    let store = state.rounds.read().await;
    Json(store.history().into_iter().map(RoundSummary::from).collect())
}

/// GET /api/v1/rounds/{id}
pub async fn get_round(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RoundResponse>, AppError> {
    let store = state.rounds.read().await;
    let stored = store.get(&id).ok_or_else(|| round_not_found(&id))?;
    Ok(Json(RoundResponse::build(stored, &state)?))
}

/// GET /api/v1/rounds/{id}/export — the round's JSON snapshot.
pub async fn export_round(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, AppError> {
    let store = state.rounds.read().await;
    let stored = store.get(&id).ok_or_else(|| round_not_found(&id))?;
    stored
        .round
        .to_json()
        .map_err(|e| AppError::Internal(e.to_string()))
}

/// Request body for entering one player's result on a hole.
#[derive(Debug, Deserialize)]
pub struct SetResultBody {
    pub player: PlayerName,
    /// Stored tag: a label name, `Custom:<n>`, or `""` to clear.
    pub result: HoleResult,
}

/// PUT /api/v1/rounds/{id}/holes/{hole} — enter or clear a result.
pub async fn set_hole_result(
    State(state): State<AppState>,
    Path((id, hole)): Path<(String, usize)>,
    Json(body): Json<SetResultBody>,
) -> Result<Json<RoundResponse>, AppError> {
    let mut store = state.rounds.write().await;
    let stored = store.get_mut(&id).ok_or_else(|| round_not_found(&id))?;
    if !stored.round.in_progress {
        return Err(AppError::Conflict(format!("Round {id} is finished")));
    }

    // Score the edit on a copy so a rejected edit leaves the stored round intact.
    let mut edited = stored.round.clone();
    edited.set_result(hole, &body.player, body.result)?;
    edited.refresh_scores(&state.config.scoring)?;
    stored.round = edited;
    tracing::debug!(round_id = %id, hole, player = %body.player, result = %body.result, "Hole result set");

    Ok(Json(RoundResponse::build(stored, &state)?))
}

/// POST /api/v1/rounds/{id}/finish — close the round to further edits.
pub async fn finish_round(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RoundResponse>, AppError> {
    let mut store = state.rounds.write().await;
    let stored = store.get_mut(&id).ok_or_else(|| round_not_found(&id))?;
    if !stored.round.is_complete() {
        tracing::info!(round_id = %id, "Finishing round with unentered holes");
    }
    stored.round.finish();
    stored.round.refresh_scores(&state.config.scoring)?;
    Ok(Json(RoundResponse::build(stored, &state)?))
}

/// DELETE /api/v1/rounds/{id}
pub async fn delete_round(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let mut store = state.rounds.write().await;
    if store.remove(&id) {
        tracing::info!(round_id = %id, "Round deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(round_not_found(&id))
    }
}
