use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};

use service::heroes::{CreatePolicy, Hero};

use crate::errors::ApiError;
use crate::routes::auth::ServerState;

/// Item-route ids must be purely numeric; anything else is not found.
fn is_numeric_id(id: &str) -> bool {
    !id.is_empty() && id.bytes().all(|b| b.is_ascii_digit())
}

/// GET /heros — snapshot of all records.
pub async fn list_heroes(State(state): State<ServerState>) -> Json<Vec<Hero>> {
    Json(state.heroes.list().await)
}

/// GET /heros/{id}
pub async fn get_hero(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Hero>, ApiError> {
    if !is_numeric_id(&id) {
        return Err(ApiError::not_found());
    }
    match state.heroes.get(&id).await {
        Some(hero) => Ok(Json(hero)),
        None => Err(ApiError::not_found()),
    }
}

/// POST /heros — upsert under the default policy; the `reject` policy turns
/// an existing id into a conflict.
pub async fn create_hero(
    State(state): State<ServerState>,
    body: Result<Json<Hero>, JsonRejection>,
) -> Result<Json<Hero>, ApiError> {
    let Json(hero) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    if state.create_policy == CreatePolicy::Reject && state.heroes.contains(&hero.id).await {
        return Err(ApiError::conflict("id already exists"));
    }
    state.heroes.put(hero.clone()).await;
    Ok(Json(hero))
}

/// PUT /heros — update only; unknown ids are not found. The existence check
/// and the write are separate critical sections.
pub async fn update_hero(
    State(state): State<ServerState>,
    body: Result<Json<Hero>, JsonRejection>,
) -> Result<Json<Hero>, ApiError> {
    let Json(hero) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    if !state.heroes.contains(&hero.id).await {
        return Err(ApiError::not_found());
    }
    state.heroes.put(hero.clone()).await;
    Ok(Json(hero))
}

/// DELETE /heros/{id} — absent keys are still 204.
pub async fn delete_hero(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    if !is_numeric_id(&id) {
        return Err(ApiError::not_found());
    }
    state.heroes.delete(&id).await;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::is_numeric_id;

    #[test]
    fn numeric_id_predicate() {
        assert!(is_numeric_id("1"));
        assert!(is_numeric_id("007"));
        assert!(!is_numeric_id("12a"));
        assert!(!is_numeric_id("a12"));
        assert!(!is_numeric_id(""));
        assert!(!is_numeric_id("１２"));
    }
}
