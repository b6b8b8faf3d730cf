use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::{
    application::cities::{CityDto, MessageResponse},
    infrastructure::monitoring::{
        CITIES_GET_ALL_COUNTER, CITIES_GET_ALL_TIMER, CITIES_POST_COUNTER, CITIES_POST_TIMER,
    },
    presentation::http::{errors::AppError, extract::ValidatedJson, state::AppState},
};

pub async fn create_city(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CityDto>,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    let response = state
        .metrics
        .time(CITIES_POST_TIMER, state.city_service.create_new_city(dto))
        .await?;

    state.metrics.increment_counter(CITIES_POST_COUNTER).await;
    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn list_cities(State(state): State<AppState>) -> Result<Json<Vec<CityDto>>, AppError> {
    let cities = state
        .metrics
        .time(CITIES_GET_ALL_TIMER, async {
            state.metrics.increment_counter(CITIES_GET_ALL_COUNTER).await;
            state.city_service.get_all_cities().await
        })
        .await?;

    Ok(Json(cities))
}

pub async fn get_city(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CityDto>, AppError> {
    Ok(Json(state.city_service.get_city_by_id(id).await?))
}

pub async fn get_city_by_name(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CityDto>, AppError> {
    Ok(Json(state.city_service.get_city_by_name(&name).await?))
}

pub async fn update_city(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(dto): ValidatedJson<CityDto>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(state.city_service.update_city_by_id(id, dto).await?))
}

/// Answers 200 with the confirmation message rather than 204.
pub async fn delete_city(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    Ok(Json(state.city_service.delete_city_by_id(id).await?))
}
