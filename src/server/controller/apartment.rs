use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        apartment::{ApartmentDto, CreateApartmentDto, SearchQuery, UpdateApartmentDto},
    },
    server::{
        controller::util::get_user::require_user, error::Error, model::app::AppState,
        service::apartment::ApartmentService,
    },
};

pub static APARTMENT_TAG: &str = "apartments";

/// List all apartments ordered by floor then unit
#[utoipa::path(
    get,
    path = "/api/apartments",
    tag = APARTMENT_TAG,
    responses(
        (status = 200, description = "All apartments", body = Vec<ApartmentDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_apartments(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let apartments = ApartmentService::new(&state.db).list().await?;

    Ok(Json(apartments))
}

/// Get an apartment by ID
#[utoipa::path(
    get,
    path = "/api/apartments/{id}",
    tag = APARTMENT_TAG,
    params(("id" = i32, Path, description = "Apartment ID")),
    responses(
        (status = 200, description = "Apartment found", body = ApartmentDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_apartment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let apartment = ApartmentService::new(&state.db).get(id).await?;

    Ok(Json(apartment))
}

/// List the apartments on one floor
#[utoipa::path(
    get,
    path = "/api/apartments/floor/{floor}",
    tag = APARTMENT_TAG,
    params(("floor" = i32, Path, description = "Floor number, 1 through 15")),
    responses(
        (status = 200, description = "Apartments on the floor", body = Vec<ApartmentDto>),
        (status = 400, description = "Floor out of range", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_apartments_by_floor(
    State(state): State<AppState>,
    session: Session,
    Path(floor): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let apartments = ApartmentService::new(&state.db)
        .list_by_floor(floor)
        .await?;

    Ok(Json(apartments))
}

/// Search apartments by owner name, email or phone
#[utoipa::path(
    get,
    path = "/api/apartments/search",
    tag = APARTMENT_TAG,
    params(SearchQuery),
    responses(
        (status = 200, description = "Matching apartments", body = Vec<ApartmentDto>),
        (status = 400, description = "Empty search term", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_apartments(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<SearchQuery>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let apartments = ApartmentService::new(&state.db).search(&query.term).await?;

    Ok(Json(apartments))
}

/// Register an apartment
#[utoipa::path(
    post,
    path = "/api/apartments",
    tag = APARTMENT_TAG,
    request_body = CreateApartmentDto,
    responses(
        (status = 201, description = "Apartment created", body = ApartmentDto),
        (status = 400, description = "Invalid apartment details", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_apartment(
    State(state): State<AppState>,
    session: Session,
    Json(apartment): Json<CreateApartmentDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let apartment = ApartmentService::new(&state.db).create(apartment).await?;

    Ok((StatusCode::CREATED, Json(apartment)))
}

/// Update an apartment, omitted fields are left unchanged
#[utoipa::path(
    put,
    path = "/api/apartments/{id}",
    tag = APARTMENT_TAG,
    params(("id" = i32, Path, description = "Apartment ID")),
    request_body = UpdateApartmentDto,
    responses(
        (status = 200, description = "Apartment updated", body = ApartmentDto),
        (status = 400, description = "Invalid apartment details", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_apartment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(changes): Json<UpdateApartmentDto>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    let apartment = ApartmentService::new(&state.db).update(id, changes).await?;

    Ok(Json(apartment))
}

/// Delete an apartment that has no recorded payments
#[utoipa::path(
    delete,
    path = "/api/apartments/{id}",
    tag = APARTMENT_TAG,
    params(("id" = i32, Path, description = "Apartment ID")),
    responses(
        (status = 200, description = "Apartment deleted", body = SuccessDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Apartment not found", body = ErrorDto),
        (status = 409, description = "Apartment has recorded payments", body = ErrorDto),
        (status = 503, description = "Database not available", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_apartment(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_user(&state, &session).await?;

    ApartmentService::new(&state.db).delete(id).await?;

    Ok(Json(SuccessDto { success: true }))
}
