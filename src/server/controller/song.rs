use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        song::{CreateSongDto, SongDto, UpdateSongDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::song::{CreateSongParams, UpdateSongParams},
        service::song::SongService,
        state::AppState,
    },
};

/// Tag for grouping song endpoints in OpenAPI documentation
pub static SONG_TAG: &str = "song";

/// List a band's songs ordered by title.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the band
#[utoipa::path(
    get,
    path = "/api/songs/band/{band_id}",
    tag = SONG_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    responses(
        (status = 200, description = "Band songs", body = Vec<SongDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_band_songs(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(band_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::BandMember(band_id)])
        .await?;

    let songs = SongService::new(&state.db).list(band_id).await?;

    let songs: Vec<SongDto> = songs.into_iter().map(|s| s.into_dto()).collect();

    Ok((StatusCode::OK, Json(songs)))
}

/// Add a song to a band's catalogue.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the band
///
/// # Returns
/// - `201 Created` - The new song
/// - `400 Bad Request` - Blank title or non-positive duration or tempo
#[utoipa::path(
    post,
    path = "/api/songs/band/{band_id}",
    tag = SONG_TAG,
    params(
        ("band_id" = i32, Path, description = "Band ID")
    ),
    request_body = CreateSongDto,
    responses(
        (status = 201, description = "Song created", body = SongDto),
        (status = 400, description = "Invalid song data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn create_song(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(band_id): Path<i32>,
    Json(payload): Json<CreateSongDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.jwt, &headers)
        .require(&[Permission::BandMember(band_id)])
        .await?;

    let params = CreateSongParams::from_dto(band_id, payload);
    let song = SongService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(song.into_dto())))
}

/// Get a song.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the song's band
#[utoipa::path(
    get,
    path = "/api/songs/{id}",
    tag = SONG_TAG,
    params(
        ("id" = i32, Path, description = "Song ID")
    ),
    responses(
        (status = 200, description = "Song", body = SongDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 404, description = "Song not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn get_song(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt, &headers);
    let user = guard.require(&[]).await?;

    let song = SongService::new(&state.db).get(id).await?;

    guard
        .check(user.id, &[Permission::BandMember(song.band_id)])
        .await?;

    Ok((StatusCode::OK, Json(song.into_dto())))
}

/// Update a song.
///
/// # Access Control
/// - `BandMember` - Caller must belong to the song's band
#[utoipa::path(
    put,
    path = "/api/songs/{id}",
    tag = SONG_TAG,
    params(
        ("id" = i32, Path, description = "Song ID")
    ),
    request_body = UpdateSongDto,
    responses(
        (status = 200, description = "Song updated", body = SongDto),
        (status = 400, description = "Invalid song data", body = ValidationErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member of this band", body = ErrorDto),
        (status = 404, description = "Song not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn update_song(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateSongDto>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt, &headers);
    let user = guard.require(&[]).await?;

    let service = SongService::new(&state.db);
    let existing = service.get(id).await?;

    guard
        .check(user.id, &[Permission::BandMember(existing.band_id)])
        .await?;

    let params = UpdateSongParams::from_dto(id, payload);
    let song = service.update(params).await?;

    Ok((StatusCode::OK, Json(song.into_dto())))
}

/// Delete a song. It is dropped from every setlist that used it.
///
/// # Access Control
/// - `BandLeader` - Caller must lead the song's band
#[utoipa::path(
    delete,
    path = "/api/songs/{id}",
    tag = SONG_TAG,
    params(
        ("id" = i32, Path, description = "Song ID")
    ),
    responses(
        (status = 204, description = "Song deleted"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not a leader of this band", body = ErrorDto),
        (status = 404, description = "Song not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearer" = [])),
)]
pub async fn delete_song(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let guard = AuthGuard::new(&state.db, &state.jwt, &headers);
    let user = guard.require(&[]).await?;

    let service = SongService::new(&state.db);
    let existing = service.get(id).await?;

    guard
        .check(user.id, &[Permission::BandLeader(existing.band_id)])
        .await?;

    service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
