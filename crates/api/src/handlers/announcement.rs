//! Handlers for the `/announcements` resource.
//!
//! Residents get the published feed for their audience; admins draft,
//! edit, publish, and delete. The feed maps roles to audiences: owners
//! see `owners` posts, tenants see `tenants` posts, everyone sees `all`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use strata_core::error::CoreError;
use strata_core::pagination::{clamp_limit, clamp_offset};
use strata_core::roles::{audience_for_role, ROLE_ADMIN};
use strata_core::statuses::{validate_choice, ANNOUNCEMENT_AUDIENCES, ANNOUNCEMENT_KINDS};
use strata_core::types::DbId;
use strata_db::models::announcement::{Announcement, CreateAnnouncement, UpdateAnnouncement};
use strata_db::repositories::AnnouncementRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::resolve_condominium;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::query::{DEFAULT_LIMIT, MAX_LIMIT};
use crate::response::DataResponse;
use crate::state::AppState;

// ---- Request types ----

/// Query parameters for `GET /announcements`.
#[derive(Debug, Deserialize)]
pub struct ListAnnouncementsQuery {
    /// Admin-only override; everyone else gets their own condominium.
    pub condominium_id: Option<DbId>,
    /// Admin-only: include unpublished drafts.
    #[serde(default)]
    pub include_drafts: bool,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

// ---- Handlers ----

/// GET /api/v1/announcements
///
/// Published, unexpired announcements for the caller's audience, newest
/// first. Admins may pass `?include_drafts=true` for the full list.
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListAnnouncementsQuery>,
) -> AppResult<Json<DataResponse<Vec<Announcement>>>> {
    let condominium_id = match params.condominium_id {
        Some(id) if auth.role == ROLE_ADMIN => id,
        _ => resolve_condominium(&state, auth.user_id).await?,
    };
    let limit = clamp_limit(params.limit, DEFAULT_LIMIT, MAX_LIMIT);

    if params.include_drafts {
        if auth.role != ROLE_ADMIN {
            return Err(AppError::Core(CoreError::Forbidden(
                "Admin role required to view drafts".into(),
            )));
        }
        let offset = clamp_offset(params.offset);
        let announcements =
            AnnouncementRepo::list_for_condominium(&state.pool, condominium_id, limit, offset)
                .await?;
        return Ok(Json(DataResponse {
            data: announcements,
        }));
    }

    let audience = audience_for_role(&auth.role);
    let announcements =
        AnnouncementRepo::list_published(&state.pool, condominium_id, audience, limit).await?;
    Ok(Json(DataResponse {
        data: announcements,
    }))
}

/// GET /api/v1/announcements/{id}
///
/// Drafts are only visible to admins; everyone else gets a 404.
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Announcement>> {
    let announcement = AnnouncementRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(announcement_not_found(id))?;
    if !announcement.is_published && auth.role != ROLE_ADMIN {
        return Err(announcement_not_found(id));
    }
    Ok(Json(announcement))
}

/// POST /api/v1/announcements
///
/// Drafts an announcement authored by the acting admin. Drafts start
/// unpublished.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Json(input): Json<CreateAnnouncement>,
) -> AppResult<(StatusCode, Json<Announcement>)> {
    input.validate()?;
    if let Some(kind) = &input.kind {
        validate_choice("kind", kind, &ANNOUNCEMENT_KINDS)?;
    }
    if let Some(audience) = &input.audience {
        validate_choice("audience", audience, &ANNOUNCEMENT_AUDIENCES)?;
    }
    let announcement = AnnouncementRepo::create(&state.pool, admin.user_id, &input).await?;
    Ok((StatusCode::CREATED, Json(announcement)))
}

/// PUT /api/v1/announcements/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAnnouncement>,
) -> AppResult<Json<Announcement>> {
    input.validate()?;
    if let Some(kind) = &input.kind {
        validate_choice("kind", kind, &ANNOUNCEMENT_KINDS)?;
    }
    if let Some(audience) = &input.audience {
        validate_choice("audience", audience, &ANNOUNCEMENT_AUDIENCES)?;
    }
    let announcement = AnnouncementRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(announcement_not_found(id))?;
    Ok(Json(announcement))
}

/// POST /api/v1/announcements/{id}/publish
pub async fn publish(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<Json<Announcement>> {
    let announcement = AnnouncementRepo::publish(&state.pool, id)
        .await?
        .ok_or(announcement_not_found(id))?;
    Ok(Json(announcement))
}

/// DELETE /api/v1/announcements/{id}
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = AnnouncementRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(announcement_not_found(id))
    }
}

// ---- Helpers ----

fn announcement_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Announcement",
        id,
    })
}
