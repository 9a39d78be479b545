//! Request handlers for the condominium management API.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the corresponding repository in `strata_db` and map
//! errors via [`AppError`]; domain rules (fee arithmetic, reservation slots,
//! status vocabularies) come from `strata_core`.

pub mod access_log;
pub mod admin;
pub mod alert;
pub mod amenity;
pub mod announcement;
pub mod auth;
pub mod camera;
pub mod condominium;
pub mod dashboard;
pub mod fee;
pub mod fee_schedule;
pub mod finance;
pub mod maintenance;
pub mod notification;
pub mod payment;
pub mod payment_method;
pub mod profile;
pub mod reservation;
pub mod unit;
pub mod unit_type;
pub mod visitor;

use strata_core::error::CoreError;
use strata_core::types::DbId;
use strata_db::models::user::User;
use strata_db::repositories::UserRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Load the caller's user row, or 404 if it no longer exists.
pub(crate) async fn load_user(state: &AppState, user_id: DbId) -> AppResult<User> {
    UserRepo::find_by_id(&state.pool, user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: user_id,
        }))
}

/// Resolve the condominium the caller belongs to.
///
/// Most resident- and staff-facing endpoints are scoped to the caller's own
/// condominium; a user without one cannot use them.
pub(crate) async fn resolve_condominium(state: &AppState, user_id: DbId) -> AppResult<DbId> {
    let user = load_user(state, user_id).await?;
    user.condominium_id.ok_or_else(|| {
        AppError::Core(CoreError::Validation(
            "User is not assigned to a condominium".into(),
        ))
    })
}
