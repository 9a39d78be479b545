//! Handlers for the `/payment-methods` resource.
//!
//! Payment methods are deactivated through `PUT` with `is_active`,
//! never deleted, so historical payments keep a valid reference.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use strata_core::error::CoreError;
use strata_core::types::DbId;
use strata_db::models::payment_method::{CreatePaymentMethod, PaymentMethod, UpdatePaymentMethod};
use strata_db::repositories::PaymentMethodRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::handlers::resolve_condominium;
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAdmin;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /payment-methods`.
#[derive(Debug, Deserialize)]
pub struct ListMethodsQuery {
    pub condominium_id: Option<DbId>,
    #[serde(default)]
    pub include_inactive: bool,
}

/// GET /api/v1/payment-methods
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<ListMethodsQuery>,
) -> AppResult<Json<DataResponse<Vec<PaymentMethod>>>> {
    let condominium_id = match params.condominium_id {
        Some(id) => id,
        None => resolve_condominium(&state, auth.user_id).await?,
    };
    let methods = PaymentMethodRepo::list_for_condominium(
        &state.pool,
        condominium_id,
        params.include_inactive,
    )
    .await?;
    Ok(Json(DataResponse { data: methods }))
}

/// GET /api/v1/payment-methods/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<PaymentMethod>> {
    let method = PaymentMethodRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(method_not_found(id))?;
    Ok(Json(method))
}

/// POST /api/v1/payment-methods
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Json(input): Json<CreatePaymentMethod>,
) -> AppResult<(StatusCode, Json<PaymentMethod>)> {
    input.validate()?;
    let method = PaymentMethodRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(method)))
}

/// PUT /api/v1/payment-methods/{id}
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<UpdatePaymentMethod>,
) -> AppResult<Json<PaymentMethod>> {
    input.validate()?;
    let method = PaymentMethodRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(method_not_found(id))?;
    Ok(Json(method))
}

fn method_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Payment method",
        id,
    })
}
