//! HTTP handlers for vendor profile endpoints.

use axum::extract::{Json, Query, State};
use axum::response::IntoResponse;

use crate::application::handlers::{
    GetVendorProfileQuery, SaveVendorProfileCommand, SearchVendorsQuery,
};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::domain::vendor::VendorProfileDraft;

use super::super::error::ApiError;
use super::super::middleware::RequireAuth;
use super::super::state::AppState;
use super::dto::{SearchParams, VendorProfileResponse};

/// GET /api/vendors?search=
pub async fn search_vendors(
    State(state): State<AppState>,
    RequireAuth(_user): RequireAuth,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, ApiError> {
    let profiles = state
        .search_vendors_handler()
        .handle(SearchVendorsQuery {
            search: params.search,
        })
        .await?;

    let response: Vec<VendorProfileResponse> =
        profiles.into_iter().map(VendorProfileResponse::from).collect();
    Ok(Json(response))
}

/// GET /api/vendors/me
pub async fn get_own_profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state
        .get_vendor_handler()
        .handle(GetVendorProfileQuery { user_id: user.id })
        .await?
        .ok_or_else(|| DomainError::new(ErrorCode::VendorNotFound, "No vendor profile yet"))?;

    Ok(Json(VendorProfileResponse::from(profile)))
}

/// PUT /api/vendors/me
pub async fn save_own_profile(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(draft): Json<VendorProfileDraft>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state
        .save_vendor_handler()
        .handle(SaveVendorProfileCommand {
            user_id: user.id,
            draft,
        })
        .await?;

    Ok(Json(VendorProfileResponse::from(profile)))
}
