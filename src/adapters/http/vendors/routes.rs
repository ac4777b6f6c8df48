//! Axum router configuration for vendor profile endpoints.

use axum::{routing::get, Router};

use super::super::state::AppState;
use super::handlers::{get_own_profile, save_own_profile, search_vendors};

/// Create the vendor router, mounted at `/api`.
///
/// # Routes
/// - `GET /vendors?search=` - Browse profiles, newest first
/// - `GET /vendors/me` - Own profile
/// - `PUT /vendors/me` - Create or update own profile
pub fn vendor_routes() -> Router<AppState> {
    Router::new()
        .route("/vendors", get(search_vendors))
        .route("/vendors/me", get(get_own_profile).put(save_own_profile))
}
