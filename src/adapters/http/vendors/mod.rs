//! HTTP adapter for vendor profiles.

mod dto;
mod handlers;
mod routes;

pub use dto::{SearchParams, VendorProfileResponse};
pub use routes::vendor_routes;
