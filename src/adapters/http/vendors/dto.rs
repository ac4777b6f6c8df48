//! HTTP DTOs for vendor profile endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::vendor::VendorProfile;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchParams {
    pub search: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VendorProfileResponse {
    pub id: String,
    pub business_name: String,
    pub category: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub price_range: Option<String>,
    pub rating: Option<f64>,
    pub created_at: String,
}

impl From<VendorProfile> for VendorProfileResponse {
    fn from(profile: VendorProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            business_name: profile.business_name,
            category: profile.category,
            description: profile.description,
            location: profile.location,
            price_range: profile.price_range,
            rating: profile.rating,
            created_at: profile.created_at.to_rfc3339(),
        }
    }
}
