//! GetVendorProfileHandler - Query handler for the caller's own vendor profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::vendor::VendorProfile;
use crate::ports::VendorRepository;

#[derive(Debug, Clone)]
pub struct GetVendorProfileQuery {
    pub user_id: UserId,
}

pub struct GetVendorProfileHandler {
    vendors: Arc<dyn VendorRepository>,
}

impl GetVendorProfileHandler {
    pub fn new(vendors: Arc<dyn VendorRepository>) -> Self {
        Self { vendors }
    }

    pub async fn handle(
        &self,
        query: GetVendorProfileQuery,
    ) -> Result<Option<VendorProfile>, DomainError> {
        self.vendors.find_by_user(&query.user_id).await
    }
}
