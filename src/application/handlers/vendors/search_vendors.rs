//! SearchVendorsHandler - Public vendor directory with free-text search.

use std::sync::Arc;

use crate::domain::foundation::DomainError;
use crate::domain::vendor::{filter_profiles, VendorProfile};
use crate::ports::VendorRepository;

#[derive(Debug, Clone, Default)]
pub struct SearchVendorsQuery {
    pub search: Option<String>,
}

pub struct SearchVendorsHandler {
    vendors: Arc<dyn VendorRepository>,
}

impl SearchVendorsHandler {
    pub fn new(vendors: Arc<dyn VendorRepository>) -> Self {
        Self { vendors }
    }

    /// Newest profiles first.
    pub async fn handle(&self, query: SearchVendorsQuery) -> Result<Vec<VendorProfile>, DomainError> {
        let profiles = self.vendors.list_newest_first().await?;
        Ok(filter_profiles(profiles, query.search.as_deref()))
    }
}
