//! Vendor profile repository port.

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::vendor::VendorProfile;
use async_trait::async_trait;

#[async_trait]
pub trait VendorRepository: Send + Sync {
    /// Insert or replace the owner's profile (one per user).
    async fn upsert(&self, profile: &VendorProfile) -> Result<(), DomainError>;

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<VendorProfile>, DomainError>;

    /// All profiles, newest first.
    async fn list_newest_first(&self) -> Result<Vec<VendorProfile>, DomainError>;
}
