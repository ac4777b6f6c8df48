//! SaveVendorProfileHandler - Creates or updates the caller's vendor profile.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::vendor::{VendorProfile, VendorProfileDraft};
use crate::ports::VendorRepository;

#[derive(Debug, Clone)]
pub struct SaveVendorProfileCommand {
    pub user_id: UserId,
    pub draft: VendorProfileDraft,
}

pub struct SaveVendorProfileHandler {
    vendors: Arc<dyn VendorRepository>,
}

impl SaveVendorProfileHandler {
    pub fn new(vendors: Arc<dyn VendorRepository>) -> Self {
        Self { vendors }
    }

    pub async fn handle(&self, cmd: SaveVendorProfileCommand) -> Result<VendorProfile, DomainError> {
        let profile = match self.vendors.find_by_user(&cmd.user_id).await? {
            Some(mut existing) => {
                existing.apply(cmd.draft)?;
                existing
            }
            None => VendorProfile::create(cmd.user_id, cmd.draft)?,
        };

        self.vendors.upsert(&profile).await?;
        tracing::info!(vendor_id = %profile.id, "Vendor profile saved");
        Ok(profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::InMemoryPlannerStore;
    use crate::domain::foundation::ErrorCode;

    fn draft(name: &str) -> VendorProfileDraft {
        VendorProfileDraft {
            business_name: name.to_string(),
            category: "Catering".to_string(),
            location: Some("Porto".to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn second_save_updates_same_profile() {
        let store = Arc::new(InMemoryPlannerStore::new());
        let handler = SaveVendorProfileHandler::new(store.clone());
        let user_id = UserId::new("vendor-1").unwrap();

        let created = handler
            .handle(SaveVendorProfileCommand {
                user_id: user_id.clone(),
                draft: draft("Tasty Bites"),
            })
            .await
            .unwrap();
        let updated = handler
            .handle(SaveVendorProfileCommand {
                user_id: user_id.clone(),
                draft: draft("Tastier Bites"),
            })
            .await
            .unwrap();

        assert_eq!(created.id, updated.id);
        assert_eq!(created.created_at, updated.created_at);
        assert_eq!(updated.business_name, "Tastier Bites");
        assert_eq!(store.list_newest_first().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn missing_business_name_is_rejected() {
        let store = Arc::new(InMemoryPlannerStore::new());
        let handler = SaveVendorProfileHandler::new(store.clone());

        let err = handler
            .handle(SaveVendorProfileCommand {
                user_id: UserId::new("vendor-1").unwrap(),
                draft: draft(""),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert!(store.list_newest_first().await.unwrap().is_empty());
    }
}
