//! Vendor profile handlers.

mod get_vendor_profile;
mod save_vendor_profile;
mod search_vendors;

pub use get_vendor_profile::{GetVendorProfileHandler, GetVendorProfileQuery};
pub use save_vendor_profile::{SaveVendorProfileCommand, SaveVendorProfileHandler};
pub use search_vendors::{SearchVendorsHandler, SearchVendorsQuery};
