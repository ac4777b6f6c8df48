//! Authentication adapters.
//!
//! Implementations of the `SessionValidator` port:
//!
//! - `StaticTokenValidator` - Bearer tokens configured as `token=user_id` pairs
//! - `MockSessionValidator` - Test implementation

mod mock;
mod static_tokens;

pub use mock::MockSessionValidator;
pub use static_tokens::StaticTokenValidator;
