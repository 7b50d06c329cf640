//! Identity provider module.

mod r#trait;
pub use r#trait::IdentityProvider;

mod mock;
pub use mock::MockIdentityProvider;
