//! Profile lookup module.

mod r#trait;
pub use r#trait::ProfileStore;

mod mock;
pub use mock::{LookupResponse, MockProfileStore};
