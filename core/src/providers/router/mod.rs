//! Router module.

mod r#trait;
pub use r#trait::Router;

mod mock;
pub use mock::MockRouter;
