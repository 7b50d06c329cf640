//! Domain entities representing core console objects.

pub mod profile;
pub mod session;

// Re-export commonly used types
pub use profile::{DealershipRole, Profile};
pub use session::{Session, SessionUser};
