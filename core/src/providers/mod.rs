//! Provider interfaces for the external collaborators the coordinator
//! consumes: the identity provider, the profile lookup service, and the
//! router. Each seam ships a mock implementation used by the service tests
//! and available to downstream consumers.

pub mod identity;
pub mod profile;
pub mod router;

pub use identity::{IdentityProvider, MockIdentityProvider};
pub use profile::{MockProfileStore, ProfileStore};
pub use router::{MockRouter, Router};
