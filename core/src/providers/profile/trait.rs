//! Profile lookup trait defining the contract with the profile service.

use async_trait::async_trait;

use crate::domain::entities::profile::Profile;
use crate::errors::ProfileError;

/// Contract for the dealership profile lookup service
///
/// Lookups are keyed implicitly by the current session's identity: the
/// backing service resolves "who is asking" from the credential it was
/// constructed with.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Fetch the current identity's dealership profile
    ///
    /// # Returns
    /// * `Ok(Some(Profile))` - the identity has completed setup
    /// * `Ok(None)` - the identity exists but has no profile yet
    /// * `Err(ProfileError)` - the lookup itself failed
    async fn get_current_profile(&self) -> Result<Option<Profile>, ProfileError>;
}
