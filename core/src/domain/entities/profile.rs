//! Profile entity: the dealership-role record associated with an identity.
//!
//! Zero-or-one per session. A signed-up identity that has not completed
//! dealership setup has no profile yet; the coordinator routes it to the
//! onboarding path. Profiles are created by the setup / invite-acceptance
//! flow and mutated by the profile-edit screens, never by the coordinator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role a profile holds within its dealership
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DealershipRole {
    /// Dealership owner, full admin access
    Owner,
    /// Manager, admin access without billing
    Manager,
    /// Salesperson, works the leads app
    Salesperson,
}

impl DealershipRole {
    /// Whether this role belongs in the admin console area
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Owner | Self::Manager)
    }
}

/// Dealership profile associated with an authenticated identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Unique identifier for the profile
    pub id: Uuid,

    /// Identity this profile belongs to
    pub user_id: Uuid,

    /// Role within the dealership
    pub role: DealershipRole,

    /// Dealership the profile is attached to, once setup is complete
    pub dealership_id: Option<Uuid>,

    /// Display name
    pub full_name: String,

    /// Contact phone, if provided
    pub phone: Option<String>,

    /// Timestamp when the profile was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the profile was last updated
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a new profile for an identity
    pub fn new(user_id: Uuid, role: DealershipRole, full_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            role,
            dealership_id: None,
            full_name,
            phone: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Attach the profile to a dealership
    pub fn with_dealership(mut self, dealership_id: Uuid) -> Self {
        self.dealership_id = Some(dealership_id);
        self.updated_at = Utc::now();
        self
    }

    /// Whether this profile belongs in the admin console area
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
