//! # DealerDesk Core
//!
//! Session and role coordination core for the DealerDesk console.
//! This crate contains the domain entities, provider interfaces, error
//! types, and the session/role coordinator that keeps the visible page
//! consistent with the user's authentication and role state.

pub mod domain;
pub mod errors;
pub mod providers;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use providers::{
    IdentityProvider, MockIdentityProvider, MockProfileStore, MockRouter, ProfileStore, Router,
};
pub use services::*;
