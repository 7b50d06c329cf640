//! Tests for the session/role coordinator

#[cfg(test)]
mod policy_tests;
