//! Router trait defining the contract with the console's navigation layer.

/// Contract for the navigation layer
///
/// Navigation is fire-and-forget: the host router owns the transition and
/// reports the new location through `current_path` on the next read.
pub trait Router: Send + Sync {
    /// Navigate to `path`
    fn push(&self, path: &str);

    /// The path currently shown
    fn current_path(&self) -> String;
}
