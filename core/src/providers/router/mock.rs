//! Mock implementation of Router for testing

use std::sync::Mutex;

use super::r#trait::Router;

/// Mock router that records every navigation
pub struct MockRouter {
    path: Mutex<String>,
    history: Mutex<Vec<String>>,
}

impl MockRouter {
    /// Create a router positioned at `path`
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            path: Mutex::new(path.into()),
            history: Mutex::new(Vec::new()),
        }
    }

    /// Every path pushed so far, oldest first
    pub fn pushes(&self) -> Vec<String> {
        self.history.lock().unwrap().clone()
    }

    /// Number of navigations issued
    pub fn push_count(&self) -> usize {
        self.history.lock().unwrap().len()
    }
}

impl Default for MockRouter {
    fn default() -> Self {
        Self::at("/")
    }
}

impl Router for MockRouter {
    fn push(&self, path: &str) {
        *self.path.lock().unwrap() = path.to_string();
        self.history.lock().unwrap().push(path.to_string());
    }

    fn current_path(&self) -> String {
        self.path.lock().unwrap().clone()
    }
}
