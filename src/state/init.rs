//! Page-lifetime initialization record

use std::collections::HashSet;

/// Components that must be set up at most once per page lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    Notifications,
    Forms,
}

/// Tracks which components are initialized.
///
/// `begin` succeeds once per component until `teardown` resets it, so a
/// second initializer run leaves existing state untouched.
#[derive(Debug, Default)]
pub struct InitRegistry {
    initialized: HashSet<Component>,
}

impl InitRegistry {
    /// Returns true if the caller should initialize `component` now
    pub fn begin(&mut self, component: Component) -> bool {
        let first = self.initialized.insert(component);
        if !first {
            tracing::debug!("{component:?} already initialized");
        }
        first
    }

    pub fn is_initialized(&self, component: Component) -> bool {
        self.initialized.contains(&component)
    }

    pub fn teardown(&mut self, component: Component) {
        self.initialized.remove(&component);
    }
}
