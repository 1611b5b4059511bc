//! Directory configuration loaded via `OrthoConfig`.

use ortho_config::OrthoConfig;
use serde::Deserialize;

/// Configuration values controlling how a directory is constructed.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USER_DIRECTORY")]
pub struct DirectorySettings {
    /// Number of records to pre-allocate space for.
    #[ortho_config(default = 0)]
    pub initial_capacity: usize,
}

impl DirectorySettings {
    /// Return the configured capacity; zero unless a source sets it.
    #[must_use]
    pub const fn initial_capacity(&self) -> usize {
        self.initial_capacity
    }
}
