use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use thiserror::Error;

use crate::exec::{CommandRunner, ExecError};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error(r"failed to write {path}\{name}: {source}")]
    Write {
        path: String,
        name: String,
        #[source]
        source: ExecError,
    },
}

/// Injected key-value capability for user-scoped Windows settings.
pub trait SettingsStore: Send + Sync {
    /// Writes a DWORD value under `HKCU\{path}`, creating the key if
    /// it does not exist yet.
    fn set_dword(&self, path: &str, name: &str, value: u32) -> Result<(), SettingsError>;
}

/// Writes through `reg.exe`, which creates missing keys on the way.
pub struct RegistryStore {
    runner: Arc<dyn CommandRunner>,
}

impl RegistryStore {
    pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
        Self { runner }
    }
}

impl SettingsStore for RegistryStore {
    fn set_dword(&self, path: &str, name: &str, value: u32) -> Result<(), SettingsError> {
        let key = format!(r"HKCU\{path}");
        let data = value.to_string();
        self.runner
            .run(
                "reg",
                &["add", &key, "/v", name, "/t", "REG_DWORD", "/d", &data, "/f"],
            )
            .map(|_| ())
            .map_err(|source| SettingsError::Write {
                path: path.to_string(),
                name: name.to_string(),
                source,
            })
    }
}

/// Test double backed by an in-memory map.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: Mutex<HashMap<(String, String), u32>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, path: &str, name: &str) -> Option<u32> {
        self.values
            .lock()
            .expect("settings map poisoned")
            .get(&(path.to_string(), name.to_string()))
            .copied()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn set_dword(&self, path: &str, name: &str, value: u32) -> Result<(), SettingsError> {
        self.values
            .lock()
            .expect("settings map poisoned")
            .insert((path.to_string(), name.to_string()), value);
        Ok(())
    }
}
