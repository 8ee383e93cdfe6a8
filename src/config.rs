use serde::Deserialize;
use std::path::Path;

use crate::demangle::{DemangleOptions, UnderscorePolicy};

const SETTINGS_RELATIVE_PATH: &str = ".symlang/settings.json";

/// All configurable settings with their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub underscore_policy: UnderscorePolicy,
    pub fallback_to_mangled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            underscore_policy: UnderscorePolicy::Reject,
            fallback_to_mangled: true,
        }
    }
}

impl Settings {
    pub fn demangle_options(&self) -> DemangleOptions {
        DemangleOptions::with_underscore(self.underscore_policy)
    }
}

/// Raw JSON representation. Fields stay untyped so one bad value does not discard the file.
#[derive(Debug, Deserialize, Default)]
struct SettingsFile {
    #[serde(rename = "demangle.underscorePolicy")]
    underscore_policy: Option<serde_json::Value>,
    #[serde(rename = "output.fallbackToMangled")]
    fallback_to_mangled: Option<serde_json::Value>,
}

/// Resolve settings: defaults → user global → project-local.
pub fn resolve(project_root: Option<&Path>) -> Settings {
    let global_path = dirs::home_dir().map(|h| h.join(SETTINGS_RELATIVE_PATH));
    let project_path = project_root.map(|r| r.join(SETTINGS_RELATIVE_PATH));
    resolve_with_paths(global_path.as_deref(), project_path.as_deref())
}

/// Resolver over explicit file paths (no home dir dependency).
pub fn resolve_with_paths(global_path: Option<&Path>, project_path: Option<&Path>) -> Settings {
    let mut settings = Settings::default();

    if let Some(path) = global_path {
        apply_file(&mut settings, path);
    }
    if let Some(path) = project_path {
        apply_file(&mut settings, path);
    }

    settings
}

fn apply_file(settings: &mut Settings, path: &Path) {
    let Ok(content) = std::fs::read_to_string(path) else { return };
    let file = match serde_json::from_str::<SettingsFile>(&content) {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!("Invalid settings file, ignoring: {} ({})", path.display(), e);
            return;
        }
    };

    if let Some(v) = file.underscore_policy {
        match v.as_str().map(str::parse::<UnderscorePolicy>) {
            Some(Ok(policy)) => settings.underscore_policy = policy,
            _ => tracing::warn!(
                "demangle.underscorePolicy ({}) must be \"reject\" or \"drop\", keeping {:?}",
                v,
                settings.underscore_policy
            ),
        }
    }
    if let Some(v) = file.fallback_to_mangled {
        match v.as_bool() {
            Some(fallback) => settings.fallback_to_mangled = fallback,
            None => tracing::warn!(
                "output.fallbackToMangled ({}) must be a boolean, keeping {}",
                v,
                settings.fallback_to_mangled
            ),
        }
    }
}
