/*!
 * Per-workspace persistence of exclusion overrides
 */

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{CopierError, Result};

/// Exclusion overrides stored for one workspace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSettings {
    /// Replacement for the default excluded folders
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_folders: Option<Vec<String>>,
    /// Replacement for the default excluded patterns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_patterns: Option<Vec<String>>,
}

impl WorkspaceSettings {
    /// Whether nothing is overridden
    pub fn is_empty(&self) -> bool {
        self.excluded_folders.is_none() && self.excluded_patterns.is_none()
    }

    /// Overlay the fields set in `other` onto `self`
    pub fn merge(&mut self, other: WorkspaceSettings) {
        if other.excluded_folders.is_some() {
            self.excluded_folders = other.excluded_folders;
        }
        if other.excluded_patterns.is_some() {
            self.excluded_patterns = other.excluded_patterns;
        }
    }
}

/// On-disk layout of the settings file
#[derive(Debug, Default, Serialize, Deserialize)]
struct SettingsFile {
    /// Settings keyed by canonical workspace path
    #[serde(default)]
    workspaces: BTreeMap<String, WorkspaceSettings>,
}

/// JSON file holding settings for every workspace
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store at an explicit location
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store in the user's configuration directory
    pub fn default_location() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("file-copier");
        Self::at(dir.join("workspaces.json"))
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Settings stored for `root`, empty when none are stored
    pub fn load(&self, root: &Path) -> Result<WorkspaceSettings> {
        let file = self.read()?;
        Ok(file
            .workspaces
            .get(&workspace_key(root))
            .cloned()
            .unwrap_or_default())
    }

    /// Merge `settings` into what is stored for `root`
    pub fn save(&self, root: &Path, settings: WorkspaceSettings) -> Result<()> {
        let mut file = self.read()?;
        file.workspaces
            .entry(workspace_key(root))
            .or_default()
            .merge(settings);
        self.write(&file)
    }

    /// Forget everything stored for `root`
    pub fn clear(&self, root: &Path) -> Result<()> {
        let mut file = self.read()?;
        if file.workspaces.remove(&workspace_key(root)).is_some() {
            self.write(&file)?;
        }
        Ok(())
    }

    fn read(&self) -> Result<SettingsFile> {
        match fs::read_to_string(&self.path) {
            Ok(text) => serde_json::from_str(&text).map_err(|e| {
                CopierError::Settings(format!("{}: {}", self.path.display(), e))
            }),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(SettingsFile::default()),
            Err(e) => Err(CopierError::Io(e)),
        }
    }

    fn write(&self, file: &SettingsFile) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string_pretty(file)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}

/// Key under which a workspace's settings are stored
fn workspace_key(root: &Path) -> String {
    fs::canonicalize(root)
        .unwrap_or_else(|_| root.to_path_buf())
        .display()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_yields_empty_settings() -> Result<()> {
        let temp_dir = tempdir()?;
        let store = SettingsStore::at(temp_dir.path().join("nested").join("settings.json"));

        assert!(store.load(temp_dir.path())?.is_empty());
        Ok(())
    }

    #[test]
    fn test_save_merges_fields() -> Result<()> {
        let temp_dir = tempdir()?;
        let workspace = temp_dir.path().join("project");
        fs::create_dir(&workspace)?;
        let store = SettingsStore::at(temp_dir.path().join("config").join("settings.json"));

        store.save(
            &workspace,
            WorkspaceSettings {
                excluded_folders: Some(vec!["dist".to_string()]),
                excluded_patterns: None,
            },
        )?;
        store.save(
            &workspace,
            WorkspaceSettings {
                excluded_folders: None,
                excluded_patterns: Some(vec!["*.lock".to_string()]),
            },
        )?;

        let loaded = store.load(&workspace)?;
        assert_eq!(loaded.excluded_folders, Some(vec!["dist".to_string()]));
        assert_eq!(loaded.excluded_patterns, Some(vec!["*.lock".to_string()]));
        Ok(())
    }

    #[test]
    fn test_workspaces_are_isolated() -> Result<()> {
        let temp_dir = tempdir()?;
        let first = temp_dir.path().join("first");
        let second = temp_dir.path().join("second");
        fs::create_dir(&first)?;
        fs::create_dir(&second)?;
        let store = SettingsStore::at(temp_dir.path().join("settings.json"));

        store.save(
            &first,
            WorkspaceSettings {
                excluded_folders: Some(vec!["target".to_string()]),
                excluded_patterns: None,
            },
        )?;

        assert!(store.load(&second)?.is_empty());

        store.clear(&first)?;
        assert!(store.load(&first)?.is_empty());
        Ok(())
    }

    #[test]
    fn test_malformed_file_is_an_error() -> Result<()> {
        let temp_dir = tempdir()?;
        let path = temp_dir.path().join("settings.json");
        fs::write(&path, "{ not json")?;

        let err = SettingsStore::at(&path).load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, CopierError::Settings(_)));
        Ok(())
    }
}
