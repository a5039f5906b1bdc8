use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// On-disk TOML configuration structure.
/// All fields are optional so partial configs work (merge with defaults).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    pub paths: Option<PathsConfig>,
    pub display: Option<DisplayConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    pub data: Option<String>,
    pub save: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub theme: Option<String>,
}

/// Platform config directory path: `<config_dir>/sightline/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("sightline").join("config.toml"))
}

/// Load config by cascading CWD `.sightline.toml` over platform config.
/// CWD values override platform values; CLI flags override both.
pub fn load_config() -> ConfigFile {
    let platform = config_path().and_then(|p| load_from_path(&p));
    let cwd = load_from_path(&PathBuf::from(".sightline.toml"));

    match (platform, cwd) {
        (None, None) => ConfigFile::default(),
        (Some(p), None) => p,
        (None, Some(c)) => c,
        (Some(p), Some(c)) => merge(p, c),
    }
}

fn load_from_path(path: &PathBuf) -> Option<ConfigFile> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str(&content).ok()
}

/// Merge two configs: `overlay` values take precedence over `base`.
fn merge(base: ConfigFile, overlay: ConfigFile) -> ConfigFile {
    ConfigFile {
        paths: Some(PathsConfig {
            data: overlay
                .paths
                .as_ref()
                .and_then(|p| p.data.clone())
                .or_else(|| base.paths.as_ref().and_then(|p| p.data.clone())),
            save: overlay
                .paths
                .as_ref()
                .and_then(|p| p.save.clone())
                .or_else(|| base.paths.as_ref().and_then(|p| p.save.clone())),
        }),
        display: Some(DisplayConfig {
            theme: overlay
                .display
                .as_ref()
                .and_then(|d| d.theme.clone())
                .or_else(|| base.display.as_ref().and_then(|d| d.theme.clone())),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlay_wins_field_by_field() {
        let base = ConfigFile {
            paths: Some(PathsConfig {
                data: Some("base.csv".into()),
                save: Some("base_save.csv".into()),
            }),
            display: Some(DisplayConfig {
                theme: Some("hacker".into()),
            }),
        };
        let overlay = ConfigFile {
            paths: Some(PathsConfig {
                data: Some("cwd.csv".into()),
                save: None,
            }),
            display: None,
        };

        let merged = merge(base, overlay);
        let paths = merged.paths.unwrap();
        assert_eq!(paths.data.as_deref(), Some("cwd.csv"));
        assert_eq!(paths.save.as_deref(), Some("base_save.csv"));
        assert_eq!(
            merged.display.unwrap().theme.as_deref(),
            Some("hacker")
        );
    }

    #[test]
    fn partial_toml_parses_with_missing_sections() {
        let cfg: ConfigFile = toml::from_str("[display]\ntheme = \"modern\"\n").unwrap();
        assert!(cfg.paths.is_none());
        assert_eq!(cfg.display.unwrap().theme.as_deref(), Some("modern"));
    }
}
