use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Screen color theme.
#[derive(clap::ValueEnum, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// The other theme.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Flags that can be persisted as defaults.
///
/// Saved defaults live in a flag file: one or more command-line flags per
/// line, `#` comments allowed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub endpoint: Option<String>,
    pub no_logos: bool,
    pub force_half_cell: bool,
    pub theme: Option<ThemeMode>,
    pub log_file: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: switches are OR-ed, values from `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            endpoint: other.endpoint.clone().or_else(|| self.endpoint.clone()),
            no_logos: self.no_logos || other.no_logos,
            force_half_cell: self.force_half_cell || other.force_half_cell,
            theme: other.theme.or(self.theme),
            log_file: other.log_file.clone().or_else(|| self.log_file.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("jobdeck").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("jobdeck")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("jobdeck").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("jobdeck")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".jobdeckrc")
}

pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = vec!["# jobdeck defaults (saved with --save)".to_string()];
    if let Some(endpoint) = &flags.endpoint {
        lines.push(format!("--endpoint {endpoint}"));
    }
    if flags.no_logos {
        lines.push("--no-logos".to_string());
    }
    if flags.force_half_cell {
        lines.push("--force-half-cell".to_string());
    }
    if let Some(theme) = flags.theme {
        lines.push(format!("--theme {}", theme.as_str()));
    }
    if let Some(log_file) = &flags.log_file {
        lines.push(format!("--log-file {}", log_file.display()));
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Pick the persistable flags out of raw arguments.
///
/// Unknown tokens are skipped, so this accepts a full `argv` as well as the
/// contents of a flag file.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        match token {
            "--no-logos" => flags.no_logos = true,
            "--force-half-cell" => flags.force_half_cell = true,
            "--endpoint" => {
                if let Some(next) = tokens.get(i + 1) {
                    flags.endpoint = Some(next.clone());
                    i += 1;
                }
            }
            "--log-file" => {
                if let Some(next) = tokens.get(i + 1) {
                    flags.log_file = Some(PathBuf::from(next));
                    i += 1;
                }
            }
            "--theme" => {
                if let Some(next) = tokens.get(i + 1) {
                    flags.theme = parse_theme(next);
                    i += 1;
                }
            }
            _ => {
                if let Some(value) = token.strip_prefix("--endpoint=") {
                    flags.endpoint = Some(value.to_string());
                } else if let Some(value) = token.strip_prefix("--log-file=") {
                    flags.log_file = Some(PathBuf::from(value));
                } else if let Some(value) = token.strip_prefix("--theme=") {
                    flags.theme = parse_theme(value);
                }
            }
        }
        i += 1;
    }
    flags
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s {
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let flags = parse_flag_tokens(&tokens(&[
            "jobdeck",
            "--endpoint",
            "https://jobs.example.com/api",
            "--no-logos",
            "--search",
            "rust",
            "--log-file=jobdeck.log",
            "--force-half-cell",
        ]));
        assert_eq!(
            flags.endpoint.as_deref(),
            Some("https://jobs.example.com/api")
        );
        assert!(flags.no_logos);
        assert!(flags.force_half_cell);
        assert_eq!(flags.log_file, Some(PathBuf::from("jobdeck.log")));
    }

    #[test]
    fn test_parse_flag_tokens_ignores_dangling_value_flag() {
        let flags = parse_flag_tokens(&tokens(&["--endpoint"]));
        assert_eq!(flags, ConfigFlags::default());
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            endpoint: Some("http://file.example/api".to_string()),
            no_logos: true,
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            endpoint: Some("http://cli.example/api".to_string()),
            force_half_cell: true,
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.no_logos);
        assert!(merged.force_half_cell);
        assert_eq!(merged.endpoint.as_deref(), Some("http://cli.example/api"));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(".jobdeckrc");
        let flags = ConfigFlags {
            endpoint: Some("http://localhost:4000/api/jobs".to_string()),
            no_logos: true,
            force_half_cell: true,
            theme: Some(ThemeMode::Light),
            log_file: Some(PathBuf::from("debug.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        assert_eq!(load_config_flags(&path).unwrap(), flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
        assert_eq!(load_config_flags(&path).unwrap(), ConfigFlags::default());
    }

    #[test]
    fn test_theme_flag_parses_and_merges() {
        let file = parse_flag_tokens(&tokens(&["--theme", "light"]));
        assert_eq!(file.theme, Some(ThemeMode::Light));
        let cli = parse_flag_tokens(&tokens(&["jobdeck", "--theme=dark"]));
        assert_eq!(file.union(&cli).theme, Some(ThemeMode::Dark));
        assert_eq!(file.union(&ConfigFlags::default()).theme, Some(ThemeMode::Light));
        assert_eq!(parse_flag_tokens(&tokens(&["--theme", "sepia"])).theme, None);
    }

    #[test]
    fn test_theme_mode_toggles() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
    }
}
