mod types;

pub use types::*;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file
pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;

    let mut config: Config = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;

    expand_tool_paths(&mut config.tools);

    validate_config(&config)?;

    Ok(config)
}

/// Load config from default locations or return default config
pub fn load_config_or_default(custom_path: Option<&Path>) -> Result<Config> {
    if let Some(path) = custom_path {
        return load_config(path);
    }

    // Try default locations
    let default_paths = ["./vidtree.toml", "~/.config/vidtree/config.toml"];

    for path_str in default_paths {
        let path = shellexpand::tilde(path_str);
        let path = Path::new(path.as_ref());
        if path.exists() {
            tracing::debug!("Using config file {:?}", path);
            return load_config(path);
        }
    }

    Ok(Config::default())
}

fn expand_tool_paths(tools: &mut ToolsConfig) {
    if let Some(path) = tools.ffprobe_path.take() {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        tools.ffprobe_path = Some(PathBuf::from(expanded));
    }
}

/// Validate configuration
pub fn validate_config(config: &Config) -> Result<()> {
    if config.playlist.title.trim().is_empty() {
        anyhow::bail!("Playlist title cannot be empty");
    }

    if config.playlist.output.trim().is_empty() {
        anyhow::bail!("Playlist output name cannot be empty");
    }

    if let Some(path) = &config.tools.ffprobe_path {
        if !path.exists() {
            tracing::warn!("Configured ffprobe does not exist: {:?}", path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playlist::{DEFAULT_OUTPUT, DEFAULT_TITLE};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.playlist.title, DEFAULT_TITLE);
        assert_eq!(config.playlist.output, DEFAULT_OUTPUT);
        assert!(config.tools.ffprobe_path.is_none());
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_load_partial_file() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vidtree.toml");
        fs::write(
            &path,
            r#"
[playlist]
title = "Cartoons"

[tools]
ffprobe_path = "/opt/ffmpeg/bin/ffprobe"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.playlist.title, "Cartoons");
        assert_eq!(config.playlist.output, DEFAULT_OUTPUT);
        assert_eq!(
            config.tools.ffprobe_path,
            Some(PathBuf::from("/opt/ffmpeg/bin/ffprobe"))
        );
    }

    #[test]
    fn test_tilde_expanded() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vidtree.toml");
        fs::write(&path, "[tools]\nffprobe_path = \"~/bin/ffprobe\"\n").unwrap();

        let config = load_config(&path).unwrap();
        let ffprobe = config.tools.ffprobe_path.unwrap();
        assert!(!ffprobe.to_string_lossy().starts_with('~'));
        assert!(ffprobe.ends_with("bin/ffprobe"));
    }

    #[test]
    fn test_home_relative_tool_is_checked_after_expansion() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vidtree.toml");
        fs::write(&path, "[tools]\nffprobe_path = \"~\"\n").unwrap();

        let config = load_config(&path).unwrap();
        let ffprobe = config.tools.ffprobe_path.as_deref().unwrap();
        assert_eq!(ffprobe, Path::new(shellexpand::tilde("~").as_ref()));
        assert!(ffprobe.exists());
    }

    #[test]
    fn test_rejects_empty_title() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vidtree.toml");
        fs::write(&path, "[playlist]\ntitle = \"  \"\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_invalid_toml() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vidtree.toml");
        fs::write(&path, "[playlist\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let err = load_config_or_default(Some(Path::new("/nonexistent/vidtree.toml")))
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
