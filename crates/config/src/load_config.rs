// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use crate::app_config::{AppConfig, CliOverrides, OsDirs};
use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use path_clean::clean;
use std::path::{Path, PathBuf};
use std::{env, fs};
use tracing::debug;

pub const DEFAULT_CONFIG_NAME: &str = "polylib.config.yaml";
pub const ENV_PREFIX: &str = "POLYLIB_";

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

/// Where the configuration file comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Passed on the command line. Must exist.
    Explicit(PathBuf),
    /// Found by walking up from the working directory.
    Discovered(PathBuf),
    /// The per-user location. Optional.
    Default(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::Explicit(p) | ConfigSource::Discovered(p) | ConfigSource::Default(p) => p,
        }
    }
}

/// Walks from `path` up to the filesystem root looking for `filename`.
pub fn find_in_parent(path: &Path, filename: &str) -> Option<PathBuf> {
    path.ancestors()
        .map(|dir| dir.join(filename))
        .find(|candidate| candidate.exists())
}

pub fn resolve_config_path(
    find_in_parent: FindInParent,
    cwd: &Path,
    default_config_dir: &Path,
    default_filename: &str,
    cli_file: Option<&Path>,
) -> ConfigSource {
    if let Some(cli_file) = cli_file {
        if cli_file.is_absolute() {
            return ConfigSource::Explicit(cli_file.to_path_buf());
        }
        return ConfigSource::Explicit(clean(cwd.join(cli_file)));
    }

    if let Some(found) = find_in_parent(cwd, default_filename) {
        return ConfigSource::Discovered(found);
    }

    ConfigSource::Default(clean(default_config_dir.join(default_filename)))
}

/// Load the configuration from the defaults, the config file, `POLYLIB_*` environment
/// variables and finally the command line, each layer overriding the previous.
pub fn load_config(config_file: Option<&Path>, overrides: CliOverrides) -> Result<AppConfig> {
    load_config_with(
        &env::current_dir()?,
        &OsDirs::config_dir(),
        config_file,
        overrides,
    )
}

/// [`load_config`] with injected directories.
pub fn load_config_with(
    cwd: &Path,
    default_config_dir: &Path,
    config_file: Option<&Path>,
    overrides: CliOverrides,
) -> Result<AppConfig> {
    let source = resolve_config_path(
        find_in_parent,
        cwd,
        default_config_dir,
        DEFAULT_CONFIG_NAME,
        config_file,
    );

    let mut figment = Figment::from(Serialized::defaults(AppConfig::default()));
    let mut found_config_file = None;

    match &source {
        ConfigSource::Explicit(path) => {
            fs::metadata(path).with_context(|| {
                format!("Configuration file not found at {}", path.display())
            })?;
            figment = figment.merge(Yaml::file(path));
            found_config_file = Some(path.clone());
        }
        ConfigSource::Discovered(path) => {
            figment = figment.merge(Yaml::file(path));
            found_config_file = Some(path.clone());
        }
        ConfigSource::Default(path) if path.exists() => {
            figment = figment.merge(Yaml::file(path));
            found_config_file = Some(path.clone());
        }
        ConfigSource::Default(path) => {
            debug!(path = %path.display(), "No configuration file, using defaults");
        }
    }

    let overrides = CliOverrides {
        found_config_file,
        ..overrides
    };

    let config: AppConfig = figment
        .merge(Env::prefixed(ENV_PREFIX).split("__"))
        .merge(Serialized::defaults(overrides))
        .extract()
        .context("Could not parse configuration")?;

    config.validate()?;
    debug!(?config, "Loaded configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use polylib_aks::FindRStrategy;

    #[test]
    fn test_resolve_cli() {
        fn not_found(_: &Path, _: &str) -> Option<PathBuf> {
            None
        }
        fn found(_: &Path, _: &str) -> Option<PathBuf> {
            Some(PathBuf::from("/foo/polylib.config.yaml"))
        }

        let source = resolve_config_path(
            not_found,
            Path::new("/foo/bar"),
            Path::new("/my/config"),
            DEFAULT_CONFIG_NAME,
            None,
        );
        assert_eq!(
            source,
            ConfigSource::Default(PathBuf::from("/my/config/polylib.config.yaml"))
        );

        let source = resolve_config_path(
            found,
            Path::new("/foo/bar"),
            Path::new("/my/config"),
            DEFAULT_CONFIG_NAME,
            Some(Path::new("/my/absolute/conf.yaml")),
        );
        assert_eq!(
            source,
            ConfigSource::Explicit(PathBuf::from("/my/absolute/conf.yaml"))
        );

        let source = resolve_config_path(
            found,
            Path::new("/foo/bar"),
            Path::new("/my/config"),
            DEFAULT_CONFIG_NAME,
            Some(Path::new("../conf.yaml")),
        );
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("/foo/conf.yaml")));

        let source = resolve_config_path(
            found,
            Path::new("/foo/bar"),
            Path::new("/my/config"),
            DEFAULT_CONFIG_NAME,
            None,
        );
        assert_eq!(
            source,
            ConfigSource::Discovered(PathBuf::from("/foo/polylib.config.yaml"))
        );
        assert_eq!(source.path(), Path::new("/foo/polylib.config.yaml"));
    }

    #[test]
    fn test_file_not_found() {
        let err = load_config_with(
            Path::new("/"),
            Path::new("/nope"),
            Some(Path::new("/nope/polylib.config.yaml")),
            CliOverrides::default(),
        )
        .unwrap_err();
        let io = err
            .downcast_ref::<std::io::Error>()
            .map(|e| e.kind());
        assert_eq!(io, Some(std::io::ErrorKind::NotFound));
    }

    #[test]
    fn test_defaults_without_file() {
        Jail::expect_with(|jail| {
            let dir = jail.directory().to_path_buf();
            let config = load_config_with(
                &dir,
                &dir.join("missing"),
                None,
                CliOverrides::default(),
            )
            .map_err(|e| e.to_string())?;
            assert_eq!(config, AppConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_layering() {
        Jail::expect_with(|jail| {
            let dir = jail.directory().to_path_buf();
            jail.create_dir("nested")?;
            jail.create_file(
                DEFAULT_CONFIG_NAME,
                r#"
modulus: 17
symbol: "y"
aks:
  strategy: "brute-force"
"#,
            )?;

            // Discovered from a subdirectory.
            let config = load_config_with(
                &dir.join("nested"),
                &dir.join("missing"),
                None,
                CliOverrides::default(),
            )
            .map_err(|e| e.to_string())?;
            assert_eq!(config.modulus, Some(17));
            assert_eq!(config.symbol, 'y');
            assert_eq!(config.aks.strategy, FindRStrategy::BruteForce);
            assert!(config.aks.parallel);
            assert_eq!(config.found_config_file, Some(dir.join(DEFAULT_CONFIG_NAME)));

            // Environment beats the file.
            jail.set_env("POLYLIB_MODULUS", "23");
            jail.set_env("POLYLIB_AKS__THREADS", "3");
            let config = load_config_with(&dir, &dir, None, CliOverrides::default())
                .map_err(|e| e.to_string())?;
            assert_eq!(config.modulus, Some(23));
            assert_eq!(config.aks.threads, Some(3));

            // The command line beats the environment.
            let config = load_config_with(
                &dir,
                &dir,
                None,
                CliOverrides {
                    modulus: Some(5),
                    ignore_sign: Some(true),
                    ..CliOverrides::default()
                },
            )
            .map_err(|e| e.to_string())?;
            assert_eq!(config.modulus, Some(5));
            assert!(config.ignore_sign);
            assert_eq!(config.symbol, 'y');
            Ok(())
        });
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        Jail::expect_with(|jail| {
            let dir = jail.directory().to_path_buf();
            jail.create_file("bad.yaml", "modulus: 1\n")?;
            let result = load_config_with(
                &dir,
                &dir,
                Some(Path::new("bad.yaml")),
                CliOverrides::default(),
            );
            assert!(result.is_err());

            jail.create_file("typo.yaml", "modullus: 7\n")?;
            let result = load_config_with(
                &dir,
                &dir,
                Some(Path::new("typo.yaml")),
                CliOverrides::default(),
            );
            assert!(result.is_err());
            Ok(())
        });
    }

    #[test]
    fn test_serialized_config_loads_back() {
        Jail::expect_with(|jail| {
            let dir = jail.directory().to_path_buf();
            let written = AppConfig {
                modulus: Some(101),
                symbol: 'z',
                ..AppConfig::default()
            };
            let yaml = serde_yaml::to_string(&written).map_err(|e| e.to_string())?;
            jail.create_file("conf.yaml", &yaml)?;
            let loaded = load_config_with(
                &dir,
                &dir,
                Some(Path::new("conf.yaml")),
                CliOverrides::default(),
            )
            .map_err(|e| e.to_string())?;
            assert_eq!(
                loaded,
                AppConfig {
                    found_config_file: Some(dir.join("conf.yaml")),
                    ..written
                }
            );
            Ok(())
        });
    }
}
