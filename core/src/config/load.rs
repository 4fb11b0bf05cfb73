use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::AppConfig;

pub const CONFIG_FILE_NAME: &str = "oddjobs.toml";

/// Loads configuration from `explicit`, or from `oddjobs.toml` in the working
/// directory, or from the user config dir, falling back to defaults. Env
/// overrides are applied last.
pub fn load(explicit: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = match explicit {
        Some(p) if !p.exists() => return Err(ConfigError::NotFound(p.to_path_buf())),
        Some(p) => Some(p.to_path_buf()),
        None => discover(),
    };

    let mut cfg = match path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let s = std::fs::read_to_string(&path)
                .map_err(|source| ConfigError::Read { path: path.clone(), source })?;
            parse_config(&s)?
        }
        None => AppConfig::default(),
    };

    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok())?;
    Ok(cfg)
}

pub fn parse_config(s: &str) -> Result<AppConfig, ConfigError> {
    toml::from_str::<AppConfig>(s).map_err(|e| ConfigError::Parse(e.into()))
}

fn discover() -> Option<PathBuf> {
    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }
    let user = dirs::config_dir()?.join("oddjobs").join("config.toml");
    user.exists().then_some(user)
}

pub fn apply_env_overrides<F>(cfg: &mut AppConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(v) = lookup("ODDJOBS_VERIFY_PROGRAM") {
        if !v.trim().is_empty() {
            cfg.verify.program = Some(expand(&v));
        }
    }

    if let Some(v) = lookup("ODDJOBS_VERIFY_TIMEOUT_MS") {
        if !v.trim().is_empty() {
            let ms = v.trim().parse::<u64>().map_err(|e| ConfigError::EnvInvalid {
                key: "ODDJOBS_VERIFY_TIMEOUT_MS".to_string(),
                source: e.into(),
            })?;
            cfg.verify.timeout_ms = Some(ms);
        }
    }

    if let Some(v) = lookup("ODDJOBS_LOG_FILE") {
        if !v.trim().is_empty() {
            cfg.log.file = Some(expand(&v));
        }
    }

    Ok(())
}

fn expand(v: &str) -> String {
    shellexpand::tilde(v.trim()).into_owned()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::partition::PartitionMode;
    use crate::remap::RetryRange;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_file_gives_defaults() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.remap.retry, RetryRange::Unbounded);
        assert_eq!(cfg.partition.mode, PartitionMode::Compat);
        assert_eq!(cfg.verify.start, 0);
        assert_eq!(cfg.verify.end, 3_999_999_999);
        assert_eq!(cfg.verify.progress_every, 10_000);
        assert!(cfg.verify.program.is_none());
        assert!(cfg.log.file.is_none());
    }

    #[test]
    fn sections_override_defaults() {
        let cfg = parse_config(
            r#"
[remap]
retry = "bounded"

[partition]
mode = "records"

[verify]
program = "./loesung"
args = ["--quiet"]
end = 1000
timeout_ms = 250
"#,
        )
        .unwrap();
        assert_eq!(cfg.remap.retry, RetryRange::Bounded);
        assert_eq!(cfg.partition.mode, PartitionMode::Records);
        assert_eq!(cfg.verify.program.as_deref(), Some("./loesung"));
        assert_eq!(cfg.verify.args, vec!["--quiet".to_string()]);
        assert_eq!(cfg.verify.end, 1000);
        assert_eq!(cfg.verify.timeout_ms, Some(250));
    }

    #[test]
    fn unknown_mode_is_a_parse_error() {
        let err = parse_config("[partition]\nmode = \"sideways\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn env_overrides_win_over_file() {
        let mut cfg = parse_config("[verify]\nprogram = \"a\"\n").unwrap();
        apply_env_overrides(
            &mut cfg,
            env(&[
                ("ODDJOBS_VERIFY_PROGRAM", "b"),
                ("ODDJOBS_VERIFY_TIMEOUT_MS", " 1500 "),
            ]),
        )
        .unwrap();
        assert_eq!(cfg.verify.program.as_deref(), Some("b"));
        assert_eq!(cfg.verify.timeout_ms, Some(1500));
    }

    #[test]
    fn blank_env_values_are_ignored() {
        let mut cfg = AppConfig::default();
        apply_env_overrides(&mut cfg, env(&[("ODDJOBS_VERIFY_PROGRAM", "  ")])).unwrap();
        assert!(cfg.verify.program.is_none());
    }

    #[test]
    fn bad_timeout_env_is_rejected() {
        let mut cfg = AppConfig::default();
        let err = apply_env_overrides(&mut cfg, env(&[("ODDJOBS_VERIFY_TIMEOUT_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::EnvInvalid { .. }));
    }

    #[test]
    fn explicit_missing_path_is_not_found() {
        let err = load(Some(Path::new("/definitely/not/here/oddjobs.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }
}
