//! Config file loading

use crate::config::decode::decode;
use crate::config::merge::Accumulator;
use crate::domain::{Config, ConfigMap, Format, LoadReport, Origin, SkipReason, SourceFile};
use crate::env::parse_env_file;
use crate::error::ConfigError;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_ENV_FILE: &str = ".env";

/// Builds a [`Config`] from an ordered list of files plus an optional env file.
///
/// ```no_run
/// use confmerge::ConfigLoader;
///
/// let config = ConfigLoader::new("/srv/app")
///     .strict(false)
///     .load(&["defaults.json", "site.toml"])?;
/// let port = config.get_i64("port");
/// # Ok::<(), confmerge::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    base_dir: PathBuf,
    strict: bool,
    env_file: Option<PathBuf>,
}

enum Outcome {
    Merged(ConfigMap),
    Missing,
    Skipped(SkipReason),
}

impl ConfigLoader {
    /// Relative input paths and the env file are resolved against `base_dir`.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self { base_dir: base_dir.into(), strict: true, env_file: Some(DEFAULT_ENV_FILE.into()) }
    }

    /// Loader rooted at the process working directory.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }

    /// In strict mode (the default) a file that fails to decode aborts the
    /// load. Otherwise it is logged and contributes nothing.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Name of the env file, relative to the base directory.
    pub fn env_file(mut self, name: impl Into<PathBuf>) -> Self {
        self.env_file = Some(name.into());
        self
    }

    pub fn without_env_file(mut self) -> Self {
        self.env_file = None;
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Merge `files` in order, then the env file if it exists.
    ///
    /// Missing files print a notice and are skipped. Unsupported extensions
    /// are skipped silently.
    pub fn load<P: AsRef<Path>>(&self, files: &[P]) -> Result<Config, ConfigError> {
        let mut acc = Accumulator::new();
        let mut report = LoadReport::default();

        for file in files {
            let source = SourceFile::resolve(&self.base_dir, file.as_ref());
            match self.load_source(&source)? {
                Outcome::Merged(data) => {
                    let overridden = acc.merge(data, &Origin::File(source.requested.clone()));
                    tracing::debug!(
                        "Merged {} ({}), {} key(s) overridden",
                        source.requested.display(),
                        source.format,
                        overridden
                    );
                    report.merged.push(source.requested);
                }
                Outcome::Missing => {
                    println!(
                        "File not found. Specify the correct path to the file: {}",
                        source.requested.display()
                    );
                    report.missing.push(source.requested);
                }
                Outcome::Skipped(reason) => report.skipped.push((source.requested, reason)),
            }
        }

        if let Some(env_name) = &self.env_file {
            let env_path = self.base_dir.join(env_name);
            if env_path.is_file() {
                let data = parse_env_file(&env_path)?;
                let overridden = acc.merge(data, &Origin::EnvFile(env_name.clone()));
                tracing::debug!(
                    "Applied env file {}, {} key(s) overridden",
                    env_path.display(),
                    overridden
                );
                report.env_file = Some(env_name.clone());
            }
        }

        let (values, origins) = acc.into_parts();
        Ok(Config::new(values, origins, report))
    }

    fn load_source(&self, source: &SourceFile) -> Result<Outcome, ConfigError> {
        if !source.format.is_supported() {
            if !source.resolved.exists() {
                return Ok(Outcome::Missing);
            }
            tracing::debug!("Ignoring {}: unsupported extension", source.requested.display());
            return Ok(Outcome::Skipped(SkipReason::UnsupportedFormat));
        }

        let content = match fs::read_to_string(&source.resolved) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Outcome::Missing),
            Err(source_err) => {
                return Err(ConfigError::Read { path: source.resolved.clone(), source: source_err })
            }
        };

        match decode(source.format, &content, &source.resolved) {
            Ok(data) => Ok(Outcome::Merged(data)),
            Err(e) if !self.strict && e.is_decode_error() => {
                tracing::warn!("Skipping {}: {}", source.requested.display(), e);
                Ok(Outcome::Skipped(SkipReason::DecodeFailed(e.to_string())))
            }
            Err(e) => Err(e),
        }
    }
}

/// Load `files` relative to the current directory with default settings.
pub fn load_config<P: AsRef<Path>>(files: &[P]) -> Result<Config, ConfigError> {
    let loader = ConfigLoader::from_current_dir()
        .map_err(|source| ConfigError::Read { path: PathBuf::from("."), source })?;
    loader.load(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).expect("write");
    }

    #[test]
    fn test_json_then_toml_later_wins() {
        let tmp = TempDir::new().expect("tmp");
        write(&tmp, "a.json", r#"{"x": 1, "y": 2}"#);
        write(&tmp, "b.toml", "y = 3\nz = 4\n");

        let cfg = ConfigLoader::new(tmp.path()).load(&["a.json", "b.toml"]).expect("config");
        assert_eq!(cfg.len(), 3);
        assert_eq!(cfg.get("x"), Some(&json!(1)));
        assert_eq!(cfg.get("y"), Some(&json!(3)));
        assert_eq!(cfg.get("z"), Some(&json!(4)));
        assert_eq!(cfg.origin("y"), Some(&Origin::File(PathBuf::from("b.toml"))));
    }

    #[test]
    fn test_input_order_decides_precedence() {
        let tmp = TempDir::new().expect("tmp");
        write(&tmp, "a.json", r#"{"y": "json"}"#);
        write(&tmp, "b.yaml", "y: yaml\n");

        let loader = ConfigLoader::new(tmp.path());
        assert_eq!(loader.load(&["a.json", "b.yaml"]).expect("cfg").get_str("y"), Some("yaml"));
        assert_eq!(loader.load(&["b.yaml", "a.json"]).expect("cfg").get_str("y"), Some("json"));
    }

    #[test]
    fn test_missing_file_does_not_abort() {
        let tmp = TempDir::new().expect("tmp");
        write(&tmp, "present.toml", "name = \"demo\"\n");

        let cfg = ConfigLoader::new(tmp.path())
            .load(&["absent.json", "present.toml"])
            .expect("config");
        assert_eq!(cfg.get_str("name"), Some("demo"));
        assert_eq!(cfg.report().missing, vec![PathBuf::from("absent.json")]);
        assert_eq!(cfg.report().merged, vec![PathBuf::from("present.toml")]);
    }

    #[test]
    fn test_missing_unsupported_file_reported_missing() {
        let tmp = TempDir::new().expect("tmp");
        let cfg = ConfigLoader::new(tmp.path()).load(&["absent.ini"]).expect("config");
        assert_eq!(cfg.report().missing, vec![PathBuf::from("absent.ini")]);
        assert!(cfg.report().skipped.is_empty());
    }

    #[test]
    fn test_unsupported_extension_is_ignored() {
        let tmp = TempDir::new().expect("tmp");
        write(&tmp, "settings.ini", "[section]\nkey=value\n");
        write(&tmp, "a.json", r#"{"k": true}"#);

        let cfg = ConfigLoader::new(tmp.path()).load(&["settings.ini", "a.json"]).expect("config");
        assert_eq!(cfg.len(), 1);
        assert_eq!(
            cfg.report().skipped,
            vec![(PathBuf::from("settings.ini"), SkipReason::UnsupportedFormat)]
        );
    }

    #[test]
    fn test_strict_mode_rejects_malformed_json() {
        let tmp = TempDir::new().expect("tmp");
        write(&tmp, "bad.json", "{\"x\": ");

        let err = ConfigLoader::new(tmp.path()).load(&["bad.json"]).unwrap_err();
        assert!(matches!(err, ConfigError::Json { .. }));
        assert_eq!(err.path(), tmp.path().join("bad.json"));
    }

    #[test]
    fn test_strict_mode_rejects_malformed_toml_and_yaml() {
        let tmp = TempDir::new().expect("tmp");
        write(&tmp, "bad.toml", "x = \n");
        write(&tmp, "bad.yaml", "x: [1, 2\n");

        let loader = ConfigLoader::new(tmp.path());
        assert!(matches!(loader.load(&["bad.toml"]), Err(ConfigError::Toml { .. })));
        assert!(matches!(loader.load(&["bad.yaml"]), Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn test_lenient_mode_skips_every_malformed_format() {
        let tmp = TempDir::new().expect("tmp");
        write(&tmp, "bad.json", "{");
        write(&tmp, "bad.toml", "x = \n");
        write(&tmp, "bad.yaml", "x: [1, 2\n");
        write(&tmp, "list.json", "[1, 2]");
        write(&tmp, "good.json", r#"{"ok": 1}"#);

        let cfg = ConfigLoader::new(tmp.path())
            .strict(false)
            .load(&["bad.json", "bad.toml", "bad.yaml", "list.json", "good.json"])
            .expect("lenient load");
        assert_eq!(cfg.get_i64("ok"), Some(1));
        assert_eq!(cfg.len(), 1);
        assert_eq!(cfg.report().skipped.len(), 4);
        assert!(cfg
            .report()
            .skipped
            .iter()
            .all(|(_, reason)| matches!(reason, SkipReason::DecodeFailed(_))));
    }

    #[test]
    fn test_env_file_has_highest_precedence() {
        let tmp = TempDir::new().expect("tmp");
        write(&tmp, "a.json", r#"{"PORT": 1, "HOST": "json"}"#);
        write(&tmp, ".env", "PORT=42\nDEBUG=false\n");

        let cfg = ConfigLoader::new(tmp.path()).load(&["a.json"]).expect("config");
        assert_eq!(cfg.get("PORT"), Some(&json!(42)));
        assert_eq!(cfg.get_bool("DEBUG"), Some(false));
        assert_eq!(cfg.get_str("HOST"), Some("json"));
        assert_eq!(cfg.origin("PORT"), Some(&Origin::EnvFile(PathBuf::from(".env"))));
        assert_eq!(cfg.report().env_file, Some(PathBuf::from(".env")));
    }

    #[test]
    fn test_env_file_applies_with_no_inputs() {
        let tmp = TempDir::new().expect("tmp");
        write(&tmp, ".env", "ONLY=yes\n");

        let files: [&str; 0] = [];
        let cfg = ConfigLoader::new(tmp.path()).load(&files).expect("config");
        assert_eq!(cfg.get_str("ONLY"), Some("yes"));
    }

    #[test]
    fn test_custom_and_disabled_env_file() {
        let tmp = TempDir::new().expect("tmp");
        write(&tmp, ".env", "A=default\n");
        write(&tmp, "local.env", "A=local\n");

        let none: [&str; 0] = [];
        let custom = ConfigLoader::new(tmp.path()).env_file("local.env").load(&none).expect("cfg");
        assert_eq!(custom.get_str("A"), Some("local"));

        let disabled = ConfigLoader::new(tmp.path()).without_env_file().load(&none).expect("cfg");
        assert!(disabled.get("A").is_none());
        assert!(disabled.report().env_file.is_none());
    }

    #[test]
    fn test_malformed_env_file_fails_even_when_lenient() {
        let tmp = TempDir::new().expect("tmp");
        write(&tmp, ".env", "GOOD=1\nBAD LINE\n");

        let none: [&str; 0] = [];
        let err = ConfigLoader::new(tmp.path()).strict(false).load(&none).unwrap_err();
        assert!(matches!(err, ConfigError::Env { .. }));
    }

    #[test]
    fn test_directory_input_is_read_error() {
        let tmp = TempDir::new().expect("tmp");
        fs::create_dir(tmp.path().join("dir.json")).expect("mkdir");

        let err = ConfigLoader::new(tmp.path()).strict(false).load(&["dir.json"]).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_nested_paths_resolve_against_base() {
        let tmp = TempDir::new().expect("tmp");
        fs::create_dir(tmp.path().join("conf")).expect("mkdir");
        write(&tmp, "conf/app.yaml", "nested:\n  key: value\n");

        let cfg = ConfigLoader::new(tmp.path()).load(&["conf/app.yaml"]).expect("config");
        assert_eq!(cfg.get("nested"), Some(&json!({"key": "value"})));
    }

    #[test]
    fn test_load_config_uses_current_dir_and_absolute_paths() {
        let tmp = TempDir::new().expect("tmp");
        write(&tmp, "abs.json", r#"{"loaded_via_cwd_loader": "yes"}"#);

        let cfg = load_config(&[tmp.path().join("abs.json")]).expect("config");
        assert_eq!(cfg.get_str("loaded_via_cwd_loader"), Some("yes"));
        assert_eq!(cfg.report().merged, vec![tmp.path().join("abs.json")]);

        let loader = ConfigLoader::from_current_dir().expect("cwd");
        assert_eq!(loader.base_dir(), std::env::current_dir().expect("cwd").as_path());
        assert!(loader.is_strict());
        assert!(!loader.strict(false).is_strict());
    }

    #[test]
    fn test_config_iteration_and_origin_paths() {
        let tmp = TempDir::new().expect("tmp");
        write(&tmp, "a.toml", "b = 2
a = 1
");
        write(&tmp, ".env", "c=three
");

        let cfg = ConfigLoader::new(tmp.path()).load(&["a.toml"]).expect("config");
        let pairs: Vec<(&str, &serde_json::Value)> = cfg.iter().collect();
        assert_eq!(pairs, vec![("a", &json!(1)), ("b", &json!(2)), ("c", &json!("three"))]);
        assert_eq!(cfg.origin("a").map(Origin::path), Some(Path::new("a.toml")));
        assert_eq!(cfg.origin("c").map(Origin::path), Some(Path::new(".env")));

        let map = cfg.into_map();
        assert_eq!(map.len(), 3);
        assert_eq!(map["c"], json!("three"));
    }
}
