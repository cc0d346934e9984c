//! JSON configuration loading and environment import

use crate::error::FatalError;
use anyhow::{Context, Result};
use serde_json::Value;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Append `.json` when the path carries no such extension.
///
/// Applied to the `--config` value before both the import and the
/// transformation stages so the one flag resolves to the same file in both.
pub fn ensure_json_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext == "json" => path.to_path_buf(),
        _ => {
            let mut with_ext = path.as_os_str().to_os_string();
            with_ext.push(".json");
            PathBuf::from(with_ext)
        }
    }
}

/// Render a JSON value the way it should appear in an environment variable
/// or a rewritten file: strings verbatim, everything else as its JSON text.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub fn load_document(config_file: &Path) -> Result<serde_json::Map<String, Value>> {
    let content = fs::read_to_string(config_file)
        .with_context(|| format!("Failed reading config file: {}", config_file.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON config: {}", config_file.display()))
}

/// Import every top-level key of the config document as an environment
/// variable. Mutates process-wide state for the lifetime of the run.
///
/// A missing config file is fatal (exit code 1).
pub fn import_config(config_path: &Path) -> Result<usize> {
    let config_file = ensure_json_extension(config_path);
    if !config_file.exists() {
        return Err(FatalError::MissingConfig { path: config_file }.into());
    }

    let doc = load_document(&config_file)?;
    for (key, value) in &doc {
        env::set_var(key, value_to_string(value));
    }

    tracing::info!("Imported configuration from {}", config_file.display());
    Ok(doc.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn ensure_json_extension_appends_when_absent() {
        assert_eq!(ensure_json_extension(Path::new("conf")), PathBuf::from("conf.json"));
        assert_eq!(ensure_json_extension(Path::new("a/b/conf")), PathBuf::from("a/b/conf.json"));
    }

    #[test]
    fn ensure_json_extension_keeps_existing() {
        assert_eq!(ensure_json_extension(Path::new("conf.json")), PathBuf::from("conf.json"));
    }

    #[test]
    fn ensure_json_extension_appends_after_other_extension() {
        assert_eq!(ensure_json_extension(Path::new("conf.cfg")), PathBuf::from("conf.cfg.json"));
    }

    #[test]
    fn value_to_string_renders_scalars() {
        assert_eq!(value_to_string(&Value::String("x".into())), "x");
        assert_eq!(value_to_string(&serde_json::json!(42)), "42");
        assert_eq!(value_to_string(&serde_json::json!(true)), "true");
    }

    #[test]
    fn import_sets_environment_variables() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("settings.json");
        // Unique key names: tests in this binary share one process environment.
        fs::write(&path, r#"{"IMPORT_PROJECT_TEST_A":"1","IMPORT_PROJECT_TEST_B":"x"}"#)
            .expect("write");

        let imported = import_config(&path).expect("import");
        assert_eq!(imported, 2);
        assert_eq!(env::var("IMPORT_PROJECT_TEST_A").expect("A set"), "1");
        assert_eq!(env::var("IMPORT_PROJECT_TEST_B").expect("B set"), "x");
    }

    #[test]
    fn import_stringifies_non_string_values() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("settings.json");
        fs::write(&path, r#"{"IMPORT_PROJECT_TEST_PORT":8080}"#).expect("write");

        import_config(&path).expect("import");
        assert_eq!(env::var("IMPORT_PROJECT_TEST_PORT").expect("PORT set"), "8080");
    }

    #[test]
    fn import_resolves_extensionless_path() {
        let tmp = TempDir::new().expect("tmp");
        fs::write(tmp.path().join("settings.json"), r#"{"IMPORT_PROJECT_TEST_EXT":"ok"}"#)
            .expect("write");

        import_config(&tmp.path().join("settings")).expect("import");
        assert_eq!(env::var("IMPORT_PROJECT_TEST_EXT").expect("set"), "ok");
    }

    #[test]
    fn import_missing_config_is_fatal_with_code_1() {
        let tmp = TempDir::new().expect("tmp");
        let err = import_config(&tmp.path().join("nope")).expect_err("should fail");
        assert_eq!(crate::error::exit_code(&err), 1);
    }

    #[test]
    fn import_invalid_json_is_an_error() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{not json").expect("write");
        assert!(import_config(&path).is_err());
    }
}
