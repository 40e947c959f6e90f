//! `hanlint init` - write a starter configuration file.

use std::io::Write;
use std::path::PathBuf;

use miette::{IntoDiagnostic, Result};
use tracing::info;

use hanlint_core::ProofConfig;

const DEFAULT_CONFIG: &str = r#"{
  // Checkers to run, highest precedence first.
  "checkers": ["spelling", "spacing", "rule"],
  // Units below this Hangul ratio are skipped.
  "korean_ratio": 0.5,
  // Units shorter than this many characters are skipped.
  "min_unit_chars": 10,
  // Set to a LanguageTool server URL to enable the language-tool checker.
  "language_tool_url": null
}
"#;

pub fn run(force: bool) -> Result<()> {
    let config_path = PathBuf::from(ProofConfig::CONFIG_FILES[0]);

    if force && std::fs::symlink_metadata(&config_path).is_ok() {
        std::fs::remove_file(&config_path).into_diagnostic()?;
    }

    let mut options = std::fs::OpenOptions::new();
    options.write(true).create_new(true);

    match options.open(&config_path) {
        Ok(mut file) => {
            file.write_all(DEFAULT_CONFIG.as_bytes()).into_diagnostic()?;
            info!("Created {}", config_path.display());
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => Err(miette::miette!(
            "Config file already exists. Use --force to overwrite."
        )),
        Err(e) => Err(e).into_diagnostic(),
    }
}
