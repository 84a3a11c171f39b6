//! Common arguments and helpers shared across edit commands.

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;
use vboedit::config::{config_file_path, ConfigFile, ConfigKey};
use vboedit::vbo::VboFile;

use crate::error::CliError;

/// Input and output files of an edit command.
#[derive(Debug, Clone, Args)]
pub struct IoArgs {
    /// Input .vbo file
    pub input: PathBuf,

    /// Output file [default: <input stem>_modified.vbo next to the input]
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

impl IoArgs {
    /// Where the edited file is written.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output_path(&self.input))
    }
}

/// `<stem>_modified.vbo` in the input's directory.
pub fn default_output_path(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    input.with_file_name(format!("{}_modified.vbo", stem))
}

/// Config file to use: `--config` if given, else the default location.
pub fn resolve_config_path(cli_path: Option<&Path>) -> PathBuf {
    cli_path
        .map(Path::to_path_buf)
        .unwrap_or_else(config_file_path)
}

/// Load the config file, failing on invalid values.
pub fn load_config(path: &Path) -> Result<ConfigFile, CliError> {
    debug!(path = %path.display(), "loading config");
    Ok(ConfigFile::load_from(path)?)
}

/// Read the input, apply `edit` and write the output.
///
/// Nothing is written if reading or editing fails.
pub fn edit_file<F>(io: &IoArgs, edit: F) -> Result<(), CliError>
where
    F: FnOnce(&mut VboFile) -> Result<(), CliError>,
{
    let mut file = VboFile::open(&io.input)?;
    edit(&mut file)?;

    let output = io.output_path();
    file.write(&output)?;
    println!("Wrote {}", output.display());
    Ok(())
}

/// Store a flag into `config` through the same validation as `config set`.
///
/// Absent flags leave the configured value in place.
pub fn apply_flag<T: ToString>(
    config: &mut ConfigFile,
    key: ConfigKey,
    value: &Option<T>,
) -> Result<(), CliError> {
    if let Some(value) = value {
        key.set(config, &value.to_string())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;
    use vboedit::config::ConfigError;
    use vboedit::VboError;

    #[test]
    fn test_default_output_path() {
        assert_eq!(
            default_output_path(Path::new("/data/lap3.vbo")),
            PathBuf::from("/data/lap3_modified.vbo")
        );
        assert_eq!(
            default_output_path(Path::new("session.VBO")),
            PathBuf::from("session_modified.vbo")
        );
    }

    #[test]
    fn test_explicit_output_wins() {
        let io = IoArgs {
            input: PathBuf::from("a.vbo"),
            output: Some(PathBuf::from("b.vbo")),
        };
        assert_eq!(io.output_path(), PathBuf::from("b.vbo"));
    }

    #[test]
    fn test_apply_flag() {
        let mut config = ConfigFile::default();
        apply_flag::<usize>(&mut config, ConfigKey::HeadingSmoothingWindow, &None).unwrap();
        assert_eq!(config.heading.smoothing_window, 5);
        apply_flag(&mut config, ConfigKey::HeadingSmoothingWindow, &Some(3)).unwrap();
        assert_eq!(config.heading.smoothing_window, 3);
    }

    #[test]
    fn test_apply_flag_rejects_spaced_column() {
        let mut config = ConfigFile::default();
        let result = apply_flag(
            &mut config,
            ConfigKey::HeadingColumn,
            &Some("heading gps".to_string()),
        );
        assert!(matches!(
            result,
            Err(CliError::ConfigFile(ConfigError::InvalidValue { .. }))
        ));
        assert_eq!(config.heading.heading_column, "heading_gps");
    }

    #[test]
    fn test_failed_edit_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.vbo");
        fs::write(&input, "[column names]\ntime\n[data]\n000000.00\n").unwrap();
        let io = IoArgs {
            input,
            output: None,
        };

        let result = edit_file(&io, |_| {
            Err(CliError::Vbo(VboError::MissingColumn("lat".to_string())))
        });
        assert!(result.is_err());
        assert!(!io.output_path().exists());
    }

    #[test]
    fn test_edit_writes_default_output() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("in.vbo");
        fs::write(&input, "[column names]\ntime\n[data]\n000000.00\n").unwrap();
        let io = IoArgs {
            input,
            output: None,
        };

        edit_file(&io, |file| {
            file.add_constant_column("marker", "marker", "1")?;
            Ok(())
        })
        .unwrap();

        let written = fs::read_to_string(dir.path().join("in_modified.vbo")).unwrap();
        assert!(written.contains("[column names]\ntime marker\n"));
    }
}
