//! `vboedit avi`: link a session to a video file.

use clap::Args;
use vboedit::config::{ConfigFile, ConfigKey};
use vboedit::transform::AviSyncConfig;
use vboedit::vbo::AviSection;

use super::common::{apply_flag, edit_file, IoArgs};
use crate::error::CliError;

/// Arguments for `vboedit avi`.
#[derive(Debug, Clone, Args)]
pub struct AviArgs {
    #[command(flatten)]
    pub io: IoArgs,

    /// Video file name prefix, e.g. video_
    #[arg(long)]
    pub video: String,

    /// Video container format
    #[arg(long, default_value = "MOV")]
    pub format: String,

    /// Index of the video file
    #[arg(long, default_value_t = 1)]
    pub index: i64,

    /// Video time of the first row (ms)
    #[arg(long, allow_hyphen_values = true)]
    pub start_sync_time: Option<i64>,

    /// HHMMSS.CC time column
    #[arg(long)]
    pub time_column: Option<String>,
}

impl AviArgs {
    fn resolve(&self, config: &ConfigFile) -> Result<(AviSection, AviSyncConfig), CliError> {
        let mut config = config.clone();
        apply_flag(&mut config, ConfigKey::AviStartSyncTime, &self.start_sync_time)?;
        apply_flag(&mut config, ConfigKey::AviTimeColumn, &self.time_column)?;

        let mut section = AviSection::new(self.video.as_str(), self.format.as_str(), self.index);
        section.index_column = config.avi.index_column;
        Ok((section, config.avi.sync))
    }
}

/// Run `vboedit avi`.
pub fn run(args: AviArgs, config: &ConfigFile) -> Result<(), CliError> {
    let (section, sync) = args.resolve(config)?;
    edit_file(&args.io, |file| Ok(file.add_avi_section(&section, &sync)?))
}
