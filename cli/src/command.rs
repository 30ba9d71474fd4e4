use clap::{Args, Subcommand};
use lnassist::BookDirectory;
use std::path::PathBuf;

mod clear;
mod init;
mod list;
mod pack;

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create the working directory of a volume.
    Init(init::InitCommand),
    /// Show the reading order and illustrations a volume would be packed with.
    List(list::ListCommand),
    /// Assemble a volume into an EPUB file.
    Pack(pack::PackCommand),
    /// Remove the working directory of a volume.
    Clear(clear::ClearCommand),
}

/// Identifies the working directory of one volume:
/// `<base>/<series in lowercase>/vol<volume>`
#[derive(Debug, Args)]
pub struct VolumeArgs {
    /// Name of the series (e.g., "Otomege")
    pub series: String,

    /// Volume number
    pub volume: u32,

    /// Directory containing the working directories of all series
    #[arg(long, default_value = "files")]
    pub base: PathBuf,
}

impl VolumeArgs {
    pub fn directory(&self) -> BookDirectory {
        BookDirectory::for_volume(&self.base, &self.series, self.volume)
    }

    /// Default title of the volume, e.g. `Otomege Volume 1`.
    pub fn title(&self) -> String {
        format!("{} Volume {}", self.series, self.volume)
    }
}
