use crate::command::VolumeArgs;
use anyhow::Context;
use clap::Args;
use lnassist::{BookBuilder, Packager};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PackCommand {
    #[command(flatten)]
    volume: VolumeArgs,

    /// Book title (Default: "<series> Volume <volume>")
    #[arg(long)]
    title: Option<String>,

    /// Book language
    #[arg(long, default_value = "en")]
    language: String,

    /// Book identifier (Default: derived from the title)
    #[arg(long)]
    identifier: Option<String>,

    /// Deflate compression level, 0 (stored) to 9
    #[arg(long, default_value_t = lnassist::packager::DEFAULT_COMPRESSION,
          value_parser = clap::value_parser!(u8).range(0..=9))]
    compression: u8,

    /// Output file (Default: "<title>.epub")
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl PackCommand {
    pub fn pack(&self) -> anyhow::Result<()> {
        let title = self.title.clone().unwrap_or_else(|| self.volume.title());
        let output = self
            .output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{title}.epub")));
        let directory = self.volume.directory();

        let mut builder = BookBuilder::new(&title);
        builder.language(&self.language);
        if let Some(identifier) = &self.identifier {
            builder.identifier(identifier);
        }

        let warnings = lnassist::assemble(
            &builder,
            &directory,
            Packager::new().compression(self.compression),
            &output,
        )
        .with_context(|| format!("Failed to assemble `{title}`"))?;

        if !warnings.is_empty() {
            tracing::warn!(count = warnings.len(), "some files were skipped");
        }
        println!("{}", output.display());
        Ok(())
    }
}
