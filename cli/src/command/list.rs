use crate::command::VolumeArgs;
use anyhow::Context;
use clap::Args;
use lnassist::BookBuilder;

#[derive(Debug, Args)]
pub struct ListCommand {
    #[command(flatten)]
    volume: VolumeArgs,

    /// Also list illustrations
    #[arg(long)]
    illustrations: bool,
}

impl ListCommand {
    pub fn list(&self) -> anyhow::Result<()> {
        let directory = self.volume.directory();
        let build = BookBuilder::new(self.volume.title())
            .build_from(&directory)
            .with_context(|| format!("Failed to scan `{}`", directory.root().display()))?;
        let book = &build.book;

        for (entry, item) in book.chapters() {
            let label = entry.label().unwrap_or_default();
            println!("{label:<20} {}", item.href());
        }
        if self.illustrations {
            for item in book.illustrations() {
                println!("{:<20} {}", item.media_type(), item.href());
            }
        }
        Ok(())
    }
}
