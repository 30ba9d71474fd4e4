use crate::command::VolumeArgs;
use anyhow::Context;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitCommand {
    #[command(flatten)]
    volume: VolumeArgs,
}

impl InitCommand {
    pub fn init(&self) -> anyhow::Result<()> {
        let directory = self.volume.directory();
        directory
            .create()
            .with_context(|| format!("Failed to create `{}`", directory.root().display()))?;

        println!("{}", directory.chapters_dir().display());
        println!("{}", directory.illustrations_dir().display());
        Ok(())
    }
}
