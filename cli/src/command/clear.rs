use crate::command::VolumeArgs;
use anyhow::Context;
use clap::Args;

#[derive(Debug, Args)]
pub struct ClearCommand {
    #[command(flatten)]
    volume: VolumeArgs,
}

impl ClearCommand {
    pub fn clear(&self) -> anyhow::Result<()> {
        let directory = self.volume.directory();
        let removed = directory
            .clear()
            .with_context(|| format!("Failed to remove `{}`", directory.root().display()))?;

        if !removed {
            tracing::info!(path = %directory.root().display(), "nothing to remove");
        }
        Ok(())
    }
}
