use clap::Parser;
use lnassist_cli::Cli;
use lnassist_cli::command::Commands;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.commands {
        Commands::Init(init) => init.init()?,
        Commands::List(list) => list.list()?,
        Commands::Pack(pack) => pack.pack()?,
        Commands::Clear(clear) => clear.clear()?,
    }

    Ok(())
}

fn init_tracing() {
    // Override with `RUST_LOG`, e.g. `RUST_LOG=lnassist=debug`
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
