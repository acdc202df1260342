use clap::Parser;
use orderdesk_cli::{cli::Cli, run};
use orderdesk_store::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "orderdesk_cli=info,orderdesk_store=info,orderdesk_order=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    tracing::debug!("Using config {:?}", config);

    let output = run(&cli, &config)?;
    print!("{}", output);
    Ok(())
}
