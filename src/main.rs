use color_eyre::eyre::Result;
use mimalloc::MiMalloc;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use strata::{args::parse_args, run};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> Result<()> {
    let args = parse_args();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    if args.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();

        color_eyre::config::HookBuilder::default()
            .theme(color_eyre::config::Theme::new())
            .install()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
        color_eyre::install()?;
    }

    info!(?args, "Init");

    let output = run(&args)?;
    println!("{output}");

    Ok(())
}
