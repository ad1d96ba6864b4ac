use anyhow::Result;
use clap::Parser;
use keyprobe::{config::ProcessEnv, inspect, write_report, RAPIDAPI_KEY_VAR};
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "keyprobe")]
#[command(about = "Report presence and masked shape of the RAPIDAPI_KEY environment variable", long_about = None)]
struct Args {
    #[arg(short, long, help = "Enable debug logging")]
    debug: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging; diagnostics go to stderr, the report owns stdout
    let filter = if args.debug {
        EnvFilter::from_default_env()
            .add_directive("keyprobe=debug".parse()?)
            .add_directive("info".parse()?)
    } else {
        EnvFilter::from_default_env()
            .add_directive("keyprobe=info".parse()?)
            .add_directive("warn".parse()?)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    // Load .env if one exists; a missing file is not an error
    if dotenvy::dotenv().is_ok() {
        info!("Loaded environment from .env");
    }

    let result = inspect(&ProcessEnv, RAPIDAPI_KEY_VAR);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, &result)?;
    out.flush()?;

    // A missing key is a reportable outcome, not a failure
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["keyprobe", "--debug"]);
        assert!(args.debug);

        let args = Args::parse_from(["keyprobe"]);
        assert!(!args.debug);
    }
}
