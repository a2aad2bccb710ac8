use anyhow::Result;
use clap::Parser;
use mapgrid::cli::{Cli, Commands};
use mapgrid::commands::ExtractConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Extract {
            root,
            json_output,
            rust_output,
            no_prompt,
            verbosity,
        } => {
            init_logger(verbosity);
            mapgrid::commands::handle_extract(ExtractConfig {
                root,
                json_output,
                rust_output,
                no_prompt,
            })
        }
    }
}

fn init_logger(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}
