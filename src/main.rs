use clap::Parser;
use log::*;

use grt::{
    Result,
    cli::{self, Command},
    command,
    error::GrtError,
    forge::{factory::ForgeFactory, manager::ForgeOptions},
};

fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("grt")
        .build();

    // stdout carries only changelog text
    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .map_err(GrtError::from)?;

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli_args = cli::Args::parse();

    initialize_logger(cli_args.debug)?;

    let remote = cli_args.get_remote()?;

    let manager = ForgeFactory::create(
        &remote,
        ForgeOptions {
            dry_run: cli_args.command.dry_run(),
        },
    )?;

    if manager.dry_run() {
        warn!("dry_run enabled: no changes will be made on {}", remote.host);
    }

    match cli_args.command {
        Command::Milestone(args) => {
            command::milestone::execute(&manager, args.into()).await?;
        }
        Command::Changelog(args) => {
            let options = args.options()?;
            let text =
                command::changelog::execute(&manager, &args.release, &options)
                    .await?;
            print!("{text}");
        }
        Command::Release(args) => {
            command::release::execute(&manager, args.into()).await?;
        }
    }

    if manager.dry_run() {
        info!(
            "dry_run: skipped {} changes",
            manager.dry_run_actions().len()
        );
    }

    Ok(())
}
