use anyhow::Result;
use clap::Parser;

use earthspin::cli::{Cli, Commands, ConfigCommands, RunArgs};
use earthspin::logging::init_logging;

mod commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let config = commands::load_config(cli.config.as_deref())?;

    match cli.command {
        None => commands::run::handle(config, &RunArgs::default()),
        Some(Commands::Run(args)) => commands::run::handle(config, &args),
        Some(Commands::Frame(args)) => commands::frame::handle(config, &args),
        Some(Commands::Config(cmd)) => match cmd {
            ConfigCommands::Show => commands::config::handle_show(&config),
            ConfigCommands::Path => commands::config::handle_path(cli.config.as_deref()),
        },
    }
}
