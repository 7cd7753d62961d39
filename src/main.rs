mod cli;
mod cmd;

use clap::{CommandFactory, Parser};
use cli::{Cli, Commands, ConfigAction, GoalAction};
use fitfocus::models::config::Config;
use fitfocus::output;
use std::process;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose {
            "debug".to_string()
        } else {
            Config::load()
                .map(|c| c.log.level)
                .unwrap_or_else(|_| "warn".to_string())
        };
        EnvFilter::new(level)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Init { skip } => cmd::init::run(skip, cli.human),
        Commands::Log { text } => cmd::log::run(&text.join(" "), cli.human),
        Commands::Show => cmd::show::run(cli.human),
        Commands::Status => cmd::status::run(cli.human),
        Commands::Edit { id, field, value } => cmd::record::run_edit(&id, &field, &value, cli.human),
        Commands::Delete { id } => cmd::record::run_delete(&id, cli.human),
        Commands::Goal { action } => match action {
            GoalAction::Show => cmd::goal::run_show(cli.human),
            GoalAction::Set { key, value } => cmd::goal::run_set(&key, &value, cli.human),
        },
        Commands::Export { output, copy } => cmd::export::run(output.as_deref(), copy, cli.human),
        Commands::Config { action } => match action {
            ConfigAction::Show => cmd::config::run_show(cli.human),
            ConfigAction::Set { key, value } => cmd::config::run_set(&key, &value),
        },
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "fitfocus", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        let code = match e.downcast_ref::<fitfocus::core::session::SessionError>() {
            Some(fitfocus::core::session::SessionError::RecordNotFound(_)) => "not_found",
            Some(fitfocus::core::session::SessionError::AmbiguousId(_)) => "ambiguous_id",
            Some(fitfocus::core::session::SessionError::EmptyInput) => "empty_input",
            None => "general_error",
        };
        let err = output::error("", code, &e.to_string());
        match serde_json::to_string(&err) {
            Ok(s) => eprintln!("{}", s),
            Err(_) => eprintln!("{}", e),
        }
        process::exit(1);
    }
}
