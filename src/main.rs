use std::env;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use quco::cli::{self, Args};
use quco::config::{SetupError, SetupWizard};
use quco::error::AppError;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    // Read once at startup; everything downstream takes this as a plain
    // parameter instead of consulting the environment again.
    let autofill_active =
        env::var(cli::SHELL_AUTOFILL_ENV_VAR).is_ok_and(|value| value == "true");

    let result = if args.setup {
        SetupWizard::run().map_err(AppError::from)
    } else if args.config {
        cli::show_config::run();
        Ok(())
    } else if args.autofill_on {
        cli::autofill::enable()
    } else if args.autofill_off {
        cli::autofill::disable()
    } else if args.prompt.is_empty() {
        let _ = Args::command().print_help();
        Ok(())
    } else {
        let prompt = args.prompt.join(" ");
        cli::generate::run(&prompt, autofill_active).await
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(AppError::Setup(SetupError::Cancelled)) => {
            println!("✗ Cancelled.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn print_error(error: &AppError) {
    match error {
        AppError::Llm(e) if e.is_network_related() => {
            eprintln!("Error: network request failed.");
            eprintln!("Please check your internet connection and API key.");
        }
        _ => eprintln!("Error: {error}"),
    }
}
