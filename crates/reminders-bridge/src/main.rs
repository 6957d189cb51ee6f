use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;

use reminders_bridge::cli::{self, CliArgs};
use reminders_bridge::logging::init_logging;
use reminders_bridge::{default_transports, BridgeConfig, Dispatcher, LocaleTable};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let _ = error.print();
            return match error.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::FAILURE,
            };
        }
    };

    init_logging(&args.log_level);

    let config = match BridgeConfig::load(args.config.as_deref()) {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!(%error, "using default configuration");
            BridgeConfig::default()
        }
    };
    tracing::debug!(?config, "configuration resolved");

    let locales = LocaleTable::builtin();
    let locale = args.resolve_locale(&config.locale);
    let Some(request) = cli::into_request(args, locale) else {
        println!("{}", cli::help_text(&locales, locale));
        return ExitCode::SUCCESS;
    };

    let dispatcher = Dispatcher::new(default_transports(&config), &locales);
    match dispatcher.run(request).await {
        Ok(response) => match serde_json::to_string(&response) {
            Ok(line) => {
                println!("{line}");
                ExitCode::SUCCESS
            }
            Err(error) => {
                tracing::error!(%error, "failed to encode response");
                ExitCode::FAILURE
            }
        },
        Err(failure) => {
            eprintln!("{failure}");
            ExitCode::FAILURE
        }
    }
}
