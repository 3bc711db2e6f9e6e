//! cpdf - merge or compress the PDF files in the current directory.

use clap::Parser;
use std::process;

use cpdf::app::App;
use cpdf::cli::Cli;
use cpdf::config::{self, BuildInfo, Config};
use cpdf::engine::ProcessRunner;
use cpdf::error::CpdfError;
use cpdf::output::OutputFormatter;
use cpdf::prompt::TerminalPrompter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // `-v` prints the version whatever else is on the command line, even
    // arguments clap rejects.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) if config::version_requested(std::env::args_os()) => {
            println!("{}", BuildInfo::current());
            return;
        }
        Err(err) => err.exit(),
    };
    let config = Config::from(&cli);

    if let Err(err) = run(config).await {
        OutputFormatter::new().error(&format!("Error: {err}"));
        process::exit(err.exit_code());
    }
}

/// Main application logic.
async fn run(config: Config) -> Result<(), CpdfError> {
    log::debug!("Starting with {config:?}");

    let mut app = App::new(
        config,
        TerminalPrompter::new(),
        ProcessRunner,
        OutputFormatter::new(),
    );
    app.run().await
}
