//! Top-level dispatcher.
//!
//! [`App`] owns the prompter, the engine runner and the immutable
//! [`Config`]. In interactive mode it cycles through [`SessionState`] until
//! the user picks "Exit"; with `--merge` or `--compress` it runs exactly one
//! operation.

use std::path::PathBuf;

use crate::config::{BuildInfo, Config, RunMode};
use crate::engine::{self, CompressRequest, EngineRunner, Invocation, MergeRequest};
use crate::error::Result;
use crate::files;
use crate::output::{self, OutputFormatter};
use crate::prompt::Prompter;
use crate::report::SizeReport;
use crate::resolve::{self, OutputChoice};
use crate::workflow::{self, Operation, Selection};

/// Default merge output, used both as label and as path.
pub const MERGED_OUTPUT: &str = "merged.pdf";

/// Label shown for the compress output default.
pub const COMPRESSED_OUTPUT_LABEL: &str = "<original name>.compressed.pdf";

/// Where the interactive loop is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting at the menu.
    Idle,
    /// An operation is in flight.
    Running(Operation),
    /// The user chose to exit.
    Exited,
}

/// How a merge ended, short of a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MergeOutcome {
    /// The engine wrote `output`.
    Merged {
        /// Resolved output path.
        output: PathBuf,
    },
    /// The working directory has no PDFs.
    NoCandidates,
    /// The user selected nothing.
    NoInputs,
    /// The file selection was aborted.
    Invalid,
    /// The user declined to overwrite the output.
    Cancelled,
    /// The chosen output is one of the selected inputs.
    OutputIsInput,
}

/// How a compression ended, short of a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompressOutcome {
    /// The engine wrote `output`.
    Compressed {
        /// File that was compressed.
        input: PathBuf,
        /// Resolved output path.
        output: PathBuf,
        /// Sizes before and after.
        report: SizeReport,
    },
    /// The working directory has no PDFs.
    NoCandidates,
    /// The file or profile selection was not one of the options.
    Invalid,
    /// The user declined to overwrite the output.
    Cancelled,
    /// The chosen output is the input file itself.
    OutputIsInput,
}

/// The interactive application.
pub struct App<P, R> {
    config: Config,
    prompter: P,
    runner: R,
    formatter: OutputFormatter,
}

impl<P: Prompter, R: EngineRunner> App<P, R> {
    /// Create an application.
    pub fn new(config: Config, prompter: P, runner: R, formatter: OutputFormatter) -> Self {
        Self {
            config,
            prompter,
            runner,
            formatter,
        }
    }

    /// The prompter, for inspection after a run.
    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    /// The engine runner, for inspection after a run.
    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run whatever the configured mode asks for.
    pub async fn run(&mut self) -> Result<()> {
        if self.config.mode == RunMode::Version {
            println!("{}", BuildInfo::current());
            return Ok(());
        }

        self.formatter
            .section(&format!("Welcome to {} v{}", crate::NAME, crate::VERSION));

        match self.config.mode {
            RunMode::Compress => {
                self.compress().await?;
            }
            RunMode::Merge => {
                self.merge().await?;
            }
            RunMode::Interactive => self.run_interactive().await?,
            RunMode::Version => {}
        }

        Ok(())
    }

    /// Loop over the menu until the user exits.
    pub async fn run_interactive(&mut self) -> Result<()> {
        let mut state = SessionState::Idle;
        while state != SessionState::Exited {
            state = self.step(state).await?;
        }
        Ok(())
    }

    /// Advance the session by one transition.
    pub async fn step(&mut self, state: SessionState) -> Result<SessionState> {
        match state {
            SessionState::Idle => match workflow::choose_operation(&mut self.prompter)? {
                Selection::Chosen(Operation::Exit) => {
                    self.formatter.info("Bye!");
                    Ok(SessionState::Exited)
                }
                Selection::Chosen(operation) => Ok(SessionState::Running(operation)),
                Selection::Invalid => {
                    self.formatter.warning(output::INVALID_OPTION);
                    Ok(SessionState::Idle)
                }
            },
            SessionState::Running(Operation::Merge) => {
                self.merge().await?;
                Ok(SessionState::Idle)
            }
            SessionState::Running(Operation::Compress) => {
                self.compress().await?;
                Ok(SessionState::Idle)
            }
            SessionState::Running(Operation::Exit) | SessionState::Exited => {
                Ok(SessionState::Exited)
            }
        }
    }

    /// Merge flow: pick files, resolve the output, run the engine.
    pub async fn merge(&mut self) -> Result<MergeOutcome> {
        let outcome = self.merge_inner().await?;
        output::display_merge_outcome(&self.formatter, &outcome);
        Ok(outcome)
    }

    async fn merge_inner(&mut self) -> Result<MergeOutcome> {
        let candidates = files::list_candidates()?;
        if candidates.is_empty() {
            return Ok(MergeOutcome::NoCandidates);
        }

        let inputs = match workflow::choose_merge_inputs(&mut self.prompter, &candidates)? {
            Selection::Chosen(inputs) if inputs.is_empty() => return Ok(MergeOutcome::NoInputs),
            Selection::Chosen(inputs) => inputs,
            Selection::Invalid => return Ok(MergeOutcome::Invalid),
        };

        let output =
            match resolve::resolve_output(&mut self.prompter, MERGED_OUTPUT, MERGED_OUTPUT)? {
                OutputChoice::Path(output) => output,
                OutputChoice::Cancelled => return Ok(MergeOutcome::Cancelled),
            };
        if resolve::is_one_of(&output, &inputs) {
            return Ok(MergeOutcome::OutputIsInput);
        }

        let request = MergeRequest { inputs, output };
        log::info!(
            "Merging {} file(s) into {}",
            request.inputs.len(),
            request.output.display()
        );

        self.formatter.info("Merging...");
        let invocation = Invocation::merge(&self.config.engine, &request);
        engine::execute(&self.runner, &invocation, &request.output).await?;

        Ok(MergeOutcome::Merged {
            output: request.output,
        })
    }

    /// Compress flow: pick a file, resolve the output, pick a profile, run
    /// the engine and report the size change.
    pub async fn compress(&mut self) -> Result<CompressOutcome> {
        let outcome = self.compress_inner().await?;
        output::display_compress_outcome(&self.formatter, &outcome);
        Ok(outcome)
    }

    async fn compress_inner(&mut self) -> Result<CompressOutcome> {
        let candidates = files::list_candidates()?;
        if candidates.is_empty() {
            return Ok(CompressOutcome::NoCandidates);
        }

        let input = match workflow::choose_compress_input(&mut self.prompter, &candidates)? {
            Selection::Chosen(input) => input,
            Selection::Invalid => return Ok(CompressOutcome::Invalid),
        };

        let default_output = resolve::compressed_output_name(&input);
        let output = match resolve::resolve_output(
            &mut self.prompter,
            COMPRESSED_OUTPUT_LABEL,
            &default_output,
        )? {
            OutputChoice::Path(output) => output,
            OutputChoice::Cancelled => return Ok(CompressOutcome::Cancelled),
        };
        if resolve::is_one_of(&output, std::slice::from_ref(&input)) {
            return Ok(CompressOutcome::OutputIsInput);
        }

        let profile = match workflow::choose_compression_profile(&mut self.prompter)? {
            Selection::Chosen(profile) => profile,
            Selection::Invalid => return Ok(CompressOutcome::Invalid),
        };

        let before = files::file_size(&input).await?;
        let request = CompressRequest {
            input,
            output,
            profile,
        };
        log::info!(
            "Compressing {} into {} with profile {}",
            request.input.display(),
            request.output.display(),
            request.profile
        );

        self.formatter.info("Compressing...");
        let invocation = Invocation::compress(&self.config.engine, &request);
        engine::execute(&self.runner, &invocation, &request.output).await?;

        let after = files::file_size(&request.output).await?;

        Ok(CompressOutcome::Compressed {
            input: request.input,
            output: request.output,
            report: SizeReport::new(before, after),
        })
    }
}
