//! Ghostscript command construction and invocation.
//!
//! Both operations build a discrete argument vector; nothing is ever handed
//! to a shell, so file names with spaces, quotes or other metacharacters
//! reach the engine untouched.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::config::CompressionProfile;
use crate::error::{CpdfError, Result};

/// Compatibility level requested for compressed output.
pub const COMPATIBILITY_LEVEL: &str = "1.6";

/// Rendering threads requested for compression.
pub const RENDERING_THREADS: u32 = 4;

/// Inputs and destination of a merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    /// Files to concatenate, in output order. Never empty.
    pub inputs: Vec<PathBuf>,
    /// Resolved output path.
    pub output: PathBuf,
}

/// Input, destination and preset of a compression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompressRequest {
    /// File to compress.
    pub input: PathBuf,
    /// Resolved output path.
    pub output: PathBuf,
    /// Ghostscript preset.
    pub profile: CompressionProfile,
}

/// A fully built engine command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Engine program, bare name or path.
    pub program: PathBuf,
    /// Arguments, one element per argv entry.
    pub args: Vec<OsString>,
}

impl Invocation {
    /// `-q -dNOPAUSE -sDEVICE=pdfwrite -sOutputFile=<out> <inputs...>`
    pub fn merge(program: impl Into<PathBuf>, request: &MergeRequest) -> Self {
        let mut args: Vec<OsString> = ["-q", "-dNOPAUSE", "-sDEVICE=pdfwrite"]
            .into_iter()
            .map(OsString::from)
            .collect();
        args.push(output_file_arg(&request.output));
        args.extend(request.inputs.iter().map(|input| input.as_os_str().to_owned()));

        Self {
            program: program.into(),
            args,
        }
    }

    /// Ghostscript compression with the chosen `-dPDFSETTINGS` preset,
    /// finishing with `-c quit`.
    pub fn compress(program: impl Into<PathBuf>, request: &CompressRequest) -> Self {
        let mut args: Vec<OsString> = vec![
            "-q".into(),
            "-sDEVICE=pdfwrite".into(),
            format!("-dCompatibilityLevel={COMPATIBILITY_LEVEL}").into(),
            format!("-dNumRenderingThreads={RENDERING_THREADS}").into(),
            format!("-dPDFSETTINGS=/{}", request.profile).into(),
            "-dNOPAUSE".into(),
            "-dQUIET".into(),
            "-dBATCH".into(),
        ];
        args.push(output_file_arg(&request.output));
        args.push(request.input.as_os_str().to_owned());
        args.push("-c".into());
        args.push("quit".into());

        Self {
            program: program.into(),
            args,
        }
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

fn output_file_arg(output: &Path) -> OsString {
    let mut arg = OsString::from("-sOutputFile=");
    arg.push(output.as_os_str());
    arg
}

/// Something that can run an [`Invocation`] to completion.
#[async_trait]
pub trait EngineRunner {
    /// Run the engine once and wait for it to exit.
    ///
    /// Launch failures and non-zero exits are errors.
    async fn run(&self, invocation: &Invocation) -> Result<()>;
}

/// Runs the real engine as a child process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessRunner;

#[async_trait]
impl EngineRunner for ProcessRunner {
    async fn run(&self, invocation: &Invocation) -> Result<()> {
        let program = locate_program(&invocation.program)?;
        log::debug!("Running {invocation}");

        let output = Command::new(&program)
            .args(&invocation.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .output()
            .await
            .map_err(|source| CpdfError::EngineLaunch {
                program: program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(CpdfError::EngineFailed {
                program,
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        Ok(())
    }
}

/// Bare names are looked up on `PATH`; anything with a directory part is
/// used as given.
fn locate_program(program: &Path) -> Result<PathBuf> {
    if program.components().count() > 1 {
        return Ok(program.to_path_buf());
    }

    which::which(program.as_os_str()).map_err(|_| CpdfError::EngineNotFound {
        program: program.to_string_lossy().into_owned(),
    })
}

/// Run `invocation` and clean up after a failed run.
///
/// When the engine started but exited unsuccessfully, whatever it left at
/// `output` is removed before the error is returned. A launch failure leaves
/// `output` alone since the engine never touched it.
pub async fn execute<R: EngineRunner + ?Sized>(
    runner: &R,
    invocation: &Invocation,
    output: &Path,
) -> Result<()> {
    let result = runner.run(invocation).await;

    if let Err(CpdfError::EngineFailed { .. }) = &result {
        remove_partial_output(output).await;
    }

    result
}

async fn remove_partial_output(output: &Path) {
    match tokio::fs::remove_file(output).await {
        Ok(()) => log::info!("Removed partial output {}", output.display()),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => log::warn!(
            "Failed to remove partial output {}: {err}",
            output.display()
        ),
    }
}

/// Argument list as plain strings, for assertions and logs.
pub fn args_lossy(args: &[OsString]) -> Vec<String> {
    args.iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect()
}
