//! Shared helpers for the integration tests.
//!
//! Every test that uses [`WorkDir`] changes the process working directory,
//! so those tests must be marked `#[serial]`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use cpdf::engine::{EngineRunner, Invocation, args_lossy};
use cpdf::error::{CpdfError, Result};
pub use cpdf::prompt::scripted::{Answer, ScriptedPrompter};

/// A scratch directory that is the working directory while alive.
pub struct WorkDir {
    dir: tempfile::TempDir,
    previous: PathBuf,
}

impl WorkDir {
    /// Create an empty scratch directory and `cd` into it.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let previous = std::env::current_dir().expect("Failed to read current dir");
        std::env::set_current_dir(dir.path()).expect("Failed to enter temp dir");
        Self { dir, previous }
    }

    /// Absolute path of the scratch directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a fake PDF of `size` bytes.
    pub fn pdf(&self, name: &str, size: usize) -> PathBuf {
        let path = self.dir.path().join(name);
        let mut bytes = b"%PDF-1.7\n".to_vec();
        bytes.resize(size.max(bytes.len()), b'%');
        std::fs::write(&path, bytes).expect("Failed to write fixture");
        path
    }
}

impl Drop for WorkDir {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.previous);
    }
}

/// How [`RecordingRunner`] behaves when invoked.
#[derive(Debug, Clone, Copy)]
pub enum RunnerBehavior {
    /// Write an output file of this many bytes and succeed.
    Write(usize),
    /// Write a partial output file, then fail like a crashed engine.
    #[cfg(unix)]
    FailAfterPartialWrite,
}

/// Engine runner that records every invocation instead of launching gs.
#[derive(Debug)]
pub struct RecordingRunner {
    behavior: RunnerBehavior,
    invocations: Mutex<Vec<Invocation>>,
}

impl RecordingRunner {
    pub fn new(behavior: RunnerBehavior) -> Self {
        Self {
            behavior,
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.invocations.lock().unwrap().len()
    }
}

/// Value of the `-sOutputFile=` argument.
pub fn output_file(invocation: &Invocation) -> PathBuf {
    args_lossy(&invocation.args)
        .into_iter()
        .find_map(|arg| arg.strip_prefix("-sOutputFile=").map(PathBuf::from))
        .expect("invocation has no -sOutputFile argument")
}

#[async_trait]
impl EngineRunner for RecordingRunner {
    async fn run(&self, invocation: &Invocation) -> Result<()> {
        self.invocations.lock().unwrap().push(invocation.clone());
        let output = output_file(invocation);

        match self.behavior {
            RunnerBehavior::Write(size) => {
                std::fs::write(&output, vec![b'%'; size])?;
                Ok(())
            }
            #[cfg(unix)]
            RunnerBehavior::FailAfterPartialWrite => {
                use std::os::unix::process::ExitStatusExt;

                std::fs::write(&output, b"%PDF-partial")?;
                Err(CpdfError::EngineFailed {
                    program: invocation.program.clone(),
                    status: std::process::ExitStatus::from_raw(1 << 8),
                    stderr: "Unrecoverable error, exit code 1".to_string(),
                })
            }
        }
    }
}

/// Index of `name` in the candidate list the app will show.
pub fn candidate_index(name: &str) -> usize {
    cpdf::files::list_candidates()
        .expect("Failed to list candidates")
        .iter()
        .position(|path| path == Path::new(name))
        .unwrap_or_else(|| panic!("{name} is not a candidate"))
}
