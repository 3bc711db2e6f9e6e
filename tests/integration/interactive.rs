//! End-to-end flows through the dispatcher with scripted answers.

use std::path::PathBuf;

use cpdf::app::{App, CompressOutcome, MergeOutcome, SessionState};
use cpdf::config::{Config, RunMode};
use cpdf::engine::args_lossy;
use cpdf::error::CpdfError;
use cpdf::output::OutputFormatter;
use cpdf::report::SizeReport;
use cpdf::workflow::Operation;
use serial_test::serial;

use crate::common::{
    Answer, RecordingRunner, RunnerBehavior, ScriptedPrompter, WorkDir, candidate_index,
};

fn app(
    mode: RunMode,
    answers: Vec<Answer>,
    behavior: RunnerBehavior,
) -> App<ScriptedPrompter, RecordingRunner> {
    let config = Config {
        mode,
        engine: PathBuf::from("gs"),
    };
    App::new(
        config,
        ScriptedPrompter::new(answers),
        RecordingRunner::new(behavior),
        OutputFormatter::plain(),
    )
}

#[tokio::test]
#[serial]
async fn test_merge_follows_selection_order() {
    let dir = WorkDir::new();
    dir.pdf("a.pdf", 100);
    dir.pdf("b.pdf", 100);
    let (a, b) = (candidate_index("a.pdf"), candidate_index("b.pdf"));

    let mut app = app(
        RunMode::Merge,
        vec![Answer::MultiSelect(Some(vec![b, a])), Answer::input("")],
        RunnerBehavior::Write(150),
    );

    let outcome = app.merge().await.unwrap();

    assert_eq!(
        outcome,
        MergeOutcome::Merged {
            output: PathBuf::from("merged.pdf")
        }
    );
    let invocations = app.runner().invocations();
    assert_eq!(invocations.len(), 1);
    assert_eq!(
        args_lossy(&invocations[0].args),
        vec![
            "-q",
            "-dNOPAUSE",
            "-sDEVICE=pdfwrite",
            "-sOutputFile=merged.pdf",
            "b.pdf",
            "a.pdf"
        ]
    );
    assert!(dir.path().join("merged.pdf").exists());
}

#[tokio::test]
#[serial]
async fn test_merge_with_no_selection_skips_engine() {
    let dir = WorkDir::new();
    dir.pdf("a.pdf", 100);

    let mut app = app(
        RunMode::Merge,
        vec![Answer::MultiSelect(Some(vec![]))],
        RunnerBehavior::Write(10),
    );

    let outcome = app.merge().await.unwrap();

    assert_eq!(outcome, MergeOutcome::NoInputs);
    assert_eq!(app.runner().call_count(), 0);
    // No output prompt either.
    assert_eq!(app.prompter().messages.len(), 1);
}

#[tokio::test]
#[serial]
async fn test_merge_declined_overwrite_cancels_silently() {
    let dir = WorkDir::new();
    dir.pdf("a.pdf", 100);
    dir.pdf("merged.pdf", 42);
    let a = candidate_index("a.pdf");

    let mut app = app(
        RunMode::Merge,
        vec![
            Answer::MultiSelect(Some(vec![a])),
            Answer::input(""),
            Answer::Confirm(false),
        ],
        RunnerBehavior::Write(10),
    );

    let outcome = app.merge().await.unwrap();

    assert_eq!(outcome, MergeOutcome::Cancelled);
    assert_eq!(app.runner().call_count(), 0);
    assert_eq!(std::fs::metadata("merged.pdf").unwrap().len(), 42);
}

#[tokio::test]
#[serial]
async fn test_merge_custom_name_gets_extension() {
    let dir = WorkDir::new();
    dir.pdf("a.pdf", 100);
    let a = candidate_index("a.pdf");

    let mut app = app(
        RunMode::Merge,
        vec![Answer::MultiSelect(Some(vec![a])), Answer::input("book")],
        RunnerBehavior::Write(10),
    );

    let outcome = app.merge().await.unwrap();

    assert_eq!(
        outcome,
        MergeOutcome::Merged {
            output: PathBuf::from("book.pdf")
        }
    );
    assert!(dir.path().join("book.pdf").exists());
}

#[tokio::test]
#[serial]
async fn test_empty_directory_has_no_candidates() {
    let _dir = WorkDir::new();

    let mut app = app(RunMode::Merge, vec![], RunnerBehavior::Write(10));

    assert_eq!(app.merge().await.unwrap(), MergeOutcome::NoCandidates);
    assert_eq!(app.compress().await.unwrap(), CompressOutcome::NoCandidates);
    assert!(app.prompter().messages.is_empty());
}

#[tokio::test]
#[serial]
async fn test_compress_reports_sizes() {
    let dir = WorkDir::new();
    dir.pdf("scan.pdf", 2000);
    let scan = candidate_index("scan.pdf");

    let mut app = app(
        RunMode::Compress,
        vec![
            Answer::Select(Some(scan)),
            Answer::input(""),
            Answer::Select(Some(1)),
        ],
        RunnerBehavior::Write(500),
    );

    let outcome = app.compress().await.unwrap();

    assert_eq!(
        outcome,
        CompressOutcome::Compressed {
            input: PathBuf::from("scan.pdf"),
            output: PathBuf::from("scan.compressed.pdf"),
            report: SizeReport::new(2000, 500),
        }
    );
    let invocations = app.runner().invocations();
    assert_eq!(invocations.len(), 1);
    let args = args_lossy(&invocations[0].args);
    assert!(args.contains(&"-dPDFSETTINGS=/screen".to_string()));
    assert!(args.contains(&"-sOutputFile=scan.compressed.pdf".to_string()));
    assert_eq!(&args[args.len() - 3..], ["scan.pdf", "-c", "quit"]);
}

#[tokio::test]
#[serial]
async fn test_compress_rejects_unknown_profile() {
    let dir = WorkDir::new();
    dir.pdf("scan.pdf", 2000);

    let mut app = app(
        RunMode::Compress,
        vec![
            Answer::Select(Some(0)),
            Answer::input(""),
            Answer::Select(Some(9)),
        ],
        RunnerBehavior::Write(500),
    );

    let outcome = app.compress().await.unwrap();

    assert_eq!(outcome, CompressOutcome::Invalid);
    assert_eq!(app.runner().call_count(), 0);
}

#[tokio::test]
#[serial]
async fn test_interactive_loop_until_exit() {
    let dir = WorkDir::new();
    dir.pdf("a.pdf", 100);

    let mut app = app(
        RunMode::Interactive,
        vec![
            // Unrecognized answer: message, back to the menu.
            Answer::Select(None),
            // Merge with nothing selected.
            Answer::Select(Some(0)),
            Answer::MultiSelect(Some(vec![])),
            // Exit.
            Answer::Select(Some(2)),
        ],
        RunnerBehavior::Write(10),
    );

    app.run().await.unwrap();

    assert_eq!(app.prompter().remaining(), 0);
    assert_eq!(app.runner().call_count(), 0);
}

#[tokio::test]
#[serial]
async fn test_interactive_loop_runs_several_operations() {
    let dir = WorkDir::new();
    dir.pdf("a.pdf", 100);
    dir.pdf("b.pdf", 300);
    let (a, b) = (candidate_index("a.pdf"), candidate_index("b.pdf"));

    let mut app = app(
        RunMode::Interactive,
        vec![
            Answer::Select(Some(0)),
            Answer::MultiSelect(Some(vec![a, b])),
            Answer::input("both"),
            Answer::Select(Some(1)),
            Answer::Select(Some(b)),
            Answer::input(""),
            Answer::Select(Some(0)),
            Answer::Select(Some(2)),
        ],
        RunnerBehavior::Write(120),
    );

    app.run_interactive().await.unwrap();

    let invocations = app.runner().invocations();
    assert_eq!(invocations.len(), 2);
    assert!(dir.path().join("both.pdf").exists());
    assert!(dir.path().join("b.compressed.pdf").exists());
}

#[tokio::test]
#[serial]
async fn test_step_transitions() {
    let dir = WorkDir::new();
    dir.pdf("a.pdf", 100);

    let mut app = app(
        RunMode::Interactive,
        vec![
            Answer::Select(Some(1)),
            Answer::Select(Some(5)),
            Answer::Select(Some(2)),
        ],
        RunnerBehavior::Write(10),
    );

    let state = app.step(SessionState::Idle).await.unwrap();
    assert_eq!(state, SessionState::Running(Operation::Compress));

    // Out-of-range file pick: the operation ends, the session goes idle.
    let state = app.step(state).await.unwrap();
    assert_eq!(state, SessionState::Idle);

    let state = app.step(state).await.unwrap();
    assert_eq!(state, SessionState::Exited);
    assert_eq!(app.step(state).await.unwrap(), SessionState::Exited);
}

#[tokio::test]
#[serial]
async fn test_flag_mode_runs_exactly_once() {
    let dir = WorkDir::new();
    dir.pdf("a.pdf", 100);
    let a = candidate_index("a.pdf");

    // Running out of answers would be a fatal prompt error, so any
    // attempt to show the menu afterwards fails the test.
    let mut app = app(
        RunMode::Merge,
        vec![Answer::MultiSelect(Some(vec![a])), Answer::input("")],
        RunnerBehavior::Write(10),
    );

    app.run().await.unwrap();

    assert_eq!(app.runner().call_count(), 1);
    assert_eq!(app.prompter().remaining(), 0);
}

#[tokio::test]
#[serial]
async fn test_closed_input_is_fatal() {
    let _dir = WorkDir::new();

    let mut app = app(RunMode::Interactive, vec![], RunnerBehavior::Write(10));

    let err = app.run().await.unwrap_err();
    assert!(matches!(err, CpdfError::Prompt { .. }));
    assert_eq!(err.exit_code(), 3);
}

#[cfg(unix)]
#[tokio::test]
#[serial]
async fn test_engine_failure_is_fatal_and_removes_partial_output() {
    let dir = WorkDir::new();
    dir.pdf("a.pdf", 100);
    let a = candidate_index("a.pdf");

    let mut app = app(
        RunMode::Interactive,
        vec![
            Answer::Select(Some(0)),
            Answer::MultiSelect(Some(vec![a])),
            Answer::input(""),
            // Never reached.
            Answer::Select(Some(2)),
        ],
        RunnerBehavior::FailAfterPartialWrite,
    );

    let err = app.run_interactive().await.unwrap_err();

    assert!(matches!(err, CpdfError::EngineFailed { .. }));
    assert!(!dir.path().join("merged.pdf").exists());
    assert_eq!(app.prompter().remaining(), 1);
}

#[tokio::test]
#[serial]
async fn test_merge_refuses_to_write_over_an_input() {
    let dir = WorkDir::new();
    dir.pdf("a.pdf", 100);
    dir.pdf("b.pdf", 200);
    let (a, b) = (candidate_index("a.pdf"), candidate_index("b.pdf"));

    let mut app = app(
        RunMode::Merge,
        vec![
            Answer::MultiSelect(Some(vec![a, b])),
            Answer::input("b"),
            Answer::Confirm(true),
        ],
        RunnerBehavior::Write(10),
    );

    let outcome = app.merge().await.unwrap();

    assert_eq!(outcome, MergeOutcome::OutputIsInput);
    assert_eq!(app.runner().call_count(), 0);
    assert_eq!(std::fs::metadata(dir.path().join("b.pdf")).unwrap().len(), 200);
}

#[tokio::test]
#[serial]
async fn test_compress_refuses_to_write_over_its_input() {
    let dir = WorkDir::new();
    dir.pdf("scan.pdf", 2000);
    let scan = candidate_index("scan.pdf");

    let mut app = app(
        RunMode::Compress,
        vec![
            Answer::Select(Some(scan)),
            Answer::input("./scan.pdf"),
            Answer::Confirm(true),
        ],
        RunnerBehavior::Write(500),
    );

    let outcome = app.compress().await.unwrap();

    assert_eq!(outcome, CompressOutcome::OutputIsInput);
    assert_eq!(app.runner().call_count(), 0);
    // No profile prompt after the refusal.
    assert_eq!(app.prompter().remaining(), 0);
    assert_eq!(app.prompter().messages.len(), 3);
    assert_eq!(std::fs::metadata(dir.path().join("scan.pdf")).unwrap().len(), 2000);
}
