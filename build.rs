use clap::CommandFactory;
use std::process::Command;

#[path = "src/cli.rs"]
mod cli;

fn main() -> std::io::Result<()> {
    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-env-changed=CPDF_GIT_COMMIT");
    println!("cargo:rerun-if-env-changed=CPDF_BUILD_SOURCE");

    let commit = std::env::var("CPDF_GIT_COMMIT")
        .ok()
        .or_else(git_short_commit)
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=CPDF_GIT_COMMIT={commit}");

    if let Ok(source) = std::env::var("CPDF_BUILD_SOURCE") {
        println!("cargo:rustc-env=CPDF_BUILD_SOURCE={source}");
    }

    let out_dir =
        std::path::PathBuf::from(std::env::var_os("OUT_DIR").ok_or(std::io::ErrorKind::NotFound)?);
    let cmd = cli::Cli::command();

    let man = clap_mangen::Man::new(cmd);
    let mut buffer: Vec<u8> = Default::default();
    man.render(&mut buffer)?;

    std::fs::write(out_dir.join("cpdf.1"), buffer)?;
    Ok(())
}

fn git_short_commit() -> Option<String> {
    let output = Command::new("git")
        .args(["rev-parse", "--short", "HEAD"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let commit = String::from_utf8(output.stdout).ok()?;
    let commit = commit.trim();
    (!commit.is_empty()).then(|| commit.to_string())
}
