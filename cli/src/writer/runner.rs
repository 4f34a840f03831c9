use crate::error::{AppError, AppResult};
use std::process::{Command, Stdio};

/// Seam between the config writer and the external programs it drives.
pub trait CommandRunner {
    /// Run to completion; a non-zero exit is an error.
    fn run(&self, program: &str, args: &[&str]) -> AppResult<()>;

    /// Start a long-lived program and return without waiting for it.
    fn start_detached(&self, program: &str, args: &[&str]) -> AppResult<()>;
}

/// Runs commands for real, capturing their output for error messages.
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> AppResult<()> {
        log::debug!("Running {program} {}", args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AppError::Command(format!("Failed to start {program}: {e}")))?;

        if output.status.success() {
            return Ok(());
        }

        let mut details = String::from_utf8_lossy(&output.stdout).into_owned();
        details.push_str(&String::from_utf8_lossy(&output.stderr));
        Err(AppError::Command(format!(
            "{program} {} failed: {}\n{}",
            args.join(" "),
            output.status,
            details.trim_end()
        )))
    }

    fn start_detached(&self, program: &str, args: &[&str]) -> AppResult<()> {
        log::debug!("Starting {program} {}", args.join(" "));

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| AppError::Command(format!("Failed to start {program}: {e}")))?;

        // reap it if it exits while we are still running
        std::thread::spawn(move || child.wait());
        Ok(())
    }
}

/// Prints the commands instead of running them.
pub struct DryRunRunner;

impl CommandRunner for DryRunRunner {
    fn run(&self, program: &str, args: &[&str]) -> AppResult<()> {
        println!("would run: {program} {}", args.join(" "));
        Ok(())
    }

    fn start_detached(&self, program: &str, args: &[&str]) -> AppResult<()> {
        println!("would start: {program} {}", args.join(" "));
        Ok(())
    }
}
