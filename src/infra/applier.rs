//! External applier command
//!
//! Runs the command that activates a freshly written configuration
//! (`netplan apply` by default).

use std::process::Command;

use crate::error::ApplyError;

/// Captured result of a successful apply
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApplyOutput {
    /// stdout followed by stderr
    pub output: String,
}

/// Applier backed by an external program
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandApplier {
    program: String,
    args: Vec<String>,
}

impl CommandApplier {
    /// Create an applier for `program` with fixed arguments
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Program name as configured
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Command line for display
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Run the command to completion
    ///
    /// Blocks until the program exits. A non-zero exit is an error carrying
    /// the combined output.
    pub fn apply(&self) -> Result<ApplyOutput, ApplyError> {
        let program = which::which(&self.program).map_err(|_| ApplyError::NotFound {
            program: self.program.clone(),
        })?;

        tracing::info!("Running {}", self.command_line());

        let output = Command::new(&program)
            .args(&self.args)
            .output()
            .map_err(|e| ApplyError::Spawn {
                program: self.program.clone(),
                error: e.to_string(),
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let combined = format!("{stdout}{stderr}");

        if !output.status.success() {
            tracing::warn!("{} exited with {}", self.command_line(), output.status);
            return Err(ApplyError::Failed {
                program: self.program.clone(),
                status: output.status,
                output: combined,
            });
        }

        tracing::debug!("{} output: {}", self.program, combined.trim());
        Ok(ApplyOutput { output: combined })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> CommandApplier {
        CommandApplier::new("sh", vec!["-c".to_string(), script.to_string()])
    }

    #[test]
    fn test_command_line() {
        let applier = CommandApplier::new("netplan", vec!["apply".to_string()]);
        assert_eq!(applier.command_line(), "netplan apply");
        assert_eq!(applier.program(), "netplan");
    }

    #[test]
    fn test_apply_captures_combined_output() {
        let result = sh("echo out; echo err >&2").apply().unwrap();
        assert_eq!(result.output, "out\nerr\n");
    }

    #[test]
    fn test_apply_nonzero_exit_is_error() {
        let err = sh("echo 'bad config'; exit 3").apply().unwrap_err();
        match err {
            ApplyError::Failed { status, output, .. } => {
                assert_eq!(status.code(), Some(3));
                assert!(output.contains("bad config"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_apply_missing_program() {
        let applier = CommandApplier::new("netform-no-such-command", Vec::new());
        assert!(matches!(
            applier.apply(),
            Err(ApplyError::NotFound { .. })
        ));
    }
}
