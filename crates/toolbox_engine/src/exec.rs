use std::io;
use std::process::Command;

use thiserror::Error;
use toolbox_logging::toolbox_debug;

/// Captured result of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: Option<i32>,
    /// stdout with stderr appended, decoded lossily.
    pub stdout: String,
}

#[derive(Debug, Error)]
pub enum ExecError {
    #[error("failed to spawn {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
    #[error("{program} exited with code {code:?}")]
    NonZero {
        program: String,
        code: Option<i32>,
        output: String,
    },
}

/// Injected command-execution capability.
///
/// Every OS utility the toolbox shells out to goes through this trait,
/// so tests can substitute a scripted fake.
pub trait CommandRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ExecError>;
}

/// Runs commands through `std::process::Command`, blocking until exit.
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<CommandOutput, ExecError> {
        toolbox_debug!("running: {} {}", program, args.join(" "));
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| ExecError::Spawn {
                program: program.to_string(),
                source,
            })?;

        let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.stderr.is_empty() {
            text.push_str(&String::from_utf8_lossy(&output.stderr));
        }

        if !output.status.success() {
            return Err(ExecError::NonZero {
                program: program.to_string(),
                code: output.status.code(),
                output: text,
            });
        }
        Ok(CommandOutput {
            code: output.status.code(),
            stdout: text,
        })
    }
}
