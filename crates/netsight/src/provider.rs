//! Suggestion provider that delegates to an external command.
//!
//! The command receives the request as JSON on stdin and must print a
//! response as JSON on stdout:
//!
//! ```text
//! stdin:  {"networkType":"5G","goal":"Minimize bit error rate"}
//! stdout: {"suggestedParameters":{"modulation":"QPSK","bandwidth":20,
//!          "distance":300,"noiseLevel":-100},"reasoning":"..."}
//! ```
//!
//! Any bridge to a hosted or local model can sit behind this contract.

use std::io::{ErrorKind, Write};
use std::process::{Command, ExitStatus, Stdio};

use netsight_core::ProviderError;
use netsight_core::suggest::{SuggestionProvider, SuggestionRequest, SuggestionResponse};

#[derive(Debug)]
pub enum CommandError {
    /// Command exited unsuccessfully
    Exit { status: ExitStatus, stderr: String },
    /// Stdout was not a valid response document
    Response(serde_json::Error),
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::Exit { status, stderr } => {
                write!(f, "suggestion command failed ({status})")?;
                if !stderr.trim().is_empty() {
                    write!(f, ": {}", stderr.trim())?;
                }
                Ok(())
            }
            CommandError::Response(e) => write!(f, "invalid suggestion response: {e}"),
        }
    }
}

impl std::error::Error for CommandError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CommandError::Response(e) => Some(e),
            CommandError::Exit { .. } => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandProvider {
    program: String,
    args: Vec<String>,
}

impl CommandProvider {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Build from an argv list; `None` when the list is empty.
    pub fn from_argv(argv: &[String]) -> Option<Self> {
        let (program, args) = argv.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }
}

impl SuggestionProvider for CommandProvider {
    fn suggest(&self, request: &SuggestionRequest) -> Result<SuggestionResponse, ProviderError> {
        let input = serde_json::to_vec(request)?;

        tracing::debug!(program = %self.program, "Spawning suggestion command");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            // A command may answer without reading its input; let the exit
            // status and stdout decide.
            match stdin.write_all(&input) {
                Err(e) if e.kind() != ErrorKind::BrokenPipe => return Err(e.into()),
                _ => {}
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(Box::new(CommandError::Exit {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            }));
        }

        serde_json::from_slice(&output.stdout)
            .map_err(|e| Box::new(CommandError::Response(e)) as ProviderError)
    }
}
