use std::io::{ErrorKind, Write};
use std::process::{Command, Stdio};

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("Clipboard access denied: {0}")]
    PermissionDenied(String),

    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Somewhere text can be copied to.
pub trait Clipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Pipes text into an external clipboard program such as `wl-copy`,
/// `xclip -selection clipboard` or `pbcopy`.
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Parses a whitespace-separated command line. `None` when it is empty.
    pub fn from_command_line(command: &str) -> Option<Self> {
        let mut words = command.split_whitespace().map(str::to_string);
        let program = words.next()?;
        Some(Self {
            program,
            args: words.collect(),
        })
    }
}

impl Clipboard for CommandClipboard {
    fn copy_text(&self, text: &str) -> Result<(), ClipboardError> {
        debug!("Copying {} bytes via {}", text.len(), self.program);

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                ErrorKind::PermissionDenied => ClipboardError::PermissionDenied(e.to_string()),
                _ => ClipboardError::Unavailable(format!("{}: {e}", self.program)),
            })?;

        // stdin is dropped at the end of this block so the program sees EOF
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()) {
                drop(stdin);
                let _ = child.kill();
                let _ = child.wait();
                return Err(ClipboardError::Unavailable(format!(
                    "{}: {e}",
                    self.program
                )));
            }
        }

        let status = child
            .wait()
            .map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::Unavailable(format!(
                "{} exited with {status}",
                self.program
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_parsing() {
        let clipboard = CommandClipboard::from_command_line("xclip -selection clipboard").unwrap();
        assert_eq!(clipboard.program, "xclip");
        assert_eq!(clipboard.args, vec!["-selection", "clipboard"]);
        assert!(CommandClipboard::from_command_line("   ").is_none());
    }

    #[test]
    fn test_missing_program_is_unavailable() {
        let clipboard =
            CommandClipboard::from_command_line("definitely-not-a-clipboard-binary-42").unwrap();
        let err = clipboard.copy_text("hello").unwrap_err();
        assert!(matches!(err, ClipboardError::Unavailable(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_successful_command_accepts_text() {
        let clipboard = CommandClipboard::from_command_line("cat").unwrap();
        clipboard.copy_text("hello").unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_program_that_ignores_stdin_is_reaped_on_write_error() {
        // `true` exits without reading, so a large write hits a closed pipe
        let clipboard = CommandClipboard::from_command_line("true").unwrap();
        let text = "x".repeat(4 * 1024 * 1024);
        match clipboard.copy_text(&text) {
            Err(ClipboardError::Unavailable(message)) => assert!(message.starts_with("true:")),
            other => panic!("unexpected outcome: {other:?}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_command_is_unavailable() {
        let clipboard = CommandClipboard::from_command_line("false").unwrap();
        assert!(matches!(
            clipboard.copy_text(""),
            Err(ClipboardError::Unavailable(_))
        ));
    }
}
