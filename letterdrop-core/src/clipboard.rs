//! Copying text to the user's clipboard.
//!
//! The platform clipboard tools are tried first. When none of them is
//! available and stderr is a terminal, the text is sent as an OSC 52 escape,
//! which most modern terminal emulators turn into a clipboard write. stdout is
//! never used so piped letter output stays clean. Failures are logged and never
//! returned.

use std::io::IsTerminal;
use std::process::Stdio;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::process::Command;
use tracing::{debug, warn};

/// Clipboard programs, in order of preference.
const CLIPBOARD_COMMANDS: &[(&str, &[&str])] = &[
    ("wl-copy", &[]),
    ("xclip", &["-selection", "clipboard"]),
    ("xsel", &["--clipboard", "--input"]),
    ("pbcopy", &[]),
    ("clip", &[]),
];

/// How the text reached the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    /// Through a platform clipboard program.
    System(&'static str),
    /// Through an OSC 52 terminal escape.
    Terminal,
}

/// Copy `text` to the clipboard. Returns `None` if every method failed.
pub async fn copy_to_clipboard(text: &str) -> Option<CopyMethod> {
    for &(program, args) in CLIPBOARD_COMMANDS {
        match pipe_to(program, args, text).await {
            Ok(()) => return Some(CopyMethod::System(program)),
            Err(e) => debug!(program, error = %e, "Clipboard program unavailable"),
        }
    }

    let is_terminal = std::io::stderr().is_terminal();
    terminal_fallback(&mut tokio::io::stderr(), is_terminal, text).await
}

/// Write the OSC 52 escape to `out`, but only when it is attached to a terminal.
async fn terminal_fallback<W>(out: &mut W, is_terminal: bool, text: &str) -> Option<CopyMethod>
where
    W: AsyncWrite + Unpin,
{
    if !is_terminal {
        warn!("Failed to copy to clipboard: no clipboard program and no terminal");
        return None;
    }

    let written = async {
        out.write_all(osc52_sequence(text).as_bytes()).await?;
        out.flush().await
    }
    .await;
    match written {
        Ok(()) => Some(CopyMethod::Terminal),
        Err(e) => {
            warn!(error = %e, "Failed to copy to clipboard");
            None
        }
    }
}

/// OSC 52 "set clipboard" escape carrying `text`.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}

async fn pipe_to(program: &str, args: &[&str], text: &str) -> std::io::Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).await?;
        stdin.shutdown().await?;
    }

    let status = child.wait().await?;
    if status.success() {
        Ok(())
    } else {
        Err(std::io::Error::other(format!("{program} exited with {status}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_osc52_sequence() {
        assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x07");
        assert_eq!(osc52_sequence(""), "\x1b]52;c;\x07");
    }

    #[tokio::test]
    async fn test_missing_program_is_an_error() {
        let result = pipe_to("letterdrop-no-such-clipboard-tool", &[], "text").await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_terminal_fallback_skipped_when_not_a_terminal() {
        let mut out: Vec<u8> = Vec::new();
        let method = terminal_fallback(&mut out, false, "Dear Sir or Madam").await;
        assert_eq!(method, None);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_terminal_fallback_writes_escape_to_terminal() {
        let mut out: Vec<u8> = Vec::new();
        let method = terminal_fallback(&mut out, true, "hi").await;
        assert_eq!(method, Some(CopyMethod::Terminal));
        assert_eq!(out, b"\x1b]52;c;aGk=\x07");
    }
}
