//! Vocat speech infrastructure adapter.
//!
//! A [`workflows::Speaker`] implementation using a local command:
//!
//! - On macOS, the `say` command.
//! - On Windows, SAPI via PowerShell.
//! - On others, the `espeak` command.
//!
//! These commands might change over time. Speech is best-effort by contract:
//! the adapter reports failure (missing binary, non-zero exit), and the
//! caller decides to swallow it — a host without a TTS command must behave
//! identically to one with it, minus the sound.

use std::io;

use async_trait::async_trait;

use workflows::{Speaker, SpeechError};

/// A [`Speaker`] backed by the host's speech-synthesis command.
#[derive(Debug, Default)]
#[non_exhaustive]
pub struct LocalCommandSpeaker {}

impl LocalCommandSpeaker {
    /// Creates a new `LocalCommandSpeaker`.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Speaker for LocalCommandSpeaker {
    async fn speak(&self, message: &str) -> Result<(), SpeechError> {
        run_local_command(message)
            .await
            .map_err(|err| SpeechError(err.to_string()))
    }
}

#[cfg(not(windows))]
const CMD_NAME: &str = if cfg!(target_os = "macos") {
    "say"
} else {
    "espeak"
};

#[cfg(not(windows))]
async fn run_local_command(message: &str) -> io::Result<()> {
    let status = tokio::process::Command::new(CMD_NAME)
        .arg(message)
        .status()
        .await?;

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "failed to run `{CMD_NAME}` with message {message:?}"
        )))
    }
}

#[cfg(windows)]
async fn run_local_command(message: &str) -> io::Result<()> {
    let cmd = format!(
        "PowerShell -Command \"Add-Type -AssemblyName System.Speech; (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak('{message}');\""
    );
    let status = tokio::process::Command::new("powershell")
        .arg(cmd)
        .status()
        .await?;

    if status.success() {
        Ok(())
    } else {
        Err(io::Error::other(format!(
            "failed to run `powershell` with message {message:?}"
        )))
    }
}

#[cfg(all(test, not(windows)))]
mod tests {
    use super::*;

    #[test]
    fn platform_command_is_selected_at_compile_time() {
        if cfg!(target_os = "macos") {
            assert_eq!(CMD_NAME, "say");
        } else {
            assert_eq!(CMD_NAME, "espeak");
        }
    }
}
