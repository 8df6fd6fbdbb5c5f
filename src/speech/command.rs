//! Speech through an external text-to-speech program.

use crate::config::SpeechConfig;
use crate::error::{Error, Result};
use crate::speech::traits::Announcer;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;

/// PowerShell script that speaks its first argument.
const WINDOWS_SPEAK_SCRIPT: &str = "& { Add-Type -AssemblyName System.Speech; \
     (New-Object System.Speech.Synthesis.SpeechSynthesizer).Speak($args[0]) }";

/// Announcer that runs a speech program once per announcement.
///
/// The text is passed as a single argument, never through a shell.
#[derive(Debug, Clone)]
pub struct CommandAnnouncer {
    program: String,
    args: Vec<String>,
    post_delay: Duration,
}

impl CommandAnnouncer {
    /// Create an announcer for `program`, placing `args` before the text.
    #[must_use]
    pub fn new(program: &str, args: Vec<String>, post_delay: Duration) -> Self {
        Self {
            program: program.to_string(),
            args,
            post_delay,
        }
    }

    /// Build an announcer from configuration, using the platform default
    /// program when none is configured.
    #[must_use]
    pub fn from_config(config: &SpeechConfig) -> Self {
        let post_delay = Duration::from_millis(config.post_delay_ms);
        match &config.command {
            Some(program) => Self::new(program, config.args.clone(), post_delay),
            None => {
                let mut announcer = Self::platform_default(post_delay);
                announcer.args.extend(config.args.iter().cloned());
                announcer
            }
        }
    }

    /// `say` on macOS, PowerShell speech on Windows, `espeak` elsewhere.
    #[must_use]
    pub fn platform_default(post_delay: Duration) -> Self {
        if cfg!(target_os = "macos") {
            Self::new("say", Vec::new(), post_delay)
        } else if cfg!(windows) {
            Self::new(
                "powershell",
                vec![
                    "-NoProfile".to_string(),
                    "-Command".to_string(),
                    WINDOWS_SPEAK_SCRIPT.to_string(),
                ],
                post_delay,
            )
        } else {
            Self::new("espeak", Vec::new(), post_delay)
        }
    }
}

impl Announcer for CommandAnnouncer {
    fn announce(&self, text: &str) -> Result<()> {
        tracing::debug!(program = %self.program, text, "speaking");

        let status = Command::new(&self.program)
            .args(&self.args)
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .status()
            .map_err(|e| Error::Speech(format!("failed to run {}: {e}", self.program)))?;

        if !status.success() {
            return Err(Error::Speech(format!("{} exited with {status}", self.program)));
        }

        if !self.post_delay.is_zero() {
            thread::sleep(self.post_delay);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_command_wins() {
        let config = SpeechConfig {
            command: Some("espeak-ng".to_string()),
            args: vec!["-s".to_string(), "120".to_string()],
            ..SpeechConfig::default()
        };

        let announcer = CommandAnnouncer::from_config(&config);
        assert_eq!(announcer.program, "espeak-ng");
        assert_eq!(announcer.args, vec!["-s", "120"]);
        assert_eq!(announcer.post_delay, Duration::from_millis(500));
    }

    #[test]
    fn platform_default_has_a_program() {
        let announcer = CommandAnnouncer::platform_default(Duration::ZERO);
        assert!(!announcer.program.is_empty());
    }

    #[test]
    fn missing_program_is_a_speech_error() {
        let announcer =
            CommandAnnouncer::new("revise-no-such-speech-program", Vec::new(), Duration::ZERO);
        let err = announcer.announce("cat").unwrap_err();
        assert!(matches!(err, Error::Speech(_)));
    }

    #[cfg(unix)]
    #[test]
    fn successful_program_is_ok() {
        let announcer = CommandAnnouncer::new("true", Vec::new(), Duration::ZERO);
        assert!(announcer.announce("cat").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn failing_program_is_a_speech_error() {
        let announcer = CommandAnnouncer::new("false", Vec::new(), Duration::ZERO);
        assert!(matches!(announcer.announce("cat"), Err(Error::Speech(_))));
    }
}
