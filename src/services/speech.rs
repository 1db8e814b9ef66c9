//! Speech capabilities
//!
//! Recognition and synthesis are consumed from the platform, never
//! implemented here. The terminal build delegates both to external commands
//! configured in settings; without a command the capability is unsupported.
//!
//! Only one recognition session runs at a time. Its output is read on a
//! helper thread and handed back through a channel that the UI polls on
//! every tick.

use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;

use crate::config::settings::{CommandSpec, SpeechSettings};
use crate::error::{PaisaError, PaisaResult};

/// Environment variable carrying the speech locale to external commands
pub const LOCALE_ENV: &str = "PAISA_SPEECH_LOCALE";

/// Environment variable carrying the speaking rate to the synthesizer
pub const RATE_ENV: &str = "PAISA_SPEECH_RATE";

/// Something that happened during a recognition session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// The recognizer produced a transcript
    Transcript(String),
    /// The session failed
    Error(String),
    /// The session is over; always the last event
    End,
}

/// Platform speech-to-text
pub trait SpeechRecognizer {
    /// Begin listening in the given locale
    fn start(&mut self, locale: &str) -> PaisaResult<()>;

    /// Stop listening; pending results are discarded
    fn stop(&mut self);

    /// Next event from the active session, if one is ready
    fn poll(&mut self) -> Option<RecognitionEvent>;

    fn is_listening(&self) -> bool;
}

/// Platform text-to-speech
pub trait SpeechSynthesizer {
    fn speak(&mut self, text: &str, locale: &str, rate: f32) -> PaisaResult<()>;
}

/// Stand-in used when no speech command is configured
#[derive(Debug, Default)]
pub struct Unsupported;

impl SpeechRecognizer for Unsupported {
    fn start(&mut self, _locale: &str) -> PaisaResult<()> {
        Err(PaisaError::recognition_unsupported())
    }

    fn stop(&mut self) {}

    fn poll(&mut self) -> Option<RecognitionEvent> {
        None
    }

    fn is_listening(&self) -> bool {
        false
    }
}

impl SpeechSynthesizer for Unsupported {
    fn speak(&mut self, _text: &str, _locale: &str, _rate: f32) -> PaisaResult<()> {
        Err(PaisaError::synthesis_unsupported())
    }
}

struct Session {
    child: Child,
    output: Receiver<io::Result<String>>,
    /// Everything the command wrote, once stdout has closed
    read: Option<io::Result<String>>,
    /// The result event was delivered; `End` comes next
    finished: bool,
}

/// Recognizer that runs an external command and reads its stdout
///
/// The helper thread only reads output. The child itself stays with the
/// session so that stopping never waits on the reader.
pub struct CommandRecognizer {
    spec: CommandSpec,
    session: Option<Session>,
}

impl CommandRecognizer {
    pub fn new(spec: CommandSpec) -> Self {
        Self {
            spec,
            session: None,
        }
    }
}

fn result_event(read: io::Result<String>, status: Option<ExitStatus>) -> RecognitionEvent {
    match (read, status) {
        (Err(e), _) => RecognitionEvent::Error(e.to_string()),
        (Ok(_), Some(status)) if !status.success() => {
            RecognitionEvent::Error(format!("Recognizer exited with {}", status))
        }
        (Ok(output), _) if output.trim().is_empty() => {
            RecognitionEvent::Error("No speech detected".into())
        }
        (Ok(output), _) => RecognitionEvent::Transcript(output.trim().to_string()),
    }
}

impl SpeechRecognizer for CommandRecognizer {
    fn start(&mut self, locale: &str) -> PaisaResult<()> {
        if self.session.is_some() {
            return Err(PaisaError::Speech("A recognition session is already active".into()));
        }

        let mut child = Command::new(&self.spec.program)
            .args(&self.spec.args)
            .env(LOCALE_ENV, locale)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                PaisaError::Speech(format!("Failed to start '{}': {}", self.spec.program, e))
            })?;

        let mut stdout = child
            .stdout
            .take()
            .ok_or_else(|| PaisaError::Speech("Recognizer has no stdout".into()))?;

        let (sender, output) = mpsc::channel();
        thread::spawn(move || {
            let mut text = String::new();
            let read = stdout.read_to_string(&mut text).map(|_| text);
            // The receiver is gone if the session was stopped
            let _ = sender.send(read);
        });

        tracing::info!(program = %self.spec.program, locale, "Recognition started");
        self.session = Some(Session {
            child,
            output,
            read: None,
            finished: false,
        });
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(mut session) = self.session.take() {
            let _ = session.child.kill();
            let _ = session.child.wait();
            tracing::info!("Recognition stopped");
        }
    }

    fn poll(&mut self) -> Option<RecognitionEvent> {
        let session = self.session.as_mut()?;
        if session.finished {
            self.session = None;
            return Some(RecognitionEvent::End);
        }

        if session.read.is_none() {
            match session.output.try_recv() {
                Ok(read) => session.read = Some(read),
                Err(TryRecvError::Empty) => return None,
                Err(TryRecvError::Disconnected) => {
                    session.read = Some(Err(io::Error::other("Recognizer output was lost")))
                }
            }
        }

        // Output is complete; report once the process has exited
        let status = match session.child.try_wait() {
            Ok(Some(status)) => Some(status),
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Could not check recognizer status");
                None
            }
        };

        let event = result_event(session.read.take()?, status);
        if let RecognitionEvent::Error(ref e) = event {
            tracing::warn!(error = %e, "Recognition failed");
        }
        session.finished = true;
        Some(event)
    }

    fn is_listening(&self) -> bool {
        self.session.is_some()
    }
}

impl Drop for CommandRecognizer {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Synthesizer that runs an external command with the text as last argument
pub struct CommandSynthesizer {
    spec: CommandSpec,
}

impl CommandSynthesizer {
    pub fn new(spec: CommandSpec) -> Self {
        Self { spec }
    }
}

impl SpeechSynthesizer for CommandSynthesizer {
    fn speak(&mut self, text: &str, locale: &str, rate: f32) -> PaisaResult<()> {
        let mut child = Command::new(&self.spec.program)
            .args(&self.spec.args)
            .arg(text)
            .env(LOCALE_ENV, locale)
            .env(RATE_ENV, rate.to_string())
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| {
                PaisaError::Speech(format!("Failed to start '{}': {}", self.spec.program, e))
            })?;

        tracing::debug!(program = %self.spec.program, locale, "Speaking");

        // Reap the process without blocking the UI
        thread::spawn(move || {
            let _ = child.wait();
        });
        Ok(())
    }
}

/// Build the recognizer described by the settings
pub fn recognizer_from_settings(settings: &SpeechSettings) -> Box<dyn SpeechRecognizer> {
    match &settings.recognizer {
        Some(spec) => Box::new(CommandRecognizer::new(spec.clone())),
        None => Box::new(Unsupported),
    }
}

/// Build the synthesizer described by the settings
pub fn synthesizer_from_settings(settings: &SpeechSettings) -> Box<dyn SpeechSynthesizer> {
    match &settings.synthesizer {
        Some(spec) => Box::new(CommandSynthesizer::new(spec.clone())),
        None => Box::new(Unsupported),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn wait_for_events(recognizer: &mut dyn SpeechRecognizer) -> Vec<RecognitionEvent> {
        let deadline = Instant::now() + Duration::from_secs(10);
        let mut events = Vec::new();
        while Instant::now() < deadline {
            match recognizer.poll() {
                Some(RecognitionEvent::End) => {
                    events.push(RecognitionEvent::End);
                    break;
                }
                Some(event) => events.push(event),
                None => thread::sleep(Duration::from_millis(10)),
            }
        }
        events
    }

    #[test]
    fn test_unsupported_recognizer() {
        let mut recognizer = Unsupported;
        let err = SpeechRecognizer::start(&mut recognizer, "hi-IN").unwrap_err();
        assert!(err.is_unsupported());
        assert!(!recognizer.is_listening());
    }

    #[test]
    fn test_unsupported_synthesizer() {
        let mut synth = Unsupported;
        assert!(synth.speak("hello", "en-IN", 0.8).unwrap_err().is_unsupported());
    }

    #[test]
    fn test_from_settings_without_commands() {
        let settings = SpeechSettings::default();
        let mut recognizer = recognizer_from_settings(&settings);
        assert!(recognizer.start("en-IN").is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_recognizer_reads_transcript() {
        let spec = CommandSpec::new("sh")
            .arg("-c")
            .arg("echo \"Spent 200 rupees ($PAISA_SPEECH_LOCALE)\"");
        let mut recognizer = CommandRecognizer::new(spec);

        recognizer.start("en-IN").unwrap();
        assert!(recognizer.is_listening());

        let events = wait_for_events(&mut recognizer);
        assert_eq!(
            events,
            vec![
                RecognitionEvent::Transcript("Spent 200 rupees (en-IN)".into()),
                RecognitionEvent::End
            ]
        );
        assert!(!recognizer.is_listening());
    }

    #[cfg(unix)]
    #[test]
    fn test_command_recognizer_reports_failure() {
        let spec = CommandSpec::new("sh").arg("-c").arg("exit 3");
        let mut recognizer = CommandRecognizer::new(spec);

        recognizer.start("hi-IN").unwrap();
        let events = wait_for_events(&mut recognizer);
        assert!(matches!(events.first(), Some(RecognitionEvent::Error(_))));
        assert_eq!(events.last(), Some(&RecognitionEvent::End));
    }

    #[cfg(unix)]
    #[test]
    fn test_only_one_session_at_a_time() {
        let spec = CommandSpec::new("sh").arg("-c").arg("sleep 5");
        let mut recognizer = CommandRecognizer::new(spec);

        recognizer.start("hi-IN").unwrap();
        assert!(recognizer.start("hi-IN").is_err());

        recognizer.stop();
        assert!(!recognizer.is_listening());
        assert!(recognizer.poll().is_none());
    }

    #[cfg(unix)]
    #[test]
    fn test_stop_does_not_wait_for_running_command() {
        let spec = CommandSpec::new("sh")
            .arg("-c")
            .arg("echo hello; exec 1>&-; sleep 4");
        let mut recognizer = CommandRecognizer::new(spec);

        recognizer.start("en-IN").unwrap();
        thread::sleep(Duration::from_millis(500));

        // stdout is closed but the command is still running
        assert!(recognizer.poll().is_none());
        assert!(recognizer.is_listening());

        let started = Instant::now();
        recognizer.stop();
        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(!recognizer.is_listening());
    }

    #[cfg(unix)]
    #[test]
    fn test_transcript_waits_for_exit() {
        let spec = CommandSpec::new("sh")
            .arg("-c")
            .arg("echo \"50 rupees\"; exec 1>&-; sleep 1");
        let mut recognizer = CommandRecognizer::new(spec);

        recognizer.start("en-IN").unwrap();
        let events = wait_for_events(&mut recognizer);
        assert_eq!(
            events,
            vec![RecognitionEvent::Transcript("50 rupees".into()), RecognitionEvent::End]
        );
    }

    #[test]
    fn test_missing_program_is_speech_error() {
        let mut recognizer = CommandRecognizer::new(CommandSpec::new("paisa-no-such-recognizer"));
        let err = recognizer.start("en-IN").unwrap_err();
        assert!(matches!(err, PaisaError::Speech(_)));
    }
}
