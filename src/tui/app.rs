//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use std::time::Instant;

use crate::config::settings::Settings;
use crate::error::PaisaResult;
use crate::locale;
use crate::models::{Language, UserProfile};
use crate::services::speech::{recognizer_from_settings, synthesizer_from_settings};
use crate::services::{
    ChatBot, ExpenseBook, ExpenseParser, RecognitionEvent, SpeechRecognizer, SpeechSynthesizer,
};

use super::views::chat::ChatState;
use super::views::login::LoginFormState;
use super::views::voice::VoiceFormState;
use super::widgets::{Notification, NotificationQueue};

/// Which screen is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Dashboard,
    Voice,
    Chat,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active screen
    pub screen: Screen,

    /// Whether the help overlay is open
    pub show_help: bool,

    /// Set once login succeeds
    pub profile: Option<UserProfile>,

    pub login: LoginFormState,
    pub voice: VoiceFormState,

    /// Present only while the chat screen is open
    pub chat: Option<ChatState>,

    /// Expenses confirmed this session
    pub expenses: ExpenseBook,

    pub notifications: NotificationQueue,

    pub parser: ExpenseParser,

    recognizer: Box<dyn SpeechRecognizer>,
    synthesizer: Box<dyn SpeechSynthesizer>,

    /// Screen that started the active recognition session
    listening_for: Option<Screen>,
}

impl<'a> App<'a> {
    /// Create a new App using the speech commands from settings
    pub fn new(settings: &'a Settings) -> PaisaResult<Self> {
        Self::with_speech(
            settings,
            recognizer_from_settings(&settings.speech),
            synthesizer_from_settings(&settings.speech),
        )
    }

    /// Create an App with explicit speech capabilities
    pub fn with_speech(
        settings: &'a Settings,
        recognizer: Box<dyn SpeechRecognizer>,
        synthesizer: Box<dyn SpeechSynthesizer>,
    ) -> PaisaResult<Self> {
        Ok(Self {
            settings,
            should_quit: false,
            screen: Screen::default(),
            show_help: false,
            profile: None,
            login: LoginFormState::new(settings.default_language, settings.default_income),
            voice: VoiceFormState::new(),
            chat: None,
            expenses: ExpenseBook::new(),
            notifications: NotificationQueue::new(),
            parser: ExpenseParser::new()?,
            recognizer,
            synthesizer,
            listening_for: None,
        })
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.stop_listening();
        self.should_quit = true;
    }

    /// Language of the current screen's strings
    pub fn language(&self) -> Language {
        self.profile
            .as_ref()
            .map(|p| p.language)
            .unwrap_or(self.login.flow.language)
    }

    /// Show a toast for the configured duration
    pub fn notify(&mut self, notification: Notification) {
        let duration = std::time::Duration::from_secs(self.settings.notification_secs);
        self.notifications.push(notification.with_duration(duration));
    }

    /// Finish login and open the dashboard
    pub fn complete_login(&mut self, profile: UserProfile) {
        self.profile = Some(profile);
        self.switch_screen(Screen::Dashboard);
    }

    /// Switch to a different screen
    ///
    /// Leaving a screen ends its recognition session. The chat history
    /// lives only as long as the chat screen.
    pub fn switch_screen(&mut self, screen: Screen) {
        if self.listening_for.is_some_and(|owner| owner != screen) {
            self.stop_listening();
        }

        match screen {
            Screen::Voice => self.voice.reset(),
            Screen::Chat => {
                if let Some(profile) = &self.profile {
                    let bot = ChatBot::new(profile.language, profile.income);
                    self.chat = Some(ChatState::new(bot, self.settings.response_delay()));
                }
            }
            Screen::Login | Screen::Dashboard => {}
        }
        if screen != Screen::Chat {
            self.chat = None;
        }

        tracing::debug!(?screen, "Switched screen");
        self.screen = screen;
    }

    /// Whether a recognition session started by `screen` is active
    pub fn is_listening_for(&self, screen: Screen) -> bool {
        self.listening_for == Some(screen) && self.recognizer.is_listening()
    }

    /// Start a recognition session on behalf of a screen
    pub fn start_listening(&mut self, owner: Screen) {
        let locale = self.language().speech_locale();
        match self.recognizer.start(locale) {
            Ok(()) => self.listening_for = Some(owner),
            Err(e) if e.is_unsupported() => {
                tracing::warn!(error = %e, "No speech recognizer");
                self.notify(
                    Notification::error(locale::RECOGNITION_UNSUPPORTED).with_title("Not Supported"),
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not start recognition");
                self.notify(Notification::error(locale::MIC_ERROR));
            }
        }
    }

    pub fn stop_listening(&mut self) {
        self.recognizer.stop();
        self.listening_for = None;
    }

    /// Toggle recognition for a screen
    pub fn toggle_listening(&mut self, owner: Screen) {
        if self.is_listening_for(owner) {
            self.stop_listening();
        } else {
            self.start_listening(owner);
        }
    }

    /// Read text aloud in the profile's language
    pub fn speak(&mut self, text: &str) {
        let locale = self.language().speech_locale();
        let rate = self.settings.speech.rate;
        if let Err(e) = self.synthesizer.speak(text, locale, rate) {
            tracing::warn!(error = %e, "Could not speak");
            let message = if e.is_unsupported() {
                locale::SYNTHESIS_UNSUPPORTED.to_string()
            } else {
                e.to_string()
            };
            self.notify(Notification::error(message));
        }
    }

    /// Advance every timed behavior to `now`
    pub fn on_tick(&mut self, now: Instant) {
        self.notifications.remove_expired(now);

        while let Some(event) = self.recognizer.poll() {
            match event {
                RecognitionEvent::Transcript(text) => self.deliver_transcript(text, now),
                RecognitionEvent::Error(_) => self.notify(Notification::error(locale::MIC_ERROR)),
                RecognitionEvent::End => {
                    self.listening_for = None;
                    break;
                }
            }
        }

        self.voice.poll(now, &self.parser);
        if let Some(chat) = self.chat.as_mut() {
            chat.conversation.poll(now);
        }
    }

    fn deliver_transcript(&mut self, text: String, now: Instant) {
        match self.listening_for {
            Some(Screen::Voice) => {
                let due = now.checked_add(self.settings.processing_delay()).unwrap_or(now);
                self.voice.submit_transcript(&text, due);
            }
            Some(Screen::Chat) => {
                if let Some(chat) = self.chat.as_mut() {
                    chat.conversation.send(&text, now);
                }
            }
            _ => tracing::debug!("Transcript arrived with no listener"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PaisaError;
    use crate::models::{IncomeBracket, PhoneNumber};
    use std::collections::VecDeque;
    use std::time::Duration;

    /// Recognizer that replays scripted events
    #[derive(Default)]
    struct ScriptedRecognizer {
        events: VecDeque<RecognitionEvent>,
        listening: bool,
    }

    impl SpeechRecognizer for ScriptedRecognizer {
        fn start(&mut self, _locale: &str) -> PaisaResult<()> {
            self.listening = true;
            Ok(())
        }

        fn stop(&mut self) {
            self.listening = false;
            self.events.clear();
        }

        fn poll(&mut self) -> Option<RecognitionEvent> {
            let event = self.events.pop_front();
            if event == Some(RecognitionEvent::End) {
                self.listening = false;
            }
            event
        }

        fn is_listening(&self) -> bool {
            self.listening
        }
    }

    struct SilentSynth;

    impl SpeechSynthesizer for SilentSynth {
        fn speak(&mut self, _text: &str, _locale: &str, _rate: f32) -> PaisaResult<()> {
            Err(PaisaError::synthesis_unsupported())
        }
    }

    fn logged_in(settings: &Settings, events: Vec<RecognitionEvent>) -> App<'_> {
        let recognizer = ScriptedRecognizer {
            events: events.into(),
            listening: false,
        };
        let mut app = App::with_speech(settings, Box::new(recognizer), Box::new(SilentSynth))
            .unwrap();
        let phone = PhoneNumber::parse("9876543210").unwrap();
        app.complete_login(UserProfile::new(
            phone,
            Language::English,
            IncomeBracket::TenToFifteen,
        ));
        app
    }

    #[test]
    fn test_login_opens_dashboard() {
        let settings = Settings::default();
        let app = logged_in(&settings, vec![]);
        assert_eq!(app.screen, Screen::Dashboard);
        assert_eq!(app.language(), Language::English);
    }

    #[test]
    fn test_voice_transcript_is_processed_after_delay() {
        let settings = Settings::default();
        let mut app = logged_in(
            &settings,
            vec![
                RecognitionEvent::Transcript("Paid 50 rupees for auto fare".into()),
                RecognitionEvent::End,
            ],
        );
        app.switch_screen(Screen::Voice);
        app.start_listening(Screen::Voice);

        let now = Instant::now();
        app.on_tick(now);
        assert!(app.voice.is_processing());
        assert!(!app.is_listening_for(Screen::Voice));

        app.on_tick(now + Duration::from_millis(1500));
        assert!(!app.voice.is_processing());
        assert_eq!(app.voice.amount.value(), "50");
    }

    #[test]
    fn test_chat_transcript_is_sent_as_message() {
        let settings = Settings::default();
        let mut app = logged_in(
            &settings,
            vec![
                RecognitionEvent::Transcript("What is SIP?".into()),
                RecognitionEvent::End,
            ],
        );
        app.switch_screen(Screen::Chat);
        app.start_listening(Screen::Chat);
        app.on_tick(Instant::now());

        let chat = app.chat.as_ref().unwrap();
        assert_eq!(chat.conversation.messages().len(), 2);
        assert!(chat.conversation.is_typing());
    }

    #[test]
    fn test_recognition_error_notifies() {
        let settings = Settings::default();
        let mut app = logged_in(
            &settings,
            vec![RecognitionEvent::Error("denied".into()), RecognitionEvent::End],
        );
        app.switch_screen(Screen::Voice);
        app.start_listening(Screen::Voice);
        app.on_tick(Instant::now());

        assert_eq!(app.notifications.current().unwrap().message, locale::MIC_ERROR);
    }

    #[test]
    fn test_unsupported_speech_notifies() {
        let settings = Settings::default();
        let mut app = App::new(&settings).unwrap();
        app.start_listening(Screen::Voice);
        assert_eq!(
            app.notifications.current().unwrap().message,
            locale::RECOGNITION_UNSUPPORTED
        );

        app.speak("hello");
        assert_eq!(app.notifications.len(), 2);
    }

    #[test]
    fn test_leaving_chat_drops_history() {
        let settings = Settings::default();
        let mut app = logged_in(&settings, vec![]);
        app.switch_screen(Screen::Chat);
        assert!(app.chat.is_some());
        app.switch_screen(Screen::Dashboard);
        assert!(app.chat.is_none());
    }
}
