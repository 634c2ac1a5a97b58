// SPDX-License-Identifier: MPL-2.0
//! Translation panel component.
//!
//! Owns the debounced fetch cycle: keystrokes and language changes restart a
//! quiet-period timer, and only the newest in-flight request may settle into
//! visible state. All mutation happens in [`State::update`]; the async work
//! (debounce sleep, HTTP call) is expressed as [`Task`] futures resolving to
//! messages.

mod view;

pub use view::{view, ViewContext};

use crate::app::config::{TranslatorConfig, DEFAULT_SOURCE_LANGUAGE, DEFAULT_TARGET_LANGUAGE};
use crate::error::TranslateError;
use crate::language::{self, Language};
use crate::translator::{self, LanguagePair};
use iced::Task;
use std::f32::consts::PI;
use std::time::Duration;

/// How far the spinner advances per animation tick, in radians.
const SPINNER_STEP: f32 = 0.35;

#[derive(Debug, Clone)]
pub enum Message {
    SourceLanguageSelected(Language),
    TargetLanguageSelected(Language),
    SourceTextChanged(String),
    SwapLanguages,
    /// The debounce quiet period elapsed for the given generation.
    DebounceElapsed(u64),
    /// A translation request settled.
    TranslationCompleted {
        sequence: u64,
        result: Result<String, TranslateError>,
    },
    /// Animation tick while a request is loading.
    SpinnerTick,
}

/// Session state for the translation panel. Discarded on exit.
pub struct State {
    pub source_language: Language,
    pub target_language: Language,
    pub source_text: String,
    /// Last successful translation. Kept across failed requests so the user
    /// never loses a result to a transient error.
    pub translated_text: String,
    pub last_error: Option<TranslateError>,
    pub is_loading: bool,
    debounce: Duration,
    /// Bumped on every change that restarts the quiet period. A
    /// `DebounceElapsed` carrying an older generation is a no-op.
    debounce_generation: u64,
    /// Token of the most recently issued (or invalidated) request. A
    /// settlement carrying any other token is discarded entirely.
    request_sequence: u64,
    spinner_rotation: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new(&TranslatorConfig::default())
    }
}

impl State {
    /// Builds panel state from persisted preferences, falling back to the
    /// default language pair when a stored code is unknown.
    pub fn new(config: &TranslatorConfig) -> Self {
        let source_language = config
            .source_language
            .as_deref()
            .and_then(language::find)
            .or_else(|| language::find(DEFAULT_SOURCE_LANGUAGE))
            .unwrap_or(language::LANGUAGES[0]);
        let target_language = config
            .target_language
            .as_deref()
            .and_then(language::find)
            .or_else(|| language::find(DEFAULT_TARGET_LANGUAGE))
            .unwrap_or(language::LANGUAGES[1]);

        Self {
            source_language,
            target_language,
            source_text: String::new(),
            translated_text: String::new(),
            last_error: None,
            is_loading: false,
            debounce: Duration::from_millis(config.effective_debounce_ms()),
            debounce_generation: 0,
            request_sequence: 0,
            spinner_rotation: 0.0,
        }
    }

    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }

    /// Generation of the newest pending debounce timer.
    pub fn debounce_generation(&self) -> u64 {
        self.debounce_generation
    }

    /// Token of the most recently issued request.
    pub fn request_sequence(&self) -> u64 {
        self.request_sequence
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::SourceLanguageSelected(language) => {
                self.source_language = language;
                self.restart_quiet_period()
            }
            Message::TargetLanguageSelected(language) => {
                self.target_language = language;
                self.restart_quiet_period()
            }
            Message::SourceTextChanged(text) => {
                self.source_text = text;
                self.restart_quiet_period()
            }
            Message::SwapLanguages => {
                std::mem::swap(&mut self.source_language, &mut self.target_language);
                // The error string is not a translation; only the last
                // successful result carries over into the source field.
                self.source_text = self.translated_text.clone();
                self.last_error = None;
                self.restart_quiet_period()
            }
            Message::DebounceElapsed(generation) => {
                if generation != self.debounce_generation {
                    return Task::none();
                }
                if self.source_text.trim().is_empty() {
                    return Task::none();
                }
                self.start_request()
            }
            Message::TranslationCompleted { sequence, result } => {
                if sequence != self.request_sequence {
                    // Stale settlement from a superseded request.
                    return Task::none();
                }
                self.is_loading = false;
                match result {
                    Ok(text) => {
                        self.translated_text = text;
                        self.last_error = None;
                    }
                    Err(error) => {
                        eprintln!("Translation request failed: {}", error);
                        self.last_error = Some(error);
                    }
                }
                Task::none()
            }
            Message::SpinnerTick => {
                self.spinner_rotation = (self.spinner_rotation + SPINNER_STEP) % (2.0 * PI);
                Task::none()
            }
        }
    }

    /// Restarts the debounce timer, or resets the panel when the source text
    /// is empty or whitespace-only (no request may fire for blank input).
    fn restart_quiet_period(&mut self) -> Task<Message> {
        self.debounce_generation = self.debounce_generation.wrapping_add(1);

        if self.source_text.trim().is_empty() {
            self.translated_text.clear();
            self.last_error = None;
            self.is_loading = false;
            // Invalidate any request still in flight.
            self.request_sequence = self.request_sequence.wrapping_add(1);
            return Task::none();
        }

        let generation = self.debounce_generation;
        let delay = self.debounce;
        Task::perform(tokio::time::sleep(delay), move |_| {
            Message::DebounceElapsed(generation)
        })
    }

    /// Issues the HTTP request for the current text and language pair.
    fn start_request(&mut self) -> Task<Message> {
        self.request_sequence = self.request_sequence.wrapping_add(1);
        let sequence = self.request_sequence;

        self.is_loading = true;
        self.last_error = None;

        let text = self.source_text.clone();
        let languages = LanguagePair {
            source: self.source_language.code,
            target: self.target_language.code,
        };

        Task::perform(translator::translate(text, languages), move |result| {
            Message::TranslationCompleted { sequence, result }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(state: &mut State, text: &str) -> u64 {
        let _ = state.update(Message::SourceTextChanged(text.to_string()));
        state.debounce_generation
    }

    #[test]
    fn default_pair_is_pt_br_to_en_us() {
        let state = State::default();
        assert_eq!(state.source_language.code, "pt-BR");
        assert_eq!(state.target_language.code, "en-US");
    }

    #[tokio::test]
    async fn stale_debounce_generation_is_a_no_op() {
        let mut state = State::default();
        let first = typed(&mut state, "Ol");
        let second = typed(&mut state, "Olá");
        assert_ne!(first, second);

        let _ = state.update(Message::DebounceElapsed(first));
        assert!(!state.is_loading, "stale timer must not start a request");

        let _ = state.update(Message::DebounceElapsed(second));
        assert!(state.is_loading, "latest timer starts the request");
    }

    #[test]
    fn empty_text_never_starts_a_request() {
        let mut state = State::default();
        let generation = typed(&mut state, "   ");
        let _ = state.update(Message::DebounceElapsed(generation));
        assert!(!state.is_loading);
    }

    #[test]
    fn clearing_text_resets_result_and_error() {
        let mut state = State::default();
        state.translated_text = "Hello".to_string();
        state.last_error = Some(TranslateError::Status(500));
        state.is_loading = true;

        let _ = state.update(Message::SourceTextChanged(String::new()));

        assert!(state.translated_text.is_empty());
        assert!(state.last_error.is_none());
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn successful_settlement_shows_translation() {
        let mut state = State::default();
        let generation = typed(&mut state, "Olá");
        let _ = state.update(Message::DebounceElapsed(generation));
        assert!(state.is_loading);

        let sequence = state.request_sequence;
        let _ = state.update(Message::TranslationCompleted {
            sequence,
            result: Ok("Hello".to_string()),
        });

        assert!(!state.is_loading);
        assert_eq!(state.translated_text, "Hello");
        assert!(state.last_error.is_none());
    }

    #[tokio::test]
    async fn failed_settlement_keeps_previous_translation() {
        let mut state = State::default();
        state.translated_text = "Hello".to_string();

        let generation = typed(&mut state, "Olá, mundo");
        // typing preserves the previous result until a new one settles
        assert_eq!(state.translated_text, "Hello");
        let _ = state.update(Message::DebounceElapsed(generation));

        let sequence = state.request_sequence;
        let _ = state.update(Message::TranslationCompleted {
            sequence,
            result: Err(TranslateError::Status(500)),
        });

        assert!(!state.is_loading);
        assert!(state.last_error.is_some());
        assert_eq!(state.translated_text, "Hello");
    }

    #[tokio::test]
    async fn stale_settlement_is_discarded_entirely() {
        let mut state = State::default();
        let generation = typed(&mut state, "Olá");
        let _ = state.update(Message::DebounceElapsed(generation));
        let old_sequence = state.request_sequence;

        // A newer request supersedes the first one.
        let generation = typed(&mut state, "Olá de novo");
        let _ = state.update(Message::DebounceElapsed(generation));
        assert!(state.is_loading);

        let _ = state.update(Message::TranslationCompleted {
            sequence: old_sequence,
            result: Ok("outdated".to_string()),
        });

        assert!(state.is_loading, "stale settlement must not clear loading");
        assert_ne!(state.translated_text, "outdated");
    }

    #[tokio::test]
    async fn swap_exchanges_codes_and_moves_translation() {
        let mut state = State::default();
        state.translated_text = "Hello".to_string();

        let _ = state.update(Message::SwapLanguages);

        assert_eq!(state.source_language.code, "en-US");
        assert_eq!(state.target_language.code, "pt-BR");
        assert_eq!(state.source_text, "Hello");
    }

    #[test]
    fn swap_with_error_showing_does_not_carry_the_error() {
        let mut state = State::default();
        state.last_error = Some(TranslateError::Network("boom".to_string()));
        state.translated_text = String::new();

        let _ = state.update(Message::SwapLanguages);

        assert!(state.last_error.is_none());
        assert!(state.source_text.is_empty());
    }

    #[tokio::test]
    async fn language_change_restarts_the_quiet_period() {
        let mut state = State::default();
        let generation = typed(&mut state, "Olá");

        let french = language::find("fr-FR").unwrap();
        let _ = state.update(Message::TargetLanguageSelected(french));
        assert_eq!(state.target_language.code, "fr-FR");

        let _ = state.update(Message::DebounceElapsed(generation));
        assert!(
            !state.is_loading,
            "timer started before the language change is stale"
        );
    }

    #[test]
    fn spinner_tick_advances_rotation() {
        let mut state = State::default();
        let before = state.spinner_rotation();
        let _ = state.update(Message::SpinnerTick);
        assert!(state.spinner_rotation() > before);
    }
}
