use crate::config::SavedSession;
use crate::conversion::{self, format_result, ConversionRule};

// Represents the current high-level state of the application UI
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum State {
    Initialising, // App is starting, loading config, restoring the session
    Running,      // Converter screen
    About,        // Showing the about screen
}

// Contents of the input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputState {
    pub raw_text: String,
    pub is_valid: bool,
}

// An untouched field is not flagged, validation only runs on edits.
impl Default for InputState {
    fn default() -> Self {
        Self {
            raw_text: String::new(),
            is_valid: true,
        }
    }
}

// What the result card shows
#[derive(Debug, Clone, PartialEq)]
pub enum ResultState {
    Value(f32),
    Error(String),
}

impl ResultState {
    pub fn value(&self) -> Option<f32> {
        match self {
            ResultState::Value(v) => Some(*v),
            ResultState::Error(_) => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            ResultState::Value(_) => None,
            ResultState::Error(msg) => Some(msg),
        }
    }

    pub fn display_text(&self) -> String {
        match self {
            ResultState::Value(v) => format_result(*v),
            ResultState::Error(msg) => msg.clone(),
        }
    }
}

impl Default for ResultState {
    fn default() -> Self {
        ResultState::Value(0.0)
    }
}

/// Everything the converter screen remembers between events.
///
/// The last successful value survives an error: once the input is corrected
/// the card falls back to showing it until the next conversion.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ConverterSession {
    pub input: InputState,
    last_value: f32,
    error: Option<String>,
}

impl ConverterSession {
    pub fn input_changed(&mut self, raw_text: &str) {
        log::debug!("Input changed to {:?}", raw_text);
        self.input.raw_text = raw_text.to_string();
        match conversion::validate(raw_text) {
            conversion::ValidationResult::Valid => {
                self.input.is_valid = true;
                self.error = None;
            }
            conversion::ValidationResult::Invalid(e) => {
                log::debug!("Input flagged: {:?}", e.reason());
                self.input.is_valid = false;
                self.error = Some(e.to_string());
            }
        }
    }

    pub fn convert_with(&mut self, rule: &ConversionRule) -> ResultState {
        log::debug!("Conversion requested: {}", rule.label);
        match rule.apply(&self.input.raw_text) {
            Ok(value) => {
                self.last_value = value;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
        self.result()
    }

    pub fn result(&self) -> ResultState {
        match &self.error {
            Some(msg) => ResultState::Error(msg.clone()),
            None => ResultState::Value(self.last_value),
        }
    }

    pub fn to_saved(&self) -> SavedSession {
        SavedSession {
            input_text: self.input.raw_text.clone(),
            input_valid: self.input.is_valid,
            last_value: self.last_value,
            error_text: self.error.clone().unwrap_or_default(),
        }
    }

    // Restores verbatim, nothing is revalidated.
    pub fn from_saved(saved: &SavedSession) -> Self {
        let error = if saved.error_text.is_empty() {
            None
        } else {
            Some(saved.error_text.clone())
        };
        Self {
            input: InputState {
                raw_text: saved.input_text.clone(),
                is_valid: saved.input_valid,
            },
            last_value: saved.last_value,
            error,
        }
    }
}
