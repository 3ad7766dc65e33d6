use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "length_converter.json";

// Configuration data saved to JSON
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfigData {
    #[serde(default = "default_restore")] // Restore unless explicitly turned off
    pub restore_session: bool,
    #[serde(default)] // Ensure field exists even if missing in JSON
    pub session: SavedSession,
}

fn default_restore() -> bool {
    true
}

// Default values for a new configuration
impl Default for ConfigData {
    fn default() -> Self {
        Self {
            restore_session: default_restore(),
            session: SavedSession::default(), // Empty input, result 0.000
        }
    }
}

// Converter session as written on exit and read back on start
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedSession {
    #[serde(default)]
    pub input_text: String,
    #[serde(default = "default_input_valid")] // Older files have no flag, show as unflagged
    pub input_valid: bool,
    #[serde(default)]
    pub last_value: f32,
    #[serde(default)] // Empty means no error was showing
    pub error_text: String,
}

fn default_input_valid() -> bool {
    true
}

impl Default for SavedSession {
    fn default() -> Self {
        Self {
            input_text: String::new(),
            input_valid: default_input_valid(),
            last_value: 0.0,
            error_text: String::new(),
        }
    }
}

// `<config dir>/length_converter.json`, or the working directory if there is no config dir
pub fn config_path() -> String {
    let config_dir = dirs::config_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string());
    format!("{}/{}", config_dir, CONFIG_FILE_NAME)
}
