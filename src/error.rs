use thiserror::Error;

// Why a piece of text was rejected as a kilometer value
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidReason {
    #[error("nothing entered")]
    Empty,

    #[error("\"{0}\" uses ',' - use '.' as the decimal separator")]
    DecimalComma(String),

    #[error("\"{0}\" is not a number")]
    Malformed(String),
}

// The only error the converter produces. It never escapes a session,
// it is turned into the message shown in the result card.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Invalid input: {0}")]
    InvalidNumericInput(InvalidReason),
}

impl ConversionError {
    pub fn reason(&self) -> &InvalidReason {
        match self {
            ConversionError::InvalidNumericInput(reason) => reason,
        }
    }
}

impl From<InvalidReason> for ConversionError {
    fn from(reason: InvalidReason) -> Self {
        ConversionError::InvalidNumericInput(reason)
    }
}

// Failures of a headless (no window) run
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CliError {
    #[error("Unknown conversion rule: {0}")]
    UnknownRule(String),

    #[error(transparent)]
    Conversion(#[from] ConversionError),
}
