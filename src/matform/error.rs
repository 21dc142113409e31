use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatformError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Unknown key: {0}")]
    UnknownKey(String),

    #[error("Invalid value for {key}: expected {expected}")]
    TypeMismatch { key: String, expected: &'static str },

    #[error("{key} does not apply to a {control}")]
    NotApplicable { key: String, control: String },

    #[error("A control cannot be both a text area and a date picker")]
    ConflictingVariant,

    #[error("Control {index}: {source}")]
    InvalidControl {
        index: usize,
        #[source]
        source: Box<MatformError>,
    },

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MatformError>;
