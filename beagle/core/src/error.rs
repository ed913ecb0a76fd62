use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("Unsupported option: {0}")]
    UnsupportedOption(String),

    #[error("Invalid value `{value}` for option `{key}`: {reason}")]
    InvalidOption {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Malformed setting `{0}`, expected key=value")]
    MalformedSetting(String),
}
