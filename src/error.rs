use thiserror::Error;

pub type Result<T> = std::result::Result<T, XmlError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XmlError {
    /// The XML engine refused to render the value. The message is the engine's own.
    #[error("{0}")]
    Serialize(String),

    /// The document could not be bound to the target type. The message is the engine's own.
    #[error("{0}")]
    Deserialize(String),

    #[error("`{0}` is not a valid XML element name")]
    InvalidMetadataKey(String),

    #[error("value for `{0}` is not a finite number")]
    NonFiniteMetadataValue(String),
}
