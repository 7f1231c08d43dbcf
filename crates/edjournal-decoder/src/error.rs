use std::fmt;

/// Result type for edjournal-decoder operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while decoding a single journal line
#[derive(Debug)]
pub enum Error {
    /// JSON parsing failed
    Json(serde_json::Error),

    /// Line parsed as JSON but is not an object
    NotAnObject,

    /// A field the event kind cannot do without is absent
    MissingField(String),

    /// A field is present with the wrong dynamic type
    FieldType {
        field: String,
        expected: &'static str,
    },

    /// Timestamp could not be read as ISO-8601
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },

    /// Number does not fit the fixed-point range
    Number { field: String, value: String },

    /// A decoding routine panicked
    Panic(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::NotAnObject => write!(f, "Journal line is not a JSON object"),
            Error::MissingField(field) => write!(f, "Missing field: {}", field),
            Error::FieldType { field, expected } => {
                write!(f, "Field {} is not {}", field, expected)
            }
            Error::Timestamp { value, source } => {
                write!(f, "Invalid timestamp {:?}: {}", value, source)
            }
            Error::Number { field, value } => {
                write!(f, "Field {} holds {} which is out of range", field, value)
            }
            Error::Panic(msg) => write!(f, "Decoder panicked: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Json(err) => Some(err),
            Error::Timestamp { source, .. } => Some(source),
            Error::NotAnObject
            | Error::MissingField(_)
            | Error::FieldType { .. }
            | Error::Number { .. }
            | Error::Panic(_) => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}
