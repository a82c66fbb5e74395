use std::error::Error as StdError;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Syntax,
    MissingField,
    TypeMismatch,
    Routine,
    Encoding,
    Usage,
    Io,
}

#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    message: Option<String>,
    field: Option<String>,
    position: Option<usize>,
    expected: Option<String>,
    source: Option<Box<dyn StdError + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            message: None,
            field: None,
            position: None,
            expected: None,
            source: None,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    pub fn with_source(mut self, source: impl StdError + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// Text carried into the envelope's `result` field. Routine failures
    /// propagate their message verbatim; engine faults use the full display.
    pub fn envelope_text(&self) -> String {
        if self.kind == ErrorKind::Routine {
            if let Some(message) = &self.message {
                return message.clone();
            }
        }
        self.to_string()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.kind)?;
        if let Some(message) = &self.message {
            write!(f, ": {message}")?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {field})")?;
        }
        if let Some(position) = self.position {
            write!(f, " (position: {position})")?;
        }
        if let Some(expected) = &self.expected {
            write!(f, " (expected: {expected})")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|source| source.as_ref() as &(dyn StdError + 'static))
    }
}

pub fn to_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::Syntax
        | ErrorKind::MissingField
        | ErrorKind::TypeMismatch
        | ErrorKind::Routine
        | ErrorKind::Encoding => 1,
        ErrorKind::Usage => 2,
        ErrorKind::Io => 8,
    }
}

#[cfg(test)]
mod tests {
    use super::{to_exit_code, Error, ErrorKind};

    #[test]
    fn display_composes_context() {
        let err = Error::new(ErrorKind::Syntax)
            .with_message("unexpected byte")
            .with_position(12)
            .with_expected("',' or ']'");
        let text = err.to_string();
        assert!(text.starts_with("Syntax: unexpected byte"));
        assert!(text.contains("(position: 12)"));
        assert!(text.contains("(expected: ',' or ']')"));
    }

    #[test]
    fn routine_envelope_text_is_verbatim() {
        let err = Error::new(ErrorKind::Routine).with_message("index out of range");
        assert_eq!(err.envelope_text(), "index out of range");
    }

    #[test]
    fn engine_fault_envelope_text_keeps_kind() {
        let err = Error::new(ErrorKind::MissingField).with_field("k");
        assert!(err.envelope_text().starts_with("MissingField"));
    }

    #[test]
    fn exit_code_mapping_is_stable() {
        assert_eq!(to_exit_code(ErrorKind::Usage), 2);
        assert_eq!(to_exit_code(ErrorKind::Io), 8);
        assert_eq!(to_exit_code(ErrorKind::Syntax), 1);
        assert_eq!(to_exit_code(ErrorKind::Routine), 1);
    }
}
