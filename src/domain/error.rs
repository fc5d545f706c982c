use {reqwest::StatusCode, std::fmt, thiserror::Error};

#[derive(Debug, Error)]
pub enum ApruveError {
    #[error("{0}")]
    Validation(ValidationErrors),

    #[error("not found: {body}")]
    NotFound { body: String },

    #[error("api error (status {status}): {body}")]
    Api { status: StatusCode, body: String },

    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("serialization: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("config: {0}")]
    Config(String),

    #[error("invalid id for a url path segment: {0:?}")]
    InvalidId(String),
}

impl ApruveError {
    /// HTTP status behind this error, if it came from a server response.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::NotFound { .. } => Some(StatusCode::NOT_FOUND),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Ordered rule violations collected by the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    pub fn new(messages: Vec<String>) -> Self {
        Self(messages)
    }

    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// Renders as `["first", "second"]`.
impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, msg) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{msg:?}")?;
        }
        write!(f, "]")
    }
}

impl From<ValidationErrors> for ApruveError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_message_renders_as_bracketed_list() {
        let err = ApruveError::from(ValidationErrors::new(vec![
            "amount_cents must be set".into(),
        ]));
        assert_eq!(err.to_string(), r#"["amount_cents must be set"]"#);
    }

    #[test]
    fn messages_are_comma_joined_in_order() {
        let errors = ValidationErrors::new(vec![
            "payment_request_id must be set".into(),
            "amount_cents must be set".into(),
        ]);
        assert_eq!(
            errors.to_string(),
            r#"["payment_request_id must be set", "amount_cents must be set"]"#
        );
    }

    #[test]
    fn status_is_exposed_for_http_kinds_only() {
        let not_found = ApruveError::NotFound { body: "Not Found".into() };
        assert_eq!(not_found.status(), Some(StatusCode::NOT_FOUND));
        assert_eq!(ApruveError::Config("x".into()).status(), None);
    }
}
