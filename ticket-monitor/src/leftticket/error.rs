//! Left-ticket client error types.

use std::fmt;

/// Errors from the left-ticket HTTP client.
#[derive(Debug)]
pub enum QueryError {
    /// Request never produced a reply (network error, timeout)
    Http(reqwest::Error),

    /// Reply body was not the expected JSON envelope; the endpoint
    /// serves an HTML block page to callers it dislikes
    Json {
        message: String,
        body: Option<String>,
    },

    /// Non-success HTTP status
    ApiError { status: u16, message: String },

    /// Envelope arrived with `status: false`
    Rejected { messages: String },

    /// Envelope carried no record list
    MissingResult,
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::Http(e) => write!(f, "request failed: {e}"),
            QueryError::Json { message, body } => {
                write!(f, "cannot decode left-ticket reply: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body starts: {body})")?;
                }
                Ok(())
            }
            QueryError::ApiError { status, message } => {
                write!(f, "left-ticket endpoint returned {status}: {message}")
            }
            QueryError::Rejected { messages } => {
                if messages.is_empty() {
                    write!(f, "query rejected by the endpoint")
                } else {
                    write!(f, "query rejected by the endpoint: {messages}")
                }
            }
            QueryError::MissingResult => write!(f, "reply carried no left-ticket records"),
        }
    }
}

impl std::error::Error for QueryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QueryError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for QueryError {
    fn from(err: reqwest::Error) -> Self {
        QueryError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = QueryError::MissingResult;
        assert_eq!(err.to_string(), "reply carried no left-ticket records");

        let err = QueryError::ApiError {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "left-ticket endpoint returned 503: Service Unavailable"
        );

        let err = QueryError::Json {
            message: "expected value".into(),
            body: Some("<html>".into()),
        };
        assert!(err.to_string().contains("cannot decode left-ticket reply"));
        assert!(err.to_string().contains("<html>"));
    }

    #[test]
    fn rejected_display_with_and_without_messages() {
        let err = QueryError::Rejected {
            messages: String::new(),
        };
        assert_eq!(err.to_string(), "query rejected by the endpoint");

        let err = QueryError::Rejected {
            messages: "查询时间过期".into(),
        };
        assert!(err.to_string().ends_with("查询时间过期"));
    }
}
