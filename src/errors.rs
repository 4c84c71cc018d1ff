//! Kaleido error handling
//!
//! Parsing variant specifications never fails. Errors only arise at the edges:
//! reading a configuration file, decoding it, and writing output. All of
//! them are reported through one `miette`-aware enum so the CLI can render them
//! as diagnostics.

use std::path::PathBuf;
use std::sync::Arc;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Shorthand for results carrying a [`KaleidoError`].
pub type Result<T> = std::result::Result<T, KaleidoError>;

#[derive(Error, Diagnostic, Debug)]
pub enum KaleidoError {
    #[error("Config error: cannot read '{}'", path.display())]
    #[diagnostic(
        code(kaleido::config::read),
        help("check that the file passed with --config exists and is readable")
    )]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {message}")]
    #[diagnostic(
        code(kaleido::config::parse),
        help("expected a mapping with optional `variants` and `variant_setup` strings")
    )]
    ConfigParse {
        message: String,
        #[source_code]
        src: Arc<NamedSource<String>>,
        #[label("here")]
        span: Option<SourceSpan>,
    },

    #[error("Output error: cannot encode JSON")]
    #[diagnostic(code(kaleido::output::json))]
    Serialize(#[from] serde_json::Error),

    #[error("Output error: {0}")]
    #[diagnostic(code(kaleido::output::io))]
    Io(#[from] std::io::Error),
}

impl KaleidoError {
    /// Builds a [`KaleidoError::ConfigParse`] from a YAML decoding failure,
    /// pointing at the reported location when there is one.
    pub fn config_parse(error: serde_yaml::Error, name: &str, source: &str) -> Self {
        let span = error
            .location()
            .map(|loc| SourceSpan::from((loc.index().min(source.len()), 1)));
        let message = error.to_string();
        Self::ConfigParse {
            message,
            src: Arc::new(NamedSource::new(name, source.to_string())),
            span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn yaml_errors_keep_their_location() {
        let source = "variants: [unclosed";
        let error = serde_yaml::from_str::<serde_yaml::Value>(source).unwrap_err();
        let err = KaleidoError::config_parse(error, "kaleido.yaml", source);
        match &err {
            KaleidoError::ConfigParse { span, message, .. } => {
                assert!(span.is_some());
                assert!(!message.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            err.code().map(|c| c.to_string()).as_deref(),
            Some("kaleido::config::parse")
        );
    }

    #[test]
    fn read_errors_name_the_path() {
        let err = KaleidoError::ConfigRead {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "Config error: cannot read 'missing.yaml'");
    }
}
