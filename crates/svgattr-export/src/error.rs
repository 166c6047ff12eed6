//! Errors raised while assembling elements and documents.

/// Errors raised by the element layer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// A path element could not produce its `d` attribute.
    #[error("path {}: {source}", .id.as_deref().unwrap_or("<unnamed>"))]
    Path {
        /// `id` of the offending element, if it has one.
        id: Option<String>,
        /// The underlying composition error.
        source: svgattr::Error,
    },

    /// Write options were rejected before any element was rendered.
    #[error(transparent)]
    Options(#[from] svgattr::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_error_names_the_element() {
        let e = ExportError::Path {
            id: Some("outline".to_owned()),
            source: svgattr::Error::EmptyPathData,
        };
        assert_eq!(e.to_string(), "path outline: path data must not be empty");
    }

    #[test]
    fn path_error_without_id() {
        let e = ExportError::Path {
            id: None,
            source: svgattr::Error::EmptyPathData,
        };
        assert_eq!(e.to_string(), "path <unnamed>: path data must not be empty");
    }

    #[test]
    fn options_error_is_transparent() {
        let e = ExportError::from(svgattr::Error::InvalidConfig("bad".to_owned()));
        assert_eq!(e.to_string(), "invalid write options: bad");
    }
}
