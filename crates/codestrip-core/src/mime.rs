//! File types the editor can be switched into.
//!
//! The toolbar only cares about one property of a type: whether the editor
//! can run a syntax check over it.

use std::fmt;

/// Editor modes, identified by their MIME type string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MimeType {
    CoffeeScript,
    Css,
    Html,
    JavaScript,
    Json,
    Markdown,
    Python,
    PlainText,
    Xml,
}

impl MimeType {
    /// Types the debug (syntax check) control is available for.
    pub const SYNTAX_CHECKABLE: [MimeType; 5] = [
        MimeType::CoffeeScript,
        MimeType::Css,
        MimeType::Html,
        MimeType::JavaScript,
        MimeType::Json,
    ];

    /// Every known type.
    pub const ALL: [MimeType; 9] = [
        MimeType::CoffeeScript,
        MimeType::Css,
        MimeType::Html,
        MimeType::JavaScript,
        MimeType::Json,
        MimeType::Markdown,
        MimeType::Python,
        MimeType::PlainText,
        MimeType::Xml,
    ];

    /// Returns the MIME type string.
    pub fn as_str(&self) -> &'static str {
        match self {
            MimeType::CoffeeScript => "application/vnd.coffeescript",
            MimeType::Css => "text/css",
            MimeType::Html => "text/html",
            MimeType::JavaScript => "application/javascript",
            MimeType::Json => "application/json",
            MimeType::Markdown => "text/markdown",
            MimeType::Python => "text/x-python",
            MimeType::PlainText => "text/plain",
            MimeType::Xml => "text/xml",
        }
    }

    /// Looks up a type by its exact MIME string.
    pub fn from_type(mode: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|mime| mime.as_str() == mode)
    }

    pub fn is_syntax_checkable(&self) -> bool {
        Self::SYNTAX_CHECKABLE.contains(self)
    }

    /// Whether an editor mode string takes the syntax-check branch.
    ///
    /// Unknown strings are never checkable.
    pub fn mode_is_syntax_checkable(mode: &str) -> bool {
        Self::from_type(mode).is_some_and(|mime| mime.is_syntax_checkable())
    }
}

impl fmt::Display for MimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
