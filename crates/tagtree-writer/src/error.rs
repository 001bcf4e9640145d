//! Error type for markup writing.

use std::string::FromUtf8Error;

/// Error raised while emitting markup through a writer adapter.
///
/// Tree construction never fails; every failure here originates in the
/// writer backend the caller selected and is propagated unmodified.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WriteError {
    /// I/O error from the byte sink behind the XML event writer.
    #[error("I/O error")]
    Io(#[from] std::io::Error),

    /// Formatter error from the text sink behind the HTML writer.
    #[error("formatter error")]
    Fmt(#[from] std::fmt::Error),

    /// XML event writer error.
    #[error("XML write error")]
    Xml(#[from] quick_xml::Error),

    /// Rendered XML bytes were not valid UTF-8.
    #[error("rendered output is not valid UTF-8")]
    Utf8(#[from] FromUtf8Error),

    /// An attribute was written with no start tag open.
    #[error("attribute written outside of a start tag")]
    MisplacedAttribute,
}
