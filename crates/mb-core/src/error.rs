//! Errors raised while opening a mystery box

#[cfg(not(feature = "std"))]
use crate::compat::*;

use thiserror::Error;

/// Why an open attempt left the box intact
///
/// Every variant is recoverable: the box is only destroyed once an anchor
/// cell and a prize have both been confirmed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OpenError {
    /// The box is neither on the map nor carried by anything that is
    #[error("no anchor cell available for the prize")]
    NoAnchorAvailable,

    /// The selector ran out of draws without finding a valid template
    #[error("no prize found after {draws} draws")]
    NoPrizeAvailable { draws: u32 },

    /// The catalog refused to instantiate a template it listed
    #[error("catalog could not create an object from template '{0}'")]
    UnknownTemplate(String),
}
