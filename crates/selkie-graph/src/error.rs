#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("malformed graph: {reason}")]
    MalformedGraph { reason: String },

    #[error("portal {portal} is out of range (graph has {portal_count} portals)")]
    UnknownPortal { portal: usize, portal_count: usize },
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedGraph {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
