#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("path step {step} references portal {portal}, but the graph has {portal_count} portals")]
    InvalidPath {
        step: usize,
        portal: usize,
        portal_count: usize,
    },

    #[error("layout has {layout_len} slots but the path has {path_len} steps")]
    LayoutMismatch { layout_len: usize, path_len: usize },

    #[error(transparent)]
    Graph(#[from] selkie_graph::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
