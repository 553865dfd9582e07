#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid limit {limit}: expected -1 (unbounded) or a non-negative step count")]
    InvalidLimit { limit: i64 },

    #[error(transparent)]
    Graph(#[from] selkie_graph::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
