pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] selkie_graph::Error),

    #[error(transparent)]
    Vis(#[from] selkie_vis::Error),

    #[error(transparent)]
    Layout(#[from] selkie_layout::Error),

    #[error("invalid configuration: {message}")]
    Config { message: String },
}

impl Error {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
