use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActivityError {
    #[error("request to {url} failed")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response body is not a JSON array of events")]
    Parse(#[source] serde_json::Error),

    #[error("event #{index} ({kind}) is missing `{field}`")]
    Field {
        index: usize,
        kind: String,
        field: &'static str,
    },

    #[error("failed to write report")]
    Io(#[from] std::io::Error),
}
