use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScrapeError {
    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("request to {url} failed with status {status} after {attempts} attempt(s)")]
    Status {
        url: String,
        status: u16,
        attempts: usize,
    },

    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    #[error("table `{table_id}` not found in page {url}")]
    TableNotFound { table_id: String, url: String },

    #[error("cell `{column}` could not be parsed from {context:?}")]
    FieldParse { column: String, context: String },

    #[error("no URL slug known for player `{0}`")]
    UnknownSlug(String),

    #[error("no league average on record for season {0}")]
    MissingLeagueAverage(String),

    #[error("worker task failed: {0}")]
    Task(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;
