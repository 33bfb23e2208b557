use thiserror::Error;

/// Everything that can go wrong between fetching the page and printing
/// the table. Cell positions are document-order `td` indices so a
/// failure can be traced back to the exact cell on the page.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: Box<ureq::Error>,
    },

    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("page has {found} table cells, slice needs {needed}")]
    TooFewCells { found: usize, needed: usize },

    #[error("cell {index}: no mnemonic in markup")]
    MissingMnemonic { index: usize },

    #[error("cell {index}: unknown addressing mode abbreviation {token:?}")]
    UnknownAddressMode { index: usize, token: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
