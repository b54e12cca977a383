use chrono::Weekday;
use thiserror::Error;
use url::Url;

/// Pipeline step a [`MenuError`] was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Date,
    Locator,
    Fetch,
    Extract,
}

#[derive(Debug, Error)]
pub enum MenuError {
    /// No menu is published for weekends.
    #[error("cannot get menu for {0}")]
    UnsupportedDay(Weekday),
    #[error("invalid menu locator for path {path}")]
    InvalidLocator {
        path: String,
        #[source]
        source: url::ParseError,
    },
    #[error("error during request to {locator}")]
    Transport {
        locator: Url,
        #[source]
        source: anyhow::Error,
    },
    #[error("error parsing pdf contents from {locator}")]
    Extraction {
        locator: Url,
        #[source]
        source: anyhow::Error,
    },
}

impl MenuError {
    pub fn stage(&self) -> Stage {
        match self {
            MenuError::UnsupportedDay(_) => Stage::Date,
            MenuError::InvalidLocator { .. } => Stage::Locator,
            MenuError::Transport { .. } => Stage::Fetch,
            MenuError::Extraction { .. } => Stage::Extract,
        }
    }
}
