use std::borrow::Cow;
use std::fmt;

use chrono::{DateTime, Datelike, TimeZone, Weekday};
use tracing::{debug, trace, warn};
use url::Url;

use crate::constants::BASE_URL;
use crate::error::MenuError;
use crate::menu::{MenuEntry, filter_menu, split_lines};
use crate::source::{DocumentFetcher, TextExtractor};
use crate::week::{day_label, menu_path};

/// Today's menu, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    pub weekday: Weekday,
    pub day_label: &'static str,
    pub locator: Url,
    pub entries: Vec<MenuEntry>,
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Menu for {} ({})", self.day_label, self.weekday)?;
        for entry in &self.entries {
            writeln!(f, "{}: {}", entry.category, entry.item)?;
        }
        Ok(())
    }
}

/// Absolute locator of `path` below `base`. A missing trailing slash on the
/// base is added so the last base segment is kept.
pub fn resolve_locator(base: &str, path: &str) -> Result<Url, MenuError> {
    let base: Cow<'_, str> = if base.ends_with('/') {
        Cow::Borrowed(base)
    } else {
        Cow::Owned(format!("{base}/"))
    };
    Url::parse(&base)
        .and_then(|base| base.join(path))
        .map_err(|source| MenuError::InvalidLocator {
            path: path.to_string(),
            source,
        })
}

/// Runs the whole lookup for the day `now` falls on.
///
/// Weekends fail before anything is fetched. `Ok(None)` means the document was
/// read but has no section for the day; that case is logged as a warning.
pub fn run<Tz, F, E>(now: &DateTime<Tz>, fetcher: &F, extractor: &E) -> Result<Option<Menu>, MenuError>
where
    Tz: TimeZone,
    F: DocumentFetcher + ?Sized,
    E: TextExtractor + ?Sized,
{
    let weekday = now.weekday();
    let day_label = day_label(weekday).ok_or(MenuError::UnsupportedDay(weekday))?;
    let path = menu_path(now);
    debug!(%weekday, day_label, %path, "date computed");

    let locator = resolve_locator(BASE_URL, &path)?;
    debug!(%locator, "making get request");

    let bytes = fetcher
        .fetch(&locator)
        .map_err(|source| MenuError::Transport {
            locator: locator.clone(),
            source,
        })?;
    trace!(len = bytes.len(), "received document");

    let text = extractor
        .extract(&bytes)
        .map_err(|source| MenuError::Extraction {
            locator: locator.clone(),
            source,
        })?;
    trace!(chars = text.chars().count(), "extracted text");

    let Some(entries) = filter_menu(&text, day_label) else {
        warn!(day_label, %locator, "day not found in menu document");
        debug!(lines = ?split_lines(&text), "menu document lines");
        return Ok(None);
    };
    debug!(count = entries.len(), "menu entries found");

    Ok(Some(Menu {
        weekday,
        day_label,
        locator,
        entries,
    }))
}

/// Process exit status for the outcome of [`run`].
///
/// A document without a section for the day still counts as success, only
/// errors exit nonzero.
pub fn exit_status(outcome: &Result<Option<Menu>, MenuError>) -> u8 {
    match outcome {
        Ok(_) => 0,
        Err(_) => 1,
    }
}
