use std::sync::LazyLock;

use regex::Regex;

use crate::constants::FOOD_CATEGORIES;

static NEWLINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\r\n]+").expect("newline pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub category: &'static str,
    pub item: String,
}

pub fn split_lines(text: &str) -> Vec<&str> {
    NEWLINE.split(text).filter(|line| !line.is_empty()).collect()
}

/// Reads a `CATEGORY rest of the line` entry. Lines without a space or with an
/// unknown leading token are layout noise and yield `None`.
pub fn parse_entry(line: &str) -> Option<MenuEntry> {
    let (token, item) = line.split_once(' ')?;
    let category = FOOD_CATEGORIES.iter().copied().find(|c| *c == token)?;
    Some(MenuEntry {
        category,
        item: item.to_string(),
    })
}

/// Menu entries from the first line equal to `day_label` to the end of the
/// text, in document order.
///
/// The scan does not stop at the next day's label, so entries of the
/// following days are included as well. Returns `None` when `day_label` does
/// not appear on a line of its own.
pub fn filter_menu(text: &str, day_label: &str) -> Option<Vec<MenuEntry>> {
    let lines = split_lines(text);
    let start = lines.iter().position(|line| *line == day_label)?;
    Some(lines[start..].iter().filter_map(|line| parse_entry(line)).collect())
}
