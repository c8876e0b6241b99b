//! Local filtering of select items
//!
//! Items are JSON values, usually objects carrying an id and a display text.
//! Filtering keeps the items whose searched fields contain the search,
//! ignoring case and diacritics, and the same search drives highlighting of
//! the displayed text.

use std::borrow::Cow;

use serde_json::{Map, Value, json};

use crate::config::FilterConfig;
use crate::error::{HighlightError, Result};
use crate::matcher::Highlighter;
use crate::segment::Segment;

/// Wrap a list of plain values as `{"id": n, "name": value}` items.
///
/// Ids start at 1. Lists that already hold objects are returned unchanged.
pub fn items_from_values(values: Vec<Value>) -> Vec<Value> {
    if !matches!(values.first(), Some(first) if !first.is_object()) {
        return values;
    }

    values
        .into_iter()
        .enumerate()
        .map(|(idx, value)| json!({ "id": idx + 1, "name": value }))
        .collect()
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn is_separator(item: &Value) -> bool {
    item.get("separator").is_some_and(is_truthy)
}

/// Text of a JSON value the way a browser's `String(value)` renders it
fn display_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
        // f64 Display drops the fraction of whole numbers ("1", not "1.0")
        Value::Number(n) => match n.as_f64() {
            Some(f) if f == 0.0 => "0".to_string(),
            Some(f) => f.to_string(),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(values) => values
            .iter()
            .map(display_string)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Text of `field` in `item`; values other than strings are stringified
fn field_text<'a>(item: &'a Value, field: &str) -> Result<Cow<'a, str>> {
    match item.get(field) {
        None | Some(Value::Null) => Err(HighlightError::InvalidInput {
            field: field.to_string(),
        }),
        Some(Value::String(s)) => Ok(Cow::Borrowed(s.as_str())),
        Some(other) => Ok(Cow::Owned(display_string(other))),
    }
}

/// An absent or empty search filters nothing; whitespace is searched for
fn is_blank(search: Option<&str>) -> bool {
    search.is_none_or(str::is_empty)
}

/// Matches items against a search according to a [`FilterConfig`]
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    config: FilterConfig,
}

impl ItemFilter {
    pub fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Whether any searched field of `item` contains `search`.
    ///
    /// Separators never match. A searched field that is missing or null is
    /// an error.
    pub fn matches(&self, item: &Value, search: &str) -> Result<bool> {
        self.matches_with(item, &Highlighter::new(search))
    }

    fn matches_with(&self, item: &Value, highlighter: &Highlighter) -> Result<bool> {
        if is_separator(item) {
            return Ok(false);
        }
        for field in self.config.search_fields() {
            if highlighter.is_match(&field_text(item, field)?) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Indices of the items matching `search`.
    ///
    /// An absent or empty search keeps every item.
    pub fn filter(&self, items: &[Value], search: Option<&str>) -> Result<Vec<usize>> {
        let search = match search {
            Some(s) if !s.is_empty() => s,
            _ => return Ok((0..items.len()).collect()),
        };

        let highlighter = Highlighter::new(search);
        let mut kept = Vec::new();
        for (idx, item) in items.iter().enumerate() {
            if self.matches_with(item, &highlighter)? {
                kept.push(idx);
            }
        }
        Ok(kept)
    }

    /// Term to highlight with, or `None` when highlighting is off or the
    /// search is empty
    pub fn highlight_term<'a>(&self, search: Option<&'a str>) -> Option<&'a str> {
        if !self.config.highlight || is_blank(search) {
            return None;
        }
        search
    }

    /// Item standing for a search that no kept item carries as its id.
    ///
    /// Only produced when `accept_unlisted_value` is set and the search is
    /// not empty. Ids are compared exactly, as strings.
    pub fn unlisted_item(
        &self,
        items: &[Value],
        kept: &[usize],
        search: Option<&str>,
    ) -> Option<Value> {
        if !self.config.accept_unlisted_value {
            return None;
        }
        let search = search.filter(|s| !s.is_empty())?;

        let listed = kept
            .iter()
            .filter_map(|&idx| items.get(idx))
            .any(|item| matches!(item.get(&self.config.id_prop), Some(Value::String(id)) if id == search));
        if listed {
            return None;
        }

        let mut unlisted = Map::new();
        unlisted.insert("unlisted".to_string(), Value::Bool(true));
        unlisted.insert(self.config.id_prop.clone(), Value::from(search));
        unlisted.insert(self.config.text_prop.clone(), Value::from(search));
        Some(Value::Object(unlisted))
    }

    /// Display text of `item` split into segments for `search`
    pub fn display_segments(&self, item: &Value, search: Option<&str>) -> Result<Vec<Segment>> {
        let text = field_text(item, &self.config.text_prop)?;
        Ok(match self.highlight_term(search) {
            Some(term) => Highlighter::new(term).segments(&text),
            None => vec![Segment::plain(text)],
        })
    }
}

/// Filter state for one select widget.
///
/// Holds the last search and its result; [`FilterState::update`] only
/// recomputes when the search changes. Call [`FilterState::reset`] when the
/// item list itself is replaced.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    filter: ItemFilter,
    /// Search the cached matches were computed for
    query: Option<String>,
    /// Prepared highlight term for the current search
    highlighter: Option<Highlighter>,
    /// Indices of matching items
    matches: Vec<usize>,
    /// Item offered for a search that matches no listed id
    unlisted: Option<Value>,
    /// Whether `matches` reflects any search yet
    computed: bool,
}

impl FilterState {
    pub fn new(config: FilterConfig) -> Self {
        Self {
            filter: ItemFilter::new(config),
            ..Self::default()
        }
    }

    /// Recompute matches for `search` if it differs from the last one
    pub fn update(&mut self, items: &[Value], search: Option<&str>) -> Result<&[usize]> {
        if self.computed && self.query.as_deref() == search {
            return Ok(&self.matches);
        }

        let matches = self.filter.filter(items, search)?;
        log::debug!(
            "Filter {:?} kept {} of {} items",
            search,
            matches.len(),
            items.len()
        );

        self.unlisted = self.filter.unlisted_item(items, &matches, search);
        self.query = search.map(str::to_string);
        self.highlighter = self
            .filter
            .highlight_term(search)
            .map(Highlighter::new);
        self.matches = matches;
        self.computed = true;
        Ok(&self.matches)
    }

    /// Clears the cached search and matches
    pub fn reset(&mut self) {
        self.query = None;
        self.highlighter = None;
        self.matches.clear();
        self.unlisted = None;
        self.computed = false;
    }

    /// The search the current matches belong to
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// Item created from the current search when it is not a listed id
    pub fn unlisted_item(&self) -> Option<&Value> {
        self.unlisted.as_ref()
    }

    /// Display text of `item` segmented for the current search
    pub fn display_segments(&self, item: &Value) -> Result<Vec<Segment>> {
        let text = field_text(item, &self.filter.config().text_prop)?;
        Ok(match &self.highlighter {
            Some(highlighter) => highlighter.segments(&text),
            None => vec![Segment::plain(text)],
        })
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
