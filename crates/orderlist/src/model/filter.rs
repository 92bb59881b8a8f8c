//! Filtering for the order list.
//!
//! [`FilterEngine`] derives the *visible subset* of an ordered collection
//! from a text query matched against one or more named fields of each item.
//! The subset is a cache: it is rebuilt from the collection whenever the
//! query changes or the collection is mutated while a query is active, and
//! it is never authoritative.

use std::fmt;
use std::str::FromStr;

use orderlist_core::logging::targets;
use orderlist_core::PerfSpan;
use serde::{Deserialize, Serialize};

use crate::error::OrderListError;

use super::item::{FieldExtractor, ItemComparator};

/// How a field value is compared with the query.
///
/// Both sides are lowercased (locale-aware when a locale is configured)
/// before comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterMatchMode {
    /// The value starts with the query.
    StartsWith,
    /// The value contains the query.
    #[default]
    Contains,
    /// The value does not contain the query.
    NotContains,
    /// The value ends with the query.
    EndsWith,
    /// The value equals the query.
    Equals,
    /// The value differs from the query.
    NotEquals,
}

impl FilterMatchMode {
    /// All supported modes.
    pub const ALL: [Self; 6] = [
        Self::StartsWith,
        Self::Contains,
        Self::NotContains,
        Self::EndsWith,
        Self::Equals,
        Self::NotEquals,
    ];

    /// The configuration name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StartsWith => "startsWith",
            Self::Contains => "contains",
            Self::NotContains => "notContains",
            Self::EndsWith => "endsWith",
            Self::Equals => "equals",
            Self::NotEquals => "notEquals",
        }
    }

    /// Tests an already-lowercased field value against a lowercased query.
    ///
    /// A missing value fails every mode except `NotEquals`.
    pub fn matches(self, value: Option<&str>, query: &str) -> bool {
        let Some(value) = value else {
            return self == Self::NotEquals;
        };
        match self {
            Self::StartsWith => value.starts_with(query),
            Self::Contains => value.contains(query),
            Self::NotContains => !value.contains(query),
            Self::EndsWith => value.ends_with(query),
            Self::Equals => value == query,
            Self::NotEquals => value != query,
        }
    }
}

impl fmt::Display for FilterMatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMatchMode {
    type Err = OrderListError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OrderListError::UnknownMatchMode(s.to_string()))
    }
}

/// Splits a comma-separated field list, dropping empty entries.
pub fn parse_fields(filter_by: &str) -> Vec<String> {
    filter_by
        .split(',')
        .map(str::trim)
        .filter(|field| !field.is_empty())
        .map(String::from)
        .collect()
}

/// Lowercases `text`, honoring `locale` when localization is enabled.
#[cfg(feature = "localization")]
pub fn to_locale_lowercase(text: &str, locale: Option<&str>) -> String {
    use icu::casemap::CaseMapper;
    use icu::locale::LanguageIdentifier;

    let Some(tag) = locale else {
        return text.to_lowercase();
    };
    match tag.parse::<LanguageIdentifier>() {
        Ok(langid) => CaseMapper::new()
            .lowercase_to_string(text, &langid)
            .to_string(),
        Err(_) => {
            tracing::warn!(
                target: targets::FILTER,
                locale = tag,
                "invalid filter locale, using default lowercase"
            );
            text.to_lowercase()
        }
    }
}

/// Lowercases `text`, honoring `locale` when localization is enabled.
#[cfg(not(feature = "localization"))]
pub fn to_locale_lowercase(text: &str, _locale: Option<&str>) -> String {
    text.to_lowercase()
}

/// Query state and visible-subset cache.
#[derive(Debug, Clone)]
pub struct FilterEngine<T> {
    fields: Vec<String>,
    match_mode: FilterMatchMode,
    locale: Option<String>,
    query: Option<String>,
    visible: Option<Vec<T>>,
}

impl<T> Default for FilterEngine<T> {
    fn default() -> Self {
        Self {
            fields: Vec::new(),
            match_mode: FilterMatchMode::default(),
            locale: None,
            query: None,
            visible: None,
        }
    }
}

impl<T> FilterEngine<T> {
    /// Creates an engine matching `fields` with `match_mode`.
    pub fn new(fields: Vec<String>, match_mode: FilterMatchMode, locale: Option<String>) -> Self {
        Self {
            fields,
            match_mode,
            locale,
            ..Self::default()
        }
    }

    /// The configured field names.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Replaces the configured field names.
    pub fn set_fields(&mut self, fields: Vec<String>) {
        self.fields = fields;
    }

    /// The configured match mode.
    pub fn match_mode(&self) -> FilterMatchMode {
        self.match_mode
    }

    /// Replaces the match mode.
    pub fn set_match_mode(&mut self, match_mode: FilterMatchMode) {
        self.match_mode = match_mode;
    }

    /// The configured locale tag.
    pub fn locale(&self) -> Option<&str> {
        self.locale.as_deref()
    }

    /// Replaces the locale tag.
    pub fn set_locale(&mut self, locale: Option<String>) {
        self.locale = locale;
    }

    /// The normalized query, if any.
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Returns `true` when a non-empty query and at least one field are set.
    pub fn is_active(&self) -> bool {
        !self.fields.is_empty() && self.query.as_deref().is_some_and(|q| !q.is_empty())
    }

    /// Trims and lowercases a raw query.
    pub fn normalize(&self, raw: &str) -> String {
        to_locale_lowercase(raw.trim(), self.locale())
    }

    /// Normalizes and stores `raw` as the current query.
    ///
    /// The visible subset is not touched; call [`recompute`](Self::recompute).
    pub fn set_query(&mut self, raw: &str) {
        let query = self.normalize(raw);
        self.query = (!query.is_empty()).then_some(query);
    }

    /// Clears the query and the visible-subset cache.
    pub fn reset(&mut self) {
        self.query = None;
        self.visible = None;
    }

    /// Returns `true` if any configured field of `item` matches the query.
    pub fn matches(&self, item: &T, extractor: &FieldExtractor<T>) -> bool {
        let Some(query) = self.query.as_deref() else {
            return true;
        };
        self.fields.iter().any(|field| {
            let value = extractor(item, field.as_str())
                .map(|v| to_locale_lowercase(&v, self.locale()));
            self.match_mode.matches(value.as_deref(), query)
        })
    }
}

impl<T: Clone> FilterEngine<T> {
    /// Rebuilds the visible subset from `items`.
    ///
    /// When the filter is inactive the cache is dropped and the whole
    /// collection is visible.
    pub fn recompute(&mut self, items: &[T], extractor: &FieldExtractor<T>) {
        if !self.is_active() {
            self.visible = None;
            return;
        }

        let _span = PerfSpan::new("filter_recompute");
        let visible: Vec<T> = items
            .iter()
            .filter(|item| self.matches(item, extractor))
            .cloned()
            .collect();
        tracing::debug!(
            target: targets::FILTER,
            query = self.query.as_deref().unwrap_or_default(),
            total = items.len(),
            visible = visible.len(),
            "filter recomputed"
        );
        self.visible = Some(visible);
    }

    /// The visible-subset cache, if one has been computed.
    pub fn visible(&self) -> Option<&[T]> {
        self.visible.as_deref()
    }

    /// Mutable access to the visible-subset cache.
    pub fn visible_mut(&mut self) -> Option<&mut Vec<T>> {
        self.visible.as_mut()
    }

    /// Returns `true` if `item` is part of the visible subset.
    ///
    /// Every item is visible while the filter is inactive.
    pub fn is_item_visible(&self, item: &T, cmp: &ItemComparator<T>) -> bool {
        if !self.is_active() {
            return true;
        }
        self.visible
            .as_deref()
            .is_some_and(|visible| cmp.position(item, visible).is_some())
    }
}
