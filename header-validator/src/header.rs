//! Required header fields and their detection in a header block.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// A metadata field every source header must carry.
///
/// Ordering follows the canonical listing order, so sets of fields are always
/// reported as Purpose, Author, Date, Modified By.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum RequiredField {
    Purpose,
    Author,
    Date,
    #[serde(rename = "Modified By")]
    ModifiedBy,
}

impl RequiredField {
    /// All required fields in canonical order.
    pub const ALL: [Self; 4] = [Self::Purpose, Self::Author, Self::Date, Self::ModifiedBy];

    /// The label as written in a header (`Modified By`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Purpose => "Purpose",
            Self::Author => "Author",
            Self::Date => "Date",
            Self::ModifiedBy => "Modified By",
        }
    }

    fn from_matched_label(label: &str) -> Option<Self> {
        let label = label.to_ascii_lowercase();
        match label.as_str() {
            "purpose" => Some(Self::Purpose),
            "author" => Some(Self::Author),
            "date" => Some(Self::Date),
            _ if label.starts_with("modified") => Some(Self::ModifiedBy),
            _ => None,
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A labelled header line: optional `@` tag prefix, label, `:`, non-empty value.
static FIELD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    match Regex::new(r"(?i)^\s*@?(purpose|author|date|modified[\s_-]*by)\s*:\s*(\S.*)$") {
        Ok(regex) => regex,
        Err(err) => panic!("Invalid header field regex: {err}"),
    }
});

/// Find the required fields present in `header`.
///
/// Maps each found field to the first header line that carries it. A label
/// with nothing after the separator does not count.
#[must_use]
pub fn find_fields(header: &[String]) -> BTreeMap<RequiredField, &str> {
    let mut found = BTreeMap::new();
    for line in header {
        let Some(caps) = FIELD_LINE.captures(line) else {
            continue;
        };
        if let Some(field) = caps
            .get(1)
            .and_then(|m| RequiredField::from_matched_label(m.as_str()))
        {
            found.entry(field).or_insert(line.as_str());
        }
    }
    found
}

/// Fields from [`RequiredField::ALL`] absent from `found`, in canonical order.
#[must_use]
pub fn missing_fields(found: &BTreeMap<RequiredField, &str>) -> Vec<RequiredField> {
    RequiredField::ALL
        .into_iter()
        .filter(|field| !found.contains_key(field))
        .collect()
}

/// Join field labels for display (`Date, Modified By`).
#[must_use]
pub fn join_labels(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.label())
        .collect::<Vec<_>>()
        .join(", ")
}
