//! Country catalog: records, the indexed table, and the embedded reference data.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// Country catalog JSON embedded at compile time.
static COUNTRIES_JSON: &str = include_str!("../assets/countries.json");

/// Errors from country table access and construction.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CountryTableError {
    /// Index is outside the table bounds.
    #[error("country index {index} out of range (table has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },
    /// Record 0 must be the "no country" sentinel with an empty dial code.
    #[error("record 0 must be the sentinel (empty dial code), got '{dial_code}'")]
    MissingSentinel { dial_code: String },
    /// A dial code contains something other than ASCII digits.
    #[error("dial code '{dial_code}' for '{name}' contains non-digit characters")]
    InvalidDialCode { name: String, dial_code: String },
}

/// One entry of the country catalog.
///
/// `dial_code` holds ASCII digits only, without a leading '+'. It is empty
/// only for the sentinel record at index 0. Overlapping codes are intentional:
/// "1" (Canada, United States) coexists with "1684" (American Samoa) and the
/// other North American Numbering Plan territories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Flag glyph shown next to the name. Empty for the sentinel.
    pub flag: String,
    /// Human-readable country name.
    pub name: String,
    /// International dial code without the leading '+'.
    pub dial_code: String,
}

impl CountryRecord {
    /// Create a record. Mostly useful for building custom tables in tests.
    pub fn new(
        flag: impl Into<String>,
        name: impl Into<String>,
        dial_code: impl Into<String>,
    ) -> Self {
        Self {
            flag: flag.into(),
            name: name.into(),
            dial_code: dial_code.into(),
        }
    }
}

impl Display for CountryRecord {
    /// Selection-list format: `name` alone for the sentinel, otherwise
    /// `"{flag} {name} (+{dial_code})"`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.dial_code.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {} (+{})", self.flag, self.name, self.dial_code)
        }
    }
}

/// Ordered, immutable catalog of [`CountryRecord`]s.
///
/// Index 0 is reserved for the "None" sentinel meaning "no country
/// selected/resolved". The table is read-only after construction and can be
/// shared freely across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryTable {
    records: Vec<CountryRecord>,
    /// Indices of records with a non-empty dial code, ordered by dial code
    /// length descending (stable on ties). Precomputed so prefix matching
    /// always tries the most specific code first.
    by_code_len: Vec<usize>,
}

impl CountryTable {
    /// Build a table from explicit records.
    ///
    /// Record 0 must have an empty dial code (the sentinel); all other dial
    /// codes must be non-empty ASCII digit strings.
    pub fn new(records: Vec<CountryRecord>) -> Result<Self, CountryTableError> {
        if let Some(first) = records.first() {
            if !first.dial_code.is_empty() {
                return Err(CountryTableError::MissingSentinel {
                    dial_code: first.dial_code.clone(),
                });
            }
        }
        for record in records.iter().skip(1) {
            if record.dial_code.is_empty()
                || !record.dial_code.chars().all(|c| c.is_ascii_digit())
            {
                return Err(CountryTableError::InvalidDialCode {
                    name: record.name.clone(),
                    dial_code: record.dial_code.clone(),
                });
            }
        }

        let mut by_code_len: Vec<usize> = (0..records.len())
            .filter(|&i| !records[i].dial_code.is_empty())
            .collect();
        // Stable sort keeps table order among codes of equal length, so
        // e.g. Canada still wins over the United States for "+1".
        by_code_len.sort_by(|&a, &b| records[b].dial_code.len().cmp(&records[a].dial_code.len()));

        Ok(Self {
            records,
            by_code_len,
        })
    }

    /// The built-in catalog, parsed once from the embedded JSON.
    pub fn builtin() -> &'static CountryTable {
        static BUILTIN: Lazy<CountryTable> = Lazy::new(|| {
            let records: Vec<CountryRecord> =
                serde_json::from_str(COUNTRIES_JSON).expect("countries.json is invalid");
            CountryTable::new(records).expect("countries.json violates table invariants")
        });
        &BUILTIN
    }

    /// Look up a record by index.
    pub fn get(&self, index: usize) -> Result<&CountryRecord, CountryTableError> {
        self.records
            .get(index)
            .ok_or(CountryTableError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Number of records, sentinel included.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True only for a table without even the sentinel.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over the records in table order, for rendering selection lists.
    pub fn iter(&self) -> impl Iterator<Item = &CountryRecord> {
        self.records.iter()
    }

    /// Candidate indices for prefix matching, longest dial code first.
    pub(crate) fn indices_by_code_len(&self) -> &[usize] {
        &self.by_code_len
    }
}
