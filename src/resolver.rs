//! Dial-code resolution: match a number to a country, split off the dial
//! code for display, and recombine a selection with a local fragment.
//!
//! All functions are pure over the table and their string inputs. "No match"
//! is always the sentinel index 0, never an error; only an out-of-range
//! index argument fails.

use crate::countries::{CountryTable, CountryTableError};

#[cfg(feature = "tracing")]
use tracing::debug;

/// Find the best-matching country index for an international-format number.
///
/// Returns 0 (the "None" sentinel) when the number is empty, does not start
/// with '+', or no dial code in the table prefixes it. Longer dial codes are
/// tried first, so "+16845551234" resolves to American Samoa ("1684") and
/// not to the generic "1" of the North American Numbering Plan.
pub fn find_by_dial_code(table: &CountryTable, number: &str) -> usize {
    let Some(digits) = number.strip_prefix('+') else {
        return 0;
    };

    for &index in table.indices_by_code_len() {
        // indices_by_code_len only yields in-range records with non-empty codes
        let Ok(record) = table.get(index) else {
            continue;
        };
        let code = &record.dial_code;
        if digits.starts_with(code.as_str()) {
            #[cfg(feature = "tracing")]
            debug!(index, dial_code = %code, "matched dial code");
            return index;
        }
    }

    #[cfg(feature = "tracing")]
    debug!(number, "no dial code matched, falling back to sentinel");
    0
}

/// Remove a country's dial-code prefix (with its leading '+') from a number.
///
/// With the sentinel index the number comes back unchanged. A stale index
/// whose dial code does not actually prefix the number is a no-op, not an
/// error; only an out-of-range index fails.
pub fn strip_dial_code(
    table: &CountryTable,
    number: &str,
    country_index: usize,
) -> Result<String, CountryTableError> {
    if country_index == 0 {
        return Ok(number.to_string());
    }
    let record = table.get(country_index)?;
    let prefix = format!("+{}", record.dial_code);
    match number.strip_prefix(&prefix) {
        Some(local) => Ok(local.to_string()),
        None => Ok(number.to_string()),
    }
}

/// Reassemble the full international number from a selected country index
/// and a locally-typed fragment.
///
/// With the sentinel index the fragment comes back unchanged (the caller
/// typed the full number themselves). The fragment is not validated here.
pub fn combine(
    table: &CountryTable,
    country_index: usize,
    local: &str,
) -> Result<String, CountryTableError> {
    if country_index == 0 {
        return Ok(local.to_string());
    }
    let record = table.get(country_index)?;
    Ok(format!("+{}{}", record.dial_code, local))
}
