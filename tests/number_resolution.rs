//! Integration tests for dial-code resolution against the built-in catalog.
//!
//! These exercise the public API end to end: matching, splitting,
//! combining, and the wildcard conversions.

use number_screen::{
    CountryTable, CountryTableError, combine, find_by_dial_code, storage_to_view,
    strip_dial_code, view_to_storage,
};

fn builtin_index(name: &str) -> usize {
    CountryTable::builtin()
        .iter()
        .position(|r| r.name == name)
        .unwrap_or_else(|| panic!("{name} missing from catalog"))
}

/// Numbers without a leading '+' always resolve to the sentinel.
#[test]
fn test_no_plus_resolves_to_sentinel() {
    let table = CountryTable::builtin();
    for number in ["12345", "004420712345", "1684555", ""] {
        assert_eq!(
            find_by_dial_code(table, number),
            0,
            "'{number}' should resolve to the sentinel"
        );
    }
}

/// American Samoa ("1684") must win over Canada / United States ("1").
#[test]
fn test_longest_prefix_wins() {
    let table = CountryTable::builtin();
    let samoa = builtin_index("American Samoa");
    let canada = builtin_index("Canada");

    let index = find_by_dial_code(table, "+16845551234");
    assert_eq!(index, samoa);
    assert_ne!(index, canada);

    assert_eq!(strip_dial_code(table, "+16845551234", index).unwrap(), "5551234");
}

/// A plain NANP number falls back to "1", and the earlier table entry
/// (Canada) wins over the United States.
#[test]
fn test_shared_dial_code_keeps_table_order() {
    let table = CountryTable::builtin();
    let index = find_by_dial_code(table, "+15551234567");
    assert_eq!(index, builtin_index("Canada"));
}

#[test]
fn test_united_kingdom_number() {
    let table = CountryTable::builtin();
    let uk = builtin_index("United Kingdom");

    let index = find_by_dial_code(table, "+442071234567");
    assert_eq!(index, uk);
    assert_eq!(
        strip_dial_code(table, "+442071234567", index).unwrap(),
        "2071234567"
    );
}

/// Sentinel index is an identity for both split and combine.
#[test]
fn test_sentinel_is_identity() {
    let table = CountryTable::builtin();
    for s in ["12345", "+999123", "", "0810555*"] {
        assert_eq!(strip_dial_code(table, s, 0).unwrap(), s);
        assert_eq!(combine(table, 0, s).unwrap(), s);
    }
}

/// split(combine(s, i), i) == s for every real country in the catalog.
#[test]
fn test_split_combine_round_trip_whole_catalog() {
    let table = CountryTable::builtin();
    for index in 1..table.len() {
        let full = combine(table, index, "5551234").unwrap();
        let local = strip_dial_code(table, &full, index).unwrap();
        assert_eq!(local, "5551234", "round trip failed at index {index}");
    }
}

/// Every combined number resolves back to a country with the same dial code.
#[test]
fn test_resolution_agrees_with_combination() {
    let table = CountryTable::builtin();
    for index in 1..table.len() {
        let full = combine(table, index, "5551234").unwrap();
        let resolved = find_by_dial_code(table, &full);
        assert_ne!(resolved, 0, "'{full}' should resolve to a country");

        // The resolved entry may differ from `index` (shared codes, or a
        // longer code prefixing this one followed by "5551234"), but its
        // dial code must still prefix the digits.
        let code = &table.get(resolved).unwrap().dial_code;
        assert!(full[1..].starts_with(code.as_str()));
    }
}

#[test]
fn test_out_of_range_index_is_an_error() {
    let table = CountryTable::builtin();
    let len = table.len();
    assert!(matches!(
        strip_dial_code(table, "+1555", len),
        Err(CountryTableError::IndexOutOfRange { .. })
    ));
    assert!(matches!(
        combine(table, len, "555"),
        Err(CountryTableError::IndexOutOfRange { .. })
    ));
}

/// Wildcard conversion round-trips over the allowed alphabet and is
/// independent of the resolver.
#[test]
fn test_wildcard_round_trip() {
    for s in ["+1684555*", "0810*", "*", "+44", ""] {
        assert_eq!(storage_to_view(&view_to_storage(s)), s);
    }
    for s in ["+1684555%", "0810%", "%", "+44", ""] {
        assert_eq!(view_to_storage(&storage_to_view(s)), s);
    }
}

/// A custom table honors the same longest-match rule as the builtin one.
#[test]
fn test_custom_table_longest_match() {
    use number_screen::CountryRecord;

    let table = CountryTable::new(vec![
        CountryRecord::new("", "None", ""),
        CountryRecord::new("🇺🇸", "United States", "1"),
        CountryRecord::new("🇦🇸", "American Samoa", "1684"),
    ])
    .unwrap();

    assert_eq!(find_by_dial_code(&table, "+16845551234"), 2);
    assert_eq!(find_by_dial_code(&table, "+16835551234"), 1);
}
