//! Example demonstrating the blocklist edit flow over the in-memory store.
//!
//! # Running
//!
//! ```bash
//! cargo run --example edit_flow
//! ```

use number_screen::{CountryTable, EditForm, EditService, MemoryStore};

fn main() {
    let table = CountryTable::builtin();
    let mut service = EditService::with_builtin_table(MemoryStore::new());

    println!("=== Blocklist Edit Flow Demo ===\n");

    // The user picks "United Kingdom" from the selection list and types a
    // local pattern ending in the view wildcard '*'.
    let uk = table
        .iter()
        .position(|r| r.name == "United Kingdom")
        .expect("catalog entry exists");
    let form = EditForm::new("UK robocaller", uk, "20712345*");

    let stored = service.save(&form, None).expect("save succeeds");
    println!("Saved '{}' as storage pattern: {}", form.name, stored);

    // Later the entry is loaded back for editing: the storage wildcard is
    // converted to view form and the dial code split off again.
    let loaded = service
        .load_for_edit(&stored)
        .expect("load succeeds")
        .expect("entry exists");

    println!("\nLoaded for editing:");
    println!("  name:    {}", loaded.name);
    println!("  country: {}", table.get(loaded.country_index).unwrap());
    println!("  local:   {}", loaded.local_number);

    // The user corrects the number; the entry is rekeyed in the store.
    let mut edited = loaded;
    edited.local_number = "20799999*".to_string();
    let updated = service.save(&edited, Some(&stored)).expect("save succeeds");

    println!("\nUpdated storage pattern: {}", updated);
    println!("Entries in store: {}", service.store().len());
}
