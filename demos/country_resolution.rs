//! Example demonstrating dial-code resolution against the built-in catalog.
//!
//! # Running
//!
//! ```bash
//! cargo run --example country_resolution
//! ```

use number_screen::{CountryTable, combine, find_by_dial_code, strip_dial_code};

fn main() {
    let table = CountryTable::builtin();

    println!("=== Dial Code Resolution Demo ===\n");
    println!("Catalog: {} entries (index 0 is the None sentinel)\n", table.len());

    let numbers = [
        "+16845551234",  // American Samoa, not +1
        "+15551234567",  // plain NANP number
        "+442071234567", // United Kingdom
        "+380501234567", // Ukraine
        "+999123456",    // unknown dial code
        "0810555123",    // national format, no '+'
    ];

    println!("{:<16} {:<30} {:<12}", "Number", "Country", "Local part");
    println!("{}", "-".repeat(58));

    for number in numbers {
        let index = find_by_dial_code(table, number);
        let record = table.get(index).expect("resolved index is valid");
        let local = strip_dial_code(table, number, index).expect("resolved index is valid");
        println!("{:<16} {:<30} {:<12}", number, record.to_string(), local);
    }

    println!("\n=== Recombination Demo ===\n");

    for name in ["American Samoa", "United Kingdom", "Canada"] {
        let index = table
            .iter()
            .position(|r| r.name == name)
            .expect("catalog entry exists");
        let full = combine(table, index, "5551234").expect("index is valid");
        println!("  {} + 5551234 -> {}", table.get(index).unwrap(), full);
    }
}
