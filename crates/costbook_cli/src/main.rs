//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `costbook_core` linkage.
//! - Optionally inspect a data directory for quick local sanity checks.

use costbook_core::Store;

fn main() {
    println!("costbook_core ping={}", costbook_core::ping());
    println!("costbook_core version={}", costbook_core::core_version());

    // Optional: `costbook <data_dir>` lists the stored record names.
    if let Some(data_dir) = std::env::args().nth(1) {
        match Store::open(&data_dir) {
            Ok(store) => {
                println!("ingredients: {}", store.list_ingredient_names().join(", "));
                println!("products: {}", store.list_product_names().join(", "));
            }
            Err(err) => {
                eprintln!("failed to open store at `{data_dir}`: {err}");
                std::process::exit(1);
            }
        }
    }
}
