// Print the built-in catalog and optionally run one search.
//
// Usage: cargo run --bin inspect_catalog -- [name|ailment] [query...]

use herbal_garden::{catalog, SearchKind};

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let catalog = catalog();

    println!("\n=== PLANT CATALOG ===\n");
    println!("Plants: {}", catalog.len());
    for plant in catalog.all() {
        println!(
            "  {:<12} {:<26} {:<22} ({} ailments)",
            plant.id,
            plant.common_name,
            plant.botanical_name,
            plant.ailments_treated.len()
        );
    }

    let Some(kind) = args.next() else {
        return Ok(());
    };
    let kind: SearchKind = kind.parse()?;
    let query = args.collect::<Vec<_>>().join(" ");

    let results = catalog.search(kind, &query);
    println!("\n{} search for '{}': {} results", kind, query.trim(), results.len());
    if results.is_empty() {
        println!("  (no results)");
    }
    for plant in results {
        println!("  {} -> {}", plant.common_name, plant.href());
    }

    Ok(())
}
