//! Demonstrates schema introspection and caching
//!
//! This example shows how to:
//! - Inspect a struct and list its public fields
//! - Observe the cache hit on a second inspection
//! - See values refreshed from the live instance
//! - Reset the cache
//!
//! Configuration is read from the environment (or a `.env` file):
//! `INSPECT_KEY_PREFIX`, `INSPECT_FIELD_VISIBILITY`, `INSPECT_TYPE_STYLE`.
//! Set `RUST_LOG=ouroboros_inspect=debug` to see cache activity.

use ouroboros_inspect::{InspectConfig, Introspector, MemoryCache};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Serialize)]
#[serde(rename_all = "PascalCase")]
struct Person {
    name: String,
    email: String,
    age: u32,
    #[serde(rename = "notes")]
    notes: String,
}

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = InspectConfig::from_env()?;
    println!(
        "Introspector config: prefix={} visibility={} types={}\n",
        config.key_prefix, config.visibility, config.type_style
    );
    let mut introspector = Introspector::with_config(MemoryCache::new(), config)?;

    let mut karl = Person {
        name: "Karl".to_string(),
        email: "karl@younger.days".to_string(),
        age: 25,
        notes: "not exported".to_string(),
    };

    // 1. First inspection derives the schema
    println!("1. First inspection...");
    let first = introspector.inspect_as("person", &karl)?;
    println!("   from cache: {}", first.from_cache);
    for record in first.schema.records() {
        println!(
            "   {:<8} {:<10} {}",
            record.name, record.declared_type, record.value
        );
    }
    println!("   CSV: {}", first.schema.names_as_csv());
    println!("   SQL: SELECT {} FROM people\n", first.schema.names_as_sql());

    // 2. Second inspection reuses the schema but reads fresh values
    println!("2. Inspecting again after a birthday...");
    karl.age += 1;
    let second = introspector.inspect_as("person", &karl)?;
    println!("   from cache: {}", second.from_cache);
    println!(
        "   Age: {}\n",
        second.schema.value_of("Age").unwrap_or("<missing>")
    );

    // 3. Derived identity
    println!("3. Inspecting without an explicit identity...");
    let derived = introspector.inspect(&karl)?;
    if let Some(identity) = &derived.identity {
        println!("   identity: {}", identity);
    }
    println!("   from cache: {}\n", derived.from_cache);

    println!("   {}", introspector.cache().stats());

    // 4. Reset
    println!("\n4. Resetting the cache...");
    introspector.reset();
    let after_reset = introspector.inspect_as("person", &karl)?;
    println!("   from cache: {}", after_reset.from_cache);

    Ok(())
}
