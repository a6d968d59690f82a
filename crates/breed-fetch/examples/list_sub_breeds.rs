//! List sub-breeds for the breeds given on the command line.
//!
//! Repeated names (in any casing) are answered from the cache:
//!
//! ```text
//! RUST_LOG=debug cargo run -p breed-fetch --example list_sub_breeds -- hound Hound retriever
//! ```

use breed_fetch::{BreedSource, CachingBreedSource, HttpBreedSource, Result};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .init();

    let breeds: Vec<String> = std::env::args().skip(1).collect();
    let breeds = if breeds.is_empty() {
        vec!["hound".to_string()]
    } else {
        breeds
    };

    let source = CachingBreedSource::new(HttpBreedSource::new()?);

    for breed in &breeds {
        match source.get_sub_breeds(Some(breed.as_str())) {
            Ok(sub_breeds) if sub_breeds.is_empty() => println!("{}: no sub-breeds", breed),
            Ok(sub_breeds) => println!("{}: {}", breed, sub_breeds.join(", ")),
            Err(e) => println!("{}: {}", breed, e),
        }
    }

    println!(
        "{} lookups, {} API calls",
        breeds.len(),
        source.calls_made()
    );

    Ok(())
}
