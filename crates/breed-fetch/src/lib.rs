//! Breed Fetch - dog sub-breed lookups with a read-through cache.
//!
//! The crate is built around one capability, [`BreedSource`]: given a breed
//! name, list its sub-breeds. Two implementations are provided:
//!
//! - [`HttpBreedSource`] asks the dog.ceo REST API.
//! - [`CachingBreedSource`] wraps any other source (including another cache)
//!   and remembers successful answers under a case-insensitive key.
//!
//! Every failure is reported as a [`BreedNotFoundError`].
//!
//! # Example
//!
//! ```rust,no_run
//! use breed_fetch::{BreedSource, CachingBreedSource, HttpBreedSource};
//!
//! fn main() -> breed_fetch::Result<()> {
//!     let source = CachingBreedSource::new(HttpBreedSource::new()?);
//!
//!     let hounds = source.get_sub_breeds(Some("hound"))?;
//!     println!("hound has {} sub-breeds", hounds.len());
//!
//!     // Served from the cache.
//!     let again = source.get_sub_breeds(Some("  HOUND "))?;
//!     assert_eq!(hounds, again);
//!     assert_eq!(source.calls_made(), 1);
//!
//!     Ok(())
//! }
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod network;
pub mod source;

pub use cache::CachingBreedSource;
pub use config::DogApiConfig;
pub use error::{BreedNotFoundError, Result};
pub use network::HttpBreedSource;
pub use source::{normalize_breed, BreedSource, SubBreeds};
