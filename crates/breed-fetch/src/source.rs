//! The sub-breed lookup capability.
//!
//! [`BreedSource`] is the one seam in this crate: the HTTP client implements
//! it, and the caching layer both implements it and wraps any other
//! implementation (including another caching layer).

use crate::error::Result;
use std::sync::Arc;

/// Ordered list of sub-breed names, shared by handle.
///
/// Cloning a `SubBreeds` clones the handle, not the names. The caching layer
/// relies on this to hand every hit the exact list the first fetch produced.
pub type SubBreeds = Arc<[String]>;

/// Something that can list the sub-breeds of a breed.
///
/// `breed` is `None` when the caller has no breed name at all. Every failure
/// is reported as a [`BreedNotFoundError`](crate::BreedNotFoundError).
pub trait BreedSource: Send + Sync {
    /// Fetch the sub-breeds of `breed`, blocking until the answer is known.
    fn get_sub_breeds(&self, breed: Option<&str>) -> Result<SubBreeds>;
}

impl<S: BreedSource + ?Sized> BreedSource for &S {
    fn get_sub_breeds(&self, breed: Option<&str>) -> Result<SubBreeds> {
        (**self).get_sub_breeds(breed)
    }
}

impl<S: BreedSource + ?Sized> BreedSource for Box<S> {
    fn get_sub_breeds(&self, breed: Option<&str>) -> Result<SubBreeds> {
        (**self).get_sub_breeds(breed)
    }
}

impl<S: BreedSource + ?Sized> BreedSource for Arc<S> {
    fn get_sub_breeds(&self, breed: Option<&str>) -> Result<SubBreeds> {
        (**self).get_sub_breeds(breed)
    }
}

/// Normalize a breed name for lookups: trim whitespace, fold ASCII case.
///
/// Non-ASCII letters are left as they are.
pub fn normalize_breed(breed: &str) -> String {
    breed.trim().to_ascii_lowercase()
}
