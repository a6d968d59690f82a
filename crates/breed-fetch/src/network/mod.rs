//! Network access to the upstream breed listing API.
//!
//! This module provides:
//! - `HttpBreedSource`, a blocking HTTP implementation of `BreedSource`
//! - Decoding of the API's `{"status", "message"}` response envelope

mod client;
mod response;

pub use client::HttpBreedSource;
