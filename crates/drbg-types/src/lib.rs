#![forbid(unsafe_code)]
#![doc = "Common types and error codes for the Hash-DRBG crates."]

pub mod error;

pub use error::*;
