//! Deterministic Random Bit Generators (NIST SP 800-90A).
//!
//! Only the Hash_DRBG mechanism (Section 10.1.1) is provided, instantiated
//! with SHA-256. The generator consumes entropy supplied by the caller; it
//! does not gather entropy itself.

pub mod hash_drbg;

pub use hash_drbg::HashDrbg;
