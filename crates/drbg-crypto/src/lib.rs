#![forbid(unsafe_code)]
#![doc = "Hash-DRBG (NIST SP 800-90A) over SHA-256, for hosts that supply their own entropy."]

pub mod drbg;
pub mod sha2;

pub use drbg::HashDrbg;
pub use sha2::Sha256;
