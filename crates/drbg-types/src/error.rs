/// Cryptographic operation errors.
///
/// Every error is raised synchronously at the point of violation; the
/// triggering call is rejected with no partial state mutation and no
/// partial output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    /// Entropy input shorter than the minimum during instantiate or reseed.
    #[error("drbg: insufficient entropy: need at least {need} bytes, got {got}")]
    InsufficientEntropy { need: usize, got: usize },

    /// Requested output exceeds the per-request ceiling.
    #[error("drbg: request of {requested} bytes exceeds the {max}-byte limit")]
    RequestTooLarge { requested: usize, max: usize },

    /// The reseed counter is exhausted; fresh entropy must be supplied.
    #[error("drbg: reseed required")]
    ReseedRequired,

    /// An input exceeds its maximum permitted length.
    #[error("input exceeds maximum permitted length")]
    OversizedInput,

    /// The generator was constructed without entropy and has not been
    /// reseeded since.
    #[error("drbg: generator is not instantiated")]
    Uninstantiated,
}
