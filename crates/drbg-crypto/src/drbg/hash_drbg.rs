//! Hash-DRBG (Hash-based Deterministic Random Bit Generator).
//!
//! Implements NIST SP 800-90A Section 10.1.1 using SHA-256 as the underlying
//! hash function, with a seed length of 440 bits (Table 2). All internal
//! arithmetic on the V register is big-endian byte-string addition modulo
//! 2^440.

use crate::sha2::{Sha256, SHA256_OUTPUT_SIZE};
use drbg_types::CryptoError;
use zeroize::Zeroize;

/// Security strength in bytes (SP 800-90A Table 2, 128-bit strength).
pub const SECURITY_STRENGTH: usize = 16;

/// Seed length in bytes: V and C are 440-bit registers.
pub const SEED_LEN: usize = 55;

/// Minimum entropy input length in bytes for instantiate and reseed.
pub const MIN_ENTROPY_LEN: usize = 16;

/// Maximum number of output bytes per generate request.
pub const MAX_BYTES_PER_REQUEST: usize = 65536;

/// Maximum number of generate requests before reseed is required
/// (SP 800-90A Table 2).
pub const RESEED_INTERVAL: u64 = 1 << 48;

/// Defensive ceiling on any single input string, in bytes.
const MAX_INPUT_LEN: u64 = 1 << 32;

/// Reject inputs beyond the per-string ceiling.
fn check_input_len(input: &[u8]) -> Result<(), CryptoError> {
    if input.len() as u64 > MAX_INPUT_LEN {
        return Err(CryptoError::OversizedInput);
    }
    Ok(())
}

/// Hash_df: Hash derivation function (SP 800-90A §10.3.1).
///
/// Derives `out.len()` bytes from the concatenation of up to four input
/// strings (empty ones are skipped) by counter-mode hashing. The 32-bit
/// output-bit-length field is big-endian and computed once, before the loop.
fn hash_df(hash: &mut Sha256, inputs: [&[u8]; 4], out: &mut [u8]) -> Result<(), CryptoError> {
    let mut counter: u8 = 1;
    let out_bits = ((out.len() as u32) * 8).to_be_bytes();

    let mut offset = 0;
    while offset < out.len() {
        // Hash(counter || no_of_bits_to_return || input_1 || ... || input_4)
        hash.update(&[counter])?;
        hash.update(&out_bits)?;
        for input in inputs {
            if !input.is_empty() {
                hash.update(input)?;
            }
        }
        let digest = hash.finish()?;

        let take = (out.len() - offset).min(SHA256_OUTPUT_SIZE);
        out[offset..offset + take].copy_from_slice(&digest[..take]);
        offset += take;
        counter = counter.wrapping_add(1);
    }

    Ok(())
}

/// Big-endian modular addition: v = (v + addend) mod 2^440.
///
/// The addend is aligned to the low-order end of `v`; the final carry out of
/// the top byte is discarded.
fn add_assign(v: &mut [u8; SEED_LEN], addend: &[u8]) {
    debug_assert!(addend.len() <= SEED_LEN);
    let shift = SEED_LEN - addend.len();
    let mut carry: u16 = 0;
    for i in (0..SEED_LEN).rev() {
        let a = if i >= shift { addend[i - shift] as u16 } else { 0 };
        let sum = v[i] as u16 + a + carry;
        v[i] = sum as u8;
        carry = sum >> 8;
    }
}

/// Big-endian increment with wraparound: v = (v + 1) mod 2^440.
fn increment(v: &mut [u8; SEED_LEN]) {
    for byte in v.iter_mut().rev() {
        let (sum, overflow) = byte.overflowing_add(1);
        *byte = sum;
        if !overflow {
            break;
        }
    }
}

/// Hash-DRBG context (NIST SP 800-90A Section 10.1.1).
///
/// A context is exclusively owned mutable state: every [`generate`] and
/// [`reseed`] call both reads and advances it. Sharing one instance across
/// threads requires external mutual exclusion.
///
/// [`generate`]: HashDrbg::generate
/// [`reseed`]: HashDrbg::reseed
pub struct HashDrbg {
    /// Reused SHA-256 engine; always left freshly reset between steps.
    hash: Sha256,
    /// State value V (440 bits).
    v: [u8; SEED_LEN],
    /// Constant C (440 bits).
    c: [u8; SEED_LEN],
    /// Scratch register for hashgen.
    temp: [u8; SEED_LEN],
    /// Number of generate requests since the last (re)seed.
    /// Zero means the generator has not been instantiated.
    reseed_counter: u64,
}

impl Drop for HashDrbg {
    fn drop(&mut self) {
        self.v.zeroize();
        self.c.zeroize();
        self.temp.zeroize();
    }
}

impl HashDrbg {
    /// Create an uninstantiated generator: V and C are all-zero and every
    /// [`generate`](HashDrbg::generate) call fails with
    /// [`CryptoError::Uninstantiated`] until [`reseed`](HashDrbg::reseed)
    /// supplies entropy.
    pub fn uninstantiated() -> Self {
        HashDrbg {
            hash: Sha256::new(),
            v: [0u8; SEED_LEN],
            c: [0u8; SEED_LEN],
            temp: [0u8; SEED_LEN],
            reseed_counter: 0,
        }
    }

    /// Instantiate a new Hash-DRBG (SP 800-90A §10.1.1.2).
    ///
    /// An empty `entropy` yields an uninstantiated generator; otherwise at
    /// least [`MIN_ENTROPY_LEN`] bytes of entropy are required. `nonce` and
    /// `personalization` are optional domain-separation inputs and may be
    /// empty.
    pub fn new(
        entropy: &[u8],
        nonce: &[u8],
        personalization: &[u8],
    ) -> Result<Self, CryptoError> {
        let mut drbg = Self::uninstantiated();
        if !entropy.is_empty() {
            drbg.instantiate(entropy, nonce, personalization)?;
        }
        Ok(drbg)
    }

    /// Instantiate from the system entropy source (getrandom).
    pub fn from_system_entropy() -> Result<Self, CryptoError> {
        let mut entropy = [0u8; SEED_LEN];
        getrandom::getrandom(&mut entropy).map_err(|_| CryptoError::InsufficientEntropy {
            need: MIN_ENTROPY_LEN,
            got: 0,
        })?;
        let result = Self::new(&entropy, &[], &[]);
        entropy.zeroize();
        result
    }

    /// Whether the generator has been seeded and can produce output.
    pub fn is_instantiated(&self) -> bool {
        self.reseed_counter != 0
    }

    /// Number of generate requests since the last (re)seed, or zero if the
    /// generator is uninstantiated.
    pub fn reseed_counter(&self) -> u64 {
        self.reseed_counter
    }

    fn instantiate(
        &mut self,
        entropy: &[u8],
        nonce: &[u8],
        personalization: &[u8],
    ) -> Result<(), CryptoError> {
        if entropy.len() < MIN_ENTROPY_LEN {
            return Err(CryptoError::InsufficientEntropy {
                need: MIN_ENTROPY_LEN,
                got: entropy.len(),
            });
        }
        check_input_len(entropy)?;
        check_input_len(nonce)?;
        check_input_len(personalization)?;

        // V = Hash_df(entropy || nonce || personalization, seedlen)
        let mut v = [0u8; SEED_LEN];
        hash_df(&mut self.hash, [entropy, nonce, personalization, &[]], &mut v)?;

        // C = Hash_df(0x00 || V, seedlen)
        let mut c = [0u8; SEED_LEN];
        hash_df(&mut self.hash, [&[0x00], &v, &[], &[]], &mut c)?;

        self.v = v;
        self.c = c;
        self.reseed_counter = 1;
        Ok(())
    }

    /// Reseed the DRBG with fresh entropy (SP 800-90A §10.1.1.3).
    ///
    /// On failure the state is left byte-for-byte unchanged. Reseeding an
    /// uninstantiated generator is permitted: the algorithm runs over the
    /// zeroed V and leaves the generator instantiated.
    pub fn reseed(&mut self, entropy: &[u8], additional_input: &[u8]) -> Result<(), CryptoError> {
        if entropy.len() < MIN_ENTROPY_LEN {
            return Err(CryptoError::InsufficientEntropy {
                need: MIN_ENTROPY_LEN,
                got: entropy.len(),
            });
        }
        check_input_len(entropy)?;
        check_input_len(additional_input)?;

        // V' = Hash_df(0x01 || V || entropy || additional_input, seedlen)
        let mut v = [0u8; SEED_LEN];
        hash_df(
            &mut self.hash,
            [&[0x01], &self.v, entropy, additional_input],
            &mut v,
        )?;

        // C' = Hash_df(0x00 || V', seedlen)
        let mut c = [0u8; SEED_LEN];
        hash_df(&mut self.hash, [&[0x00], &v, &[], &[]], &mut c)?;

        self.v = v;
        self.c = c;
        self.reseed_counter = 1;
        Ok(())
    }

    /// Generate pseudorandom bytes (SP 800-90A §10.1.1.4), filling `output`.
    ///
    /// Preconditions are checked in order before any state is touched:
    /// instantiated, reseed counter within [`RESEED_INTERVAL`], request no
    /// larger than [`MAX_BYTES_PER_REQUEST`], additional input within its
    /// ceiling. Each successful call advances the reseed counter by exactly
    /// one, including zero-length requests.
    pub fn generate(
        &mut self,
        output: &mut [u8],
        additional_input: Option<&[u8]>,
    ) -> Result<(), CryptoError> {
        if self.reseed_counter == 0 {
            return Err(CryptoError::Uninstantiated);
        }
        if self.reseed_counter > RESEED_INTERVAL {
            return Err(CryptoError::ReseedRequired);
        }
        if output.len() > MAX_BYTES_PER_REQUEST {
            return Err(CryptoError::RequestTooLarge {
                requested: output.len(),
                max: MAX_BYTES_PER_REQUEST,
            });
        }
        if let Some(data) = additional_input {
            check_input_len(data)?;
        }

        // Step 2: w = Hash(0x02 || V || additional_input), V = (V + w) mod 2^seedlen
        if let Some(data) = additional_input {
            if !data.is_empty() {
                self.hash.update(&[0x02])?;
                self.hash.update(&self.v)?;
                self.hash.update(data)?;
                let w = self.hash.finish()?;
                add_assign(&mut self.v, &w);
            }
        }

        // Step 3 (Hashgen): data = V; emit Hash(data), data = (data + 1) mod 2^seedlen
        self.temp = self.v;
        let mut offset = 0;
        while offset < output.len() {
            self.hash.update(&self.temp)?;
            let digest = self.hash.finish()?;

            let take = (output.len() - offset).min(SHA256_OUTPUT_SIZE);
            output[offset..offset + take].copy_from_slice(&digest[..take]);
            offset += take;
            increment(&mut self.temp);
        }
        self.temp.zeroize();

        // Step 4: H = Hash(0x03 || V)
        self.hash.update(&[0x03])?;
        self.hash.update(&self.v)?;
        let h = self.hash.finish()?;

        // Step 5: V = (V + H + C + reseed_counter) mod 2^seedlen
        add_assign(&mut self.v, &h);
        add_assign(&mut self.v, &self.c);
        add_assign(&mut self.v, &self.reseed_counter.to_be_bytes());

        self.reseed_counter += 1;
        Ok(())
    }

    /// Generate `len` pseudorandom bytes (convenience method).
    pub fn generate_bytes(&mut self, len: usize) -> Result<Vec<u8>, CryptoError> {
        if len > MAX_BYTES_PER_REQUEST {
            return Err(CryptoError::RequestTooLarge {
                requested: len,
                max: MAX_BYTES_PER_REQUEST,
            });
        }
        let mut output = vec![0u8; len];
        self.generate(&mut output, None)?;
        Ok(output)
    }
}
