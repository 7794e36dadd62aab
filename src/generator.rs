// Random value generation on top of a secure source

use log::{trace, warn};

use crate::encoding::{self, compute_max_byte_count, Base64Alphabet};
use crate::error::Result;
#[cfg(feature = "os-rng")]
use crate::source::OsRandomSource;
use crate::source::RandomSource;

/// Generates random bytes, base64 strings and integers from a secure source.
///
/// Every call allocates and owns its own buffer; the generator holds no state
/// beyond the source, so it can be shared across threads when `S` can.
#[derive(Debug, Clone)]
#[cfg(feature = "os-rng")]
pub struct RandomGenerator<S = OsRandomSource> {
    source: S,
}

/// Generates random bytes, base64 strings and integers from a secure source.
#[derive(Debug, Clone)]
#[cfg(not(feature = "os-rng"))]
pub struct RandomGenerator<S> {
    source: S,
}

#[cfg(feature = "os-rng")]
impl RandomGenerator<OsRandomSource> {
    /// Generator backed by the operating system CSPRNG
    pub fn new() -> Self {
        RandomGenerator { source: OsRandomSource::new() }
    }
}

#[cfg(feature = "os-rng")]
impl Default for RandomGenerator<OsRandomSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: RandomSource> RandomGenerator<S> {
    pub fn with_source(source: S) -> Self {
        RandomGenerator { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns exactly `n` random bytes, filled in a single read.
    ///
    /// `n == 0` yields an empty buffer without touching the source.
    pub fn generate_random_bytes(&self, n: usize) -> Result<Vec<u8>> {
        trace!("generating {} random bytes", n);
        let mut bytes = vec![0u8; n];
        if n == 0 {
            return Ok(bytes);
        }

        if let Err(e) = self.source.read(&mut bytes) {
            warn!("random source failed: {}", e);
            return Err(e);
        }
        Ok(bytes)
    }

    /// Random standard base64 string of roughly `max_length` characters.
    ///
    /// The length is an estimate from [`compute_max_byte_count`]; padding can
    /// push the result a few characters past `max_length`. It is never truncated.
    pub fn generate_random_base64(&self, max_length: usize) -> Result<String> {
        self.generate_random_base64_with(max_length, Base64Alphabet::Standard)
    }

    /// URL-safe variant of [`generate_random_base64`](Self::generate_random_base64)
    pub fn generate_random_base64_url(&self, max_length: usize) -> Result<String> {
        self.generate_random_base64_with(max_length, Base64Alphabet::UrlSafe)
    }

    pub fn generate_random_base64_with(&self, max_length: usize, alphabet: Base64Alphabet) -> Result<String> {
        let bytes = self.generate_random_bytes(compute_max_byte_count(max_length))?;
        Ok(encoding::encode(&bytes, alphabet))
    }

    /// Big-endian `u16` from 2 random bytes
    pub fn generate_random_uint16(&self) -> Result<u16> {
        Ok(u16::from_be_bytes(self.random_array()?))
    }

    /// Big-endian `u32` from 4 random bytes
    pub fn generate_random_uint32(&self) -> Result<u32> {
        Ok(u32::from_be_bytes(self.random_array()?))
    }

    /// Big-endian `u64` from 8 random bytes
    pub fn generate_random_uint64(&self) -> Result<u64> {
        Ok(u64::from_be_bytes(self.random_array()?))
    }

    fn random_array<const N: usize>(&self) -> Result<[u8; N]> {
        let bytes = self.generate_random_bytes(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&bytes);
        Ok(out)
    }
}
