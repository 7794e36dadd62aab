//! Cryptographically secure random values: raw bytes, base64 strings in the
//! standard and URL-safe alphabets, and big-endian `u16`/`u32`/`u64`.
//!
//! [`RandomGenerator`] works over any [`RandomSource`]. With the default
//! `os-rng` feature the free functions below use the operating system CSPRNG.

pub mod encoding;
pub mod error;
pub mod generator;
pub mod source;

pub use encoding::{compute_max_byte_count, Base64Alphabet};
pub use error::{RandomError, Result};
pub use generator::RandomGenerator;
#[cfg(feature = "os-rng")]
pub use source::OsRandomSource;
pub use source::{FixedSource, RandomSource, ReaderSource};

/// `n` bytes from the OS source
#[cfg(feature = "os-rng")]
pub fn generate_random_bytes(n: usize) -> Result<Vec<u8>> {
    RandomGenerator::new().generate_random_bytes(n)
}

/// Standard base64 string of roughly `max_length` characters from the OS source
#[cfg(feature = "os-rng")]
pub fn generate_random_base64(max_length: usize) -> Result<String> {
    RandomGenerator::new().generate_random_base64(max_length)
}

/// URL-safe base64 string of roughly `max_length` characters from the OS source
#[cfg(feature = "os-rng")]
pub fn generate_random_base64_url(max_length: usize) -> Result<String> {
    RandomGenerator::new().generate_random_base64_url(max_length)
}

#[cfg(feature = "os-rng")]
pub fn generate_random_uint16() -> Result<u16> {
    RandomGenerator::new().generate_random_uint16()
}

#[cfg(feature = "os-rng")]
pub fn generate_random_uint32() -> Result<u32> {
    RandomGenerator::new().generate_random_uint32()
}

#[cfg(feature = "os-rng")]
pub fn generate_random_uint64() -> Result<u64> {
    RandomGenerator::new().generate_random_uint64()
}
