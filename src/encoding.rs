// Base64 encoding helpers

use base64::engine::general_purpose::{STANDARD, URL_SAFE};
use base64::engine::GeneralPurpose;
use base64::Engine;

/// Base64 alphabets supported by the generator. Both are padded with `=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Base64Alphabet {
    /// `A-Z a-z 0-9 + /`
    #[default]
    Standard,
    /// `A-Z a-z 0-9 - _`
    UrlSafe,
}

impl Base64Alphabet {
    fn engine(self) -> &'static GeneralPurpose {
        match self {
            Base64Alphabet::Standard => &STANDARD,
            Base64Alphabet::UrlSafe => &URL_SAFE,
        }
    }

    /// Whether `c` can appear in an encoding with this alphabet, padding included
    pub fn contains(self, c: char) -> bool {
        match c {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '=' => true,
            '+' | '/' => self == Base64Alphabet::Standard,
            '-' | '_' => self == Base64Alphabet::UrlSafe,
            _ => false,
        }
    }
}

/// Number of raw bytes whose base64 encoding fits in `target_string_length`
/// characters, i.e. `floor(target_string_length / 4 * 3)`.
///
/// Padding is ignored, so for lengths that are not a multiple of 4 the
/// encoded string can come out slightly longer than the target.
pub fn compute_max_byte_count(target_string_length: usize) -> usize {
    // Split into whole groups and remainder so the multiplication cannot overflow
    target_string_length / 4 * 3 + (target_string_length % 4) * 3 / 4
}

/// Encode `bytes` with the given alphabet, padded
pub fn encode(bytes: &[u8], alphabet: Base64Alphabet) -> String {
    alphabet.engine().encode(bytes)
}
