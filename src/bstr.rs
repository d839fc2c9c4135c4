//! Adler-32 checksum over binary strings
//!
//! A binary string carries one byte per character, every character code
//! in `0..=255`.

use crate::ChecksumError;
use crate::buf::{BLOCK_LEN, MOD_ADLER, checksum_bytes, reduce};
use alloc::vec::Vec;

/// Input length above which the string is flattened to a byte buffer
/// and handed to [`checksum_bytes`]. Either path yields the same sum.
const DELEGATE_LEN: usize = 32768;

/// Adler-32 checksum of a binary string.
///
/// Character codes above 0xFF are outside the contract and fold to
/// their low byte.
pub fn checksum_bstr(s: &str) -> u32 {
    if s.len() > DELEGATE_LEN {
        let bytes: Vec<u8> = s.chars().map(|c| c as u8).collect();
        return checksum_bytes(&bytes);
    }

    let mut a = 1u32;
    let mut b = 0u32;
    let mut n = 0usize;

    for c in s.chars() {
        a += c as u32 & 0xFF;
        b += a;
        n += 1;
        if n == BLOCK_LEN {
            a = reduce(a);
            b = reduce(b);
            n = 0;
        }
    }
    a = reduce(a);
    b = reduce(b);

    ((b % MOD_ADLER) << 16) | (a % MOD_ADLER)
}

/// Checksum of a binary string, rejecting character codes that do not
/// fit a byte.
pub fn checksum_bstr_checked(s: &str) -> Result<u32, ChecksumError> {
    if s.chars().any(|c| c > '\u{FF}') {
        return Err(ChecksumError::InvalidInput);
    }
    Ok(checksum_bstr(s))
}
