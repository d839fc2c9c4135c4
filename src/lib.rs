//! Adler-32 checksum library
//!
//! Computes the checksum defined in RFC 1950 over raw byte buffers,
//! over binary strings carrying one byte per character, and over
//! UTF-16 text hashed as its UTF-8 encoding without materializing the
//! encoded bytes.
//!
//! See also: <https://www.ietf.org/rfc/rfc1950.txt>

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod bstr;
mod buf;
mod combine;
mod utf16;

pub use bstr::{checksum_bstr, checksum_bstr_checked};
pub use buf::checksum_bytes;
pub use combine::combine;
pub use utf16::{checksum_utf16, checksum_utf16_checked};


/// Errors reported by the `_checked` checksum variants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ChecksumError {
    InvalidInput,
}
