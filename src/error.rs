//! Error types for encoding and modular-arithmetic operations.
//!
//! Decryption failure is deliberately absent: `decrypt` is total and returns
//! 32 bytes for any well-sized input. A mismatched key or corrupted
//! ciphertext yields a value that differs from the original message, and
//! callers needing authenticity must layer a MAC or signature on top.

use std::fmt;

/// Errors that can occur while decoding buffers or inverting ring elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewHopeError {
    /// A decode was handed a buffer of the wrong size. Decoding fails fast
    /// rather than truncating or padding.
    InputLength {
        /// What was being decoded.
        context: &'static str,
        /// Required buffer size in bytes.
        expected: usize,
        /// Size actually supplied.
        actual: usize,
    },

    /// No multiplicative inverse exists: gcd(value, modulus) != 1.
    /// Unreachable for the fixed scheme parameters, but checked.
    NoReciprocal {
        /// The value that could not be inverted.
        value: u32,
        /// The modulus it was inverted against.
        modulus: u32,
    },
}

impl fmt::Display for NewHopeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NewHopeError::InputLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "{} must be {} bytes, got {}",
                    context, expected, actual
                )
            }
            NewHopeError::NoReciprocal { value, modulus } => {
                write!(f, "{} has no inverse modulo {}", value, modulus)
            }
        }
    }
}

impl std::error::Error for NewHopeError {}

/// Result type alias for fallible operations in this crate.
pub type Result<T> = std::result::Result<T, NewHopeError>;
