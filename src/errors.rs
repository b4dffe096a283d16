// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt;

// DIGEST ERROR
// ================================================================================================

/// Defines errors which can occur when decoding a digest from its binary or text representation.
#[derive(Debug, Clone, PartialEq)]
pub enum DigestError {
    /// Byte representation of a digest was not 32 bytes long; holds the actual length.
    InvalidLength(usize),
    /// A limb of the digest is not smaller than the field modulus; holds the limb index and value.
    ElementOutOfRange(usize, u64),
    /// The text representation of a digest is not a valid hexadecimal string.
    InvalidHex(hex::FromHexError),
}

impl fmt::Display for DigestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "digest must be 32 bytes long, but was {len} bytes")
            }
            Self::ElementOutOfRange(limb, value) => {
                write!(f, "digest limb {limb} with value {value} is not in the Goldilocks field")
            }
            Self::InvalidHex(err) => {
                write!(f, "digest is not a valid hex string: {err}")
            }
        }
    }
}

impl From<hex::FromHexError> for DigestError {
    fn from(err: hex::FromHexError) -> Self {
        Self::InvalidHex(err)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigestError {}
