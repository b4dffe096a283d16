// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{Digest, DIGEST_RANGE, DIGEST_SIZE, STATE_WIDTH};
use crate::errors::DigestError;
use core::{fmt, slice, str::FromStr};
use math::{fields::f64::BaseElement, FieldElement, StarkField};
use utils::{
    string::String, ByteReader, ByteWriter, Deserializable, DeserializationError, Serializable,
};

// CONSTANTS
// ================================================================================================

/// Number of bytes in the binary encoding of a digest.
const DIGEST_BYTES: usize = 32;

/// Number of bytes used to encode a single digest element.
const ELEMENT_BYTES: usize = 8;

// DIGEST
// ================================================================================================

/// A digest of the Poseidon hash function consisting of 4 field elements.
///
/// The binary encoding of a digest is 32 bytes long and lists the elements in reverse order,
/// each as a big-endian 64-bit integer. That is, element 3 occupies bytes 0..8 and element 0
/// occupies bytes 24..32. The text encoding is the lowercase hex string of the binary encoding.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
#[repr(transparent)]
pub struct ElementDigest([BaseElement; DIGEST_SIZE]);

impl ElementDigest {
    /// The digest of an empty leaf.
    pub const ZERO: Self = Self([BaseElement::ZERO; DIGEST_SIZE]);

    pub fn new(value: [BaseElement; DIGEST_SIZE]) -> Self {
        Self(value)
    }

    /// Returns a digest with the first element set to `value` (reduced modulo the field modulus)
    /// and all other elements set to ZERO.
    pub fn from_u64(value: u64) -> Self {
        let mut result = Self::ZERO;
        result.0[0] = BaseElement::new(value);
        result
    }

    /// Decodes a digest from its 32-byte binary encoding.
    ///
    /// # Errors
    /// Returns an error if `bytes` is not exactly 32 bytes long, or if any of the encoded
    /// elements is not smaller than the field modulus.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DigestError> {
        if bytes.len() != DIGEST_BYTES {
            return Err(DigestError::InvalidLength(bytes.len()));
        }

        let mut limbs = [0u64; DIGEST_SIZE];
        for (i, chunk) in bytes.chunks_exact(ELEMENT_BYTES).rev().enumerate() {
            let mut buf = [0u8; ELEMENT_BYTES];
            buf.copy_from_slice(chunk);
            limbs[i] = u64::from_be_bytes(buf);
        }

        Self::try_from(limbs)
    }

    /// Decodes a digest from a hex string, with or without a leading `0x`.
    ///
    /// # Errors
    /// Returns an error if the string is not valid hex, or if the decoded bytes are not a valid
    /// binary encoding of a digest.
    pub fn from_hex(value: &str) -> Result<Self, DigestError> {
        let value = value.strip_prefix("0x").unwrap_or(value);
        let bytes = hex::decode(value)?;
        Self::from_bytes(&bytes)
    }

    /// Returns the lowercase hex encoding of this digest, without a leading `0x`.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }

    /// Returns the elements of this digest as a list of decimal integers, e.g. `[1,2,3,4]`.
    pub fn to_elements_string(&self) -> String {
        let [a, b, c, d] = <[u64; DIGEST_SIZE]>::from(*self);
        format!("[{a},{b},{c},{d}]")
    }

    pub fn as_elements(&self) -> &[BaseElement; DIGEST_SIZE] {
        &self.0
    }

    /// Returns true if all elements of this digest are ZERO.
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|e| *e == BaseElement::ZERO)
    }

    pub fn digests_as_elements(digests: &[Self]) -> &[BaseElement] {
        let p = digests.as_ptr();
        let len = digests.len() * DIGEST_SIZE;
        unsafe { slice::from_raw_parts(p as *const BaseElement, len) }
    }

    /// Reads a digest from the digest portion of a permutation state.
    pub(super) fn from_state(state: &[BaseElement; STATE_WIDTH]) -> Self {
        let mut result = [BaseElement::ZERO; DIGEST_SIZE];
        result.copy_from_slice(&state[DIGEST_RANGE]);
        Self(result)
    }
}

impl Digest for ElementDigest {
    fn as_bytes(&self) -> [u8; 32] {
        let mut result = [0; DIGEST_BYTES];
        for (chunk, element) in result.chunks_exact_mut(ELEMENT_BYTES).rev().zip(self.0.iter()) {
            chunk.copy_from_slice(&element.as_int().to_be_bytes());
        }
        result
    }
}

impl Default for ElementDigest {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for ElementDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.as_bytes() {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for ElementDigest {
    type Err = DigestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// CONVERSIONS
// ================================================================================================

impl From<[BaseElement; DIGEST_SIZE]> for ElementDigest {
    fn from(value: [BaseElement; DIGEST_SIZE]) -> Self {
        Self(value)
    }
}

impl TryFrom<[u64; DIGEST_SIZE]> for ElementDigest {
    type Error = DigestError;

    fn try_from(value: [u64; DIGEST_SIZE]) -> Result<Self, Self::Error> {
        let mut result = [BaseElement::ZERO; DIGEST_SIZE];
        for (i, (r, &v)) in result.iter_mut().zip(value.iter()).enumerate() {
            if v >= BaseElement::MODULUS {
                return Err(DigestError::ElementOutOfRange(i, v));
            }
            *r = BaseElement::new(v);
        }
        Ok(Self(result))
    }
}

impl TryFrom<&[u8]> for ElementDigest {
    type Error = DigestError;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl From<ElementDigest> for [BaseElement; DIGEST_SIZE] {
    fn from(value: ElementDigest) -> Self {
        value.0
    }
}

impl From<ElementDigest> for [u64; DIGEST_SIZE] {
    fn from(value: ElementDigest) -> Self {
        [value.0[0].as_int(), value.0[1].as_int(), value.0[2].as_int(), value.0[3].as_int()]
    }
}

impl From<ElementDigest> for [u8; 32] {
    fn from(value: ElementDigest) -> Self {
        value.as_bytes()
    }
}

// SERIALIZATION
// ================================================================================================

impl Serializable for ElementDigest {
    fn write_into<W: ByteWriter>(&self, target: &mut W) {
        target.write_u8_slice(&self.as_bytes());
    }
}

impl Deserializable for ElementDigest {
    fn read_from<R: ByteReader>(source: &mut R) -> Result<Self, DeserializationError> {
        let bytes = source.read_u8_vec(DIGEST_BYTES)?;
        Self::from_bytes(&bytes).map_err(|err| {
            log::debug!("failed to deserialize digest: {}", err);
            DeserializationError::InvalidValue(format!("{err}"))
        })
    }
}

// TESTS
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::{Digest, DigestError, ElementDigest, DIGEST_BYTES};
    use math::{fields::f64::BaseElement, StarkField};
    use proptest::prelude::*;
    use rand_utils::rand_array;
    use utils::{Deserializable, Serializable, SliceReader};

    const MODULUS: u64 = BaseElement::MODULUS;

    /// Encodes the limbs in the wire order: limb 3 first, each limb big-endian.
    fn encode_limbs(limbs: [u64; 4]) -> [u8; DIGEST_BYTES] {
        let mut bytes = [0u8; DIGEST_BYTES];
        for (i, limb) in limbs.iter().rev().enumerate() {
            bytes[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_be_bytes());
        }
        bytes
    }

    #[test]
    fn digest_byte_layout() {
        let digest = ElementDigest::try_from([1u64, 2, 3, 0x0102030405060708]).unwrap();
        let bytes = digest.as_bytes();

        assert_eq!(&bytes[0..8], &[1, 2, 3, 4, 5, 6, 7, 8]);
        assert_eq!(&bytes[8..16], &3u64.to_be_bytes());
        assert_eq!(&bytes[16..24], &2u64.to_be_bytes());
        assert_eq!(&bytes[24..32], &1u64.to_be_bytes());

        assert_eq!(
            "0102030405060708000000000000000300000000000000020000000000000001",
            digest.to_hex()
        );
    }

    #[test]
    fn digest_serialization() {
        let d1 = ElementDigest::new(rand_array());

        let mut bytes = vec![];
        d1.write_into(&mut bytes);
        assert_eq!(DIGEST_BYTES, bytes.len());
        assert_eq!(bytes, d1.as_bytes().to_vec());

        let mut reader = SliceReader::new(&bytes);
        let d2 = ElementDigest::read_from(&mut reader).unwrap();

        assert_eq!(d1, d2);
    }

    #[test]
    fn digest_deserialization_rejects_out_of_field() {
        let bytes = encode_limbs([0, MODULUS, 0, 0]);
        let mut reader = SliceReader::new(&bytes);
        assert!(ElementDigest::read_from(&mut reader).is_err());
    }

    #[test]
    fn digest_hex() {
        let hex = "274913f0007aa2329cd4f8353866fb4f8f238fcceb658894d110aa6a46373941";
        let digest = ElementDigest::from_hex(hex).unwrap();
        assert_eq!(hex, digest.to_hex());
        assert_eq!(hex, digest.to_string());

        // a leading 0x and uppercase letters are accepted, but never produced
        let prefixed = format!("0x{}", hex.to_uppercase());
        assert_eq!(digest, prefixed.parse::<ElementDigest>().unwrap());
        assert_eq!(hex, ElementDigest::from_hex(&prefixed).unwrap().to_hex());

        assert_eq!(
            [15064728126975588673, 10314245681893968020, 11300930272442645327, 2830815762300183090],
            <[u64; 4]>::from(digest)
        );
        assert_eq!(
            "[15064728126975588673,10314245681893968020,11300930272442645327,2830815762300183090]",
            digest.to_elements_string()
        );
    }

    #[test]
    fn digest_invalid_length() {
        assert_eq!(Err(DigestError::InvalidLength(31)), ElementDigest::from_bytes(&[0; 31]));
        assert_eq!(Err(DigestError::InvalidLength(33)), ElementDigest::from_bytes(&[0; 33]));
        assert_eq!(Err(DigestError::InvalidLength(0)), ElementDigest::from_bytes(&[]));
        assert_eq!(Err(DigestError::InvalidLength(31)), ElementDigest::from_hex(&"00".repeat(31)));
    }

    #[test]
    fn digest_invalid_hex() {
        assert!(matches!(ElementDigest::from_hex("0x0g"), Err(DigestError::InvalidHex(_))));
        assert!(matches!(ElementDigest::from_hex("abc"), Err(DigestError::InvalidHex(_))));
        // the prefix is stripped only once
        let hex = format!("0x0x{}", "00".repeat(31));
        assert!(matches!(ElementDigest::from_hex(&hex), Err(DigestError::InvalidHex(_))));
    }

    #[test]
    fn digest_field_range() {
        for limb in 0..4 {
            let mut limbs = [0u64; 4];

            limbs[limb] = MODULUS - 1;
            let digest = ElementDigest::from_bytes(&encode_limbs(limbs)).unwrap();
            assert_eq!(limbs, <[u64; 4]>::from(digest));

            for k in [0, 1, 2, 100, u64::MAX - MODULUS] {
                limbs[limb] = MODULUS + k;
                assert_eq!(
                    Err(DigestError::ElementOutOfRange(limb, MODULUS + k)),
                    ElementDigest::from_bytes(&encode_limbs(limbs))
                );
            }
        }
    }

    #[test]
    fn digest_zero() {
        assert!(ElementDigest::default().is_zero());
        assert_eq!(ElementDigest::ZERO, ElementDigest::from_bytes(&[0; 32]).unwrap());
        assert_eq!("00".repeat(32), ElementDigest::ZERO.to_hex());

        let digest = ElementDigest::from_u64(5);
        assert!(!digest.is_zero());
        assert_eq!([5, 0, 0, 0], <[u64; 4]>::from(digest));
        assert_eq!(5, digest.as_bytes()[31]);
    }

    #[test]
    fn digests_as_elements() {
        let digests = [ElementDigest::new(rand_array()), ElementDigest::new(rand_array())];
        let elements = ElementDigest::digests_as_elements(&digests);

        assert_eq!(8, elements.len());
        assert_eq!(digests[0].as_elements(), &elements[..4]);
        assert_eq!(digests[1].as_elements(), &elements[4..]);

        assert_eq!(
            core::mem::size_of::<[BaseElement; 4]>(),
            core::mem::size_of::<ElementDigest>()
        );
        assert_eq!(core::mem::align_of::<BaseElement>(), core::mem::align_of::<ElementDigest>());
    }

    proptest! {
        #[test]
        fn digest_bytes_roundtrip(limbs in any::<[u64; 4]>().prop_map(|l| l.map(|v| v % MODULUS))) {
            let digest = ElementDigest::try_from(limbs).unwrap();
            let decoded = ElementDigest::from_bytes(&digest.as_bytes()).unwrap();
            prop_assert_eq!(digest, decoded);
            prop_assert_eq!(digest, ElementDigest::from_hex(&digest.to_hex()).unwrap());
        }

        #[test]
        fn digest_hex_normalization(bytes in any::<[u8; 32]>()) {
            let hex = hex::encode_upper(bytes);
            match ElementDigest::from_hex(&hex) {
                Ok(digest) => prop_assert_eq!(hex.to_lowercase(), digest.to_hex()),
                Err(err) => prop_assert!(matches!(err, DigestError::ElementOutOfRange(_, _))),
            }
        }
    }
}
