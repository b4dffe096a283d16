// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt::{Debug, Display};
use math::{FieldElement, StarkField};
use utils::{collections::Vec, Deserializable, Serializable};

mod poseidon;
pub use poseidon::{ElementDigest, PoseidonGoldilocks};

// HASHER TRAITS
// ================================================================================================

/// Defines a cryptographic hash function used to compress nodes of a binary Merkle tree.
///
/// The hash function maps pairs of digests into a single digest. Two flavors of compression are
/// provided: [merge()](Hasher::merge) for internal nodes and [merge_leaf()](Hasher::merge_leaf)
/// for nodes directly above the leaves. The two must never produce the same output for the same
/// inputs, so that a leaf-level node can not be passed off as an internal one.
pub trait Hasher {
    /// Specifies a digest type returned by this hasher.
    type Digest: Digest;

    /// Collision resistance of the hash function measured in bits.
    const COLLISION_RESISTANCE: u32;

    /// Returns a hash of two digests. This method is intended for use in construction of
    /// Merkle trees.
    fn merge(values: &[Self::Digest; 2]) -> Self::Digest;

    /// Returns a hash of two digests computed in the leaf domain. This method is intended for use
    /// in construction of the bottom level of Merkle trees.
    fn merge_leaf(values: &[Self::Digest; 2]) -> Self::Digest;

    /// Returns digests of empty subtrees for a binary Merkle tree with the specified number of
    /// levels.
    ///
    /// The digest at index `levels - 1` is the all-zero digest of an empty leaf; every other
    /// entry is the [merge()](Hasher::merge) of the next entry with itself. Thus, the entry at
    /// index 0 is the root of a tree of the specified depth in which all leaves are empty.
    ///
    /// # Panics
    /// Panics if `levels` is zero.
    fn empty_subtree_digests(levels: usize) -> Vec<Self::Digest> {
        assert!(levels > 0, "number of tree levels must be at least 1");

        let mut digests = vec![Self::Digest::default(); levels];
        for i in (0..levels - 1).rev() {
            digests[i] = Self::merge(&[digests[i + 1], digests[i + 1]]);
        }
        log::trace!("computed empty subtree digests for {} levels; root: {}", levels, digests[0]);
        digests
    }
}

/// Defines a cryptographic hash function for hashing field elements.
///
/// This trait defines a hash procedure for a sequence of field elements. The elements can be
/// either in the base field specified for this hasher, or in an extension of the base field.
pub trait ElementHasher: Hasher {
    /// Specifies a base field for elements which can be hashed with this hasher.
    type BaseField: StarkField;

    /// Returns a hash of the provided field elements.
    fn hash_elements<E>(elements: &[E]) -> Self::Digest
    where
        E: FieldElement<BaseField = Self::BaseField>;
}

// DIGEST TRAIT
// ================================================================================================

/// Defines output type for a cryptographic hash function.
pub trait Digest:
    Debug
    + Display
    + Default
    + Copy
    + Clone
    + Eq
    + PartialEq
    + Send
    + Sync
    + Serializable
    + Deserializable
{
    /// Returns this digest serialized into an array of bytes.
    ///
    /// Ideally, the length of the returned array should be defined by an associated constant, but
    /// using associated constants in const generics is not supported by Rust yet. Thus, we put an
    /// upper limit on the possible digest size. For digests which are smaller than 32 bytes, the
    /// unused bytes should be set to 0.
    fn as_bytes(&self) -> [u8; 32];
}
