// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! This crate contains an implementation of the Poseidon hash function instantiated over the
//! 64-bit Goldilocks field (modulus 2^64 - 2^32 + 1), together with the tree-oriented
//! compression functions needed to build binary Merkle trees on top of it.
//!
//! The hash function is exposed via [hashers::PoseidonGoldilocks] which implements the
//! [Hasher] and [ElementHasher] traits. Digests are 4 field elements wide and are represented by
//! the [ElementDigest] type, which also defines the 32-byte binary encoding and the hexadecimal
//! text encoding of digests.
//!
//! # Crate features
//! * `std` - enabled by default and relies on the Rust standard library.
//! * `concurrent` - implies `std` and also enables multi-threaded batch compression of digest
//!   pairs via [PoseidonGoldilocks::merge_many()](hashers::PoseidonGoldilocks::merge_many).

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

mod hash;
pub use hash::{Digest, ElementDigest, ElementHasher, Hasher};
pub mod hashers {
    //! Hash function implementations provided by this crate.

    pub use super::hash::PoseidonGoldilocks;
}

mod errors;
pub use errors::DigestError;

pub use math::fields::f64::BaseElement;
