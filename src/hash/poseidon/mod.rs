// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{Digest, ElementHasher, Hasher};
use core::ops::Range;
use math::{fields::f64::BaseElement, FieldElement};
use utils::collections::Vec;

#[cfg(feature = "concurrent")]
use utils::iterators::*;

mod constants;
use constants::{
    MDS, NUM_ROUND_CONSTANTS, PRE_SPARSE_MDS, ROUND_CONSTANTS, SPARSE_COEFFICIENTS,
    SPARSE_ROUND_WIDTH,
};

mod digest;
pub use digest::ElementDigest;


// CONSTANTS
// ================================================================================================

/// Sponge state is set to 12 field elements or 96 bytes; 8 elements are reserved for rate and
/// the remaining 4 elements are reserved for capacity.
const STATE_WIDTH: usize = 12;

/// The rate portion of the state is located in elements 0 through 7.
const RATE_RANGE: Range<usize> = 0..8;
const RATE_WIDTH: usize = RATE_RANGE.end - RATE_RANGE.start;

/// The capacity portion of the state is located in elements 8 through 11.
const CAPACITY_RANGE: Range<usize> = 8..12;
const CAPACITY_WIDTH: usize = CAPACITY_RANGE.end - CAPACITY_RANGE.start;

/// The output of the hash function is a digest which consists of 4 field elements or 32 bytes.
///
/// The digest is returned from state elements 0 through 3 (the first four elements of the
/// rate portion).
const DIGEST_RANGE: Range<usize> = 0..4;
const DIGEST_SIZE: usize = DIGEST_RANGE.end - DIGEST_RANGE.start;

/// Two digests being merged are placed into state elements 0 through 7.
const INPUT1_RANGE: Range<usize> = 0..4;
const INPUT2_RANGE: Range<usize> = 4..8;

/// Number of full rounds; half of them are applied before the partial rounds and half after.
const NUM_FULL_ROUNDS: usize = 8;
const HALF_FULL_ROUNDS: usize = NUM_FULL_ROUNDS / 2;

/// Number of partial rounds, which apply the S-Box to the first state element only.
const NUM_PARTIAL_ROUNDS: usize = 22;

/// Offsets of the partial round constants and of the second half of full round constants in
/// [ROUND_CONSTANTS].
const PARTIAL_CONSTANTS_OFFSET: usize = (HALF_FULL_ROUNDS + 1) * STATE_WIDTH;
const SECOND_HALF_CONSTANTS_OFFSET: usize = PARTIAL_CONSTANTS_OFFSET + NUM_PARTIAL_ROUNDS;

/// S-Box power.
const ALPHA: u64 = 7;

/// Capacity used when merging two digests into an internal node.
const NODE_CAPACITY: [BaseElement; CAPACITY_WIDTH] = [BaseElement::ZERO; CAPACITY_WIDTH];

/// Domain tag written over the digest portion of the state between the two permutations of
/// leaf-domain merging.
const LEAF_DOMAIN: [BaseElement; DIGEST_SIZE] =
    [BaseElement::ONE, BaseElement::ONE, BaseElement::ZERO, BaseElement::ONE];

// HASHER IMPLEMENTATION
// ================================================================================================

/// Implementation of [Hasher] trait for the Poseidon hash function over the Goldilocks field
/// with 256-bit output.
///
/// The hash function is instantiated with the same parameters as Poseidon in plonky2 and in the
/// Polygon Hermez provers:
/// * Field: 64-bit prime field with modulus 2^64 - 2^32 + 1.
/// * State width: 12 field elements.
/// * Capacity size: 4 field elements.
/// * Number of full rounds: 8.
/// * Number of partial rounds: 22.
/// * S-Box degree: 7.
///
/// The permutation is evaluated in its optimized form: round constants of the partial rounds
/// are folded into the preceding full round, and the MDS matrix of each partial round is replaced
/// with a sparse matrix. The result is bit-for-bit identical to the textbook evaluation.
///
/// ## Sponge and compression modes
/// Elements are hashed with a sponge which overwrites (rather than adds to) the rate portion of
/// the state, does not pad its input and does not encode the input length anywhere. Because of
/// this, [hash_no_pad()](PoseidonGoldilocks::hash_no_pad) is only collision resistant for inputs
/// of a fixed length. [hash_pad()](PoseidonGoldilocks::hash_pad) wraps the input with ones and
/// zeros first and is the function used by [ElementHasher::hash_elements()].
///
/// [merge()](PoseidonGoldilocks::merge) and [merge_leaf()](PoseidonGoldilocks::merge_leaf) do not
/// go through the sponge: both digests are copied into the rate portion of the state and the
/// permutation is applied directly. The leaf variant applies the permutation a second time after
/// overwriting the digest portion of the state with a fixed domain tag.
pub struct PoseidonGoldilocks();

impl Hasher for PoseidonGoldilocks {
    type Digest = ElementDigest;

    const COLLISION_RESISTANCE: u32 = 128;

    fn merge(values: &[Self::Digest; 2]) -> Self::Digest {
        let state = Self::merge_to_state(values, NODE_CAPACITY);
        ElementDigest::from_state(&state)
    }

    fn merge_leaf(values: &[Self::Digest; 2]) -> Self::Digest {
        let mut state = Self::merge_to_state(values, NODE_CAPACITY);
        state[DIGEST_RANGE].copy_from_slice(&LEAF_DOMAIN);
        Self::apply_permutation(&mut state);
        ElementDigest::from_state(&state)
    }
}

impl ElementHasher for PoseidonGoldilocks {
    type BaseField = BaseElement;

    fn hash_elements<E: FieldElement<BaseField = Self::BaseField>>(elements: &[E]) -> Self::Digest {
        // convert the elements into a list of base field elements
        let elements = E::as_base_elements(elements);
        Self::hash_pad(elements)
    }
}

// HASH FUNCTION IMPLEMENTATION
// ================================================================================================

impl PoseidonGoldilocks {
    // CONSTANTS
    // --------------------------------------------------------------------------------------------

    pub const NUM_FULL_ROUNDS: usize = NUM_FULL_ROUNDS;

    pub const NUM_PARTIAL_ROUNDS: usize = NUM_PARTIAL_ROUNDS;

    pub const STATE_WIDTH: usize = STATE_WIDTH;

    pub const RATE_RANGE: Range<usize> = RATE_RANGE;

    pub const CAPACITY_RANGE: Range<usize> = CAPACITY_RANGE;

    pub const DIGEST_RANGE: Range<usize> = DIGEST_RANGE;

    pub const LEAF_DOMAIN: [BaseElement; DIGEST_SIZE] = LEAF_DOMAIN;

    pub const ROUND_CONSTANTS: [BaseElement; NUM_ROUND_CONSTANTS] = ROUND_CONSTANTS;

    pub const MDS: [[BaseElement; STATE_WIDTH]; STATE_WIDTH] = MDS;

    // SPONGE
    // --------------------------------------------------------------------------------------------

    /// Hashes the provided elements and returns `num_outputs` elements squeezed from the sponge.
    ///
    /// Elements are absorbed in blocks of 8 which overwrite the rate portion of the state. A
    /// trailing partial block overwrites only the leading rate elements and leaves the rest of
    /// the rate as it is. Outputs are read from the rate portion of the state, 8 at a time, with
    /// the permutation applied between consecutive batches.
    ///
    /// # Panics
    /// Panics if `num_outputs` is zero.
    pub fn hash_n_to_m_no_pad(elements: &[BaseElement], num_outputs: usize) -> Vec<BaseElement> {
        assert!(num_outputs > 0, "number of outputs must be greater than zero");

        let mut state = Self::absorb(elements);
        let mut result = Vec::with_capacity(num_outputs);
        loop {
            for &element in state[RATE_RANGE].iter() {
                result.push(element);
                if result.len() == num_outputs {
                    return result;
                }
            }
            Self::apply_permutation(&mut state);
        }
    }

    /// Returns a hash of the provided elements computed without any padding.
    pub fn hash_no_pad(elements: &[BaseElement]) -> ElementDigest {
        let state = Self::absorb(elements);
        ElementDigest::from_state(&state)
    }

    /// Returns a hash of the provided elements computed after padding them.
    ///
    /// The padded sequence starts with a single ONE, followed by the elements and enough ZEROs to
    /// make room for a trailing ONE such that the length of the whole sequence is a multiple of
    /// the state width (not the rate width).
    pub fn hash_pad(elements: &[BaseElement]) -> ElementDigest {
        let padded_len = (elements.len() + 2 + STATE_WIDTH - 1) / STATE_WIDTH * STATE_WIDTH;

        let mut padded = Vec::with_capacity(padded_len);
        padded.push(BaseElement::ONE);
        padded.extend_from_slice(elements);
        padded.resize(padded_len - 1, BaseElement::ZERO);
        padded.push(BaseElement::ONE);

        Self::hash_no_pad(&padded)
    }

    /// Same as [hash_no_pad()](Self::hash_no_pad), but the input is provided as raw integers
    /// which are reduced modulo the field modulus.
    pub fn hash_no_pad_u64s(values: &[u64]) -> ElementDigest {
        let elements = values.iter().map(|&v| BaseElement::new(v)).collect::<Vec<_>>();
        Self::hash_no_pad(&elements)
    }

    /// Same as [hash_pad()](Self::hash_pad), but the input is provided as raw integers which are
    /// reduced modulo the field modulus.
    pub fn hash_pad_u64s(values: &[u64]) -> ElementDigest {
        let elements = values.iter().map(|&v| BaseElement::new(v)).collect::<Vec<_>>();
        Self::hash_pad(&elements)
    }

    // TREE HASHING
    // --------------------------------------------------------------------------------------------

    /// Returns a hash of two digests. This is the internal node compression function of Merkle
    /// trees built with this hash function.
    pub fn merge(values: &[ElementDigest; 2]) -> ElementDigest {
        <Self as Hasher>::merge(values)
    }

    /// Returns a hash of two digests computed in the leaf domain.
    pub fn merge_leaf(values: &[ElementDigest; 2]) -> ElementDigest {
        <Self as Hasher>::merge_leaf(values)
    }

    /// Returns digests of all empty subtrees of a binary Merkle tree with the specified number of
    /// levels; index 0 is the root level and index `levels - 1` is the leaf level.
    ///
    /// # Panics
    /// Panics if `levels` is zero.
    pub fn empty_subtree_digests(levels: usize) -> Vec<ElementDigest> {
        <Self as Hasher>::empty_subtree_digests(levels)
    }

    /// Merges each pair of digests in the provided list and returns the resulting digests in the
    /// same order.
    ///
    /// When `concurrent` feature is enabled, the pairs are merged in multiple threads.
    pub fn merge_many(pairs: &[[ElementDigest; 2]]) -> Vec<ElementDigest> {
        #[cfg(not(feature = "concurrent"))]
        let result = pairs.iter().map(Self::merge).collect();

        #[cfg(feature = "concurrent")]
        let result = pairs.par_iter().map(Self::merge).collect();

        result
    }

    /// Copies two digests into the rate portion of a fresh state, sets the capacity portion to
    /// the provided values, and returns the state after applying the permutation to it.
    pub fn merge_to_state(
        values: &[ElementDigest; 2],
        capacity: [BaseElement; CAPACITY_WIDTH],
    ) -> [BaseElement; STATE_WIDTH] {
        let mut state = [BaseElement::ZERO; STATE_WIDTH];
        state[INPUT1_RANGE].copy_from_slice(values[0].as_elements());
        state[INPUT2_RANGE].copy_from_slice(values[1].as_elements());
        state[CAPACITY_RANGE].copy_from_slice(&capacity);

        Self::apply_permutation(&mut state);
        state
    }

    // POSEIDON PERMUTATION
    // --------------------------------------------------------------------------------------------

    /// Applies Poseidon permutation to the provided state.
    pub fn apply_permutation(state: &mut [BaseElement; STATE_WIDTH]) {
        Self::add_constants(state, 0);

        for round in 0..HALF_FULL_ROUNDS {
            Self::apply_sbox(state);
            Self::add_constants(state, (round + 1) * STATE_WIDTH);
            // the last full round before the partial rounds absorbs the dense part of the
            // partial round matrices
            if round == HALF_FULL_ROUNDS - 1 {
                Self::apply_matrix(state, &PRE_SPARSE_MDS);
            } else {
                Self::apply_matrix(state, &MDS);
            }
        }

        for round in 0..NUM_PARTIAL_ROUNDS {
            Self::apply_partial_round(state, round);
        }

        for round in 0..HALF_FULL_ROUNDS {
            Self::apply_sbox(state);
            // no constants are added after the final round
            if round < HALF_FULL_ROUNDS - 1 {
                Self::add_constants(state, SECOND_HALF_CONSTANTS_OFFSET + round * STATE_WIDTH);
            }
            Self::apply_matrix(state, &MDS);
        }
    }

    /// Poseidon partial round function.
    #[inline(always)]
    pub fn apply_partial_round(state: &mut [BaseElement; STATE_WIDTH], round: usize) {
        state[0] = state[0].exp(ALPHA);
        state[0] += ROUND_CONSTANTS[PARTIAL_CONSTANTS_OFFSET + round];
        Self::apply_sparse_matrix(state, round);
    }

    // HELPER FUNCTIONS
    // --------------------------------------------------------------------------------------------

    /// Absorbs the elements into a zero-initialized state and returns the resulting state.
    fn absorb(elements: &[BaseElement]) -> [BaseElement; STATE_WIDTH] {
        let mut state = [BaseElement::ZERO; STATE_WIDTH];

        let mut blocks = elements.chunks_exact(RATE_WIDTH);
        for block in &mut blocks {
            state[RATE_RANGE].copy_from_slice(block);
            Self::apply_permutation(&mut state);
        }

        // the remaining elements overwrite only the leading part of the rate; the rest of the
        // rate keeps the values left there by the previous permutation
        let remainder = blocks.remainder();
        if !remainder.is_empty() {
            state[..remainder.len()].copy_from_slice(remainder);
            Self::apply_permutation(&mut state);
        }

        state
    }

    #[inline(always)]
    fn add_constants(state: &mut [BaseElement; STATE_WIDTH], offset: usize) {
        let ark = &ROUND_CONSTANTS[offset..offset + STATE_WIDTH];
        state.iter_mut().zip(ark).for_each(|(s, &k)| *s += k);
    }

    #[inline(always)]
    fn apply_sbox(state: &mut [BaseElement; STATE_WIDTH]) {
        state.iter_mut().for_each(|s| *s = s.exp(ALPHA));
    }

    /// Multiplies the state, as a row vector, by the provided matrix.
    #[inline(always)]
    fn apply_matrix(
        state: &mut [BaseElement; STATE_WIDTH],
        matrix: &[[BaseElement; STATE_WIDTH]; STATE_WIDTH],
    ) {
        let mut result = [BaseElement::ZERO; STATE_WIDTH];
        for (&s, row) in state.iter().zip(matrix) {
            result.iter_mut().zip(row).for_each(|(r, &m)| *r += m * s);
        }
        *state = result;
    }

    #[inline(always)]
    fn apply_sparse_matrix(state: &mut [BaseElement; STATE_WIDTH], round: usize) {
        let offset = round * SPARSE_ROUND_WIDTH;
        let first_row = &SPARSE_COEFFICIENTS[offset..offset + STATE_WIDTH];
        let first_column = &SPARSE_COEFFICIENTS[offset + STATE_WIDTH..offset + SPARSE_ROUND_WIDTH];

        // lanes 1.. are updated with the value of lane 0 from before this step
        let s0 = state[0];
        let mut new_s0 = BaseElement::ZERO;
        for (&s, &m) in state.iter().zip(first_row) {
            new_s0 += m * s;
        }
        for (s, &m) in state[1..].iter_mut().zip(first_column) {
            *s += m * s0;
        }
        state[0] = new_s0;
    }
}
