// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use math::fields::f64::BaseElement;
use rand_utils::rand_array;
use winter_poseidon::{hashers::PoseidonGoldilocks, ElementDigest, Hasher};

fn random_digest() -> ElementDigest {
    ElementDigest::new(rand_array())
}

fn permutation(c: &mut Criterion) {
    c.bench_function("poseidon permutation", |b| {
        b.iter_batched(
            rand_array::<BaseElement, 12>,
            |mut state| {
                PoseidonGoldilocks::apply_permutation(&mut state);
                state
            },
            BatchSize::SmallInput,
        )
    });
}

fn tree_hashing(c: &mut Criterion) {
    c.bench_function("poseidon merge", |b| {
        b.iter_batched(
            || [random_digest(), random_digest()],
            |values| PoseidonGoldilocks::merge(&values),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("poseidon merge leaf", |b| {
        b.iter_batched(
            || [random_digest(), random_digest()],
            |values| PoseidonGoldilocks::merge_leaf(&values),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("poseidon merge 1024 pairs", |b| {
        b.iter_batched(
            || (0..1024).map(|_| [random_digest(), random_digest()]).collect::<Vec<_>>(),
            |pairs| PoseidonGoldilocks::merge_many(&pairs),
            BatchSize::LargeInput,
        )
    });

    c.bench_function("poseidon empty subtrees 32 levels", |b| {
        b.iter(|| <PoseidonGoldilocks as Hasher>::empty_subtree_digests(32))
    });
}

fn sponge(c: &mut Criterion) {
    c.bench_function("poseidon hash 8 elements (no pad)", |b| {
        b.iter_batched(
            rand_array::<BaseElement, 8>,
            |elements| PoseidonGoldilocks::hash_no_pad(&elements),
            BatchSize::SmallInput,
        )
    });

    c.bench_function("poseidon hash 100 elements (pad)", |b| {
        b.iter_batched(
            rand_array::<BaseElement, 100>,
            |elements| PoseidonGoldilocks::hash_pad(&elements),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(poseidon_group, permutation, tree_hashing, sponge);
criterion_main!(poseidon_group);
