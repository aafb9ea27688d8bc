// src/sample.rs
use rand::Rng;
use rand::seq::SliceRandom;

/// Pick `count` distinct items uniformly at random, without replacement.
///
/// `count` larger than `ids.len()` returns every item (shuffled); an empty
/// input returns an empty vec. Items are expected to be distinct already
/// (record ids are map keys).
pub fn sample<T: Clone, R: Rng + ?Sized>(ids: &[T], count: usize, rng: &mut R) -> Vec<T> {
    let mut pool = ids.to_vec();
    let (picked, _) = pool.partial_shuffle(rng, count);
    picked.to_vec()
}
