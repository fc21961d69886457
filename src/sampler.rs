//! Triple sampling from the operating system entropy source.

use rand::rngs::OsRng;
use rand::RngCore;

use crate::weight::Triple;

/// Draw one triple from OS entropy. Each field is uniform over its
/// full type range: `[0, 2^256)`, `[0, 2^64)`, `[0, 2^160)`.
///
/// `OsRng` panics if the operating system cannot supply entropy.
/// That panic is left to propagate: the check requires a
/// cryptographically strong source and must never fall back to a
/// seeded generator.
pub fn sample_triple() -> Triple {
    let mut rng = OsRng;

    let mut beacon = [0u8; 32];
    rng.fill_bytes(&mut beacon);

    let epoch = rng.next_u64();

    let mut id = [0u8; 20];
    rng.fill_bytes(&mut id);

    Triple { beacon, epoch, id }
}

/// Draw `n` independent triples.
pub fn sample_triples(n: usize) -> Vec<Triple> {
    (0..n).map(|_| sample_triple()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count() {
        assert_eq!(sample_triples(25).len(), 25);
        assert!(sample_triples(0).is_empty());
    }

    #[test]
    fn test_samples_are_distinct() {
        // Field bounds hold by construction of the types; what can
        // still go wrong is a stuck source returning repeats.
        let triples = sample_triples(100);
        for i in 0..triples.len() {
            for j in (i + 1)..triples.len() {
                assert_ne!(triples[i].beacon, triples[j].beacon);
                assert_ne!(triples[i].id, triples[j].id);
            }
        }
    }
}
