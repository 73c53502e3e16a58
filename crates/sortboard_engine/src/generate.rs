//! Random board generation and shuffling.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use sortboard_foundation::{Element, Result, Sequence, SequenceFormat};

/// Default number of generated elements.
pub const DEFAULT_COUNT: usize = 8;

/// Smallest generated key, inclusive.
pub const KEY_MIN: i64 = 1;

/// Largest generated key, inclusive.
pub const KEY_MAX: i64 = 100;

/// Fixed pool of display labels for labeled generation.
const NAME_POOL: &[&str] = &[
    "ava", "ben", "cleo", "dara", "eli", "fern", "gus", "hana", "iris", "jude", "kai", "lena",
    "milo", "nora", "otis", "pia",
];

/// Generates `count` elements with independent uniform keys in
/// `[KEY_MIN, KEY_MAX]`.
///
/// Labeled format pairs each key with a label drawn uniformly from a
/// fixed name pool; bare format yields bare numeric elements.
pub fn generate(count: usize, format: SequenceFormat, rng: &mut impl Rng) -> Sequence {
    let elements = (0..count)
        .map(|_| {
            let key = rng.gen_range(KEY_MIN..=KEY_MAX);
            match format {
                SequenceFormat::Bare => Element::Bare(key),
                SequenceFormat::Labeled => {
                    Element::labeled(NAME_POOL[rng.gen_range(0..NAME_POOL.len())], key)
                }
            }
        })
        .collect();
    Sequence::new(elements, format)
}

/// Shuffles the sequence in place with the Fisher-Yates algorithm.
///
/// Walks `i` from the last position down to 1, swapping with a uniform
/// `j` in `[0, i]`, which yields a uniform permutation.
///
/// # Errors
///
/// Index bookkeeping errors only; unreachable since every index walked
/// is within the sequence.
pub fn shuffle(seq: &mut Sequence, rng: &mut impl Rng) -> Result<()> {
    for i in (1..seq.len()).rev() {
        let j = rng.gen_range(0..=i);
        seq.swap(i, j)?;
    }
    Ok(())
}

/// Creates a deterministic RNG from a seed.
///
/// Two runs seeded identically generate and shuffle identically.
#[must_use]
pub fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}
