//! Seeded record sampling.
//!
//! The generator is built locally from the seed on every call, so two calls
//! with the same inputs always agree and nothing else in the process can
//! disturb the sequence.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::SeedableRng;

/// Select up to `max_items` records.
///
/// With `randomize`, draws `min(max_items, records.len())` distinct records
/// using a `StdRng` seeded from `seed`, in the order the generator produces
/// them. Without it, returns the first `max_items` records in input order and
/// ignores `seed`.
#[must_use]
pub fn sample<T: Clone>(records: &[T], max_items: usize, randomize: bool, seed: u64) -> Vec<T> {
    let amount = max_items.min(records.len());

    if !randomize {
        return records[..amount].to_vec();
    }

    let mut rng = StdRng::seed_from_u64(seed);
    index::sample(&mut rng, records.len(), amount)
        .into_iter()
        .map(|i| records[i].clone())
        .collect()
}
