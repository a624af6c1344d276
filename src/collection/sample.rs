//! Random sampling without replacement.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::classify::classify;
use crate::value::Value;

/// Returns one random value of an array or mapping.
///
/// Empty containers and non-containers yield `undefined`.
pub fn sample(container: &Value) -> Value {
    sample_with(container, &mut rand::rng())
}

/// [`sample`] with an explicit random source.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::collection::{contains, sample_with};
/// use underbar::array;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let items = array![1, 2, 3];
/// let picked = sample_with(&items, &mut rng);
/// assert!(contains(&items, &picked));
/// ```
pub fn sample_with<R>(container: &Value, rng: &mut R) -> Value
where
    R: Rng + ?Sized,
{
    let values: Vec<&Value> = classify(container).values().collect();
    values
        .choose(rng)
        .map(|&value| value.clone())
        .unwrap_or_default()
}

/// Returns up to `count` values drawn without replacement.
///
/// The result holds `min(count, size)` values taken from distinct
/// positions, so it never repeats an entry of the container.
pub fn sample_n(container: &Value, count: usize) -> Vec<Value> {
    sample_n_with(container, count, &mut rand::rng())
}

/// [`sample_n`] with an explicit random source.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::collection::sample_n_with;
/// use underbar::array;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// assert_eq!(sample_n_with(&array![1, 2, 3], 2, &mut rng).len(), 2);
/// assert_eq!(sample_n_with(&array![1, 2, 3], 10, &mut rng).len(), 3);
/// ```
pub fn sample_n_with<R>(container: &Value, count: usize, rng: &mut R) -> Vec<Value>
where
    R: Rng + ?Sized,
{
    let values: Vec<&Value> = classify(container).values().collect();
    let amount = count.min(values.len());
    rand::seq::index::sample(rng, values.len(), amount)
        .into_iter()
        .map(|index| values[index].clone())
        .collect()
}
