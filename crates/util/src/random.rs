//! Weighted random selection.

use rand::Rng;

/// An item carrying a selection weight.
pub trait Weighted {
    fn weight(&self) -> f64;
}

/// `(value, weight)` pairs.
impl<T> Weighted for (T, f64) {
    fn weight(&self) -> f64 {
        self.1
    }
}

impl<W: Weighted + ?Sized> Weighted for &W {
    fn weight(&self) -> f64 {
        (**self).weight()
    }
}

/// Pick the item whose cumulative-weight bucket contains `roll * total`.
///
/// `roll` is expected in `[0, 1)`. A target exactly on a bucket boundary
/// selects the lower bucket. Returns `None` only for an empty slice.
///
/// # Examples
///
/// ```
/// use spx_util::select_weighted;
///
/// let items = [("rare", 10.0), ("common", 30.0), ("usual", 60.0)];
/// assert_eq!(select_weighted(&items, 0.1).map(|i| i.0), Some("rare"));
/// assert_eq!(select_weighted(&items, 0.11).map(|i| i.0), Some("common"));
/// assert_eq!(select_weighted(&items, 0.41).map(|i| i.0), Some("usual"));
/// ```
pub fn select_weighted<W: Weighted>(items: &[W], roll: f64) -> Option<&W> {
    let last = items.len().checked_sub(1)?;
    let total: f64 = items.iter().map(Weighted::weight).sum();
    let target = roll * total;

    let mut so_far = 0.0;
    let mut index = 0;
    while target > so_far && index < items.len() {
        so_far += items[index].weight();
        if target > so_far {
            index += 1;
        }
    }
    items.get(index.min(last))
}

/// Pick an item at random, each with probability proportional to its weight.
pub fn weighted_random<'a, W, R>(items: &'a [W], rng: &mut R) -> Option<&'a W>
where
    W: Weighted,
    R: Rng + ?Sized,
{
    select_weighted(items, rng.gen::<f64>())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    const VALS: [(u32, f64); 3] = [(10, 10.0), (30, 30.0), (60, 60.0)];

    fn pick(roll: f64) -> u32 {
        select_weighted(&VALS, roll).unwrap().0
    }

    #[test]
    fn test_buckets() {
        assert_eq!(pick(0.1), 10);
        assert_eq!(pick(0.11), 30);
        assert_eq!(pick(0.4), 30);
        assert_eq!(pick(0.41), 60);
    }

    #[test]
    fn test_bounds() {
        assert_eq!(pick(0.0), 10);
        assert_eq!(pick(0.999_999), 60);
        // Out-of-range rolls clamp to the last item.
        assert_eq!(pick(1.5), 60);
    }

    #[test]
    fn test_empty() {
        let none: [(u32, f64); 0] = [];
        assert!(select_weighted(&none, 0.5).is_none());
    }

    #[test]
    fn test_zero_weight_items_are_skipped() {
        let items = [("a", 0.0), ("b", 1.0), ("c", 0.0)];
        for roll in [0.01, 0.5, 0.99] {
            assert_eq!(select_weighted(&items, roll).unwrap().0, "b");
        }
    }

    #[test]
    fn test_references() {
        let refs: Vec<&(u32, f64)> = VALS.iter().collect();
        assert_eq!(select_weighted(&refs, 0.41).unwrap().0, 60);
    }

    #[test]
    fn test_random_sees_every_value() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(7);
        let mut counts = [0usize; 3];
        for _ in 0..1000 {
            match weighted_random(&VALS, &mut rng).unwrap().0 {
                10 => counts[0] += 1,
                30 => counts[1] += 1,
                60 => counts[2] += 1,
                other => panic!("unexpected {other}"),
            }
        }
        assert!(counts.iter().all(|&c| c > 0), "{counts:?}");
        assert!(counts[2] > counts[0]);
    }
}
