use rand::SeedableRng;

pub struct Rng {
    rng: rand::rngs::SmallRng,
}

impl Rng {
    pub fn new() -> Self {
        Self {
            rng: rand::rngs::SmallRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: rand::rngs::SmallRng::seed_from_u64(seed),
        }
    }

    pub fn from_seed_or_entropy(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Uniform real in `[0, 1)`.
    pub fn uniform_1d(&mut self) -> f64 {
        rand::Rng::gen(&mut self.rng)
    }

    /// Uniform integer in `[low, high]`, both ends included.
    pub fn uniform_int(&mut self, low: i64, high: i64) -> i64 {
        rand::Rng::gen_range(&mut self.rng, low..=high)
    }

    pub fn choose<T: Copy>(&mut self, items: &[T]) -> T {
        let index = rand::Rng::gen_range(&mut self.rng, 0..items.len());
        items[index]
    }
}

impl Default for Rng {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_1d_stays_in_unit_range() {
        let mut rng = Rng::with_seed(7);
        for _ in 0..10_000 {
            let u = rng.uniform_1d();
            assert!((0.0..1.0).contains(&u));
        }
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = Rng::with_seed(42);
        let mut b = Rng::with_seed(42);
        for _ in 0..100 {
            assert_eq!(a.uniform_int(-1000, 1000), b.uniform_int(-1000, 1000));
        }
    }

    #[test]
    fn uniform_int_is_inclusive() {
        let mut rng = Rng::with_seed(3);
        let mut seen = [false; 3];
        for _ in 0..1000 {
            let v = rng.uniform_int(5, 7);
            assert!((5..=7).contains(&v));
            seen[(v - 5) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
        assert_eq!(rng.uniform_int(4, 4), 4);
    }

    #[test]
    fn choose_picks_from_items() {
        let mut rng = Rng::with_seed(11);
        let glyphs = ['[', '('];
        for _ in 0..100 {
            assert!(glyphs.contains(&rng.choose(&glyphs)));
        }
    }
}
