use rand::Rng;
use shortest::Point3;

/// Builds `count` points with every coordinate drawn uniformly from `[min, max]`.
///
/// Callers are expected to have checked `min <= max` with both finite.
pub fn generate_candidates<R: Rng + ?Sized>(
    rng: &mut R,
    count: usize,
    min: f64,
    max: f64,
) -> Vec<Point3<f64>> {
    (0..count)
        .map(|_| Point3::from([(); 3].map(|_| rng.gen_range(min..=max))))
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let points = generate_candidates(&mut rng, 5_000, -3.0, 7.5);
        assert_eq!(points.len(), 5_000);
        assert!(points
            .iter()
            .flat_map(|p| p.to_array())
            .all(|c| (-3.0..=7.5).contains(&c)));
    }

    #[test]
    fn same_seed_same_points() {
        let a = generate_candidates(&mut ChaCha8Rng::seed_from_u64(7), 100, -1e6, 1e6);
        let b = generate_candidates(&mut ChaCha8Rng::seed_from_u64(7), 100, -1e6, 1e6);
        let c = generate_candidates(&mut ChaCha8Rng::seed_from_u64(8), 100, -1e6, 1e6);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn degenerate_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let points = generate_candidates(&mut rng, 10, 2.0, 2.0);
        assert!(points.iter().all(|p| *p == Point3::new(2.0, 2.0, 2.0)));
    }
}
