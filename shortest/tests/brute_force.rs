use std::error::Error;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::{IndexedParallelIterator, IntoParallelRefIterator, ParallelIterator};
use shortest::{closest_point_brute, closest_point_pruned, pruning_bound, within_bound, Point3};

const NDATA: usize = 1_000;
const NQUERY: usize = 2_000;

#[test]
fn test_brute_force() -> Result<(), Box<dyn Error>> {
    // Seeded so failures are reproducible
    let mut rng = ChaCha8Rng::seed_from_u64(2707);

    // Generate random data, query
    let data: Vec<Point3<f64>> = (0..NDATA).map(|_| random_point(&mut rng)).collect();
    let query: Vec<Point3<f64>> = (0..NQUERY).map(|_| random_point(&mut rng)).collect();

    // Search
    let results: Vec<_> = query
        .par_iter()
        .map(|q| closest_point_brute(q, &data))
        .collect();

    // Exhaustive check
    query.par_iter().enumerate().for_each(|(i, q)| {
        let found = results[i].expect("non-empty input");
        let (best_dist, best) = exhaustive(q, &data);
        assert_eq!(found.index, best, "failed on {i}");
        assert_eq!(found.distance, best_dist, "failed on {i}");
        assert!(data.iter().all(|d| q.distance(d) >= found.distance));
    });

    Ok(())
}

#[test]
fn test_pruned_matches_brute_at_origin() -> Result<(), Box<dyn Error>> {
    let mut rng = ChaCha8Rng::seed_from_u64(1234567892);
    let source = Point3::origin();

    for _ in 0..200 {
        let data: Vec<Point3<f64>> = (0..NDATA).map(|_| random_point(&mut rng)).collect();

        let exact = closest_point_brute(&source, &data)?;
        let bound = pruning_bound(&data).expect("non-empty input");

        // From the origin the nearest point is never farther than the bound along any axis
        assert!(within_bound(&exact.point, bound));

        let pruned = closest_point_pruned(&source, &data)?;
        assert_eq!(pruned.index, exact.index);
        assert!((pruned.distance - exact.distance).abs() <= 1e-12 * exact.distance.max(1.0));
    }

    Ok(())
}

fn random_point(rng: &mut impl Rng) -> Point3<f64> {
    Point3::from([(); 3].map(|_| rng.gen::<f64>() - 0.5))
}

fn exhaustive(q: &Point3<f64>, data: &[Point3<f64>]) -> (f64, usize) {
    let mut best_dist = f64::MAX;
    let mut best = usize::MAX;
    for (d, i) in data.iter().zip(0..) {
        let dist = q.distance(d);

        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    (best_dist, best)
}
