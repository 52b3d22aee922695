use crate::{error::SearchError, float::SearchFloat, point::Point3};

/// The candidate selected by a search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Nearest<T> {
    /// Position of the selected point within the candidate slice
    pub index: usize,
    pub point: Point3<T>,
    /// Euclidean distance from the source to `point`
    pub distance: T,
}

/// Finds the candidate closest to `source` by computing the true euclidean distance to every
/// point in `points`.
///
/// Ties keep the candidate with the lower index.
pub fn closest_point_brute<T: SearchFloat>(
    source: &Point3<T>,
    points: &[Point3<T>],
) -> Result<Nearest<T>, SearchError> {
    if points.is_empty() {
        return Err(SearchError::EmptyInput);
    }

    let mut best = None;
    let mut best_dist = T::infinity();
    for (i, p) in points.iter().enumerate() {
        let dist = source.distance(p);
        if dist < best_dist {
            best_dist = dist;
            best = Some(i);
        }
    }

    let index = best.ok_or(SearchError::NoComparableCandidate)?;
    Ok(Nearest {
        index,
        point: points[index],
        distance: best_dist,
    })
}

/// Finds the candidate closest to `source` among those that pass the coordinate-magnitude filter.
///
/// The first pass computes [`pruning_bound`], the smallest `|x| + |y| + |z|` in the set. The second
/// pass only looks at points whose every coordinate magnitude is within that bound, and ranks them
/// by squared distance. Ties keep the candidate with the lower index.
///
/// The bound is a property of the candidate set alone and says nothing about where `source` is.
/// When the source is away from the origin the true nearest point can fail the filter, in which
/// case this returns a different (farther) candidate than [`closest_point_brute`]. This is the
/// heuristic being measured, not a bug to fix here.
pub fn closest_point_pruned<T: SearchFloat>(
    source: &Point3<T>,
    points: &[Point3<T>],
) -> Result<Nearest<T>, SearchError> {
    let bound = pruning_bound(points).ok_or(SearchError::EmptyInput)?;

    let mut best = None;
    let mut best_dist_sq = T::infinity();
    for (i, p) in points.iter().enumerate() {
        if within_bound(p, bound) {
            let dist_sq = source.distance_squared(p);
            if dist_sq < best_dist_sq {
                best_dist_sq = dist_sq;
                best = Some(i);
            }
        }
    }

    let index = best.ok_or(SearchError::NoCandidatePassedFilter)?;
    Ok(Nearest {
        index,
        point: points[index],
        distance: best_dist_sq.sqrt(),
    })
}

/// Smallest `|x| + |y| + |z|` over `points`, or `None` if there are none.
///
/// NaN sums never lower the bound; if every sum is NaN the bound stays infinite.
pub fn pruning_bound<T: SearchFloat>(points: &[Point3<T>]) -> Option<T> {
    if points.is_empty() {
        return None;
    }

    let mut bound = T::infinity();
    for p in points {
        let sum = p.magnitude_sum();
        if sum < bound {
            bound = sum;
        }
    }
    Some(bound)
}

/// Whether each coordinate magnitude of `p` is at most `bound`.
#[inline(always)]
pub fn within_bound<T: SearchFloat>(p: &Point3<T>, bound: T) -> bool {
    p.x().abs() <= bound && p.y().abs() <= bound && p.z().abs() <= bound
}
