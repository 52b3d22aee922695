//! Linear-scan closest-point search over 3D points.
//!
//! Two variants are provided: [`closest_point_brute`] ranks every candidate by true euclidean
//! distance, and [`closest_point_pruned`] first derives a coordinate-magnitude bound from the
//! candidate set and then ranks only the points inside it by squared distance.
//!
//! ```
//! use shortest::{closest_point_brute, closest_point_pruned, Point3};
//!
//! let source = Point3::origin();
//! let points = [
//!     Point3::new(1.0, 1.0, 1.0),
//!     Point3::new(0.0, 0.0, 5.0),
//!     Point3::new(2.0, 0.0, 0.0),
//! ];
//!
//! let exact = closest_point_brute(&source, &points).unwrap();
//! let pruned = closest_point_pruned(&source, &points).unwrap();
//! assert_eq!(exact.point, Point3::new(1.0, 1.0, 1.0));
//! assert_eq!(exact.index, pruned.index);
//! ```

pub mod error;
pub mod float;
pub mod point;
pub mod search;

pub use error::{ParsePointError, SearchError};
pub use float::SearchFloat;
pub use point::Point3;
pub use search::{
    closest_point_brute, closest_point_pruned, pruning_bound, within_bound, Nearest,
};
