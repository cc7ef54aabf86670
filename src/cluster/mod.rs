//! Density-based clustering.
//!
//! ## DBSCAN
//!
//! Density-based clustering that can discover non-convex clusters and identify
//! outliers (noise points). DBSCAN does not require specifying the number of
//! clusters in advance.
//!
//! Two parameters drive it:
//!
//! - `epsilon`: the neighborhood radius
//! - `min_pts`: how many points (the point itself included) a neighborhood needs
//!   for its center to be a core point
//!
//! ## Neighbor queries
//!
//! The clustering engine never looks at coordinates. It asks a [`NeighborQuery`]
//! for the indices within `epsilon` of a point, so a linear scan ([`BruteForce`])
//! can be swapped for a spatial index without touching [`DbscanEngine`].
//!
//! ## Usage
//!
//! ```rust
//! use reach::cluster::{BruteForce, Clustering, Dbscan, DbscanEngine, NOISE};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//!     vec![50.0, 50.0],
//! ];
//!
//! // One label per point, noise as `NOISE`
//! let labels = Dbscan::new(0.5, 2).fit_predict(&data).unwrap();
//! assert_eq!(labels, vec![0, 0, 1, 1, NOISE]);
//!
//! // Full result through the engine
//! let query = BruteForce::new(&data).unwrap();
//! let result = DbscanEngine::new(query, &Dbscan::new(0.5, 2))
//!     .unwrap()
//!     .run()
//!     .unwrap();
//! assert_eq!(result.clusters(), &[vec![0, 1], vec![2, 3]]);
//! assert!(result.noise().contains(&4));
//! ```

mod dbscan;
mod neighbors;
mod traits;
mod util;

pub use dbscan::{Classification, Dbscan, DbscanEngine, DbscanExt, DbscanResult, NOISE};
pub use neighbors::BruteForce;
pub use traits::{Clustering, NeighborQuery};
