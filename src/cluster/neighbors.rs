//! Linear-scan neighbor query.
//!
//! [`BruteForce`] compares the query point against every point in the dataset: O(n) per query,
//! O(n²) for a full DBSCAN run. It needs no preprocessing and is always exact, which makes it the
//! reference implementation any index-backed [`NeighborQuery`] must agree with.

use super::traits::NeighborQuery;
use super::util::squared_euclidean;
use crate::error::{Error, Result};

/// Exhaustive Euclidean radius search over a borrowed dataset.
#[derive(Debug, Clone, Copy)]
pub struct BruteForce<'a> {
    data: &'a [Vec<f32>],
    dim: usize,
}

impl<'a> BruteForce<'a> {
    /// Wrap a dataset, checking that every point has the same, non-zero dimension and only
    /// finite coordinates.
    ///
    /// An empty dataset is accepted and yields a query over zero points.
    pub fn new(data: &'a [Vec<f32>]) -> Result<Self> {
        let dim = match data.first() {
            Some(p) => p.len(),
            None => return Ok(Self { data, dim: 0 }),
        };

        if dim == 0 {
            return Err(Error::InvalidParameter {
                name: "dimension",
                message: "must be at least 1",
            });
        }

        if let Some(p) = data.iter().find(|p| p.len() != dim) {
            return Err(Error::DimensionMismatch {
                expected: dim,
                found: p.len(),
            });
        }

        // A NaN or infinite coordinate would drop a point from its own neighborhood.
        if data.iter().flatten().any(|x| !x.is_finite()) {
            return Err(Error::InvalidParameter {
                name: "coordinates",
                message: "must be finite",
            });
        }

        Ok(Self { data, dim })
    }

    /// Dimension shared by every point (0 for an empty dataset).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The wrapped dataset.
    pub fn data(&self) -> &'a [Vec<f32>] {
        self.data
    }
}

impl NeighborQuery for BruteForce<'_> {
    fn len(&self) -> usize {
        self.data.len()
    }

    fn query(&self, index: usize, radius: f32) -> Vec<usize> {
        // Compare squared distances to skip the square root.
        let point = &self.data[index];
        let r2 = radius * radius;
        self.data
            .iter()
            .enumerate()
            .filter(|(_, other)| squared_euclidean(point, other) <= r2)
            .map(|(idx, _)| idx)
            .collect()
    }
}
