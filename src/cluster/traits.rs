use crate::error::Result;

/// Common interface for hard clustering algorithms (one label per point).
pub trait Clustering {
    /// Fit the model (if needed) and return one cluster label per input point.
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>>;

    /// The configured number of clusters (if applicable).
    ///
    /// For algorithms that discover the number of clusters dynamically (e.g. DBSCAN),
    /// this returns 0.
    fn n_clusters(&self) -> usize;
}

/// Fixed-radius neighbor lookup over an immutable dataset.
///
/// This is the only thing [`DbscanEngine`](super::DbscanEngine) needs from the data. A linear
/// scan ([`BruteForce`](super::BruteForce)) and a spatial index are interchangeable as long as
/// they return the same index set.
pub trait NeighborQuery {
    /// Number of points in the underlying dataset.
    fn len(&self) -> usize;

    /// Whether the underlying dataset has no points.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Indices of every point within `radius` (inclusive) of point `index`.
    ///
    /// The result always contains `index` itself. Order is unspecified, but must be
    /// deterministic for a given dataset for runs to be reproducible.
    fn query(&self, index: usize, radius: f32) -> Vec<usize>;
}

impl<Q: NeighborQuery + ?Sized> NeighborQuery for &Q {
    fn len(&self) -> usize {
        (**self).len()
    }

    fn query(&self, index: usize, radius: f32) -> Vec<usize> {
        (**self).query(index, radius)
    }
}
