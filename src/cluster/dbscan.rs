//! DBSCAN: Density-Based Spatial Clustering of Applications with Noise.
//!
//! # The Algorithm (Ester et al., 1996)
//!
//! DBSCAN is a density-based clustering algorithm that groups points based on
//! neighborhood density. Unlike k-means, it:
//!
//! - Discovers clusters of arbitrary shape
//! - Automatically determines the number of clusters
//! - Identifies noise points (outliers)
//!
//! ## Core Concepts
//!
//! - **Epsilon (ε)**: Maximum distance between two points to be neighbors.
//! - **MinPts**: Minimum neighborhood size (the point itself included) for a point to be "core".
//! - **Core point**: Has at least MinPts points within ε.
//! - **Border point**: Within ε of a core point but not core itself.
//! - **Noise point**: Neither core nor border.
//!
//! A point marked noise early in the pass can still be absorbed later as a border point:
//! [`DbscanResult::noise`] holds the points that end as noise, [`DbscanResult::ever_noise`]
//! every point that was noise at some time.
//!
//! ## Algorithm Steps
//!
//! 1. For each unclassified point P, in dataset order:
//!    - Find neighbors within ε
//!    - If |neighbors| < MinPts, mark as noise (may become a border point later)
//!    - Else P is core: open the next cluster id and expand from its neighbors
//!
//! 2. Expansion (breadth first):
//!    - Every unclassified or noise point in P's neighborhood joins the cluster and is queued
//!    - For each queued point Q, every unclassified or noise neighbor of Q joins the cluster;
//!      only the previously unclassified ones are queued in turn
//!
//! A point is queued at most once (only while it is unclassified, or as a noise point in a
//! seed neighborhood), so a run issues at most 2n neighbor queries.
//!
//! ## Per-point state
//!
//! ```text
//! Unclassified ──> Noise ──> Cluster(k)
//!       └────────────────────────^
//! ```
//!
//! `Cluster(k)` is terminal. Cluster ids are contiguous from 0, in the order their seed
//! points are reached in dataset order.
//!
//! ## Complexity
//!
//! - **Time**: O(n) neighbor queries; O(n²) overall with [`BruteForce`], less with a
//!   spatial index behind [`NeighborQuery`].
//! - **Space**: O(n) for labels.
//!
//! ## Limitations
//!
//! - Struggles with varying densities
//! - ε parameter is sensitive and dataset-dependent
//!
//! ## References
//!
//! Ester et al. (1996). "A Density-Based Algorithm for Discovering Clusters
//! in Large Spatial Databases with Noise." KDD-96.

use std::collections::{BTreeSet, VecDeque};

use tracing::{debug, trace};

use super::neighbors::BruteForce;
use super::traits::{Clustering, NeighborQuery};
use crate::error::{Error, Result};

/// DBSCAN run parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Dbscan {
    /// Epsilon: maximum distance for neighborhood.
    epsilon: f32,
    /// Minimum neighborhood size (self included) for core point classification.
    min_pts: usize,
}

/// Label used for noise points in [`Clustering::fit_predict`] output.
pub const NOISE: usize = usize::MAX;

impl Dbscan {
    /// Create a new DBSCAN clusterer.
    ///
    /// # Arguments
    ///
    /// * `epsilon` - Maximum distance between two points to be neighbors.
    /// * `min_pts` - Minimum number of points (including the point itself) to form a dense region.
    ///
    /// # Typical Values
    ///
    /// - `epsilon`: Often determined by k-distance plot (k = min_pts - 1).
    /// - `min_pts`: 2 * dimension is a common heuristic.
    pub fn new(epsilon: f32, min_pts: usize) -> Self {
        Self { epsilon, min_pts }
    }

    /// Set epsilon (neighborhood radius).
    pub fn with_epsilon(mut self, epsilon: f32) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set minimum points for core classification.
    pub fn with_min_pts(mut self, min_pts: usize) -> Self {
        self.min_pts = min_pts;
        self
    }

    /// Neighborhood radius.
    pub fn epsilon(&self) -> f32 {
        self.epsilon
    }

    /// Minimum neighborhood size for a core point.
    pub fn min_pts(&self) -> usize {
        self.min_pts
    }

    /// Check that `epsilon >= 0` (and not NaN) and `min_pts >= 1`.
    pub fn validate(&self) -> Result<()> {
        if self.epsilon.is_nan() || self.epsilon < 0.0 {
            return Err(Error::InvalidParameter {
                name: "epsilon",
                message: "must be non-negative",
            });
        }

        if self.min_pts == 0 {
            return Err(Error::InvalidParameter {
                name: "min_pts",
                message: "must be at least 1",
            });
        }

        Ok(())
    }

    /// Cluster `data` with a [`BruteForce`] neighbor query.
    ///
    /// Fails if the parameters are invalid or the points differ in dimension.
    pub fn fit(&self, data: &[Vec<f32>]) -> Result<DbscanResult> {
        self.validate()?;
        let query = BruteForce::new(data)?;
        DbscanEngine::new(query, self)?.run()
    }
}

impl Default for Dbscan {
    fn default() -> Self {
        Self::new(0.5, 5)
    }
}

/// Classification state of a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Classification {
    /// Not yet visited.
    Unclassified,
    /// Visited and not density-reachable from any cluster found so far.
    Noise,
    /// Member of the cluster with this id.
    Cluster(usize),
}

impl Classification {
    /// Whether this is [`Classification::Noise`].
    pub fn is_noise(&self) -> bool {
        matches!(self, Classification::Noise)
    }

    /// Cluster id, if the point belongs to a cluster.
    pub fn cluster_id(&self) -> Option<usize> {
        match self {
            Classification::Cluster(k) => Some(*k),
            _ => None,
        }
    }
}

/// Single-pass DBSCAN over a [`NeighborQuery`].
///
/// The engine owns all mutable state of a run: one [`Classification`] per point, the
/// cluster member lists, and the noise history. Nothing else can observe or mutate it
/// until [`run`](Self::run) hands back a [`DbscanResult`].
#[derive(Debug)]
pub struct DbscanEngine<Q> {
    query: Q,
    epsilon: f32,
    min_pts: usize,
    classification: Vec<Classification>,
    clusters: Vec<Vec<usize>>,
    core_points: Vec<usize>,
    ever_noise: BTreeSet<usize>,
    region_queries: usize,
}

impl<Q: NeighborQuery> DbscanEngine<Q> {
    /// Create an engine over `query` with the given parameters.
    ///
    /// Invalid parameters are rejected here, before any point is touched.
    pub fn new(query: Q, params: &Dbscan) -> Result<Self> {
        params.validate()?;

        let n = query.len();
        Ok(Self {
            query,
            epsilon: params.epsilon,
            min_pts: params.min_pts,
            classification: vec![Classification::Unclassified; n],
            clusters: Vec::new(),
            core_points: Vec::new(),
            ever_noise: BTreeSet::new(),
            region_queries: 0,
        })
    }

    /// Run the clustering pass to completion.
    ///
    /// Fails only if the neighbor query returns an index outside the dataset.
    pub fn run(mut self) -> Result<DbscanResult> {
        let n = self.classification.len();

        for point_idx in 0..n {
            if self.classification[point_idx] != Classification::Unclassified {
                continue;
            }

            let seeds = self.region_query(point_idx)?;
            if seeds.len() < self.min_pts {
                trace!(point = point_idx, neighbors = seeds.len(), "noise");
                self.classification[point_idx] = Classification::Noise;
                self.ever_noise.insert(point_idx);
                continue;
            }

            self.expand_cluster(point_idx, seeds)?;
        }

        let result = DbscanResult {
            classification: self.classification,
            clusters: self.clusters,
            core_points: self.core_points,
            ever_noise: self.ever_noise,
            region_queries: self.region_queries,
        };

        debug!(
            points = n,
            clusters = result.n_clusters(),
            noise = result.noise().len(),
            ever_noise = result.ever_noise.len(),
            region_queries = result.region_queries,
            "dbscan finished"
        );

        Ok(result)
    }

    fn region_query(&mut self, point_idx: usize) -> Result<Vec<usize>> {
        self.region_queries += 1;
        let neighbors = self.query.query(point_idx, self.epsilon);

        let len = self.classification.len();
        if let Some(&index) = neighbors.iter().find(|&&idx| idx >= len) {
            return Err(Error::IndexOutOfBounds { index, len });
        }

        Ok(neighbors)
    }

    /// Grow a new cluster from core point `seed_idx` and its neighborhood `seeds`.
    fn expand_cluster(&mut self, seed_idx: usize, seeds: Vec<usize>) -> Result<()> {
        let cluster_id = self.clusters.len();
        let mut members = Vec::with_capacity(seeds.len());
        let mut queue = VecDeque::new();

        self.classification[seed_idx] = Classification::Cluster(cluster_id);
        members.push(seed_idx);

        // Every claimed seed is expanded, former noise included.
        for s in seeds {
            if self.claim(s, cluster_id, &mut members) {
                queue.push_back(s);
            }
        }

        while let Some(q) = queue.pop_front() {
            for p in self.region_query(q)? {
                let was_unclassified = self.classification[p] == Classification::Unclassified;
                if self.claim(p, cluster_id, &mut members) && was_unclassified {
                    queue.push_back(p);
                }
            }
        }

        members.sort_unstable();
        debug!(
            cluster = cluster_id,
            seed = seed_idx,
            size = members.len(),
            "cluster completed"
        );

        self.clusters.push(members);
        self.core_points.push(seed_idx);
        Ok(())
    }

    /// Move `p` into `cluster_id` if it is unclassified or noise. Returns whether it moved.
    fn claim(&mut self, p: usize, cluster_id: usize, members: &mut Vec<usize>) -> bool {
        match self.classification[p] {
            Classification::Unclassified => {}
            Classification::Noise => {
                trace!(point = p, cluster = cluster_id, "noise absorbed as border");
            }
            Classification::Cluster(_) => return false,
        }
        self.classification[p] = Classification::Cluster(cluster_id);
        members.push(p);
        true
    }
}

/// Outcome of a completed DBSCAN run. Read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbscanResult {
    classification: Vec<Classification>,
    clusters: Vec<Vec<usize>>,
    core_points: Vec<usize>,
    ever_noise: BTreeSet<usize>,
    region_queries: usize,
}

impl DbscanResult {
    /// Cluster member lists, indexed by cluster id. Members are sorted ascending.
    pub fn clusters(&self) -> &[Vec<usize>] {
        &self.clusters
    }

    /// Number of clusters found.
    pub fn n_clusters(&self) -> usize {
        self.clusters.len()
    }

    /// Final classification of every point. Never contains `Unclassified`.
    pub fn classification(&self) -> &[Classification] {
        &self.classification
    }

    /// Cluster id of point `index`, or `None` if it ended as noise or is out of bounds.
    pub fn label(&self, index: usize) -> Option<usize> {
        self.classification
            .get(index)
            .and_then(Classification::cluster_id)
    }

    /// One label per point, `None` for noise.
    pub fn labels(&self) -> Vec<Option<usize>> {
        self.classification.iter().map(|c| c.cluster_id()).collect()
    }

    /// Points that were classified noise at any time during the run.
    ///
    /// Includes points later absorbed into a cluster as border points; see
    /// [`noise`](Self::noise) for the points that are still noise at the end.
    pub fn ever_noise(&self) -> &BTreeSet<usize> {
        &self.ever_noise
    }

    /// Points that belong to no cluster at the end of the run.
    pub fn noise(&self) -> BTreeSet<usize> {
        self.classification
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_noise())
            .map(|(i, _)| i)
            .collect()
    }

    /// Points first classified noise and later absorbed into a cluster.
    pub fn absorbed_noise(&self) -> BTreeSet<usize> {
        self.ever_noise
            .iter()
            .copied()
            .filter(|&i| !self.classification[i].is_noise())
            .collect()
    }

    /// The core point each cluster was grown from, indexed by cluster id.
    pub fn core_points(&self) -> &[usize] {
        &self.core_points
    }

    /// Number of neighbor queries issued during the run.
    pub fn region_queries(&self) -> usize {
        self.region_queries
    }

    /// Split into the cluster list and the set of ever-noise points.
    pub fn into_parts(self) -> (Vec<Vec<usize>>, BTreeSet<usize>) {
        (self.clusters, self.ever_noise)
    }
}

impl Clustering for Dbscan {
    /// Noise points are labeled [`NOISE`].
    fn fit_predict(&self, data: &[Vec<f32>]) -> Result<Vec<usize>> {
        let result = self.fit(data)?;
        Ok(result
            .classification
            .iter()
            .map(|c| c.cluster_id().unwrap_or(NOISE))
            .collect())
    }

    /// DBSCAN discovers clusters dynamically, so this returns 0.
    ///
    /// To get the actual number of clusters, use [`Dbscan::fit`] and
    /// [`DbscanResult::n_clusters`].
    fn n_clusters(&self) -> usize {
        0 // Unknown until fit
    }
}

/// Extended DBSCAN interface with noise detection.
pub trait DbscanExt {
    /// Fit and predict, returning labels where noise is marked as `None`.
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>>;

    /// Check if a label represents noise.
    fn is_noise(label: usize) -> bool {
        label == NOISE
    }
}

impl DbscanExt for Dbscan {
    fn fit_predict_with_noise(&self, data: &[Vec<f32>]) -> Result<Vec<Option<usize>>> {
        Ok(self.fit(data)?.labels())
    }
}
