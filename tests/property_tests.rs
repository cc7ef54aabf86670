use std::collections::BTreeSet;

use proptest::prelude::*;
use reach::cluster::{BruteForce, Classification, Dbscan, DbscanEngine, NeighborQuery};

fn points() -> impl Strategy<Value = Vec<Vec<f32>>> {
    prop::collection::vec(prop::collection::vec(-10.0f32..10.0, 2), 0..40)
}

/// Brute-force results handed back in reverse order.
struct Reversed<'a>(BruteForce<'a>);

impl NeighborQuery for Reversed<'_> {
    fn len(&self) -> usize {
        self.0.len()
    }

    fn query(&self, index: usize, radius: f32) -> Vec<usize> {
        let mut out = self.0.query(index, radius);
        out.reverse();
        out
    }
}

proptest! {
    #[test]
    fn prop_every_point_classified(
        data in points(),
        eps in 0.0f32..3.0,
        min_pts in 1usize..6
    ) {
        let result = Dbscan::new(eps, min_pts).fit(&data).unwrap();

        prop_assert_eq!(result.classification().len(), data.len());
        for c in result.classification() {
            prop_assert!(*c != Classification::Unclassified);
        }
    }

    #[test]
    fn prop_cluster_ids_contiguous(
        data in points(),
        eps in 0.0f32..3.0,
        min_pts in 1usize..6
    ) {
        let result = Dbscan::new(eps, min_pts).fit(&data).unwrap();

        let used: BTreeSet<usize> = result.labels().into_iter().flatten().collect();
        let expected: BTreeSet<usize> = (0..result.n_clusters()).collect();
        prop_assert_eq!(used, expected);
        for members in result.clusters() {
            prop_assert!(!members.is_empty());
        }
    }

    #[test]
    fn prop_clusters_partition_points(
        data in points(),
        eps in 0.0f32..3.0,
        min_pts in 1usize..6
    ) {
        let result = Dbscan::new(eps, min_pts).fit(&data).unwrap();

        let mut seen = vec![false; data.len()];
        for (k, members) in result.clusters().iter().enumerate() {
            for &i in members {
                prop_assert!(!seen[i], "point {} in more than one cluster", i);
                seen[i] = true;
                prop_assert_eq!(result.label(i), Some(k));
            }
        }
        for i in result.noise() {
            prop_assert!(!seen[i]);
            seen[i] = true;
        }
        prop_assert!(seen.iter().all(|&s| s));

        // Final noise is the part of the noise history that was never absorbed.
        prop_assert!(result.noise().is_subset(result.ever_noise()));
        let absorbed = result.absorbed_noise();
        prop_assert_eq!(absorbed.len() + result.noise().len(), result.ever_noise().len());
    }

    #[test]
    fn prop_cluster_seeds_are_dense(
        data in points(),
        eps in 0.0f32..3.0,
        min_pts in 1usize..6
    ) {
        let result = Dbscan::new(eps, min_pts).fit(&data).unwrap();
        let query = BruteForce::new(&data).unwrap();

        prop_assert_eq!(result.core_points().len(), result.n_clusters());
        for (k, &seed) in result.core_points().iter().enumerate() {
            prop_assert!(query.query(seed, eps).len() >= min_pts);
            prop_assert_eq!(result.label(seed), Some(k));
        }
        for &i in result.ever_noise() {
            prop_assert!(query.query(i, eps).len() < min_pts);
        }
        // Each point is queried once, plus once more if it was noise inside a seed neighborhood.
        prop_assert!(result.region_queries() <= data.len() + result.ever_noise().len());
    }

    #[test]
    fn prop_deterministic_and_order_independent(
        data in points(),
        eps in 0.0f32..3.0,
        min_pts in 1usize..6
    ) {
        let params = Dbscan::new(eps, min_pts);
        let a = params.fit(&data).unwrap();
        let b = params.fit(&data).unwrap();
        prop_assert_eq!(&a, &b);

        let query = Reversed(BruteForce::new(&data).unwrap());
        let c = DbscanEngine::new(query, &params).unwrap().run().unwrap();
        prop_assert_eq!(a.clusters(), c.clusters());
        prop_assert_eq!(a.ever_noise(), c.ever_noise());
    }

    #[test]
    fn prop_min_pts_one_has_no_noise(data in points(), eps in 0.0f32..3.0) {
        let result = Dbscan::new(eps, 1).fit(&data).unwrap();

        prop_assert!(result.ever_noise().is_empty());
        prop_assert!(result.labels().iter().all(|l| l.is_some()));
    }
}
