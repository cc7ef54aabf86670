//! Density-based clustering.
//!
//! `reach` clusters points in Euclidean space with DBSCAN: dense regions become clusters of
//! arbitrary shape, sparse points are left as noise, and the number of clusters is discovered
//! rather than requested.
//!
//! The primary public API is under [`cluster`], which provides:
//! - [`DbscanEngine`], the expansion state machine, generic over a [`NeighborQuery`]
//! - [`BruteForce`], the default linear-scan neighbor query
//! - [`Dbscan`], the run parameters plus label-vector convenience front ends

#![forbid(unsafe_code)]

pub mod cluster;
pub mod error;

pub use cluster::{
    BruteForce, Classification, Clustering, Dbscan, DbscanEngine, DbscanExt, DbscanResult,
    NeighborQuery, NOISE,
};
pub use error::{Error, Result};
