//! DBSCAN on a simple 2D dataset.
//!
//! Run with `RUST_LOG=reach=debug` to see cluster formation events.

use reach::{Dbscan, DbscanResult};
use tracing_subscriber::EnvFilter;

fn print_result(data: &[Vec<f32>], result: &DbscanResult) {
    for (i, label) in result.labels().iter().enumerate() {
        let tag = match label {
            Some(k) => format!("cluster {}", k),
            None => "NOISE".to_string(),
        };
        println!("  point {:2} ({:5.1}, {:5.1}) => {}", i, data[i][0], data[i][1], tag);
    }
    println!(
        "  {} clusters, final noise {:?}, ever noise {:?}",
        result.n_clusters(),
        result.noise(),
        result.ever_noise()
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Three well-separated clusters in 2D plus an outlier. Point 0 sits at the edge of
    // cluster A and is visited before any core point, so it is noise until absorbed.
    let data: Vec<Vec<f32>> = vec![
        // Cluster A (near origin)
        vec![-1.05, 0.0],
        vec![0.0, 0.0],
        vec![0.1, 0.2],
        vec![0.2, 0.1],
        vec![-0.1, 0.1],
        // Cluster B (near (5, 5))
        vec![5.0, 5.0],
        vec![5.1, 4.9],
        vec![4.9, 5.1],
        vec![5.2, 5.2],
        // Cluster C (near (10, 0))
        vec![10.0, 0.0],
        vec![10.1, 0.1],
        vec![9.9, -0.1],
        vec![10.2, 0.2],
        // Outlier
        vec![20.0, 20.0],
    ];

    let dbscan = Dbscan::new(1.0, 3);
    match dbscan.fit(&data) {
        Ok(result) => {
            println!("=== DBSCAN (eps=1.0, min_pts=3) ===");
            print_result(&data, &result);
        }
        Err(e) => eprintln!("clustering failed: {}", e),
    }
}
