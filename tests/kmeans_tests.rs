use chartex::analytics::{KMEANS_ITERATIONS, cluster};
use chartex::core::ScatterPoint;
use rand::SeedableRng;
use rand::rngs::StdRng;

fn two_blobs() -> Vec<ScatterPoint> {
    let mut points = Vec::new();
    for &(dx, dy) in &[(0.0, 0.0), (0.5, 0.2), (-0.4, 0.3), (0.2, -0.5), (0.1, 0.4)] {
        points.push(ScatterPoint::new(dx, dy));
        points.push(ScatterPoint::new(50.0 + dx, 40.0 + dy));
    }
    points
}

#[test]
fn fixed_iteration_budget_is_ten() {
    assert_eq!(KMEANS_ITERATIONS, 10);
}

#[test]
fn same_seed_reproduces_the_same_assignment() {
    let points = two_blobs();
    for seed in [0u64, 1, 7, 42, 9999] {
        let first = cluster(&points, 3, &mut StdRng::seed_from_u64(seed));
        let second = cluster(&points, 3, &mut StdRng::seed_from_u64(seed));
        assert_eq!(first, second, "seed {seed} diverged");
    }
}

#[test]
fn every_point_is_assigned_exactly_once() {
    let points = two_blobs();
    let clusters = cluster(&points, 3, &mut StdRng::seed_from_u64(11));
    assert_eq!(clusters.len(), 3);

    let mut seen = vec![false; points.len()];
    for c in &clusters {
        for &index in &c.members {
            assert!(!seen[index], "point {index} assigned twice");
            seen[index] = true;
        }
    }
    assert!(seen.into_iter().all(|assigned| assigned));
}

#[test]
fn final_centroids_are_the_mean_of_their_members() {
    let points = two_blobs();
    let clusters = cluster(&points, 2, &mut StdRng::seed_from_u64(5));
    for c in clusters.iter().filter(|c| !c.members.is_empty()) {
        let n = c.members.len() as f64;
        let mean_x: f64 = c.members.iter().map(|&i| points[i].x).sum::<f64>() / n;
        let mean_y: f64 = c.members.iter().map(|&i| points[i].y).sum::<f64>() / n;
        assert!((c.centroid[0] - mean_x).abs() < 1e-9);
        assert!((c.centroid[1] - mean_y).abs() < 1e-9);
    }
}

#[test]
fn k_larger_than_the_dataset_still_returns_k_clusters() {
    let points = vec![ScatterPoint::new(1.0, 1.0), ScatterPoint::new(2.0, 2.0)];
    let clusters = cluster(&points, 5, &mut StdRng::seed_from_u64(2));
    assert_eq!(clusters.len(), 5);
    let assigned: usize = clusters.iter().map(|c| c.members.len()).sum();
    assert_eq!(assigned, points.len());
    // Surplus clusters end empty with the sentinel centroid.
    assert!(
        clusters
            .iter()
            .filter(|c| c.members.is_empty())
            .all(|c| c.centroid == [0.0, 0.0])
    );
}
