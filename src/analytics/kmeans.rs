use ordered_float::OrderedFloat;
use rand::Rng;
use tracing::debug;

use crate::core::ScatterPoint;

/// Fixed iteration budget, reproduced for output parity with the existing
/// exports: there is no convergence check and no early exit.
pub const KMEANS_ITERATIONS: usize = 10;

/// One k-means cluster: final centroid plus indices into the input slice.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub centroid: [f64; 2],
    pub members: Vec<usize>,
}

impl Cluster {
    /// Materializes the member coordinates, in input order.
    #[must_use]
    pub fn member_points(&self, points: &[ScatterPoint]) -> Vec<[f64; 2]> {
        self.members.iter().map(|&i| [points[i].x, points[i].y]).collect()
    }
}

/// Partitions `points` into `k` clusters under Euclidean distance.
///
/// Centroids initialize from `k` random draws out of the data (duplicates
/// allowed), then run exactly [`KMEANS_ITERATIONS`] rounds of
/// assign-nearest / recompute-centroid. A cluster that ends a round empty
/// keeps the centroid `(0, 0)`. This is a fixed-budget approximation, not a
/// statistically sound clustering; the random source is injected so callers
/// can make runs reproducible.
pub fn cluster<R: Rng + ?Sized>(points: &[ScatterPoint], k: usize, rng: &mut R) -> Vec<Cluster> {
    if k == 0 || points.is_empty() {
        return Vec::new();
    }

    let mut centroids: Vec<[f64; 2]> = (0..k)
        .map(|_| {
            let pick = &points[rng.random_range(0..points.len())];
            [pick.x, pick.y]
        })
        .collect();

    let mut assignment = vec![0usize; points.len()];
    for _ in 0..KMEANS_ITERATIONS {
        assignment = assign_nearest(points, &centroids);

        let mut sums = vec![[0.0f64; 2]; k];
        let mut counts = vec![0usize; k];
        for (point, &slot) in points.iter().zip(&assignment) {
            sums[slot][0] += point.x;
            sums[slot][1] += point.y;
            counts[slot] += 1;
        }
        for slot in 0..k {
            centroids[slot] = if counts[slot] == 0 {
                [0.0, 0.0]
            } else {
                [
                    sums[slot][0] / counts[slot] as f64,
                    sums[slot][1] / counts[slot] as f64,
                ]
            };
        }
    }

    let mut clusters: Vec<Cluster> = centroids
        .into_iter()
        .map(|centroid| Cluster {
            centroid,
            members: Vec::new(),
        })
        .collect();
    for (index, slot) in assignment.into_iter().enumerate() {
        clusters[slot].members.push(index);
    }

    debug!(
        k,
        points = points.len(),
        empty = clusters.iter().filter(|c| c.members.is_empty()).count(),
        "k-means finished fixed iteration budget"
    );
    clusters
}

fn nearest_centroid(point: &ScatterPoint, centroids: &[[f64; 2]]) -> usize {
    centroids
        .iter()
        .enumerate()
        .min_by_key(|(_, c)| {
            let dx = point.x - c[0];
            let dy = point.y - c[1];
            OrderedFloat(dx * dx + dy * dy)
        })
        .map_or(0, |(index, _)| index)
}

#[cfg(not(feature = "parallel-analytics"))]
fn assign_nearest(points: &[ScatterPoint], centroids: &[[f64; 2]]) -> Vec<usize> {
    points.iter().map(|p| nearest_centroid(p, centroids)).collect()
}

#[cfg(feature = "parallel-analytics")]
fn assign_nearest(points: &[ScatterPoint], centroids: &[[f64; 2]]) -> Vec<usize> {
    use rayon::prelude::*;
    points
        .par_iter()
        .map(|p| nearest_centroid(p, centroids))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::cluster;
    use crate::core::ScatterPoint;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn blob(cx: f64, cy: f64) -> Vec<ScatterPoint> {
        [(0.0, 0.0), (0.4, 0.1), (-0.3, 0.2), (0.1, -0.4)]
            .iter()
            .map(|&(dx, dy)| ScatterPoint::new(cx + dx, cy + dy))
            .collect()
    }

    #[test]
    fn separated_blobs_end_up_in_distinct_clusters() {
        let mut points = blob(0.0, 0.0);
        points.extend(blob(100.0, 100.0));

        let mut rng = StdRng::seed_from_u64(7);
        let clusters = cluster(&points, 2, &mut rng);
        assert_eq!(clusters.len(), 2);

        let sizes: Vec<usize> = clusters.iter().map(|c| c.members.len()).collect();
        assert_eq!(sizes.iter().sum::<usize>(), points.len());
        // With well separated blobs no cluster straddles both.
        for c in &clusters {
            if c.members.is_empty() {
                continue;
            }
            let near_origin = points[c.members[0]].x < 50.0;
            assert!(
                c.members
                    .iter()
                    .all(|&i| (points[i].x < 50.0) == near_origin)
            );
        }
    }

    #[test]
    fn zero_k_and_empty_input_are_no_ops() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(cluster(&[], 3, &mut rng).is_empty());
        assert!(cluster(&blob(0.0, 0.0), 0, &mut rng).is_empty());
    }

    #[test]
    fn empty_cluster_keeps_origin_centroid() {
        // Both data points coincide, so with k = 2 one cluster must end the
        // run empty and park its centroid at (0, 0).
        let points = vec![ScatterPoint::new(5.0, 5.0), ScatterPoint::new(5.0, 5.0)];
        let mut rng = StdRng::seed_from_u64(3);
        let clusters = cluster(&points, 2, &mut rng);
        let empty: Vec<_> = clusters.iter().filter(|c| c.members.is_empty()).collect();
        assert_eq!(empty.len(), 1);
        assert_eq!(empty[0].centroid, [0.0, 0.0]);
    }
}
