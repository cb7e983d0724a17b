use ordered_float::OrderedFloat;

/// Planar convex hull by Andrew's monotone chain, counter-clockwise,
/// without collinear boundary points.
///
/// Inputs with fewer than three points are returned as-is; cluster
/// boundary rendering skips those entirely.
#[must_use]
pub fn convex_hull(points: &[[f64; 2]]) -> Vec<[f64; 2]> {
    if points.len() < 3 {
        return points.to_vec();
    }

    let mut sorted = points.to_vec();
    sorted.sort_by_key(|p| (OrderedFloat(p[0]), OrderedFloat(p[1])));
    sorted.dedup();
    if sorted.len() < 3 {
        return sorted;
    }

    let cross = |o: [f64; 2], a: [f64; 2], b: [f64; 2]| -> f64 {
        (a[0] - o[0]) * (b[1] - o[1]) - (a[1] - o[1]) * (b[0] - o[0])
    };

    let mut hull: Vec<[f64; 2]> = Vec::with_capacity(sorted.len() * 2);
    for &point in &sorted {
        while hull.len() >= 2 && cross(hull[hull.len() - 2], hull[hull.len() - 1], point) <= 0.0 {
            hull.pop();
        }
        hull.push(point);
    }
    let lower_len = hull.len() + 1;
    for &point in sorted.iter().rev().skip(1) {
        while hull.len() >= lower_len
            && cross(hull[hull.len() - 2], hull[hull.len() - 1], point) <= 0.0
        {
            hull.pop();
        }
        hull.push(point);
    }
    hull.pop();
    hull
}

#[cfg(test)]
mod tests {
    use super::convex_hull;

    #[test]
    fn square_with_interior_point_keeps_only_corners() {
        let points = [
            [0.0, 0.0],
            [4.0, 0.0],
            [4.0, 4.0],
            [0.0, 4.0],
            [2.0, 2.0],
        ];
        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 4);
        assert!(!hull.contains(&[2.0, 2.0]));
    }

    #[test]
    fn collinear_midpoints_are_dropped() {
        let points = [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0], [2.0, 0.0]];
        let hull = convex_hull(&points);
        assert_eq!(hull.len(), 3);
        assert!(!hull.contains(&[1.0, 1.0]));
    }

    #[test]
    fn tiny_inputs_pass_through() {
        let pair = [[0.0, 0.0], [1.0, 0.0]];
        assert_eq!(convex_hull(&pair), pair.to_vec());
    }
}
