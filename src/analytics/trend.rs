use serde::{Deserialize, Serialize};

use crate::core::ScatterPoint;
use crate::error::{ChartError, ChartResult};

/// Ordinary-least-squares fit over a scatter dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendLine {
    pub slope: f64,
    pub intercept: f64,
}

impl TrendLine {
    #[must_use]
    pub fn y_at(self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Segment endpoints over the dataset's x extent, ready for rendering.
    #[must_use]
    pub fn endpoints(self, x_min: f64, x_max: f64) -> ((f64, f64), (f64, f64)) {
        ((x_min, self.y_at(x_min)), (x_max, self.y_at(x_max)))
    }
}

/// Fits `y = slope * x + intercept` minimizing squared residuals.
///
/// Fewer than two points is a no-op (`Ok(None)`), not an error. A dataset
/// whose x values are all identical has no defined slope; that case fails
/// with `ChartError::DegenerateInput` instead of propagating NaN.
pub fn fit_line(points: &[ScatterPoint]) -> ChartResult<Option<TrendLine>> {
    if points.len() < 2 {
        return Ok(None);
    }
    if points.iter().all(|p| p.x == points[0].x) {
        return Err(ChartError::DegenerateInput(
            "trend line undefined: all x values are identical".to_owned(),
        ));
    }

    let n = points.len() as f64;
    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_xx = 0.0;
    for point in points {
        sum_x += point.x;
        sum_y += point.y;
        sum_xy += point.x * point.y;
        sum_xx += point.x * point.x;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Err(ChartError::DegenerateInput(
            "trend line undefined: zero variance in x".to_owned(),
        ));
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Ok(Some(TrendLine { slope, intercept }))
}

#[cfg(test)]
mod tests {
    use super::fit_line;
    use crate::core::ScatterPoint;
    use approx::assert_relative_eq;

    fn pts(raw: &[(f64, f64)]) -> Vec<ScatterPoint> {
        raw.iter().map(|&(x, y)| ScatterPoint::new(x, y)).collect()
    }

    #[test]
    fn perfect_diagonal_fits_unit_slope() {
        let line = fit_line(&pts(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)]))
            .expect("fit")
            .expect("trend line");
        assert_relative_eq!(line.slope, 1.0);
        assert_relative_eq!(line.intercept, 0.0);
        let ((x0, y0), (x1, y1)) = line.endpoints(0.0, 2.0);
        assert_relative_eq!(x0, 0.0);
        assert_relative_eq!(y0, 0.0);
        assert_relative_eq!(x1, 2.0);
        assert_relative_eq!(y1, 2.0);
    }

    #[test]
    fn fewer_than_two_points_is_a_no_op() {
        assert!(fit_line(&pts(&[])).expect("fit").is_none());
        assert!(fit_line(&pts(&[(3.0, 4.0)])).expect("fit").is_none());
    }

    #[test]
    fn identical_x_values_fail_explicitly() {
        let result = fit_line(&pts(&[(2.0, 1.0), (2.0, 5.0), (2.0, 9.0)]));
        assert!(result.is_err());
    }
}
