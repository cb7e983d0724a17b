use crate::error::{ExportError, ExportResult};

/// Uniform scale-and-center mapping of a source rectangle into a target
/// surface, shared by the PNG rasterizer and the PDF page composer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
}

impl FitTransform {
    /// Aspect-preserving fit: `scale = min(target_w/source_w,
    /// target_h/source_h)`, centered with `(target − scaled) / 2` offsets.
    pub fn compute(
        source_w: f64,
        source_h: f64,
        target_w: f64,
        target_h: f64,
    ) -> ExportResult<Self> {
        if source_w <= 0.0 || source_h <= 0.0 {
            return Err(ExportError::Render(format!(
                "source size {source_w}x{source_h} has no area"
            )));
        }
        if target_w <= 0.0 || target_h <= 0.0 {
            return Err(ExportError::Render(format!(
                "target size {target_w}x{target_h} has no area"
            )));
        }

        let scale = (target_w / source_w).min(target_h / source_h);
        Ok(Self {
            scale,
            offset_x: (target_w - source_w * scale) / 2.0,
            offset_y: (target_h - source_h * scale) / 2.0,
        })
    }

    /// The source extent after scaling.
    #[must_use]
    pub fn scaled_size(self, source_w: f64, source_h: f64) -> (f64, f64) {
        (source_w * self.scale, source_h * self.scale)
    }
}

#[cfg(test)]
mod tests {
    use super::FitTransform;
    use approx::assert_relative_eq;

    #[test]
    fn wide_source_is_width_constrained() {
        let fit = FitTransform::compute(800.0, 600.0, 400.0, 400.0).expect("fit");
        assert_relative_eq!(fit.scale, 0.5);
        assert_relative_eq!(fit.offset_x, 0.0);
        assert_relative_eq!(fit.offset_y, 50.0);
    }

    #[test]
    fn tall_source_is_height_constrained() {
        let fit = FitTransform::compute(300.0, 600.0, 600.0, 600.0).expect("fit");
        assert_relative_eq!(fit.scale, 1.0);
        assert_relative_eq!(fit.offset_x, 150.0);
        assert_relative_eq!(fit.offset_y, 0.0);
    }

    #[test]
    fn degenerate_extents_fail() {
        assert!(FitTransform::compute(0.0, 100.0, 200.0, 200.0).is_err());
        assert!(FitTransform::compute(100.0, 100.0, 0.0, 200.0).is_err());
    }
}
