use nalgebra::{Point3, Unit, Vector3};

/// Converts a cosine into an angle in degrees.
///
/// The cosine is clamped to `[-1, 1]` first, so values pushed marginally out of
/// range by floating-point rounding map to 0° or 180° instead of NaN. A NaN
/// input stays NaN.
pub fn angle_from_cosine(cosine: f64) -> f64 {
    cosine.clamp(-1.0, 1.0).acos().to_degrees()
}

/// Computes the angle in degrees between `vector` and the unit `axis`.
///
/// # Return
///
/// `None` when `vector` has zero length or a non-finite norm, since it has no
/// direction to measure.
pub fn angle_to_axis(vector: &Vector3<f64>, axis: &Unit<Vector3<f64>>) -> Option<f64> {
    let norm = vector.norm();
    if !norm.is_finite() || norm == 0.0 {
        return None;
    }
    let axis: &Vector3<f64> = axis.as_ref();
    let cosine = (vector / norm).dot(axis);
    Some(angle_from_cosine(cosine))
}

/// Displacement vector pointing from `tail` to `head`.
pub fn displacement(tail: &Point3<f64>, head: &Point3<f64>) -> Vector3<f64> {
    head - tail
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    fn z() -> Unit<Vector3<f64>> {
        Vector3::z_axis()
    }

    #[test]
    fn parallel_vector_is_zero_degrees() {
        let angle = angle_to_axis(&Vector3::new(0.0, 0.0, 3.5), &z()).unwrap();
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn antiparallel_vector_is_one_eighty_degrees() {
        let angle = angle_to_axis(&Vector3::new(0.0, 0.0, -0.2), &z()).unwrap();
        assert!((angle - 180.0).abs() < TOLERANCE);
    }

    #[test]
    fn perpendicular_vector_is_ninety_degrees() {
        let angle = angle_to_axis(&Vector3::new(1.0, 0.0, 0.0), &z()).unwrap();
        assert!((angle - 90.0).abs() < TOLERANCE);
    }

    #[test]
    fn oblique_vector_matches_expected_angle() {
        let theta = 37.0f64.to_radians();
        let v = Vector3::new(theta.sin() * 2.0, 0.0, theta.cos() * 2.0);
        let angle = angle_to_axis(&v, &z()).unwrap();
        assert!((angle - 37.0).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_has_no_angle() {
        assert!(angle_to_axis(&Vector3::zeros(), &z()).is_none());
    }

    #[test]
    fn non_finite_vector_has_no_angle() {
        assert!(angle_to_axis(&Vector3::new(f64::NAN, 0.0, 1.0), &z()).is_none());
        assert!(angle_to_axis(&Vector3::new(f64::INFINITY, 0.0, 1.0), &z()).is_none());
    }

    #[test]
    fn cosine_slightly_above_one_is_clamped_to_zero_degrees() {
        let angle = angle_from_cosine(1.0000000002);
        assert!(!angle.is_nan());
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn cosine_slightly_below_minus_one_is_clamped_to_one_eighty_degrees() {
        let angle = angle_from_cosine(-1.0000000002);
        assert!((angle - 180.0).abs() < TOLERANCE);
    }

    #[test]
    fn displacement_points_from_tail_to_head() {
        let v = displacement(&Point3::new(1.0, 1.0, 1.0), &Point3::new(1.0, 2.0, 4.0));
        assert_eq!(v, Vector3::new(0.0, 1.0, 3.0));
    }
}
