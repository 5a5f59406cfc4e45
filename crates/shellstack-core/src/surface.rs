//! Shell membership for implicit surfaces.

/// Returns how close a point lies to a shell of radius `r`, in `[0, 1]`.
///
/// `d_sq` is the squared distance from the point to the shape's center or
/// axis. The shell spans radii `r - thickness` to `r + thickness`; points
/// outside it score 0 and a point exactly at radius `r` scores 1. The squared
/// bounds reject most points before the square root is taken.
///
/// `thickness` must be positive. With `thickness == 0` the result is never
/// positive, so the shell contributes nothing.
#[must_use]
pub fn surface_value(r: f64, d_sq: f64, thickness: f64) -> f64 {
    let lo = r - thickness;
    let hi = r + thickness;
    if d_sq < lo * lo || d_sq > hi * hi {
        return 0.0;
    }
    let d = d_sq.sqrt();
    let dr = (d - r).abs();
    let dt = (thickness - dr).max(0.0);
    dt / thickness
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_on_radius_is_one() {
        assert_eq!(surface_value(5.0, 25.0, 3.0), 1.0);
        assert_eq!(surface_value(10.0, 100.0, 0.5), 1.0);
    }

    #[test]
    fn test_outside_shell_is_zero() {
        // shell [2, 8] for r = 5, t = 3
        assert_eq!(surface_value(5.0, 3.9, 3.0), 0.0);
        assert_eq!(surface_value(5.0, 64.1, 3.0), 0.0);
        assert_eq!(surface_value(5.0, 0.0, 3.0), 0.0);
    }

    #[test]
    fn test_linear_falloff() {
        let v = surface_value(5.0, 6.5 * 6.5, 3.0);
        assert!((v - 0.5).abs() < 1e-12);
        let v = surface_value(5.0, 4.0 * 4.0, 2.0);
        assert!((v - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_shell_edge_is_zero() {
        assert_eq!(surface_value(5.0, 64.0, 3.0), 0.0);
        assert_eq!(surface_value(5.0, 4.0, 3.0), 0.0);
    }

    #[test]
    fn test_negative_inner_radius_bounds_by_square() {
        // r - t = -2, so the shell starts at d_sq = 4 rather than at the center
        assert_eq!(surface_value(1.0, 1.0, 3.0), 0.0);
        assert_eq!(surface_value(1.0, 0.0, 3.0), 0.0);
        let v = surface_value(1.0, 4.0, 3.0);
        assert!((v - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_thickness_never_contributes() {
        let v = surface_value(4.0, 16.0, 0.0);
        assert!(v.is_nan() || v == 0.0);
        assert_eq!(surface_value(4.0, 15.0, 0.0), 0.0);
    }

    proptest! {
        #[test]
        fn prop_in_unit_range(r in 0.0f64..300.0, d_sq in 0.0f64..1e5, t in 0.01f64..20.0) {
            let v = surface_value(r, d_sq, t);
            prop_assert!((0.0..=1.0).contains(&v));
        }

        #[test]
        fn prop_zero_outside_bounds(r in 0.0f64..300.0, t in 0.01f64..20.0, gap in 0.001f64..1e4) {
            let hi = (r + t) * (r + t);
            prop_assert_eq!(surface_value(r, hi + gap, t), 0.0);

            let lo = (r - t) * (r - t);
            if lo > gap {
                prop_assert_eq!(surface_value(r, lo - gap, t), 0.0);
            }
        }

        #[test]
        fn prop_exact_radius_is_one(r in 10.0f64..300.0, t in 0.01f64..20.0) {
            let v = surface_value(r, r * r, t);
            prop_assert!((v - 1.0).abs() < 1e-9);
        }
    }
}
