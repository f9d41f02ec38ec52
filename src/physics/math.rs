/// Scalar type for physics calculations (f64 for precision)
pub type Scalar = f64;

/// 2D vector type for joint positions, in normalized display units
pub type Vector = bevy::math::DVec2;

/// Unit vector pointing from a joint towards the next one for a link at `angle`
///
/// Angles are measured from the downward vertical, so an angle of zero hangs
/// straight down and positive angles swing towards +x.
#[inline]
pub fn link_direction(angle: Scalar) -> Vector {
    Vector::new(libm::sin(angle), -libm::cos(angle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn test_link_direction_hangs_down_at_rest() {
        let direction = link_direction(0.0);
        assert_eq!(direction, Vector::new(0.0, -1.0));
    }

    #[test]
    fn test_link_direction_quarter_turns() {
        let right = link_direction(FRAC_PI_2);
        assert!((right - Vector::new(1.0, 0.0)).length() < 1e-15);

        let up = link_direction(PI);
        assert!((up - Vector::new(0.0, 1.0)).length() < 1e-15);
    }
}
