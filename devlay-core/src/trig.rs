/// Fixed-point trigonometry on the 2048-unit circle used for every angle
/// in the scene: entity orientation, camera pitch/yaw and the minimap angle.
use std::f64::consts::PI;
use std::sync::OnceLock;

/// Angle units per full turn.
pub const FULL_CIRCLE: i32 = 2048;
pub const ANGLE_MASK: i32 = FULL_CIRCLE - 1;
/// Radians per angle unit.
pub const UNIT: f64 = PI / 1024.0;
/// Sine/cosine table values are 16.16 fixed point.
pub const FIXED_SHIFT: u32 = 16;
pub const FIXED_ONE: i32 = 1 << FIXED_SHIFT;

struct Tables {
    sine: [i32; FULL_CIRCLE as usize],
    cosine: [i32; FULL_CIRCLE as usize],
}

fn tables() -> &'static Tables {
    static TABLES: OnceLock<Tables> = OnceLock::new();
    TABLES.get_or_init(|| {
        let mut sine = [0; FULL_CIRCLE as usize];
        let mut cosine = [0; FULL_CIRCLE as usize];
        for (i, (s, c)) in sine.iter_mut().zip(cosine.iter_mut()).enumerate() {
            let angle = i as f64 * UNIT;
            *s = (f64::from(FIXED_ONE) * angle.sin()) as i32;
            *c = (f64::from(FIXED_ONE) * angle.cos()) as i32;
        }
        Tables { sine, cosine }
    })
}

/// Wrap any angle into `0..FULL_CIRCLE`.
pub fn wrap_angle(angle: i32) -> i32 {
    angle & ANGLE_MASK
}

/// 16.16 sine of an angle in circle units. Out-of-range angles wrap.
pub fn sine(angle: i32) -> i32 {
    tables().sine[wrap_angle(angle) as usize]
}

/// 16.16 cosine of an angle in circle units. Out-of-range angles wrap.
pub fn cosine(angle: i32) -> i32 {
    tables().cosine[wrap_angle(angle) as usize]
}

pub fn to_radians(angle: i32) -> f64 {
    f64::from(wrap_angle(angle)) * UNIT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cardinal_angles() {
        assert_eq!(sine(0), 0);
        assert_eq!(cosine(0), FIXED_ONE);
        assert_eq!(sine(512), FIXED_ONE);
        assert_eq!(cosine(512), 0);
        assert_eq!(sine(1024), 0);
        assert_eq!(cosine(1024), -FIXED_ONE);
        assert_eq!(sine(1536), -FIXED_ONE);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 65536 * sin(pi / 4) = 46340.95
        assert_eq!(sine(256), 46340);
        assert_eq!(cosine(256), 46340);
        assert_eq!(sine(-256), -46340);
    }

    #[test]
    fn test_wraps_out_of_range_angles() {
        assert_eq!(wrap_angle(-1), 2047);
        assert_eq!(wrap_angle(2048 + 5), 5);
        assert_eq!(sine(2048 + 512), sine(512));
        assert!((to_radians(1024) - PI).abs() < 1e-12);
    }
}
