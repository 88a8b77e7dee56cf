//! sRGB transfer function backed by tables generated in `build.rs`.

include!(concat!(env!("OUT_DIR"), "/gamma_tables.rs"));

const LAST: usize = TABLE_LEN - 1;

#[inline]
fn lookup(table: &[f32], v: f32) -> f32 {
    let scaled = v.clamp(0.0, 1.0) * LAST as f32;
    let i = scaled as usize;
    if i >= LAST {
        return table[LAST];
    }
    let t = scaled - i as f32;
    table[i] + (table[i + 1] - table[i]) * t
}

/// Encoded sRGB channel (0..=1) to linear light. Input is clamped.
#[inline]
pub fn decode(v: f32) -> f32 {
    lookup(&DECODE, v)
}

/// Linear light channel (0..=1) to encoded sRGB. Input is clamped.
#[inline]
pub fn encode(v: f32) -> f32 {
    lookup(&ENCODE, v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert!(decode(0.0).abs() < 1e-6);
        assert!((decode(1.0) - 1.0).abs() < 1e-6);
        assert!(encode(0.0).abs() < 1e-6);
        assert!((encode(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(decode(-0.5), decode(0.0));
        assert_eq!(encode(1.7), encode(1.0));
    }

    #[test]
    fn test_mid_grey() {
        // ((0.5 + 0.055) / 1.055)^2.4
        assert!((decode(0.5) - 0.214).abs() < 0.001);
        assert!((encode(0.5) - 0.735).abs() < 0.001);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = decode(0.0);
        for i in 1..=1000 {
            let cur = decode(i as f32 / 1000.0);
            assert!(cur >= prev, "decode not monotonic at {i}");
            prev = cur;
        }
    }
}
