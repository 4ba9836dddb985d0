//! Candidate ladders searched by the matcher
//!
//! Both builders are pure: identical arguments always give the identical
//! sequence, so attempt numbering is reproducible between runs.

/// Highest threshold of the confidence grid.
pub const CONFIDENCE_ANCHOR: f64 = 0.95;

const EPSILON: f64 = 1e-6;

/// Round to the two decimals every ladder value is stored with
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn contains_close(values: &[f64], candidate: f64) -> bool {
    values.iter().any(|v| (v - candidate).abs() < 1e-9)
}

/// Scale factors to try: `1.0, 1-s, 1+s, 1-2s, 1+2s, ...` within `[min_scale, max_scale]`.
///
/// Near-identity scales come first because a template is usually captured
/// at roughly the size it appears on screen. Once one direction leaves the
/// bounds the other keeps going alone until it leaves them too.
pub fn build_scales(min_scale: f64, max_scale: f64, step: f64) -> Vec<f64> {
    let mut scales = vec![1.0];
    if !step.is_finite() || step <= 0.0 {
        return scales;
    }

    let mut k = 1u32;
    loop {
        let down = 1.0 - f64::from(k) * step;
        let up = 1.0 + f64::from(k) * step;
        let mut added = false;

        if down > 0.0 && down >= min_scale - EPSILON {
            let value = round2(down);
            if value > 0.0 && !contains_close(&scales, value) {
                scales.push(value);
            }
            added = true;
        }
        if up <= max_scale + EPSILON {
            let value = round2(up);
            if !contains_close(&scales, value) {
                scales.push(value);
            }
            added = true;
        }

        if !added {
            break;
        }
        k += 1;
    }

    scales
}

/// Similarity thresholds to try, strictly descending.
///
/// The grid starts at [`CONFIDENCE_ANCHOR`] and walks down by `step` to `floor`.
/// `base` is always present exactly once, even when it is off the grid.
pub fn build_confidences(base: f64, floor: f64, step: f64) -> Vec<f64> {
    let mut confidences = Vec::new();

    if step.is_finite() && step > 0.0 {
        let mut k = 0u32;
        loop {
            // rounding can move a rung below the floor, so check the stored value
            let value = round2(CONFIDENCE_ANCHOR - f64::from(k) * step);
            if value < floor - EPSILON {
                break;
            }
            if !contains_close(&confidences, value) {
                confidences.push(value);
            }
            k += 1;
        }
    }

    // an equal grid value is replaced so the caller's exact number survives
    confidences.retain(|v| (v - base).abs() >= 1e-9);
    confidences.push(base);
    confidences.sort_by(|a, b| b.total_cmp(a));
    confidences
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scale_ladder() {
        assert_eq!(build_scales(0.8, 1.2, 0.1), vec![1.0, 0.9, 1.1, 0.8, 1.2]);
    }

    #[test]
    fn test_scale_ladder_is_deterministic() {
        let first = build_scales(0.5, 1.5, 0.05);
        let second = build_scales(0.5, 1.5, 0.05);
        assert_eq!(first, second);
        assert_eq!(first[0], 1.0);
        assert_eq!(first.len(), 21);
    }

    #[test]
    fn test_scale_ladder_is_symmetric() {
        let scales = build_scales(0.7, 1.3, 0.1);
        for pair in scales[1..].chunks(2) {
            assert!(
                (pair[0] + pair[1] - 2.0).abs() < 1e-9,
                "Pair {pair:?} should mirror around 1.0"
            );
        }
    }

    #[test]
    fn test_scale_ladder_clipped_on_one_side() {
        // Only one step fits below 1.0, upward keeps going
        assert_eq!(
            build_scales(0.9, 1.3, 0.1),
            vec![1.0, 0.9, 1.1, 1.2, 1.3]
        );
        assert_eq!(build_scales(1.0, 1.0, 0.1), vec![1.0]);
    }

    #[test]
    fn test_scale_ladder_never_reaches_zero() {
        let scales = build_scales(0.0, 1.0, 0.25);
        assert_eq!(scales, vec![1.0, 0.75, 0.5, 0.25]);
    }

    #[test]
    fn test_scale_ladder_bad_step() {
        assert_eq!(build_scales(0.8, 1.2, 0.0), vec![1.0]);
        assert_eq!(build_scales(0.8, 1.2, -0.1), vec![1.0]);
        assert_eq!(build_scales(0.8, 1.2, f64::NAN), vec![1.0]);
    }

    #[test]
    fn test_default_confidence_ladder() {
        let confs = build_confidences(0.80, 0.30, 0.05);
        assert_eq!(confs.first(), Some(&0.95));
        assert_eq!(confs.last(), Some(&0.30));
        assert_eq!(confs.len(), 14);
        assert_eq!(confs.iter().filter(|&&c| c == 0.80).count(), 1);
    }

    #[test]
    fn test_confidence_ladder_inserts_off_grid_base() {
        let confs = build_confidences(0.87, 0.30, 0.05);
        assert_eq!(&confs[..4], &[0.95, 0.9, 0.87, 0.85]);
        assert_eq!(confs.iter().filter(|&&c| c == 0.87).count(), 1);
    }

    #[test]
    fn test_confidence_ladder_base_above_anchor() {
        let confs = build_confidences(0.99, 0.30, 0.05);
        assert_eq!(&confs[..3], &[0.99, 0.95, 0.9]);
    }

    #[test]
    fn test_confidence_ladder_strictly_descending_and_floored() {
        for (base, floor, step) in [(0.8, 0.3, 0.05), (0.62, 0.5, 0.03), (0.3, 0.3, 0.1), (1.0, 0.0, 0.2)] {
            let confs = build_confidences(base, floor, step);
            assert!(
                confs.windows(2).all(|w| w[0] > w[1]),
                "Ladder {confs:?} must be strictly descending"
            );
            let min = confs.iter().cloned().fold(f64::INFINITY, f64::min);
            assert!(min >= floor - 1e-9, "Ladder {confs:?} dips below {floor}");
            assert_eq!(confs.iter().filter(|&&c| c == base).count(), 1);
        }
    }

    #[test]
    fn test_confidence_ladder_off_grid_floor() {
        // 0.95 - 13 * 0.0499 = 0.3013 rounds to 0.30, below the floor
        let confs = build_confidences(0.8, 0.301, 0.0499);
        assert_eq!(confs.last(), Some(&0.35));
        assert!(confs.iter().all(|&c| c >= 0.301), "Ladder {confs:?} dips below 0.301");
        assert_eq!(confs.iter().filter(|&&c| c == 0.8).count(), 1);
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(0.30000000000000004), 0.3);
        assert_eq!(round2(1.1000000000000001), 1.1);
    }
}
