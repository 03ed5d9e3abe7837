use crate::utils::format_si;

/// Generate "nice" tick values for a domain interval.
///
/// The step size is a power of 10 scaled by 1, 2 or 5, chosen so the
/// number of ticks is close to `target_count`. Ticks are strictly
/// increasing multiples of the step lying within `[domain_min, domain_max]`,
/// including either bound when it lands on a multiple. A degenerate
/// domain (equal bounds) yields the single tick `[domain_min]` so that
/// flat data still renders.
pub fn generate_ticks(domain_min: f64, domain_max: f64, target_count: usize) -> Vec<f64> {
    if target_count == 0 || !domain_min.is_finite() || !domain_max.is_finite() {
        return vec![];
    }
    if domain_min == domain_max {
        return vec![domain_min];
    }
    let (min, max) = if domain_min < domain_max {
        (domain_min, domain_max)
    } else {
        (domain_max, domain_min)
    };

    let step = nice_step((max - min) / target_count as f64);
    if step == 0.0 {
        return vec![min, max];
    }

    let start = (min / step).ceil() * step;
    let count = ((max - start) / step).floor();
    if !count.is_finite() || count < 0.0 {
        return vec![];
    }
    let count = count.min(10_000.0) as usize;
    (0..=count).map(|i| start + step * i as f64).collect()
}

/// Format tick values for display alongside an axis.
pub fn tick_labels(ticks: &[f64]) -> Vec<String> {
    ticks.iter().map(|tick| format_si(*tick, 3)).collect()
}

// Round a raw step up to the nearest 1/2/5 multiple of a power of 10.
fn nice_step(step: f64) -> f64 {
    if !step.is_finite() || step <= 0.0 {
        return 0.0;
    }
    let power = step.log10().floor();
    let base = 10_f64.powf(power);
    let error = step / base;
    let nice = if error >= 7.5 {
        10.0
    } else if error >= 3.5 {
        5.0
    } else if error >= 1.5 {
        2.0
    } else {
        1.0
    };
    nice * base
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_for_round_domain() {
        assert_eq!(
            generate_ticks(0.0, 100.0, 5),
            vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]
        );
    }

    #[test]
    fn test_ticks_are_strictly_increasing() {
        for (min, max) in [(0.0, 1.0), (-37.5, 112.0), (0.001, 0.0173), (1e6, 9e6)] {
            let ticks = generate_ticks(min, max, 10);
            assert!(ticks.len() > 1);
            for pair in ticks.windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn test_ticks_stay_within_domain() {
        let ticks = generate_ticks(3.2, 97.1, 10);
        assert!(*ticks.first().unwrap() >= 3.2);
        assert!(*ticks.last().unwrap() <= 97.1);
    }

    #[test]
    fn test_ticks_count_near_target() {
        for target in [2usize, 5, 10, 20] {
            let ticks = generate_ticks(0.0, 87.3, target);
            assert!(ticks.len() >= target / 2);
            assert!(ticks.len() <= target * 2 + 1);
        }
    }

    #[test]
    fn test_ticks_are_deterministic() {
        assert_eq!(
            generate_ticks(-4.7, 19.3, 7),
            generate_ticks(-4.7, 19.3, 7)
        );
    }

    #[test]
    fn test_degenerate_domain_yields_single_tick() {
        assert_eq!(generate_ticks(5.0, 5.0, 5), vec![5.0]);
    }

    #[test]
    fn test_nice_step_is_1_2_5() {
        assert_eq!(nice_step(20.0), 20.0);
        assert_eq!(nice_step(1.6), 2.0);
        assert_eq!(nice_step(4.0), 5.0);
        assert_eq!(nice_step(8.0), 10.0);
        assert!((nice_step(0.013) - 0.01).abs() < 1e-12);
    }

    #[test]
    fn test_tick_labels_use_si_suffixes() {
        let ticks = vec![0.0, 500000.0, 1000000.0];
        assert_eq!(tick_labels(&ticks), vec!["0", "500k", "1M"]);
    }
}
