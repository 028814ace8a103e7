use rust_decimal::{Decimal, RoundingStrategy};

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

const LABEL_MAX_DECIMALS: u32 = 10;

/// Step description for one tick sequence.
///
/// Negative `increment` encodes the reciprocal step (`1 / -increment`) so
/// sub-unit ticks are computed by division and stay free of float drift.
#[derive(Debug, Clone, Copy, PartialEq)]
struct TickSpec {
    first: f64,
    last: f64,
    increment: f64,
}

fn tick_spec(start: f64, stop: f64, count: f64) -> TickSpec {
    let step = (stop - start) / count.max(0.0);
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };

    let (first, last, increment) = if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut first = (start * inc).round();
        let mut last = (stop * inc).round();
        if first / inc < start {
            first += 1.0;
        }
        if last / inc > stop {
            last -= 1.0;
        }
        (first, last, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut first = (start / inc).round();
        let mut last = (stop / inc).round();
        if first * inc < start {
            first += 1.0;
        }
        if last * inc > stop {
            last -= 1.0;
        }
        (first, last, inc)
    };

    if last < first && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }

    TickSpec {
        first,
        last,
        increment,
    }
}

/// Human-friendly ticks (1, 2 or 5 times a power of ten) covering `[min, max]`.
///
/// `count` is a hint; the generator returns roughly that many ticks.
#[must_use]
pub fn nice_ticks(min: f64, max: f64, count: f64) -> Vec<f64> {
    if !min.is_finite() || !max.is_finite() || !count.is_finite() || count <= 0.0 {
        return Vec::new();
    }
    if min == max {
        return vec![min];
    }

    let (start, stop, reverse) = if max < min {
        (max, min, true)
    } else {
        (min, max, false)
    };

    let spec = tick_spec(start, stop, count);
    if !spec.increment.is_finite() || spec.last < spec.first {
        return Vec::new();
    }

    let n = (spec.last - spec.first + 1.0) as usize;
    let mut ticks: Vec<f64> = (0..n)
        .map(|i| {
            let k = spec.first + i as f64;
            if spec.increment < 0.0 {
                k / -spec.increment
            } else {
                k * spec.increment
            }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Distance between consecutive ticks returned by [`nice_ticks`] for the same
/// inputs; zero when no step exists.
#[must_use]
pub fn tick_step(min: f64, max: f64, count: f64) -> f64 {
    if !min.is_finite() || !max.is_finite() || !count.is_finite() || count <= 0.0 || min == max {
        return 0.0;
    }
    let spec = tick_spec(min.min(max), min.max(max), count);
    if !spec.increment.is_finite() {
        0.0
    } else if spec.increment < 0.0 {
        1.0 / -spec.increment
    } else {
        spec.increment
    }
}

/// Formats an axis or tooltip number without binary float noise.
#[must_use]
pub fn format_number(value: f64) -> String {
    format_with_decimals(value, LABEL_MAX_DECIMALS)
}

/// Formats a tick value with just enough decimals for the given tick step.
#[must_use]
pub fn format_tick(value: f64, step: f64) -> String {
    let decimals = if step.is_finite() && step > 0.0 && step < 1.0 {
        (-step.log10().floor()).clamp(0.0, f64::from(LABEL_MAX_DECIMALS)) as u32
    } else {
        0
    };
    format_with_decimals(value, decimals)
}

fn format_with_decimals(value: f64, decimals: u32) -> String {
    match Decimal::from_f64_retain(value) {
        Some(decimal) => decimal
            .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero)
            .normalize()
            .to_string(),
        None => format!("{value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_number, format_tick, nice_ticks, tick_step};

    #[test]
    fn ticks_use_round_steps() {
        assert_eq!(nice_ticks(0.0, 10.0, 4.0), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(nice_ticks(0.0, 100.0, 4.0), vec![0.0, 20.0, 40.0, 60.0, 80.0, 100.0]);
        assert_eq!(nice_ticks(-1.0, 1.0, 4.0), vec![-1.0, -0.5, 0.0, 0.5, 1.0]);
    }

    #[test]
    fn sub_unit_ticks_stay_exact() {
        let ticks = nice_ticks(0.0, 1.0, 10.0);
        assert_eq!(ticks.len(), 11);
        assert_eq!(ticks[3], 0.3);
    }

    #[test]
    fn degenerate_inputs() {
        assert_eq!(nice_ticks(5.0, 5.0, 4.0), vec![5.0]);
        assert!(nice_ticks(0.0, 10.0, 0.0).is_empty());
        assert!(nice_ticks(0.0, f64::NAN, 3.0).is_empty());
        assert_eq!(nice_ticks(10.0, 0.0, 4.0).first(), Some(&10.0));
    }

    #[test]
    fn number_formatting_trims_float_noise() {
        assert_eq!(format_number(0.1 + 0.2), "0.3");
        assert_eq!(format_number(100.0), "100");
        assert_eq!(format_number(-2.5), "-2.5");
        assert_eq!(format_tick(0.5, 0.5), "0.5");
        assert_eq!(format_tick(40.0, 20.0), "40");
        assert_eq!(format_number(f64::INFINITY), "inf");
    }

    #[test]
    fn step_matches_tick_spacing() {
        assert_eq!(tick_step(0.0, 10.0, 4.0), 2.0);
        assert_eq!(tick_step(0.0, 1.0, 4.0), 0.2);
        assert_eq!(tick_step(3.0, 3.0, 4.0), 0.0);
        let ticks = nice_ticks(0.0, 100.0, 4.0);
        assert_eq!(ticks[1] - ticks[0], tick_step(0.0, 100.0, 4.0));
    }
}
