//! Tick selection and tick-label formatting for chart axes.
//!
//! Tick increments are restricted to 1, 2 or 5 times a power of ten, picked
//! so the number of ticks lands close to the requested count.

const E10: f64 = 7.071_067_811_865_476; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// `(first_index, last_index, increment)`; a negative increment means the
/// tick value is `index / -increment` (used for sub-unit steps to avoid
/// accumulating float error).
fn tick_spec(start: f64, stop: f64, count: f64) -> (f64, f64, f64) {
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

    let (mut i1, mut i2, inc);
    if power < 0.0 {
        let positive_inc = 10f64.powf(-power) / factor;
        i1 = (start * positive_inc).round();
        i2 = (stop * positive_inc).round();
        if i1 / positive_inc < start {
            i1 += 1.0;
        }
        if i2 / positive_inc > stop {
            i2 -= 1.0;
        }
        inc = -positive_inc;
    } else {
        inc = 10f64.powf(power) * factor;
        i1 = (start / inc).round();
        i2 = (stop / inc).round();
        if i1 * inc < start {
            i1 += 1.0;
        }
        if i2 * inc > stop {
            i2 -= 1.0;
        }
    }

    if i2 < i1 && (0.5..2.0).contains(&count) {
        return tick_spec(start, stop, count * 2.0);
    }
    (i1, i2, inc)
}

/// Returns tick values between `start` and `stop` (inclusive, in domain order).
#[must_use]
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if count == 0 || !start.is_finite() || !stop.is_finite() {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }

    let reverse = stop < start;
    let (lo, hi) = if reverse { (stop, start) } else { (start, stop) };
    let (i1, i2, inc) = tick_spec(lo, hi, count as f64);
    if !(i2 >= i1) {
        return Vec::new();
    }

    let n = (i2 - i1) as usize + 1;
    let mut ticks: Vec<f64> = (0..n)
        .map(|i| {
            let index = i1 + i as f64;
            if inc < 0.0 { index / -inc } else { index * inc }
        })
        .collect();
    if reverse {
        ticks.reverse();
    }
    ticks
}

/// Absolute spacing between consecutive values of [`nice_ticks`].
#[must_use]
pub fn tick_step(start: f64, stop: f64, count: usize) -> f64 {
    if count == 0 || !start.is_finite() || !stop.is_finite() || start == stop {
        return 0.0;
    }
    let (lo, hi) = if stop < start { (stop, start) } else { (start, stop) };
    let (_, _, inc) = tick_spec(lo, hi, count as f64);
    if inc < 0.0 { 1.0 / -inc } else { inc }
}

/// Year labels are plain integers: no grouping separators, no decimals.
#[must_use]
pub fn format_year_tick(value: f64) -> String {
    format!("{}", value.round() as i64)
}

/// Rate labels use thousands separators and as many decimals as `step` needs.
#[must_use]
pub fn format_rate_tick(value: f64, step: f64) -> String {
    let precision = if step.is_finite() && step > 0.0 {
        (-step.abs().log10().floor()).max(0.0) as usize
    } else {
        0
    };

    let formatted = format!("{:.*}", precision, value.abs());
    let (integer, fraction) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3 + 1);
    let is_negative = value < 0.0 && formatted.chars().any(|ch| ch.is_ascii_digit() && ch != '0');
    if is_negative {
        grouped.push('-');
    }
    let digits = integer.len();
    for (index, ch) in integer.chars().enumerate() {
        if index > 0 && (digits - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(fraction) = fraction {
        grouped.push('.');
        grouped.push_str(fraction);
    }
    grouped
}
