// File: crates/chartkit-core/src/ticks.rs
// Summary: Tick step selection (1/2/5 x 10^n), nice domain extension and tick generation.

/// Default tick count used by axes and `nice()`.
pub const DEFAULT_TICKS: usize = 10;

/// Step between ticks for an extent split into roughly `count` intervals.
/// Returns `None` for empty or non-finite spans.
pub fn tick_step(start: f64, stop: f64, count: usize) -> Option<f64> {
    let (lo, hi) = sorted(start, stop);
    let span = hi - lo;
    if !span.is_finite() || span <= 0.0 || count == 0 {
        return None;
    }
    let m = count as f64;
    let mut step = pow10((span / m).log10().floor() as i32);
    let err = m / span * step;
    if err <= 0.15 {
        step *= 10.0;
    } else if err <= 0.35 {
        step *= 5.0;
    } else if err <= 0.75 {
        step *= 2.0;
    }
    Some(step)
}

/// Extend `[start, stop]` outward to multiples of the tick step. Direction is preserved.
pub fn nice(start: f64, stop: f64, count: usize) -> (f64, f64) {
    let Some(step) = tick_step(start, stop, count) else { return (start, stop) };
    let (lo, hi) = sorted(start, stop);
    let lo = from_index(index(lo, step).floor(), step);
    let hi = from_index(index(hi, step).ceil(), step);
    if start <= stop { (lo, hi) } else { (hi, lo) }
}

/// Tick values inside `[start, stop]`, ascending.
pub fn ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    let Some(step) = tick_step(start, stop, count) else {
        return if start.is_finite() { vec![start] } else { Vec::new() };
    };
    let (lo, hi) = sorted(start, stop);
    let first = index(lo, step).ceil() as i64;
    let last = index(hi, step).floor() as i64;
    (first..=last).map(|k| from_index(k as f64, step)).collect()
}

// Fractional steps go through their reciprocal so 0.1 * 3 comes out as 0.3.
fn index(v: f64, step: f64) -> f64 {
    if step < 1.0 { v * (1.0 / step).round() } else { v / step }
}

fn from_index(k: f64, step: f64) -> f64 {
    if step < 1.0 { k / (1.0 / step).round() } else { k * step }
}

// Negative powers as a single division keep 10^-n the nearest double to the decimal.
fn pow10(e: i32) -> f64 {
    if e < 0 { 1.0 / 10f64.powi(-e) } else { 10f64.powi(e) }
}

fn sorted(a: f64, b: f64) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_picks_round_increments() {
        assert_eq!(tick_step(0.0, 10.0, 10), Some(1.0));
        assert_eq!(tick_step(0.0, 100.0, 10), Some(10.0));
        assert_eq!(tick_step(0.0, 1.0, 5), Some(0.2));
        assert_eq!(tick_step(3.0, 3.0, 10), None);
    }

    #[test]
    fn nice_extends_outward() {
        assert_eq!(nice(0.5, 9.7, 10), (0.0, 10.0));
        assert_eq!(nice(1.0, 9.0, 10), (1.0, 9.0));
        assert_eq!(nice(9.7, 0.5, 10), (10.0, 0.0));
        assert_eq!(nice(-13.0, 87.0, 10), (-20.0, 90.0));
    }

    #[test]
    fn ticks_are_exact_decimals() {
        assert_eq!(ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
        assert_eq!(ticks(0.0, 0.5, 5), vec![0.0, 0.1, 0.2, 0.3, 0.4, 0.5]);
    }
}
