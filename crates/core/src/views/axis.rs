/// Tick layout for one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTicks {
    /// Lower bound of the axis domain, aligned to the tick step.
    pub min: f64,
    /// Upper bound of the axis domain, aligned to the tick step.
    pub max: f64,
    /// Tick positions from `min` to `max` inclusive.
    pub values: Vec<f64>,
}

impl AxisTicks {
    /// Ticks for the data range `lo..=hi`, aiming for about `target` ticks.
    ///
    /// Data is integral, so the step never drops below 1. A zero-width range
    /// is widened by one on each side.
    pub fn for_range(lo: f64, hi: f64, target: usize) -> Self {
        let (lo, hi) = if lo < hi {
            (lo, hi)
        } else if lo == hi {
            (lo - 1.0, hi + 1.0)
        } else {
            (hi, lo)
        };

        let step = nice_step(hi - lo, target.max(1));
        let min = (lo / step).floor() * step;
        let max = (hi / step).ceil() * step;

        let count = ((max - min) / step).round() as usize;
        let values = (0..=count).map(|i| min + step * i as f64).collect();

        Self { min, max, values }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Position of `value` along the axis as a fraction of its length.
    pub fn fraction(&self, value: f64) -> f64 {
        (value - self.min) / self.span()
    }
}

/// Pick a 1-2-5 step so that `span` splits into roughly `target` intervals.
fn nice_step(span: f64, target: usize) -> f64 {
    let raw = span / target as f64;
    if raw <= 1.0 {
        return 1.0;
    }
    let magnitude = 10.0_f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * magnitude
}

/// Format a tick value compactly enough for a narrow terminal margin.
pub fn format_tick_label(value: f64) -> String {
    let abs = value.abs();
    if abs >= 1_000_000_000.0 {
        format!("{:.1}G", value / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if abs >= 100_000.0 {
        format!("{:.0}K", value / 1_000.0)
    } else {
        format!("{value:.0}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nice_step_selects_reasonable_value() {
        assert_eq!(nice_step(1000.0, 5), 200.0);
        assert_eq!(nice_step(130.0, 5), 50.0);
        assert_eq!(nice_step(7.0, 10), 1.0);
    }

    #[test]
    fn ticks_cover_the_data_range() {
        let ticks = AxisTicks::for_range(115.0, 130.0, 4);
        assert!(ticks.min <= 115.0 && ticks.max >= 130.0, "{ticks:?}");
        assert!(ticks.values.len() >= 2 && ticks.values.len() <= 10);
        assert_eq!(ticks.values.first(), Some(&ticks.min));
        assert_eq!(ticks.values.last(), Some(&ticks.max));
    }

    #[test]
    fn typical_ranges_give_a_handful_of_ticks() {
        for (lo, hi) in [(0.0, 10.0), (0.0, 999.0), (3_500.0, 12_000.0), (0.0, 50_000.0)] {
            let ticks = AxisTicks::for_range(lo, hi, 6);
            let n = ticks.values.len();
            assert!((2..=11).contains(&n), "{lo}..{hi}: {n} ticks");
        }
    }

    #[test]
    fn flat_range_is_widened() {
        let ticks = AxisTicks::for_range(42.0, 42.0, 4);
        assert!(ticks.span() > 0.0);
        assert!(ticks.min < 42.0 && ticks.max > 42.0);
    }

    #[test]
    fn fraction_maps_domain_to_unit_interval() {
        let ticks = AxisTicks::for_range(0.0, 100.0, 5);
        assert_eq!(ticks.fraction(ticks.min), 0.0);
        assert_eq!(ticks.fraction(ticks.max), 1.0);
    }

    #[test]
    fn format_labels() {
        assert_eq!(format_tick_label(115.0), "115");
        assert_eq!(format_tick_label(-3.0), "-3");
        assert_eq!(format_tick_label(250_000.0), "250K");
        assert_eq!(format_tick_label(1_500_000.0), "1.5M");
    }
}
