//! Load-time animation math: reveal staggering and the total-sales counter.
//!
//! Adapters own the observers and the animation-frame loop; this module only
//! decides classes, delays, and the text of each frame.

use serde::Deserialize;

/// Currency prefix written by the counter.
pub const RUPEE_PREFIX: &str = "₹ ";
/// Marker the counter element's text must contain to be animated.
pub const RUPEE_SIGN: char = '₹';
/// Default counter tween length.
pub const COUNTER_DURATION_MS: f64 = 1500.0;

/// Group of elements revealed together when they scroll into view.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum RevealKind {
    /// Dashboard and summary cards.
    Card,
    /// Report chart images.
    Chart,
}

impl RevealKind {
    /// Class added at init that hides the element until it is revealed.
    pub fn observed_class(&self) -> &'static str {
        match self {
            RevealKind::Card => "observed",
            RevealKind::Chart => "observed-chart",
        }
    }

    /// Class added once the element becomes visible.
    pub fn reveal_class(&self) -> &'static str {
        match self {
            RevealKind::Card => "fade-in-up",
            RevealKind::Chart => "fade-in-scale",
        }
    }

    pub fn default_selector(&self) -> &'static str {
        match self {
            RevealKind::Card => ".card, .summary-card",
            RevealKind::Chart => ".chart-container img",
        }
    }

    pub fn default_timing(&self) -> RevealTiming {
        match self {
            RevealKind::Card => RevealTiming {
                threshold: 0.1,
                base_delay_ms: 0,
                step_ms: 50,
            },
            RevealKind::Chart => RevealTiming {
                threshold: 0.2,
                base_delay_ms: 100,
                step_ms: 100,
            },
        }
    }
}

/// Visibility threshold and stagger for one [`RevealKind`].
#[derive(Debug, PartialEq, Clone, Copy, Deserialize)]
pub struct RevealTiming {
    /// Fraction of the element that must be visible, 0.0 to 1.0.
    pub threshold: f64,
    pub base_delay_ms: u32,
    pub step_ms: u32,
}

impl RevealTiming {
    /// Transition delay for the `index`-th entry of an intersection batch.
    pub fn delay_ms(&self, index: usize) -> u32 {
        self.base_delay_ms
            .saturating_add(self.step_ms.saturating_mul(index as u32))
    }

    /// Value for the `transition-delay` style property.
    pub fn delay_css(&self, index: usize) -> String {
        format!("{}ms", self.delay_ms(index))
    }
}

/// Read the number out of a label like `"₹ 12,345.50"`.
///
/// Every character that is not a digit or a dot is dropped first, and the
/// longest leading numeric run of what is left is parsed.
pub fn parse_amount(text: &str) -> Option<f64> {
    let digits: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    // The run ends at the second dot, if there is one.
    let mut end = digits.len();
    let mut seen_dot = false;
    for (i, c) in digits.char_indices() {
        if c == '.' {
            if seen_dot {
                end = i;
                break;
            }
            seen_dot = true;
        }
    }
    digits[..end].parse::<f64>().ok()
}

/// Format an amount the way the counter writes it.
pub fn format_rupees(value: f64) -> String {
    format!("{}{:.2}", RUPEE_PREFIX, value)
}

/// What the counter should do with the element it found.
#[derive(Debug, PartialEq, Clone)]
pub enum CounterStart {
    /// Tween from zero to the parsed value.
    Animate(CounterTween),
    /// The amount is zero; just normalise the text.
    SetText(String),
    /// Not a rupee amount; leave it alone.
    Skip,
}

/// Decide how to animate a total-sales label with the given text.
pub fn counter_start(text: &str, duration_ms: f64) -> CounterStart {
    if !text.contains(RUPEE_SIGN) {
        return CounterStart::Skip;
    }
    match parse_amount(text) {
        Some(value) if value > 0.0 => CounterStart::Animate(CounterTween {
            start: 0.0,
            end: value,
            duration_ms,
        }),
        Some(value) if value == 0.0 => CounterStart::SetText(format_rupees(0.0)),
        _ => CounterStart::Skip,
    }
}

/// Linear tween between two amounts.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct CounterTween {
    pub start: f64,
    pub end: f64,
    pub duration_ms: f64,
}

impl CounterTween {
    /// Progress in `0.0..=1.0` after `elapsed_ms`.
    pub fn progress(&self, elapsed_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        (elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn value_at(&self, elapsed_ms: f64) -> f64 {
        self.progress(elapsed_ms) * (self.end - self.start) + self.start
    }

    /// Text for the frame at `elapsed_ms` and whether it is the final frame.
    /// The final frame always shows the exact end value.
    pub fn frame_text(&self, elapsed_ms: f64) -> (String, bool) {
        if self.progress(elapsed_ms) < 1.0 {
            (format_rupees(self.value_at(elapsed_ms)), false)
        } else {
            (format_rupees(self.end), true)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_delays_step_by_fifty() {
        let timing = RevealKind::Card.default_timing();
        assert_eq!(timing.delay_ms(0), 0);
        assert_eq!(timing.delay_ms(3), 150);
        assert_eq!(timing.delay_css(2), "100ms");
    }

    #[test]
    fn chart_delays_start_after_cards() {
        let timing = RevealKind::Chart.default_timing();
        assert_eq!(timing.delay_ms(0), 100);
        assert_eq!(timing.delay_ms(2), 300);
        assert_eq!(timing.threshold, 0.2);
    }

    #[test]
    fn parses_formatted_amounts() {
        assert_eq!(parse_amount("₹ 12,345.50"), Some(12345.5));
        assert_eq!(parse_amount("₹ 0.00"), Some(0.0));
        assert_eq!(parse_amount("₹ 1.2.3"), Some(1.2));
        assert_eq!(parse_amount("₹ --"), None);
    }

    #[test]
    fn numeric_run_stops_at_second_dot() {
        assert_eq!(parse_amount("₹ 12..5"), Some(12.0));
        assert_eq!(parse_amount("₹ .5"), Some(0.5));
        assert_eq!(parse_amount("₹ ."), None);

        let long = format!("₹ {}.5.5", "9".repeat(300));
        let value = parse_amount(&long).expect("long run parses");
        assert!(value > 1e299, "{}", value);
    }

    #[test]
    fn counter_only_runs_on_rupee_labels() {
        assert_eq!(counter_start("12 checks", 1500.0), CounterStart::Skip);
        assert_eq!(counter_start("₹ n/a", 1500.0), CounterStart::Skip);
        assert_eq!(
            counter_start("₹0", 1500.0),
            CounterStart::SetText("₹ 0.00".to_string())
        );
        assert_eq!(
            counter_start("₹ 450.00", 1500.0),
            CounterStart::Animate(CounterTween {
                start: 0.0,
                end: 450.0,
                duration_ms: 1500.0
            })
        );
    }

    #[test]
    fn tween_is_linear_and_clamped() {
        let tween = CounterTween {
            start: 0.0,
            end: 200.0,
            duration_ms: 1000.0,
        };
        assert_eq!(tween.value_at(0.0), 0.0);
        assert_eq!(tween.value_at(250.0), 50.0);
        assert_eq!(tween.value_at(5000.0), 200.0);
        assert_eq!(tween.frame_text(500.0), ("₹ 100.00".to_string(), false));
    }

    #[test]
    fn final_frame_shows_exact_end() {
        let tween = CounterTween {
            start: 0.0,
            end: 1234.567,
            duration_ms: 1500.0,
        };
        assert_eq!(tween.frame_text(1500.0), ("₹ 1234.57".to_string(), true));
        assert!(tween.frame_text(2000.0).1);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let tween = CounterTween {
            start: 0.0,
            end: 10.0,
            duration_ms: 0.0,
        };
        assert_eq!(tween.frame_text(0.0), ("₹ 10.00".to_string(), true));
    }

    #[test]
    fn timing_deserializes_from_config_json() {
        let timing: RevealTiming =
            serde_json::from_str(r#"{"threshold":0.5,"base_delay_ms":10,"step_ms":20}"#).unwrap();
        assert_eq!(timing.delay_ms(1), 30);
    }
}
