//! Plain-text rendering of an epoch's metrics.

use std::fmt::Write;

use super::metrics::Metrics;

/// Metric rendered in scientific notation instead of fixed point.
pub const LEARNING_RATE_KEY: &str = "lr";

/// Signature shared by the default formatter and custom replacements.
pub type Formatter = dyn Fn(Option<u64>, &Metrics) -> String + Send + Sync;

/// Render the default report for an epoch.
///
/// ```text
/// epoch: 4
/// loss: 0.2113
/// val_loss: 0.2531
/// lr: 1.00E-03
/// ```
///
/// Lines follow the metrics' insertion order. `epoch` is `None` when no
/// epoch has completed yet.
#[must_use]
pub fn format_message(epoch: Option<u64>, metrics: &Metrics) -> String {
    let mut message = String::new();
    match epoch {
        Some(epoch) => {
            let _ = writeln!(message, "epoch: {epoch}");
        }
        None => message.push_str("epoch: none\n"),
    }

    for (key, value) in metrics.iter() {
        let number = if key == LEARNING_RATE_KEY {
            scientific(value)
        } else {
            fixed(value)
        };
        let _ = writeln!(message, "{key}: {number}");
    }
    message
}

/// Fixed point with four decimals, e.g. `0.5000`.
fn fixed(value: f64) -> String {
    if value.is_nan() {
        return "nan".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.into();
    }
    format!("{value:.4}")
}

/// Two-decimal mantissa with a signed exponent of at least two digits,
/// e.g. `1.23E-03`.
fn scientific(value: f64) -> String {
    if value.is_nan() {
        return "NAN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "INF" } else { "-INF" }.into();
    }

    // std renders `1.23E-3`; widen the exponent.
    let raw = format!("{value:.2E}");
    let Some((mantissa, exponent)) = raw.split_once('E') else {
        return raw;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}E{sign}{digits:0>2}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn learning_rate_uses_scientific_notation() {
        let metrics = Metrics::from([("lr", 0.00123)]);
        assert_eq!(format_message(Some(0), &metrics), "epoch: 0\nlr: 1.23E-03\n");
    }

    #[test]
    fn other_metrics_use_four_decimals() {
        let metrics = Metrics::from([("loss", 0.5)]);
        assert_eq!(format_message(Some(7), &metrics), "epoch: 7\nloss: 0.5000\n");
    }

    #[test]
    fn lines_follow_insertion_order() {
        let metrics = Metrics::from([("val_loss", 0.6), ("loss", 0.51234), ("lr", 0.001)]);
        assert_eq!(
            format_message(Some(3), &metrics),
            "epoch: 3\nval_loss: 0.6000\nloss: 0.5123\nlr: 1.00E-03\n"
        );
    }

    #[test]
    fn empty_metrics_only_epoch_line() {
        assert_eq!(format_message(Some(12), &Metrics::new()), "epoch: 12\n");
    }

    #[test]
    fn missing_epoch_renders_none() {
        assert_eq!(format_message(None, &Metrics::new()), "epoch: none\n");
    }

    #[test]
    fn scientific_exponents() {
        assert_eq!(scientific(1.0), "1.00E+00");
        assert_eq!(scientific(12345.0), "1.23E+04");
        assert_eq!(scientific(-0.05), "-5.00E-02");
        assert_eq!(scientific(1e100), "1.00E+100");
        assert_eq!(scientific(0.0), "0.00E+00");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(fixed(f64::NAN), "nan");
        assert_eq!(fixed(f64::INFINITY), "inf");
        assert_eq!(fixed(f64::NEG_INFINITY), "-inf");
        assert_eq!(scientific(f64::NAN), "NAN");
        assert_eq!(scientific(f64::NEG_INFINITY), "-INF");
    }

    #[test]
    fn only_exact_lr_key_is_scientific() {
        let metrics = Metrics::from([("lr_decay", 0.5), ("LR", 0.25)]);
        assert_eq!(
            format_message(Some(1), &metrics),
            "epoch: 1\nlr_decay: 0.5000\nLR: 0.2500\n"
        );
    }
}
