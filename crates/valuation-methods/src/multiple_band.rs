use valuation_core::{MultipleAdjustment, ValuationRange};

pub(crate) fn adjustment(label: &str, percent: f64) -> MultipleAdjustment {
    MultipleAdjustment {
        label: label.to_string(),
        percent,
    }
}

/// Sum the adjustment percentages into one multiplier and scale the band.
/// Adjustments are additive: -15% and +20% net to a 1.05x multiplier.
pub(crate) fn apply_adjustments(
    band: ValuationRange,
    adjustments: &[MultipleAdjustment],
) -> ValuationRange {
    let net_percent: f64 = adjustments.iter().map(|a| a.percent).sum();
    band.scale(1.0 + net_percent / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjustments_are_additive() {
        let band = ValuationRange {
            low: 4.0,
            median: 8.0,
            high: 15.0,
        };
        let adjusted = apply_adjustments(
            band,
            &[adjustment("size", -15.0), adjustment("growth", 20.0)],
        );
        assert!((adjusted.median - 8.0 * 1.05).abs() < 1e-12);
    }

    #[test]
    fn no_adjustments_is_identity() {
        let band = ValuationRange {
            low: 1.0,
            median: 2.0,
            high: 3.0,
        };
        assert_eq!(apply_adjustments(band, &[]), band);
    }
}
