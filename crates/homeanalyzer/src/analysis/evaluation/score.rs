use super::super::domain::{MarketContext, PropertyRecord};
use super::config::EvaluatorConfig;
use super::ValueDrivers;
use chrono::Datelike;

/// Anchor points of the score curve, ascending in `diff_ratio`. Listings 15%
/// under the model estimate score 9, fair pricing sits in the mid-sevens, and
/// 15% over drops to 3.
const SCORE_ANCHORS: [(f64, f64); 4] = [(-0.15, 9.0), (-0.07, 7.9), (0.07, 7.1), (0.15, 3.0)];
/// Points gained per unit ratio below the first anchor.
const UNDER_SLOPE: f64 = 10.0;
/// Points lost per unit ratio above the last anchor.
const OVER_SLOPE: f64 = 20.0;

/// Nominal driver weights: location, size, condition, market timing.
const NOMINAL_WEIGHTS: [u32; 4] = [40, 30, 20, 10];

/// Relative gap between the listing price and the model estimate. Positive
/// means the listing asks more than the model thinks it is worth.
pub(crate) fn diff_ratio(price: u64, predicted_value: f64) -> f64 {
    (price as f64 - predicted_value) / price as f64
}

/// Piecewise-linear, monotone non-increasing map from `diff_ratio` to a deal
/// score, clamped to [0, 10] and rounded to one decimal.
pub(crate) fn deal_score(diff_ratio: f64) -> f64 {
    let (first, last) = (SCORE_ANCHORS[0], SCORE_ANCHORS[3]);

    let raw = if diff_ratio <= first.0 {
        first.1 + (first.0 - diff_ratio) * UNDER_SLOPE
    } else if diff_ratio >= last.0 {
        last.1 - (diff_ratio - last.0) * OVER_SLOPE
    } else {
        let mut value = last.1;
        for window in SCORE_ANCHORS.windows(2) {
            let (left, right) = (window[0], window[1]);
            if diff_ratio <= right.0 {
                let t = (diff_ratio - left.0) / (right.0 - left.0);
                value = left.1 + (right.1 - left.1) * t;
                break;
            }
        }
        value
    };

    (raw.clamp(0.0, 10.0) * 10.0).round() / 10.0
}

/// Which driver categories have a usable signal. Location and size always do.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DriverSignals {
    pub(crate) condition: bool,
    pub(crate) market_timing: bool,
}

/// Split 100 percentage points across the active categories in proportion to
/// the nominal weights, using largest-remainder rounding so the total is
/// always exactly 100.
pub(crate) fn value_drivers(signals: DriverSignals) -> ValueDrivers {
    let active = [true, true, signals.condition, signals.market_timing];
    let total: u32 = NOMINAL_WEIGHTS
        .iter()
        .zip(active)
        .filter(|(_, on)| *on)
        .map(|(weight, _)| *weight)
        .sum();

    let mut shares = [0u32; 4];
    let mut remainders = [0u32; 4];
    for idx in 0..4 {
        if active[idx] {
            shares[idx] = NOMINAL_WEIGHTS[idx] * 100 / total;
            remainders[idx] = NOMINAL_WEIGHTS[idx] * 100 % total;
        }
    }

    let mut leftover = 100 - shares.iter().sum::<u32>();
    let mut order: Vec<usize> = (0..4).filter(|idx| active[*idx]).collect();
    order.sort_by(|a, b| remainders[*b].cmp(&remainders[*a]));
    for idx in order {
        if leftover == 0 {
            break;
        }
        shares[idx] += 1;
        leftover -= 1;
    }

    ValueDrivers {
        location: shares[0] as u8,
        size: shares[1] as u8,
        condition: shares[2] as u8,
        market_timing: shares[3] as u8,
    }
}

/// A key-factor rule that fired, with the magnitude used for ordering.
#[derive(Debug, Clone)]
pub(crate) struct FactorHit {
    pub(crate) label: &'static str,
    pub(crate) magnitude: f64,
}

const MAX_KEY_FACTORS: usize = 6;

/// Rule set over property attributes and the pricing gap. Returns at least
/// two factors, at most six, ordered by magnitude.
pub(crate) fn key_factors(
    property: &PropertyRecord,
    context: &MarketContext,
    diff_ratio: f64,
    config: &EvaluatorConfig,
) -> Vec<FactorHit> {
    let mut hits = Vec::new();

    if diff_ratio <= -config.notable_gap_ratio {
        hits.push(FactorHit {
            label: "Potentially undervalued opportunity",
            magnitude: diff_ratio.abs() * 10.0,
        });
    } else if diff_ratio >= config.notable_gap_ratio {
        hits.push(FactorHit {
            label: "Priced above model estimate",
            magnitude: diff_ratio * 10.0,
        });
    } else {
        hits.push(FactorHit {
            label: "Priced near model estimate",
            magnitude: 0.25,
        });
    }

    if property.sqft > config.large_home_sqft {
        hits.push(FactorHit {
            label: "Large living space",
            magnitude: property.sqft as f64 / config.large_home_sqft as f64,
        });
    } else if property.sqft < config.compact_home_sqft {
        hits.push(FactorHit {
            label: "Compact size may limit value",
            magnitude: config.compact_home_sqft as f64 / property.sqft.max(1) as f64,
        });
    }

    if property.bedrooms > 0
        && property.sqft / property.bedrooms as u32 >= config.sqft_per_bedroom_target
    {
        hits.push(FactorHit {
            label: "Good size for the bedroom count",
            magnitude: 0.8,
        });
    }

    if property.bedrooms >= config.family_bedroom_count {
        hits.push(FactorHit {
            label: "Family-friendly bedroom count",
            magnitude: 0.6,
        });
    }

    let modern_cutoff = context.as_of.year() - config.modern_construction_window as i32;
    if property.year_built as i32 >= modern_cutoff {
        hits.push(FactorHit {
            label: "Modern construction",
            magnitude: 0.9,
        });
    } else if property.year_built < config.dated_home_year {
        hits.push(FactorHit {
            label: "Older home may need updates",
            magnitude: 0.7,
        });
    }

    if context
        .recent_sales
        .map(|count| count >= config.active_market_sales)
        .unwrap_or(false)
    {
        hits.push(FactorHit {
            label: "Active recent sales nearby",
            magnitude: 0.5,
        });
    }

    if hits.len() < 2 {
        hits.push(FactorHit {
            label: "Standard configuration for the area",
            magnitude: 0.1,
        });
    }

    hits.sort_by(|a, b| b.magnitude.total_cmp(&a.magnitude));
    hits.truncate(MAX_KEY_FACTORS);
    hits
}
