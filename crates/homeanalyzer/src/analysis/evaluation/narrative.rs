use serde::{Deserialize, Serialize};

/// How the listing price relates to the model estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricingAssessment {
    Underpriced,
    FairlyPriced,
    Overpriced,
}

impl PricingAssessment {
    pub const fn label(self) -> &'static str {
        match self {
            PricingAssessment::Underpriced => "underpriced",
            PricingAssessment::FairlyPriced => "fairly_priced",
            PricingAssessment::Overpriced => "overpriced",
        }
    }
}

/// Threshold classification over the pricing gap. The band is symmetric and
/// inclusive: a gap exactly at the band edge is still fairly priced.
pub(crate) fn classify(diff_ratio: f64, fair_price_band: f64) -> PricingAssessment {
    if diff_ratio < -fair_price_band {
        PricingAssessment::Underpriced
    } else if diff_ratio > fair_price_band {
        PricingAssessment::Overpriced
    } else {
        PricingAssessment::FairlyPriced
    }
}

/// One-sentence summary combining the assessment with the leading factors.
pub(crate) fn explanation(
    assessment: PricingAssessment,
    predicted_value: f64,
    diff_ratio: f64,
    key_factors: &[String],
) -> String {
    let estimate = format_dollars(predicted_value);
    let gap_pct = diff_ratio.abs() * 100.0;

    let drivers = match key_factors {
        [] => String::new(),
        [first] => format!(" Driven by: {first}."),
        [first, second, ..] => format!(" Driven by: {first} and {second}."),
    };

    match assessment {
        PricingAssessment::Underpriced => format!(
            "This listing appears underpriced: the model estimates ${estimate}, \
             about {gap_pct:.1}% above the asking price.{drivers}"
        ),
        PricingAssessment::FairlyPriced => format!(
            "This listing is priced close to the model estimate of ${estimate} \
             (within {gap_pct:.1}%).{drivers}"
        ),
        PricingAssessment::Overpriced => format!(
            "This listing appears overpriced: the model estimates ${estimate}, \
             about {gap_pct:.1}% below the asking price. There may be room to \
             negotiate.{drivers}"
        ),
    }
}

fn format_dollars(value: f64) -> String {
    let whole = value.round().max(0.0) as u64;
    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
