use super::domain::{InvalidInput, MarketStatus, NeighborhoodTrends, TrendPoint};
use chrono::{Datelike, NaiveDate};

const TREND_MONTHS: u32 = 6;

/// Deterministic six-month market snapshot for an address. The figures are
/// derived from a stable hash of the normalized address, so repeated requests
/// for the same neighborhood always agree.
pub fn neighborhood_trends(
    address: &str,
    as_of: NaiveDate,
) -> Result<NeighborhoodTrends, InvalidInput> {
    let location = address.trim();
    if location.is_empty() {
        return Err(InvalidInput::EmptyAddress);
    }

    let seed = fnv1a(location.to_ascii_lowercase().as_bytes());

    let average_price = 250_000 + (seed % 601) * 1_000;
    let monthly_growth_pct = ((seed >> 16) % 41) as f64 / 10.0 - 1.5;
    let days_on_market = 12 + ((seed >> 24) % 49) as u32;
    let total_sales = 40 + ((seed >> 32) % 161) as u32;
    let typical_sqft = 1_400 + ((seed >> 40) % 1_201) as u32;

    let market_status = if days_on_market < 30 || monthly_growth_pct > 1.0 {
        MarketStatus::Seller
    } else {
        MarketStatus::Buyer
    };

    let price_per_sqft = (average_price as f64 / typical_sqft as f64).round() as u32;

    let growth = 1.0 + monthly_growth_pct / 100.0;
    let mut price_trend = Vec::with_capacity(TREND_MONTHS as usize);
    for offset in (0..TREND_MONTHS).rev() {
        let (year, month) = months_back(as_of.year(), as_of.month(), offset);
        let price = (average_price as f64 / growth.powi(offset as i32)).round() as u64;
        price_trend.push(TrendPoint {
            month: format!("{year:04}-{month:02}"),
            price,
        });
    }

    Ok(NeighborhoodTrends {
        location: location.to_string(),
        average_price,
        price_trend,
        days_on_market,
        price_per_sqft,
        market_status,
        total_sales,
    })
}

fn months_back(year: i32, month: u32, offset: u32) -> (i32, u32) {
    let zero_based = year * 12 + month as i32 - 1 - offset as i32;
    (zero_based.div_euclid(12), (zero_based.rem_euclid(12) + 1) as u32)
}

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    let mut hash = OFFSET_BASIS;
    for byte in bytes {
        hash ^= u64::from(*byte);
        hash = hash.wrapping_mul(PRIME);
    }
    hash
}
