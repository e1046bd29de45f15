use super::common::*;
use crate::analysis::domain::{AnalyzeRequest, InvalidInput, PropertyType};
use crate::analysis::intake::PropertyIntake;

#[test]
fn accepts_a_valid_listing_and_trims_the_address() {
    let intake = PropertyIntake::default();
    let mut property = sample_property();
    property.address = "  742 Evergreen Terrace, Springfield  ".to_string();

    let validated = intake
        .validate(property, as_of())
        .expect("valid listing passes intake");

    assert_eq!(validated.address, "742 Evergreen Terrace, Springfield");
}

#[test]
fn rejects_empty_addresses() {
    let intake = PropertyIntake::default();
    let mut property = sample_property();
    property.address = "   ".to_string();

    assert_eq!(
        intake.validate(property, as_of()),
        Err(InvalidInput::EmptyAddress)
    );
}

#[test]
fn rejects_prices_outside_the_form_bounds() {
    let intake = PropertyIntake::default();

    let mut cheap = sample_property();
    cheap.price = 999;
    assert!(matches!(
        intake.validate(cheap, as_of()),
        Err(InvalidInput::PriceOutOfRange { found: 999, .. })
    ));

    let mut absurd = sample_property();
    absurd.price = 50_000_001;
    assert!(matches!(
        intake.validate(absurd, as_of()),
        Err(InvalidInput::PriceOutOfRange { .. })
    ));
}

#[test]
fn rejects_square_footage_outside_the_form_bounds() {
    let intake = PropertyIntake::default();

    let mut tiny = sample_property();
    tiny.sqft = 99;
    assert!(matches!(
        intake.validate(tiny, as_of()),
        Err(InvalidInput::SqftOutOfRange { found: 99, .. })
    ));

    let mut vast = sample_property();
    vast.sqft = 50_001;
    assert!(matches!(
        intake.validate(vast, as_of()),
        Err(InvalidInput::SqftOutOfRange { .. })
    ));
}

#[test]
fn bathrooms_must_land_on_half_steps() {
    let intake = PropertyIntake::default();

    let mut halves = sample_property();
    halves.bathrooms = 2.5;
    assert!(intake.validate(halves, as_of()).is_ok());

    let mut fractional = sample_property();
    fractional.bathrooms = 2.3;
    assert!(matches!(
        intake.validate(fractional, as_of()),
        Err(InvalidInput::InvalidBathrooms { .. })
    ));

    let mut negative = sample_property();
    negative.bathrooms = -1.0;
    assert!(matches!(
        intake.validate(negative, as_of()),
        Err(InvalidInput::InvalidBathrooms { .. })
    ));
}

#[test]
fn year_built_is_bounded_by_the_reference_date() {
    let intake = PropertyIntake::default();

    let mut ancient = sample_property();
    ancient.year_built = 1799;
    assert!(matches!(
        intake.validate(ancient, as_of()),
        Err(InvalidInput::YearBuiltOutOfRange { found: 1799, .. })
    ));

    let mut future = sample_property();
    future.year_built = 2027;
    assert!(matches!(
        intake.validate(future, as_of()),
        Err(InvalidInput::YearBuiltOutOfRange { found: 2027, max: 2026, .. })
    ));

    let mut current = sample_property();
    current.year_built = 2026;
    assert!(intake.validate(current, as_of()).is_ok());
}

#[test]
fn analyze_request_deserializes_both_input_modes() {
    let url_body = serde_json::json!({ "zillow_url": "https://www.zillow.com/homedetails/742-Evergreen-Terrace/123_zpid/" });
    match serde_json::from_value::<AnalyzeRequest>(url_body).expect("url form parses") {
        AnalyzeRequest::ZillowUrl { zillow_url } => {
            assert!(zillow_url.contains("742-Evergreen-Terrace"));
        }
        other => panic!("expected url variant, got {other:?}"),
    }

    let property_body = serde_json::json!({
        "address": "12 Lakeview Dr",
        "price": 512_000,
        "sqft": 2_100,
        "bedrooms": 4,
        "bathrooms": 2.5,
        "year_built": 2012
    });
    match serde_json::from_value::<AnalyzeRequest>(property_body).expect("property form parses") {
        AnalyzeRequest::Property(property) => {
            assert_eq!(property.address, "12 Lakeview Dr");
            assert_eq!(property.property_type, PropertyType::House);
        }
        other => panic!("expected property variant, got {other:?}"),
    }
}
