use super::domain::{InvalidInput, PropertyRecord};
use chrono::{Datelike, NaiveDate};

/// Accepted ranges for submitted listings, mirroring the client-side form.
#[derive(Debug, Clone, PartialEq)]
pub struct IntakeLimits {
    pub min_price: u64,
    pub max_price: u64,
    pub min_sqft: u32,
    pub max_sqft: u32,
    pub min_year_built: u16,
}

impl Default for IntakeLimits {
    fn default() -> Self {
        Self {
            min_price: 1_000,
            max_price: 50_000_000,
            min_sqft: 100,
            max_sqft: 50_000,
            min_year_built: 1800,
        }
    }
}

/// Validates and normalizes submissions into canonical `PropertyRecord`s
/// before any model or evaluator sees them.
#[derive(Debug, Clone, Default)]
pub struct PropertyIntake {
    limits: IntakeLimits,
}

impl PropertyIntake {
    pub fn with_limits(limits: IntakeLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &IntakeLimits {
        &self.limits
    }

    /// `as_of` bounds the acceptable construction year.
    pub fn validate(
        &self,
        mut property: PropertyRecord,
        as_of: NaiveDate,
    ) -> Result<PropertyRecord, InvalidInput> {
        let address = property.address.trim();
        if address.is_empty() {
            return Err(InvalidInput::EmptyAddress);
        }
        property.address = address.to_string();

        if property.price < self.limits.min_price || property.price > self.limits.max_price {
            return Err(InvalidInput::PriceOutOfRange {
                found: property.price,
                min: self.limits.min_price,
                max: self.limits.max_price,
            });
        }

        if property.sqft < self.limits.min_sqft || property.sqft > self.limits.max_sqft {
            return Err(InvalidInput::SqftOutOfRange {
                found: property.sqft,
                min: self.limits.min_sqft,
                max: self.limits.max_sqft,
            });
        }

        let doubled = property.bathrooms * 2.0;
        if !property.bathrooms.is_finite()
            || property.bathrooms < 0.0
            || (doubled - doubled.round()).abs() > 1e-9
        {
            return Err(InvalidInput::InvalidBathrooms {
                found: property.bathrooms,
            });
        }

        let max_year = as_of.year().clamp(0, u16::MAX as i32) as u16;
        if property.year_built < self.limits.min_year_built || property.year_built > max_year {
            return Err(InvalidInput::YearBuiltOutOfRange {
                found: property.year_built,
                min: self.limits.min_year_built,
                max: max_year,
            });
        }

        Ok(property)
    }
}
