//! Vehicle domain values and the fuel option policy.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of wheels a checked vehicle has. Only 2, 3 and 4 wheelers are tested.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum WheelCount {
    Two,
    Three,
    Four,
}

/// Errors that can occur when reading a wheel count from a form value.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ParseWheelCountError {
    Empty,
    NotANumber,
    Unsupported,
}

impl fmt::Display for ParseWheelCountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseWheelCountError::Empty => write!(f, "no wheel count selected"),
            ParseWheelCountError::NotANumber => write!(f, "wheel count must be a number"),
            ParseWheelCountError::Unsupported => write!(f, "wheels must be 2, 3, or 4"),
        }
    }
}

impl std::error::Error for ParseWheelCountError {}

impl FromStr for WheelCount {
    type Err = ParseWheelCountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Err(ParseWheelCountError::Empty),
            "2" => Ok(WheelCount::Two),
            "3" => Ok(WheelCount::Three),
            "4" => Ok(WheelCount::Four),
            other if other.chars().all(|c| c.is_ascii_digit()) => {
                Err(ParseWheelCountError::Unsupported)
            }
            _ => Err(ParseWheelCountError::NotANumber),
        }
    }
}

impl WheelCount {
    /// All supported wheel counts, in display order.
    pub const ALL: [WheelCount; 3] = [WheelCount::Two, WheelCount::Three, WheelCount::Four];

    /// The form value, as submitted by the wheels select.
    pub fn value(&self) -> &'static str {
        match self {
            WheelCount::Two => "2",
            WheelCount::Three => "3",
            WheelCount::Four => "4",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WheelCount::Two => "2 Wheeler",
            WheelCount::Three => "3 Wheeler",
            WheelCount::Four => "4 Wheeler",
        }
    }

    /// Fuel types a vehicle with this many wheels can be registered with.
    /// 2-wheelers are petrol only.
    pub fn fuel_types(&self) -> &'static [FuelType] {
        match self {
            WheelCount::Two => &[FuelType::Petrol],
            WheelCount::Three | WheelCount::Four => &[FuelType::Petrol, FuelType::Diesel],
        }
    }
}

/// Fuel type of the vehicle, offered by the dependent `vehicle_type` select.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FuelType {
    Petrol,
    Diesel,
}

impl FuelType {
    pub fn value(&self) -> &'static str {
        match self {
            FuelType::Petrol => "petrol",
            FuelType::Diesel => "diesel",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FuelType::Petrol => "Petrol",
            FuelType::Diesel => "Diesel",
        }
    }

    /// Look up a fuel type by its form value.
    pub fn from_value(value: &str) -> Option<FuelType> {
        match value {
            "petrol" => Some(FuelType::Petrol),
            "diesel" => Some(FuelType::Diesel),
            _ => None,
        }
    }
}

/// Certificate validity period chosen on the check form.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckDuration {
    SixMonths,
    OneYear,
}

impl CheckDuration {
    pub const ALL: [CheckDuration; 2] = [CheckDuration::SixMonths, CheckDuration::OneYear];

    pub fn value(&self) -> &'static str {
        match self {
            CheckDuration::SixMonths => "six_months",
            CheckDuration::OneYear => "one_year",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CheckDuration::SixMonths => "6 Months",
            CheckDuration::OneYear => "1 Year",
        }
    }
}

/// The option policy table: fuel types offered for a raw wheels value.
///
/// Total over every input. Anything that is not a supported wheel count
/// (including the empty placeholder value) yields no options.
pub fn options_for(source: &str) -> &'static [FuelType] {
    match source.parse::<WheelCount>() {
        Ok(wheels) => wheels.fuel_types(),
        Err(_) => &[],
    }
}
