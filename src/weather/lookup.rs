//! Hardcoded city table

use serde::{Deserialize, Serialize};

pub const NO_DATA_TEMPERATURE: &str = "N/A";
pub const NO_DATA_FORECAST: &str = "No data available for this city.";

/// (city, temperature, forecast), city names lower-case
const CITIES: &[(&str, &str, &str)] = &[
    ("delhi", "20", "It's Raining"),
    ("mumbai", "25", "It's Sunny"),
    ("kolkata", "22", "It's Cloudy"),
    ("chennai", "23", "It's Sunny"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub temperature: String,
    pub forecast: String,
}

impl WeatherRecord {
    pub fn new(temperature: impl Into<String>, forecast: impl Into<String>) -> Self {
        Self {
            temperature: temperature.into(),
            forecast: forecast.into(),
        }
    }

    /// Record returned for cities outside the table
    pub fn no_data() -> Self {
        Self::new(NO_DATA_TEMPERATURE, NO_DATA_FORECAST)
    }

    pub fn is_no_data(&self) -> bool {
        self.temperature == NO_DATA_TEMPERATURE && self.forecast == NO_DATA_FORECAST
    }
}

/// Look up a city, case-insensitively. Unknown cities are not an error.
pub fn lookup(city: &str) -> WeatherRecord {
    let key = city.to_lowercase();

    CITIES
        .iter()
        .find(|(name, _, _)| *name == key)
        .map(|(_, temperature, forecast)| WeatherRecord::new(*temperature, *forecast))
        .unwrap_or_else(WeatherRecord::no_data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_cities() {
        assert_eq!(lookup("delhi"), WeatherRecord::new("20", "It's Raining"));
        assert_eq!(lookup("mumbai"), WeatherRecord::new("25", "It's Sunny"));
        assert_eq!(lookup("kolkata"), WeatherRecord::new("22", "It's Cloudy"));
        assert_eq!(lookup("chennai"), WeatherRecord::new("23", "It's Sunny"));
    }

    #[test]
    fn test_lookup_ignores_case() {
        assert_eq!(lookup("Delhi"), lookup("delhi"));
        assert_eq!(lookup("MUMBAI"), lookup("mumbai"));
        assert_eq!(lookup("KoLkAtA"), lookup("kolkata"));
    }

    #[test]
    fn test_unknown_city_returns_sentinel() {
        for city in ["London", "", " delhi", "delhi ", "new delhi", "चेन्नई"] {
            let record = lookup(city);
            assert!(record.is_no_data(), "expected no data for {:?}", city);
            assert_eq!(record.temperature, "N/A");
            assert_eq!(record.forecast, "No data available for this city.");
        }
    }

    #[test]
    fn test_record_field_names() {
        let value = serde_json::to_value(lookup("delhi")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"temperature": "20", "forecast": "It's Raining"})
        );
    }
}
