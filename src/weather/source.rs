//! Async weather source
//!
//! Adapters talk to a [`WeatherSource`] rather than to the table directly.
//! The only implementation today is [`StaticWeather`], which answers from the
//! hardcoded table without suspending.

use crate::types::Result;
use crate::weather::{lookup, WeatherRecord};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// Fetch the record for a city. Always resolves; unknown cities yield
    /// [`WeatherRecord::no_data`].
    async fn fetch(&self, city: &str) -> WeatherRecord;
}

/// Source backed by the built-in city table
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticWeather;

#[async_trait]
impl WeatherSource for StaticWeather {
    async fn fetch(&self, city: &str) -> WeatherRecord {
        lookup(city)
    }
}

/// Fetch a city's record and render it as pretty-printed JSON.
///
/// Both the `weather` tool and the `weather` prompt return exactly this text.
pub async fn report(source: &dyn WeatherSource, city: &str) -> Result<String> {
    let record = source.fetch(city).await;
    if record.is_no_data() {
        debug!("No weather data for city: {}", city);
    }
    Ok(serde_json::to_string_pretty(&record)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_source_matches_lookup() {
        let source = StaticWeather;
        assert_eq!(source.fetch("Chennai").await, lookup("chennai"));
        assert!(source.fetch("Paris").await.is_no_data());
    }

    #[tokio::test]
    async fn test_report_is_pretty_json() {
        let text = report(&StaticWeather, "delhi").await.unwrap();
        assert_eq!(
            text,
            "{\n  \"temperature\": \"20\",\n  \"forecast\": \"It's Raining\"\n}"
        );
    }

    #[tokio::test]
    async fn test_report_unknown_city() {
        let text = report(&StaticWeather, "Atlantis").await.unwrap();
        let record: WeatherRecord = serde_json::from_str(&text).unwrap();
        assert_eq!(record, WeatherRecord::no_data());
    }
}
