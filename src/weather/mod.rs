//! Weather data lookup
//!
//! A fixed table of city forecasts behind an async source trait, so that the
//! protocol adapters never depend on where the numbers come from.

mod lookup;
mod source;

pub use lookup::{lookup, WeatherRecord, NO_DATA_FORECAST, NO_DATA_TEMPERATURE};
pub use source::{report, StaticWeather, WeatherSource};
