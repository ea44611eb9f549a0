//! Static weather lookups
//!
//! The table is fixed at compile time; lookups lower-case the requested city
//! and the response echoes the raw input in title case.

use crate::error::ApiError;
use serde::Serialize;

/// A weather reading for one city
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct WeatherEntry {
    pub temp: i32,
    pub condition: &'static str,
    pub icon: &'static str,
    pub humidity: u8,
    pub wind: u8,
}

/// Body of a successful `GET /api/weather/{city}`
#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct WeatherReport {
    #[serde(flatten)]
    pub entry: WeatherEntry,
    pub city: String,
}

static WEATHER: [(&str, WeatherEntry); 5] = [
    (
        "london",
        WeatherEntry {
            temp: 15,
            condition: "Cloudy",
            icon: "☁️",
            humidity: 78,
            wind: 8,
        },
    ),
    (
        "new york",
        WeatherEntry {
            temp: 22,
            condition: "Sunny",
            icon: "☀️",
            humidity: 55,
            wind: 12,
        },
    ),
    (
        "tokyo",
        WeatherEntry {
            temp: 18,
            condition: "Rainy",
            icon: "🌧️",
            humidity: 85,
            wind: 6,
        },
    ),
    (
        "cape town",
        WeatherEntry {
            temp: 22,
            condition: "Sunny",
            icon: "☀️",
            humidity: 65,
            wind: 12,
        },
    ),
    (
        "paris",
        WeatherEntry {
            temp: 16,
            condition: "Partly Cloudy",
            icon: "⛅",
            humidity: 70,
            wind: 10,
        },
    ),
];

/// Lowercase keys of every known city, in table order
pub fn cities() -> impl Iterator<Item = &'static str> {
    WEATHER.iter().map(|(city, _)| *city)
}

/// Look up `city` case-insensitively
pub fn lookup(city: &str) -> Result<WeatherReport, ApiError> {
    let key = city.to_lowercase();

    WEATHER
        .iter()
        .find(|(name, _)| *name == key)
        .map(|(_, entry)| WeatherReport {
            entry: *entry,
            city: title_case(city),
        })
        .ok_or(ApiError::CityNotFound)
}

/// Title-case `input`
///
/// A word starts at any letter that does not follow another letter; that
/// letter is upper-cased and the rest of the word lower-cased. Digits and
/// punctuation are word breaks, so `o'hare` becomes `O'Hare`.
pub fn title_case(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut in_word = false;

    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                output.extend(c.to_lowercase());
            } else {
                output.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            output.push(c);
            in_word = false;
        }
    }

    output
}
