//! Randomized fake-data generator backed by built-in sample tables.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::FakeDataSource;
use crate::models::{Currency, Nation};

/// Nationality, capital city, flag, and primary language samples.
const NATIONS: &[(&str, &str, &str, &str)] = &[
    ("American", "Washington", "\u{1F1FA}\u{1F1F8}", "English"),
    ("Argentine", "Buenos Aires", "\u{1F1E6}\u{1F1F7}", "Spanish"),
    ("Australian", "Canberra", "\u{1F1E6}\u{1F1FA}", "English"),
    ("Austrian", "Vienna", "\u{1F1E6}\u{1F1F9}", "German"),
    ("Brazilian", "Brasilia", "\u{1F1E7}\u{1F1F7}", "Portuguese"),
    ("British", "London", "\u{1F1EC}\u{1F1E7}", "English"),
    ("Canadian", "Ottawa", "\u{1F1E8}\u{1F1E6}", "English"),
    ("Chinese", "Beijing", "\u{1F1E8}\u{1F1F3}", "Mandarin"),
    ("Danish", "Copenhagen", "\u{1F1E9}\u{1F1F0}", "Danish"),
    ("Dutch", "Amsterdam", "\u{1F1F3}\u{1F1F1}", "Dutch"),
    ("Egyptian", "Cairo", "\u{1F1EA}\u{1F1EC}", "Arabic"),
    ("Finnish", "Helsinki", "\u{1F1EB}\u{1F1EE}", "Finnish"),
    ("French", "Paris", "\u{1F1EB}\u{1F1F7}", "French"),
    ("German", "Berlin", "\u{1F1E9}\u{1F1EA}", "German"),
    ("Greek", "Athens", "\u{1F1EC}\u{1F1F7}", "Greek"),
    ("Indian", "New Delhi", "\u{1F1EE}\u{1F1F3}", "Hindi"),
    ("Italian", "Rome", "\u{1F1EE}\u{1F1F9}", "Italian"),
    ("Japanese", "Tokyo", "\u{1F1EF}\u{1F1F5}", "Japanese"),
    ("Kenyan", "Nairobi", "\u{1F1F0}\u{1F1EA}", "Swahili"),
    ("Korean", "Seoul", "\u{1F1F0}\u{1F1F7}", "Korean"),
    ("Mexican", "Mexico City", "\u{1F1F2}\u{1F1FD}", "Spanish"),
    ("Norwegian", "Oslo", "\u{1F1F3}\u{1F1F4}", "Norwegian"),
    ("Polish", "Warsaw", "\u{1F1F5}\u{1F1F1}", "Polish"),
    ("Portuguese", "Lisbon", "\u{1F1F5}\u{1F1F9}", "Portuguese"),
    ("Russian", "Moscow", "\u{1F1F7}\u{1F1FA}", "Russian"),
    ("Singaporean", "Singapore", "\u{1F1F8}\u{1F1EC}", "English"),
    ("Spanish", "Madrid", "\u{1F1EA}\u{1F1F8}", "Spanish"),
    ("Swedish", "Stockholm", "\u{1F1F8}\u{1F1EA}", "Swedish"),
    ("Swiss", "Bern", "\u{1F1E8}\u{1F1ED}", "German"),
    ("Turkish", "Ankara", "\u{1F1F9}\u{1F1F7}", "Turkish"),
];

/// Currency name and code samples.
const CURRENCIES: &[(&str, &str)] = &[
    ("Australian Dollar", "AUD"),
    ("Brazilian Real", "BRL"),
    ("British Pound", "GBP"),
    ("Canadian Dollar", "CAD"),
    ("Chinese Yuan", "CNY"),
    ("Czech Koruna", "CZK"),
    ("Danish Krone", "DKK"),
    ("Euro", "EUR"),
    ("Hong Kong Dollar", "HKD"),
    ("Indian Rupee", "INR"),
    ("Israeli New Shekel", "ILS"),
    ("Japanese Yen", "JPY"),
    ("Mexican Peso", "MXN"),
    ("New Zealand Dollar", "NZD"),
    ("Norwegian Krone", "NOK"),
    ("Polish Zloty", "PLN"),
    ("Singapore Dollar", "SGD"),
    ("South African Rand", "ZAR"),
    ("South Korean Won", "KRW"),
    ("Swedish Krona", "SEK"),
    ("Swiss Franc", "CHF"),
    ("Thai Baht", "THB"),
    ("Turkish Lira", "TRY"),
    ("United States Dollar", "USD"),
];

/// Randomized [`FakeDataSource`] sampling from the built-in tables.
///
/// The RNG sits behind a `Mutex` so one instance can serve concurrent
/// requests through a shared `Arc`.
pub struct Faker {
    rng: Mutex<StdRng>,
}

impl Faker {
    /// Entropy-seeded generator for production use.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic generator: the same seed yields the same sequence.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for Faker {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeDataSource for Faker {
    fn next_nation(&self) -> Nation {
        let index = self.rng.lock().gen_range(0..NATIONS.len());
        let (nationality, capital_city, flag, language) = NATIONS[index];
        Nation {
            nationality: nationality.to_string(),
            capital_city: capital_city.to_string(),
            flag: flag.to_string(),
            language: language.to_string(),
        }
    }

    fn next_currency(&self) -> Currency {
        let index = self.rng.lock().gen_range(0..CURRENCIES.len());
        let (name, code) = CURRENCIES[index];
        Currency {
            name: name.to_string(),
            code: code.to_string(),
        }
    }
}
