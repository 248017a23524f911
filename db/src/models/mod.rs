pub use self::artists::*;
pub use self::display::*;
pub use self::shows::*;
pub use self::venues::*;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

mod artists;
mod display;
mod shows;
mod venues;

/// Treats a blank string in a payload the same as an absent field.
pub fn deserialize_unless_blank<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    let value: Value = Deserialize::deserialize(deserializer)?;
    if value.as_str().map_or(false, |v| !v.is_empty()) {
        Ok(T::deserialize(value).ok())
    } else {
        Ok(None)
    }
}

#[test]
fn deserialize_unless_blank_properly_deserializes() {
    let venue_data = r#"{"name": "Venue", "city": "SF", "state": "CA", "address": "1 Main St"}"#;
    let venue: NewVenue = serde_json::from_str(&venue_data).unwrap();
    assert_eq!(venue.name, "Venue".to_string());
    assert_eq!(venue.phone, None);

    let venue_data = r#"{"name": "Venue", "city": "SF", "state": "CA", "address": "1 Main St", "phone": ""}"#;
    let venue: NewVenue = serde_json::from_str(&venue_data).unwrap();
    assert_eq!(venue.phone, None);

    let venue_data = r#"{"name": "Venue", "city": "SF", "state": "CA", "address": "1 Main St", "phone": "555-1234"}"#;
    let venue: NewVenue = serde_json::from_str(&venue_data).unwrap();
    assert_eq!(venue.phone, Some("555-1234".to_string()));
}
