//! View Models
//!
//! Transient, client-held shapes decoded from backend responses. Every
//! optional field decodes leniently: missing or `null` values fall back to
//! defaults so that a partial payload renders fallback content instead of
//! failing.

pub mod compare;
pub mod gems;
pub mod insights;
pub mod personality;
pub mod roast;
pub mod stats;

pub use compare::{ComparedPlayer, ComparisonResult};
pub use gems::{Gem, HiddenGemsResult};
pub use insights::InsightsResult;
pub use personality::{PersonalityProfile, PersonalityTrait};
pub use roast::RoastResult;
pub use stats::{
    Achievements, ChampionStats, MonthlyRecord, PlayerResponse, PlayerStats, Region,
    RegionList, SummonerInfo,
};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Decode `null` the same way as a missing field
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Unwrap `{ key: {...} }` envelopes, passing bare objects through.
///
/// The backend wraps most AI payloads (`{"insights": {...}}`,
/// `{"personality": {...}}`) but earlier revisions returned them bare.
pub(crate) fn unwrap_envelope(value: Value, key: &str) -> Value {
    match value {
        Value::Object(mut map) => match map.remove(key) {
            Some(inner @ Value::Object(_)) => inner,
            Some(other) => {
                map.insert(key.to_string(), other);
                Value::Object(map)
            }
            None => Value::Object(map),
        },
        other => other,
    }
}
