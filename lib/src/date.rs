// Dropbox is using RFC2822
// Sat, 21 Aug 2010 22:31:20 +0000

use chrono::{DateTime, Utc};
use serde::{self, Deserialize, Deserializer, Serializer};

fn parse<E: serde::de::Error>(value: &str) -> Result<DateTime<Utc>, E> {
    DateTime::parse_from_rfc2822(value)
        .map(|fixed| fixed.into())
        .map_err(E::custom)
}

pub fn serialize<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = date.to_rfc2822();
    serializer.serialize_str(&value)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse(&value)
}

/// Same format, for the fields that are not always provided
pub mod optional {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(date: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match date {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|value| super::parse(&value))
            .transpose()
    }
}
