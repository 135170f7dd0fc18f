// RFC3339 serde adapter for event timestamps, used via #[serde(with)].
pub mod serializer {
    use chrono::{DateTime, Utc};
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        time.to_rfc3339().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let raw: String = Deserialize::deserialize(deserializer)?;
        let time = DateTime::parse_from_rfc3339(raw.as_str()).map_err(D::Error::custom)?;
        Ok(time.with_timezone(&Utc))
    }
}
