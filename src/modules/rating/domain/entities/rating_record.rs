use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::modules::rating::domain::value_objects::{CategoryScores, Genre};
use crate::shared::errors::{AppError, AppResult};

/// One persisted evaluation of an anime title.
///
/// The wire format matches the original export contract: camelCase field
/// names, `average` as a two-decimal string, `dateAdded` as an RFC 3339
/// timestamp. Records imported from legacy exports have no `id`; one is
/// generated on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub name: String,
    #[serde(flatten)]
    pub scores: CategoryScores,
    #[serde(with = "two_decimal")]
    pub average: f64,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<Genre>,
    #[serde(
        default,
        with = "flexible_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub release_year: Option<i32>,
    #[serde(default, with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub studio: Option<String>,
    #[serde(
        default,
        with = "flexible_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub episodes: Option<i32>,
    #[serde(default, with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, with = "opt_text", skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub date_added: DateTime<Utc>,
}

impl RatingRecord {
    /// Build a record from a fully scored submission. The average is computed
    /// here, once, and is never recomputed from the categories afterwards.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: String,
        scores: CategoryScores,
        genres: Vec<Genre>,
        release_year: Option<i32>,
        studio: Option<String>,
        episodes: Option<i32>,
        notes: Option<String>,
        image: Option<String>,
    ) -> AppResult<Self> {
        let average = scores.average().ok_or_else(|| {
            AppError::InternalError("Cannot create a record from incomplete scores".to_string())
        })?;

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            scores,
            average: round_to_two_decimals(average),
            genres,
            release_year,
            studio,
            episodes,
            notes,
            image,
            date_added: Utc::now(),
        })
    }

    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres.contains(&genre)
    }

    /// The display value of the average, as persisted ("8.00").
    pub fn average_display(&self) -> String {
        format!("{:.2}", self.average)
    }
}

pub fn round_to_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// `average` is persisted as its two-decimal display string; numbers are
/// accepted on read for hand-edited files.
mod two_decimal {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawAverage {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{:.2}", value))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<f64, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawAverage::deserialize(deserializer)? {
            RawAverage::Number(value) => Ok(value),
            RawAverage::Text(text) => text
                .trim()
                .parse::<f64>()
                .map_err(|_| D::Error::custom(format!("invalid average: {:?}", text))),
        }
    }
}

/// Optional integers arrive as JSON numbers or as the original form's string
/// values ("2013", "" for unset).
mod flexible_int {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawInt {
        Number(i64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<i32>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(n) => serializer.serialize_i32(*n),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawInt>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawInt::Number(n)) => Ok(Some(n as i32)),
            Some(RawInt::Text(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    trimmed
                        .parse::<i32>()
                        .map(Some)
                        .map_err(|_| D::Error::custom(format!("invalid number: {:?}", text)))
                }
            }
        }
    }
}

/// Optional text fields; the original form stores "" for untouched inputs.
mod opt_text {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(text) => serializer.serialize_str(text),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Option::<String>::deserialize(deserializer)?.filter(|text| !text.trim().is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, score: f64) -> RatingRecord {
        RatingRecord::new(
            name.to_string(),
            CategoryScores::complete(score, score, score, score, score, score),
            vec![Genre::Action],
            Some(2020),
            None,
            None,
            None,
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_average_is_computed_at_creation() {
        let scores = CategoryScores::complete(8.0, 7.5, 9.0, 6.5, 8.5, 7.0);
        let record = RatingRecord::new(
            "Vinland Saga".to_string(),
            scores,
            vec![],
            None,
            None,
            None,
            None,
            None,
        )
        .unwrap();

        let expected = round_to_two_decimals(scores.average().unwrap());
        assert_eq!(record.average, expected);
        assert_eq!(record.average_display(), "7.75");
    }

    #[test]
    fn test_incomplete_scores_cannot_form_a_record() {
        let mut scores = CategoryScores::complete(8.0, 8.0, 8.0, 8.0, 8.0, 8.0);
        scores.animation = None;

        let result = RatingRecord::new(
            "Partial".to_string(),
            scores,
            vec![],
            None,
            None,
            None,
            None,
            None,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_each_record_gets_a_distinct_id() {
        let a = record("A", 8.0);
        let b = record("A", 8.0);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_wire_format_matches_export_contract() {
        let record = record("Mushishi", 8.5);
        let json = serde_json::to_value(&record).unwrap();

        assert_eq!(json["name"], "Mushishi");
        assert_eq!(json["average"], "8.50");
        assert_eq!(json["worldBuilding"], 8.5);
        assert_eq!(json["releaseYear"], 2020);
        assert_eq!(json["genres"][0], "Action");
        assert!(json["dateAdded"].is_string());
    }

    #[test]
    fn test_legacy_export_without_id_deserializes() {
        let json = r#"{
            "name": "Attack on Titan",
            "plot": "9", "story": "8.5", "characters": "9",
            "soundtracks": "9.5", "animation": "9", "worldBuilding": "9.5",
            "average": "9.08",
            "genres": ["Action", "Drama"],
            "releaseYear": "2013",
            "studio": "",
            "episodes": "87",
            "notes": "",
            "image": "",
            "dateAdded": "2024-03-01T12:00:00.000Z"
        }"#;

        let record: RatingRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.name, "Attack on Titan");
        assert_eq!(record.average, 9.08);
        assert_eq!(record.release_year, Some(2013));
        assert_eq!(record.episodes, Some(87));
        assert_eq!(record.studio, None);
        assert_eq!(record.genres, vec![Genre::Action, Genre::Drama]);
        assert_eq!(record.scores.world_building, Some(9.5));
    }

    #[test]
    fn test_round_trip_preserves_identity_and_values() {
        let original = record("Frieren", 9.5);
        let json = serde_json::to_string(&original).unwrap();
        let back: RatingRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, original.id);
        assert_eq!(back.name, original.name);
        assert_eq!(back.average, original.average);
        assert_eq!(back.date_added, original.date_added);
    }

    #[test]
    fn test_unknown_genre_string_is_rejected() {
        let json = r#"{
            "name": "X",
            "plot": 5, "story": 5, "characters": 5,
            "soundtracks": 5, "animation": 5, "worldBuilding": 5,
            "average": "5.00",
            "genres": ["Cooking"],
            "dateAdded": "2024-03-01T12:00:00Z"
        }"#;
        assert!(serde_json::from_str::<RatingRecord>(json).is_err());
    }
}
