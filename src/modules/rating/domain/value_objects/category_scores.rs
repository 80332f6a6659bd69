use regex::Regex;
use serde::{Deserialize, Serialize};

/// The six criteria every submission is rated on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RatingCategory {
    Plot,
    Story,
    Characters,
    Soundtracks,
    Animation,
    WorldBuilding,
}

impl RatingCategory {
    pub const ALL: [RatingCategory; 6] = [
        RatingCategory::Plot,
        RatingCategory::Story,
        RatingCategory::Characters,
        RatingCategory::Soundtracks,
        RatingCategory::Animation,
        RatingCategory::WorldBuilding,
    ];

    /// Wire name of the category, camelCase as persisted.
    pub fn key(&self) -> &'static str {
        match self {
            RatingCategory::Plot => "plot",
            RatingCategory::Story => "story",
            RatingCategory::Characters => "characters",
            RatingCategory::Soundtracks => "soundtracks",
            RatingCategory::Animation => "animation",
            RatingCategory::WorldBuilding => "worldBuilding",
        }
    }

    /// Human-readable form of the wire name: camelCase split into
    /// space-separated lowercase words (`worldBuilding` -> `world building`).
    pub fn label(&self) -> String {
        let re = Regex::new(r"([A-Z])").unwrap();
        re.replace_all(self.key(), " $1").to_lowercase()
    }
}

impl std::fmt::Display for RatingCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// The six category scores of a record.
///
/// Fields are optional: submissions are validated to completeness, but
/// imported legacy data may carry partially scored records and must stay
/// representable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryScores {
    #[serde(default, with = "flexible_score", skip_serializing_if = "Option::is_none")]
    pub plot: Option<f64>,
    #[serde(default, with = "flexible_score", skip_serializing_if = "Option::is_none")]
    pub story: Option<f64>,
    #[serde(default, with = "flexible_score", skip_serializing_if = "Option::is_none")]
    pub characters: Option<f64>,
    #[serde(default, with = "flexible_score", skip_serializing_if = "Option::is_none")]
    pub soundtracks: Option<f64>,
    #[serde(default, with = "flexible_score", skip_serializing_if = "Option::is_none")]
    pub animation: Option<f64>,
    #[serde(default, with = "flexible_score", skip_serializing_if = "Option::is_none")]
    pub world_building: Option<f64>,
}

impl CategoryScores {
    pub fn complete(
        plot: f64,
        story: f64,
        characters: f64,
        soundtracks: f64,
        animation: f64,
        world_building: f64,
    ) -> Self {
        Self {
            plot: Some(plot),
            story: Some(story),
            characters: Some(characters),
            soundtracks: Some(soundtracks),
            animation: Some(animation),
            world_building: Some(world_building),
        }
    }

    pub fn get(&self, category: RatingCategory) -> Option<f64> {
        match category {
            RatingCategory::Plot => self.plot,
            RatingCategory::Story => self.story,
            RatingCategory::Characters => self.characters,
            RatingCategory::Soundtracks => self.soundtracks,
            RatingCategory::Animation => self.animation,
            RatingCategory::WorldBuilding => self.world_building,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (RatingCategory, Option<f64>)> + '_ {
        RatingCategory::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    pub fn is_complete(&self) -> bool {
        RatingCategory::ALL
            .into_iter()
            .all(|category| self.get(category).is_some())
    }

    /// Arithmetic mean of the six scores. Defined only for a fully scored
    /// record.
    pub fn average(&self) -> Option<f64> {
        let mut sum = 0.0;
        for category in RatingCategory::ALL {
            sum += self.get(category)?;
        }
        Some(sum / RatingCategory::ALL.len() as f64)
    }
}

/// Accepts scores as JSON numbers or as the stringified form values the
/// original exports carry ("8.5", "" for unset). Always serializes as numbers.
mod flexible_score {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawScore {
        Number(f64),
        Text(String),
    }

    pub fn serialize<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(score) => serializer.serialize_f64(*score),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<RawScore>::deserialize(deserializer)? {
            None => Ok(None),
            Some(RawScore::Number(score)) => Ok(Some(score)),
            Some(RawScore::Text(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Ok(None)
                } else {
                    trimmed
                        .parse::<f64>()
                        .map(Some)
                        .map_err(|_| D::Error::custom(format!("invalid score: {:?}", text)))
                }
            }
        }
    }
}
