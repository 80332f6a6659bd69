use serde::{Deserialize, Serialize};

use crate::modules::rating::domain::value_objects::{CategoryScores, Genre, RatingCategory};

/// A submission draft as it comes off the rating form: nothing is guaranteed
/// yet, scores may be partially filled in. Runs through `RecordValidator`
/// before it can become a `RatingRecord`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRating {
    #[serde(default)]
    pub name: String,
    #[serde(flatten)]
    pub scores: CategoryScores,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub release_year: Option<i32>,
    #[serde(default)]
    pub studio: Option<String>,
    #[serde(default)]
    pub episodes: Option<i32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl NewRating {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_scores(mut self, scores: CategoryScores) -> Self {
        self.scores = scores;
        self
    }

    pub fn with_score(mut self, category: RatingCategory, score: f64) -> Self {
        match category {
            RatingCategory::Plot => self.scores.plot = Some(score),
            RatingCategory::Story => self.scores.story = Some(score),
            RatingCategory::Characters => self.scores.characters = Some(score),
            RatingCategory::Soundtracks => self.scores.soundtracks = Some(score),
            RatingCategory::Animation => self.scores.animation = Some(score),
            RatingCategory::WorldBuilding => self.scores.world_building = Some(score),
        }
        self
    }

    pub fn with_genres(mut self, genres: Vec<Genre>) -> Self {
        self.genres = genres;
        self
    }

    pub fn with_release_year(mut self, year: i32) -> Self {
        self.release_year = Some(year);
        self
    }

    /// Toggle a genre tag, the way the form's checkboxes behave.
    pub fn toggle_genre(&mut self, genre: Genre) {
        if let Some(position) = self.genres.iter().position(|g| *g == genre) {
            self.genres.remove(position);
        } else {
            self.genres.push(genre);
        }
    }
}
