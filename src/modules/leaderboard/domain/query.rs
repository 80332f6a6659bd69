use serde::{Deserialize, Serialize};

use crate::modules::rating::domain::{entities::RatingRecord, value_objects::Genre};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    #[default]
    Average,
    Name,
    ReleaseYear,
    DateAdded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Genre filter; `All` passes every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GenreFilter {
    #[default]
    All,
    Only(Genre),
}

impl GenreFilter {
    fn matches(&self, record: &RatingRecord) -> bool {
        match self {
            GenreFilter::All => true,
            GenreFilter::Only(genre) => record.has_genre(*genre),
        }
    }
}

/// A leaderboard view request: search text, genre filter, sort key and
/// direction. Applying it never mutates the underlying collection.
#[derive(Debug, Clone, Default)]
pub struct LeaderboardQuery {
    pub search: String,
    pub genre: GenreFilter,
    pub sort_by: SortKey,
    pub direction: SortDirection,
}

impl LeaderboardQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_genre(mut self, genre: Genre) -> Self {
        self.genre = GenreFilter::Only(genre);
        self
    }

    pub fn sorted_by(mut self, key: SortKey, direction: SortDirection) -> Self {
        self.sort_by = key;
        self.direction = direction;
        self
    }

    /// Clicking a sort header: the active key flips direction, a new key
    /// takes over starting descending.
    pub fn toggle_sort(&mut self, key: SortKey) {
        if self.sort_by == key {
            self.direction = self.direction.flipped();
        } else {
            self.sort_by = key;
            self.direction = SortDirection::Descending;
        }
    }

    /// Filter and order a snapshot of the collection. The sort is stable:
    /// ties keep their insertion order in either direction.
    pub fn apply(&self, records: &[RatingRecord]) -> Vec<RatingRecord> {
        let needle = self.search.trim().to_lowercase();

        let mut result: Vec<RatingRecord> = records
            .iter()
            .filter(|record| needle.is_empty() || record.name.to_lowercase().contains(&needle))
            .filter(|record| self.genre.matches(record))
            .cloned()
            .collect();

        result.sort_by(|a, b| {
            let ordering = match self.sort_by {
                SortKey::Average => a.average.total_cmp(&b.average),
                SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
                SortKey::ReleaseYear => a.release_year.cmp(&b.release_year),
                SortKey::DateAdded => a.date_added.cmp(&b.date_added),
            };
            match self.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });

        result
    }
}

/// Genres present in the collection, alphabetically, for the filter dropdown.
pub fn available_genres(records: &[RatingRecord]) -> Vec<Genre> {
    let mut present: Vec<Genre> = Genre::ALL
        .into_iter()
        .filter(|genre| records.iter().any(|record| record.has_genre(*genre)))
        .collect();
    present.sort_by_key(|genre| genre.name());
    present
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::rating::domain::value_objects::CategoryScores;

    fn record(name: &str, score: f64, genres: Vec<Genre>, year: Option<i32>) -> RatingRecord {
        RatingRecord::new(
            name.to_string(),
            CategoryScores::complete(score, score, score, score, score, score),
            genres,
            year,
            None,
            None,
            None,
            None,
        )
        .unwrap()
    }

    fn sample() -> Vec<RatingRecord> {
        vec![
            record("Attack on Titan", 9.0, vec![Genre::Action, Genre::Drama], Some(2013)),
            record("Bleach", 7.0, vec![Genre::Action, Genre::Shounen], Some(2004)),
            record("Violet Evergarden", 9.0, vec![Genre::Drama], Some(2018)),
            record("K-On!", 7.0, vec![Genre::Music, Genre::SliceOfLife], None),
        ]
    }

    fn names(records: &[RatingRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let result = LeaderboardQuery::new().with_search("tItAn").apply(&sample());
        assert_eq!(names(&result), vec!["Attack on Titan"]);
    }

    #[test]
    fn test_genre_filter_and_search_combine() {
        let result = LeaderboardQuery::new()
            .with_search("e")
            .with_genre(Genre::Action)
            .apply(&sample());
        assert_eq!(names(&result), vec!["Bleach"]);
    }

    #[test]
    fn test_absent_genre_yields_empty_result() {
        let result = LeaderboardQuery::new()
            .with_genre(Genre::Horror)
            .apply(&sample());
        assert!(result.is_empty());
    }

    #[test]
    fn test_all_genres_passes_everything() {
        let result = LeaderboardQuery::new().apply(&sample());
        // Default sort: average descending, ties in insertion order.
        assert_eq!(
            names(&result),
            vec!["Attack on Titan", "Violet Evergarden", "Bleach", "K-On!"]
        );
    }

    #[test]
    fn test_ties_keep_insertion_order_in_both_directions() {
        let descending = LeaderboardQuery::new()
            .sorted_by(SortKey::Average, SortDirection::Descending)
            .apply(&sample());
        assert_eq!(
            names(&descending),
            vec!["Attack on Titan", "Violet Evergarden", "Bleach", "K-On!"]
        );

        let ascending = LeaderboardQuery::new()
            .sorted_by(SortKey::Average, SortDirection::Ascending)
            .apply(&sample());
        assert_eq!(
            names(&ascending),
            vec!["Bleach", "K-On!", "Attack on Titan", "Violet Evergarden"]
        );
    }

    #[test]
    fn test_sort_reverses_exactly_without_ties() {
        let distinct = vec![
            record("A", 3.0, vec![], None),
            record("B", 9.0, vec![], None),
            record("C", 6.0, vec![], None),
        ];

        let down = LeaderboardQuery::new()
            .sorted_by(SortKey::Average, SortDirection::Descending)
            .apply(&distinct);
        let up = LeaderboardQuery::new()
            .sorted_by(SortKey::Average, SortDirection::Ascending)
            .apply(&distinct);

        let mut reversed = names(&down);
        reversed.reverse();
        assert_eq!(reversed, names(&up));
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let records = vec![
            record("bleach", 5.0, vec![], None),
            record("Akira", 5.0, vec![], None),
        ];
        let result = LeaderboardQuery::new()
            .sorted_by(SortKey::Name, SortDirection::Ascending)
            .apply(&records);
        assert_eq!(names(&result), vec!["Akira", "bleach"]);
    }

    #[test]
    fn test_missing_release_year_sorts_before_known_years() {
        let result = LeaderboardQuery::new()
            .sorted_by(SortKey::ReleaseYear, SortDirection::Ascending)
            .apply(&sample());
        assert_eq!(
            names(&result),
            vec!["K-On!", "Bleach", "Attack on Titan", "Violet Evergarden"]
        );
    }

    #[test]
    fn test_toggle_same_key_flips_direction() {
        let mut query = LeaderboardQuery::new();
        assert_eq!(query.direction, SortDirection::Descending);

        query.toggle_sort(SortKey::Average);
        assert_eq!(query.direction, SortDirection::Ascending);

        query.toggle_sort(SortKey::Average);
        assert_eq!(query.direction, SortDirection::Descending);
    }

    #[test]
    fn test_toggle_new_key_resets_to_descending() {
        let mut query = LeaderboardQuery::new();
        query.toggle_sort(SortKey::Average); // now ascending

        query.toggle_sort(SortKey::Name);
        assert_eq!(query.sort_by, SortKey::Name);
        assert_eq!(query.direction, SortDirection::Descending);
    }

    #[test]
    fn test_available_genres_lists_present_tags_alphabetically() {
        let genres = available_genres(&sample());
        assert_eq!(
            genres,
            vec![
                Genre::Action,
                Genre::Drama,
                Genre::Music,
                Genre::Shounen,
                Genre::SliceOfLife,
            ]
        );
    }

    #[test]
    fn test_apply_leaves_input_untouched() {
        let records = sample();
        let before = names(&records);
        let _ = LeaderboardQuery::new()
            .sorted_by(SortKey::Name, SortDirection::Ascending)
            .apply(&records);
        assert_eq!(names(&records), before);
    }
}
