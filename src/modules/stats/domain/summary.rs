use serde::{Deserialize, Serialize};

use crate::modules::rating::domain::{entities::RatingRecord, value_objects::Genre};

/// Headline figures for the stats page, recomputed from the collection on
/// every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_anime: usize,
    /// Mean of the stored record averages; 0 for an empty collection.
    pub avg_rating: f64,
    pub highest_rated: Option<String>,
    pub recently_added: Option<String>,
    pub most_rated_genre: Option<Genre>,
}

impl StatsSummary {
    pub fn calculate_from_records(records: &[RatingRecord]) -> Self {
        let total_anime = records.len();

        let avg_rating = if records.is_empty() {
            0.0
        } else {
            records.iter().map(|record| record.average).sum::<f64>() / total_anime as f64
        };

        let highest_rated = highest_rated_record(records).map(|record| record.name.clone());

        let recently_added = records
            .iter()
            .reduce(|best, candidate| {
                // Strictly-later wins, so the first occurrence keeps a tie.
                if candidate.date_added > best.date_added {
                    candidate
                } else {
                    best
                }
            })
            .map(|record| record.name.clone());

        Self {
            total_anime,
            avg_rating,
            highest_rated,
            recently_added,
            most_rated_genre: most_rated_genre(records),
        }
    }

    /// The mean rating as displayed ("5.00").
    pub fn avg_rating_display(&self) -> String {
        format!("{:.2}", self.avg_rating)
    }
}

/// The record with the maximum average; ties go to the earliest-inserted
/// record, matching the first element of a stable descending sort.
pub fn highest_rated_record(records: &[RatingRecord]) -> Option<&RatingRecord> {
    records.iter().reduce(|best, candidate| {
        if candidate.average > best.average {
            candidate
        } else {
            best
        }
    })
}

/// The genre appearing in the most records; ties go to the genre encountered
/// first while walking the collection in order.
fn most_rated_genre(records: &[RatingRecord]) -> Option<Genre> {
    let mut counts: Vec<(Genre, usize)> = Vec::new();
    for record in records {
        for genre in &record.genres {
            match counts.iter_mut().find(|(g, _)| g == genre) {
                Some((_, count)) => *count += 1,
                None => counts.push((*genre, 1)),
            }
        }
    }

    counts
        .into_iter()
        .reduce(|best, candidate| if candidate.1 > best.1 { candidate } else { best })
        .map(|(genre, _)| genre)
}
