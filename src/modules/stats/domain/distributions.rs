use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::modules::rating::domain::{
    entities::RatingRecord,
    value_objects::{Genre, RatingCategory},
};

/// Fixed half-open rating buckets: [0,2) [2,4) [4,6) [6,8) [8,10], the last
/// one closed so a perfect 10 lands in it.
pub const RATING_BUCKET_LABELS: [&str; 5] = ["0-2", "2-4", "4-6", "6-8", "8-10"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingDistribution {
    pub counts: [usize; 5],
}

impl RatingDistribution {
    pub fn calculate_from_records(records: &[RatingRecord]) -> Self {
        let mut counts = [0usize; 5];
        for record in records {
            counts[bucket_index(record.average)] += 1;
        }
        Self { counts }
    }

    /// Buckets in fixed order, zero counts included.
    pub fn buckets(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        RATING_BUCKET_LABELS
            .into_iter()
            .zip(self.counts.iter().copied())
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

fn bucket_index(average: f64) -> usize {
    if average < 2.0 {
        0
    } else if average < 4.0 {
        1
    } else if average < 6.0 {
        2
    } else if average < 8.0 {
        3
    } else {
        4
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenreCount {
    pub genre: Genre,
    pub count: usize,
}

/// Records per genre, most common first. A record tagged with N genres
/// contributes to N counts. Ties keep first-encounter order.
pub fn genre_distribution(records: &[RatingRecord]) -> Vec<GenreCount> {
    let mut counts: Vec<GenreCount> = Vec::new();
    for record in records {
        for genre in &record.genres {
            match counts.iter_mut().find(|entry| entry.genre == *genre) {
                Some(entry) => entry.count += 1,
                None => counts.push(GenreCount {
                    genre: *genre,
                    count: 1,
                }),
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearCount {
    pub year: i32,
    pub count: usize,
}

/// Records per release year, ascending. Records without a year are left out
/// entirely rather than bucketed under "unknown".
pub fn year_distribution(records: &[RatingRecord]) -> Vec<YearCount> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for record in records {
        if let Some(year) = record.release_year {
            *counts.entry(year).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(year, count)| YearCount { year, count })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryAverage {
    pub category: RatingCategory,
    pub average: f64,
}

/// Mean score per category across the whole collection.
///
/// A record missing a category still counts in the denominator; its absent
/// score contributes 0 to the sum. Partially scored records therefore pull
/// the category mean down.
pub fn category_averages(records: &[RatingRecord]) -> Vec<CategoryAverage> {
    RatingCategory::ALL
        .into_iter()
        .map(|category| {
            let average = if records.is_empty() {
                0.0
            } else {
                let sum: f64 = records
                    .iter()
                    .map(|record| record.scores.get(category).unwrap_or(0.0))
                    .sum();
                sum / records.len() as f64
            };
            CategoryAverage { category, average }
        })
        .collect()
}
