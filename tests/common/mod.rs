use animescore::modules::rating::{CategoryScores, Genre, NewRating};

/// A fully scored draft ready to submit.
pub fn draft(name: &str, score: f64, genres: Vec<Genre>, year: Option<i32>) -> NewRating {
    let mut draft = NewRating::named(name)
        .with_scores(CategoryScores::complete(
            score, score, score, score, score, score,
        ))
        .with_genres(genres);
    if let Some(year) = year {
        draft = draft.with_release_year(year);
    }
    draft
}
