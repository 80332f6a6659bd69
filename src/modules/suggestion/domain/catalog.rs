use serde::{Deserialize, Serialize};

use crate::modules::rating::domain::entities::NewRating;

/// A known title offered while the user types. Stands in for a real anime
/// database lookup; there is no backing service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleSuggestion {
    pub title: String,
    pub year: i32,
    pub image: String,
}

impl TitleSuggestion {
    pub fn new(title: &str, year: i32) -> Self {
        Self {
            title: title.to_string(),
            year,
            image: "https://via.placeholder.com/50".to_string(),
        }
    }

    /// Prefill a draft from this suggestion, the way picking a search result
    /// populates the rating form.
    pub fn apply_to(&self, draft: &mut NewRating) {
        draft.name = self.title.clone();
        draft.release_year = Some(self.year);
        draft.image = Some(self.image.clone());
    }
}

/// The built-in catalog of well-known titles.
pub fn builtin_catalog() -> Vec<TitleSuggestion> {
    vec![
        TitleSuggestion::new("Naruto", 2002),
        TitleSuggestion::new("Attack on Titan", 2013),
        TitleSuggestion::new("Death Note", 2006),
        TitleSuggestion::new("One Piece", 1999),
        TitleSuggestion::new("My Hero Academia", 2016),
        TitleSuggestion::new("Fullmetal Alchemist: Brotherhood", 2009),
        TitleSuggestion::new("Steins;Gate", 2011),
        TitleSuggestion::new("Cowboy Bebop", 1998),
        TitleSuggestion::new("Hunter x Hunter", 2011),
        TitleSuggestion::new("Demon Slayer: Kimetsu no Yaiba", 2019),
        TitleSuggestion::new("Jujutsu Kaisen", 2020),
        TitleSuggestion::new("Spy x Family", 2022),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_to_prefills_the_draft() {
        let suggestion = TitleSuggestion::new("Death Note", 2006);
        let mut draft = NewRating::default();

        suggestion.apply_to(&mut draft);

        assert_eq!(draft.name, "Death Note");
        assert_eq!(draft.release_year, Some(2006));
        assert!(draft.image.is_some());
    }

    #[test]
    fn test_builtin_catalog_has_no_duplicate_titles() {
        let catalog = builtin_catalog();
        for (i, a) in catalog.iter().enumerate() {
            for b in catalog.iter().skip(i + 1) {
                assert_ne!(a.title, b.title);
            }
        }
    }
}
