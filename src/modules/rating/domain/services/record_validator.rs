use crate::modules::rating::domain::entities::NewRating;
use crate::modules::rating::domain::value_objects::RatingCategory;
use crate::shared::errors::{AppError, ValidationErrors};
use crate::shared::utils::Validator;

/// Field-level validation of a submission draft.
///
/// Every failing field is reported in the same pass, keyed by its wire name,
/// so the form can mark all of them at once.
pub struct RecordValidator;

impl RecordValidator {
    pub fn validate(draft: &NewRating) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if let Err(err) = Validator::validate_anime_name(&draft.name) {
            errors.add("name", message_of(err));
        }

        for category in RatingCategory::ALL {
            match draft.scores.get(category) {
                None => {
                    errors.add(
                        category.key(),
                        format!("Please rate the {}", category.label()),
                    );
                }
                Some(score) => {
                    if let Err(err) = Validator::validate_score(score) {
                        errors.add(category.key(), message_of(err));
                    }
                }
            }
        }

        errors.into_result()
    }
}

fn message_of(err: AppError) -> String {
    match err {
        AppError::InvalidInput(message) => message,
        other => other.to_string(),
    }
}
