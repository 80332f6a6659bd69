use crate::shared::errors::AppError;

pub struct Validator;

impl Validator {
    pub fn validate_anime_name(name: &str) -> Result<(), AppError> {
        if name.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Anime name is required".to_string(),
            ));
        }
        if name.len() > 255 {
            return Err(AppError::InvalidInput(
                "Anime name too long (max 255 characters)".to_string(),
            ));
        }
        Ok(())
    }

    /// Category scores are awarded on a 0-10 scale in half-point steps.
    pub fn validate_score(score: f64) -> Result<(), AppError> {
        if !(0.0..=10.0).contains(&score) {
            return Err(AppError::InvalidInput(
                "Score must be between 0 and 10".to_string(),
            ));
        }
        let doubled = score * 2.0;
        if (doubled - doubled.round()).abs() > 1e-9 {
            return Err(AppError::InvalidInput(
                "Score must be a multiple of 0.5".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_name_rejected() {
        assert!(Validator::validate_anime_name("").is_err());
        assert!(Validator::validate_anime_name("   ").is_err());
        assert!(Validator::validate_anime_name("Steins;Gate").is_ok());
    }

    #[test]
    fn test_overlong_name_rejected() {
        let name = "a".repeat(256);
        assert!(Validator::validate_anime_name(&name).is_err());
    }

    #[test]
    fn test_score_range() {
        assert!(Validator::validate_score(0.0).is_ok());
        assert!(Validator::validate_score(10.0).is_ok());
        assert!(Validator::validate_score(-0.5).is_err());
        assert!(Validator::validate_score(10.5).is_err());
    }

    #[test]
    fn test_score_half_point_granularity() {
        assert!(Validator::validate_score(7.5).is_ok());
        assert!(Validator::validate_score(7.3).is_err());
        assert!(Validator::validate_score(9.99).is_err());
    }
}
