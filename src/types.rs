//! Shared result types.

/// Outcome of a check that can pass, pass with remarks, or fail.
///
/// `Invalid` carries the warnings gathered before failing alongside the
/// errors.
///
/// ```rust
/// use otsxml::types::ValidationResult;
///
/// let result: ValidationResult = ValidationResult::Invalid(
///     vec![],
///     vec!["duplicate GtuType id 'CAR'".to_string()],
/// );
/// assert!(result.is_invalid());
/// assert_eq!(result.errors().len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T = ()> {
    Valid(T),
    Warnings(T, Vec<String>),
    Invalid(Vec<String>, Vec<String>),
}

impl<T> ValidationResult<T> {
    pub fn is_valid(&self) -> bool {
        !self.is_invalid()
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, ValidationResult::Invalid(_, _))
    }

    pub fn warnings(&self) -> &[String] {
        match self {
            ValidationResult::Valid(_) => &[],
            ValidationResult::Warnings(_, warnings) | ValidationResult::Invalid(warnings, _) => {
                warnings
            }
        }
    }

    pub fn errors(&self) -> &[String] {
        match self {
            ValidationResult::Invalid(_, errors) => errors,
            _ => &[],
        }
    }

    /// Build a result from collected messages.
    pub fn from_messages(value: T, warnings: Vec<String>, errors: Vec<String>) -> Self {
        if !errors.is_empty() {
            ValidationResult::Invalid(warnings, errors)
        } else if !warnings.is_empty() {
            ValidationResult::Warnings(value, warnings)
        } else {
            ValidationResult::Valid(value)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_messages() {
        let valid: ValidationResult = ValidationResult::from_messages((), vec![], vec![]);
        assert_eq!(valid, ValidationResult::Valid(()));

        let warned: ValidationResult = ValidationResult::from_messages((), vec!["w".into()], vec![]);
        assert!(warned.is_valid());
        assert_eq!(warned.warnings(), ["w".to_string()]);

        let invalid: ValidationResult =
            ValidationResult::from_messages((), vec!["w".into()], vec!["e".into()]);
        assert!(invalid.is_invalid());
        assert_eq!(invalid.errors(), ["e".to_string()]);
        assert_eq!(invalid.warnings().len(), 1);
    }
}
