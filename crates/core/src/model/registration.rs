use thiserror::Error;

/// Class label used when the school field carries no comma-separated class.
pub const DEFAULT_CLASS_LABEL: &str = "3 класс";

/// Raw form input as typed into the registration view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub student_name: String,
    pub school: String,
    pub parent_name: String,
    pub email: String,
    pub phone: String,
}

/// Validated payload for the register endpoint, with the school/class
/// composite already split.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistrationRequest {
    pub student_name: String,
    pub school: String,
    pub class_name: String,
    pub parent_name: String,
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegistrationError {
    #[error("required field is empty: {field}")]
    EmptyField { field: &'static str },
}

impl RegistrationForm {
    /// Validate the form and derive the school/class pair.
    ///
    /// The composite field is split on the first comma: the part before
    /// is the school, the part after is the class label. Without a
    /// comma the whole value is the school and the class label falls
    /// back to [`DEFAULT_CLASS_LABEL`].
    ///
    /// # Errors
    ///
    /// Returns `RegistrationError::EmptyField` for the first field that
    /// is empty after trimming.
    pub fn validate(&self) -> Result<RegistrationRequest, RegistrationError> {
        let student_name = required(&self.student_name, "student_name")?;
        let school_raw = required(&self.school, "school")?;
        let parent_name = required(&self.parent_name, "parent_name")?;
        let email = required(&self.email, "email")?;
        let phone = required(&self.phone, "phone")?;

        let (school, class_name) = split_school_class(&school_raw);

        Ok(RegistrationRequest {
            student_name,
            school,
            class_name,
            parent_name,
            email,
            phone,
        })
    }
}

fn required(value: &str, field: &'static str) -> Result<String, RegistrationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(RegistrationError::EmptyField { field });
    }
    Ok(trimmed.to_string())
}

/// Split "Школа №1, 3-А класс" into school and class label.
///
/// The class label is never empty: a missing or blank tail falls back
/// to [`DEFAULT_CLASS_LABEL`].
#[must_use]
pub fn split_school_class(composite: &str) -> (String, String) {
    match composite.split_once(',') {
        Some((school, class)) if !class.trim().is_empty() => {
            (school.trim().to_string(), class.trim().to_string())
        }
        Some((school, _)) => (school.trim().to_string(), DEFAULT_CLASS_LABEL.to_string()),
        None => (
            composite.trim().to_string(),
            DEFAULT_CLASS_LABEL.to_string(),
        ),
    }
}
