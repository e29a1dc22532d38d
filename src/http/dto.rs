//! Form-backing objects for the person pages.
//!
//! Both forms tolerate missing fields (`#[serde(default)]`) so presence
//! checks happen in the handlers, not as deserialization failures.

use serde::{Deserialize, Serialize};

use super::error::AppError;
use crate::models::Person;

/// Form backing the add-person page.
///
/// `id` is optional; a fresh UUID is generated when it is absent or empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Form carrying a full person record for the edit and delete flows.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPersonForm {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

impl EditPersonForm {
    /// Build a [`Person`] from the submitted fields.
    ///
    /// A missing or empty `id` is a bad request; the names are passed through
    /// as submitted (empty names are tolerated here, only the add flow
    /// validates them).
    pub fn into_person(self) -> Result<Person, AppError> {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::BadRequest("id is required".to_string()))?;

        Ok(Person::new(
            id,
            self.first_name.unwrap_or_default(),
            self.last_name.unwrap_or_default(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edit_form_builds_a_person() {
        let form = EditPersonForm {
            id: Some("12345".to_string()),
            first_name: Some("Mark".to_string()),
            last_name: Some("Zuckerberg".to_string()),
        };
        let person = form.into_person().unwrap();
        assert_eq!(person, Person::new("12345", "Mark", "Zuckerberg"));
    }

    #[test]
    fn edit_form_without_id_is_rejected() {
        let form = EditPersonForm::default();
        assert!(matches!(form.into_person(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn edit_form_with_empty_id_is_rejected() {
        let form = EditPersonForm {
            id: Some(String::new()),
            ..Default::default()
        };
        assert!(form.into_person().is_err());
    }

    #[test]
    fn person_form_tolerates_missing_id() {
        let form: PersonForm =
            serde_json::from_value(serde_json::json!({"firstName": "Steve", "lastName": "Jobs"}))
                .unwrap();
        assert_eq!(form.first_name.as_deref(), Some("Steve"));
        assert_eq!(form.last_name.as_deref(), Some("Jobs"));
        assert!(form.id.is_none());
    }
}
