//! Data shared between the login flow and the UI.

use serde::{Deserialize, Serialize};

/// The three fields the join form collects. Serialized as-is when written to
/// the remote "users" collection, so the field names follow the store's
/// camelCase convention.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormValues {
    pub name: String,
    pub mobile_number: String,
    pub password: String,
}

/// Per-field validation messages. Recomputed wholesale on every submit
/// attempt; a field is valid when its slot is `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub name: Option<String>,
    pub mobile_number: Option<String>,
    pub password: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.mobile_number.is_none() && self.password.is_none()
    }
}

/// The only field consumed from the identity provider's sign-in response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FederatedUser {
    pub refresh_token: String,
}

/// Insertion-ordered, duplicate-free set of selected participant names.
/// One typed container instead of the string-or-array value an HTML
/// multi-select hands back.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParticipantSelection(Vec<String>);

impl ParticipantSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the name if absent, deselect it if present. Returns whether the
    /// name is selected afterwards.
    pub fn toggle(&mut self, name: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|n| n == name) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(name.to_string());
            true
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// Selected names in the order they were chosen.
    pub fn selected(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_values_serialize_with_camel_case_keys() {
        let values = FormValues {
            name: "Meera".to_string(),
            mobile_number: "5551234567".to_string(),
            password: "secret1".to_string(),
        };
        let json = serde_json::to_value(&values).expect("serialize");
        assert_eq!(json["name"], "Meera");
        assert_eq!(json["mobileNumber"], "5551234567");
        assert_eq!(json["password"], "secret1");
    }

    #[test]
    fn selection_keeps_insertion_order() {
        let mut sel = ParticipantSelection::new();
        sel.toggle("Rohan");
        sel.toggle("Diya");
        sel.toggle("Aarav");
        assert_eq!(sel.selected(), ["Rohan", "Diya", "Aarav"]);
    }

    #[test]
    fn selection_rejects_duplicates_via_toggle() {
        let mut sel = ParticipantSelection::new();
        assert!(sel.toggle("Diya"), "first toggle selects");
        assert!(!sel.toggle("Diya"), "second toggle deselects");
        assert!(sel.is_empty());
    }

    #[test]
    fn selection_toggle_removes_only_the_named_entry() {
        let mut sel = ParticipantSelection::new();
        sel.toggle("Rohan");
        sel.toggle("Diya");
        sel.toggle("Rohan");
        assert_eq!(sel.selected(), ["Diya"]);
        assert_eq!(sel.len(), 1);
    }
}
