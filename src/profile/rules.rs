//! Validation rule sets for the profile forms
//!
//! The UI layer evaluates these against the flat field-value mapping it
//! collects from its form controls; the stores themselves never validate.

use crate::core::validation::{filters, validators, FieldRule};

/// Rules for the profile edit form.
pub fn profile_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new("firstName")
            .filter(filters::trim())
            .validator(validators::required())
            .validator(validators::min_length(2)),
        FieldRule::new("lastName")
            .filter(filters::trim())
            .validator(validators::required())
            .validator(validators::min_length(2)),
        FieldRule::new("phone")
            .filter(filters::trim())
            .validator(validators::phone()),
        FieldRule::new("bio").validator(validators::max_length(500)),
        FieldRule::new("website")
            .filter(filters::trim())
            .validator(validators::url()),
        FieldRule::new("email")
            .filter(filters::trim())
            .filter(filters::lowercase())
            .validator(validators::email()),
    ]
}

/// Rules for the password-change form. The new/confirm equality check is a
/// cross-field concern evaluated by the caller, not a field rule.
pub fn password_rules() -> Vec<FieldRule> {
    vec![
        FieldRule::new("currentPassword").validator(validators::required()),
        FieldRule::new("newPassword")
            .validator(validators::required())
            .validator(validators::min_length(8)),
        FieldRule::new("confirmPassword").validator(validators::required()),
    ]
}
