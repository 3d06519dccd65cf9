//! User profile editing core: model, reactive store, and form rules

pub mod rules;
pub mod store;
pub mod user;

pub use rules::{password_rules, profile_rules};
pub use store::ProfileStore;
pub use user::{sample_user, Preferences, PreferencesUpdate, SocialMedia, User, UserUpdateRequest};
