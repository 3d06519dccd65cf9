//! User profile data model

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Social media links attached to a profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialMedia {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

/// Account preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub email_notifications: bool,
    pub dark_mode: bool,
    pub language: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            dark_mode: false,
            language: "ka".to_string(),
        }
    }
}

/// A user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<Preferences>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// "First Last" display name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Uppercased initials, e.g. "GZ". Empty name parts contribute nothing.
    pub fn initials(&self) -> String {
        self.first_name
            .chars()
            .next()
            .into_iter()
            .chain(self.last_name.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Apply a partial update, field by field, and touch `updated_at`.
    ///
    /// Preferences merge per field with the defaults filling gaps, so a
    /// patch that only flips dark mode keeps the other preference values.
    pub fn apply(&mut self, update: UserUpdateRequest) {
        if let Some(v) = update.first_name {
            self.first_name = v;
        }
        if let Some(v) = update.last_name {
            self.last_name = v;
        }
        if let Some(v) = update.phone {
            self.phone = Some(v);
        }
        if let Some(v) = update.bio {
            self.bio = Some(v);
        }
        if let Some(v) = update.avatar {
            self.avatar = Some(v);
        }
        if let Some(v) = update.date_of_birth {
            self.date_of_birth = Some(v);
        }
        if let Some(v) = update.location {
            self.location = Some(v);
        }
        if let Some(v) = update.website {
            self.website = Some(v);
        }
        if let Some(v) = update.job_title {
            self.job_title = Some(v);
        }
        if let Some(v) = update.company {
            self.company = Some(v);
        }
        if let Some(v) = update.social_media {
            self.social_media = Some(v);
        }
        if let Some(patch) = update.preferences {
            let current = self.preferences.clone().unwrap_or_default();
            self.preferences = Some(Preferences {
                email_notifications: patch
                    .email_notifications
                    .unwrap_or(current.email_notifications),
                dark_mode: patch.dark_mode.unwrap_or(current.dark_mode),
                language: patch.language.unwrap_or(current.language),
            });
        }
        self.updated_at = Utc::now();
    }
}

/// Partial preference update; absent fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferencesUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark_mode: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// All-optional profile update. The email address is immutable here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_media: Option<SocialMedia>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferences: Option<PreferencesUpdate>,
}

/// The fixed demo user.
pub fn sample_user() -> User {
    User {
        id: "1".to_string(),
        first_name: "giorgi".to_string(),
        last_name: "zankaidze".to_string(),
        email: "giorgi.zankaidze@example.com".to_string(),
        phone: Some("+995 555 123 456".to_string()),
        bio: Some(
            "Passionate developer with experience in building modern web applications."
                .to_string(),
        ),
        avatar: Some(
            "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop"
                .to_string(),
        ),
        date_of_birth: Some(Utc.with_ymd_and_hms(1990, 5, 15, 0, 0, 0).unwrap()),
        location: Some("Tbilisi, Georgia".to_string()),
        website: Some("https://portfolio.example.com".to_string()),
        job_title: Some("Senior Frontend Developer".to_string()),
        company: Some("Tech Solutions Ltd".to_string()),
        social_media: Some(SocialMedia {
            linkedin: Some("https://linkedin.com/in/giorgi-zankaidze".to_string()),
            twitter: Some("https://twitter.com/giorgi_dev".to_string()),
            github: Some("https://github.com/giorgi-zankaidze".to_string()),
        }),
        preferences: Some(Preferences::default()),
        created_at: Utc.with_ymd_and_hms(2023, 1, 15, 0, 0, 0).unwrap(),
        updated_at: Utc::now(),
    }
}
