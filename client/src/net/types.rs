//! Shared DTOs for the client/collaborator boundary.
//!
//! DESIGN
//! ======
//! `UserRecord` is also the durable session payload, so its serde shape is
//! the `localStorage` format: camelCase keys, optional profile fields, and an
//! opaque `extra` map that keeps unknown keys across a save/restore cycle.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A signed-in user as returned by the user-data collaborator.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Login identifier. Older payloads call this `identifier`; it is written
    /// back as `email`. A payload carrying both keys does not parse.
    #[serde(alias = "identifier")]
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub full_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    /// Avatar URL. A `blob:` URL from the file picker does not outlive the page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    /// Percentage in `0..=100`.
    #[serde(default)]
    pub profile_completion: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    /// Comma-separated skill list as typed by the user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
    /// Profile keys this client does not model, kept verbatim.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UserRecord {
    /// First word of the display name, or the email when no name is set.
    pub fn first_name(&self) -> &str {
        self.full_name
            .split_whitespace()
            .next()
            .unwrap_or(self.email.as_str())
    }
}

/// Registration payload submitted by the auth form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    pub full_name: String,
    pub email: String,
    pub password: String,
}

/// Partial profile update. `None` fields are left untouched.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub full_name: Option<String>,
    pub phone_number: Option<String>,
    pub profile_image: Option<String>,
    pub bio: Option<String>,
    pub skills: Option<String>,
    pub linkedin: Option<String>,
    pub portfolio: Option<String>,
}

impl ProfileUpdate {
    /// Merge the provided fields into `record`.
    pub fn apply_to(self, record: &mut UserRecord) {
        if let Some(full_name) = self.full_name {
            record.full_name = full_name;
        }
        let optional = [
            (self.phone_number, &mut record.phone_number),
            (self.profile_image, &mut record.profile_image),
            (self.bio, &mut record.bio),
            (self.skills, &mut record.skills),
            (self.linkedin, &mut record.linkedin),
            (self.portfolio, &mut record.portfolio),
        ];
        for (value, slot) in optional {
            if value.is_some() {
                *slot = value;
            }
        }
    }
}

/// An internship listing with its match score.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Internship {
    pub id: u32,
    pub title: String,
    pub company: String,
    pub location: String,
    /// Match score in `0.0..=1.0`.
    pub score: f64,
}

impl Internship {
    /// Match score as a whole percentage.
    pub fn score_percent(&self) -> u8 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let pct = (self.score.clamp(0.0, 1.0) * 100.0).round() as u8;
        pct
    }
}

/// Review stage of a tracked application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Applied,
    #[serde(rename = "Under Review")]
    UnderReview,
    Shortlisted,
    Rejected,
}

impl ApplicationStatus {
    /// Human-readable label, identical to the wire name.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::UnderReview => "Under Review",
            Self::Shortlisted => "Shortlisted",
            Self::Rejected => "Rejected",
        }
    }
}

/// An internship the user has applied to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(flatten)]
    pub internship: Internship,
    pub status: ApplicationStatus,
    /// Calendar date as `YYYY-MM-DD`.
    pub date_applied: String,
}

impl Application {
    pub fn id(&self) -> u32 {
        self.internship.id
    }
}

/// Finder wizard preferences sent with a search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPreferences {
    pub locations: String,
    pub is_rural: bool,
    pub social_category: String,
    pub sectors: Vec<String>,
}

impl SearchPreferences {
    /// Add `sector` if absent, remove it if present.
    pub fn toggle_sector(&mut self, sector: &str) {
        if let Some(pos) = self.sectors.iter().position(|s| s == sector) {
            self.sectors.remove(pos);
        } else {
            self.sectors.push(sector.to_owned());
        }
    }

    pub fn has_sector(&self, sector: &str) -> bool {
        self.sectors.iter().any(|s| s == sector)
    }
}

/// Result of an apply request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    AlreadyApplied,
}
