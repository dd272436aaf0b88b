//! User and organization profiles

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for an account (volunteer or organization)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for UserId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Kind of account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Volunteer,
    Organization,
}

/// When and how a volunteer can help
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekdays: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weekends: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remotely: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub in_person: Option<bool>,
    /// Hours per week
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<u32>,
}

/// Profile counters shown on dashboards
///
/// Volunteers use the first four fields; organizations use
/// `volunteers_helped` and `campaigns_created`. `impact_points` is shared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaigns_joined: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours_contributed: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub impact_points: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endorsements: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volunteers_helped: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaigns_created: Option<u32>,
}

impl UserStats {
    /// Zeroed counters for a freshly registered account of the given type
    pub fn zeroed(user_type: UserType) -> Self {
        match user_type {
            UserType::Volunteer => Self {
                campaigns_joined: Some(0),
                hours_contributed: Some(0),
                impact_points: Some(0),
                endorsements: Some(0),
                ..Self::default()
            },
            UserType::Organization => Self {
                volunteers_helped: Some(0),
                campaigns_created: Some(0),
                impact_points: Some(0),
                ..Self::default()
            },
        }
    }
}

/// A registered account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub user_type: UserType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability: Option<Availability>,
    #[serde(default)]
    pub verified: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<UserStats>,
}

impl User {
    /// Build the profile of a newly registered account
    pub fn registered(
        id: UserId,
        name: impl Into<String>,
        email: impl Into<String>,
        user_type: UserType,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            bio: None,
            avatar: None,
            user_type,
            location: Some(String::new()),
            website: None,
            skills: Vec::new(),
            causes: Vec::new(),
            availability: None,
            verified: false,
            created_at,
            stats: Some(UserStats::zeroed(user_type)),
        }
    }

    /// Merge the fields set in `patch` into this profile
    pub fn apply_patch(&mut self, patch: UserPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(bio) = patch.bio {
            self.bio = Some(bio);
        }
        if let Some(avatar) = patch.avatar {
            self.avatar = Some(avatar);
        }
        if let Some(location) = patch.location {
            self.location = Some(location);
        }
        if let Some(website) = patch.website {
            self.website = Some(website);
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(causes) = patch.causes {
            self.causes = causes;
        }
        if let Some(availability) = patch.availability {
            self.availability = Some(availability);
        }
    }
}

/// Partial profile update; unset fields are left untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub skills: Option<Vec<String>>,
    pub causes: Option<Vec<String>>,
    pub availability: Option<Availability>,
}

/// Links to an organization's social profiles
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
}

/// Aggregate impact of an organization
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationStats {
    pub volunteers_helped: u32,
    pub campaigns_created: u32,
    pub total_hours: u32,
}

/// Public directory entry for an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub causes: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub founded_year: Option<u16>,
    #[serde(default)]
    pub verified: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<OrganizationStats>,
}

impl Organization {
    /// Directory entry with only the required fields set
    pub fn new(id: UserId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            description: None,
            logo: None,
            website: None,
            location: None,
            causes: Vec::new(),
            size: None,
            founded_year: None,
            verified: false,
            social_links: None,
            stats: None,
        }
    }
}
