//! Campaign model representing a volunteer opportunity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UserId;

/// Unique identifier for a campaign
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CampaignId(pub String);

impl CampaignId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for CampaignId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for CampaignId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Lifecycle state of a campaign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CampaignStatus {
    Active,
    Upcoming,
    Completed,
    Cancelled,
}

impl CampaignStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Upcoming => "upcoming",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

/// How urgently a campaign needs volunteers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
}

impl UrgencyLevel {
    /// Ordinal rank used when sorting by urgency (high = 3, low = 1)
    pub fn rank(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }
}

/// A volunteer opportunity posted by an organization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Campaign {
    pub id: CampaignId,
    pub title: String,
    /// Account of the organization that posted the campaign
    pub organization_id: UserId,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub location: String,
    pub is_remote: bool,
    pub start_date: DateTime<Utc>,
    /// `None` means the campaign has no fixed end
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub causes: Vec<String>,
    pub required_hours: u32,
    #[serde(default)]
    pub openings: u32,
    /// Users who applied and are awaiting acceptance
    #[serde(default)]
    pub applicants: Vec<UserId>,
    /// Users who were accepted
    #[serde(default)]
    pub volunteers: Vec<UserId>,
    pub status: CampaignStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub urgency_level: Option<UrgencyLevel>,
}

impl Campaign {
    /// Create a new campaign builder
    pub fn builder(id: CampaignId, title: impl Into<String>) -> CampaignBuilder {
        CampaignBuilder::new(id, title.into())
    }

    /// Applicants plus accepted volunteers.
    ///
    /// Overlapping ids are counted twice.
    pub fn popularity(&self) -> usize {
        self.applicants.len() + self.volunteers.len()
    }

    pub fn has_applied(&self, user: &UserId) -> bool {
        self.applicants.contains(user)
    }

    pub fn is_volunteer(&self, user: &UserId) -> bool {
        self.volunteers.contains(user)
    }

    /// Merge the fields set in `patch` and stamp `updated_at`
    pub fn apply_patch(&mut self, patch: CampaignPatch, updated_at: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(organization_id) = patch.organization_id {
            self.organization_id = organization_id;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(is_remote) = patch.is_remote {
            self.is_remote = is_remote;
        }
        if let Some(start_date) = patch.start_date {
            self.start_date = start_date;
        }
        if let Some(end_date) = patch.end_date {
            self.end_date = end_date;
        }
        if let Some(skills) = patch.skills {
            self.skills = skills;
        }
        if let Some(causes) = patch.causes {
            self.causes = causes;
        }
        if let Some(required_hours) = patch.required_hours {
            self.required_hours = required_hours;
        }
        if let Some(openings) = patch.openings {
            self.openings = openings;
        }
        if let Some(applicants) = patch.applicants {
            self.applicants = applicants;
        }
        if let Some(volunteers) = patch.volunteers {
            self.volunteers = volunteers;
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(urgency_level) = patch.urgency_level {
            self.urgency_level = urgency_level;
        }
        self.updated_at = updated_at;
    }
}

/// Partial campaign update; unset fields are left untouched.
///
/// Fields that are themselves optional on [`Campaign`] take an inner
/// `Option` so a patch can clear them (`Some(None)`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignPatch {
    pub title: Option<String>,
    pub organization_id: Option<UserId>,
    pub description: Option<String>,
    pub image: Option<Option<String>>,
    pub location: Option<String>,
    pub is_remote: Option<bool>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<Option<DateTime<Utc>>>,
    pub skills: Option<Vec<String>>,
    pub causes: Option<Vec<String>>,
    pub required_hours: Option<u32>,
    pub openings: Option<u32>,
    pub applicants: Option<Vec<UserId>>,
    pub volunteers: Option<Vec<UserId>>,
    pub status: Option<CampaignStatus>,
    pub urgency_level: Option<Option<UrgencyLevel>>,
}

/// Fields supplied by an organization when posting a campaign
///
/// The store assigns the id and timestamps; applicant and volunteer
/// lists always start empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCampaign {
    pub title: String,
    pub organization_id: UserId,
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
    pub location: String,
    pub is_remote: bool,
    pub start_date: DateTime<Utc>,
    #[serde(default)]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub causes: Vec<String>,
    pub required_hours: u32,
    #[serde(default)]
    pub openings: u32,
    pub status: CampaignStatus,
    #[serde(default)]
    pub urgency_level: Option<UrgencyLevel>,
}

impl NewCampaign {
    /// Materialize the campaign record with its assigned id
    pub fn into_campaign(self, id: CampaignId, now: DateTime<Utc>) -> Campaign {
        Campaign {
            id,
            title: self.title,
            organization_id: self.organization_id,
            description: self.description,
            image: self.image,
            location: self.location,
            is_remote: self.is_remote,
            start_date: self.start_date,
            end_date: self.end_date,
            skills: self.skills,
            causes: self.causes,
            required_hours: self.required_hours,
            openings: self.openings,
            applicants: Vec::new(),
            volunteers: Vec::new(),
            status: self.status,
            created_at: now,
            updated_at: now,
            urgency_level: self.urgency_level,
        }
    }
}

/// Builder for creating Campaign instances
pub struct CampaignBuilder {
    id: CampaignId,
    title: String,
    organization_id: UserId,
    description: String,
    location: String,
    is_remote: bool,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    skills: Vec<String>,
    causes: Vec<String>,
    required_hours: u32,
    openings: u32,
    applicants: Vec<UserId>,
    volunteers: Vec<UserId>,
    status: CampaignStatus,
    created_at: Option<DateTime<Utc>>,
    urgency_level: Option<UrgencyLevel>,
}

impl CampaignBuilder {
    fn new(id: CampaignId, title: String) -> Self {
        Self {
            id,
            title,
            organization_id: UserId::new("unknown"),
            description: String::new(),
            location: String::new(),
            is_remote: false,
            start_date: None,
            end_date: None,
            skills: Vec::new(),
            causes: Vec::new(),
            required_hours: 0,
            openings: 0,
            applicants: Vec::new(),
            volunteers: Vec::new(),
            status: CampaignStatus::Active,
            created_at: None,
            urgency_level: None,
        }
    }

    pub fn organization(mut self, organization_id: impl Into<UserId>) -> Self {
        self.organization_id = organization_id.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn remote(mut self, is_remote: bool) -> Self {
        self.is_remote = is_remote;
        self
    }

    pub fn start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    pub fn end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn skills<S: Into<String>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn causes<S: Into<String>>(mut self, causes: impl IntoIterator<Item = S>) -> Self {
        self.causes = causes.into_iter().map(Into::into).collect();
        self
    }

    pub fn required_hours(mut self, required_hours: u32) -> Self {
        self.required_hours = required_hours;
        self
    }

    pub fn openings(mut self, openings: u32) -> Self {
        self.openings = openings;
        self
    }

    pub fn applicants<U: Into<UserId>>(mut self, applicants: impl IntoIterator<Item = U>) -> Self {
        self.applicants = applicants.into_iter().map(Into::into).collect();
        self
    }

    pub fn volunteers<U: Into<UserId>>(mut self, volunteers: impl IntoIterator<Item = U>) -> Self {
        self.volunteers = volunteers.into_iter().map(Into::into).collect();
        self
    }

    pub fn status(mut self, status: CampaignStatus) -> Self {
        self.status = status;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    pub fn urgency(mut self, urgency_level: UrgencyLevel) -> Self {
        self.urgency_level = Some(urgency_level);
        self
    }

    pub fn build(self) -> Campaign {
        let created_at = self.created_at.unwrap_or_else(Utc::now);
        Campaign {
            id: self.id,
            title: self.title,
            organization_id: self.organization_id,
            description: self.description,
            image: None,
            location: self.location,
            is_remote: self.is_remote,
            start_date: self.start_date.unwrap_or(created_at),
            end_date: self.end_date,
            skills: self.skills,
            causes: self.causes,
            required_hours: self.required_hours,
            openings: self.openings,
            applicants: self.applicants,
            volunteers: self.volunteers,
            status: self.status,
            created_at,
            updated_at: created_at,
            urgency_level: self.urgency_level,
        }
    }
}
