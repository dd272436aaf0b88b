//! Filter constraints for campaign queries
//!
//! Every field is optional. An unset field (or an empty list) applies no
//! constraint; a set field removes campaigns that don't match it.

use serde::{Deserialize, Serialize};

use super::{CampaignStatus, UrgencyLevel};

/// Inclusive range of required volunteer hours.
///
/// Not validated: a range with `min > max` simply matches nothing.
/// Serialized as a `[min, max]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(u32, u32)", into = "(u32, u32)")]
pub struct DurationRange {
    pub min: u32,
    pub max: u32,
}

impl DurationRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, hours: u32) -> bool {
        self.min <= hours && hours <= self.max
    }
}

impl From<(u32, u32)> for DurationRange {
    fn from((min, max): (u32, u32)) -> Self {
        Self { min, max }
    }
}

impl From<DurationRange> for (u32, u32) {
    fn from(range: DurationRange) -> Self {
        (range.min, range.max)
    }
}

/// Ordering applied after filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortBy {
    /// Most recently created first
    Newest,
    /// Most applicants plus volunteers first
    Popularity,
    /// High, medium, low, then campaigns without an urgency level
    Urgency,
    /// Earliest end date first; open-ended campaigns last
    EndingSoon,
}

/// Constraints for [`query_campaigns`](crate::query::query_campaigns)
///
/// Unknown keys are ignored when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CampaignFilter {
    /// Case-insensitive substring of title, description, or location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// Matches campaigns sharing at least one cause
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
    /// Matches campaigns sharing at least one skill
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skills: Vec<String>,
    /// Case-insensitive substring of location
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub status: Vec<CampaignStatus>,
    /// Campaigns without an urgency level never match
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub urgency: Vec<UrgencyLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<DurationRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<SortBy>,
}

impl CampaignFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search = Some(query.into());
        self
    }

    pub fn causes<S: Into<String>>(mut self, causes: impl IntoIterator<Item = S>) -> Self {
        self.causes = causes.into_iter().map(Into::into).collect();
        self
    }

    pub fn skills<S: Into<String>>(mut self, skills: impl IntoIterator<Item = S>) -> Self {
        self.skills = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn remote(mut self, remote: bool) -> Self {
        self.remote = Some(remote);
        self
    }

    pub fn status(mut self, status: impl IntoIterator<Item = CampaignStatus>) -> Self {
        self.status = status.into_iter().collect();
        self
    }

    pub fn urgency(mut self, urgency: impl IntoIterator<Item = UrgencyLevel>) -> Self {
        self.urgency = urgency.into_iter().collect();
        self
    }

    pub fn duration(mut self, min: u32, max: u32) -> Self {
        self.duration = Some(DurationRange::new(min, max));
        self
    }

    pub fn sort_by(mut self, sort_by: SortBy) -> Self {
        self.sort_by = Some(sort_by);
        self
    }

    /// True when no field would constrain or reorder a query
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
