//! Seed data for populating stores
//!
//! A small built-in fixture ships with the crate; any JSON file with the
//! same shape can be loaded instead.

use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::{Campaign, Message, Organization, User};
use crate::storage::{CampaignStore, MessageStore, OrganizationStore, UserStore};

const EMBEDDED_SEED: &str = include_str!("../data/seed.json");

/// Collections used to populate the stores
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeedData {
    pub users: Vec<User>,
    pub organizations: Vec<Organization>,
    pub campaigns: Vec<Campaign>,
    pub messages: Vec<Message>,
}

impl SeedData {
    /// The fixture bundled with the crate
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse seed data")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        config::load_json_file(path)
    }

    /// Copy every record into the stores, keeping fixture order
    pub fn populate(
        &self,
        campaigns: &dyn CampaignStore,
        users: &dyn UserStore,
        organizations: &dyn OrganizationStore,
        messages: &dyn MessageStore,
    ) -> Result<()> {
        for campaign in &self.campaigns {
            campaigns.insert_campaign(campaign.clone())?;
        }
        for user in &self.users {
            users.upsert_user(user.clone())?;
        }
        for organization in &self.organizations {
            organizations.upsert_organization(organization.clone())?;
        }
        for message in &self.messages {
            messages.insert_message(message.clone())?;
        }
        info!(
            "Seeded {} campaigns, {} users, {} organizations, {} messages",
            self.campaigns.len(),
            self.users.len(),
            self.organizations.len(),
            self.messages.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CampaignStatus, UserType};
    use crate::storage::{
        InMemoryCampaignStore, InMemoryMessageStore, InMemoryOrganizationStore, InMemoryUserStore,
    };

    #[test]
    fn test_embedded_seed_parses() {
        let seed = SeedData::embedded().unwrap();
        assert_eq!(seed.campaigns.len(), 5);
        assert_eq!(seed.organizations.len(), 3);
        assert_eq!(seed.messages.len(), 3);
        assert!(
            seed.users
                .iter()
                .any(|u| u.user_type == UserType::Organization)
        );
        assert_eq!(seed.campaigns[1].status, CampaignStatus::Active);
    }

    #[test]
    fn test_populate_stores() {
        let seed = SeedData::embedded().unwrap();
        let campaigns = InMemoryCampaignStore::new();
        let users = InMemoryUserStore::new();
        let organizations = InMemoryOrganizationStore::new();
        let messages = InMemoryMessageStore::new();

        seed.populate(&campaigns, &users, &organizations, &messages).unwrap();

        assert_eq!(campaigns.count_campaigns().unwrap(), seed.campaigns.len());
        assert_eq!(users.list_users().unwrap().len(), seed.users.len());
        assert_eq!(organizations.list_organizations().unwrap(), seed.organizations);
        assert_eq!(messages.list_messages().unwrap(), seed.messages);
        assert_eq!(campaigns.list_campaigns().unwrap(), seed.campaigns);
    }

    #[test]
    fn test_partial_seed() {
        let seed = SeedData::from_json(r#"{ "messages": [] }"#).unwrap();
        assert!(seed.campaigns.is_empty());
        assert!(seed.users.is_empty());
    }
}
