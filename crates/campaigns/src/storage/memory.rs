//! In-memory storage implementations
//!
//! Backed by vectors behind RwLocks so that insertion order is the
//! natural listing order.

use anyhow::{Result, anyhow, bail};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{CampaignStore, MessageStore, OrganizationStore, SessionStore, UserStore};
use crate::models::{Campaign, CampaignId, Message, Organization, User, UserId};

fn read<'a, T>(lock: &'a RwLock<T>, what: &str) -> Result<RwLockReadGuard<'a, T>> {
    lock.read()
        .map_err(|_| anyhow!("{} lock poisoned", what))
}

fn write<'a, T>(lock: &'a RwLock<T>, what: &str) -> Result<RwLockWriteGuard<'a, T>> {
    lock.write()
        .map_err(|_| anyhow!("{} lock poisoned", what))
}

/// In-memory implementation of CampaignStore
pub struct InMemoryCampaignStore {
    campaigns: RwLock<Vec<Campaign>>,
}

impl InMemoryCampaignStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            campaigns: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with campaigns, keeping their order
    pub fn with_campaigns(campaigns: Vec<Campaign>) -> Self {
        Self {
            campaigns: RwLock::new(campaigns),
        }
    }
}

impl Default for InMemoryCampaignStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CampaignStore for InMemoryCampaignStore {
    fn list_campaigns(&self) -> Result<Vec<Campaign>> {
        Ok(read(&self.campaigns, "campaign store")?.clone())
    }

    fn get_campaign(&self, id: &CampaignId) -> Result<Option<Campaign>> {
        let campaigns = read(&self.campaigns, "campaign store")?;
        Ok(campaigns.iter().find(|c| c.id == *id).cloned())
    }

    fn insert_campaign(&self, campaign: Campaign) -> Result<()> {
        let mut campaigns = write(&self.campaigns, "campaign store")?;
        if campaigns.iter().any(|c| c.id == campaign.id) {
            bail!("Campaign {} already exists", campaign.id.as_str());
        }
        campaigns.push(campaign);
        Ok(())
    }

    fn update_campaign(&self, campaign: Campaign) -> Result<bool> {
        let mut campaigns = write(&self.campaigns, "campaign store")?;
        match campaigns.iter_mut().find(|c| c.id == campaign.id) {
            Some(slot) => {
                *slot = campaign;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn modify_campaign(
        &self,
        id: &CampaignId,
        change: Box<dyn FnOnce(&mut Campaign) + '_>,
    ) -> Result<bool> {
        let mut campaigns = write(&self.campaigns, "campaign store")?;
        match campaigns.iter_mut().find(|c| c.id == *id) {
            Some(campaign) => {
                change(campaign);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn remove_campaign(&self, id: &CampaignId) -> Result<bool> {
        let mut campaigns = write(&self.campaigns, "campaign store")?;
        let before = campaigns.len();
        campaigns.retain(|c| c.id != *id);
        Ok(campaigns.len() != before)
    }

    fn has_campaign(&self, id: &CampaignId) -> Result<bool> {
        let campaigns = read(&self.campaigns, "campaign store")?;
        Ok(campaigns.iter().any(|c| c.id == *id))
    }

    fn count_campaigns(&self) -> Result<usize> {
        Ok(read(&self.campaigns, "campaign store")?.len())
    }

    fn clear(&self) -> Result<()> {
        write(&self.campaigns, "campaign store")?.clear();
        Ok(())
    }
}

/// In-memory implementation of UserStore
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
        }
    }

    pub fn with_users(users: Vec<User>) -> Self {
        Self {
            users: RwLock::new(users),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore for InMemoryUserStore {
    fn list_users(&self) -> Result<Vec<User>> {
        Ok(read(&self.users, "user store")?.clone())
    }

    fn get_user(&self, id: &UserId) -> Result<Option<User>> {
        let users = read(&self.users, "user store")?;
        Ok(users.iter().find(|u| u.id == *id).cloned())
    }

    fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = read(&self.users, "user store")?;
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    fn upsert_user(&self, user: User) -> Result<()> {
        let mut users = write(&self.users, "user store")?;
        match users.iter_mut().find(|u| u.id == user.id) {
            Some(slot) => *slot = user,
            None => users.push(user),
        }
        Ok(())
    }
}

/// In-memory implementation of OrganizationStore
#[derive(Default)]
pub struct InMemoryOrganizationStore {
    organizations: RwLock<Vec<Organization>>,
}

impl InMemoryOrganizationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrganizationStore for InMemoryOrganizationStore {
    fn list_organizations(&self) -> Result<Vec<Organization>> {
        Ok(read(&self.organizations, "organization store")?.clone())
    }

    fn get_organization(&self, id: &UserId) -> Result<Option<Organization>> {
        let organizations = read(&self.organizations, "organization store")?;
        Ok(organizations.iter().find(|o| o.id == *id).cloned())
    }

    fn upsert_organization(&self, organization: Organization) -> Result<()> {
        let mut organizations = write(&self.organizations, "organization store")?;
        match organizations.iter_mut().find(|o| o.id == organization.id) {
            Some(slot) => *slot = organization,
            None => organizations.push(organization),
        }
        Ok(())
    }
}

/// In-memory implementation of MessageStore
pub struct InMemoryMessageStore {
    messages: RwLock<Vec<Message>>,
}

impl InMemoryMessageStore {
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(Vec::new()),
        }
    }

    pub fn with_messages(messages: Vec<Message>) -> Self {
        Self {
            messages: RwLock::new(messages),
        }
    }
}

impl Default for InMemoryMessageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore for InMemoryMessageStore {
    fn list_messages(&self) -> Result<Vec<Message>> {
        Ok(read(&self.messages, "message store")?.clone())
    }

    fn insert_message(&self, message: Message) -> Result<()> {
        write(&self.messages, "message store")?.push(message);
        Ok(())
    }

    fn list_messages_for_user(&self, user: &UserId) -> Result<Vec<Message>> {
        let messages = read(&self.messages, "message store")?;
        Ok(messages.iter().filter(|m| m.involves(user)).cloned().collect())
    }
}

/// Session store that only lives as long as the process
#[derive(Default)]
pub struct InMemorySessionStore {
    user: RwLock<Option<User>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn load(&self) -> Result<Option<User>> {
        Ok(read(&self.user, "session")?.clone())
    }

    fn save(&self, user: &User) -> Result<()> {
        *write(&self.user, "session")? = Some(user.clone());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        *write(&self.user, "session")? = None;
        Ok(())
    }
}
