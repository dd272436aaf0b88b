//! Storage trait definitions

use crate::models::{Campaign, CampaignId, Message, Organization, User, UserId};
use anyhow::Result;

/// Trait for campaign storage operations
///
/// Owns the master campaign collection. Listing returns campaigns in
/// insertion order, which is the order queries see them in.
pub trait CampaignStore: Send + Sync {
    /// List all campaigns in insertion order
    fn list_campaigns(&self) -> Result<Vec<Campaign>>;

    /// Get a campaign by ID
    fn get_campaign(&self, id: &CampaignId) -> Result<Option<Campaign>>;

    /// Append a campaign; fails if the ID is already taken
    fn insert_campaign(&self, campaign: Campaign) -> Result<()>;

    /// Replace the campaign with the same ID in place
    ///
    /// Returns false when no campaign has that ID.
    fn update_campaign(&self, campaign: Campaign) -> Result<bool>;

    /// Change a campaign in place, atomically with respect to other writers
    ///
    /// Returns false without calling `change` when no campaign has that ID.
    fn modify_campaign(
        &self,
        id: &CampaignId,
        change: Box<dyn FnOnce(&mut Campaign) + '_>,
    ) -> Result<bool>;

    /// Remove a campaign, returning false when it didn't exist
    fn remove_campaign(&self, id: &CampaignId) -> Result<bool>;

    /// Check if a campaign exists
    fn has_campaign(&self, id: &CampaignId) -> Result<bool>;

    /// Count total campaigns
    fn count_campaigns(&self) -> Result<usize>;

    /// Clear all data (for testing)
    fn clear(&self) -> Result<()>;
}

/// Trait for the account directory
pub trait UserStore: Send + Sync {
    /// List all accounts in insertion order
    fn list_users(&self) -> Result<Vec<User>>;

    /// Get an account by ID
    fn get_user(&self, id: &UserId) -> Result<Option<User>>;

    /// First account registered with this exact email
    fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Insert or replace an account
    fn upsert_user(&self, user: User) -> Result<()>;
}

/// Trait for the public organization directory
pub trait OrganizationStore: Send + Sync {
    /// List all organizations in insertion order
    fn list_organizations(&self) -> Result<Vec<Organization>>;

    fn get_organization(&self, id: &UserId) -> Result<Option<Organization>>;

    /// Insert or replace a directory entry
    fn upsert_organization(&self, organization: Organization) -> Result<()>;
}

/// Trait for direct message storage
pub trait MessageStore: Send + Sync {
    /// List all messages in insertion order
    fn list_messages(&self) -> Result<Vec<Message>>;

    /// Append a message
    fn insert_message(&self, message: Message) -> Result<()>;

    /// Messages the user sent or received, in insertion order
    fn list_messages_for_user(&self, user: &UserId) -> Result<Vec<Message>>;
}

/// Persistence for the signed-in account between runs
///
/// The session is a plain serialized profile with no integrity checks.
pub trait SessionStore: Send + Sync {
    /// Load the saved profile, if any
    fn load(&self) -> Result<Option<User>>;

    /// Save the profile, replacing any previous session
    fn save(&self, user: &User) -> Result<()>;

    /// Forget the saved profile
    fn clear(&self) -> Result<()>;
}
