//! Campaigns crate - Business logic for volunteer campaign matching
//!
//! This crate provides platform-independent functionality including:
//! - Domain models (Campaign, User, Organization, Message)
//! - Campaign query engine (filtering and sorting)
//! - Message thread grouping for conversation views
//! - Storage trait abstractions with in-memory and file-backed stores
//! - Async service facades for campaign and account mutations
//!
//! This crate has zero UI dependencies.

pub mod actions;
pub mod config;
pub mod error;
pub mod models;
pub mod query;
pub mod seed;
pub mod storage;

pub use actions::{CampaignService, UserService};
pub use config::HarborConfig;
pub use error::{ServiceError, ServiceResult};
pub use models::{
    Campaign, CampaignFilter, CampaignId, CampaignPatch, CampaignStatus, DurationRange, Message,
    MessageId, NewCampaign, Organization, SortBy, UrgencyLevel, User, UserId, UserPatch, UserType,
};
pub use query::{
    MessageThread, MessageThreads, ThreadSummary, featured_campaigns, group_threads,
    query_campaigns, search_organizations,
};
pub use seed::SeedData;
pub use storage::{
    CampaignStore, FileSessionStore, InMemoryCampaignStore, InMemoryMessageStore,
    InMemoryOrganizationStore, InMemorySessionStore, InMemoryUserStore, MessageStore,
    OrganizationStore, SessionStore, UserStore,
};
