//! Domain models for campaigns, accounts, and messages

mod campaign;
mod filter;
mod message;
mod user;

pub use campaign::{
    Campaign, CampaignBuilder, CampaignId, CampaignPatch, CampaignStatus, NewCampaign,
    UrgencyLevel,
};
pub use filter::{CampaignFilter, DurationRange, SortBy};
pub use message::{Message, MessageId};
pub use user::{
    Availability, Organization, OrganizationStats, SocialLinks, User, UserId, UserPatch,
    UserStats, UserType,
};
