//! Query API for UI consumption
//!
//! Pure, synchronous transforms over already-loaded collections. Nothing
//! here mutates its inputs or holds state between calls.

mod campaigns;
mod organizations;
mod threads;

pub use campaigns::{
    campaigns_applied_by, campaigns_for_organization, campaigns_for_user, featured_campaigns,
    query_campaigns, sort_campaigns, urgency_rank,
};
pub use organizations::search_organizations;
pub use threads::{
    MessageThread, MessageThreads, ThreadSummary, group_threads, list_threads_for,
};
