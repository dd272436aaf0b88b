//! Storage traits and implementations
//!
//! Stores are explicit, injectable state containers. Services hold them
//! behind `Arc<dyn ...>` so in-memory and file-backed implementations can
//! be swapped freely.

mod memory;
mod session;
mod traits;

pub use memory::{
    InMemoryCampaignStore, InMemoryMessageStore, InMemoryOrganizationStore, InMemorySessionStore,
    InMemoryUserStore,
};
pub use session::{FileSessionStore, SESSION_FILE};
pub use traits::{CampaignStore, MessageStore, OrganizationStore, SessionStore, UserStore};
