//! Service facades over the stores
//!
//! Mutations are async and wait out a simulated backend round trip; the
//! query transforms they call stay synchronous.

mod campaigns;
mod pending;
mod users;

pub use campaigns::CampaignService;
pub use users::UserService;
