//! Campaign service
//!
//! Coordinates the campaign store, the active filter, and simulated
//! backend latency for mutations.

use chrono::Utc;
use log::{debug, info};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use super::pending::{LoadingGuard, logged, simulate_latency};
use crate::config::HarborConfig;
use crate::error::ServiceResult;
use crate::models::{Campaign, CampaignFilter, CampaignId, CampaignPatch, NewCampaign, UserId};
use crate::query::query_campaigns;
use crate::storage::CampaignStore;

/// Service for browsing and mutating campaigns
///
/// Every mutation waits the configured latency, then applies the change
/// to the store. A failed operation is logged, leaves the store untouched,
/// and is not retried.
pub struct CampaignService {
    store: Arc<dyn CampaignStore>,
    filter: RwLock<CampaignFilter>,
    loading: AtomicBool,
    latency: Duration,
}

impl CampaignService {
    /// Create a new campaign service
    pub fn new(store: Arc<dyn CampaignStore>, settings: &HarborConfig) -> Self {
        Self::with_latency(store, settings.latency())
    }

    pub fn with_latency(store: Arc<dyn CampaignStore>, latency: Duration) -> Self {
        Self {
            store,
            filter: RwLock::new(CampaignFilter::default()),
            loading: AtomicBool::new(false),
            latency,
        }
    }

    /// True while a simulated operation is in flight
    pub fn is_loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// The active filter
    pub fn filter(&self) -> CampaignFilter {
        self.filter
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the active filter
    pub fn set_filter(&self, filter: CampaignFilter) {
        debug!("Campaign filter changed: {:?}", filter);
        *self.filter.write().unwrap_or_else(PoisonError::into_inner) = filter;
    }

    /// Campaigns matching the active filter, recomputed from the store
    pub fn filtered_campaigns(&self) -> ServiceResult<Vec<Campaign>> {
        let campaigns = logged("listing campaigns", self.store.list_campaigns())?;
        Ok(query_campaigns(&campaigns, &self.filter()))
    }

    /// Every campaign, unfiltered
    pub fn campaigns(&self) -> ServiceResult<Vec<Campaign>> {
        logged("listing campaigns", self.store.list_campaigns())
    }

    pub fn get_campaign(&self, id: &CampaignId) -> ServiceResult<Option<Campaign>> {
        logged("loading campaign", self.store.get_campaign(id))
    }

    /// Simulated initial fetch of the campaign collection
    pub async fn fetch_campaigns(&self) -> ServiceResult<Vec<Campaign>> {
        let _loading = LoadingGuard::start(&self.loading);
        simulate_latency(self.latency).await;

        let campaigns = logged("fetching campaigns", self.store.list_campaigns())?;
        info!("Fetched {} campaigns", campaigns.len());
        Ok(campaigns)
    }

    /// Add `user` to a campaign's applicants
    ///
    /// Applying twice is a no-op. Returns false when the campaign doesn't
    /// exist.
    pub async fn apply(&self, campaign_id: &CampaignId, user: &UserId) -> ServiceResult<bool> {
        let _loading = LoadingGuard::start(&self.loading);
        simulate_latency(self.latency).await;

        let mut newly_applied = false;
        let found = logged(
            "applying to campaign",
            self.store.modify_campaign(
                campaign_id,
                Box::new(|campaign: &mut Campaign| {
                    if !campaign.has_applied(user) {
                        campaign.applicants.push(user.clone());
                        campaign.updated_at = Utc::now();
                        newly_applied = true;
                    }
                }),
            ),
        )?;

        if newly_applied {
            info!(
                "User {} applied to campaign {}",
                user.as_str(),
                campaign_id.as_str()
            );
        } else if found {
            debug!(
                "User {} already applied to campaign {}",
                user.as_str(),
                campaign_id.as_str()
            );
        }
        Ok(found)
    }

    /// Post a new campaign
    ///
    /// The campaign gets a `campaign-<millis>` id and is appended to the
    /// end of the collection.
    pub async fn create_campaign(&self, new: NewCampaign) -> ServiceResult<Campaign> {
        let _loading = LoadingGuard::start(&self.loading);
        simulate_latency(self.latency).await;

        let now = Utc::now();
        let id = logged("creating campaign", self.next_campaign_id(now.timestamp_millis()))?;
        let campaign = new.into_campaign(id, now);
        logged(
            "creating campaign",
            self.store.insert_campaign(campaign.clone()),
        )?;

        info!("Created campaign {} ({})", campaign.id.as_str(), campaign.title);
        Ok(campaign)
    }

    /// Merge `patch` into a campaign; returns false when it doesn't exist
    pub async fn update_campaign(
        &self,
        id: &CampaignId,
        patch: CampaignPatch,
    ) -> ServiceResult<bool> {
        let _loading = LoadingGuard::start(&self.loading);
        simulate_latency(self.latency).await;

        let now = Utc::now();
        let change = Box::new(|campaign: &mut Campaign| campaign.apply_patch(patch, now));
        let updated = logged("updating campaign", self.store.modify_campaign(id, change))?;

        if updated {
            info!("Updated campaign {}", id.as_str());
        }
        Ok(updated)
    }

    /// Remove a campaign; returns false when it doesn't exist
    pub async fn delete_campaign(&self, id: &CampaignId) -> ServiceResult<bool> {
        let _loading = LoadingGuard::start(&self.loading);
        simulate_latency(self.latency).await;

        let removed = logged("deleting campaign", self.store.remove_campaign(id))?;
        if removed {
            info!("Deleted campaign {}", id.as_str());
        }
        Ok(removed)
    }

    /// Millisecond-based id, suffixed when several land in the same millisecond
    fn next_campaign_id(&self, millis: i64) -> anyhow::Result<CampaignId> {
        let base = format!("campaign-{}", millis);
        let mut id = CampaignId::new(base.clone());
        let mut suffix = 1;
        while self.store.has_campaign(&id)? {
            id = CampaignId::new(format!("{}-{}", base, suffix));
            suffix += 1;
        }
        Ok(id)
    }
}
