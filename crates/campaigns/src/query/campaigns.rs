//! Campaign filtering and ordering

use log::debug;
use std::cmp::Reverse;

use crate::models::{
    Campaign, CampaignFilter, CampaignStatus, SortBy, UrgencyLevel, User, UserId, UserType,
};

/// Apply a filter to a campaign collection
///
/// Every set field of the filter must match (AND across fields); list
/// fields match when any listed value matches (OR within a field). When
/// `sort_by` is set the survivors are stably sorted, otherwise they keep
/// their input order.
///
/// The input is never mutated and the result is an independent copy.
pub fn query_campaigns(campaigns: &[Campaign], filter: &CampaignFilter) -> Vec<Campaign> {
    let search = lowercase_needle(filter.search.as_deref());
    let location = lowercase_needle(filter.location.as_deref());

    let mut result: Vec<Campaign> = campaigns
        .iter()
        .filter(|c| search.as_deref().is_none_or(|q| matches_search(c, q)))
        .filter(|c| filter.causes.is_empty() || intersects(&c.causes, &filter.causes))
        .filter(|c| filter.skills.is_empty() || intersects(&c.skills, &filter.skills))
        .filter(|c| {
            location
                .as_deref()
                .is_none_or(|l| c.location.to_lowercase().contains(l))
        })
        .filter(|c| filter.remote.is_none_or(|remote| c.is_remote == remote))
        .filter(|c| filter.status.is_empty() || filter.status.contains(&c.status))
        .filter(|c| {
            filter.urgency.is_empty()
                || c
                    .urgency_level
                    .is_some_and(|level| filter.urgency.contains(&level))
        })
        .filter(|c| filter.duration.is_none_or(|d| d.contains(c.required_hours)))
        .cloned()
        .collect();

    if let Some(sort_by) = filter.sort_by {
        sort_campaigns(&mut result, sort_by);
    }

    debug!(
        "Campaign query matched {} of {} campaigns",
        result.len(),
        campaigns.len()
    );
    result
}

/// Stably sort campaigns in place
pub fn sort_campaigns(campaigns: &mut [Campaign], sort_by: SortBy) {
    match sort_by {
        SortBy::Newest => campaigns.sort_by_key(|c| Reverse(c.created_at)),
        SortBy::Popularity => campaigns.sort_by_key(|c| Reverse(c.popularity())),
        SortBy::Urgency => campaigns.sort_by_key(|c| Reverse(urgency_rank(c.urgency_level))),
        // Open-ended campaigns sort after every dated one
        SortBy::EndingSoon => campaigns.sort_by_key(|c| (c.end_date.is_none(), c.end_date)),
    }
}

/// Rank for the urgency sort; a campaign without a level ranks below low
pub fn urgency_rank(level: Option<UrgencyLevel>) -> u8 {
    level.map_or(0, UrgencyLevel::rank)
}

/// Active, high-urgency campaigns in input order, at most `limit`
pub fn featured_campaigns(campaigns: &[Campaign], limit: usize) -> Vec<Campaign> {
    campaigns
        .iter()
        .filter(|c| c.status == CampaignStatus::Active)
        .filter(|c| c.urgency_level == Some(UrgencyLevel::High))
        .take(limit)
        .cloned()
        .collect()
}

/// Campaigns posted by an organization, in input order
pub fn campaigns_for_organization(campaigns: &[Campaign], organization: &UserId) -> Vec<Campaign> {
    campaigns
        .iter()
        .filter(|c| c.organization_id == *organization)
        .cloned()
        .collect()
}

/// Campaigns a user has applied to, in input order
pub fn campaigns_applied_by(campaigns: &[Campaign], user: &UserId) -> Vec<Campaign> {
    campaigns
        .iter()
        .filter(|c| c.has_applied(user))
        .cloned()
        .collect()
}

/// Campaigns shown on a profile, in input order
///
/// A volunteer sees campaigns they applied to or volunteer on; an
/// organization sees the campaigns it posted.
pub fn campaigns_for_user(campaigns: &[Campaign], user: &User) -> Vec<Campaign> {
    match user.user_type {
        UserType::Volunteer => campaigns
            .iter()
            .filter(|c| c.is_volunteer(&user.id) || c.has_applied(&user.id))
            .cloned()
            .collect(),
        UserType::Organization => campaigns_for_organization(campaigns, &user.id),
    }
}

/// Lowercased needle, or `None` when the field is unset or empty
fn lowercase_needle(value: Option<&str>) -> Option<String> {
    value.filter(|v| !v.is_empty()).map(str::to_lowercase)
}

fn matches_search(campaign: &Campaign, needle: &str) -> bool {
    campaign.title.to_lowercase().contains(needle)
        || campaign.description.to_lowercase().contains(needle)
        || campaign.location.to_lowercase().contains(needle)
}

fn intersects(tags: &[String], wanted: &[String]) -> bool {
    tags.iter().any(|tag| wanted.contains(tag))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CampaignId, DurationRange};
    use chrono::{DateTime, TimeZone, Utc};

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap()
    }

    fn campaign(id: &str) -> crate::models::CampaignBuilder {
        Campaign::builder(CampaignId::new(id), format!("Campaign {}", id)).created_at(at(1))
    }

    fn ids(campaigns: &[Campaign]) -> Vec<&str> {
        campaigns.iter().map(|c| c.id.as_str()).collect()
    }

    fn sample() -> Vec<Campaign> {
        vec![
            campaign("c0")
                .description("Plant trees in the city")
                .location("Chicago, IL")
                .causes(["Environment", "Community Development"])
                .skills(["Gardening"])
                .required_hours(6)
                .status(CampaignStatus::Upcoming)
                .urgency(UrgencyLevel::Medium)
                .build(),
            campaign("c1")
                .description("After-school tutoring")
                .location("Boston, MA")
                .causes(["Education"])
                .skills(["Teaching", "Mentoring"])
                .required_hours(3)
                .urgency(UrgencyLevel::High)
                .build(),
            campaign("c2")
                .description("Build a health awareness website")
                .location("Remote")
                .remote(true)
                .causes(["Health", "Education"])
                .skills(["Web Development"])
                .required_hours(20)
                .build(),
        ]
    }

    #[test]
    fn test_empty_filter_returns_input_order() {
        let campaigns = sample();
        let result = query_campaigns(&campaigns, &CampaignFilter::new());
        assert_eq!(result, campaigns);
    }

    #[test]
    fn test_query_does_not_mutate_input() {
        let campaigns = sample();
        let before = campaigns.clone();
        let filter = CampaignFilter::new().sort_by(SortBy::Urgency);
        let filter_before = filter.clone();

        let first = query_campaigns(&campaigns, &filter);
        let second = query_campaigns(&campaigns, &filter);

        assert_eq!(campaigns, before);
        assert_eq!(filter, filter_before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let campaigns = sample();

        let by_title = query_campaigns(&campaigns, &CampaignFilter::new().search("CAMPAIGN C1"));
        assert_eq!(ids(&by_title), vec!["c1"]);

        let by_description = query_campaigns(&campaigns, &CampaignFilter::new().search("Trees"));
        assert_eq!(ids(&by_description), vec!["c0"]);

        let by_location = query_campaigns(&campaigns, &CampaignFilter::new().search("remote"));
        assert_eq!(ids(&by_location), vec!["c2"]);
    }

    #[test]
    fn test_empty_search_is_no_constraint() {
        let campaigns = sample();
        let result = query_campaigns(&campaigns, &CampaignFilter::new().search(""));
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_causes_match_any_intersection() {
        let campaigns = sample();
        let filter = CampaignFilter::new().causes(["Education", "Hunger"]);
        let result = query_campaigns(&campaigns, &filter);
        assert_eq!(ids(&result), vec!["c1", "c2"]);
    }

    #[test]
    fn test_skills_match_any_intersection() {
        let campaigns = sample();
        let filter = CampaignFilter::new().skills(["Mentoring", "Gardening"]);
        let result = query_campaigns(&campaigns, &filter);
        assert_eq!(ids(&result), vec!["c0", "c1"]);
    }

    #[test]
    fn test_tag_match_is_exact() {
        let campaigns = sample();
        let filter = CampaignFilter::new().causes(["education"]);
        assert!(query_campaigns(&campaigns, &filter).is_empty());
    }

    #[test]
    fn test_location_substring() {
        let campaigns = sample();
        let result = query_campaigns(&campaigns, &CampaignFilter::new().location("boston"));
        assert_eq!(ids(&result), vec!["c1"]);
    }

    #[test]
    fn test_remote_false_is_a_constraint() {
        let campaigns = sample();
        let on_site = query_campaigns(&campaigns, &CampaignFilter::new().remote(false));
        assert_eq!(ids(&on_site), vec!["c0", "c1"]);

        let remote = query_campaigns(&campaigns, &CampaignFilter::new().remote(true));
        assert_eq!(ids(&remote), vec!["c2"]);
    }

    #[test]
    fn test_predicates_combine_conjunctively() {
        let campaigns = sample();
        let filter = CampaignFilter::new()
            .causes(["Education"])
            .remote(false)
            .duration(1, 5);
        let result = query_campaigns(&campaigns, &filter);
        assert_eq!(ids(&result), vec!["c1"]);
    }

    #[test]
    fn test_status_filter_is_sound_and_complete() {
        let statuses = [
            CampaignStatus::Active,
            CampaignStatus::Active,
            CampaignStatus::Upcoming,
            CampaignStatus::Completed,
            CampaignStatus::Active,
        ];
        let campaigns: Vec<Campaign> = statuses
            .iter()
            .enumerate()
            .map(|(i, status)| campaign(&format!("c{}", i)).status(*status).build())
            .collect();

        let filter = CampaignFilter::new().status([CampaignStatus::Active]);
        let result = query_campaigns(&campaigns, &filter);

        assert_eq!(ids(&result), vec!["c0", "c1", "c4"]);
        assert!(result.iter().all(|c| c.status == CampaignStatus::Active));
    }

    #[test]
    fn test_cancelled_status_is_filterable() {
        let campaigns = vec![
            campaign("c0").status(CampaignStatus::Cancelled).build(),
            campaign("c1").build(),
        ];
        let filter = CampaignFilter::new().status([CampaignStatus::Cancelled]);
        assert_eq!(ids(&query_campaigns(&campaigns, &filter)), vec!["c0"]);
    }

    #[test]
    fn test_urgency_filter_excludes_undefined_level() {
        let campaigns = sample();
        let filter = CampaignFilter::new().urgency([
            UrgencyLevel::Low,
            UrgencyLevel::Medium,
            UrgencyLevel::High,
        ]);
        let result = query_campaigns(&campaigns, &filter);
        assert_eq!(ids(&result), vec!["c0", "c1"]);
        assert!(result.iter().all(|c| c.urgency_level.is_some()));
    }

    #[test]
    fn test_duration_range_keeps_input_order() {
        let campaigns: Vec<Campaign> = [3, 6, 20, 2, 6]
            .iter()
            .enumerate()
            .map(|(i, hours)| campaign(&format!("c{}", i)).required_hours(*hours).build())
            .collect();

        let result = query_campaigns(&campaigns, &CampaignFilter::new().duration(3, 6));
        assert_eq!(ids(&result), vec!["c0", "c1", "c4"]);
    }

    #[test]
    fn test_degenerate_duration_range_matches_exact_hours() {
        let campaigns: Vec<Campaign> = [3, 6, 20, 2, 6]
            .iter()
            .enumerate()
            .map(|(i, hours)| campaign(&format!("c{}", i)).required_hours(*hours).build())
            .collect();

        let result = query_campaigns(&campaigns, &CampaignFilter::new().duration(6, 6));
        assert_eq!(ids(&result), vec!["c1", "c4"]);
        assert!(result.iter().all(|c| c.required_hours == 6));
    }

    #[test]
    fn test_inverted_duration_range_yields_empty() {
        let campaigns = sample();
        let filter = CampaignFilter {
            duration: Some(DurationRange::new(10, 1)),
            ..CampaignFilter::default()
        };
        assert!(query_campaigns(&campaigns, &filter).is_empty());
    }

    #[test]
    fn test_sort_newest_first() {
        let campaigns = vec![
            campaign("old").created_at(at(1)).build(),
            campaign("new").created_at(at(9)).build(),
            campaign("mid").created_at(at(5)).build(),
        ];
        let result = query_campaigns(&campaigns, &CampaignFilter::new().sort_by(SortBy::Newest));
        assert_eq!(ids(&result), vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_sort_popularity_is_stable() {
        let campaigns = vec![
            campaign("a").applicants(["u1"]).build(),
            campaign("b").applicants(["u1", "u2"]).volunteers(["u3"]).build(),
            campaign("c").volunteers(["u4"]).build(),
            campaign("d").build(),
        ];
        let result =
            query_campaigns(&campaigns, &CampaignFilter::new().sort_by(SortBy::Popularity));
        assert_eq!(ids(&result), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_sort_urgency_ranks_undefined_last() {
        let levels = [
            Some(UrgencyLevel::High),
            None,
            Some(UrgencyLevel::Medium),
            Some(UrgencyLevel::High),
            Some(UrgencyLevel::Low),
        ];
        let campaigns: Vec<Campaign> = levels
            .iter()
            .enumerate()
            .map(|(i, level)| {
                let mut c = campaign(&format!("c{}", i)).build();
                c.urgency_level = *level;
                c
            })
            .collect();

        let result = query_campaigns(&campaigns, &CampaignFilter::new().sort_by(SortBy::Urgency));
        let order: Vec<Option<UrgencyLevel>> = result.iter().map(|c| c.urgency_level).collect();
        assert_eq!(
            order,
            vec![
                Some(UrgencyLevel::High),
                Some(UrgencyLevel::High),
                Some(UrgencyLevel::Medium),
                Some(UrgencyLevel::Low),
                None,
            ]
        );
        assert_eq!(ids(&result)[..2], ["c0", "c3"]);
    }

    #[test]
    fn test_sort_ending_soon_puts_open_ended_last() {
        let campaigns = vec![
            campaign("c0").end_date(at(20)).build(),
            campaign("open").build(),
            campaign("c2").end_date(at(5)).build(),
            campaign("c3").end_date(at(28)).build(),
            campaign("c4").end_date(at(10)).build(),
        ];
        let result =
            query_campaigns(&campaigns, &CampaignFilter::new().sort_by(SortBy::EndingSoon));
        assert_eq!(ids(&result), vec!["c2", "c4", "c0", "c3", "open"]);
    }

    #[test]
    fn test_sort_ending_soon_keeps_open_ended_order() {
        let campaigns = vec![
            campaign("open-a").build(),
            campaign("dated").end_date(at(3)).build(),
            campaign("open-b").build(),
        ];
        let result =
            query_campaigns(&campaigns, &CampaignFilter::new().sort_by(SortBy::EndingSoon));
        assert_eq!(ids(&result), vec!["dated", "open-a", "open-b"]);
    }

    #[test]
    fn test_filter_then_sort() {
        let campaigns = sample();
        let filter = CampaignFilter::new()
            .causes(["Education"])
            .sort_by(SortBy::Urgency);
        let result = query_campaigns(&campaigns, &filter);
        assert_eq!(ids(&result), vec!["c1", "c2"]);
    }

    #[test]
    fn test_featured_campaigns() {
        let campaigns = vec![
            campaign("a").urgency(UrgencyLevel::High).build(),
            campaign("b")
                .urgency(UrgencyLevel::High)
                .status(CampaignStatus::Upcoming)
                .build(),
            campaign("c").urgency(UrgencyLevel::Medium).build(),
            campaign("d").urgency(UrgencyLevel::High).build(),
            campaign("e").urgency(UrgencyLevel::High).build(),
        ];
        assert_eq!(ids(&featured_campaigns(&campaigns, 2)), vec!["a", "d"]);
    }

    #[test]
    fn test_campaigns_for_organization_and_applicant() {
        let campaigns = vec![
            campaign("a").organization("org-1").applicants(["user-1"]).build(),
            campaign("b").organization("org-2").build(),
            campaign("c").organization("org-1").build(),
        ];
        let org = campaigns_for_organization(&campaigns, &UserId::new("org-1"));
        assert_eq!(ids(&org), vec!["a", "c"]);

        let applied = campaigns_applied_by(&campaigns, &UserId::new("user-1"));
        assert_eq!(ids(&applied), vec!["a"]);
    }

    #[test]
    fn test_campaigns_for_volunteer_profile() {
        let campaigns = vec![
            campaign("a").applicants(["user-1"]).build(),
            campaign("b").volunteers(["user-1"]).build(),
            campaign("c").applicants(["user-2"]).build(),
            campaign("d")
                .applicants(["user-1"])
                .volunteers(["user-1"])
                .build(),
        ];
        let user = User::registered(
            UserId::new("user-1"),
            "Alex",
            "alex@example.com",
            UserType::Volunteer,
            at(1),
        );
        assert_eq!(ids(&campaigns_for_user(&campaigns, &user)), vec!["a", "b", "d"]);
    }

    #[test]
    fn test_campaigns_for_organization_profile() {
        let campaigns = vec![
            campaign("a").organization("org-1").build(),
            campaign("b").organization("org-2").applicants(["org-1"]).build(),
            campaign("c").organization("org-1").build(),
        ];
        let org = User::registered(
            UserId::new("org-1"),
            "GreenEarth",
            "contact@greenearth.org",
            UserType::Organization,
            at(1),
        );
        assert_eq!(ids(&campaigns_for_user(&campaigns, &org)), vec!["a", "c"]);
    }
}
