//! Organization directory search

use crate::models::Organization;

/// Organizations matching a search string and an optional cause
///
/// `search` is a case-insensitive substring of the name, description, or
/// location; an empty search matches everything. `cause` must be one of
/// the organization's causes exactly. Input order is kept.
pub fn search_organizations(
    organizations: &[Organization],
    search: Option<&str>,
    cause: Option<&str>,
) -> Vec<Organization> {
    let needle = search.filter(|s| !s.is_empty()).map(str::to_lowercase);

    organizations
        .iter()
        .filter(|org| needle.as_deref().is_none_or(|q| matches_search(org, q)))
        .filter(|org| cause.is_none_or(|cause| org.causes.iter().any(|c| c == cause)))
        .cloned()
        .collect()
}

fn matches_search(org: &Organization, needle: &str) -> bool {
    let contains = |field: Option<&str>| field.is_some_and(|f| f.to_lowercase().contains(needle));
    org.name.to_lowercase().contains(needle)
        || contains(org.description.as_deref())
        || contains(org.location.as_deref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserId;

    fn org(id: &str, name: &str, location: Option<&str>, causes: &[&str]) -> Organization {
        let mut org = Organization::new(UserId::new(id), name, format!("{}@example.org", id));
        org.location = location.map(str::to_string);
        org.causes = causes.iter().map(|c| c.to_string()).collect();
        org
    }

    fn directory() -> Vec<Organization> {
        let causes = ["Environment", "Education"];
        let mut green = org("org-1", "GreenEarth Foundation", Some("Chicago, IL"), &causes);
        green.description = Some("Clean-ups and awareness campaigns".to_string());
        vec![
            green,
            org("org-2", "EduAccess Initiative", Some("Boston, MA"), &["Education"]),
            org("org-3", "Health For All", None, &["Health"]),
        ]
    }

    fn ids(orgs: &[Organization]) -> Vec<&str> {
        orgs.iter().map(|o| o.id.as_str()).collect()
    }

    #[test]
    fn test_no_constraints_keeps_everything() {
        let orgs = directory();
        assert_eq!(search_organizations(&orgs, None, None), orgs);
        assert_eq!(search_organizations(&orgs, Some(""), None), orgs);
    }

    #[test]
    fn test_search_name_description_location() {
        let orgs = directory();
        assert_eq!(ids(&search_organizations(&orgs, Some("HEALTH"), None)), vec!["org-3"]);
        assert_eq!(ids(&search_organizations(&orgs, Some("clean-up"), None)), vec!["org-1"]);
        assert_eq!(ids(&search_organizations(&orgs, Some("boston"), None)), vec!["org-2"]);
        assert!(search_organizations(&orgs, Some("seattle"), None).is_empty());
    }

    #[test]
    fn test_cause_is_exact_and_combines_with_search() {
        let orgs = directory();
        assert_eq!(
            ids(&search_organizations(&orgs, None, Some("Education"))),
            vec!["org-1", "org-2"]
        );
        assert!(search_organizations(&orgs, None, Some("education")).is_empty());
        assert_eq!(
            ids(&search_organizations(&orgs, Some("chicago"), Some("Education"))),
            vec!["org-1"]
        );
    }
}
