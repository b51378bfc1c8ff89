//! Custom test assertions

use estate_hub::core::types::Page;
use estate_hub::{Action, Capability, Listing, PermissionTable, Role};

/// Assertions for listing pages
pub trait PageAssertions {
    /// Assert the page titles, in order
    fn assert_titles(&self, expected: &[&str]);
}

impl PageAssertions for Page<Listing> {
    fn assert_titles(&self, expected: &[&str]) {
        let titles: Vec<&str> = self.items.iter().map(|l| l.title.as_str()).collect();
        assert_eq!(titles, expected, "unexpected page contents");
    }
}

/// Assert `role` holds every permission `other` holds
pub fn assert_superset(table: &PermissionTable, role: Role, other: Role) {
    let wide = table.permissions(role);
    let narrow = table.permissions(other);

    for action in Action::ALL {
        assert!(
            narrow.resources(action).is_subset(wide.resources(action)),
            "{} lacks some {} permission of {}",
            role,
            action,
            other
        );
    }
    for capability in Capability::ALL {
        if narrow.capability(capability) {
            assert!(
                wide.capability(capability),
                "{} lacks {} held by {}",
                role,
                capability.as_str(),
                other
            );
        }
    }
}
