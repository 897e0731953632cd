use crate::config;
use crate::Route;

#[derive(Clone, PartialEq)]
pub enum NavTarget {
    /// In-app route, handled by the router.
    Page(Route),
    /// Same-origin path plus fragment, rendered as a plain hyperlink.
    Section(&'static str),
    /// Off-site destination, opened in a new window.
    External(&'static str),
}

/// How the top bar places an entry: in the link group or among the
/// account buttons. The overlay ignores placement and lists everything.
#[derive(Clone, Copy, PartialEq)]
pub enum NavPlacement {
    Link,
    Action { primary: bool },
}

pub struct NavEntry {
    pub label: &'static str,
    pub target: NavTarget,
    pub placement: NavPlacement,
}

impl NavEntry {
    pub fn is_external(&self) -> bool {
        matches!(self.target, NavTarget::External(_))
    }
}

// One table feeds both the top bar and the mobile overlay, so the two
// renderings cannot drift apart.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry {
        label: "Home",
        target: NavTarget::Page(Route::Home),
        placement: NavPlacement::Link,
    },
    NavEntry {
        label: "Pricing",
        target: NavTarget::Section("/#pricing"),
        placement: NavPlacement::Link,
    },
    NavEntry {
        label: "Company",
        target: NavTarget::Section("/#company"),
        placement: NavPlacement::Link,
    },
    NavEntry {
        label: "Documentation",
        target: NavTarget::External(config::DOCS_URL),
        placement: NavPlacement::Link,
    },
    NavEntry {
        label: "Login",
        target: NavTarget::External(config::LOGIN_URL),
        placement: NavPlacement::Action { primary: false },
    },
    NavEntry {
        label: "Sign Up",
        target: NavTarget::External(config::REGISTER_URL),
        placement: NavPlacement::Action { primary: true },
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_lists_the_six_destinations_in_bar_order() {
        let labels: Vec<&str> = NAV_ENTRIES.iter().map(|e| e.label).collect();
        assert_eq!(
            labels,
            ["Home", "Pricing", "Company", "Documentation", "Login", "Sign Up"]
        );
    }

    #[test]
    fn offsite_entries_are_docs_and_the_account_actions() {
        let external: Vec<&str> = NAV_ENTRIES
            .iter()
            .filter(|e| e.is_external())
            .map(|e| e.label)
            .collect();
        assert_eq!(external, ["Documentation", "Login", "Sign Up"]);
    }

    #[test]
    fn external_targets_are_absolute_urls() {
        for entry in NAV_ENTRIES {
            if let NavTarget::External(url) = &entry.target {
                assert!(url.starts_with("http"), "{} is not absolute", entry.label);
            }
        }
    }

    #[test]
    fn section_targets_are_home_fragments() {
        for entry in NAV_ENTRIES {
            if let NavTarget::Section(path) = &entry.target {
                assert!(path.starts_with("/#"), "{} is not a fragment", entry.label);
            }
        }
    }

    #[test]
    fn account_actions_end_the_table() {
        let first_action = NAV_ENTRIES
            .iter()
            .position(|e| matches!(e.placement, NavPlacement::Action { .. }))
            .unwrap();
        assert!(NAV_ENTRIES[first_action..]
            .iter()
            .all(|e| matches!(e.placement, NavPlacement::Action { .. })));
    }
}
