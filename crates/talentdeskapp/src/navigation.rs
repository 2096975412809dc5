//! # Navigation State
//!
//! Which dashboard section is showing, which sidebar groups are expanded and
//! which player is selected. Every page keys off this.
//!
//! Setters replace fields unconditionally and never validate section names.
//! Mapping an unknown `(section, sub_item)` pair to something displayable is
//! the job of [`resolve_view`], which falls back to the dashboard.

use serde::Serialize;
use std::collections::BTreeSet;

pub const DEFAULT_SECTION: &str = "dashboard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationState {
    pub active_section: String,
    pub active_sub_item: Option<String>,
    pub expanded_items: BTreeSet<String>,
    pub selected_player_id: Option<String>,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active_section: DEFAULT_SECTION.to_string(),
            active_sub_item: None,
            expanded_items: BTreeSet::from([DEFAULT_SECTION.to_string()]),
            selected_player_id: None,
        }
    }
}

impl NavigationState {
    /// Replace both the section and the sub-item.
    pub fn set_active_section(&mut self, section: &str, sub_item: Option<&str>) {
        self.active_section = section.to_string();
        self.active_sub_item = sub_item.map(str::to_string);
    }

    pub fn set_selected_player_id(&mut self, id: Option<&str>) {
        self.selected_player_id = id.map(str::to_string);
    }

    /// Add `item` if absent, remove it if present.
    pub fn toggle_expanded(&mut self, item: &str) {
        if !self.expanded_items.remove(item) {
            self.expanded_items.insert(item.to_string());
        }
    }

    pub fn is_expanded(&self, item: &str) -> bool {
        self.expanded_items.contains(item)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
    pub sub_items: &'static [SubItem],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubItem {
    pub id: &'static str,
    pub label: &'static str,
}

const fn sub(id: &'static str, label: &'static str) -> SubItem {
    SubItem { id, label }
}

/// Sidebar catalogue, in display order.
pub const SECTIONS: &[Section] = &[
    Section {
        id: "dashboard",
        label: "Dashboard",
        sub_items: &[],
    },
    Section {
        id: "exercises",
        label: "Exercises",
        sub_items: &[
            sub("create-exercise", "Create Exercise"),
            sub("exercise-library", "Exercise Library"),
            sub("exercise-analytics", "Exercise Analytics"),
        ],
    },
    Section {
        id: "templates",
        label: "Templates",
        sub_items: &[
            sub("create-template", "Create Template"),
            sub("existing-templates", "Existing Templates"),
            sub("template-analytics", "Template Analytics"),
        ],
    },
    Section {
        id: "players",
        label: "Players",
        sub_items: &[
            sub("all-players", "All Players"),
            sub("player-analytics", "Player Analytics"),
        ],
    },
    Section {
        id: "talent",
        label: "Talent Pool",
        sub_items: &[
            sub("selected-candidates", "Selected Candidates"),
            sub("recruitment", "Recruitment Pipeline"),
        ],
    },
    Section {
        id: "videos",
        label: "Video Reviews",
        sub_items: &[
            sub("pending-reviews", "Pending Reviews"),
            sub("completed-reviews", "Completed Reviews"),
            sub("flagged-videos", "Flagged Videos"),
        ],
    },
    Section {
        id: "settings",
        label: "Settings",
        sub_items: &[
            sub("system-config", "System Config"),
            sub("user-management", "User Management"),
            sub("export-data", "Export Data"),
        ],
    },
];

pub fn section(id: &str) -> Option<&'static Section> {
    SECTIONS.iter().find(|s| s.id == id)
}

/// A view that exists in the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedView {
    pub section: &'static Section,
    pub sub_item: Option<&'static SubItem>,
}

/// Map navigation state to a known view.
///
/// An unknown section resolves to the dashboard. A known section with an
/// unknown sub-item resolves to the section itself.
pub fn resolve_view(state: &NavigationState) -> ResolvedView {
    let Some(found) = section(&state.active_section) else {
        return ResolvedView {
            section: &SECTIONS[0],
            sub_item: None,
        };
    };
    let sub_item = state
        .active_sub_item
        .as_deref()
        .and_then(|wanted| found.sub_items.iter().find(|s| s.id == wanted));
    ResolvedView {
        section: found,
        sub_item,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_show_dashboard_expanded() {
        let nav = NavigationState::default();
        assert_eq!(nav.active_section, "dashboard");
        assert!(nav.active_sub_item.is_none());
        assert!(nav.is_expanded("dashboard"));
        assert_eq!(nav.expanded_items.len(), 1);
    }

    #[test]
    fn toggle_is_an_involution() {
        let mut nav = NavigationState::default();
        nav.toggle_expanded("videos");
        assert!(nav.is_expanded("videos"));
        nav.toggle_expanded("videos");
        assert!(!nav.is_expanded("videos"));
        nav.toggle_expanded("dashboard");
        assert!(nav.expanded_items.is_empty());
    }

    #[test]
    fn set_active_section_replaces_sub_item() {
        let mut nav = NavigationState::default();
        nav.set_active_section("videos", Some("flagged-videos"));
        nav.set_active_section("players", None);
        assert_eq!(nav.active_section, "players");
        assert!(nav.active_sub_item.is_none());
    }

    #[test]
    fn unknown_section_is_stored_but_resolves_to_dashboard() {
        let mut nav = NavigationState::default();
        nav.set_active_section("nowhere", Some("nothing"));
        assert_eq!(nav.active_section, "nowhere");

        let view = resolve_view(&nav);
        assert_eq!(view.section.id, "dashboard");
        assert!(view.sub_item.is_none());
    }

    #[test]
    fn known_section_with_unknown_sub_item() {
        let mut nav = NavigationState::default();
        nav.set_active_section("videos", Some("pending-reviews"));
        let view = resolve_view(&nav);
        assert_eq!(view.sub_item.unwrap().label, "Pending Reviews");

        nav.set_active_section("videos", Some("archive"));
        let view = resolve_view(&nav);
        assert_eq!(view.section.id, "videos");
        assert!(view.sub_item.is_none());
    }
}
