//! Dashboard tabs and their keep-alive cache
//!
//! A tab's subtree is mounted the first time the tab is activated and then
//! stays mounted; switching tabs only toggles visibility. This keeps every
//! AI widget's fetch state alive across tab switches.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TabId {
    Overview,
    Insights,
    Champions,
    Special,
}

impl TabId {
    pub const ALL: [TabId; 4] = [
        TabId::Overview,
        TabId::Insights,
        TabId::Champions,
        TabId::Special,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TabId::Overview => "overview",
            TabId::Insights => "insights",
            TabId::Champions => "champions",
            TabId::Special => "special",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TabId::Overview => "Overview",
            TabId::Insights => "AI Insights",
            TabId::Champions => "Champions",
            TabId::Special => "Special Features",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TabId::Overview => "📊",
            TabId::Insights => "✨",
            TabId::Champions => "🏆",
            TabId::Special => "🔥",
        }
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TabId::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| format!("Unknown tab: {}", s))
    }
}

/// Tracks the active tab and which tabs have been mounted
#[derive(Debug, Clone, PartialEq)]
pub struct TabCache {
    active: TabId,
    mounted: BTreeSet<TabId>,
}

impl Default for TabCache {
    fn default() -> Self {
        Self::new(TabId::Overview)
    }
}

impl TabCache {
    pub fn new(initial: TabId) -> Self {
        Self {
            active: initial,
            mounted: BTreeSet::from([initial]),
        }
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    /// Switch tabs. Returns `true` when this is the tab's first activation
    /// and its subtree must be mounted now.
    pub fn activate(&mut self, tab: TabId) -> bool {
        self.active = tab;
        let first = self.mounted.insert(tab);
        if first {
            tracing::debug!(tab = %tab, "Mounting tab");
        }
        first
    }

    pub fn is_mounted(&self, tab: TabId) -> bool {
        self.mounted.contains(&tab)
    }

    pub fn is_visible(&self, tab: TabId) -> bool {
        self.active == tab
    }

    /// Tabs currently mounted, in tab order
    pub fn mounted(&self) -> impl Iterator<Item = TabId> + '_ {
        self.mounted.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_on_first_activation_only() {
        let mut cache = TabCache::default();
        assert!(cache.is_mounted(TabId::Overview));
        assert!(!cache.is_mounted(TabId::Insights));

        assert!(cache.activate(TabId::Insights));
        assert!(cache.is_visible(TabId::Insights));
        assert!(!cache.is_visible(TabId::Overview));

        assert!(!cache.activate(TabId::Overview));
        assert!(!cache.activate(TabId::Insights));

        // Never unmounted
        assert!(cache.is_mounted(TabId::Overview));
        assert!(cache.is_mounted(TabId::Insights));
        assert_eq!(
            cache.mounted().collect::<Vec<_>>(),
            vec![TabId::Overview, TabId::Insights]
        );
    }

    #[test]
    fn test_tab_ids_round_trip_through_str() {
        for tab in TabId::ALL {
            assert_eq!(tab.as_str().parse::<TabId>(), Ok(tab));
        }
        assert!("roast".parse::<TabId>().is_err());
    }
}
