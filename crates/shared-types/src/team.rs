use crate::filter::{filter_members, FilterCriteria};
use crate::member::Member;

/// Tabs of the team management composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TeamTab {
    #[default]
    List,
    Add,
}

/// In-memory state of the team management composite.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamRoster {
    pub members: Vec<Member>,
    pub filters: FilterCriteria,
    pub active_tab: TeamTab,
    pub loading: bool,
}

impl Default for TeamRoster {
    fn default() -> Self {
        Self {
            members: Vec::new(),
            filters: FilterCriteria::default(),
            active_tab: TeamTab::List,
            loading: true,
        }
    }
}

impl TeamRoster {
    /// Members passing the current filters.
    pub fn visible(&self) -> Vec<Member> {
        filter_members(&self.members, &self.filters)
    }

    /// Unfiltered member count shown on the list tab.
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// Apply a completed fetch. A failed fetch keeps the previous members.
    pub fn apply_fetch<E>(&mut self, result: Result<Vec<Member>, E>) {
        if let Ok(members) = result {
            self.members = members;
        }
        self.loading = false;
    }

    /// Prepend a freshly created member and return to the list.
    pub fn member_added(&mut self, member: Member) {
        self.members.insert(0, member);
        self.active_tab = TeamTab::List;
    }
}
