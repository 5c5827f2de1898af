use crate::user::Role;

/// A dashboard section selectable from the section tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Overview,
    Team,
    Admin,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Overview => "overview",
            Section::Team => "team",
            Section::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Section::Overview => "Overview",
            Section::Team => "Team Management",
            Section::Admin => "Admin Panel",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Section::Overview => "📊",
            Section::Team => "👥",
            Section::Admin => "⚙️",
        }
    }
}

/// Ordered sections available to a role. Overview always comes first.
pub fn sections_for_role(role: Option<&Role>) -> Vec<Section> {
    let mut sections = vec![Section::Overview];
    match role {
        Some(Role::Tl) => sections.push(Section::Team),
        Some(role) if role.is_admin() => sections.push(Section::Admin),
        _ => {}
    }
    sections
}

/// The section to render: the selection if it is offered, else Overview.
pub fn active_or_default(selected: Section, available: &[Section]) -> Section {
    if available.contains(&selected) {
        selected
    } else {
        Section::Overview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn member_and_no_user_see_only_overview() {
        assert_eq!(sections_for_role(None), vec![Section::Overview]);
        assert_eq!(sections_for_role(Some(&Role::Member)), vec![Section::Overview]);
    }

    #[test]
    fn team_lead_gets_team_section() {
        assert_eq!(
            sections_for_role(Some(&Role::Tl)),
            vec![Section::Overview, Section::Team]
        );
    }

    #[test]
    fn admins_get_admin_section() {
        for role in [Role::Admin, Role::SuperAdmin] {
            assert_eq!(
                sections_for_role(Some(&role)),
                vec![Section::Overview, Section::Admin]
            );
        }
    }

    #[test]
    fn unknown_role_string_behaves_like_member() {
        let role = Role::from_str_or_default("auditor");
        assert_eq!(sections_for_role(Some(&role)), vec![Section::Overview]);
    }

    #[test]
    fn unavailable_selection_falls_back_to_overview() {
        let available = sections_for_role(Some(&Role::Member));
        assert_eq!(active_or_default(Section::Team, &available), Section::Overview);
        let available = sections_for_role(Some(&Role::Tl));
        assert_eq!(active_or_default(Section::Team, &available), Section::Team);
    }
}
