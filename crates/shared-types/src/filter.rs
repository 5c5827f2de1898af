//! Client-side filtering of the fetched team list.
//!
//! The filtered view is always recomputed from `(members, criteria)`; nothing
//! here mutates the member list it is given.

use crate::member::{Broker, Member, Segment, Specialization};
use serde::{Deserialize, Serialize};

/// Which of the three filter selectors a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Broker,
    Segment,
    Specialization,
}

/// Active filter selections. `None` means "all".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub broker: Option<String>,
    pub segment: Option<String>,
    pub specialization: Option<Specialization>,
}

impl FilterCriteria {
    pub fn is_active(&self) -> bool {
        self.broker.is_some() || self.segment.is_some() || self.specialization.is_some()
    }

    /// Return a copy with one field replaced by a raw selector value.
    /// An empty value clears that field.
    pub fn with(&self, field: FilterField, value: &str) -> Self {
        let value = value.trim();
        let non_empty = (!value.is_empty()).then(|| value.to_string());
        let mut next = self.clone();
        match field {
            FilterField::Broker => next.broker = non_empty,
            FilterField::Segment => next.segment = non_empty,
            FilterField::Specialization => next.specialization = Specialization::parse(value),
        }
        next
    }

    /// Raw selector value for `field` (empty string when unset).
    pub fn value_of(&self, field: FilterField) -> String {
        match field {
            FilterField::Broker => self.broker.clone().unwrap_or_default(),
            FilterField::Segment => self.segment.clone().unwrap_or_default(),
            FilterField::Specialization => self
                .specialization
                .map(|s| s.code().to_string())
                .unwrap_or_default(),
        }
    }

    /// Whether `member` passes every active criterion.
    pub fn matches(&self, member: &Member) -> bool {
        if let Some(broker) = &self.broker {
            if member.broker.id != *broker {
                return false;
            }
        }
        if let Some(segment) = &self.segment {
            if !member.in_segment(segment) {
                return false;
            }
        }
        if let Some(specialization) = self.specialization {
            if member.specialization() != Some(specialization) {
                return false;
            }
        }
        true
    }
}

/// Members passing `criteria`, in their original order.
pub fn filter_members(members: &[Member], criteria: &FilterCriteria) -> Vec<Member> {
    members
        .iter()
        .filter(|m| criteria.matches(m))
        .cloned()
        .collect()
}

/// A removable chip in the "Active filters" row.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChip {
    pub field: FilterField,
    pub label: String,
}

/// Chips for each active criterion, resolving ids against the fetched
/// reference lists. An id missing from the list renders with an empty name.
pub fn active_chips(
    criteria: &FilterCriteria,
    brokers: &[Broker],
    segments: &[Segment],
) -> Vec<FilterChip> {
    let mut chips = Vec::new();
    if let Some(id) = &criteria.broker {
        let name = brokers
            .iter()
            .find(|b| &b.id == id)
            .map(|b| b.name.as_str())
            .unwrap_or_default();
        chips.push(FilterChip {
            field: FilterField::Broker,
            label: format!("Broker: {name}"),
        });
    }
    if let Some(id) = &criteria.segment {
        let name = segments
            .iter()
            .find(|s| &s.id == id)
            .map(|s| s.name.as_str())
            .unwrap_or_default();
        chips.push(FilterChip {
            field: FilterField::Segment,
            label: format!("Segment: {name}"),
        });
    }
    if let Some(specialization) = criteria.specialization {
        chips.push(FilterChip {
            field: FilterField::Specialization,
            label: format!("Specialization: {}", specialization.spaced_code()),
        });
    }
    chips
}
