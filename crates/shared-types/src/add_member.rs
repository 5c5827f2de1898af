//! Add-member form state and the creation payload it composes.

use crate::error::AppError;
use crate::member::{Member, Specialization};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub const ADD_MEMBER_SUCCESS: &str = "Member added successfully!";
pub const ADD_MEMBER_FALLBACK: &str = "Error adding member";
/// How long the success banner stays visible.
pub const SUCCESS_CLEAR_MS: u64 = 3000;

/// A single text input of the add-member form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    FirstName,
    LastName,
    Email,
    Broker,
    Experience,
    Specialization,
    TargetAmount,
    Phone,
    Street,
    City,
    State,
    Pincode,
}

/// Raw field values as typed. Everything is a string until submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemberDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub broker: String,
    pub segments: Vec<String>,
    pub experience: String,
    pub specialization: String,
    pub target_amount: String,
    pub phone: String,
    pub street: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
}

impl MemberDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::FirstName => &self.first_name,
            DraftField::LastName => &self.last_name,
            DraftField::Email => &self.email,
            DraftField::Broker => &self.broker,
            DraftField::Experience => &self.experience,
            DraftField::Specialization => &self.specialization,
            DraftField::TargetAmount => &self.target_amount,
            DraftField::Phone => &self.phone,
            DraftField::Street => &self.street,
            DraftField::City => &self.city,
            DraftField::State => &self.state,
            DraftField::Pincode => &self.pincode,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        let slot = match field {
            DraftField::FirstName => &mut self.first_name,
            DraftField::LastName => &mut self.last_name,
            DraftField::Email => &mut self.email,
            DraftField::Broker => &mut self.broker,
            DraftField::Experience => &mut self.experience,
            DraftField::Specialization => &mut self.specialization,
            DraftField::TargetAmount => &mut self.target_amount,
            DraftField::Phone => &mut self.phone,
            DraftField::Street => &mut self.street,
            DraftField::City => &mut self.city,
            DraftField::State => &mut self.state,
            DraftField::Pincode => &mut self.pincode,
        };
        *slot = value;
    }

    /// Add the segment if absent, remove it if present.
    pub fn toggle_segment(&mut self, segment_id: &str) {
        if let Some(pos) = self.segments.iter().position(|s| s == segment_id) {
            self.segments.remove(pos);
        } else {
            self.segments.push(segment_id.to_string());
        }
    }

    pub fn has_segment(&self, segment_id: &str) -> bool {
        self.segments.iter().any(|s| s == segment_id)
    }

    pub fn to_request(&self) -> CreateMemberRequest {
        CreateMemberRequest {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            broker: self.broker.clone(),
            segments: self.segments.clone(),
            member_details: NewMemberDetails {
                experience: parse_number(&self.experience),
                specialization: Specialization::parse(&self.specialization),
                target_amount: parse_number(&self.target_amount),
                phone: non_empty(&self.phone),
                address: NewAddress {
                    street: non_empty(&self.street),
                    city: non_empty(&self.city),
                    state: non_empty(&self.state),
                    pincode: non_empty(&self.pincode),
                },
            },
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// `POST /users/members` body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateMemberRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub broker: String,
    pub segments: Vec<String>,
    #[serde(default, skip_serializing_if = "NewMemberDetails::is_empty")]
    pub member_details: NewMemberDetails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NewMemberDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<Specialization>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "NewAddress::is_empty")]
    pub address: NewAddress,
}

impl NewMemberDetails {
    pub fn is_empty(&self) -> bool {
        self.experience.is_none()
            && self.specialization.is_none()
            && self.target_amount.is_none()
            && self.phone.is_none()
            && self.address.is_empty()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewAddress {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pincode: Option<String>,
}

impl NewAddress {
    pub fn is_empty(&self) -> bool {
        self.street.is_none() && self.city.is_none() && self.state.is_none() && self.pincode.is_none()
    }
}

/// Form state: the draft plus submission status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddMemberState {
    pub draft: MemberDraft,
    pub submitting: bool,
    pub error: Option<String>,
    pub success: Option<String>,
}

impl AddMemberState {
    /// Start a submission. Returns `None` while one is already outstanding.
    pub fn begin_submit(&mut self) -> Option<CreateMemberRequest> {
        if self.submitting {
            return None;
        }
        self.submitting = true;
        self.error = None;
        self.success = None;
        Some(self.draft.to_request())
    }

    /// Record the outcome. On success the draft is reset and the created
    /// member is handed back for the caller to report upward.
    pub fn finish<E: Display>(&mut self, result: Result<Member, E>) -> Option<Member> {
        self.submitting = false;
        match result {
            Ok(member) => {
                self.success = Some(ADD_MEMBER_SUCCESS.to_string());
                self.draft = MemberDraft::default();
                Some(member)
            }
            Err(e) => {
                self.error = Some(AppError::message_or(&e.to_string(), ADD_MEMBER_FALLBACK));
                None
            }
        }
    }

    pub fn clear_success(&mut self) {
        self.success = None;
    }
}
