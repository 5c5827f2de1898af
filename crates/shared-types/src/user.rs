use serde::{Deserialize, Serialize};

/// Organisational role of a signed-in user.
///
/// - `Member`: regular team member. Also the fallback for unknown role strings.
/// - `Tl`: team lead, manages the members of their team.
/// - `Admin` / `SuperAdmin`: administration access.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    Member,
    Tl,
    Admin,
    SuperAdmin,
}

impl Role {
    /// Parse from the API's `role` field. Unknown values default to Member.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "tl" => Role::Tl,
            "admin" => Role::Admin,
            "super_admin" => Role::SuperAdmin,
            _ => Role::Member,
        }
    }

    /// Lowercase wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Tl => "tl",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }

    /// Uppercased label shown in headers, e.g. "SUPER ADMIN".
    pub fn label(&self) -> String {
        self.as_str().replacen('_', " ", 1).to_uppercase()
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin | Role::SuperAdmin)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::from_str_or_default(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

/// The signed-in user as returned by the team API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub employee_id: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub is_password_changed: bool,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// `GET /auth/me` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserEnvelope {
    pub user: User,
}
