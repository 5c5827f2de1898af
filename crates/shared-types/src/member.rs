use serde::{Deserialize, Deserializer, Serialize};

/// Reference entity for a broker (`GET /brokers`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Broker {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

impl Reference for Broker {
    fn from_id(id: String) -> Self {
        Self { id, ..Self::default() }
    }
}

impl Broker {
    /// Option label, e.g. "Zerodha (ZRD)".
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// Reference entity for a trading segment (`GET /segments`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Segment {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub code: String,
}

impl Reference for Segment {
    fn from_id(id: String) -> Self {
        Self { id, ..Self::default() }
    }
}

impl Segment {
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }
}

/// A member's trading specialization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Specialization {
    EquityTrader,
    CommodityTrader,
    CurrencyTrader,
    DerivativesTrader,
    Analyst,
    Support,
}

pub const ALL_SPECIALIZATIONS: &[Specialization] = &[
    Specialization::EquityTrader,
    Specialization::CommodityTrader,
    Specialization::CurrencyTrader,
    Specialization::DerivativesTrader,
    Specialization::Analyst,
    Specialization::Support,
];

impl Specialization {
    /// Wire code, e.g. "EQUITY_TRADER".
    pub fn code(&self) -> &'static str {
        match self {
            Specialization::EquityTrader => "EQUITY_TRADER",
            Specialization::CommodityTrader => "COMMODITY_TRADER",
            Specialization::CurrencyTrader => "CURRENCY_TRADER",
            Specialization::DerivativesTrader => "DERIVATIVES_TRADER",
            Specialization::Analyst => "ANALYST",
            Specialization::Support => "SUPPORT",
        }
    }

    /// Human label used in selector options.
    pub fn display_name(&self) -> &'static str {
        match self {
            Specialization::EquityTrader => "Equity Trader",
            Specialization::CommodityTrader => "Commodity Trader",
            Specialization::CurrencyTrader => "Currency Trader",
            Specialization::DerivativesTrader => "Derivatives Trader",
            Specialization::Analyst => "Analyst",
            Specialization::Support => "Support",
        }
    }

    /// Code with underscores replaced by spaces, e.g. "EQUITY TRADER".
    pub fn spaced_code(&self) -> String {
        self.code().replace('_', " ")
    }

    /// Parse a selector or wire value. Empty or unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        ALL_SPECIALIZATIONS
            .iter()
            .copied()
            .find(|s| s.code() == value.trim())
    }
}

/// Postal address nested in member details.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Address {
    #[serde(default)]
    pub street: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub pincode: String,
}

impl Address {
    pub fn is_empty(&self) -> bool {
        self.street.is_empty()
            && self.city.is_empty()
            && self.state.is_empty()
            && self.pincode.is_empty()
    }
}

/// Professional profile of a team member.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MemberDetails {
    #[serde(default, deserialize_with = "lenient_number")]
    pub experience: Option<f64>,
    #[serde(default, deserialize_with = "lenient_specialization")]
    pub specialization: Option<Specialization>,
    #[serde(default, deserialize_with = "lenient_number")]
    pub target_amount: Option<f64>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: Address,
}

/// A team member as returned by `GET /users/my-team` and `POST /users/members`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, deserialize_with = "lenient_broker")]
    pub broker: Broker,
    #[serde(default, deserialize_with = "lenient_segments")]
    pub segments: Vec<Segment>,
    #[serde(default)]
    pub member_details: Option<MemberDetails>,
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }

    pub fn specialization(&self) -> Option<Specialization> {
        self.member_details.as_ref().and_then(|d| d.specialization)
    }

    pub fn in_segment(&self, segment_id: &str) -> bool {
        self.segments.iter().any(|s| s.id == segment_id)
    }

    /// Comma-separated segment names for list display.
    pub fn segment_names(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// `GET /brokers` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct BrokersEnvelope {
    #[serde(default)]
    pub brokers: Vec<Broker>,
}

/// `GET /segments` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SegmentsEnvelope {
    #[serde(default)]
    pub segments: Vec<Segment>,
}

/// `GET /users/my-team` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct TeamEnvelope {
    #[serde(default)]
    pub members: Vec<Member>,
}

/// `POST /users/members` response envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MemberEnvelope {
    pub member: Member,
}

/// A reference entity that may arrive populated or as a bare id.
trait Reference: Default {
    fn from_id(id: String) -> Self;
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RefOrId<T> {
    Populated(T),
    Id(String),
}

impl<T: Reference> RefOrId<T> {
    fn into_ref(self) -> T {
        match self {
            RefOrId::Populated(value) => value,
            RefOrId::Id(id) => T::from_id(id),
        }
    }
}

/// Broker as an object, a bare id string, or null (an empty broker).
fn lenient_broker<'de, D>(deserializer: D) -> Result<Broker, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<RefOrId<Broker>>::deserialize(deserializer)?;
    Ok(value.map(RefOrId::into_ref).unwrap_or_default())
}

/// Segments as objects or bare id strings. Null entries and a null list are dropped.
fn lenient_segments<'de, D>(deserializer: D) -> Result<Vec<Segment>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Vec<Option<RefOrId<Segment>>>>::deserialize(deserializer)?;
    Ok(value
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .map(RefOrId::into_ref)
        .collect())
}

/// Accept a JSON number, a numeric string, an empty string or null.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_f64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Unknown or empty specialization codes deserialize to `None`.
fn lenient_specialization<'de, D>(deserializer: D) -> Result<Option<Specialization>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().and_then(Specialization::parse))
}
