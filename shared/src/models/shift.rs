//! Shift Model (班次市场)
//!
//! A shift is a bookable work slot posted by a venue. JSON uses camelCase
//! keys to match the web client.
//!
//! Caller-supplied fields are stored as the raw JSON record the venue sent:
//! nothing is validated or coerced, unknown keys survive, and numbers echo
//! back exactly as written. Only the server-owned keys ([`RESERVED_KEYS`])
//! are replaced.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Shift lifecycle status
///
/// `open → pending` (apply) and `pending → booked` (approve).
/// `completed` exists in the wire format but no operation reaches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftStatus {
    Open,
    Pending,
    Booked,
    Completed,
}

impl ShiftStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Pending => "pending",
            Self::Booked => "booked",
            Self::Completed => "completed",
        }
    }

    /// Guarded lifecycle edges: only `open → pending` and `pending → booked`.
    pub fn can_transition_to(&self, next: ShiftStatus) -> bool {
        matches!(
            (self, next),
            (Self::Open, Self::Pending) | (Self::Pending, Self::Booked)
        )
    }
}

impl fmt::Display for ShiftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Industry of the posting venue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Industry {
    Hospitality,
    Healthcare,
}

impl Industry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hospitality => "hospitality",
            Self::Healthcare => "healthcare",
        }
    }
}

/// Cities served by the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum City {
    Beograd,
    NoviSad,
    Kragujevac,
    Nis,
    Subotica,
    Trebinje,
    BanjaLuka,
}

impl City {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beograd => "Beograd",
            Self::NoviSad => "Novi Sad",
            Self::Kragujevac => "Kragujevac",
            Self::Nis => "Niš",
            Self::Subotica => "Subotica",
            Self::Trebinje => "Trebinje",
            Self::BanjaLuka => "Banja Luka",
        }
    }
}

/// Raw caller record (`POST /api/shifts` body)
pub type ShiftFields = Map<String, Value>;

/// Create shift payload
pub type ShiftCreate = ShiftFields;

/// Keys owned by the server, never taken from a caller record
pub const RESERVED_KEYS: [&str; 4] = ["id", "status", "workerId", "workerName"];

/// Typed shift fields for records the server composes itself (demo data)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShiftDetails {
    pub venue_id: Option<String>,
    pub venue_name: Option<String>,
    /// Display avatar url
    pub venue_avatar: Option<String>,
    /// Display string, e.g. "1.2 km"
    pub distance: Option<String>,
    /// ISO-8601 timestamp
    pub date: Option<String>,
    /// HH:MM, no timezone
    pub start_time: Option<String>,
    /// HH:MM, may be earlier than start_time for overnight shifts
    pub end_time: Option<String>,
    pub role: Option<String>,
    /// Healthcare only
    pub department: Option<String>,
    pub pay: Option<u32>,
    pub industry: Option<Industry>,
    pub city: Option<City>,
}

impl From<ShiftDetails> for ShiftFields {
    fn from(d: ShiftDetails) -> Self {
        let mut fields = ShiftFields::new();
        let mut put = |key: &str, value: Option<Value>| {
            if let Some(v) = value {
                fields.insert(key.to_string(), v);
            }
        };

        put("venueId", d.venue_id.map(Value::from));
        put("venueName", d.venue_name.map(Value::from));
        put("venueAvatar", d.venue_avatar.map(Value::from));
        put("distance", d.distance.map(Value::from));
        put("date", d.date.map(Value::from));
        put("startTime", d.start_time.map(Value::from));
        put("endTime", d.end_time.map(Value::from));
        put("role", d.role.map(Value::from));
        put("department", d.department.map(Value::from));
        put("pay", d.pay.map(Value::from));
        put("industry", d.industry.map(|i| Value::from(i.as_str())));
        put("city", d.city.map(|c| Value::from(c.as_str())));

        fields
    }
}

/// Shift record as stored and returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    /// Server-assigned unique id
    pub id: String,
    /// Everything the caller sent, minus the reserved keys
    #[serde(flatten)]
    pub fields: ShiftFields,
    pub status: ShiftStatus,
    /// Worker who applied
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_id: Option<String>,
    /// Worker display name snapshot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub worker_name: Option<String>,
}

impl Shift {
    /// Build a fresh open shift from a caller record
    ///
    /// Reserved keys in `fields` are dropped so the caller cannot pick the id,
    /// the status or the worker.
    pub fn open(id: impl Into<String>, fields: impl Into<ShiftFields>) -> Self {
        let mut fields = fields.into();
        for key in RESERVED_KEYS {
            fields.remove(key);
        }
        Self {
            id: id.into(),
            fields,
            status: ShiftStatus::Open,
            worker_id: None,
            worker_name: None,
        }
    }

    /// String value of a caller field; `None` when absent or not a string
    pub fn field_str(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }

    pub fn industry(&self) -> Option<&str> {
        self.field_str("industry")
    }

    pub fn city(&self) -> Option<&str> {
        self.field_str("city")
    }
}

/// Apply payload (optional body of `POST /api/shifts/{id}/apply`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplyRequest {
    pub worker_id: Option<String>,
    pub worker_name: Option<String>,
}

/// Query params for listing shifts
///
/// Values stay raw strings: an empty value means "no constraint" and a value
/// naming no known industry or city simply matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShiftFilter {
    pub industry: Option<String>,
    pub city: Option<String>,
}

impl ShiftFilter {
    pub fn matches(&self, shift: &Shift) -> bool {
        field_matches(self.industry.as_deref(), shift.industry())
            && field_matches(self.city.as_deref(), shift.city())
    }
}

fn field_matches(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None | Some("") => true,
        Some(w) => actual == Some(w),
    }
}
