//! Shared wire DTOs for the portal REST boundary.
//!
//! DESIGN
//! ======
//! These types define the JSON contract with the remote API. Entity ids are
//! server-assigned numbers; optional profile fields stay `Option` so partial
//! records round-trip losslessly. The persisted user blob keeps its role as
//! the raw wire string and parses on read, so an unrecognized value degrades
//! to the public-home redirect instead of a deserialization failure.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Account role, determining which protected routes a session may enter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Company,
    Student,
}

impl Role {
    /// Parse a raw role string; `None` for unrecognized values.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Self::Admin),
            "COMPANY" => Some(Self::Company),
            "STUDENT" => Some(Self::Student),
            _ => None,
        }
    }

    /// Wire representation of the role.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Company => "COMPANY",
            Self::Student => "STUDENT",
        }
    }
}

/// Where the work happens for a job offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WorkMode {
    OnSite,
    Remote,
    Hybrid,
}

impl WorkMode {
    /// Human-readable label for listings and selects.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::OnSite => "On-site",
            Self::Remote => "Remote",
            Self::Hybrid => "Hybrid",
        }
    }
}

/// Lifecycle state of a student's application, owned by the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApplicationStatus {
    Pending,
    InReview,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    /// Human-readable label for listings.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InReview => "In review",
            Self::Approved => "Approved",
            Self::Rejected => "Rejected",
        }
    }
}

/// A field of work that offers and profiles are tagged with.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Area {
    /// Server-assigned identifier.
    pub id: i64,
    /// Display name, unique server-side.
    pub name: String,
}

/// Payload for creating or renaming an area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AreaDraft {
    pub name: String,
}

/// Reference to an existing entity by id, used inside write payloads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityRef {
    pub id: i64,
}

/// One education entry on a student resume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub institution: String,
    pub course: String,
    /// Degree level (e.g. `"Bachelor"`, `"Technical"`).
    pub level: String,
    /// ISO 8601 date string.
    pub start_date: String,
    /// ISO 8601 date string; absent while `ongoing`.
    pub end_date: Option<String>,
    pub ongoing: bool,
    pub description: Option<String>,
}

/// One professional experience entry on a student resume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    /// ISO 8601 date string.
    pub start_date: String,
    /// ISO 8601 date string; absent while `current`.
    pub end_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

/// One skill entry on a student resume.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    /// Self-assessed proficiency, 1 through 5.
    pub level: u8,
    pub category: String,
}

/// A company account as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    /// Company registration number.
    pub tax_id: String,
    pub address: String,
    /// Fields of work the company operates in.
    #[serde(default)]
    pub business_areas: Vec<Area>,
}

/// A student account with its resume, as returned by the API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
    /// Personal identification number.
    pub national_id: String,
    pub course: String,
    /// ISO 8601 date string.
    pub birth_date: Option<String>,
    pub linkedin: Option<String>,
    pub github: Option<String>,
    pub portfolio: Option<String>,
    /// Free-form self description shown to companies.
    pub summary: Option<String>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    /// Fields of work the student wants offers from.
    #[serde(default)]
    pub interest_areas: Vec<Area>,
}

/// A published job offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOffer {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub location: String,
    pub work_mode: WorkMode,
    /// Workload in hours per week.
    pub weekly_hours: u32,
    pub requirements: String,
    /// Whether the offer still accepts applications.
    pub active: bool,
    /// ISO 8601 timestamp.
    pub created_at: String,
    /// ISO 8601 timestamp of the last edit, if any.
    pub updated_at: Option<String>,
    /// ISO 8601 timestamp set when the offer is closed.
    pub closed_at: Option<String>,
    pub company: Company,
    pub area: Area,
}

/// Payload for creating or updating a job offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobOfferDraft {
    pub title: String,
    pub description: String,
    pub location: String,
    pub work_mode: WorkMode,
    pub weekly_hours: u32,
    pub requirements: String,
    pub company: EntityRef,
    pub area: EntityRef,
}

/// A student's application to a job offer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: i64,
    pub student: Student,
    pub job_offer: JobOffer,
    /// ISO 8601 timestamp.
    pub applied_at: String,
    pub status: ApplicationStatus,
}

/// Payload for creating an application: both sides by reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationDraft {
    pub student: EntityRef,
    pub job_offer: EntityRef,
}

/// Registration payload for a new company account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub tax_id: String,
    pub address: String,
    pub business_areas: Vec<EntityRef>,
}

/// Registration payload for a new student account.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub national_id: String,
    pub course: String,
    pub interest_areas: Vec<EntityRef>,
}

/// Login form payload. Created per attempt, never persisted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Successful authentication response: the token plus the identity fields
/// that get persisted as the user profile blob.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Raw role string as sent by the server.
    pub role: String,
}

/// The user profile blob held in the session store: the authentication
/// response minus the token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    /// Raw role string; parse with [`StoredUser::role`].
    pub role: String,
}

impl StoredUser {
    /// The parsed role, `None` when the stored value is unrecognized.
    pub fn role(&self) -> Option<Role> {
        Role::parse(&self.role)
    }
}

impl From<&AuthResponse> for StoredUser {
    fn from(response: &AuthResponse) -> Self {
        Self {
            id: response.id,
            name: response.name.clone(),
            email: response.email.clone(),
            role: response.role.clone(),
        }
    }
}

/// Aggregate counts for the administrator dashboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub total_companies: i64,
    pub total_students: i64,
    pub open_offers: i64,
    pub closed_offers: i64,
    /// `(area name, open offer count)` pairs.
    #[serde(default)]
    pub offers_by_area: Vec<(String, i64)>,
}

/// Open/closed totals for job offers, grouped by area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferStatistics {
    pub active: i64,
    pub closed: i64,
    /// `(area name, offer count)` pairs.
    #[serde(default)]
    pub by_area: Vec<(String, i64)>,
}
