use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Number of calendar days covered by `from..=to`.
///
/// Returns `0` when `to` precedes `from`; callers treat that as an invalid range.
/// The arithmetic is done on calendar dates only, so daylight-saving shifts can
/// never add or drop a day.
pub fn duration_days(from: NaiveDate, to: NaiveDate) -> u32 {
    if to < from {
        return 0;
    }
    let days = to.signed_duration_since(from).num_days() + 1;
    u32::try_from(days).unwrap_or(u32::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Sick,
    Casual,
    Annual,
}

impl LeaveType {
    pub const ALL: [LeaveType; 3] = [LeaveType::Sick, LeaveType::Casual, LeaveType::Annual];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Sick => "sick",
            LeaveType::Casual => "casual",
            LeaveType::Annual => "annual",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sick" => Ok(LeaveType::Sick),
            "casual" => Ok(LeaveType::Casual),
            "annual" => Ok(LeaveType::Annual),
            _ => Err(ParseEnumError::LeaveType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    pub const ALL: [LeaveStatus; 3] = [
        LeaveStatus::Pending,
        LeaveStatus::Approved,
        LeaveStatus::Rejected,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveStatus {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(LeaveStatus::Pending),
            "approved" => Ok(LeaveStatus::Approved),
            "rejected" => Ok(LeaveStatus::Rejected),
            _ => Err(ParseEnumError::Status(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEnumError {
    #[error("unknown leave type `{0}`")]
    LeaveType(String),
    #[error("unknown leave status `{0}`")]
    Status(String),
}

/// A leave request as the leave service reports it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    pub id: String,
    pub owner_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_email: Option<String>,
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub reason: String,
    #[serde(default)]
    pub status: LeaveStatus,
    pub created_at: DateTime<Utc>,
}

impl LeaveRecord {
    pub fn duration_days(&self) -> u32 {
        duration_days(self.from_date, self.to_date)
    }

    /// Quota year bucket; a request is charged entirely to the year it starts in.
    pub fn year(&self) -> i32 {
        self.from_date.year()
    }

    pub fn is_cancellable(&self) -> bool {
        self.status == LeaveStatus::Pending
    }
}

/// Payload for a new leave request (`POST /leaves`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveDraft {
    pub from_date: NaiveDate,
    pub to_date: NaiveDate,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("To Date must be on or after From Date")]
    InvalidDateRange,
    #[error("Reason is required")]
    EmptyReason,
}

impl LeaveDraft {
    pub fn duration_days(&self) -> u32 {
        duration_days(self.from_date, self.to_date)
    }

    pub fn year(&self) -> i32 {
        self.from_date.year()
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        if self.to_date < self.from_date {
            return Err(DraftError::InvalidDateRange);
        }
        if self.reason.trim().is_empty() {
            return Err(DraftError::EmptyReason);
        }
        Ok(())
    }
}
