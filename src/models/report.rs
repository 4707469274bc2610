//! Report record and field validation
//!
//! A report is one row of the unified list page: id, title, owner, and
//! registration date. Field rules are enforced at construction; the store
//! only ever holds values that already passed them.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::ValidationError;

/// Maximum length for report titles
const MAX_TITLE_LEN: usize = 256;

/// Maximum length for owner names
const MAX_OWNER_LEN: usize = 64;

/// Registration date assigned when a create request omits one
pub const DEFAULT_REG_DATE: &str = "2025-10-06";

/// Date format: YYYY-MM-DD
static REG_DATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("invalid date regex"));

/// One report entry as stored and serialized.
///
/// `id` and `reg_date` are immutable after creation; only `title` and
/// `owner` can change, via [`ReportPatch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub id: u64,
    pub title: String,
    pub owner: String,
    #[serde(rename = "regDate")]
    pub reg_date: String,
}

/// Validated report title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTitle(String);

impl ReportTitle {
    /// Create a new report title.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 256 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "title" });
        }

        if trimmed.len() > MAX_TITLE_LEN {
            return Err(ValidationError::TooLong {
                field: "title",
                max: MAX_TITLE_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for ReportTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated owner name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerName(String);

impl OwnerName {
    /// Create a new owner name.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    /// - Max 64 characters
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: "owner" });
        }

        if trimmed.len() > MAX_OWNER_LEN {
            return Err(ValidationError::TooLong {
                field: "owner",
                max: MAX_OWNER_LEN,
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the owner name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl AsRef<str> for OwnerName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Validated registration date (YYYY-MM-DD)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegDate(String);

impl RegDate {
    /// Create a new registration date.
    ///
    /// # Rules
    /// - Must match `YYYY-MM-DD`
    ///
    /// # Example
    /// ```
    /// use mynova_list_server::models::RegDate;
    ///
    /// assert!(RegDate::new("2025-10-06").is_ok());
    /// assert!(RegDate::new("06.10.2025").is_err());
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        if s.is_empty() {
            return Err(ValidationError::Empty { field: "regDate" });
        }

        if !REG_DATE_RE.is_match(s) {
            return Err(ValidationError::InvalidFormat {
                field: "regDate",
                reason: "must be a date in YYYY-MM-DD form",
            });
        }

        Ok(Self(s.to_owned()))
    }

    /// Get the date as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume and return the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for RegDate {
    fn default() -> Self {
        Self(DEFAULT_REG_DATE.to_owned())
    }
}

impl AsRef<str> for RegDate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A report about to be created; the store assigns the id.
#[derive(Debug, Clone)]
pub struct NewReport {
    pub title: ReportTitle,
    pub owner: OwnerName,
    pub reg_date: RegDate,
}

/// Partial update: only fields present here are written.
#[derive(Debug, Clone, Default)]
pub struct ReportPatch {
    pub title: Option<ReportTitle>,
    pub owner: Option<OwnerName>,
}

impl ReportPatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.owner.is_none()
    }
}
