//! Analysis result model - the validated output of one transcript analysis
//!
//! Field names serialize in camelCase so that the in-memory model, the
//! extraction-service response and the exported JSON share one shape.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A factual statement or admission tied to a witness and a source locator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyFact {
    /// The core statement or fact
    pub fact: String,

    /// The person who stated the fact
    pub witness: String,

    /// Opaque page/line locator (e.g. "Page 25, Line 10")
    pub page_line: String,

    /// Why the fact matters
    pub summary: String,
}

/// An exhibit referenced in the transcript
///
/// `id` is a free-form label. The same exhibit may legitimately appear more
/// than once when it is re-referenced on a later page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exhibit {
    /// Exhibit label (e.g. "Exhibit 1", "Plaintiff's Exhibit A")
    pub id: String,

    /// What the exhibit is
    pub description: String,

    /// Opaque page/line locator of the reference
    pub page_line: String,
}

/// An objection raised during the deposition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objection {
    /// Kind of objection (e.g. "Hearsay", "Leading", "Form")
    #[serde(rename = "type")]
    pub objection_type: String,

    /// Attorney or party who objected
    pub by: String,

    /// Ruling on the objection
    pub ruling: Ruling,

    /// Opaque page/line locator of the objection
    pub page_line: String,
}

/// Ruling on an objection - a closed set of three values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ruling {
    /// The objection was sustained
    Sustained,

    /// The objection was overruled
    Overruled,

    /// No ruling appears in the transcript
    #[serde(rename = "Not Stated")]
    NotStated,
}

impl Ruling {
    /// Every ruling, in declaration order
    pub const ALL: [Ruling; 3] = [Ruling::Sustained, Ruling::Overruled, Ruling::NotStated];

    /// Get the ruling as it appears on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Ruling::Sustained => "Sustained",
            Ruling::Overruled => "Overruled",
            Ruling::NotStated => "Not Stated",
        }
    }

    /// Parse a ruling from its wire form
    ///
    /// Matching is exact: "sustained" or "Denied" are not rulings.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == s)
    }
}

impl fmt::Display for Ruling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured findings from one analysis run
///
/// Sequence order is the order in which the extraction service emitted the
/// items. The result owns its sequences and only hands out shared slices, so
/// a stored result is never edited in place; a new run produces a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    key_facts_and_admissions: Vec<KeyFact>,
    exhibits_referenced: Vec<Exhibit>,
    objections_log: Vec<Objection>,
}

impl AnalysisResult {
    /// Create a result from its three sequences
    ///
    /// # Examples
    ///
    /// ```
    /// use depo_domain::{AnalysisResult, Exhibit};
    ///
    /// let result = AnalysisResult::new(
    ///     vec![],
    ///     vec![Exhibit {
    ///         id: "Exhibit 1".to_string(),
    ///         description: "Lease agreement".to_string(),
    ///         page_line: "Page 4, Line 2".to_string(),
    ///     }],
    ///     vec![],
    /// );
    /// assert_eq!(result.exhibits_referenced().len(), 1);
    /// assert!(!result.is_empty());
    /// ```
    pub fn new(
        key_facts_and_admissions: Vec<KeyFact>,
        exhibits_referenced: Vec<Exhibit>,
        objections_log: Vec<Objection>,
    ) -> Self {
        Self {
            key_facts_and_admissions,
            exhibits_referenced,
            objections_log,
        }
    }

    /// Key facts and admissions, in emission order
    pub fn key_facts_and_admissions(&self) -> &[KeyFact] {
        &self.key_facts_and_admissions
    }

    /// Referenced exhibits, in emission order
    pub fn exhibits_referenced(&self) -> &[Exhibit] {
        &self.exhibits_referenced
    }

    /// Objections, in emission order
    pub fn objections_log(&self) -> &[Objection] {
        &self.objections_log
    }

    /// True when all three sequences are empty
    pub fn is_empty(&self) -> bool {
        self.key_facts_and_admissions.is_empty()
            && self.exhibits_referenced.is_empty()
            && self.objections_log.is_empty()
    }

    /// Total number of extracted items across all sequences
    pub fn item_count(&self) -> usize {
        self.key_facts_and_admissions.len() + self.exhibits_referenced.len() + self.objections_log.len()
    }
}
