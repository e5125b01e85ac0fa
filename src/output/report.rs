//! Tabular report built from detected violations.

use crate::models::ViolationRecord;
use itertools::Itertools;

/// One report line: a violated address and everyone holding it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub vrf: String,
    /// The address (IP only, no prefix length).
    pub subnet: String,
    pub role: String,
    /// Holders as `device:interface`, most recent first.
    pub interfaces: Vec<String>,
}

impl ReportRow {
    pub fn interfaces_joined(&self, sep: &str) -> String {
        self.interfaces.iter().join(sep)
    }
}

/// What the report sink receives.
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// No violations found.
    Clean,
    Violations(Vec<ReportRow>),
}

impl Report {
    /// Build a report, keeping violation order.
    pub fn from_violations(violations: &[ViolationRecord]) -> Report {
        if violations.is_empty() {
            return Report::Clean;
        }
        let rows = violations
            .iter()
            .map(|v| ReportRow {
                vrf: v.domain.clone(),
                subnet: v.address.ip.to_string(),
                role: v.role.to_string(),
                interfaces: v.holders.iter().map(|h| h.to_string()).collect(),
            })
            .collect();
        Report::Violations(rows)
    }

    pub fn is_clean(&self) -> bool {
        matches!(self, Report::Clean)
    }

    pub fn rows(&self) -> &[ReportRow] {
        match self {
            Report::Clean => &[],
            Report::Violations(rows) => rows,
        }
    }
}
