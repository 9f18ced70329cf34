//! Fixed-format report over a workspace JSON document.
//!
//! The expected shape is `data.workspace` with `viewType`, `userRole` and an
//! optional `hierarchical` list of mission groups. Anything else is rejected
//! as malformed.

use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::io::{Read, Write};

use crate::error::{ScrubResult, SummaryError};

/// Number of groups listed by name at the end of the report
pub const LISTED_GROUPS: usize = 3;

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Data,
}

#[derive(Debug, Deserialize)]
struct Data {
    workspace: Workspace,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub view_type: Value,
    pub user_role: Value,
    #[serde(default)]
    pub hierarchical: Vec<MissionGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MissionGroup {
    pub name: Value,
    pub divisions: Vec<Division>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Division {
    pub departments: Vec<Value>,
}

/// Counts and names extracted from a [`Workspace`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub view_type: String,
    pub user_role: String,
    pub group_count: usize,
    pub total_departments: usize,
    pub leading_groups: Vec<(String, usize)>,
}

impl Workspace {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SummaryError> {
        let envelope: Envelope = serde_json::from_reader(reader)?;
        Ok(envelope.data.workspace)
    }

    pub fn summary(&self) -> Summary {
        let total_departments = self
            .hierarchical
            .iter()
            .flat_map(|group| &group.divisions)
            .map(|division| division.departments.len())
            .sum();

        Summary {
            view_type: plain(&self.view_type),
            user_role: plain(&self.user_role),
            group_count: self.hierarchical.len(),
            total_departments,
            leading_groups: self
                .hierarchical
                .iter()
                .take(LISTED_GROUPS)
                .map(|group| (plain(&group.name), group.divisions.len()))
                .collect(),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "View Type: {}", self.view_type)?;
        writeln!(f, "User Role: {}", self.user_role)?;
        writeln!(f, "Mission Groups: {}", self.group_count)?;
        writeln!(f, "Total Departments: {}", self.total_departments)?;
        writeln!(f)?;
        writeln!(f, "First {} Mission Groups:", LISTED_GROUPS)?;
        for (name, divisions) in &self.leading_groups {
            writeln!(f, "  - {} ({} divisions)", name, divisions)?;
        }
        Ok(())
    }
}

/// Strings print bare and `null`/booleans use the `None`/`True`/`False`
/// spelling of the report. Numbers and containers print as compact JSON.
fn plain(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "None".to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        other => other.to_string(),
    }
}

/// Read a workspace document from `reader` and write the report to `writer`
pub fn summarize<R: Read, W: Write>(reader: R, mut writer: W) -> ScrubResult<Summary> {
    let summary = Workspace::from_reader(reader)?.summary();
    write!(writer, "{}", summary)?;
    writer.flush()?;
    Ok(summary)
}
