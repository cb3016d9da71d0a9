use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The fixed tab order of the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Section {
    Personal,
    Contact,
    Guardian,
    /// Covers both the insurance and authorization row lists.
    Insurance,
    Documents,
    Notes,
}

impl Section {
    pub const ORDER: [Section; 6] = [
        Section::Personal,
        Section::Contact,
        Section::Guardian,
        Section::Insurance,
        Section::Documents,
        Section::Notes,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Section::Personal => "Personal",
            Section::Contact => "Contact",
            Section::Guardian => "Guardian",
            Section::Insurance => "Insurance & Authorizations",
            Section::Documents => "Documents",
            Section::Notes => "Notes",
        }
    }

    pub fn next(self) -> Option<Section> {
        let i = Section::ORDER.iter().position(|s| *s == self)?;
        Section::ORDER.get(i + 1).copied()
    }

    pub fn prev(self) -> Option<Section> {
        let i = Section::ORDER.iter().position(|s| *s == self)?;
        i.checked_sub(1).and_then(|p| Section::ORDER.get(p)).copied()
    }
}
