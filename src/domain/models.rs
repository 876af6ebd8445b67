use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Code → image reference. Local entries use the `<code>.jpg` file name,
/// placeholder entries hold a remote URL.
pub type ImageMapping = BTreeMap<u16, String>;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Informational,
        Category::Success,
        Category::Redirection,
        Category::ClientError,
        Category::ServerError,
    ];

    /// Category implied by the numeric class (`code / 100`), if the code
    /// falls inside one of the five standard classes.
    pub const fn from_code(code: u16) -> Option<Category> {
        match code / 100 {
            1 => Some(Category::Informational),
            2 => Some(Category::Success),
            3 => Some(Category::Redirection),
            4 => Some(Category::ClientError),
            5 => Some(Category::ServerError),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Informational => "Informational",
            Category::Success => "Success",
            Category::Redirection => "Redirection",
            Category::ClientError => "Client Error",
            Category::ServerError => "Server Error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusRecord {
    pub code: u16,
    pub message: &'static str,
    pub category: Category,
    /// `false` for vendor extensions that are not in the IANA registry.
    pub official: bool,
    pub description: &'static str,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Landscape,
    Portrait,
    Square,
}

impl Orientation {
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Landscape => "landscape",
            Orientation::Portrait => "portrait",
            Orientation::Square => "square",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QueryTier {
    Contextual,
    Message,
    Generic,
}

impl QueryTier {
    pub fn as_str(self) -> &'static str {
        match self {
            QueryTier::Contextual => "contextual",
            QueryTier::Message => "message",
            QueryTier::Generic => "generic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedQuery {
    pub tier: QueryTier,
    pub query: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum EntryOutcome {
    Skipped,
    Downloaded { tier: QueryTier, url: String },
    NoImage,
    Failed { error: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryReport {
    pub code: u16,
    #[serde(flatten)]
    pub outcome: EntryOutcome,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    Placeholder,
    Live,
}

#[derive(Debug, Clone, Serialize)]
pub struct FetchSummary {
    pub mode: RunMode,
    pub total: usize,
    pub downloaded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub images_dir: String,
    pub mapping_path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub entries: Vec<EntryReport>,
}

#[derive(Serialize)]
pub struct RecordView {
    #[serde(flatten)]
    pub record: StatusRecord,
    pub contextual_query: Option<&'static str>,
    pub image_file: String,
}

#[derive(Serialize)]
pub struct CategoryCount {
    pub category: Category,
    pub label: &'static str,
    pub count: usize,
    pub unofficial: usize,
}
