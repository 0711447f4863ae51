use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Status tag for an item.
///
/// The wire format keeps the original Portuguese labels; the enum exists so
/// counters and filters stay exhaustive instead of comparing free-form strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Pendente,
    #[serde(rename = "Em Andamento")]
    EmAndamento,
    #[serde(rename = "Concluído")]
    Concluido,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Pendente, Status::EmAndamento, Status::Concluido];

    /// The exact label used in the persisted blob and on status badges.
    pub fn label(&self) -> &'static str {
        match self {
            Status::Pendente => "Pendente",
            Status::EmAndamento => "Em Andamento",
            Status::Concluido => "Concluído",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::Pendente
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "pendente" => Ok(Status::Pendente),
            "em andamento" | "andamento" => Ok(Status::EmAndamento),
            "concluido" => Ok(Status::Concluido),
            _ => Err(Error::UnknownStatus(s.to_string())),
        }
    }
}

/// Status filter: the sentinel "Todos" matches every status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    Todos,
    Only(Status),
}

impl StatusFilter {
    pub fn accepts(&self, status: Status) -> bool {
        match self {
            StatusFilter::Todos => true,
            StatusFilter::Only(wanted) => *wanted == status,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusFilter::Todos => write!(f, "Todos"),
            StatusFilter::Only(status) => write!(f, "{}", status),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize_tag(s).as_str() {
            "todos" | "all" => Ok(StatusFilter::Todos),
            _ => s
                .parse::<Status>()
                .map(StatusFilter::Only)
                .map_err(|_| Error::UnknownFilter(s.to_string())),
        }
    }
}

/// Lowercase, strip accents on the vowels we care about, unify separators.
fn normalize_tag(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['-', '_'], " ")
        .replace('í', "i")
        .replace('é', "e")
}

/// The sole persisted entity: titled item with a status tag and opaque id.
///
/// Serialized exactly as `{id, titulo, status}` so existing blobs remain
/// readable. The id is generated at creation and never changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub titulo: String,
    pub status: Status,
}

/// Submit payload for add and update: everything but the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDraft {
    pub titulo: String,
    pub status: Status,
}

impl ItemDraft {
    pub fn new(titulo: impl Into<String>, status: Status) -> Self {
        Self {
            titulo: titulo.into(),
            status,
        }
    }
}
