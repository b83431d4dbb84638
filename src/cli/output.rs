//! Output format types for CLI commands.

use clap::ValueEnum;
use serde::Serialize;

use crate::store::SavedQuery;

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single query in listing output.
#[derive(Debug, Serialize)]
pub struct QueryListing {
    pub name: String,
    pub created_at: String,
}

/// A full query in show/search output.
#[derive(Debug, Serialize)]
pub struct QueryDetail {
    pub id: i64,
    pub name: String,
    pub created_at: String,
    pub body: String,
}

impl From<&SavedQuery> for QueryListing {
    fn from(query: &SavedQuery) -> Self {
        Self {
            name: query.name.clone(),
            created_at: query.created_at.to_rfc3339(),
        }
    }
}

impl From<&SavedQuery> for QueryDetail {
    fn from(query: &SavedQuery) -> Self {
        Self {
            id: query.id,
            name: query.name.clone(),
            created_at: query.created_at.to_rfc3339(),
            body: query.body.clone(),
        }
    }
}
