use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One published version of a stack.
///
/// Index documents in the wild omit most of these fields for older entries,
/// so everything defaults when absent.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StackVersion {
    pub api_version: String,
    pub created: Option<DateTime<Utc>>,
    pub name: String,
    pub home: String,
    pub version: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub maintainers: Vec<String>,
    pub icon: String,
    pub digest: String,
    pub urls: Vec<String>,
}

/// Version history for one stack, in the order the source published it.
pub type StackVersions = Vec<StackVersion>;

/// A source's stack index document; also the shape of the aggregated catalog.
///
/// The `projects` wire key is fixed by the index document format. The map is
/// a `BTreeMap` so catalog iteration and rendering are deterministic. Never
/// persisted; rebuilt on every listing request.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StackIndex {
    pub api_version: String,
    pub generated: Option<DateTime<Utc>>,
    pub projects: BTreeMap<String, StackVersions>,
}

impl StackIndex {
    /// Folds another source's index into this catalog. Stacks appearing in
    /// both keep the incoming version list.
    pub fn merge(&mut self, other: StackIndex) {
        self.projects.extend(other.projects);
    }
}
