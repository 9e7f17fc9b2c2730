//! Constants used throughout loft-core.

/// Schema version written to freshly created repository files.
pub const API_VERSION_V1: &str = "v1";

/// Directory under the loft home that holds repository state.
pub const REPOSITORY_DIR: &str = "repository";

/// File name of the persisted repository list.
pub const REPOSITORY_FILE: &str = "repository.yaml";

/// File name of the default application config.
pub const CONFIG_FILE: &str = "config.yaml";

/// Name of the repository source seeded on first init.
pub const DEFAULT_HUB_NAME: &str = "lofthub";

/// Index URL of the repository source seeded on first init.
pub const DEFAULT_HUB_URL: &str =
    "https://raw.githubusercontent.com/loft-dev/stacks/main/index.yaml";
