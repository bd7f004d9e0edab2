/// Root path separator every route link is composed from.
pub const ROOT: &str = "/";

/// Pattern of the catch-all binding appended after all explicit routes.
pub const WILDCARD: &str = "*";

/// Literal segment of the not-found page.
pub const PAGE_404_SEGMENT: &str = "404/";

/// Prefix of requests forwarded to the backend API.
pub const API_PREFIX: &str = "/api";

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "ATLAS";
