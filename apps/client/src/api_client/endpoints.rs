// Backend routes, relative to the configured base URL.

pub const MATCH: &str = "/api/match";

pub const COVER_LETTER: &str = "/api/generate-cover-letter";

/// Liveness probe; answers `{ "message": "Backend is working!" }`.
pub const HEALTH: &str = "/api/test";
