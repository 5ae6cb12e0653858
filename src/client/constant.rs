pub const SITE_NAME: &str = "Band Rehearsal Scheduler";

/// Local storage key holding the session token.
pub const TOKEN_STORAGE_KEY: &str = "rehearsal.token";
