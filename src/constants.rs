// src/constants.rs
//
// Application-wide constants. Each constant is documented with its purpose
// and usage context.

/// Maximum number of outputs returned by list operations.
///
/// The listing endpoint and CLI cap results at the 100 most recent records,
/// newest first. Clients that need older records fetch them by id.
///
/// Used in: `ports/http.rs`, `lib.rs`
pub const LIST_LIMIT: usize = 100;

/// Cookie name the *generated* document uses to remember its active tab.
///
/// This cookie lives inside the standalone output document, not in the host
/// application; the generated script writes and reads it itself.
///
/// Used in: `ports/html.rs`
pub const ACTIVE_TAB_COOKIE: &str = "activeTabIndex";

/// Default bind address for the HTTP server.
///
/// Used in: `cli/args.rs`
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

/// Database file name placed under the platform data directory when no
/// explicit `--db` path is given.
///
/// Used in: `lib.rs`
pub const DEFAULT_DB_FILE: &str = "outputs.db";
