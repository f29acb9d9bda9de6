//! spx-util - helpers shared across the spx crates
//!
//! Query-string and URL building, GUIDs, string hashing and cleanup,
//! `<meta>` content parsing, user-agent sniffing, weighted random selection,
//! JSON walking and server-aligned clocks.

pub mod clock;
pub mod guid;
pub mod hash;
pub mod platform;
pub mod query;
pub mod random;
pub mod strings;
pub mod url;
pub mod walk;

// Re-exports for convenience
pub use clock::{local_time_ms, server_time_fn, ServerClock};
pub use guid::{guid, is_guid};
pub use hash::hash_code;
pub use platform::ie_version;
pub use query::{obj_to_url_params, url_to_object, QueryValue};
pub use random::{select_weighted, weighted_random, Weighted};
pub use strings::{clean_unknown_chars, clean_white_space, parse_meta_content};
pub use url::{append_query_params, append_res_params, resolve_url, RES_PARAMS_KEY};
pub use walk::walk_object;
