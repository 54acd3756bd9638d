// Remote endpoints
pub const FEED_URL: &str = "https://github.com/publicsuffix/list/commits/master.atom";
pub const LIST_URL: &str = "https://publicsuffix.org/list/public_suffix_list.dat";

// Default local paths
pub const DEFAULT_DATA_FILE: &str = "data/public_suffix_list.dat";
pub const DEFAULT_MARKER_FILE: &str = "data/public_suffix_list.updated";

// Patterns and formats
pub const UPDATED_TAG_PATTERN: &str = r"<updated>(\S*)</updated>";
pub const MARKER_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";
