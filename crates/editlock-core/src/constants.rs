/// Field and cookie names shared with the host platform

/// Field holding the item's revision stamp
pub const REVISION_FIELD: &str = "__Revision";

/// Field holding the lock owner
pub const LOCK_FIELD: &str = "__Lock";

/// Cookie caching the editor's "last modified" display timestamp
pub const DISPLAY_DATE_COOKIE: &str = "sc_date";

/// Referrer query token marking edit mode
pub const EDIT_MODE_TOKEN: &str = "mode=edit";

/// Token looked for inside a nested `url=` query
pub const NESTED_EDIT_MODE_TOKEN: &str = "sc_mode=edit";

/// Prefix of a referrer token carrying a nested url
pub const NESTED_URL_PREFIX: &str = "url=";

/// Prefix for environment overrides of editor settings
pub const ENV_PREFIX: &str = "EDITLOCK";
