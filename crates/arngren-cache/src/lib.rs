//! Type-safe key-value storage for the ARNGREN.net storefront.
//!
//! Wraps the browser's `localStorage` with serde serialization. Off the
//! browser (native builds and tests) the same API is backed by a
//! thread-local map, so values survive reopening the store within a thread
//! just as they survive a page reload in the browser.
//!
//! # Example
//!
//! ```
//! use arngren_cache::Cache;
//!
//! let cache = Cache::open_default()?;
//! cache.set("theme", &"dark")?;
//!
//! let theme: Option<String> = cache.get("theme")?;
//! assert_eq!(theme.as_deref(), Some("dark"));
//! # Ok::<(), arngren_cache::CacheError>(())
//! ```

mod error;
mod kv;

pub use error::CacheError;
pub use kv::Cache;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Cache, CacheError};
}
