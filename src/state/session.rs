//! Persisted session flag.
//!
//! The session is a single boolean stored under one `localStorage` key. Only
//! the literal value `"true"` counts as authenticated; anything else,
//! including a missing key or an unavailable storage backend, reads as logged
//! out. The flag survives reloads, has no expiry, and is never validated
//! against the server; endpoints re-check on their side.
//!
//! Browser builds (`hydrate`) back the flag with `localStorage`. Other builds
//! (SSR, native tests) keep the same raw string in memory so reads go through
//! the identical parsing path.

#[cfg(all(test, not(feature = "hydrate")))]
#[path = "session_test.rs"]
mod session_test;

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "parlor_logged_in";

/// Stored value meaning "authenticated". Everything else means logged out.
const AUTHENTICATED: &str = "true";

/// Interpret a raw stored flag value.
fn flag_means_authenticated(raw: Option<&str>) -> bool {
    raw == Some(AUTHENTICATED)
}

/// Session state accessor, provided to components through context.
///
/// Cheap to clone; all clones observe the same flag. Multiple tabs sharing
/// `localStorage` can observe stale values (last write wins); an accepted
/// limitation.
#[derive(Clone, Debug, Default)]
pub struct Session {
    #[cfg(not(feature = "hydrate"))]
    raw: std::sync::Arc<std::sync::Mutex<Option<String>>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the persisted flag. Never fails; unreadable state means logged out.
    pub fn is_authenticated(&self) -> bool {
        #[cfg(feature = "hydrate")]
        {
            let raw = web_sys::window()
                .and_then(|w| w.local_storage().ok().flatten())
                .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten());
            flag_means_authenticated(raw.as_deref())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            self.raw
                .lock()
                .map(|raw| flag_means_authenticated(raw.as_deref()))
                .unwrap_or(false)
        }
    }

    /// Write the flag synchronously.
    pub fn set_authenticated(&self, value: bool) {
        let stored = if value { AUTHENTICATED } else { "false" };
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
            {
                let _ = storage.set_item(STORAGE_KEY, stored);
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            if let Ok(mut raw) = self.raw.lock() {
                *raw = Some(stored.to_owned());
            }
        }
    }

    /// Session seeded with an arbitrary raw stored value.
    #[cfg(all(test, not(feature = "hydrate")))]
    pub(crate) fn with_raw(value: &str) -> Self {
        let session = Self::default();
        if let Ok(mut raw) = session.raw.lock() {
            *raw = Some(value.to_owned());
        }
        session
    }
}
