//! localStorage access that degrades to no-ops when the browser denies it.

use web_sys::Storage;

pub fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok()).flatten()
}

/// The raw string under `key`, or None when storage or the key is missing.
pub fn read(key: &str) -> Option<String> {
    local_storage()?.get_item(key).ok().flatten()
}

/// Persist `value` under `key`, logging instead of failing when the browser
/// refuses (private mode, quota).
pub fn write(key: &str, value: &str) {
    let Some(storage) = local_storage() else {
        log::warn!("localStorage unavailable; {key:?} not saved");
        return;
    };
    if let Err(e) = storage.set_item(key, value) {
        log::warn!("Failed to persist {key:?}: {e:?}");
    }
}
