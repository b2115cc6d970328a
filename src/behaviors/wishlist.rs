//! Per-item liked state, persisted as a JSON id array in localStorage.

use serde::{Deserialize, Serialize};
use web_sys::{Document, Element};

use crate::dom;
use crate::notify::Notifier;
use crate::storage;
use crate::widgets::WidgetHost;

const LIKED_ICON: &str = "bi-heart-fill";
const IDLE_ICON: &str = "bi-heart";

/// Ordered set of liked item ids: insertion order, unique membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Wishlist {
    ids: Vec<String>,
}

impl Wishlist {
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|x| x == id)
    }

    /// Insert at the end; false when already present.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.ids.push(id.to_string());
        true
    }

    /// Remove; false when absent.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.ids.len();
        self.ids.retain(|x| x != id);
        self.ids.len() != before
    }

    /// Make membership match `liked`, whatever the current state.
    pub fn set_membership(&mut self, id: &str, liked: bool) {
        if liked {
            self.insert(id);
        } else {
            self.remove(id);
        }
    }

    /// Flip membership; returns the new liked state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.remove(id) {
            false
        } else {
            self.insert(id);
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Parse a stored value. Missing or corrupted data is an empty list, so
    /// one bad write never wedges the feature.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::default();
        };
        match serde_json::from_str(raw) {
            Ok(list) => list,
            Err(e) => {
                log::debug!("Discarding corrupted wishlist data: {e}");
                Self::default()
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            log::warn!("Wishlist serialization failed: {e}");
            "[]".to_string()
        })
    }

    pub fn load(key: &str) -> Self {
        Self::parse(storage::read(key).as_deref())
    }

    pub fn save(&self, key: &str) {
        storage::write(key, &self.to_json());
    }
}

fn apply_liked_visuals(button: &Element, liked: bool) {
    if let Some(icon) = dom::query(button, "i") {
        let classes = icon.class_list();
        let result = if liked {
            classes.remove_1(IDLE_ICON).and_then(|_| classes.add_1(LIKED_ICON))
        } else {
            classes.remove_1(LIKED_ICON).and_then(|_| classes.add_1(IDLE_ICON))
        };
        if let Err(e) = result {
            log::warn!("Wishlist icon update failed: {e:?}");
        }
    }
    let label = if liked { "Remove from wishlist" } else { "Add to wishlist" };
    let _ = button.set_attribute("aria-label", label);
}

fn is_liked(button: &Element) -> bool {
    dom::query(button, "i")
        .map(|icon| icon.class_list().contains(LIKED_ICON))
        .unwrap_or(false)
}

/// Wire every wishlist button: toggle the icon and label, toast, persist.
pub fn install<W: WidgetHost + 'static>(doc: &Document, notifier: &Notifier<W>, key: &str) {
    for button in dom::query_all(doc, ".btn-wishlist") {
        let notifier = notifier.clone();
        let key = key.to_string();
        let button2 = button.clone();
        dom::listen(&button, "click", move |ev| {
            // The button usually sits inside a clickable card.
            ev.prevent_default();
            ev.stop_propagation();
            let Some(id) = button2.get_attribute("data-artwork-id") else {
                log::warn!("Wishlist button without data-artwork-id");
                return;
            };
            let liked = !is_liked(&button2);
            apply_liked_visuals(&button2, liked);
            notifier.info(if liked { "Added to wishlist" } else { "Removed from wishlist" });
            let mut wishlist = Wishlist::load(&key);
            wishlist.set_membership(&id, liked);
            wishlist.save(&key);
        });
    }
}

/// Restore the liked visuals for every button whose id was persisted.
pub fn apply_saved(doc: &Document, key: &str) {
    let wishlist = Wishlist::load(key);
    if wishlist.is_empty() {
        return;
    }
    for button in dom::query_all(doc, ".btn-wishlist") {
        let Some(id) = button.get_attribute("data-artwork-id") else {
            continue;
        };
        if wishlist.contains(&id) {
            apply_liked_visuals(&button, true);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_never_duplicates() {
        let mut list = Wishlist::default();
        assert!(list.insert("artwork-1"));
        assert!(!list.insert("artwork-1"));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn toggle_twice_restores_the_original_state() {
        let mut list = Wishlist::default();
        assert!(list.toggle("artwork-3"));
        assert!(!list.toggle("artwork-3"));
        assert!(list.is_empty());
    }

    #[test]
    fn set_membership_is_idempotent() {
        let mut list = Wishlist::default();
        list.set_membership("a", true);
        list.set_membership("a", true);
        assert_eq!(list.ids(), ["a"]);
        list.set_membership("a", false);
        list.set_membership("a", false);
        assert!(list.is_empty());
    }

    #[test]
    fn remove_keeps_insertion_order() {
        let mut list = Wishlist::default();
        list.insert("a");
        list.insert("b");
        list.insert("c");
        list.remove("b");
        assert_eq!(list.ids(), ["a", "c"]);
    }

    #[test]
    fn round_trips_through_json() {
        let mut list = Wishlist::default();
        list.insert("artwork-1");
        list.insert("artwork-9");
        assert_eq!(list.to_json(), r#"["artwork-1","artwork-9"]"#);
        assert_eq!(Wishlist::parse(Some(&list.to_json())), list);
    }

    #[test]
    fn missing_and_corrupted_data_load_empty() {
        assert!(Wishlist::parse(None).is_empty());
        assert!(Wishlist::parse(Some("not json")).is_empty());
        assert!(Wishlist::parse(Some(r#"{"ids": oops"#)).is_empty());
    }
}
