//! Wishlist domain model and operations.
//!
//! The wishlist is a user-curated, order-preserving, duplicate-free subset of
//! the inventory, keyed by car identifier. Mutations go through [`Wishlist`],
//! which owns the membership rules; persistence of the resulting snapshot is
//! the caller's concern (the app layer posts the full list to the worker
//! after every accepted mutation).

use crate::domain::car::CarRecord;
use serde::{Deserialize, Serialize};

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// A retained car together with the time it was added.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WishlistEntry {
    pub car: CarRecord,

    /// Unix timestamp of the moment the car was added.
    pub saved_at: i64,
}

impl WishlistEntry {
    /// Returns a human-readable string describing how long ago the entry was
    /// added: "just now", "Xm ago", "Xh ago", or "Xd ago".
    #[must_use]
    pub fn added_ago(&self) -> String {
        let now = chrono::Utc::now().timestamp();
        let diff = now - self.saved_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

/// Order-preserving, duplicate-free set of retained cars.
///
/// Membership is keyed by `car.id`; insertion order is preserved. Adding a
/// car whose id is already present and removing an absent id are both
/// accepted no-ops, never errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Wishlist {
    entries: Vec<WishlistEntry>,
}

impl Wishlist {
    /// Creates a wishlist from previously persisted entries.
    ///
    /// Entries are taken as-is; the persistence layer already stores them
    /// duplicate-free in insertion order.
    #[must_use]
    pub fn from_entries(entries: Vec<WishlistEntry>) -> Self {
        Self { entries }
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[WishlistEntry] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns whether a car with the given id is retained.
    #[must_use]
    pub fn contains(&self, car_id: u64) -> bool {
        self.entries.iter().any(|e| e.car.id == car_id)
    }

    /// Adds a car at the end of the wishlist.
    ///
    /// Returns `true` if the membership changed, `false` if the id was
    /// already present (idempotent).
    pub fn add(&mut self, car: CarRecord) -> bool {
        if self.contains(car.id) {
            tracing::debug!(car_id = car.id, "car already wishlisted, ignoring add");
            return false;
        }
        self.entries.push(WishlistEntry {
            car,
            saved_at: chrono::Utc::now().timestamp(),
        });
        true
    }

    /// Removes the entry matching `car_id`, if any.
    ///
    /// Returns `true` if an entry was removed, `false` if the id was absent.
    pub fn remove(&mut self, car_id: u64) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.car.id != car_id);
        before != self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: u64, name: &str) -> CarRecord {
        CarRecord {
            id,
            name: name.to_string(),
            brand: "Tata".to_string(),
            fuel: "petrol".to_string(),
            body: "SUV".to_string(),
            seats: 5,
            price: 900_000,
            image: String::new(),
            description: None,
        }
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut wishlist = Wishlist::default();
        assert!(wishlist.add(car(2, "Nexon")));
        assert!(wishlist.add(car(1, "Alto")));
        assert!(wishlist.add(car(3, "Punch")));

        let ids: Vec<u64> = wishlist.entries().iter().map(|e| e.car.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn add_is_idempotent() {
        let mut wishlist = Wishlist::default();
        assert!(wishlist.add(car(1, "Alto")));
        assert!(!wishlist.add(car(1, "Alto")));
        assert_eq!(wishlist.len(), 1);

        // Same id with different payload still refuses the duplicate.
        assert!(!wishlist.add(car(1, "Alto LXi")));
        assert_eq!(wishlist.entries()[0].car.name, "Alto");
    }

    #[test]
    fn remove_absent_id_is_a_noop() {
        let mut wishlist = Wishlist::default();
        wishlist.add(car(1, "Alto"));

        assert!(wishlist.remove(1));
        assert!(!wishlist.remove(1));
        assert!(wishlist.is_empty());
    }

    #[test]
    fn remove_keeps_relative_order_of_survivors() {
        let mut wishlist = Wishlist::default();
        wishlist.add(car(1, "Alto"));
        wishlist.add(car(2, "Nexon"));
        wishlist.add(car(3, "Punch"));

        wishlist.remove(2);
        let ids: Vec<u64> = wishlist.entries().iter().map(|e| e.car.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn entry_round_trips_through_json() {
        let entry = WishlistEntry {
            car: car(7, "Nexon EV"),
            saved_at: 1_700_000_000,
        };
        let json = serde_json::to_string(&entry).unwrap();
        let back: WishlistEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, back);
    }
}
