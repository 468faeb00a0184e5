//! In-memory loyalty store.
//!
//! Holds the three collections the service works with:
//!
//! - `customers` - registered customers in registration order
//! - `checkins` - every check-in event in insertion order
//! - `points` - running balance per customer ID
//!
//! [`LoyaltyStore::summary`] also derives a dashboard view from them: the
//! customer count, recent activity, and the latest check-ins.
//!
//! All three live behind a single lock so that each store call sees and
//! leaves a consistent snapshot. Nothing is persisted; state is lost when the
//! process exits.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

use punchcard_core::{CustomerId, Points};

use crate::models::{CheckinEvent, Customer};

/// Errors raised by store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A previous holder of the lock panicked mid-update.
    #[error("store lock poisoned")]
    Poisoned,
}

/// Outcome of recording a check-in.
#[derive(Debug, Clone)]
pub struct CheckinReceipt {
    /// The event that was appended.
    pub checkin: CheckinEvent,
    /// The customer's balance after this check-in.
    pub total_points: Points,
    /// Whether this check-in registered the customer.
    pub customer_created: bool,
}

/// A registered customer together with their balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSummary {
    pub id: CustomerId,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "pontos")]
    pub points: Points,
}

/// Balance and history for a single customer ID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerPoints {
    #[serde(rename = "clienteId")]
    pub customer_id: CustomerId,
    #[serde(rename = "pontos")]
    pub points: Points,
    pub checkins: Vec<CheckinEvent>,
}

/// Collection sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreStats {
    pub customers: usize,
    pub checkins: usize,
}

/// How far back [`StoreSummary::recent_checkins`] counts.
pub const RECENT_WINDOW_DAYS: i64 = 7;

/// How many events [`StoreSummary::latest_checkins`] holds at most.
pub const LATEST_CHECKINS_LIMIT: usize = 10;

/// A check-in together with the name of the customer who made it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentCheckin {
    #[serde(flatten)]
    pub checkin: CheckinEvent,
    #[serde(rename = "nome")]
    pub customer_name: String,
}

/// Dashboard view over the whole store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoreSummary {
    /// Number of registered customers.
    #[serde(rename = "totalClientes")]
    pub total_customers: usize,
    /// Check-ins in the last [`RECENT_WINDOW_DAYS`] days.
    #[serde(rename = "checkinsRecentes")]
    pub recent_checkins: usize,
    /// Newest check-ins first, at most [`LATEST_CHECKINS_LIMIT`].
    #[serde(rename = "ultimosCheckins")]
    pub latest_checkins: Vec<RecentCheckin>,
}

#[derive(Debug, Default)]
struct Ledger {
    customers: Vec<Customer>,
    checkins: Vec<CheckinEvent>,
    points: HashMap<CustomerId, Points>,
}

impl Ledger {
    fn balance(&self, customer_id: &CustomerId) -> Points {
        self.points.get(customer_id).copied().unwrap_or_default()
    }

    fn customer_name(&self, customer_id: &CustomerId) -> String {
        self.customers
            .iter()
            .find(|c| &c.id == customer_id)
            .map_or_else(|| Customer::default_name(customer_id), |c| c.name.clone())
    }

    fn stats(&self) -> StoreStats {
        StoreStats {
            customers: self.customers.len(),
            checkins: self.checkins.len(),
        }
    }
}

/// The loyalty store.
///
/// Owned by [`AppState`](crate::state::AppState) and shared across handlers.
/// Tests build isolated instances with [`LoyaltyStore::new`].
#[derive(Debug, Default)]
pub struct LoyaltyStore {
    ledger: RwLock<Ledger>,
}

impl LoyaltyStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Ledger>, StoreError> {
        self.ledger.read().map_err(|_| StoreError::Poisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Ledger>, StoreError> {
        self.ledger.write().map_err(|_| StoreError::Poisoned)
    }

    /// Record a check-in for `customer_id` at time `at`.
    ///
    /// Registers the customer if the ID is unseen, appends a check-in event
    /// and adds its points to the balance, all under one write lock.
    /// Duplicate submissions are not detected: every call awards points.
    ///
    /// `customer_name` is only used when the customer is created.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the lock is poisoned.
    pub fn record_checkin(
        &self,
        customer_id: CustomerId,
        customer_name: Option<String>,
        at: DateTime<Utc>,
    ) -> Result<CheckinReceipt, StoreError> {
        let mut ledger = self.write()?;

        let customer_created = !ledger.customers.iter().any(|c| c.id == customer_id);
        if customer_created {
            ledger
                .customers
                .push(Customer::new(customer_id.clone(), customer_name));
        }

        let checkin = CheckinEvent::new(customer_id.clone(), at);
        let awarded = checkin.points_awarded;
        ledger.checkins.push(checkin.clone());

        let balance = ledger.points.entry(customer_id).or_default();
        *balance += awarded;
        let total_points = *balance;

        Ok(CheckinReceipt {
            checkin,
            total_points,
            customer_created,
        })
    }

    /// List every registered customer with their balance, in registration
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the lock is poisoned.
    pub fn customers(&self) -> Result<Vec<CustomerSummary>, StoreError> {
        let ledger = self.read()?;
        Ok(ledger
            .customers
            .iter()
            .map(|c| CustomerSummary {
                id: c.id.clone(),
                name: c.name.clone(),
                points: ledger.balance(&c.id),
            })
            .collect())
    }

    /// Balance and check-in history for any customer ID.
    ///
    /// Unknown IDs are not an error: they have a zero balance and no history.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the lock is poisoned.
    pub fn points_for(&self, customer_id: &CustomerId) -> Result<CustomerPoints, StoreError> {
        let ledger = self.read()?;
        Ok(CustomerPoints {
            customer_id: customer_id.clone(),
            points: ledger.balance(customer_id),
            checkins: ledger
                .checkins
                .iter()
                .filter(|e| &e.customer_id == customer_id)
                .cloned()
                .collect(),
        })
    }

    /// Current collection sizes.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the lock is poisoned.
    pub fn stats(&self) -> Result<StoreStats, StoreError> {
        Ok(self.read()?.stats())
    }

    /// Dashboard summary as of `now`.
    ///
    /// A check-in is recent when it happened at or after `now` minus
    /// [`RECENT_WINDOW_DAYS`]. Latest check-ins are ordered by timestamp,
    /// newest first; events with equal timestamps keep the later-recorded one
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Poisoned`] if the lock is poisoned.
    pub fn summary(&self, now: DateTime<Utc>) -> Result<StoreSummary, StoreError> {
        let ledger = self.read()?;
        let since = now - Duration::days(RECENT_WINDOW_DAYS);

        let mut latest: Vec<&CheckinEvent> = ledger.checkins.iter().rev().collect();
        latest.sort_by_key(|e| Reverse(e.timestamp));
        latest.truncate(LATEST_CHECKINS_LIMIT);

        Ok(StoreSummary {
            total_customers: ledger.stats().customers,
            recent_checkins: ledger
                .checkins
                .iter()
                .filter(|e| e.timestamp >= since)
                .count(),
            latest_checkins: latest
                .into_iter()
                .map(|e| RecentCheckin {
                    customer_name: ledger.customer_name(&e.customer_id),
                    checkin: e.clone(),
                })
                .collect(),
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::sync::Arc;

    use punchcard_core::POINTS_PER_CHECKIN;

    use super::*;

    fn id(s: &str) -> CustomerId {
        CustomerId::parse(s).unwrap()
    }

    #[test]
    fn test_repeated_checkins_accumulate_points() {
        let store = LoyaltyStore::new();
        for n in 1..=5_u64 {
            let receipt = store.record_checkin(id("42"), None, Utc::now()).unwrap();
            assert_eq!(receipt.total_points, Points::new(10 * n));
        }

        let points = store.points_for(&id("42")).unwrap();
        assert_eq!(points.points, Points::new(50));
        assert_eq!(points.checkins.len(), 5);
    }

    #[test]
    fn test_first_checkin_registers_customer_once() {
        let store = LoyaltyStore::new();

        let first = store
            .record_checkin(id("42"), Some("Ana".to_string()), Utc::now())
            .unwrap();
        let second = store
            .record_checkin(id("42"), Some("Other".to_string()), Utc::now())
            .unwrap();

        assert!(first.customer_created);
        assert!(!second.customer_created);

        let customers = store.customers().unwrap();
        assert_eq!(customers.len(), 1);
        // Name is fixed at registration
        assert_eq!(customers[0].name, "Ana");
        assert_eq!(customers[0].points, Points::new(20));
    }

    #[test]
    fn test_unknown_customer_has_zero_points_and_no_history() {
        let store = LoyaltyStore::new();
        store.record_checkin(id("1"), None, Utc::now()).unwrap();

        let points = store.points_for(&id("999")).unwrap();
        assert_eq!(points.customer_id, id("999"));
        assert_eq!(points.points, Points::ZERO);
        assert!(points.checkins.is_empty());
    }

    #[test]
    fn test_customers_listed_in_registration_order() {
        let store = LoyaltyStore::new();
        for raw in ["b", "a", "c", "a", "b"] {
            store.record_checkin(id(raw), None, Utc::now()).unwrap();
        }

        let customers = store.customers().unwrap();
        let ids: Vec<&str> = customers.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
        assert_eq!(customers[0].name, "Cliente b");
        assert_eq!(customers[2].points, POINTS_PER_CHECKIN);
    }

    #[test]
    fn test_history_is_filtered_and_ordered() {
        let store = LoyaltyStore::new();
        let t0 = Utc::now();
        let t1 = t0 + Duration::seconds(1);
        let t2 = t0 + Duration::seconds(2);

        store.record_checkin(id("x"), None, t0).unwrap();
        store.record_checkin(id("y"), None, t1).unwrap();
        store.record_checkin(id("x"), None, t2).unwrap();

        let history = store.points_for(&id("x")).unwrap().checkins;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].timestamp, t0);
        assert_eq!(history[1].timestamp, t2);
        assert!(history.iter().all(|e| e.customer_id == id("x")));
    }

    #[test]
    fn test_balance_matches_event_sum() {
        let store = LoyaltyStore::new();
        for raw in ["1", "2", "1", "3", "1", "2"] {
            store.record_checkin(id(raw), None, Utc::now()).unwrap();
        }

        for summary in store.customers().unwrap() {
            let history = store.points_for(&summary.id).unwrap();
            let sum: Points = history.checkins.iter().map(|e| e.points_awarded).sum();
            assert_eq!(summary.points, sum);
            assert_eq!(history.points, sum);
        }

        let stats = store.stats().unwrap();
        assert_eq!(stats, StoreStats { customers: 3, checkins: 6 });
    }

    #[test]
    fn test_summary_of_empty_store() {
        let store = LoyaltyStore::new();
        let summary = store.summary(Utc::now()).unwrap();
        assert_eq!(summary.total_customers, 0);
        assert_eq!(summary.recent_checkins, 0);
        assert!(summary.latest_checkins.is_empty());
    }

    #[test]
    fn test_summary_counts_only_the_recent_window() {
        let store = LoyaltyStore::new();
        let now = Utc::now();

        store
            .record_checkin(id("old"), None, now - Duration::days(30))
            .unwrap();
        store
            .record_checkin(id("edge"), None, now - Duration::days(RECENT_WINDOW_DAYS))
            .unwrap();
        store
            .record_checkin(id("new"), None, now - Duration::hours(1))
            .unwrap();

        let summary = store.summary(now).unwrap();
        assert_eq!(summary.total_customers, 3);
        assert_eq!(summary.recent_checkins, 2);
    }

    #[test]
    fn test_summary_latest_are_newest_first_and_capped() {
        let store = LoyaltyStore::new();
        let t0 = Utc::now();
        store
            .record_checkin(id("ana"), Some("Ana".to_string()), t0)
            .unwrap();
        for n in 1..=12 {
            store
                .record_checkin(id("bia"), None, t0 + Duration::seconds(n))
                .unwrap();
        }
        // Recorded last but happened first
        store
            .record_checkin(id("ana"), None, t0 - Duration::seconds(5))
            .unwrap();

        let summary = store.summary(t0 + Duration::minutes(1)).unwrap();
        let latest = &summary.latest_checkins;
        assert_eq!(latest.len(), LATEST_CHECKINS_LIMIT);
        assert_eq!(latest[0].checkin.timestamp, t0 + Duration::seconds(12));
        assert!(
            latest
                .windows(2)
                .all(|w| w[0].checkin.timestamp >= w[1].checkin.timestamp)
        );
        assert!(latest.iter().all(|r| r.customer_name == "Cliente bia"));
        assert_eq!(summary.recent_checkins, 14);
    }

    #[test]
    fn test_summary_names_and_wire_format() {
        let store = LoyaltyStore::new();
        let at = Utc::now();
        store
            .record_checkin(id("42"), Some("Ana".to_string()), at)
            .unwrap();

        let json = serde_json::to_value(store.summary(at).unwrap()).unwrap();
        assert_eq!(json["totalClientes"], 1);
        assert_eq!(json["checkinsRecentes"], 1);
        let latest = &json["ultimosCheckins"][0];
        assert_eq!(latest["clienteId"], "42");
        assert_eq!(latest["nome"], "Ana");
        assert_eq!(latest["pontos"], 10);
        assert_eq!(latest["id"], at.timestamp_millis());
        assert!(latest["data"].is_string());
    }

    #[test]
    fn test_concurrent_checkins_do_not_lose_points() {
        let store = Arc::new(LoyaltyStore::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for _ in 0..50 {
                        store.record_checkin(id("shared"), None, Utc::now()).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.customers().unwrap().len(), 1);
        let points = store.points_for(&id("shared")).unwrap();
        assert_eq!(points.points, Points::new(8 * 50 * 10));
        assert_eq!(points.checkins.len(), 400);
    }
}
