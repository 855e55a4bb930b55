use crate::selection::{Selection, ToggleOutcome};
use chrono::{DateTime, Duration, Utc};
use express_catalog::Seat;
use express_core::{FareOffer, Train};
use express_shared::FareClass;
use uuid::Uuid;
use std::collections::HashMap;

/// Idle time after which an abandoned session is dropped
pub const DEFAULT_SELECTION_TTL_SECONDS: i64 = 1800;

/// Holds every open selection session, keyed by session id
pub struct SelectionManager {
    selections: HashMap<Uuid, Selection>,
    ttl: Duration,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::with_ttl(Duration::seconds(DEFAULT_SELECTION_TTL_SECONDS))
    }

    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            selections: HashMap::new(),
            ttl,
        }
    }

    /// Open an empty session, dropping idle ones first
    pub fn create(&mut self) -> Selection {
        self.evict_idle(Utc::now(), self.ttl);

        let selection = Selection::new();
        self.selections.insert(selection.id, selection.clone());
        tracing::debug!("Selection {} opened", selection.id);
        selection
    }

    /// Remove sessions untouched for longer than `ttl`. Returns how many were dropped.
    pub fn evict_idle(&mut self, now: DateTime<Utc>, ttl: Duration) -> usize {
        let initial_count = self.selections.len();
        self.selections.retain(|_, selection| now - selection.updated_at <= ttl);

        let evicted = initial_count - self.selections.len();
        if evicted > 0 {
            tracing::debug!("Evicted {} idle selections", evicted);
        }
        evicted
    }

    pub fn get(&self, id: &Uuid) -> Option<&Selection> {
        self.selections.get(id)
    }

    /// Choose a train and fare class. Rejects sold-out classes and unknown sessions
    /// before `draw` is asked for a seat grid.
    pub fn select_class<F>(
        &mut self,
        id: &Uuid,
        train: Train,
        fare_class: FareClass,
        draw: F,
    ) -> Result<&Selection, SelectionError>
    where
        F: FnOnce(&FareOffer) -> Vec<Seat>,
    {
        if !train.fare(fare_class).is_bookable() {
            return Err(SelectionError::ClassUnavailable {
                train: train.number.clone(),
                fare_class,
            });
        }

        let selection = self.get_mut(id)?;
        let seat_map = draw(train.fare(fare_class));
        tracing::debug!(
            "Selection {}: train {} class {} with {} seats",
            id,
            train.number,
            fare_class,
            seat_map.len()
        );
        selection.select_class(train, fare_class, seat_map);
        Ok(&*selection)
    }

    pub fn toggle_seat(&mut self, id: &Uuid, number: u32) -> Result<(ToggleOutcome, &Selection), SelectionError> {
        let selection = self.get_mut(id)?;
        if selection.fare_class.is_none() {
            return Err(SelectionError::NothingSelected);
        }

        let outcome = selection.toggle_seat(number);
        tracing::debug!("Selection {}: seat {} {:?}", id, number, outcome);
        Ok((outcome, &*selection))
    }

    pub fn remove(&mut self, id: &Uuid) -> Result<Selection, SelectionError> {
        self.selections
            .remove(id)
            .ok_or_else(|| SelectionError::NotFound(id.to_string()))
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    fn get_mut(&mut self, id: &Uuid) -> Result<&mut Selection, SelectionError> {
        self.selections
            .get_mut(id)
            .ok_or_else(|| SelectionError::NotFound(id.to_string()))
    }
}

impl Default for SelectionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Selection not found: {0}")]
    NotFound(String),

    #[error("No seats left in {fare_class} on train {train}")]
    ClassUnavailable {
        train: String,
        fare_class: FareClass,
    },

    #[error("No train and fare class chosen")]
    NothingSelected,

    #[error("No seats chosen")]
    NoSeatsSelected,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::selection::tests::{grid, train};

    #[test]
    fn test_selection_session_flow() {
        let mut manager = SelectionManager::new();
        let id = manager.create().id;

        manager.select_class(&id, train("1", 4890), FareClass::Coupe, |_| grid(32, &[2])).unwrap();

        let (outcome, _) = manager.toggle_seat(&id, 12).unwrap();
        assert_eq!(outcome, ToggleOutcome::Added);
        let (outcome, selection) = manager.toggle_seat(&id, 2).unwrap();
        assert_eq!(outcome, ToggleOutcome::Ignored);
        assert_eq!(selection.seats, vec![12]);

        let (_, selection) = manager.toggle_seat(&id, 13).unwrap();
        assert_eq!(selection.total_price(), 9780);

        manager.remove(&id).unwrap();
        assert!(manager.is_empty());
    }

    #[test]
    fn test_sold_out_class_rejected() {
        let mut manager = SelectionManager::new();
        let id = manager.create().id;

        let result = manager.select_class(&id, train("1", 4890), FareClass::Sv, |_| grid(20, &[]));
        assert!(matches!(result, Err(SelectionError::ClassUnavailable { .. })));
        assert!(manager.get(&id).unwrap().fare_class.is_none());
    }

    #[test]
    fn test_toggle_before_class() {
        let mut manager = SelectionManager::new();
        let id = manager.create().id;
        assert!(matches!(manager.toggle_seat(&id, 1), Err(SelectionError::NothingSelected)));
    }

    #[test]
    fn test_unknown_session() {
        let mut manager = SelectionManager::new();
        let missing = Uuid::new_v4();
        assert!(matches!(manager.toggle_seat(&missing, 1), Err(SelectionError::NotFound(_))));
        assert!(manager.remove(&missing).is_err());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut manager = SelectionManager::new();
        let a = manager.create().id;
        let b = manager.create().id;

        manager.select_class(&a, train("1", 4890), FareClass::Coupe, |_| grid(32, &[])).unwrap();
        manager.select_class(&b, train("1", 4890), FareClass::Coupe, |_| grid(32, &[])).unwrap();
        manager.toggle_seat(&a, 7).unwrap();

        assert_eq!(manager.get(&a).unwrap().seats, vec![7]);
        assert!(manager.get(&b).unwrap().seats.is_empty());
        assert_eq!(manager.len(), 2);
    }

    #[test]
    fn test_rejected_selection_does_not_draw() {
        let mut manager = SelectionManager::new();
        let id = manager.create().id;
        let mut drawn = 0;

        let result = manager.select_class(&id, train("1", 4890), FareClass::Sv, |_| {
            drawn += 1;
            grid(20, &[])
        });
        assert!(result.is_err());

        let result = manager.select_class(&Uuid::new_v4(), train("1", 4890), FareClass::Coupe, |_| {
            drawn += 1;
            grid(32, &[])
        });
        assert!(matches!(result, Err(SelectionError::NotFound(_))));
        assert_eq!(drawn, 0);
    }

    #[test]
    fn test_idle_sessions_are_evicted() {
        let mut manager = SelectionManager::with_ttl(Duration::seconds(60));
        let stale = manager.create().id;
        let fresh = manager.create().id;
        manager.selections.get_mut(&stale).unwrap().updated_at = Utc::now() - Duration::seconds(120);

        assert_eq!(manager.evict_idle(Utc::now(), Duration::seconds(60)), 1);
        assert!(manager.get(&stale).is_none());
        assert!(manager.get(&fresh).is_some());
    }

    #[test]
    fn test_create_drops_idle_sessions() {
        let mut manager = SelectionManager::with_ttl(Duration::seconds(60));
        let stale = manager.create().id;
        manager.selections.get_mut(&stale).unwrap().updated_at = Utc::now() - Duration::seconds(61);

        manager.create();
        assert_eq!(manager.len(), 1);
        assert!(manager.get(&stale).is_none());
    }
}
