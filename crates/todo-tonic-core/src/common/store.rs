//! The in-memory todo collection.
//!
//! [`TodoStore`] is the only stateful component of the system. It owns an
//! insertion-ordered sequence of [`TodoRecord`]s and is responsible for id
//! assignment and update semantics. Handlers share it as `Arc<TodoStore>`;
//! it has no dependencies of its own.

use crate::{Error, Result};
use parking_lot::RwLock;

/// A single todo record as held by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    /// Store-assigned, unique for the lifetime of the process.
    pub id: u64,
    /// Client-supplied label, opaque to the store.
    pub name: String,
    /// Completion flag.
    pub done: bool,
}

/// In-memory, insertion-ordered todo collection.
///
/// Ids are assigned as the record count at the moment of insertion: the
/// first record gets id 0, the next id 1, and so on. Deletion is
/// unsupported, so ids are never reused and every id equals its record's
/// position in insertion order.
///
/// All mutation is serialized behind one [`RwLock`] write guard; [`list`]
/// takes the read guard and may run concurrently with other readers. No
/// operation suspends or performs I/O, so a guard is never held across an
/// await point.
///
/// [`list`]: TodoStore::list
#[derive(Debug, Default)]
pub struct TodoStore {
    records: RwLock<Vec<TodoRecord>>,
}

impl TodoStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a new record and returns it with its assigned id.
    ///
    /// Any id the client sent alongside `name`/`done` has already been
    /// discarded by the caller; the store alone decides ids.
    pub fn create(&self, name: String, done: bool) -> TodoRecord {
        let mut records = self.records.write();
        let record = TodoRecord {
            id: records.len() as u64,
            name,
            done,
        };
        records.push(record.clone());
        record
    }

    /// Returns a snapshot of all records in insertion order.
    ///
    /// The vector is owned by the caller; mutating it cannot corrupt the
    /// store.
    pub fn list(&self) -> Vec<TodoRecord> {
        self.records.read().clone()
    }

    /// Overwrites `name` and `done` of the record matching `id` in place,
    /// leaving the id untouched, and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] when no record matches; the store is
    /// left unchanged in that case.
    pub fn update(&self, id: u64, name: String, done: bool) -> Result<TodoRecord> {
        let mut records = self.records.write();
        let record = records
            .iter_mut()
            .find(|record| record.id == id)
            .ok_or(Error::NotFound { id })?;
        record.name = name;
        record.done = done;
        Ok(record.clone())
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn create_assigns_sequential_ids() {
        let store = TodoStore::new();
        for expected in 0..10u64 {
            let record = store.create(format!("task {expected}"), false);
            assert_eq!(record.id, expected);
        }
        assert_eq!(store.len(), 10);
    }

    #[test]
    fn list_preserves_insertion_order() {
        let store = TodoStore::new();
        let a = store.create("a".into(), false);
        let b = store.create("b".into(), true);
        let c = store.create("c".into(), false);

        assert_eq!(store.list(), vec![a, b, c]);
    }

    #[test]
    fn list_returns_a_detached_snapshot() {
        let store = TodoStore::new();
        store.create("a".into(), false);

        let mut snapshot = store.list();
        snapshot[0].name = "mangled".into();
        snapshot.clear();

        assert_eq!(store.list()[0].name, "a");
    }

    #[test]
    fn update_overwrites_fields_in_place() {
        let store = TodoStore::new();
        store.create("buy milk".into(), false);

        let updated = store
            .update(0, "buy milk".into(), true)
            .expect("record exists");
        assert_eq!(
            updated,
            TodoRecord {
                id: 0,
                name: "buy milk".into(),
                done: true
            }
        );
        // In place, not appended.
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_is_idempotent() {
        let store = TodoStore::new();
        store.create("x".into(), false);

        let first = store.update(0, "x".into(), true).expect("record exists");
        let second = store.update(0, "x".into(), true).expect("record exists");

        assert_eq!(first, second);
        assert_eq!(store.list(), vec![second]);
    }

    #[test]
    fn update_leaves_other_records_untouched() {
        let store = TodoStore::new();
        store.create("a".into(), false);
        let b = store.create("b".into(), false);
        store.create("c".into(), true);

        store.update(0, "a2".into(), true).expect("record exists");

        let records = store.list();
        assert_eq!(records[1], b);
        assert_eq!(records[2].name, "c");
        assert!(records[2].done);
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = TodoStore::new();
        assert_eq!(
            store.update(999, "ghost".into(), true),
            Err(Error::NotFound { id: 999 })
        );

        store.create("a".into(), false);
        assert_eq!(
            store.update(1, "still a miss".into(), false),
            Err(Error::NotFound { id: 1 })
        );
        // A failed update mutates nothing.
        assert_eq!(store.list()[0].name, "a");
    }

    #[test]
    fn create_update_list_scenario() {
        let store = TodoStore::new();

        let milk = store.create("buy milk".into(), false);
        assert_eq!(milk.id, 0);
        assert!(!milk.done);

        let dog = store.create("walk dog".into(), false);
        assert_eq!(dog.id, 1);

        let milk = store
            .update(0, "buy milk".into(), true)
            .expect("record exists");
        assert!(milk.done);

        let records = store.list();
        assert_eq!(records.len(), 2);
        assert!(records[0].done);
        assert!(!records[1].done);
        assert_eq!(records[1].name, "walk dog");
    }

    #[test]
    fn concurrent_creates_assign_each_id_exactly_once() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 128;

        let store = Arc::new(TodoStore::new());
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || {
                    for i in 0..PER_THREAD {
                        store.create(format!("{t}-{i}"), false);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker thread panicked");
        }

        let mut ids: Vec<u64> = store.list().into_iter().map(|r| r.id).collect();
        ids.sort_unstable();
        let expected: Vec<u64> = (0..(THREADS * PER_THREAD) as u64).collect();
        assert_eq!(ids, expected);
    }
}
