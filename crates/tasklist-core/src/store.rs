use chrono::{DateTime, Utc};
use tracing::{debug, error, info};

use crate::slot::{Slot, load_tasks, save_tasks};
use crate::task::{Task, TaskId, normalize_name};

/// The authoritative ordered task collection and its persisted mirror.
///
/// Every successful mutation rewrites the whole collection to the slot.
/// Mutations that change nothing leave the slot untouched.
#[derive(Debug, Clone)]
pub struct TaskStore<S> {
    slot: S,
    tasks: Vec<Task>,
}

impl<S: Slot> TaskStore<S> {
    #[tracing::instrument(skip(slot), fields(key = %slot.key()))]
    pub fn open(slot: S) -> Self {
        let tasks = load_tasks(&slot);
        info!(count = tasks.len(), "opened task store");
        Self { slot, tasks }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn add(&mut self, name: &str) -> Option<TaskId> {
        self.add_at(name, Utc::now())
    }

    #[tracing::instrument(skip(self, name))]
    pub fn add_at(&mut self, name: &str, now: DateTime<Utc>) -> Option<TaskId> {
        let Some(name) = normalize_name(name) else {
            debug!("ignoring add with blank name");
            return None;
        };

        let task = Task::new(name, now);
        let id = task.id.clone();
        self.tasks.push(task);
        debug!(id = %id, count = self.tasks.len(), "added task");

        self.persist();
        Some(id)
    }

    #[tracing::instrument(skip(self, name), fields(id = %id))]
    pub fn rename(&mut self, id: &TaskId, name: &str) -> bool {
        let Some(name) = normalize_name(name) else {
            debug!("ignoring rename to blank name");
            return false;
        };
        let Some(task) = self.tasks.iter_mut().find(|task| &task.id == id) else {
            debug!("ignoring rename of unknown task");
            return false;
        };
        if task.name == name {
            return false;
        }

        task.name = name;
        debug!("renamed task");
        self.persist();
        true
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    pub fn remove(&mut self, id: &TaskId) -> bool {
        let Some(idx) = self.tasks.iter().position(|task| &task.id == id) else {
            debug!("ignoring removal of unknown task");
            return false;
        };

        self.tasks.remove(idx);
        debug!(count = self.tasks.len(), "removed task");
        self.persist();
        true
    }

    #[tracing::instrument(skip(self), fields(id = %id))]
    pub fn toggle(&mut self, id: &TaskId) -> bool {
        let Some(task) = self.tasks.iter_mut().find(|task| &task.id == id) else {
            debug!("ignoring toggle of unknown task");
            return false;
        };

        task.completed = !task.completed;
        debug!(completed = task.completed, "toggled task");
        self.persist();
        true
    }

    fn persist(&mut self) {
        if let Err(error) = save_tasks(&mut self.slot, &self.tasks) {
            error!(
                error = %format!("{error:#}"),
                count = self.tasks.len(),
                "failed persisting tasks; keeping in-memory state"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;
    use crate::slot::MemorySlot;

    #[derive(Debug, Default)]
    struct BrokenSlot {
        attempts: usize,
    }

    impl Slot for BrokenSlot {
        fn key(&self) -> &str {
            "broken"
        }

        fn read(&self) -> anyhow::Result<Option<String>> {
            Err(anyhow!("storage unavailable"))
        }

        fn write(&mut self, _payload: &str) -> anyhow::Result<()> {
            self.attempts += 1;
            Err(anyhow!("quota exceeded"))
        }
    }

    fn store_with(names: &[&str]) -> (TaskStore<MemorySlot>, Vec<TaskId>) {
        let mut store = TaskStore::open(MemorySlot::new("tasks"));
        let ids = names
            .iter()
            .map(|name| store.add(name).expect("add task"))
            .collect();
        (store, ids)
    }

    #[test]
    fn add_appends_trimmed_pending_task() {
        let (mut store, _) = store_with(&["first"]);
        let id = store.add("  second  ").expect("add");

        assert_eq!(store.len(), 2);
        let task = store.get(&id).expect("task present");
        assert_eq!(task.name, "second");
        assert!(!task.completed);
        assert_eq!(store.tasks()[1].id, id);
    }

    #[test]
    fn add_rejects_blank_names_without_persisting() {
        let mut store = TaskStore::open(MemorySlot::new("tasks"));
        assert_eq!(store.add(""), None);
        assert_eq!(store.add("   "), None);
        assert!(store.is_empty());
        assert_eq!(store.slot().value(), None);
    }

    #[test]
    fn rename_keeps_identity_and_position() {
        let (mut store, ids) = store_with(&["a", "b", "c"]);
        let created_at = store.tasks()[1].created_at;

        assert!(store.rename(&ids[1], " bee "));
        let task = &store.tasks()[1];
        assert_eq!(task.id, ids[1]);
        assert_eq!(task.name, "bee");
        assert_eq!(task.created_at, created_at);
    }

    #[test]
    fn rename_no_ops() {
        let (mut store, ids) = store_with(&["a"]);
        let before = store.slot().value().map(str::to_string);

        assert!(!store.rename(&ids[0], "  "));
        assert!(!store.rename(&ids[0], " a "));
        assert!(!store.rename(&TaskId::from("missing"), "x"));
        assert_eq!(store.slot().value().map(str::to_string), before);
    }

    #[test]
    fn rename_to_trimmed_stored_name_is_a_no_op() {
        let raw = r#"[{"id":"p","name":"  padded  ","completed":false,"createdAt":"2025-01-01T00:00:00Z"}]"#;
        let mut store = TaskStore::open(MemorySlot::with_value("tasks", raw));
        let id = TaskId::from("p");

        assert_eq!(store.tasks()[0].name, "padded");
        assert!(!store.rename(&id, "padded"));
        assert!(!store.rename(&id, " padded "));
        assert_eq!(store.slot().value(), Some(raw));
    }

    #[test]
    fn remove_preserves_relative_order() {
        let (mut store, ids) = store_with(&["a", "b", "c", "d"]);
        assert!(store.remove(&ids[1]));
        assert!(!store.remove(&ids[1]));

        let names: Vec<&str> = store.tasks().iter().map(|task| task.name.as_str()).collect();
        assert_eq!(names, vec!["a", "c", "d"]);
    }

    #[test]
    fn toggle_flips_and_counts() {
        let (mut store, ids) = store_with(&["a", "b"]);
        assert!(store.toggle(&ids[0]));
        assert_eq!(store.completed_count(), 1);
        assert!(store.toggle(&ids[0]));
        assert_eq!(store.completed_count(), 0);
    }

    #[test]
    fn mutations_persist_every_change() {
        let (mut store, ids) = store_with(&["a", "b"]);
        store.toggle(&ids[1]);

        let reopened = TaskStore::open(store.slot().clone());
        assert_eq!(reopened.tasks(), store.tasks());
    }

    #[test]
    fn persistence_failures_do_not_break_mutations() {
        let mut store = TaskStore::open(BrokenSlot::default());
        assert!(store.is_empty());

        let id = store.add("still works").expect("add despite failing slot");
        assert!(store.toggle(&id));
        assert!(store.rename(&id, "renamed"));
        assert_eq!(store.tasks()[0].name, "renamed");
        assert!(store.tasks()[0].completed);
        assert_eq!(store.slot().attempts, 3);
    }
}
