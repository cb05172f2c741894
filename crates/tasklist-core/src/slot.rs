use std::collections::HashSet;

use anyhow::Context;
use tracing::{debug, error, warn};

use crate::task::{Task, normalize_name};

/// A single named key-value entry holding the serialized task collection.
pub trait Slot {
    fn key(&self) -> &str;

    /// Returns `Ok(None)` when nothing has been written yet.
    fn read(&self) -> anyhow::Result<Option<String>>;

    fn write(&mut self, payload: &str) -> anyhow::Result<()>;
}

/// In-process slot. Nothing survives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySlot {
    key: String,
    value: Option<String>,
}

impl MemorySlot {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }

    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

impl Slot for MemorySlot {
    fn key(&self) -> &str {
        &self.key
    }

    fn read(&self) -> anyhow::Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn write(&mut self, payload: &str) -> anyhow::Result<()> {
        self.value = Some(payload.to_string());
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileSlot;

#[cfg(not(target_arch = "wasm32"))]
mod file {
    use std::fs;
    use std::io::Write;
    use std::path::{Path, PathBuf};

    use anyhow::{Context, anyhow};
    use tempfile::NamedTempFile;
    use tracing::{debug, info};

    use super::Slot;

    /// Slot backed by `<dir>/<key>.json`, replaced atomically on write.
    #[derive(Debug, Clone)]
    pub struct FileSlot {
        key: String,
        path: PathBuf,
    }

    impl FileSlot {
        #[tracing::instrument(skip(dir))]
        pub fn open(dir: &Path, key: &str) -> anyhow::Result<Self> {
            if key.trim().is_empty() {
                return Err(anyhow!("slot key cannot be empty"));
            }

            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;

            let path = dir.join(format!("{key}.json"));
            info!(path = %path.display(), "opened file slot");

            Ok(Self {
                key: key.to_string(),
                path,
            })
        }

        pub fn path(&self) -> &Path {
            &self.path
        }
    }

    impl Slot for FileSlot {
        fn key(&self) -> &str {
            &self.key
        }

        fn read(&self) -> anyhow::Result<Option<String>> {
            if !self.path.exists() {
                return Ok(None);
            }
            let raw = fs::read_to_string(&self.path)
                .with_context(|| format!("failed reading {}", self.path.display()))?;
            Ok(Some(raw))
        }

        fn write(&mut self, payload: &str) -> anyhow::Result<()> {
            debug!(file = %self.path.display(), bytes = payload.len(), "writing slot atomically");

            let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
            let mut temp = NamedTempFile::new_in(dir)?;
            temp.write_all(payload.as_bytes())?;
            temp.flush()?;

            temp.persist(&self.path)
                .map_err(|err| anyhow!("failed to persist {}: {}", self.path.display(), err))?;
            Ok(())
        }
    }
}

pub fn decode_tasks(raw: &str) -> anyhow::Result<Vec<Task>> {
    serde_json::from_str(raw).context("failed parsing task collection")
}

pub fn encode_tasks(tasks: &[Task]) -> anyhow::Result<String> {
    serde_json::to_string(tasks).context("failed serializing task collection")
}

/// Reads the collection from `slot`, degrading to an empty one on any
/// failure. Names are trimmed; blank names, blank ids and repeated ids
/// are dropped.
#[tracing::instrument(skip(slot), fields(key = %slot.key()))]
pub fn load_tasks(slot: &impl Slot) -> Vec<Task> {
    let raw = match slot.read() {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("slot is empty; starting with no tasks");
            return Vec::new();
        }
        Err(error) => {
            error!(error = %format!("{error:#}"), "failed reading task slot; starting empty");
            return Vec::new();
        }
    };

    if raw.trim().is_empty() {
        return Vec::new();
    }

    let decoded = match decode_tasks(&raw) {
        Ok(tasks) => tasks,
        Err(error) => {
            error!(error = %format!("{error:#}"), "stored tasks are unreadable; starting empty");
            return Vec::new();
        }
    };

    let mut seen = HashSet::new();
    let before = decoded.len();
    let tasks: Vec<Task> = decoded
        .into_iter()
        .filter(|task| !task.id.as_str().trim().is_empty())
        .filter_map(|task| {
            let name = normalize_name(&task.name)?;
            Some(Task { name, ..task })
        })
        .filter(|task| seen.insert(task.id.clone()))
        .collect();

    if tasks.len() != before {
        warn!(
            before,
            after = tasks.len(),
            "dropped stored tasks with blank names, blank ids or repeated ids"
        );
    }

    debug!(count = tasks.len(), "loaded tasks");
    tasks
}

#[tracing::instrument(skip(slot, tasks), fields(key = %slot.key(), count = tasks.len()))]
pub fn save_tasks(slot: &mut impl Slot, tasks: &[Task]) -> anyhow::Result<()> {
    let payload = encode_tasks(tasks)?;
    slot.write(&payload)
        .with_context(|| format!("failed writing slot {}", slot.key()))
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::task::TaskId;

    #[test]
    fn missing_and_corrupt_slots_load_empty() {
        assert!(load_tasks(&MemorySlot::new("tasks")).is_empty());
        assert!(load_tasks(&MemorySlot::with_value("tasks", "")).is_empty());
        assert!(load_tasks(&MemorySlot::with_value("tasks", "{not json")).is_empty());
        assert!(load_tasks(&MemorySlot::with_value("tasks", r#"{"id":"1"}"#)).is_empty());
    }

    #[test]
    fn save_then_load_round_trips() {
        let now = Utc::now();
        let mut first = Task::new("Buy milk".to_string(), now);
        first.completed = true;
        let second = Task::new("Walk dog".to_string(), now);
        let tasks = vec![first, second];

        let mut slot = MemorySlot::new("tasks");
        save_tasks(&mut slot, &tasks).expect("save tasks");

        assert_eq!(load_tasks(&slot), tasks);
    }

    #[test]
    fn load_drops_blank_names_and_repeated_ids() {
        let raw = r#"[
            {"id":"a","name":"First","completed":false,"createdAt":"2025-01-01T00:00:00Z"},
            {"id":"b","name":"   ","completed":false,"createdAt":"2025-01-01T00:00:00Z"},
            {"id":"a","name":"Again","completed":true,"createdAt":"2025-01-01T00:00:00Z"},
            {"id":"c","name":"Third","completed":true,"createdAt":"2025-01-01T00:00:00Z"},
            {"id":"","name":"No id","completed":false,"createdAt":"2025-01-01T00:00:00Z"},
            {"id":"d","name":"  padded  ","completed":false,"createdAt":"2025-01-01T00:00:00Z"}
        ]"#;

        let tasks = load_tasks(&MemorySlot::with_value("tasks", raw));
        let ids: Vec<TaskId> = tasks.iter().map(|task| task.id.clone()).collect();
        assert_eq!(ids, vec![TaskId::from("a"), TaskId::from("c"), TaskId::from("d")]);
        assert_eq!(tasks[0].name, "First");
        assert_eq!(tasks[2].name, "padded");
    }

    #[test]
    fn file_slot_reads_back_what_it_wrote() {
        let temp = tempfile::tempdir().expect("tempdir");
        let mut slot = FileSlot::open(temp.path(), "tasks").expect("open file slot");
        assert_eq!(slot.read().expect("read empty slot"), None);

        let tasks = vec![Task::new("Write report".to_string(), Utc::now())];
        save_tasks(&mut slot, &tasks).expect("save tasks");
        assert!(slot.path().exists());

        let reopened = FileSlot::open(temp.path(), "tasks").expect("reopen file slot");
        assert_eq!(load_tasks(&reopened), tasks);
    }

    #[test]
    fn file_slot_rejects_blank_key() {
        let temp = tempfile::tempdir().expect("tempdir");
        assert!(FileSlot::open(temp.path(), "  ").is_err());
    }
}
