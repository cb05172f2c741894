use tracing::{debug, info};

use crate::config::ListConfig;
use crate::filter::TaskFilter;
use crate::pager::{PageEvent, PageStep, Pager};
use crate::slot::Slot;
use crate::store::TaskStore;
use crate::task::TaskId;
use crate::view::{TaskView, filter_tasks, project, total_pages};

/// A user action forwarded by the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    Add(String),
    Rename { id: TaskId, name: String },
    Delete(TaskId),
    Toggle(TaskId),
    SetFilter(TaskFilter),
    SetPage(usize),
    PreviousPage,
    NextPage,
}

/// Store, active filter and current page behind a single entry point.
///
/// Each intent runs mutation, persistence, recount and page
/// reconciliation in that order.
#[derive(Debug, Clone)]
pub struct TaskBoard<S> {
    store: TaskStore<S>,
    filter: TaskFilter,
    pager: Pager,
    page_size: usize,
}

impl<S: Slot> TaskBoard<S> {
    pub fn open(slot: S, config: &ListConfig) -> Self {
        Self::with_page_size(slot, config.page_size)
    }

    pub fn with_page_size(slot: S, page_size: usize) -> Self {
        let mut board = Self {
            store: TaskStore::open(slot),
            filter: TaskFilter::default(),
            pager: Pager::default(),
            page_size: page_size.max(1),
        };
        board.reconcile(PageEvent::DataChanged);
        info!(
            tasks = board.store.len(),
            page_size = board.page_size,
            "opened task board"
        );
        board
    }

    pub fn store(&self) -> &TaskStore<S> {
        &self.store
    }

    pub fn filter(&self) -> TaskFilter {
        self.filter
    }

    pub fn page(&self) -> usize {
        self.pager.page()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_pages(&self) -> usize {
        total_pages(filter_tasks(self.store.tasks(), self.filter).len(), self.page_size)
    }

    pub fn view(&self) -> TaskView {
        project(self.store.tasks(), self.filter, self.pager.page(), self.page_size)
    }

    /// Applies `intent`; returns whether the tasks, filter or page changed.
    pub fn apply(&mut self, intent: Intent) -> bool {
        debug!(?intent, "applying intent");
        match intent {
            Intent::Add(name) => {
                let added = self.store.add(&name).is_some();
                self.after_mutation(added)
            }
            Intent::Rename { id, name } => {
                let renamed = self.store.rename(&id, &name);
                self.after_mutation(renamed)
            }
            Intent::Delete(id) => {
                let removed = self.store.remove(&id);
                self.after_mutation(removed)
            }
            Intent::Toggle(id) => {
                let toggled = self.store.toggle(&id);
                self.after_mutation(toggled)
            }
            Intent::SetFilter(filter) => {
                if filter == self.filter {
                    return false;
                }
                self.filter = filter;
                self.reconcile(PageEvent::FilterChanged);
                true
            }
            Intent::SetPage(page) => self.reconcile(PageEvent::Jump(page)),
            Intent::PreviousPage => self.reconcile(PageEvent::Step(PageStep::Previous)),
            Intent::NextPage => self.reconcile(PageEvent::Step(PageStep::Next)),
        }
    }

    fn after_mutation(&mut self, changed: bool) -> bool {
        if changed {
            self.reconcile(PageEvent::DataChanged);
        }
        changed
    }

    fn reconcile(&mut self, event: PageEvent) -> bool {
        let before = self.pager.page();
        let total = self.total_pages();
        self.pager.apply(event, total) != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::MemorySlot;

    fn board(names: &[&str]) -> TaskBoard<MemorySlot> {
        let mut board = TaskBoard::with_page_size(MemorySlot::new("tasks"), 5);
        for name in names {
            assert!(board.apply(Intent::Add(name.to_string())));
        }
        board
    }

    #[test]
    fn same_filter_is_a_no_op() {
        let mut board = board(&["a", "b", "c", "d", "e", "f"]);
        assert!(board.apply(Intent::SetPage(2)));
        assert!(!board.apply(Intent::SetFilter(TaskFilter::All)));
        assert_eq!(board.page(), 2);
    }

    #[test]
    fn filter_switch_recomputes_pages() {
        let mut board = board(&["a", "b", "c", "d", "e", "f", "g"]);
        assert!(board.apply(Intent::SetFilter(TaskFilter::Completed)));
        let view = board.view();
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.page, 1);
        assert!(view.visible.is_empty());
    }

    #[test]
    fn toggling_out_of_filter_pulls_page_back() {
        let mut board = board(&["a", "b", "c", "d", "e", "f"]);
        board.apply(Intent::SetFilter(TaskFilter::Pending));
        board.apply(Intent::NextPage);
        assert_eq!(board.page(), 2);

        let last = board.view().visible[0].id.clone();
        assert!(board.apply(Intent::Toggle(last)));
        assert_eq!(board.page(), 1);
        assert_eq!(board.view().visible.len(), 5);
    }

    #[test]
    fn page_intents_report_changes() {
        let mut board = board(&["a", "b", "c", "d", "e", "f"]);
        assert!(!board.apply(Intent::PreviousPage));
        assert!(board.apply(Intent::NextPage));
        assert!(!board.apply(Intent::NextPage));
        assert!(!board.apply(Intent::SetPage(7)));
        assert!(board.apply(Intent::SetPage(1)));
    }

    #[test]
    fn opening_clamps_against_loaded_data() {
        let mut seed = board(&["a"]);
        seed.apply(Intent::SetPage(3));
        let reopened = TaskBoard::open(seed.store().slot().clone(), &ListConfig::default());
        assert_eq!(reopened.page(), 1);
        assert_eq!(reopened.store().len(), 1);
    }
}
