use std::ops::Range;

use crate::filter::TaskFilter;
use crate::task::Task;

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Everything the presentation layer renders for one state of the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    pub visible: Vec<Task>,
    pub filter: TaskFilter,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    pub total_count: usize,
    pub completed_count: usize,
}

impl TaskView {
    pub fn has_pagination(&self) -> bool {
        self.total_pages > 1
    }
}

/// Tasks matching `filter`, in insertion order.
pub fn filter_tasks(tasks: &[Task], filter: TaskFilter) -> Vec<&Task> {
    tasks.iter().filter(|task| filter.matches(task)).collect()
}

pub fn total_pages(filtered_count: usize, page_size: usize) -> usize {
    filtered_count.div_ceil(page_size.max(1))
}

/// Index range of `page` (1-based) within a sequence of `len` items.
pub fn page_bounds(page: usize, page_size: usize, len: usize) -> Range<usize> {
    let page_size = page_size.max(1);
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size).min(len);
    let end = start.saturating_add(page_size).min(len);
    start..end
}

pub fn project(tasks: &[Task], filter: TaskFilter, page: usize, page_size: usize) -> TaskView {
    let filtered = filter_tasks(tasks, filter);
    let bounds = page_bounds(page, page_size, filtered.len());

    TaskView {
        visible: filtered[bounds].iter().map(|task| (*task).clone()).collect(),
        filter,
        page: page.max(1),
        total_pages: total_pages(filtered.len(), page_size),
        filtered_count: filtered.len(),
        total_count: tasks.len(),
        completed_count: tasks.iter().filter(|task| task.completed).count(),
    }
}
