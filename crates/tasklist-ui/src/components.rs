mod filter_buttons;
mod pagination;
mod task_counter;
mod task_form;
mod task_item;
mod task_list;

pub use filter_buttons::FilterButtons;
pub use pagination::Pagination;
pub use task_counter::TaskCounter;
pub use task_form::TaskForm;
pub use task_item::TaskItem;
pub use task_list::TaskList;
