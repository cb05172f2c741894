use tasklist_core::{
  Task,
  TaskId
};
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

use super::TaskItem;

#[derive(Properties, PartialEq)]
pub struct TaskListProps {
  pub tasks:     Vec<Task>,
  pub on_rename:
    Callback<(TaskId, String)>,
  pub on_delete: Callback<TaskId>,
  pub on_toggle: Callback<TaskId>
}

#[function_component(TaskList)]
pub fn task_list(
  props: &TaskListProps
) -> Html {
  if props.tasks.is_empty() {
    return html! {
        <div class="empty-state">
            { "No tasks to show. Add a new one!" }
        </div>
    };
  }

  html! {
      <ul class="task-list">
          {
              for props.tasks.iter().cloned().map(|task| {
                  let key = task.id.to_string();
                  html! {
                      <TaskItem
                          key={key}
                          task={task}
                          on_rename={props.on_rename.clone()}
                          on_delete={props.on_delete.clone()}
                          on_toggle={props.on_toggle.clone()}
                      />
                  }
              })
          }
      </ul>
  }
}
