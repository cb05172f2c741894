use tasklist_core::task::normalize_name;
use web_sys::{
  HtmlInputElement,
  InputEvent,
  SubmitEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  function_component,
  html,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
  pub on_add: Callback<String>
}

#[function_component(TaskForm)]
pub fn task_form(
  props: &TaskFormProps
) -> Html {
  let draft = use_state(String::new);

  let on_input = {
    let draft = draft.clone();
    Callback::from(
      move |e: InputEvent| {
        let input: HtmlInputElement =
          e.target_unchecked_into();
        draft.set(input.value());
      }
    )
  };

  let on_submit = {
    let draft = draft.clone();
    let on_add = props.on_add.clone();
    Callback::from(
      move |e: SubmitEvent| {
        e.prevent_default();
        if let Some(name) =
          normalize_name(&draft)
        {
          on_add.emit(name);
          draft.set(String::new());
        }
      }
    )
  };

  html! {
      <form class="task-form" onsubmit={on_submit}>
          <input
              class="input"
              type="text"
              placeholder="Add a new task..."
              aria-label="New task"
              value={(*draft).clone()}
              oninput={on_input}
          />
          <button class="btn primary" type="submit">{ "Add" }</button>
      </form>
  }
}
