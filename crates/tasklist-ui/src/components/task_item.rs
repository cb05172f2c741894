use tasklist_core::task::normalize_name;
use tasklist_core::{
  Task,
  TaskId
};
use web_sys::{
  Event,
  FocusEvent,
  HtmlInputElement,
  InputEvent,
  KeyboardEvent,
  MouseEvent
};
use yew::{
  Callback,
  Html,
  Properties,
  TargetCast,
  classes,
  function_component,
  html,
  use_effect_with,
  use_node_ref,
  use_state
};

#[derive(Properties, PartialEq)]
pub struct TaskItemProps {
  pub task:      Task,
  pub on_rename:
    Callback<(TaskId, String)>,
  pub on_delete: Callback<TaskId>,
  pub on_toggle: Callback<TaskId>
}

#[function_component(TaskItem)]
pub fn task_item(
  props: &TaskItemProps
) -> Html {
  let editing = use_state(|| false);
  let draft = use_state(String::new);
  let input_ref = use_node_ref();

  {
    let input_ref = input_ref.clone();
    use_effect_with(
      *editing,
      move |editing| {
        if *editing
          && let Some(input) = input_ref
            .cast::<HtmlInputElement>()
        {
          let _ = input.focus();
        }
        || ()
      }
    );
  }

  let id = props.task.id.clone();
  let label_id =
    format!("task-list-item-{id}");

  // Saving through Enter, blur and the
  // Save button all land here.
  let commit = {
    let editing = editing.clone();
    let draft = draft.clone();
    let id = id.clone();
    let current = props.task.name.clone();
    let on_rename =
      props.on_rename.clone();
    Callback::from(move |_: ()| {
      if let Some(name) =
        rename_target(&draft, &current)
      {
        on_rename
          .emit((id.clone(), name));
      }
      editing.set(false);
    })
  };

  let on_edit = {
    let editing = editing.clone();
    let draft = draft.clone();
    let current = props.task.name.clone();
    Callback::from(move |_: MouseEvent| {
      draft.set(current.clone());
      editing.set(true);
    })
  };

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

  let on_keydown = {
    let commit = commit.clone();
    Callback::from(
      move |e: KeyboardEvent| {
        if e.key() == "Enter" {
          commit.emit(());
        }
      }
    )
  };

  let toggle = {
    let on_toggle =
      props.on_toggle.clone();
    let id = id.clone();
    Callback::from(move |_: ()| {
      on_toggle.emit(id.clone())
    })
  };

  let on_delete = {
    let on_delete =
      props.on_delete.clone();
    let id = id.clone();
    Callback::from(move |_: MouseEvent| {
      on_delete.emit(id.clone())
    })
  };

  let body = if *editing {
    let on_blur = commit
      .reform(|_: FocusEvent| ());
    html! {
        <input
            ref={input_ref.clone()}
            class="task-edit"
            type="text"
            aria-label="Task name"
            value={(*draft).clone()}
            oninput={on_input}
            onkeydown={on_keydown}
            onblur={on_blur}
        />
    }
  } else {
    let on_name_click = toggle
      .reform(|_: MouseEvent| ());
    html! {
        <span id={label_id.clone()} class="task-name" onclick={on_name_click}>
            { &props.task.name }
        </span>
    }
  };

  // Save and Edit are keyed apart so a
  // click that starts on Save never lands
  // on a patched Edit button.
  let action = if *editing {
    let on_save = commit
      .reform(|_: MouseEvent| ());
    let keep_focus =
      Callback::from(|e: MouseEvent| {
        e.prevent_default()
      });
    html! {
        <>
            <button
                key={action_key(true)}
                class="btn primary"
                aria-label="save"
                onmousedown={keep_focus}
                onclick={on_save}
            >
                { "Save" }
            </button>
        </>
    }
  } else {
    html! {
        <>
            <button key={action_key(false)} class="btn" aria-label="edit" onclick={on_edit}>{ "Edit" }</button>
        </>
    }
  };

  let on_check =
    toggle.reform(|_: Event| ());

  html! {
      <li class={classes!("task-item", props.task.completed.then_some("done"))}>
          <input
              type="checkbox"
              checked={props.task.completed}
              aria-labelledby={label_id}
              onchange={on_check}
          />
          { body }
          { action }
          <button class="btn danger" aria-label="delete" onclick={on_delete}>{ "Delete" }</button>
      </li>
  }
}

/// Trimmed draft to submit, or `None`
/// when it is blank or unchanged.
fn rename_target(
  draft: &str,
  current: &str
) -> Option<String> {
  normalize_name(draft)
    .filter(|name| name != current)
}

fn action_key(
  editing: bool
) -> &'static str {
  if editing { "save" } else { "edit" }
}
