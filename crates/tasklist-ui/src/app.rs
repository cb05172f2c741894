mod keys;
mod storage;

use std::rc::Rc;

use gloo::console::log;
use gloo::events::EventListener;
use tasklist_core::{
  Intent,
  ListConfig,
  TaskBoard,
  TaskFilter,
  TaskId
};
use wasm_bindgen::JsCast;
use yew::{
  Callback,
  Html,
  Reducible,
  function_component,
  html,
  use_effect_with,
  use_reducer,
  use_state
};

use self::keys::{
  intent_for_key,
  is_text_entry_target
};
use self::storage::LocalStorageSlot;
use crate::components::{
  FilterButtons,
  Pagination,
  TaskCounter,
  TaskForm,
  TaskList
};

const LIST_CONFIG_TOML: &str =
  include_str!("../assets/tasklist.toml");

#[derive(Clone)]
struct BoardState {
  board: TaskBoard<LocalStorageSlot>
}

impl BoardState {
  fn open(config: &ListConfig) -> Self {
    let slot = LocalStorageSlot::new(
      &config.storage_key
    );
    Self {
      board: TaskBoard::open(
        slot, config
      )
    }
  }
}

impl Reducible for BoardState {
  type Action = Intent;

  fn reduce(
    self: Rc<Self>,
    action: Intent
  ) -> Rc<Self> {
    let mut next = (*self).clone();
    if next.board.apply(action) {
      Rc::new(next)
    } else {
      self
    }
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config =
    use_state(load_list_config);
  let state = {
    let config_snapshot =
      (*config).clone();
    use_reducer(move || {
      BoardState::open(
        &config_snapshot
      )
    })
  };

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and board \
         loaded"
      );
      || ()
    });
  }

  {
    let dispatcher = state.dispatcher();
    use_effect_with((), move |_| {
      let listener = web_sys::window()
        .and_then(|window| {
          window.document()
        })
        .map(|document| {
          EventListener::new(
            &document,
            "keydown",
            move |event| {
              let Some(event) = event
                .dyn_ref::<web_sys::KeyboardEvent>(
                )
              else {
                return;
              };
              if is_text_entry_target(
                event
              ) {
                return;
              }
              if let Some(intent) =
                intent_for_key(
                  &event.key()
                )
              {
                dispatcher
                  .dispatch(intent);
              }
            }
          )
        });
      if listener.is_none() {
        tracing::warn!(
          "no document; keyboard \
           paging disabled"
        );
      }
      move || drop(listener)
    });
  }

  let view = state.board.view();

  let on_add = {
    let dispatcher = state.dispatcher();
    Callback::from(
      move |name: String| {
        dispatcher
          .dispatch(Intent::Add(name));
      }
    )
  };

  let on_rename = {
    let dispatcher = state.dispatcher();
    Callback::from(
      move |(id, name): (
        TaskId,
        String
      )| {
        dispatcher.dispatch(
          Intent::Rename { id, name }
        );
      }
    )
  };

  let on_delete = {
    let dispatcher = state.dispatcher();
    Callback::from(move |id: TaskId| {
      ui_debug(
        "task.delete",
        id.as_str()
      );
      dispatcher
        .dispatch(Intent::Delete(id));
    })
  };

  let on_toggle = {
    let dispatcher = state.dispatcher();
    Callback::from(move |id: TaskId| {
      dispatcher
        .dispatch(Intent::Toggle(id));
    })
  };

  let on_filter = {
    let dispatcher = state.dispatcher();
    Callback::from(
      move |filter: TaskFilter| {
        dispatcher.dispatch(
          Intent::SetFilter(filter)
        );
      }
    )
  };

  let on_page = {
    let dispatcher = state.dispatcher();
    Callback::from(move |page: usize| {
      dispatcher
        .dispatch(Intent::SetPage(page));
    })
  };

  let repository_link = match config
    .repository_url
    .clone()
  {
    | Some(url) => html! {
        <a class="repo-link" href={url} target="_blank" rel="noopener noreferrer">{ "GitHub" }</a>
    },
    | None => html! {}
  };

  html! {
      <div class="app">
          <header class="app-header">
              <h1>{ config.title.clone() }</h1>
              { repository_link }
          </header>
          <main class="panel">
              <TaskForm on_add={on_add} />
              <FilterButtons current={view.filter} on_select={on_filter} />
              <TaskCounter total={view.total_count} completed={view.completed_count} />
              <div class="list-viewport">
                  <TaskList
                      key={format!("page-{}", view.page)}
                      tasks={view.visible.clone()}
                      on_rename={on_rename}
                      on_delete={on_delete}
                      on_toggle={on_toggle}
                  />
              </div>
              {
                  if view.has_pagination() {
                      html! {
                          <Pagination
                              page={view.page}
                              total_pages={view.total_pages}
                              on_select={on_page}
                          />
                      }
                  } else {
                      html! {}
                  }
              }
          </main>
      </div>
  }
}

fn load_list_config() -> ListConfig {
  ListConfig::load_or_default(
    LIST_CONFIG_TOML
  )
}

fn ui_debug(
  event: &str,
  detail: &str
) {
  tracing::debug!(
    event, detail, "ui-debug"
  );
  log!(format!(
    "[ui-debug] {event}: {detail}"
  ));
}
