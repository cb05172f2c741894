use tasklist_core::TaskFilter;
use yew::{
  Callback,
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct FilterButtonsProps {
  pub current:   TaskFilter,
  pub on_select: Callback<TaskFilter>
}

#[function_component(FilterButtons)]
pub fn filter_buttons(
  props: &FilterButtonsProps
) -> Html {
  html! {
      <div class="filters" role="group" aria-label="Task filters">
          {
              for TaskFilter::ALL.into_iter().map(|filter| {
                  let on_select = props.on_select.clone();
                  let class = if props.current == filter { "btn active" } else { "btn" };
                  html! {
                      <button class={class} onclick={move |_| on_select.emit(filter)}>
                          { filter.label() }
                      </button>
                  }
              })
          }
      </div>
  }
}
