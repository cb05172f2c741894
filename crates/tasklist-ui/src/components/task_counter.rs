use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct TaskCounterProps {
  pub total:     usize,
  pub completed: usize
}

#[function_component(TaskCounter)]
pub fn task_counter(
  props: &TaskCounterProps
) -> Html {
  html! {
      <div class="counter">
          <p>{ "Total tasks: " }<strong>{ props.total }</strong></p>
          <p>{ "Completed: " }<strong>{ props.completed }</strong></p>
      </div>
  }
}
