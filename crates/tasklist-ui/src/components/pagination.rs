use tasklist_core::{
  PageLink,
  page_links
};
use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
  pub page:        usize,
  pub total_pages: usize,
  pub on_select:   Callback<usize>
}

#[function_component(Pagination)]
pub fn pagination(
  props: &PaginationProps
) -> Html {
  let page = props.page;
  let last = props.total_pages;
  let jump = |target: usize| {
    let on_select =
      props.on_select.clone();
    Callback::from(move |_: MouseEvent| {
      on_select.emit(target)
    })
  };

  html! {
      <nav class="pagination" aria-label="Pages">
          <button class="btn" aria-label="first page" disabled={page <= 1} onclick={jump(1)}>{ "«" }</button>
          <button class="btn" aria-label="previous page" disabled={page <= 1} onclick={jump(page.saturating_sub(1).max(1))}>{ "‹" }</button>
          {
              for page_links(page, last).into_iter().map(|link| match link {
                  PageLink::Page(number) => html! {
                      <button
                          class={if number == page { "btn active" } else { "btn" }}
                          aria-current={(number == page).then_some("page")}
                          onclick={jump(number)}
                      >
                          { number }
                      </button>
                  },
                  PageLink::Gap => html! { <span class="page-gap">{ "…" }</span> },
              })
          }
          <button class="btn" aria-label="next page" disabled={page >= last} onclick={jump((page + 1).min(last))}>{ "›" }</button>
          <button class="btn" aria-label="last page" disabled={page >= last} onclick={jump(last)}>{ "»" }</button>
      </nav>
  }
}
