use tasklist_core::Intent;
use wasm_bindgen::JsCast;

/// Page navigation bound to the arrow
/// keys.
pub fn intent_for_key(
  key: &str
) -> Option<Intent> {
  match key {
    | "ArrowLeft" => {
      Some(Intent::PreviousPage)
    }
    | "ArrowRight" => {
      Some(Intent::NextPage)
    }
    | _ => None
  }
}

/// Whether the key press lands in a
/// text field, where arrows move the
/// caret instead.
pub fn is_text_entry_target(
  event: &web_sys::KeyboardEvent
) -> bool {
  event.target().is_some_and(|target| {
    target
      .dyn_ref::<web_sys::HtmlInputElement>()
      .is_some_and(|input| {
        is_text_input_type(&input.type_())
      })
      || target
        .dyn_ref::<web_sys::HtmlTextAreaElement>()
        .is_some()
  })
}

/// Input types that keep arrow keys
/// for caret movement. Checkboxes and
/// buttons leave them to paging.
pub fn is_text_input_type(
  input_type: &str
) -> bool {
  matches!(
    input_type
      .to_ascii_lowercase()
      .as_str(),
    "" | "text"
      | "search"
      | "email"
      | "url"
      | "tel"
      | "password"
      | "number"
  )
}

#[cfg(test)]
mod keys_tests {
  use super::*;

  #[test]
  fn arrows_map_to_page_steps() {
    assert_eq!(
      intent_for_key("ArrowLeft"),
      Some(Intent::PreviousPage)
    );
    assert_eq!(
      intent_for_key("ArrowRight"),
      Some(Intent::NextPage)
    );
  }

  #[test]
  fn checkbox_focus_keeps_arrow_paging(
  ) {
    assert!(!is_text_input_type(
      "checkbox"
    ));
    assert!(!is_text_input_type(
      "button"
    ));
  }

  #[test]
  fn text_fields_keep_arrow_keys() {
    for input_type in
      ["", "text", "TEXT", "search"]
    {
      assert!(is_text_input_type(
        input_type
      ));
    }
  }

  #[test]
  fn other_keys_are_ignored() {
    for key in
      ["ArrowUp", "Enter", "a", ""]
    {
      assert_eq!(
        intent_for_key(key),
        None
      );
    }
  }
}
