use anyhow::Context;
use serde::{
  Deserialize,
  Serialize
};
use tracing::{
  error,
  info,
  warn
};

use crate::view::DEFAULT_PAGE_SIZE;

const DEFAULT_TITLE: &str = "Task List";
const DEFAULT_STORAGE_KEY: &str =
  "tasks";

#[derive(
  Debug,
  Clone,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(default)]
pub struct ListConfig {
  pub version:        u32,
  pub title:          String,
  pub storage_key:    String,
  pub page_size:      usize,
  pub repository_url: Option<String>
}

impl Default for ListConfig {
  fn default() -> Self {
    Self {
      version:        1,
      title:          DEFAULT_TITLE
        .to_string(),
      storage_key:    DEFAULT_STORAGE_KEY
        .to_string(),
      page_size:      DEFAULT_PAGE_SIZE,
      repository_url: None
    }
  }
}

impl ListConfig {
  pub fn from_toml_str(
    raw: &str
  ) -> anyhow::Result<Self> {
    let mut config =
      toml::from_str::<ListConfig>(raw)
        .context(
          "failed parsing list config"
        )?;
    config.sanitize();
    Ok(config)
  }

  /// Parses `raw`, falling back to
  /// defaults when it is unreadable.
  pub fn load_or_default(
    raw: &str
  ) -> Self {
    match Self::from_toml_str(raw) {
      | Ok(config) => {
        info!(
          version = config.version,
          page_size = config.page_size,
          storage_key = %config.storage_key,
          "loaded list config"
        );
        config
      }
      | Err(error) => {
        error!(
          error = %format!("{error:#}"),
          "failed parsing list config; \
           using defaults"
        );
        Self::default()
      }
    }
  }

  pub fn sanitize(&mut self) {
    if self.page_size == 0 {
      warn!(
        "page_size must be positive; \
         using default"
      );
      self.page_size =
        DEFAULT_PAGE_SIZE;
    }

    if self.storage_key.trim().is_empty()
    {
      self.storage_key =
        DEFAULT_STORAGE_KEY.to_string();
    } else {
      self.storage_key = self
        .storage_key
        .trim()
        .to_string();
    }

    if self.title.trim().is_empty() {
      self.title =
        DEFAULT_TITLE.to_string();
    }

    if self
      .repository_url
      .as_deref()
      .is_some_and(|url| {
        url.trim().is_empty()
      })
    {
      self.repository_url = None;
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_document_uses_defaults() {
    let config =
      ListConfig::from_toml_str("")
        .expect("parse empty config");
    assert_eq!(
      config,
      ListConfig::default()
    );
    assert_eq!(config.page_size, 5);
    assert_eq!(
      config.storage_key,
      "tasks"
    );
  }

  #[test]
  fn values_are_read_and_sanitized() {
    let config = ListConfig::from_toml_str(
      r#"
version = 2
title = "  "
storage_key = " todo.items "
page_size = 0
repository_url = ""
"#
    )
    .expect("parse config");

    assert_eq!(config.version, 2);
    assert_eq!(config.title, "Task List");
    assert_eq!(
      config.storage_key,
      "todo.items"
    );
    assert_eq!(config.page_size, 5);
    assert_eq!(
      config.repository_url,
      None
    );
  }

  #[test]
  fn unreadable_document_falls_back() {
    let config =
      ListConfig::load_or_default(
        "page_size = \"ten\""
      );
    assert_eq!(
      config,
      ListConfig::default()
    );
  }
}
