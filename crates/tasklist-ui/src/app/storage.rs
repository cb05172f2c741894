use anyhow::anyhow;
use tasklist_core::Slot;

/// Task slot kept in
/// `window.localStorage`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorageSlot {
  key: String
}

impl LocalStorageSlot {
  pub fn new(key: &str) -> Self {
    Self {
      key: key.to_string()
    }
  }
}

fn local_storage()
-> anyhow::Result<web_sys::Storage> {
  web_sys::window()
    .ok_or_else(|| {
      anyhow!("no browser window")
    })?
    .local_storage()
    .map_err(|error| {
      anyhow!(
        "local storage access denied: \
         {error:?}"
      )
    })?
    .ok_or_else(|| {
      anyhow!(
        "local storage unavailable"
      )
    })
}

impl Slot for LocalStorageSlot {
  fn key(&self) -> &str {
    &self.key
  }

  fn read(
    &self
  ) -> anyhow::Result<Option<String>> {
    local_storage()?
      .get_item(&self.key)
      .map_err(|error| {
        anyhow!(
          "failed reading {}: {error:?}",
          self.key
        )
      })
  }

  fn write(
    &mut self,
    payload: &str
  ) -> anyhow::Result<()> {
    local_storage()?
      .set_item(&self.key, payload)
      .map_err(|error| {
        anyhow!(
          "failed writing {}: {error:?}",
          self.key
        )
      })
  }
}
