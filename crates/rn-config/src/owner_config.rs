use serde::Deserialize;

/// Platform-level superusers. Owners bypass every authorization check and
/// live outside the data model, the same way the chat platform keeps its
/// superuser list in adapter configuration rather than in user records.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct OwnerConfig {
    pub ids: Vec<String>,
}

impl OwnerConfig {
    pub fn is_owner(&self, id: &str) -> bool {
        self.ids.iter().any(|owner| owner == id)
    }
}
