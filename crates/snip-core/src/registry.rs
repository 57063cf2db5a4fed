use crate::application::Application;

/// Immutable lookup of configured applications.
///
/// Backed by the configuration list loaded at process start. Lookups are
/// linear scans; tenant counts are small and bounded.
#[derive(Debug, Clone, Default)]
pub struct TenantRegistry {
    applications: Vec<Application>,
}

impl TenantRegistry {
    pub fn new(applications: Vec<Application>) -> Self {
        Self { applications }
    }

    /// Looks up an application by its tenant identifier.
    pub fn find_by_id(&self, id: &str) -> Option<&Application> {
        self.applications.iter().find(|app| app.id == id)
    }

    /// Looks up an application by tenant identifier and API key.
    ///
    /// The id filter keeps a key from ever resolving to another tenant,
    /// even if two tenants were configured with the same key value.
    pub fn find_by_key(&self, id: &str, key: &str) -> Option<&Application> {
        self.applications
            .iter()
            .find(|app| app.id == id && app.key == key)
    }

    /// All configured applications, in configuration order.
    pub fn applications(&self) -> &[Application] {
        &self.applications
    }

    pub fn len(&self) -> usize {
        self.applications.len()
    }

    pub fn is_empty(&self) -> bool {
        self.applications.is_empty()
    }
}
