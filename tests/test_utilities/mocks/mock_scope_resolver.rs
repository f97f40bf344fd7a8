use async_trait::async_trait;
use nexus_admin::prelude::*;
use std::collections::HashMap;

/// Mock ScopeResolver backed by in-memory maps
#[derive(Default)]
pub struct MockScopeResolver {
    pub applications: HashMap<String, String>,
    pub organizations: HashMap<String, String>,
}

impl MockScopeResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_application(mut self, public_id: &str, internal_id: &str) -> Self {
        self.applications
            .insert(public_id.to_string(), internal_id.to_string());
        self
    }

    pub fn with_organization(mut self, name: &str, internal_id: &str) -> Self {
        self.organizations
            .insert(name.to_string(), internal_id.to_string());
        self
    }
}

#[async_trait]
impl ScopeResolver for MockScopeResolver {
    async fn application_by_public_id(&self, public_id: &str) -> Result<ApplicationSummary> {
        match self.applications.get(public_id) {
            Some(id) => Ok(ApplicationSummary {
                id: InternalId::new(id.as_str()),
                public_id: public_id.to_string(),
                name: public_id.to_string(),
                organization_id: None,
            }),
            None => anyhow::bail!("No application found with public ID '{}'", public_id),
        }
    }

    async fn organization_by_name(&self, name: &str) -> Result<OrganizationSummary> {
        match self.organizations.get(name) {
            Some(id) => Ok(OrganizationSummary {
                id: InternalId::new(id.as_str()),
                name: name.to_string(),
            }),
            None => anyhow::bail!("No organization found with name '{}'", name),
        }
    }
}
