use std::sync::Arc;

use anyhow::Result;

use crate::ai::ArticleGenerator;
use crate::auth::AdminGate;
use crate::config::AppConfig;
use crate::contact::ContactRelay;
use crate::store::{MongoPostStore, PostStore};

#[derive(Clone)]
pub struct AppState {
    /// Article store, absent when no database is configured
    store: Option<Arc<dyn PostStore>>,
    /// Passphrase gate and live admin tokens
    gate: Arc<AdminGate>,
    /// Draft generation client, absent without an API key
    generator: Option<Arc<ArticleGenerator>>,
    /// Contact webhook relay, absent without a webhook URL
    contact: Option<Arc<ContactRelay>>,
}

impl AppState {
    pub async fn new(config: &AppConfig) -> Result<Self> {
        let store: Option<Arc<dyn PostStore>> = match &config.store {
            Some(store_config) => {
                let store =
                    MongoPostStore::connect(&store_config.uri, &store_config.database).await?;
                Some(Arc::new(store))
            }
            None => None,
        };

        let generator = match &config.generation {
            Some(generation) => Some(Arc::new(ArticleGenerator::new(generation)?)),
            None => None,
        };

        let contact = match &config.contact_webhook_url {
            Some(url) => Some(Arc::new(ContactRelay::new(url.clone())?)),
            None => None,
        };

        Ok(Self {
            store,
            gate: Arc::new(AdminGate::new(config.admin_passphrase.clone())),
            generator,
            contact,
        })
    }

    pub fn store(&self) -> Option<&Arc<dyn PostStore>> {
        self.store.as_ref()
    }

    pub fn gate(&self) -> &AdminGate {
        &self.gate
    }

    pub fn generator(&self) -> Option<&Arc<ArticleGenerator>> {
        self.generator.as_ref()
    }

    pub fn contact(&self) -> Option<&Arc<ContactRelay>> {
        self.contact.as_ref()
    }

    /// Assembles a state for handler tests without touching the network.
    #[cfg(test)]
    pub(crate) fn for_tests(
        store: Option<Arc<dyn PostStore>>,
        passphrase: &str,
    ) -> Self {
        Self {
            store,
            gate: Arc::new(AdminGate::new(passphrase.to_string())),
            generator: None,
            contact: None,
        }
    }
}
