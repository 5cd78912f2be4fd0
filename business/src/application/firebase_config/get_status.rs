use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::firebase_config::errors::FirebaseConfigError;
use crate::domain::firebase_config::model::{FirebaseConfigSummary, ServiceAccountConfig};
use crate::domain::firebase_config::use_cases::get_status::{
    GetFirebaseConfigStatusParams, GetFirebaseConfigStatusUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::settings::keys::FIREBASE_CONFIG_KEY;
use crate::domain::settings::repository::SettingsRepository;

pub struct GetFirebaseConfigStatusUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFirebaseConfigStatusUseCase for GetFirebaseConfigStatusUseCaseImpl {
    async fn execute(
        &self,
        params: GetFirebaseConfigStatusParams,
    ) -> Result<FirebaseConfigSummary, FirebaseConfigError> {
        params.actor.assert_admin()?;

        let raw = self
            .repository
            .get(FIREBASE_CONFIG_KEY)
            .await?
            .ok_or(FirebaseConfigError::NotConfigured)?;

        // Only validated documents are ever written, so a failure here
        // means the row was edited outside this service.
        let config = ServiceAccountConfig::parse(raw.as_bytes()).map_err(|e| {
            self.logger
                .error(&format!("Stored Firebase config no longer validates: {e}"));
            FirebaseConfigError::StoredConfigInvalid
        })?;

        self.logger.debug(&format!(
            "Firebase config status requested by {}",
            params.actor.user_id
        ));
        Ok(config.summary())
    }
}
