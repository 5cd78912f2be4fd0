use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::firebase_config::errors::FirebaseConfigError;
use crate::domain::firebase_config::model::ServiceAccountConfig;
use crate::domain::firebase_config::use_cases::upload::{
    UploadFirebaseConfigParams, UploadFirebaseConfigUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::settings::keys::FIREBASE_CONFIG_KEY;
use crate::domain::settings::repository::SettingsRepository;

pub struct UploadFirebaseConfigUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UploadFirebaseConfigUseCase for UploadFirebaseConfigUseCaseImpl {
    async fn execute(
        &self,
        params: UploadFirebaseConfigParams,
    ) -> Result<ServiceAccountConfig, FirebaseConfigError> {
        params.actor.assert_admin().inspect_err(|_| {
            self.logger.warn(&format!(
                "Rejected Firebase config upload from non-admin user: {}",
                params.actor.user_id
            ))
        })?;

        self.logger.info(&format!(
            "Validating Firebase config upload ({} bytes) from {}",
            params.contents.len(),
            params.actor.user_id
        ));

        let config = ServiceAccountConfig::parse(&params.contents).inspect_err(|e| {
            self.logger
                .warn(&format!("Firebase config upload rejected: {e}"))
        })?;

        self.repository
            .set(FIREBASE_CONFIG_KEY, config.raw())
            .await?;

        self.logger.info(&format!(
            "Firebase config stored for project: {}",
            config.project_id()
        ));
        Ok(config)
    }
}
