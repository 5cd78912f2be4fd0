use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::firebase_config::errors::FirebaseConfigError;
use crate::domain::firebase_config::use_cases::delete::{
    DeleteFirebaseConfigParams, DeleteFirebaseConfigUseCase,
};
use crate::domain::logger::Logger;
use crate::domain::settings::keys::FIREBASE_CONFIG_KEY;
use crate::domain::settings::repository::SettingsRepository;

pub struct DeleteFirebaseConfigUseCaseImpl {
    pub repository: Arc<dyn SettingsRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteFirebaseConfigUseCase for DeleteFirebaseConfigUseCaseImpl {
    async fn execute(&self, params: DeleteFirebaseConfigParams) -> Result<(), FirebaseConfigError> {
        params.actor.assert_admin()?;

        self.logger.info(&format!(
            "Removing Firebase config at request of {}",
            params.actor.user_id
        ));

        self.repository
            .delete(FIREBASE_CONFIG_KEY)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => FirebaseConfigError::NotConfigured,
                other => FirebaseConfigError::Repository(other),
            })?;

        self.logger.info("Firebase config removed");
        Ok(())
    }
}
