use std::sync::Arc;

use logger::TracingLogger;
use persistence::settings::repository::SettingsRepositoryPostgres;

use business::application::firebase_config::delete::DeleteFirebaseConfigUseCaseImpl;
use business::application::firebase_config::get_status::GetFirebaseConfigStatusUseCaseImpl;
use business::application::firebase_config::upload::UploadFirebaseConfigUseCaseImpl;

use crate::api::firebase_config::routes::FirebaseConfigApi;
use crate::api::health::routes::Api as HealthApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub firebase_config_api: FirebaseConfigApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, max_upload_bytes: usize) -> Self {
        let logger = Arc::new(TracingLogger);
        let health_api = HealthApi::new(pool.clone());

        // Infrastructure adapters
        let settings_repository = Arc::new(SettingsRepositoryPostgres::new(pool));

        // Firebase config use cases
        let upload_use_case = Arc::new(UploadFirebaseConfigUseCaseImpl {
            repository: settings_repository.clone(),
            logger: logger.clone(),
        });
        let get_status_use_case = Arc::new(GetFirebaseConfigStatusUseCaseImpl {
            repository: settings_repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteFirebaseConfigUseCaseImpl {
            repository: settings_repository,
            logger,
        });

        let firebase_config_api = FirebaseConfigApi::new(
            upload_use_case,
            get_status_use_case,
            delete_use_case,
            max_upload_bytes,
        );

        Self {
            health_api,
            firebase_config_api,
        }
    }
}
