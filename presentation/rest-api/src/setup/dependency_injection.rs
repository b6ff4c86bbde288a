use std::sync::Arc;

use logger::TracingLogger;
use persistence::product::repository::ProductRepositoryPostgres;

use business::application::product::bulk_create::BulkCreateProductsUseCaseImpl;
use business::application::product::bulk_update::BulkUpdateProductsUseCaseImpl;
use business::application::product::create::CreateProductUseCaseImpl;
use business::application::product::delete::DeleteProductUseCaseImpl;
use business::application::product::get_all::GetAllProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::product::partial_update::PartialUpdateProductUseCaseImpl;
use business::domain::logger::Logger;
use business::domain::product::repository::ProductRepository;

use crate::api::health::routes::Api as HealthApi;
use crate::api::product::routes::ProductApi;
use crate::config::database_config::DatabaseSettings;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub product_api: ProductApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, settings: &DatabaseSettings) -> Self {
        let logger: Arc<dyn Logger> = Arc::new(TracingLogger);
        let repository: Arc<dyn ProductRepository> = Arc::new(
            ProductRepositoryPostgres::with_statement_timeout(
                pool,
                settings.pool.statement_timeout,
            ),
        );

        let get_all_use_case = Arc::new(GetAllProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let get_by_id_use_case = Arc::new(GetProductByIdUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let create_use_case = Arc::new(CreateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let partial_update_use_case = Arc::new(PartialUpdateProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let delete_use_case = Arc::new(DeleteProductUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let bulk_create_use_case = Arc::new(BulkCreateProductsUseCaseImpl {
            repository: repository.clone(),
            logger: logger.clone(),
        });
        let bulk_update_use_case = Arc::new(BulkUpdateProductsUseCaseImpl { repository, logger });

        let product_api = ProductApi::new(
            get_all_use_case,
            get_by_id_use_case,
            create_use_case,
            partial_update_use_case,
            delete_use_case,
            bulk_create_use_case,
            bulk_update_use_case,
        );

        Self {
            health_api: HealthApi::new(),
            product_api,
        }
    }
}
