use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;
use tracing::info;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (container.health_api, container.product_api),
            "Products API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));

        let spec = api_service.spec_endpoint();
        let mut routes = Route::new().nest("/openapi.json", spec);
        if config.swagger_docs {
            routes = routes.nest("/docs", api_service.swagger_ui());
            info!("Swagger UI at http://{}/docs", addr);
        }
        if config.server.allow_cors {
            info!("CORS enabled");
        }
        let app = routes
            .nest("/", api_service)
            .with_if(config.server.allow_cors, config.cors)
            .with(Tracing);

        info!("Server running at http://{}", addr);
        info!("OpenAPI JSON at http://{}/openapi.json", addr);
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
