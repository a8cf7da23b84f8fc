use poem::{listener::TcpListener, Route, Server};
use poem_openapi::{ContactObject, OpenApiService};

use crate::rest_api::api::ApiV1;

pub const API_PREFIX: &str = "/api";

pub fn api_service(server_url: &str, prefix: &str) -> eyre::Result<OpenApiService<ApiV1, ()>> {
    let openapi_service = OpenApiService::new(ApiV1::default(), "SMILES Sanitizer", "1.0")
        .server(format!("{}{}", server_url.trim_end_matches('/'), prefix))
        .description("SMILES Sanitizer: structure standardization and change detection")
        .contact(ContactObject::new().name("SMILES Sanitizer"));
    Ok(openapi_service)
}

pub async fn run_api_service(bind: &str, server_url: &str) -> eyre::Result<()> {
    let api_service = api_service(server_url, API_PREFIX)?;
    let ui = api_service.swagger_ui();

    let spec = api_service.spec();
    Server::new(TcpListener::bind(bind))
        .run(
            Route::new()
                .at(
                    "/api/v1/openapi.json",
                    poem::endpoint::make_sync(move |_| spec.clone()),
                )
                .nest(API_PREFIX, api_service)
                .nest("/", ui),
        )
        .await?;

    Ok(())
}

pub fn output_spec(server_url: &str, output: &str) -> eyre::Result<()> {
    let api_service = api_service(server_url, API_PREFIX)?;

    let spec = api_service.spec();

    std::fs::write(output, spec)?;

    log::info!("OpenAPI spec written to {}", output);
    Ok(())
}
