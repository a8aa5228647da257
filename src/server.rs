use std::net::TcpListener;

use actix_web::dev::Server;
use actix_web::middleware::{Logger, NormalizePath};
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{config::Config, docs::ApiDoc, routes, store::Store};

/// Builds the development backend on an already bound listener. The caller
/// awaits or spawns the returned server.
pub fn run(listener: TcpListener, store: Data<Store>, config: Config) -> std::io::Result<Server> {
    let config = Data::new(config);

    let server = HttpServer::new(move || {
        let api_prefix = config.api_prefix.clone();

        App::new()
            .wrap(Logger::default())
            .wrap(NormalizePath::trim())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-doc/openapi.json", ApiDoc::openapi()),
            )
            .app_data(store.clone())
            .app_data(config.clone())
            .configure(move |cfg| routes::configure(cfg, &api_prefix))
    })
    .listen(listener)?
    .run();

    Ok(server)
}
