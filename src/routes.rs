use crate::{
    api::{contract, employee},
    auth::middleware::auth_middleware,
};
use actix_web::{middleware::from_fn, web};

pub fn configure(cfg: &mut web::ServiceConfig, api_prefix: &str) {
    // uploaded pictures, referenced by the `image` field of a record
    cfg.service(
        web::resource("/images/{id}/{file_name}")
            .route(web::get().to(employee::get_employee_image)),
    );

    cfg.service(
        web::scope(api_prefix)
            .wrap(from_fn(auth_middleware))
            .service(
                web::scope("/employees")
                    // /employees
                    .service(
                        web::resource("")
                            .route(web::get().to(employee::list_employees))
                            .route(web::post().to(employee::create_employee)),
                    )
                    // /employees/{id}
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(employee::get_employee))
                            .route(web::put().to(employee::update_employee))
                            .route(web::delete().to(employee::delete_employee)),
                    )
                    // /employees/{id}/contracts/active
                    .service(
                        web::resource("/{id}/contracts/active")
                            .route(web::get().to(contract::get_active_contract)),
                    ),
            ),
    );
}
