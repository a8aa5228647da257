use crate::store::Store;
use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

/// Active contract of an employee
#[utoipa::path(
    get,
    path = "/api/employees/{id}/contracts/active",
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Active contract", body = crate::model::contract::Contract),
        (status = 404, description = "No active contract")
    ),
    tag = "Contract"
)]
pub async fn get_active_contract(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    match store.active_contract(&path.into_inner()) {
        Some(contract) => HttpResponse::Ok().json(contract),
        None => HttpResponse::NotFound().json(json!({
            "message": "No active contract"
        })),
    }
}
