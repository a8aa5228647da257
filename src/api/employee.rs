use crate::{
    gateway::wire::ApiEmployee,
    store::{Store, StoredImage},
};
use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder, error::ErrorBadRequest, web};
use futures::StreamExt;
use serde_json::json;
use tracing::{debug, info};

/// Reads the `employee` JSON part and the optional `image` part.
async fn read_employee_form(
    mut payload: Multipart,
) -> actix_web::Result<(ApiEmployee, Option<StoredImage>)> {
    let mut employee = None;
    let mut image = None;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_string);
        let content_type = field.content_type().map(|m| m.essence_str().to_string());

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk?);
        }

        match name.as_str() {
            "employee" => {
                let parsed: ApiEmployee = serde_json::from_slice(&bytes).map_err(ErrorBadRequest)?;
                employee = Some(parsed);
            }
            "image" if !bytes.is_empty() => {
                image = Some(StoredImage {
                    file_name: file_name.unwrap_or_else(|| "image".to_string()),
                    content_type: content_type
                        .unwrap_or_else(|| "application/octet-stream".to_string()),
                    bytes,
                });
            }
            other => debug!(part = other, "Ignoring multipart part"),
        }
    }

    let employee = employee.ok_or_else(|| ErrorBadRequest("Missing employee part"))?;
    Ok((employee, image))
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "message": "Employee not found"
    }))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/api/employees",
    responses(
        (status = 200, description = "All employees", body = [ApiEmployee])
    ),
    tag = "Employee"
)]
pub async fn list_employees(store: web::Data<Store>) -> impl Responder {
    let employees = store.list();
    debug!(count = employees.len(), "Listing employees");
    HttpResponse::Ok().json(employees)
}

/// Get Employee by ID
#[utoipa::path(
    get,
    path = "/api/employees/{id}",
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee found", body = ApiEmployee),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        }))
    ),
    tag = "Employee"
)]
pub async fn get_employee(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    match store.get(&path.into_inner()) {
        Some(employee) => HttpResponse::Ok().json(employee),
        None => not_found(),
    }
}

/// Create Employee
///
/// Multipart body: `employee` (JSON) and an optional `image` file.
#[utoipa::path(
    post,
    path = "/api/employees",
    responses(
        (status = 200, description = "Employee created", body = ApiEmployee),
        (status = 400, description = "Malformed multipart body")
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<Store>,
    payload: Multipart,
) -> actix_web::Result<impl Responder> {
    let (employee, image) = read_employee_form(payload).await?;
    let created = store.insert(employee, image);

    info!(id = ?created.id, "Employee created");
    Ok(HttpResponse::Ok().json(created))
}

/// Update Employee
#[utoipa::path(
    put,
    path = "/api/employees/{id}",
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee updated", body = ApiEmployee),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    store: web::Data<Store>,
    path: web::Path<String>,
    payload: Multipart,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    let (employee, image) = read_employee_form(payload).await?;

    match store.replace(&employee_id, employee, image) {
        Some(updated) => {
            info!(employee_id = %employee_id, "Employee updated");
            Ok(HttpResponse::Ok().json(updated))
        }
        None => Ok(not_found()),
    }
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/api/employees/{id}",
    params(
        ("id" = String, Path, description = "Employee ID")
    ),
    responses(
        (status = 204, description = "Successfully deleted"),
        (status = 404, description = "Employee not found")
    ),
    tag = "Employee"
)]
pub async fn delete_employee(store: web::Data<Store>, path: web::Path<String>) -> impl Responder {
    let employee_id = path.into_inner();

    if store.remove(&employee_id) {
        info!(employee_id = %employee_id, "Employee deleted");
        HttpResponse::NoContent().finish()
    } else {
        not_found()
    }
}

/// Profile picture uploaded with an employee record
#[utoipa::path(
    get,
    path = "/images/{id}/{file_name}",
    params(
        ("id" = String, Path, description = "Employee ID"),
        ("file_name" = String, Path, description = "Uploaded file name")
    ),
    responses(
        (status = 200, description = "Image bytes"),
        (status = 404, description = "No image stored")
    ),
    tag = "Employee"
)]
pub async fn get_employee_image(
    store: web::Data<Store>,
    path: web::Path<(String, String)>,
) -> impl Responder {
    let (employee_id, file_name) = path.into_inner();

    match store.image(&employee_id) {
        Some(image) if image.file_name == file_name => HttpResponse::Ok()
            .content_type(image.content_type)
            .body(image.bytes),
        _ => HttpResponse::NotFound().json(json!({
            "message": "Image not found"
        })),
    }
}
