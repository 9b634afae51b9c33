//! XML/JSON representations of employee resources.

use axum::{
    Json,
    http::{HeaderMap, header},
    response::{IntoResponse, Response},
};
use entity::employees::Model as Employee;
use platform_api::{ApiError, ApiResult};
use serde::Serialize;

/// Representation selected from the request's `Accept` header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Representation {
    Json,
    Xml,
}

/// Picks the first supported media range in the `Accept` header, in the
/// order the client listed them; anything else falls back to JSON.
pub fn from_accept(headers: &HeaderMap) -> Representation {
    let Some(accept) = headers
        .get(header::ACCEPT)
        .and_then(|value| value.to_str().ok())
    else {
        return Representation::Json;
    };
    for range in accept.split(',') {
        let media = range.split(';').next().unwrap_or("").trim();
        match media {
            "application/xml" | "text/xml" => return Representation::Xml,
            "application/json" => return Representation::Json,
            _ => {}
        }
    }
    Representation::Json
}

// Collection document: `employee` elements under an `employees` root.
#[derive(Serialize)]
#[serde(rename = "employees")]
struct EmployeeListDoc<'a> {
    #[serde(rename = "employee")]
    employees: &'a [Employee],
}

pub fn employee(headers: &HeaderMap, employee: &Employee) -> ApiResult<Response> {
    match from_accept(headers) {
        Representation::Json => Ok(Json(employee).into_response()),
        Representation::Xml => xml_response(employee),
    }
}

pub fn employee_list(headers: &HeaderMap, employees: &[Employee]) -> ApiResult<Response> {
    match from_accept(headers) {
        Representation::Json => Ok(Json(employees).into_response()),
        Representation::Xml => xml_response(&EmployeeListDoc { employees }),
    }
}

fn xml_response<T: Serialize>(value: &T) -> ApiResult<Response> {
    let body =
        quick_xml::se::to_string(value).map_err(|err| ApiError::Internal(err.into()))?;
    Ok((
        [(header::CONTENT_TYPE, "application/xml")],
        body,
    )
        .into_response())
}
