//! Stateless HTTP request builder and response parser for the employee API.
//!
//! # Design
//! `EmployeeClient` holds only a `base_url` and carries no mutable state
//! between calls: no caching, no retries. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. The caller executes the round-trip.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::{ApiError, NOT_FOUND_FALLBACK, VALIDATION_FALLBACK};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{Employee, EmployeeFields, EmployeeId, MessageBody};

const COLLECTION: &str = "/v1/employees/";

/// Synchronous, stateless client for the employee collection resource.
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    base_url: String,
}

impl EmployeeClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}{COLLECTION}", self.base_url)
    }

    fn member_url(&self, id: EmployeeId) -> String {
        format!("{}{COLLECTION}{id}", self.base_url)
    }

    pub fn build_list_employees(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.collection_url(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_find_employee(&self, id: EmployeeId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: self.member_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_employee(&self, input: &EmployeeFields) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Post, self.collection_url(), input)
    }

    pub fn build_update_employee(
        &self,
        id: EmployeeId,
        input: &EmployeeFields,
    ) -> Result<HttpRequest, ApiError> {
        json_request(HttpMethod::Put, self.member_url(id), input)
    }

    pub fn build_delete_employee(&self, id: EmployeeId) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: self.member_url(id),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn parse_list_employees(&self, response: HttpResponse) -> Result<Vec<Employee>, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    pub fn parse_find_employee(&self, response: HttpResponse) -> Result<Employee, ApiError> {
        check_status(&response)?;
        decode(&response.body)
    }

    /// Returns the server's confirmation text verbatim.
    pub fn parse_create_employee(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_message(response)
    }

    pub fn parse_update_employee(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_message(response)
    }

    pub fn parse_delete_employee(&self, response: HttpResponse) -> Result<String, ApiError> {
        parse_message(response)
    }
}

fn json_request(
    method: HttpMethod,
    path: String,
    input: &EmployeeFields,
) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

fn parse_message(response: HttpResponse) -> Result<String, ApiError> {
    check_status(&response)?;
    let body: MessageBody = decode(&response.body)?;
    Ok(body.message)
}

/// Error body of a rejected request. `detail` is only usable when it is
/// text; validation frameworks also emit structured arrays there.
#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

fn detail_text(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    match parsed.detail? {
        serde_json::Value::String(text) if !text.trim().is_empty() => Some(text),
        _ => None,
    }
}

/// Map non-2xx status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    let detail = detail_text(&response.body);
    match (response.status, detail) {
        (404, detail) => Err(ApiError::NotFound(
            detail.unwrap_or_else(|| NOT_FOUND_FALLBACK.to_string()),
        )),
        (_, Some(detail)) => Err(ApiError::Validation(detail)),
        (400..=499, None) => Err(ApiError::Validation(VALIDATION_FALLBACK.to_string())),
        (status, None) => Err(ApiError::Transport(format!(
            "HTTP {status}: {}",
            response.body
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> EmployeeClient {
        EmployeeClient::new("http://localhost:8000")
    }

    fn response(status: u16, body: &str) -> HttpResponse {
        HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        }
    }

    fn ada() -> EmployeeFields {
        EmployeeFields {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@x.com".to_string(),
            title: "Engineer".to_string(),
            role: "IC".to_string(),
            employee_number: 42,
            organisation: "Acme".to_string(),
        }
    }

    #[test]
    fn build_list_employees_produces_correct_request() {
        let req = client().build_list_employees();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:8000/v1/employees/");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_create_employee_sends_fields_without_id() {
        let req = client().build_create_employee(&ada()).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:8000/v1/employees/");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "email": "ada@x.com",
                "title": "Engineer",
                "role": "IC",
                "employee_number": 42,
                "organisation": "Acme"
            })
        );
    }

    #[test]
    fn build_member_requests_address_the_id() {
        let c = client();
        assert_eq!(c.build_find_employee(7).path, "http://localhost:8000/v1/employees/7");
        let req = c.build_update_employee(7, &ada()).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:8000/v1/employees/7");
        let req = c.build_delete_employee(7);
        assert_eq!(req.method, HttpMethod::Delete);
        assert!(req.body.is_none());
    }

    #[test]
    fn parse_list_employees_success() {
        let body = r#"[{"id":1,"first_name":"Ada","last_name":"Lovelace","email":"ada@x.com",
            "title":"Engineer","role":"IC","employee_number":42,"organisation":"Acme"}]"#;
        let employees = client().parse_list_employees(response(200, body)).unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].id, 1);
        assert_eq!(employees[0].fields(), ada());
    }

    #[test]
    fn parse_list_employees_empty() {
        let employees = client().parse_list_employees(response(200, "[]")).unwrap();
        assert!(employees.is_empty());
    }

    #[test]
    fn parse_list_employees_server_error_is_transport() {
        let err = client()
            .parse_list_employees(response(500, "Internal Server Error"))
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[test]
    fn parse_list_employees_bad_json() {
        let err = client().parse_list_employees(response(200, "not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_create_employee_returns_message_verbatim() {
        let msg = client()
            .parse_create_employee(response(200, r#"{"Message":"Employee created"}"#))
            .unwrap();
        assert_eq!(msg, "Employee created");
    }

    #[test]
    fn parse_create_employee_accepts_201() {
        let msg = client()
            .parse_create_employee(response(201, r#"{"Message":"ok"}"#))
            .unwrap();
        assert_eq!(msg, "ok");
    }

    #[test]
    fn parse_create_employee_surfaces_detail() {
        let err = client()
            .parse_create_employee(response(400, r#"{"detail":"Email already registered"}"#))
            .unwrap_err();
        assert_eq!(err, ApiError::Validation("Email already registered".to_string()));
    }

    #[test]
    fn parse_create_employee_without_detail_uses_fallback() {
        let err = client()
            .parse_create_employee(response(400, r#"{"error":"nope"}"#))
            .unwrap_err();
        assert_eq!(err, ApiError::Validation(VALIDATION_FALLBACK.to_string()));
    }

    #[test]
    fn parse_create_employee_structured_detail_uses_fallback() {
        let body = r#"{"detail":[{"loc":["body","email"],"msg":"bad","type":"value_error"}]}"#;
        let err = client().parse_create_employee(response(422, body)).unwrap_err();
        assert_eq!(err, ApiError::Validation(VALIDATION_FALLBACK.to_string()));
    }

    #[test]
    fn parse_create_employee_server_error_with_detail() {
        let err = client()
            .parse_create_employee(response(500, r#"{"detail":"database unavailable"}"#))
            .unwrap_err();
        assert_eq!(err, ApiError::Validation("database unavailable".to_string()));
    }

    #[test]
    fn parse_create_employee_missing_message_field() {
        let err = client()
            .parse_create_employee(response(200, r#"{"message":"lowercase"}"#))
            .unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }

    #[test]
    fn parse_find_employee_not_found() {
        let err = client()
            .parse_find_employee(response(404, r#"{"detail":"Employee not found"}"#))
            .unwrap_err();
        assert_eq!(err, ApiError::NotFound("Employee not found".to_string()));
    }

    #[test]
    fn parse_delete_employee_not_found_without_body() {
        let err = client().parse_delete_employee(response(404, "")).unwrap_err();
        assert_eq!(err, ApiError::NotFound(NOT_FOUND_FALLBACK.to_string()));
    }

    #[test]
    fn parse_update_employee_success() {
        let msg = client()
            .parse_update_employee(response(200, r#"{"Message":"Employee updated"}"#))
            .unwrap();
        assert_eq!(msg, "Employee updated");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = EmployeeClient::new("http://localhost:8000/");
        let req = client.build_list_employees();
        assert_eq!(req.path, "http://localhost:8000/v1/employees/");
    }
}
