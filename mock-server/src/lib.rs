use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub role: String,
    pub employee_number: i64,
    pub organisation: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct EmployeeIn {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub title: String,
    pub role: String,
    pub employee_number: i64,
    pub organisation: String,
}

impl EmployeeIn {
    fn into_employee(self, id: i64) -> Employee {
        Employee {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            title: self.title,
            role: self.role,
            employee_number: self.employee_number,
            organisation: self.organisation,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "Message")]
    pub message: String,
}

impl Message {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// A 4xx answer with a `detail` body.
#[derive(Debug)]
pub struct Rejection {
    status: StatusCode,
    detail: serde_json::Value,
}

impl Rejection {
    fn bad_request(detail: &str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: json!(detail),
        }
    }

    fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            detail: json!("Employee not found"),
        }
    }

    /// Field-level failure in the structured shape validation frameworks use.
    fn invalid_field(field: &str, msg: &str) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            detail: json!([{ "loc": ["body", field], "msg": msg, "type": "value_error" }]),
        }
    }
}

impl IntoResponse for Rejection {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "detail": self.detail }))).into_response()
    }
}

#[derive(Debug, Default)]
pub struct Store {
    next_id: i64,
    employees: BTreeMap<i64, Employee>,
}

impl Store {
    /// Enforce the unique email / employee number constraints against every
    /// record other than `except`.
    fn check_unique(&self, input: &EmployeeIn, except: Option<i64>) -> Result<(), Rejection> {
        let others = self
            .employees
            .values()
            .filter(|e| Some(e.id) != except);
        for other in others {
            if other.email == input.email {
                return Err(Rejection::bad_request("Email already registered"));
            }
            if other.employee_number == input.employee_number {
                return Err(Rejection::bad_request("Employee number already exists"));
            }
        }
        Ok(())
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::default()));
    Router::new()
        .route("/v1/employees/", get(list_employees).post(create_employee))
        .route(
            "/v1/employees/{id}",
            get(find_employee).put(update_employee).delete(delete_employee),
        )
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn check_email(input: &EmployeeIn) -> Result<(), Rejection> {
    let valid = input
        .email
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.'));
    if !valid {
        return Err(Rejection::invalid_field(
            "email",
            "value is not a valid email address",
        ));
    }
    Ok(())
}

async fn list_employees(State(db): State<Db>) -> Json<Vec<Employee>> {
    let store = db.read().await;
    Json(store.employees.values().cloned().collect())
}

async fn create_employee(
    State(db): State<Db>,
    Json(input): Json<EmployeeIn>,
) -> Result<Json<Message>, Rejection> {
    check_email(&input)?;
    let mut store = db.write().await;
    store.check_unique(&input, None)?;
    store.next_id += 1;
    let id = store.next_id;
    store.employees.insert(id, input.into_employee(id));
    info!(id, "employee created");
    Ok(Message::new("Employee created"))
}

async fn find_employee(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, Rejection> {
    let store = db.read().await;
    store.employees.get(&id).cloned().map(Json).ok_or_else(Rejection::not_found)
}

async fn update_employee(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<EmployeeIn>,
) -> Result<Json<Message>, Rejection> {
    check_email(&input)?;
    let mut store = db.write().await;
    if !store.employees.contains_key(&id) {
        return Err(Rejection::not_found());
    }
    store.check_unique(&input, Some(id))?;
    store.employees.insert(id, input.into_employee(id));
    info!(id, "employee updated");
    Ok(Message::new("Employee updated"))
}

async fn delete_employee(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Message>, Rejection> {
    let mut store = db.write().await;
    store.employees.remove(&id).ok_or_else(Rejection::not_found)?;
    info!(id, "employee deleted");
    Ok(Message::new("Employee deleted"))
}
