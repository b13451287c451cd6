//! Data-access client and list synchronization for the employee admin.
//!
//! # Overview
//! Builds `HttpRequest` values and parses `HttpResponse` values without
//! touching the network (host-does-IO pattern). On top of the client sit
//! the UI components: a list that re-fetches when its refresh token
//! changes, a mutation form that reports success through a hook, a lookup
//! for find-by-id, and a page that wires the form's hook to the list's
//! token.
//!
//! # Design
//! - `EmployeeClient` is stateless; it holds only `base_url`.
//! - Each operation is split into `build_*` and `parse_*`, so the I/O
//!   boundary is explicit and every component is testable without a server.
//! - Component state is a tagged enum per instance, never a set of flags.
//! - Mutations signal the list through a plain token comparison, not a
//!   shared cache or an event bus.

pub mod client;
pub mod error;
pub mod form;
pub mod http;
pub mod list;
pub mod lookup;
pub mod page;
pub mod refresh;
pub mod types;

pub use client::EmployeeClient;
pub use error::ApiError;
pub use form::{Completed, FormState, Mutation, MutationForm};
pub use http::{Exchange, HttpMethod, HttpRequest, HttpResponse, Transport};
pub use list::{EmployeeList, FetchTicket, ListState};
pub use lookup::{EmployeeLookup, LookupState, LookupTicket};
pub use page::EmployeePage;
pub use refresh::{RefreshCounter, RefreshToken};
pub use types::{Employee, EmployeeFields, EmployeeForm, EmployeeId, FieldError};
