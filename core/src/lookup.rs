//! Find-by-id component.
//!
//! Every search gets a sequence number that only goes up. Only the answer
//! for the most recent search may resolve the display; answers for earlier
//! searches that arrive late are dropped, even when they asked for the
//! same id.

use tracing::debug;

use crate::client::EmployeeClient;
use crate::error::LOAD_FALLBACK;
use crate::http::{Exchange, HttpRequest};
use crate::types::{Employee, EmployeeId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupState {
    Idle,
    Loading(EmployeeId),
    Found(Employee),
    Failed(String),
}

/// A find the host must execute and report back with `complete`.
#[derive(Debug, Clone)]
pub struct LookupTicket {
    pub seq: u64,
    pub id: EmployeeId,
    pub request: HttpRequest,
}

#[derive(Debug)]
pub struct EmployeeLookup {
    client: EmployeeClient,
    issued: u64,
    pending: Option<u64>,
    state: LookupState,
}

impl EmployeeLookup {
    pub fn new(client: EmployeeClient) -> Self {
        Self {
            client,
            issued: 0,
            pending: None,
            state: LookupState::Idle,
        }
    }

    pub fn state(&self) -> &LookupState {
        &self.state
    }

    pub fn found(&self) -> Option<&Employee> {
        match &self.state {
            LookupState::Found(employee) => Some(employee),
            _ => None,
        }
    }

    /// Start a search for `id`, superseding any search still pending.
    pub fn search(&mut self, id: EmployeeId) -> LookupTicket {
        self.issued += 1;
        let seq = self.issued;
        self.pending = Some(seq);
        self.state = LookupState::Loading(id);
        LookupTicket {
            seq,
            id,
            request: self.client.build_find_employee(id),
        }
    }

    /// Apply the answer for search `seq`. Returns `false` if a newer search
    /// has been started since, or this one was already applied.
    pub fn complete(&mut self, seq: u64, exchange: Exchange) -> bool {
        if self.pending != Some(seq) {
            debug!(seq, latest = self.issued, "ignoring stale lookup resolution");
            return false;
        }
        self.pending = None;
        self.state = match exchange.and_then(|resp| self.client.parse_find_employee(resp)) {
            Ok(employee) => LookupState::Found(employee),
            Err(err) => LookupState::Failed(err.user_message(LOAD_FALLBACK)),
        };
        true
    }
}
