#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use money_manager_frontend::api::{ApiRequest, ApiResponse, Method, Transport};
use money_manager_frontend::session::{KeyValueStore, MemoryStore, Session, TOKEN_KEY};
use money_manager_frontend::{ApiClient, ApiError};

/// Records every request and answers from a table of canned responses.
/// Later routes for the same method and path take precedence.
#[derive(Clone, Default)]
pub struct MockTransport {
    requests: Rc<RefCell<Vec<ApiRequest>>>,
    routes: Rc<RefCell<Vec<(Method, String, ApiResponse)>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, method: Method, path: &str, status: u16, body: &str) {
        self.routes.borrow_mut().push((
            method,
            path.to_string(),
            ApiResponse {
                status,
                body: body.to_string(),
            },
        ));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn count(&self, method: Method, path: &str) -> usize {
        self.requests
            .borrow()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn last(&self, method: Method, path: &str) -> Option<ApiRequest> {
        self.requests
            .borrow()
            .iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
            .cloned()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        let response = self
            .routes
            .borrow()
            .iter()
            .rev()
            .find(|(method, path, _)| *method == request.method && *path == request.path)
            .map(|(_, _, response)| response.clone())
            .unwrap_or(ApiResponse {
                status: 404,
                body: r#"{"message":"no route"}"#.to_string(),
            });
        self.requests.borrow_mut().push(request);
        Ok(response)
    }
}

pub type TestClient = ApiClient<MockTransport, MemoryStore>;

pub fn client() -> (TestClient, MockTransport, MemoryStore) {
    let transport = MockTransport::new();
    let store = MemoryStore::new();
    let client = ApiClient::new(transport.clone(), Session::new(store.clone()));
    (client, transport, store)
}

pub fn signed_in_client(token: &str) -> (TestClient, MockTransport, MemoryStore) {
    let (client, transport, store) = client();
    store.set(TOKEN_KEY, token);
    (client, transport, store)
}

/// Canned answers for the four dashboard reads.
pub fn serve_dashboard(transport: &MockTransport) {
    transport.respond(
        Method::Get,
        "/transactions/summary",
        200,
        r#"{"income":1000,"expense":250,"balance":750}"#,
    );
    transport.respond(
        Method::Get,
        "/transactions/category-summary",
        200,
        r#"[{"_id":"food","totalAmount":250}]"#,
    );
    transport.respond(Method::Get, "/transactions", 200, "[]");
    transport.respond(
        Method::Get,
        "/accounts",
        200,
        r#"[{"_id":"a1","name":"HDFC","type":"bank","balance":750}]"#,
    );
}
