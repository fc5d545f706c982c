#![allow(dead_code)]

use {
    apruve::{
        ApiRequest, ApiResponse, ApruveError, Config, Environment, HttpTransport, Payment,
        ReqwestTransport,
    },
    axum::{
        Router,
        extract::State,
        http::{HeaderMap, Method, StatusCode, Uri},
    },
    std::{
        future::Future,
        pin::Pin,
        sync::{Arc, Mutex, Once},
    },
};

pub const API_KEY: &str = "f5fbe71d68772d1f562ed6f598b995b3";
pub const PAYMENT_REQUEST_ID: &str = "9999";
pub const AMOUNT_CENTS: i64 = 12340;

static TRACING: Once = Once::new();

/// Route library logs to the test harness output. `RUST_LOG` controls level.
pub fn init_tracing() {
    TRACING.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}

pub fn make_payment() -> Payment {
    Payment::new(PAYMENT_REQUEST_ID, AMOUNT_CENTS)
}

// ── In-process stub transport ──────────────────────────────────────────────

struct Stub {
    request: ApiRequest,
    status: StatusCode,
    body: String,
    hits: usize,
}

/// Canned responses keyed by method, path and body. Every request is
/// recorded, matched or not.
#[derive(Default)]
pub struct StubTransport {
    stubs: Mutex<Vec<Stub>>,
    calls: Mutex<Vec<ApiRequest>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stub(&self, request: ApiRequest, status: u16, body: &str) -> &Self {
        self.stubs.lock().unwrap().push(Stub {
            request,
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            hits: 0,
        });
        self
    }

    pub fn calls(&self) -> Vec<ApiRequest> {
        self.calls.lock().unwrap().clone()
    }

    /// Panics unless every stub was hit exactly once.
    pub fn verify_stubbed_calls(&self) {
        for stub in self.stubs.lock().unwrap().iter() {
            assert_eq!(
                stub.hits, 1,
                "expected one call to {} {}, got {}",
                stub.request.method, stub.request.path, stub.hits
            );
        }
    }
}

impl HttpTransport for StubTransport {
    fn send(
        &self,
        request: ApiRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ApiResponse, ApruveError>> + Send + '_>> {
        self.calls.lock().unwrap().push(request.clone());
        let mut stubs = self.stubs.lock().unwrap();
        let result = match stubs.iter_mut().find(|s| s.request == request) {
            Some(stub) => {
                stub.hits += 1;
                Ok(ApiResponse::new(stub.status, stub.body.clone()))
            }
            None => Err(ApruveError::Config(format!(
                "unstubbed request: {} {} {:?}",
                request.method, request.path, request.body
            ))),
        };
        Box::pin(async move { result })
    }
}

// ── Local HTTP server for the reqwest transport ────────────────────────────

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: Method,
    pub uri: Uri,
    pub headers: HeaderMap,
    pub body: String,
}

struct ServerState {
    status: StatusCode,
    body: String,
    recorded: Mutex<Vec<RecordedRequest>>,
}

pub struct StubServer {
    pub base_url: String,
    state: Arc<ServerState>,
}

impl StubServer {
    /// Serve `status`/`body` for every request on an ephemeral port.
    pub async fn start(status: u16, body: &str) -> Self {
        let state = Arc::new(ServerState {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.to_string(),
            recorded: Mutex::new(Vec::new()),
        });
        let app = Router::new().fallback(record).with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{addr}"),
            state,
        }
    }

    pub fn transport(&self) -> ReqwestTransport {
        let config = Config::new(API_KEY, Environment::Local)
            .unwrap()
            .with_base_url(&self.base_url)
            .unwrap();
        ReqwestTransport::new(config).unwrap()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.recorded.lock().unwrap().clone()
    }
}

async fn record(
    State(state): State<Arc<ServerState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, String) {
    state.recorded.lock().unwrap().push(RecordedRequest {
        method,
        uri,
        headers,
        body,
    });
    (state.status, state.body.clone())
}
