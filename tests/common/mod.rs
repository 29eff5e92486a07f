use std::sync::Mutex;

use fintrack_core::{config::Config, context::AppContext};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use tempfile::TempDir;
use wiremock::MockServer;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Starts a mock collection server and a context wired to it, with the
/// session kept in a unique scratch directory.
pub async fn setup_test_env() -> (MockServer, AppContext) {
    let server = MockServer::start().await;
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let config = Config {
        api_url: server.uri(),
        ..Config::default()
    };
    let ctx = AppContext::with_config_in(config, base).expect("create app context");
    (server, ctx)
}

#[allow(dead_code)]
pub fn user_json(id: &str, email: &str, password: &str, name: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "password": password,
        "name": name,
        "avatar": "",
        "createdAt": "2024-01-01T00:00:00Z",
    })
}

#[allow(dead_code)]
pub fn transaction_json(
    id: &str,
    user_id: &str,
    category_id: &str,
    amount: f64,
    kind: &str,
    date: &str,
) -> Value {
    json!({
        "id": id,
        "userId": user_id,
        "categoryId": category_id,
        "amount": amount,
        "type": kind,
        "description": "",
        "date": date,
        "createdAt": format!("{date}T12:00:00Z"),
    })
}

#[allow(dead_code)]
pub fn budget_json(id: &str, user_id: &str, category_id: &str, amount: f64, month: &str) -> Value {
    json!({
        "id": id,
        "userId": user_id,
        "categoryId": category_id,
        "amount": amount,
        "month": month,
        "createdAt": "2024-01-01T00:00:00Z",
    })
}
