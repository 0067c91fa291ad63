use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::net::TcpListener;
use std::process::{Child, Command, Stdio};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;
use tokio::time::sleep;

#[derive(Debug, Deserialize)]
struct StatusResponse {
    date: String,
    completed_today: bool,
    current_streak: u32,
    longest_streak: u32,
}

struct TestServer {
    base_url: String,
    child: Child,
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}

static TEST_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));
static SERVER: Lazy<Mutex<Option<Arc<TestServer>>>> = Lazy::new(|| Mutex::new(None));

#[cfg(unix)]
mod cleanup {
    use std::sync::atomic::{AtomicI32, Ordering};
    use std::sync::Once;

    static REGISTER: Once = Once::new();
    static PID: AtomicI32 = AtomicI32::new(0);

    pub fn register(pid: u32) {
        REGISTER.call_once(|| {
            PID.store(pid as i32, Ordering::SeqCst);
            unsafe {
                libc::atexit(on_exit);
            }
        });
    }

    extern "C" fn on_exit() {
        let pid = PID.load(Ordering::SeqCst);
        if pid > 0 {
            unsafe {
                libc::kill(pid, libc::SIGTERM);
            }
        }
    }
}

fn pick_free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind random port");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

fn unique_data_path() -> String {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let mut path = std::env::temp_dir();
    path.push(format!(
        "consistency_tracker_http_{}_{}.json",
        std::process::id(),
        nanos
    ));
    path.to_string_lossy().to_string()
}

async fn wait_until_ready(base_url: &str) {
    let client = Client::new();
    let deadline = Instant::now() + Duration::from_secs(3);
    loop {
        if let Ok(resp) = client.get(format!("{base_url}/api/status")).send().await {
            if resp.status().is_success() {
                return;
            }
        }
        if Instant::now() > deadline {
            panic!("server did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    }
}

async fn spawn_server() -> TestServer {
    let port = pick_free_port();
    let data_path = unique_data_path();
    let child = Command::new(env!("CARGO_BIN_EXE_consistency_tracker"))
        .env("PORT", port.to_string())
        .env("APP_DATA_PATH", data_path)
        .env("RUST_LOG", "info")
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .spawn()
        .expect("failed to spawn server");

    #[cfg(unix)]
    cleanup::register(child.id());

    let base_url = format!("http://127.0.0.1:{port}");
    wait_until_ready(&base_url).await;

    TestServer { base_url, child }
}

async fn shared_server() -> Arc<TestServer> {
    let mut guard = SERVER.lock().await;
    if let Some(server) = guard.as_ref() {
        return Arc::clone(server);
    }
    let server = Arc::new(spawn_server().await);
    *guard = Some(Arc::clone(&server));
    server
}

async fn get_status(client: &Client, base_url: &str) -> StatusResponse {
    client
        .get(format!("{base_url}/api/status"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap()
}

#[tokio::test]
async fn http_check_in_updates_status() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/checkin", server.base_url))
        .json(&serde_json::json!({
            "hours": 2.0,
            "topic": "ownership and borrowing",
            "proof": "https://example.com/notes",
            "isLowEnergy": false
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let status = get_status(&client, &server.base_url).await;
    assert!(status.completed_today);
    assert!(status.current_streak >= 1);
    assert!(status.longest_streak >= status.current_streak);
    assert!(!status.date.is_empty());
}

#[tokio::test]
async fn http_second_check_in_replaces_first() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    for hours in [1.0, 3.5] {
        let response = client
            .post(format!("{}/api/checkin", server.base_url))
            .json(&serde_json::json!({
                "hours": hours,
                "topic": "iterators",
                "proof": "",
                "isLowEnergy": false
            }))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_success());
    }

    let status = get_status(&client, &server.base_url).await;
    let history: serde_json::Value = client
        .get(format!("{}/api/history", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let todays: Vec<&serde_json::Value> = history["entries"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|entry| entry["date"] == serde_json::json!(status.date))
        .collect();
    assert_eq!(todays.len(), 1);
    assert_eq!(todays[0]["hours"], serde_json::json!(3.5));
}

#[tokio::test]
async fn http_low_energy_hours_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/checkin", server.base_url))
        .json(&serde_json::json!({
            "hours": 3.0,
            "topic": "async",
            "proof": "",
            "isLowEnergy": true
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status().as_u16(), 422);
    let body = response.text().await.unwrap();
    assert_eq!(body, "Low Energy Day requires 1-2 hours of study");
}

#[tokio::test]
async fn http_weekly_review_recorded() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/api/review", server.base_url))
        .json(&serde_json::json!({
            "improved": "daily rhythm",
            "challenges": "late evenings",
            "nextWeek": "error handling"
        }))
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let entry: serde_json::Value = response.json().await.unwrap();
    assert_eq!(entry["improved"], serde_json::json!("daily rhythm"));
    assert!(entry["weekEnding"].is_string());

    let reviews: serde_json::Value = client
        .get(format!("{}/api/reviews", server.base_url))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert!(!reviews["reviews"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn http_import_empty_object_rejected() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let before = get_status(&client, &server.base_url).await;

    let response = client
        .post(format!("{}/api/import", server.base_url))
        .body("{}")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status().as_u16(), 400);

    let after = get_status(&client, &server.base_url).await;
    assert_eq!(after.completed_today, before.completed_today);
    assert_eq!(after.current_streak, before.current_streak);
    assert_eq!(after.longest_streak, before.longest_streak);
}

#[tokio::test]
async fn http_export_import_round_trip() {
    let _guard = TEST_LOCK.lock().await;
    let server = shared_server().await;
    let client = Client::new();

    let exported = client
        .get(format!("{}/api/export", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let response = client
        .post(format!("{}/api/import", server.base_url))
        .body(exported.clone())
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());

    let re_exported = client
        .get(format!("{}/api/export", server.base_url))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    let first: serde_json::Value = serde_json::from_str(&exported).unwrap();
    let second: serde_json::Value = serde_json::from_str(&re_exported).unwrap();
    assert_eq!(first, second);
}
