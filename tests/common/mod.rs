#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::thread;
use tempfile::TempDir;

pub const TEST_API_KEY: &str = "test-pexels-key";

pub struct TestEnv {
    _tmp: TempDir,
    pub work: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let work = tmp.path().join("site");
        fs::create_dir_all(&work).expect("create work dir");
        Self { _tmp: tmp, work }
    }

    /// Runs in the temp site dir with no credential in the environment.
    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("http-rabbits");
        cmd.current_dir(&self.work)
            .env_remove("PEXELS_API_KEY")
            .env_remove("HTTP_RABBITS_API_BASE")
            .env("RUST_LOG", "info");
        cmd
    }

    pub fn live_cmd(&self, api_base: &str) -> Command {
        let mut cmd = self.cmd();
        cmd.env("PEXELS_API_KEY", TEST_API_KEY)
            .env("HTTP_RABBITS_API_BASE", api_base);
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn images_dir(&self) -> PathBuf {
        self.work.join("public/images")
    }

    pub fn mapping_path(&self) -> PathBuf {
        self.work.join("src/data/rabbit-images.json")
    }

    pub fn read_mapping(&self) -> Value {
        let raw = fs::read_to_string(self.mapping_path()).expect("read mapping");
        serde_json::from_str(&raw).expect("mapping json")
    }
}

/// Minimal stand-in for the Pexels API on a local port. Search results point
/// back at `/img/...` on the same server; queries listed in `broken` get a
/// result whose download fails with HTTP 500.
pub struct FakePexels {
    pub base_url: String,
    pub api_base: String,
    queries: Arc<Mutex<Vec<String>>>,
    auth_failures: Arc<Mutex<usize>>,
}

impl FakePexels {
    pub fn start(broken: &[&str]) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind fake pexels");
        let addr = listener.local_addr().expect("local addr");
        let base_url = format!("http://{}", addr);
        let queries = Arc::new(Mutex::new(Vec::new()));
        let auth_failures = Arc::new(Mutex::new(0));
        let broken: Vec<String> = broken.iter().map(|s| s.to_string()).collect();

        let q = Arc::clone(&queries);
        let a = Arc::clone(&auth_failures);
        let base = base_url.clone();
        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };
                handle(&mut stream, &base, &broken, &q, &a);
            }
        });

        Self {
            api_base: format!("{}/v1", base_url),
            base_url,
            queries,
            auth_failures,
        }
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("queries lock").clone()
    }

    pub fn auth_failures(&self) -> usize {
        *self.auth_failures.lock().expect("auth lock")
    }
}

fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];
    loop {
        let n = match stream.read(&mut chunk) {
            Ok(0) | Err(_) => break,
            Ok(n) => n,
        };
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") || buf.len() > 64 * 1024 {
            break;
        }
    }
    String::from_utf8_lossy(&buf).to_string()
}

fn respond(stream: &mut TcpStream, status: &str, content_type: &str, body: &[u8]) {
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        status,
        content_type,
        body.len()
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
    let _ = stream.flush();
}

fn handle(
    stream: &mut TcpStream,
    base: &str,
    broken: &[String],
    queries: &Mutex<Vec<String>>,
    auth_failures: &Mutex<usize>,
) {
    let request = read_request(stream);
    let target = request
        .lines()
        .next()
        .and_then(|l| l.split_whitespace().nth(1))
        .unwrap_or_default()
        .to_string();

    if target.starts_with("/v1/search?") {
        let authorized = request.lines().any(|l| {
            l.to_ascii_lowercase().starts_with("authorization:")
                && l.split_once(':').map(|(_, v)| v.trim()) == Some(TEST_API_KEY)
        });
        if !authorized {
            *auth_failures.lock().expect("auth lock") += 1;
            respond(stream, "401 Unauthorized", "application/json", b"{}");
            return;
        }
        let query = query_param(&target, "query").unwrap_or_default();
        queries.lock().expect("queries lock").push(query.clone());
        let n = queries.lock().expect("queries lock").len();
        let url = if broken.contains(&query) {
            format!("{}/broken/{}.jpg", base, n)
        } else {
            format!("{}/img/{}.jpg", base, n)
        };
        let body = serde_json::json!({
            "page": 1,
            "per_page": 5,
            "photos": [{"id": n, "src": {"large": url, "original": "unused"}}]
        });
        respond(stream, "200 OK", "application/json", body.to_string().as_bytes());
    } else if target.starts_with("/img/") {
        respond(stream, "200 OK", "image/jpeg", b"\xFF\xD8\xFFfake-jpeg");
    } else {
        respond(stream, "500 Internal Server Error", "text/plain", b"boom");
    }
}

fn query_param(target: &str, key: &str) -> Option<String> {
    let url = reqwest::Url::parse(&format!("http://fake.test{}", target)).ok()?;
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}
