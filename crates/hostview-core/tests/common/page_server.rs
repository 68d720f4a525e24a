//! Minimal HTTP/1.1 server for presenter integration tests.
//!
//! Routes:
//! - `/` serves a small HTML page
//! - `/redirect` answers 302 to `/`
//! - `/missing` answers 404
//! - `/big` serves a body larger than any test cap
//! - `/slow` waits before answering

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

pub const PAGE: &str = "<!doctype html><html><head><title>hostview</title></head><body>ok</body></html>";
pub const BIG_LEN: usize = 256 * 1024;

/// A running server. Requests are recorded as their request line.
pub struct PageServer {
    pub port: u16,
    requests: Arc<Mutex<Vec<String>>>,
}

impl PageServer {
    /// Starts the server on an ephemeral loopback port. It runs until the process exits.
    pub fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
        let port = listener.local_addr().unwrap().port();
        let requests = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&requests);
        thread::spawn(move || {
            for stream in listener.incoming().flatten() {
                let log = Arc::clone(&log);
                thread::spawn(move || handle(stream, &log));
            }
        });
        Self { port, requests }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://127.0.0.1:{}{}", self.port, path)
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

/// Returns a loopback port with nothing listening on it.
pub fn closed_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    listener.local_addr().unwrap().port()
}

fn handle(mut stream: TcpStream, log: &Mutex<Vec<String>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let request_line = request.lines().next().unwrap_or("").to_string();
    log.lock().unwrap().push(request_line.clone());

    let path = request_line.split_whitespace().nth(1).unwrap_or("/");
    match path {
        "/" => respond(&mut stream, "200 OK", "text/html; charset=utf-8", PAGE.as_bytes(), ""),
        "/redirect" => respond(&mut stream, "302 Found", "text/plain", b"", "Location: /\r\n"),
        "/missing" => respond(&mut stream, "404 Not Found", "text/plain", b"not found", ""),
        "/big" => {
            let body = vec![b'x'; BIG_LEN];
            respond(&mut stream, "200 OK", "application/octet-stream", &body, "");
        }
        "/slow" => {
            thread::sleep(Duration::from_secs(3));
            respond(&mut stream, "200 OK", "text/plain", b"late", "");
        }
        _ => respond(&mut stream, "404 Not Found", "text/plain", b"", ""),
    }
}

fn respond(stream: &mut TcpStream, status: &str, content_type: &str, body: &[u8], extra: &str) {
    let head = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n{}\r\n",
        status,
        content_type,
        body.len(),
        extra
    );
    let _ = stream.write_all(head.as_bytes());
    let _ = stream.write_all(body);
}
