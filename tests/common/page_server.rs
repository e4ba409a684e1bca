//! Minimal HTTP/1.1 server for integration tests.
//!
//! Serves a fixed set of pages keyed by request path; any other path gets a
//! 404 with a small HTML body.

use std::collections::HashMap;
use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Page {
    pub status: u16,
    pub body: String,
    pub location: Option<String>,
}

impl Page {
    pub fn ok(body: &str) -> Self {
        Self {
            status: 200,
            body: body.to_string(),
            location: None,
        }
    }

    /// 302 to `path` on the same server.
    pub fn redirect(path: &str) -> Self {
        Self {
            status: 302,
            body: String::new(),
            location: Some(path.to_string()),
        }
    }
}

/// Starts a server in a background thread. Returns the base URL
/// (e.g. "http://127.0.0.1:12345/"). The server runs until the process exits.
pub fn start(pages: Vec<(&str, Page)>) -> String {
    let pages: HashMap<String, Page> = pages
        .into_iter()
        .map(|(path, page)| (path.to_string(), page))
        .collect();
    let pages = Arc::new(pages);

    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let pages = Arc::clone(&pages);
            thread::spawn(move || handle(stream, &pages));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

/// A base URL nothing is listening on.
pub fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: TcpStream, pages: &HashMap<String, Page>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));

    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) | Err(_) => return,
        Ok(n) => n,
    };
    let request = String::from_utf8_lossy(&buf[..n]);
    let path = request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/");

    let not_found = Page {
        status: 404,
        body: "<html><body><h1>Not Found</h1></body></html>".to_string(),
        location: None,
    };
    let page = pages.get(path).unwrap_or(&not_found);
    let reason = match page.status {
        200 => "OK",
        302 => "Found",
        _ => "Not Found",
    };
    let location = page
        .location
        .as_deref()
        .map(|to| format!("Location: {to}\r\n"))
        .unwrap_or_default();

    let response = format!(
        "HTTP/1.1 {} {}\r\n{}Content-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        page.status,
        reason,
        location,
        page.body.len(),
        page.body
    );
    let _ = stream.write_all(response.as_bytes());
}
