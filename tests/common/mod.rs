// tests/common/mod.rs
//
// Shared fixtures: result-set files and a tiny HTTP/1.1 stub server.
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread;

use radio_dash::ingest::ResultSet;

/// Minimal valid body for every result set.
pub fn fixture(set: ResultSet) -> String {
    match set {
        ResultSet::AllMatches => r#"{"matches":[
            {"date":"2025-01-05","match_name":"Alpha - Beta","listeners":5000,"result":"W"},
            {"date":"2024-12-20","match_name":"Gamma - Alpha","listeners":12000,"result":"L"},
            {"date":"2025-02-01","match_name":"Alpha - Delta","listeners":null,"result":"D"}
        ]}"#.to_string(),
        ResultSet::Top5Games => r#"{
            "2023/2024":[{"date":"2024-03-01","listeners":9000},{"date":"2024-02-01","listeners":8000}],
            "2024/2025":[{"date":"2025-01-05","listeners":12000}]
        }"#.to_string(),
        ResultSet::FutureMatches => r#"{"matches":[{"date":"2025-05-01","match_name":"Alpha - Omega","predicted_listeners":7000}]}"#.to_string(),
        ResultSet::PodcastEpisodes => r#"{"episodes":[{"title":"Ep 1","published_at":"2025-01-02","total_downloads":300}]}"#.to_string(),
        ResultSet::PodcastMonthly => r#"{"months":[{"month":"2025-01","downloads":900}]}"#.to_string(),
        ResultSet::PodcastApps => r#"{"apps":[]}"#.to_string(),
        other => {
            let key = match other.shape() {
                radio_dash::ingest::Shape::Wrapped(k) => k,
                radio_dash::ingest::Shape::SeasonGrouped => unreachable!(),
            };
            format!(r#"{{"{key}":[{{"label":"x","matches_count":3,"avg":1500.5}}]}}"#)
        }
    }
}

pub fn write_all_sets(dir: &Path) {
    for set in ResultSet::ALL {
        fs::write(dir.join(set.file()), fixture(set)).unwrap();
    }
}

#[derive(Clone, Debug)]
pub struct Request {
    pub method: String,
    pub target: String,
    pub headers: HashMap<String, String>,
    pub body: Vec<u8>,
}

impl Request {
    pub fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or("")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }
}

fn read_request(stream: &TcpStream) -> Option<Request> {
    let mut reader = BufReader::new(stream);
    let mut line = String::new();
    reader.read_line(&mut line).ok()?;
    let mut parts = line.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();

    let mut headers = HashMap::new();
    loop {
        let mut h = String::new();
        reader.read_line(&mut h).ok()?;
        let h = h.trim_end();
        if h.is_empty() {
            break;
        }
        if let Some((k, v)) = h.split_once(':') {
            headers.insert(k.trim().to_ascii_lowercase(), v.trim().to_string());
        }
    }

    let len: usize = headers.get("content-length").and_then(|v| v.parse().ok()).unwrap_or(0);
    let mut body = vec![0u8; len];
    reader.read_exact(&mut body).ok()?;
    Some(Request { method, target, headers, body })
}

/// Serve on 127.0.0.1 until the test process exits. Returns the base URL and
/// the log of requests received.
pub fn serve<F>(respond: F) -> (String, Arc<Mutex<Vec<Request>>>)
where
    F: Fn(&Request) -> (u16, Vec<u8>) + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let base = format!("http://{}", listener.local_addr().unwrap());
    let log = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&log);

    thread::spawn(move || {
        for stream in listener.incoming() {
            let Ok(mut stream) = stream else { continue };
            let Some(req) = read_request(&stream) else { continue };
            let (status, body) = respond(&req);
            seen.lock().unwrap().push(req);

            let head = format!(
                "HTTP/1.1 {status} X\r\nContent-Length: {}\r\nContent-Type: application/json\r\nConnection: close\r\n\r\n",
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&body);
            let _ = stream.flush();
        }
    });

    (base, log)
}
