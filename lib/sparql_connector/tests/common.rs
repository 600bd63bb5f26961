use log::debug;
use sparql_connector::{HttpExecutor, HttpRequest, TransportError};
use std::io::{BufRead, BufReader, Read, Write};
use std::net::TcpListener;
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::Duration;

pub const QUERY_ENDPOINT: &str = "http://localhost:8890/sparql/query";
pub const UPDATE_ENDPOINT: &str = "http://localhost:8890/sparql/update";
pub const DATA_ENDPOINT: &str = "http://localhost:8890/sparql/data";
pub const GRAPH: &str = "http://x/g";
pub const WIKI_NAMESPACE: &str = "http://wiki.example/id/";

#[allow(dead_code)]
pub fn init_logger() {
    let res = env_logger::builder().is_test(true).try_init();
    match res {
        Ok(_) => {}
        Err(_) => {
            debug!("Tried to initialize logger which is already initialize")
        }
    }
}

/// Records every request and answers with a fixed result.
#[derive(Default)]
pub struct RecordingExecutor {
    requests: Mutex<Vec<HttpRequest>>,
    fail_with: Option<TransportError>,
}

#[allow(dead_code)]
impl RecordingExecutor {
    pub fn succeeding() -> RecordingExecutor {
        RecordingExecutor::default()
    }

    pub fn failing(error: TransportError) -> RecordingExecutor {
        RecordingExecutor {
            requests: Mutex::new(vec![]),
            fail_with: Some(error),
        }
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn single_request(&self) -> HttpRequest {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

impl HttpExecutor for RecordingExecutor {
    fn execute(&self, request: HttpRequest) -> Result<(), TransportError> {
        self.requests.lock().unwrap().push(request);
        match &self.fail_with {
            None => Ok(()),
            Some(error) => Err(error.clone()),
        }
    }
}

#[allow(dead_code)]
#[derive(Debug)]
pub struct CapturedRequest {
    pub request_line: String,
    pub content_type: Option<String>,
    pub body: String,
}

/// Serves exactly one HTTP request on a loopback port with a canned answer.
#[allow(dead_code)]
pub fn serve_once(status: &'static str, body: &'static str) -> (String, JoinHandle<CapturedRequest>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Bind loopback listener");
    let address = listener.local_addr().unwrap();
    let handle = std::thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("Accept connection");
        let mut reader = BufReader::new(stream.try_clone().unwrap());
        let mut request_line = String::new();
        reader.read_line(&mut request_line).unwrap();

        let mut content_length = 0;
        let mut content_type = None;
        loop {
            let mut line = String::new();
            reader.read_line(&mut line).unwrap();
            let line = line.trim_end();
            if line.is_empty() {
                break;
            }
            if let Some((name, value)) = line.split_once(':') {
                let name = name.trim().to_lowercase();
                if name == "content-length" {
                    content_length = value.trim().parse().unwrap();
                } else if name == "content-type" {
                    content_type = Some(value.trim().to_string());
                }
            }
        }
        let mut request_body = vec![0; content_length];
        reader.read_exact(&mut request_body).unwrap();

        let response = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
        stream.flush().unwrap();
        CapturedRequest {
            request_line: request_line.trim_end().to_string(),
            content_type,
            body: String::from_utf8(request_body).unwrap(),
        }
    });
    (format!("http://{}/sparql", address), handle)
}

/// Accepts one connection and never answers it.
#[allow(dead_code)]
pub fn serve_silently(hold_for: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Bind loopback listener");
    let address = listener.local_addr().unwrap();
    std::thread::spawn(move || {
        if let Ok((stream, _)) = listener.accept() {
            std::thread::sleep(hold_for);
            drop(stream);
        }
    });
    format!("http://{}/sparql", address)
}

/// An address on which nothing listens.
#[allow(dead_code)]
pub fn closed_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Bind loopback listener");
    let address = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/sparql", address)
}
