//! A minimal http server answering the same canned response to every request,
//! so the default reqwest transport can be tested without network.
use std::io::{BufRead, BufReader, Write};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};

pub struct StubServer {
    pub api_endpoint: String,
    requests: Arc<Mutex<Vec<Vec<String>>>>,
}

impl StubServer {
    pub fn new(status: &'static str, body: &'static str) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("impossible to bind stub server");
        let port = listener.local_addr().expect("no local address").port();
        let requests = Arc::new(Mutex::new(vec![]));

        let recorded = requests.clone();
        std::thread::spawn(move || {
            for stream in listener.incoming() {
                let mut stream = match stream {
                    Ok(s) => s,
                    Err(_) => continue,
                };
                let mut head = vec![];
                let mut reader = BufReader::new(stream.try_clone().expect("invalid stream"));
                loop {
                    let mut line = String::new();
                    if reader.read_line(&mut line).unwrap_or(0) == 0 {
                        break;
                    }
                    let line = line.trim_end().to_owned();
                    if line.is_empty() {
                        break;
                    }
                    head.push(line);
                }
                recorded.lock().unwrap().push(head);

                let response = format!(
                    "HTTP/1.1 {}\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                stream
                    .write_all(response.as_bytes())
                    .expect("stub server cannot write the response");
                stream.flush().expect("stub server cannot flush the response");
            }
        });

        Self {
            api_endpoint: format!("http://127.0.0.1:{}/w/api.php", port),
            requests,
        }
    }

    /// request line and headers of all received requests
    pub fn requests(&self) -> Vec<Vec<String>> {
        self.requests.lock().unwrap().clone()
    }

    /// the request line of the `n`th request, e.g. `GET /w/api.php?... HTTP/1.1`
    pub fn request_line(&self, n: usize) -> String {
        self.requests()[n][0].clone()
    }

    /// value of a header of the `n`th request (header names are case insensitive)
    pub fn header(&self, n: usize, name: &str) -> Option<String> {
        self.requests()[n][1..].iter().find_map(|h| {
            let mut parts = h.splitn(2, ':');
            let key = parts.next()?;
            if key.eq_ignore_ascii_case(name) {
                parts.next().map(|v| v.trim().to_owned())
            } else {
                None
            }
        })
    }
}
