/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */
use pinterest::v5::{ApiConfig, Client};
use rouille::{Request, Response, Server};
use serde_json::Value;
use std::io::Read;
use std::sync::{Arc, Mutex};

pub(crate) const TEST_TOKEN: &str = "pina_test_token";

/// What the mock API saw of a request
#[derive(Debug, Clone)]
pub(crate) struct Recorded {
    pub method: String,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

#[allow(dead_code)]
impl Recorded {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }

    pub fn form(&self) -> Vec<(String, String)> {
        url::form_urlencoded::parse(self.body.as_bytes())
            .into_owned()
            .collect()
    }
}

/// Local stand in for the Pinterest API.
///
/// Every request is recorded and answered by the handler given to [`MockApi::start`].
pub(crate) struct MockApi {
    pub uri: String,
    requests: Arc<Mutex<Vec<Recorded>>>,
    stop: std::sync::mpsc::Sender<()>,
}

#[allow(dead_code)]
impl MockApi {
    pub fn start<F>(handler: F) -> Self
    where
        F: Fn(&Recorded) -> Response + Send + Sync + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorder = requests.clone();
        let server = Server::new("127.0.0.1:0", move |request: &Request| {
            let recorded = record(request);
            recorder.lock().unwrap().push(recorded.clone());
            handler(&recorded)
        })
        .unwrap();
        let uri = format!("http://{}", server.server_addr());
        let (_handle, stop) = server.stoppable();
        Self {
            uri,
            requests,
            stop,
        }
    }

    pub fn client(&self) -> Client {
        Client::from_token(&self.uri, TEST_TOKEN).unwrap()
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::new("1234", "app-secret").with_api_uri(&self.uri)
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Recorded {
        self.requests().pop().unwrap()
    }
}

impl Drop for MockApi {
    fn drop(&mut self) {
        let _ = self.stop.send(());
    }
}

fn record(request: &Request) -> Recorded {
    let mut body = Vec::new();
    if let Some(mut data) = request.data() {
        data.read_to_end(&mut body).unwrap();
    }
    let query = url::form_urlencoded::parse(request.raw_query_string().as_bytes())
        .into_owned()
        .collect();
    Recorded {
        method: request.method().to_string(),
        path: request.url(),
        query,
        headers: request
            .headers()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        body: String::from_utf8_lossy(&body).into_owned(),
    }
}

#[allow(dead_code)]
pub(crate) fn json(value: Value) -> Response {
    Response::json(&value).with_additional_header("x-pinterest-rid", "mock-rid")
}

#[allow(dead_code)]
pub(crate) fn json_status(status: u16, value: Value) -> Response {
    json(value).with_status_code(status)
}

#[allow(dead_code)]
pub(crate) fn not_found(req: &Recorded) -> Response {
    json_status(
        404,
        serde_json::json!({"code": 404, "message": format!("no route for {} {}", req.method, req.path)}),
    )
}
