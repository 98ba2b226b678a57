// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Blocking HTTP client for the student record endpoints.

use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use url::Url;

use crate::api::error::{ApiError, Result};
use crate::config::AppConfig;
use crate::models::record::{DeleteRequest, Record, RecordFields, RecordId};

/// Longest slice of an error body kept for logging.
const MAX_ERROR_BODY: usize = 512;

/// Record storage operations the UI depends on.
///
/// Implementations are called from worker threads and may block.
pub trait Backend: Send + Sync {
    /// Fetch the full record list in backend order.
    fn list(&self) -> Result<Vec<Record>>;
    fn create(&self, fields: &RecordFields) -> Result<()>;
    fn update(&self, record: &Record) -> Result<()>;
    fn delete(&self, id: RecordId) -> Result<()>;
}

/// Fixed endpoints exposed by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    Read,
    Create,
    Update,
    Delete,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Read => "read.php",
            Endpoint::Create => "create.php",
            Endpoint::Update => "update.php",
            Endpoint::Delete => "delete.php",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Endpoint::Read => Method::GET,
            Endpoint::Create => Method::POST,
            Endpoint::Update => Method::PUT,
            Endpoint::Delete => Method::DELETE,
        }
    }
}

/// [`Backend`] talking JSON to the configured base URL.
pub struct HttpBackend {
    client: Client,
    base: Url,
}

impl HttpBackend {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self {
            client,
            base: config.backend_url.clone(),
        })
    }

    fn request(&self, endpoint: Endpoint) -> Result<RequestBuilder> {
        let url = self.base.join(endpoint.path())?;
        log::debug!("{} {}", endpoint.method(), url);
        Ok(self.client.request(endpoint.method(), url))
    }

    /// Send and turn non-2xx responses into errors.
    fn send(&self, builder: RequestBuilder) -> Result<Response> {
        let response = builder.send()?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let mut body = response.text().unwrap_or_default();
        if body.len() > MAX_ERROR_BODY {
            let mut cut = MAX_ERROR_BODY;
            while !body.is_char_boundary(cut) {
                cut -= 1;
            }
            body.truncate(cut);
        }
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl Backend for HttpBackend {
    fn list(&self) -> Result<Vec<Record>> {
        let response = self.send(self.request(Endpoint::Read)?)?;
        let body = response.text()?;
        let records: Vec<Record> = serde_json::from_str(&body)?;
        log::debug!("Fetched {} record(s)", records.len());
        Ok(records)
    }

    fn create(&self, fields: &RecordFields) -> Result<()> {
        self.send(self.request(Endpoint::Create)?.json(fields))?;
        Ok(())
    }

    fn update(&self, record: &Record) -> Result<()> {
        self.send(self.request(Endpoint::Update)?.json(record))?;
        Ok(())
    }

    fn delete(&self, id: RecordId) -> Result<()> {
        self.send(self.request(Endpoint::Delete)?.json(&DeleteRequest { id }))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_base_url;
    use serde_json::json;
    use std::time::Duration;
    use tokio::runtime::Runtime;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // The blocking client must not run inside the async runtime, so the mock
    // server lives on its own runtime and requests go out from the test thread.
    fn start_server() -> (Runtime, MockServer) {
        let rt = Runtime::new().unwrap();
        let server = rt.block_on(MockServer::start());
        (rt, server)
    }

    fn backend_for(server: &MockServer) -> HttpBackend {
        let config = AppConfig {
            backend_url: parse_base_url(&format!("{}/php-backend", server.uri())).unwrap(),
            request_timeout: Duration::from_secs(5),
        };
        HttpBackend::new(&config).unwrap()
    }

    #[test]
    fn list_fetches_and_decodes_records() {
        let (rt, server) = start_server();
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/php-backend/read.php"))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                    {"id": 1, "nama": "Ana", "kelas": "7A", "umur": 12},
                    {"id": "2", "nama": "Budi", "kelas": "8B", "umur": "13"}
                ])))
                .expect(1)
                .mount(&server),
        );

        let records = backend_for(&server).list().unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Ana");
        assert_eq!(records[1].id, RecordId(2));
        assert_eq!(records[1].age, 13);
    }

    #[test]
    fn create_posts_fields_without_id() {
        let (rt, server) = start_server();
        rt.block_on(
            Mock::given(method("POST"))
                .and(path("/php-backend/create.php"))
                .and(body_json(json!({"nama": "Budi", "kelas": "8B", "umur": 13})))
                .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
                .expect(1)
                .mount(&server),
        );

        let fields = RecordFields {
            name: "Budi".into(),
            class: "8B".into(),
            age: 13,
        };
        backend_for(&server).create(&fields).unwrap();
    }

    #[test]
    fn update_puts_full_record() {
        let (rt, server) = start_server();
        rt.block_on(
            Mock::given(method("PUT"))
                .and(path("/php-backend/update.php"))
                .and(body_json(
                    json!({"id": 5, "nama": "Citra", "kelas": "9C", "umur": 15}),
                ))
                .respond_with(ResponseTemplate::new(200))
                .expect(1)
                .mount(&server),
        );

        let record = Record {
            id: RecordId(5),
            name: "Citra".into(),
            class: "9C".into(),
            age: 15,
        };
        backend_for(&server).update(&record).unwrap();
    }

    #[test]
    fn delete_sends_id_in_body() {
        let (rt, server) = start_server();
        rt.block_on(
            Mock::given(method("DELETE"))
                .and(path("/php-backend/delete.php"))
                .and(body_json(json!({"id": 3})))
                .respond_with(ResponseTemplate::new(200))
                .expect(1)
                .mount(&server),
        );

        backend_for(&server).delete(RecordId(3)).unwrap();
    }

    #[test]
    fn server_error_maps_to_status() {
        let (rt, server) = start_server();
        rt.block_on(
            Mock::given(method("DELETE"))
                .and(path("/php-backend/delete.php"))
                .respond_with(ResponseTemplate::new(500).set_body_string("db down"))
                .mount(&server),
        );

        match backend_for(&server).delete(RecordId(3)) {
            Err(ApiError::Status { status, body }) => {
                assert_eq!(status, 500);
                assert_eq!(body, "db down");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_list_maps_to_decode() {
        let (rt, server) = start_server();
        rt.block_on(
            Mock::given(method("GET"))
                .and(path("/php-backend/read.php"))
                .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
                .mount(&server),
        );

        assert!(matches!(
            backend_for(&server).list(),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn endpoints_match_backend_routes() {
        let routes: Vec<_> = [
            Endpoint::Read,
            Endpoint::Create,
            Endpoint::Update,
            Endpoint::Delete,
        ]
        .into_iter()
        .map(|e| (e.method(), e.path()))
        .collect();

        assert_eq!(
            routes,
            vec![
                (Method::GET, "read.php"),
                (Method::POST, "create.php"),
                (Method::PUT, "update.php"),
                (Method::DELETE, "delete.php"),
            ]
        );
    }
}
