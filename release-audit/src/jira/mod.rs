//! Jira issue lookups over the REST API.

mod payload;

use crate::config::JiraSettings;
use crate::sources::{TicketSource, TransportError};
use crate::tickets::{TicketId, TicketPayload};
use async_trait::async_trait;
use payload::JiraIssueResponse;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::debug;

/// Fetches tickets from a Jira instance using basic authentication.
#[derive(Debug, Clone)]
pub struct JiraClient {
    http: Client,
    settings: JiraSettings,
}

impl JiraClient {
    /// Builds a client for the configured Jira instance.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(settings: JiraSettings) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(concat!("release-audit/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, settings })
    }

    fn issue_endpoint(&self, id: &TicketId) -> String {
        format!(
            "{}/rest/api/2/issue/{}",
            self.settings.base_url().as_str().trim_end_matches('/'),
            id
        )
    }

    fn requested_fields(&self) -> String {
        format!("summary,fixVersions,{}", self.settings.sprint_field())
    }
}

#[async_trait]
impl TicketSource for JiraClient {
    async fn get(&self, id: &TicketId) -> Result<TicketPayload, TransportError> {
        debug!(ticket = %id, "Fetching Jira issue");
        let response = self
            .http
            .get(self.issue_endpoint(id))
            .basic_auth(self.settings.username(), Some(self.settings.password()))
            .header(ACCEPT, "application/json")
            .query(&[("fields", self.requested_fields())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unable to read response>".to_string());
            return Err(TransportError::JiraStatus {
                status: status.as_u16(),
                body,
            });
        }

        let issue: JiraIssueResponse = response.json().await?;
        Ok(issue.into_payload(self.settings.sprint_field()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tickets::{extract_ticket_ids, SprintEntry};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;
    use url::Url;

    fn client(base_url: &str) -> JiraClient {
        JiraClient::new(settings(base_url)).unwrap()
    }

    #[test]
    fn builds_issue_endpoint() {
        let id = extract_ticket_ids("FOO-100").remove(0);

        assert_eq!(
            client("https://acme.atlassian.net").issue_endpoint(&id),
            "https://acme.atlassian.net/rest/api/2/issue/FOO-100"
        );
        assert_eq!(
            client("https://acme.example/jira/").issue_endpoint(&id),
            "https://acme.example/jira/rest/api/2/issue/FOO-100"
        );
    }

    #[test]
    fn requests_configured_sprint_field() {
        assert_eq!(
            client("https://acme.atlassian.net").requested_fields(),
            "summary,fixVersions,customfield_10020"
        );
    }

    fn settings(base_url: &str) -> JiraSettings {
        JiraSettings::new(
            Url::parse(base_url).unwrap(),
            "me".to_string(),
            "secret".to_string(),
            "customfield_10020".to_string(),
        )
    }

    /// Client that talks to a local stub directly, ignoring proxy settings.
    fn local_client(base_url: &str) -> JiraClient {
        JiraClient {
            http: Client::builder().no_proxy().build().unwrap(),
            settings: settings(base_url),
        }
    }

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {status}\r\nContent-Type: application/json\r\nContent-Length: {}\r\n\
             Connection: close\r\n\r\n{body}",
            body.len()
        )
    }

    /// Serves one canned response and returns the base URL plus the raw request head.
    async fn serve_once(response: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
            String::from_utf8_lossy(&request).into_owned()
        });

        (base_url, handle)
    }

    #[tokio::test]
    async fn non_success_status_keeps_body() {
        let body = r#"{"errorMessages":["Issue does not exist or you do not have permission to see it."],"errors":{}}"#;
        let (base_url, server) = serve_once(http_response("404 Not Found", body)).await;
        let id = extract_ticket_ids("FOO-100").remove(0);

        let result = local_client(&base_url).get(&id).await;

        match result {
            Err(TransportError::JiraStatus { status, body: text }) => {
                assert_eq!(status, 404);
                assert_eq!(text, body);
            }
            other => panic!("unexpected result: {other:?}"),
        }

        let request = server.await.unwrap().to_ascii_lowercase();
        assert!(request.starts_with(
            "get /rest/api/2/issue/foo-100?fields=summary%2cfixversions%2ccustomfield_10020 "
        ));
        assert!(request.contains("authorization: basic bwu6c2vjcmv0"));
        assert!(request.contains("accept: application/json"));
    }

    #[tokio::test]
    async fn success_response_becomes_payload() {
        let body = r#"{
            "key": "FOO-7",
            "fields": {
                "summary": "Export",
                "fixVersions": [{"name": "2.4.0"}],
                "customfield_10020": [{"id": 11, "name": "Sprint 11", "state": "active"}]
            }
        }"#;
        let (base_url, server) = serve_once(http_response("200 OK", body)).await;
        let id = extract_ticket_ids("FOO-7").remove(0);

        let payload = local_client(&base_url).get(&id).await.unwrap();
        server.await.unwrap();

        assert_eq!(payload.summary, "Export");
        assert_eq!(payload.release_versions, ["2.4.0"]);
        assert!(matches!(
            payload.sprints.as_slice(),
            [SprintEntry::Record(record)] if record.name == "Sprint 11" && record.is_active()
        ));
    }
}
