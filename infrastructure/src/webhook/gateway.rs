//! HTTP web-hook gateway
//!
//! Posts the registration payload as JSON. In [`DeliveryMode::Opaque`] the
//! response is dropped unread, so only transport-level failures surface;
//! [`DeliveryMode::Acknowledged`] additionally treats a non-2xx status as a
//! failure.

use super::error::Result;
use async_trait::async_trait;
use regform_application::config::SubmissionParams;
use regform_application::ports::webhook_gateway::{GatewayError, WebhookGateway};
use regform_domain::{DeliveryMode, Endpoint, RegistrationPayload};
use reqwest::header::{CONTENT_TYPE, HeaderValue, USER_AGENT};
use tracing::{debug, warn};

const USER_AGENT_VALUE: &str = concat!("regform/", env!("CARGO_PKG_VERSION"));

/// Web-hook gateway backed by `reqwest`
pub struct HttpWebhookGateway {
    client: reqwest::Client,
    endpoint: Endpoint,
    mode: DeliveryMode,
}

impl HttpWebhookGateway {
    /// Build a gateway from submission parameters.
    ///
    /// The timeout applies to the whole request; without one the call waits
    /// until the endpoint answers or the connection drops.
    pub fn new(params: &SubmissionParams) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = params.timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: params.endpoint.clone(),
            mode: params.delivery_mode,
        })
    }

    pub fn mode(&self) -> DeliveryMode {
        self.mode
    }

    fn classify(error: reqwest::Error) -> GatewayError {
        if error.is_timeout() {
            GatewayError::Timeout
        } else if error.is_connect() {
            GatewayError::ConnectionError(error.to_string())
        } else {
            GatewayError::RequestFailed(error.to_string())
        }
    }
}

#[async_trait]
impl WebhookGateway for HttpWebhookGateway {
    async fn deliver(&self, payload: &RegistrationPayload) -> std::result::Result<(), GatewayError> {
        let body = serde_json::to_vec(payload)
            .map_err(|e| GatewayError::SerializationError(e.to_string()))?;

        debug!(
            "POST {} ({} bytes, {} mode)",
            self.endpoint,
            body.len(),
            self.mode
        );

        let response = self
            .client
            .post(self.endpoint.as_str())
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .header(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE))
            .body(body)
            .send()
            .await
            .map_err(Self::classify)?;

        match self.mode {
            DeliveryMode::Opaque => Ok(()),
            DeliveryMode::Acknowledged => {
                let status = response.status();
                if status.is_success() {
                    Ok(())
                } else {
                    warn!(
                        "Web-hook answered {} {}",
                        status.as_u16(),
                        status.canonical_reason().unwrap_or("Unknown")
                    );
                    Err(GatewayError::Rejected {
                        status: status.as_u16(),
                    })
                }
            }
        }
    }

    fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    // ==================== Helpers ====================

    fn payload() -> RegistrationPayload {
        RegistrationPayload {
            full_name: "John Doe".to_string(),
            email: "john@example.com".to_string(),
            phone: "0712345678".to_string(),
            qualification: "Bachelor".to_string(),
            expertise: "finance".to_string(),
            other_expertise: String::new(),
            experience: "2 years".to_string(),
            transaction_id: "QWE12345".to_string(),
            timestamp: "2025-03-01T08:00:00.000Z".to_string(),
        }
    }

    fn params(url: &str, mode: DeliveryMode) -> SubmissionParams {
        SubmissionParams::default()
            .with_endpoint(Endpoint::try_new(url).unwrap())
            .with_delivery_mode(mode)
            .with_timeout(Some(Duration::from_secs(5)))
    }

    fn find_header_end(buf: &[u8]) -> Option<usize> {
        buf.windows(4).position(|w| w == b"\r\n\r\n")
    }

    fn content_length(head: &str) -> usize {
        head.lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse().ok())
            .unwrap_or(0)
    }

    /// Accept one request, answer with `status_line`, return the raw request.
    async fn serve_once(status_line: &'static str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::new();
            let mut chunk = [0u8; 4096];
            loop {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&chunk[..n]);
                if let Some(end) = find_header_end(&buf) {
                    let head = String::from_utf8_lossy(&buf[..end]).to_string();
                    if buf.len() >= end + 4 + content_length(&head) {
                        break;
                    }
                }
            }

            let response =
                format!("{status_line}\r\ncontent-length: 0\r\nconnection: close\r\n\r\n");
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8_lossy(&buf).to_string()
        });

        (format!("http://{addr}/exec"), handle)
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn posts_json_payload() {
        let (url, server) = serve_once("HTTP/1.1 200 OK").await;
        let gateway = HttpWebhookGateway::new(&params(&url, DeliveryMode::Opaque)).unwrap();

        gateway.deliver(&payload()).await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /exec HTTP/1.1"));
        assert!(request.to_lowercase().contains("content-type: application/json"));
        let body = &request[request.find("\r\n\r\n").unwrap() + 4..];
        let value: serde_json::Value = serde_json::from_str(body).unwrap();
        assert_eq!(value["fullName"], "John Doe");
        assert_eq!(value["transactionId"], "QWE12345");
        assert_eq!(value["otherExpertise"], "");
    }

    #[tokio::test]
    async fn opaque_mode_ignores_error_status() {
        let (url, server) = serve_once("HTTP/1.1 500 Internal Server Error").await;
        let gateway = HttpWebhookGateway::new(&params(&url, DeliveryMode::Opaque)).unwrap();

        assert!(gateway.deliver(&payload()).await.is_ok());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn acknowledged_mode_reports_error_status() {
        let (url, server) = serve_once("HTTP/1.1 500 Internal Server Error").await;
        let gateway = HttpWebhookGateway::new(&params(&url, DeliveryMode::Acknowledged)).unwrap();

        let err = gateway.deliver(&payload()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Rejected { status: 500 }));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn acknowledged_mode_accepts_success_status() {
        let (url, server) = serve_once("HTTP/1.1 204 No Content").await;
        let gateway = HttpWebhookGateway::new(&params(&url, DeliveryMode::Acknowledged)).unwrap();

        assert!(gateway.deliver(&payload()).await.is_ok());
        server.await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_connection_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let gateway =
            HttpWebhookGateway::new(&params(&format!("http://{addr}/exec"), DeliveryMode::Opaque))
                .unwrap();

        let err = gateway.deliver(&payload()).await.unwrap_err();
        assert!(matches!(err, GatewayError::ConnectionError(_)));
    }

    #[tokio::test]
    async fn silent_endpoint_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let server = tokio::spawn(async move {
            let (socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(2)).await;
            drop(socket);
        });

        let params = params(&format!("http://{addr}/exec"), DeliveryMode::Opaque)
            .with_timeout(Some(Duration::from_millis(200)));
        let gateway = HttpWebhookGateway::new(&params).unwrap();

        let err = gateway.deliver(&payload()).await.unwrap_err();
        assert!(matches!(err, GatewayError::Timeout));
        server.abort();
    }

    #[test]
    fn keeps_endpoint_and_mode() {
        let gateway = HttpWebhookGateway::new(&params(
            "https://example.com/exec",
            DeliveryMode::Acknowledged,
        ))
        .unwrap();
        assert_eq!(gateway.endpoint().as_str(), "https://example.com/exec");
        assert_eq!(gateway.mode(), DeliveryMode::Acknowledged);
    }
}
