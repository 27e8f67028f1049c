//! gRPC handler for the echo service.

use std::time::{SystemTime, UNIX_EPOCH};
use todo_tonic_core::proto::{EchoRequest, EchoResponse, echo_server::Echo};
use tonic::{Request, Response, Status};

/// Stateless echo service: returns the request message with a server-side
/// timestamp.
#[derive(Clone, Copy, Debug, Default)]
pub struct EchoHandler;

fn epoch_millis() -> i64 {
    // A clock before the Unix epoch is not a configuration we serve.
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| elapsed.as_millis() as i64)
}

#[tonic::async_trait]
impl Echo for EchoHandler {
    #[tracing::instrument(skip_all)]
    async fn echo(&self, req: Request<EchoRequest>) -> Result<Response<EchoResponse>, Status> {
        let message = req.into_inner().message;

        Ok(Response::new(EchoResponse {
            message,
            timestamp: epoch_millis(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn echoes_message_with_timestamp() {
        let before = epoch_millis();

        let resp = EchoHandler
            .echo(Request::new(EchoRequest {
                message: "hello".to_string(),
            }))
            .await
            .unwrap()
            .into_inner();

        assert_eq!(resp.message, "hello");
        assert!(resp.timestamp >= before);
        assert!(resp.timestamp <= epoch_millis());
    }

    #[tokio::test]
    async fn echoes_empty_message() {
        let resp = EchoHandler
            .echo(Request::new(EchoRequest {
                message: String::new(),
            }))
            .await
            .unwrap()
            .into_inner();

        assert!(resp.message.is_empty());
        assert!(resp.timestamp > 0);
    }
}
