//! Named request/response channels between the front-end and the store host.
//!
//! Requests carry a channel name and a JSON payload; the host task owns the
//! store, dispatches by name and answers each request on its own oneshot.

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::AppError;
use crate::core::services::data_service::ServiceResponse;
use crate::domain::NewUser;
use crate::error::TransportError;
use crate::storage::database::Database;

pub const GET_USERS: &str = "get-users";
pub const ADD_USER: &str = "add-user";

const REQUEST_BUFFER: usize = 32;

#[derive(Debug)]
pub struct IpcRequest {
    pub channel: String,
    pub payload: Value,
    reply: oneshot::Sender<Value>,
}

/// Front-end side of the channel
#[derive(Debug, Clone)]
pub struct IpcRenderer {
    tx: mpsc::Sender<IpcRequest>,
}

impl IpcRenderer {
    /// Send one request and wait for its reply
    pub async fn invoke(&self, channel: &str, payload: Value) -> Result<Value, TransportError> {
        let (reply, response) = oneshot::channel();
        let request = IpcRequest {
            channel: channel.to_string(),
            payload,
            reply,
        };

        log::debug!("invoke '{}'", channel);
        self.tx
            .send(request)
            .await
            .map_err(|_| TransportError::Closed {
                channel: channel.to_string(),
            })?;

        response.await.map_err(|_| TransportError::Closed {
            channel: channel.to_string(),
        })
    }
}

/// Host-side dispatch of named requests
#[async_trait]
pub trait RequestHandler: Send + Sync {
    async fn handle(&self, channel: &str, payload: Value) -> Result<Value, AppError>;
}

/// Serve requests until every [`IpcRenderer`] is dropped
pub fn spawn_host(handler: impl RequestHandler + 'static) -> (IpcRenderer, JoinHandle<()>) {
    let (tx, mut rx) = mpsc::channel::<IpcRequest>(REQUEST_BUFFER);

    let host = tokio::spawn(async move {
        while let Some(request) = rx.recv().await {
            let IpcRequest {
                channel,
                payload,
                reply,
            } = request;

            let response = match handler.handle(&channel, payload).await {
                Ok(value) => value,
                Err(e) => {
                    log::warn!("request on '{}' failed: {}", channel, e);
                    failure_value(&e.to_string())
                }
            };

            if reply.send(response).is_err() {
                log::debug!("caller of '{}' went away before the reply", channel);
            }
        }
        log::debug!("ipc host stopped");
    });

    (IpcRenderer { tx }, host)
}

fn failure_value(error: &str) -> Value {
    serde_json::to_value(ServiceResponse::<()>::failure(error))
        .unwrap_or_else(|_| serde_json::json!({ "success": false, "error": error }))
}

fn encode<T: serde::Serialize>(channel: &str, response: ServiceResponse<T>) -> Result<Value, AppError> {
    serde_json::to_value(response).map_err(|e| {
        TransportError::Payload {
            channel: channel.to_string(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Answers `get-users` and `add-user` from the SQLite store
pub struct StoreHandler {
    db: Database,
}

impl StoreHandler {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RequestHandler for StoreHandler {
    async fn handle(&self, channel: &str, payload: Value) -> Result<Value, AppError> {
        match channel {
            GET_USERS => encode(channel, ServiceResponse::from(self.db.list_users().await)),
            ADD_USER => {
                let user: NewUser =
                    serde_json::from_value(payload).map_err(|e| TransportError::Payload {
                        channel: channel.to_string(),
                        message: e.to_string(),
                    })?;
                encode(channel, ServiceResponse::from(self.db.add_user(user).await))
            }
            other => Err(TransportError::UnknownChannel {
                channel: other.to_string(),
            }
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl RequestHandler for Echo {
        async fn handle(&self, channel: &str, payload: Value) -> Result<Value, AppError> {
            match channel {
                "echo" => Ok(payload),
                other => Err(TransportError::UnknownChannel {
                    channel: other.to_string(),
                }
                .into()),
            }
        }
    }

    #[tokio::test]
    async fn test_invoke_round_trip() {
        let (ipc, _host) = spawn_host(Echo);
        let reply = ipc.invoke("echo", json!({"plate": "34 ABC 123"})).await.expect("reply");
        assert_eq!(reply["plate"], "34 ABC 123");
    }

    #[tokio::test]
    async fn test_unknown_channel_answers_with_failure() {
        let (ipc, _host) = spawn_host(Echo);
        let reply = ipc.invoke("get-cars", Value::Null).await.expect("reply");
        assert_eq!(reply["success"], false);
        assert!(reply["error"].as_str().is_some_and(|e| e.contains("get-cars")));
    }

    #[tokio::test]
    async fn test_invoke_after_host_stops() {
        let (ipc, host) = spawn_host(Echo);
        host.abort();
        let _ = host.await;
        assert!(matches!(
            ipc.invoke("echo", Value::Null).await,
            Err(TransportError::Closed { .. })
        ));
    }

    #[tokio::test]
    async fn test_malformed_add_user_payload() {
        let dir = tempfile::TempDir::new().expect("Failed to create temp directory");
        let db = Database::open(dir.path().join("database.sqlite"))
            .await
            .expect("open database");
        let (ipc, _host) = spawn_host(StoreHandler::new(db.clone()));

        let reply = ipc.invoke(ADD_USER, json!({"name": "Ali"})).await.expect("reply");
        assert_eq!(reply["success"], false);
        assert_eq!(db.count_users().await.expect("count"), 0);
    }
}
