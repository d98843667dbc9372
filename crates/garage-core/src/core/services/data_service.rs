//! Data access facade.
//!
//! Screens reach the user store only through [`DataService`]. Every call
//! resolves to a [`ServiceResponse`]; failures are values, never panics or
//! `Err`s, so callers branch on [`ServiceResponse::is_success`].

use async_trait::async_trait;
use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::core::services::transport::{ADD_USER, GET_USERS, IpcRenderer};
use crate::domain::{NewUser, User};

/// `{ "success": true, "data": … }` or `{ "success": false, "error": "…" }`
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResponse<T> {
    Success { data: T },
    Failure { error: String },
}

impl<T> ServiceResponse<T> {
    pub fn success(data: T) -> Self {
        ServiceResponse::Success { data }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        ServiceResponse::Failure {
            error: error.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ServiceResponse::Success { .. })
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            ServiceResponse::Success { data } => Some(data),
            ServiceResponse::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ServiceResponse::Success { .. } => None,
            ServiceResponse::Failure { error } => Some(error),
        }
    }

    pub fn into_result(self) -> Result<T, String> {
        match self {
            ServiceResponse::Success { data } => Ok(data),
            ServiceResponse::Failure { error } => Err(error),
        }
    }
}

impl<T, E: std::fmt::Display> From<Result<T, E>> for ServiceResponse<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => ServiceResponse::success(data),
            Err(e) => ServiceResponse::failure(e.to_string()),
        }
    }
}

#[derive(Serialize)]
struct WireRef<'a, T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<&'a T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

#[derive(Deserialize)]
struct Wire<T> {
    success: bool,
    data: Option<T>,
    error: Option<String>,
}

impl<T: Serialize> Serialize for ServiceResponse<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            ServiceResponse::Success { data } => WireRef {
                success: true,
                data: Some(data),
                error: None,
            },
            ServiceResponse::Failure { error } => WireRef {
                success: false,
                data: None,
                error: Some(error.as_str()),
            },
        };
        wire.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ServiceResponse<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Wire::<T>::deserialize(deserializer)?;
        match (wire.success, wire.data) {
            (true, Some(data)) => Ok(ServiceResponse::Success { data }),
            (true, None) => Err(D::Error::missing_field("data")),
            (false, _) => Ok(ServiceResponse::Failure {
                error: wire.error.unwrap_or_else(|| "unknown error".to_string()),
            }),
        }
    }
}

#[async_trait]
pub trait DataService: Send + Sync {
    async fn list_users(&self) -> ServiceResponse<Vec<User>>;

    async fn add_user(&self, user: NewUser) -> ServiceResponse<User>;
}

/// Facade that forwards each call over a named request channel
#[derive(Debug, Clone)]
pub struct ChannelDataService {
    ipc: IpcRenderer,
}

impl ChannelDataService {
    pub fn new(ipc: IpcRenderer) -> Self {
        Self { ipc }
    }

    async fn call<R: DeserializeOwned>(
        &self,
        channel: &str,
        payload: serde_json::Value,
    ) -> ServiceResponse<R> {
        let reply = match self.ipc.invoke(channel, payload).await {
            Ok(reply) => reply,
            Err(e) => return ServiceResponse::failure(e.to_string()),
        };
        serde_json::from_value(reply).unwrap_or_else(|e| {
            ServiceResponse::failure(format!("Malformed reply on '{}': {}", channel, e))
        })
    }
}

#[async_trait]
impl DataService for ChannelDataService {
    async fn list_users(&self) -> ServiceResponse<Vec<User>> {
        self.call(GET_USERS, serde_json::Value::Null).await
    }

    async fn add_user(&self, user: NewUser) -> ServiceResponse<User> {
        let payload = match serde_json::to_value(&user) {
            Ok(payload) => payload,
            Err(e) => return ServiceResponse::failure(e.to_string()),
        };
        self.call(ADD_USER, payload).await
    }
}
