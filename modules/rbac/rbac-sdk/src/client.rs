use pe_errors::normalize;
use pe_http::{HttpRequest, StatusCode};
use pe_sdk::{ApiClient, ClientError, ConfigError, SdkConfig, Service};

use crate::api::RbacApi;
use crate::models::{NewRole, Role, User};

pub const ROLES: &str = "/rbac-api/v1/roles";
pub const USERS: &str = "/rbac-api/v1/users";

/// HTTP implementation of [`RbacApi`]
#[derive(Clone, Debug)]
pub struct RbacClient {
    api: ApiClient,
}

impl RbacClient {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Build a client from the RBAC settings of `config`
    ///
    /// # Errors
    /// Returns [`ConfigError`] if no RBAC URL is configured or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &SdkConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.api_client(Service::Rbac)?))
    }
}

impl RbacApi for RbacClient {
    fn roles(&self) -> Result<Vec<Role>, ClientError> {
        self.api.get(ROLES)
    }

    fn role(&self, id: u64) -> Result<Role, ClientError> {
        self.api.get(&format!("{ROLES}/{id}"))
    }

    fn create_role(&self, role: &NewRole) -> Result<String, ClientError> {
        let request = HttpRequest::post(ROLES)
            .json(role)
            .map_err(|e| ClientError::invalid_request(format!("cannot encode role: {e}")))?;
        let response = self.api.send_raw(&request)?;
        let fallback = format!("{ROLES} error");

        if response.status() != StatusCode::SEE_OTHER {
            return Err(normalize(Ok(&response), Some(&fallback)));
        }

        let Some(location) = response.header("location") else {
            return Err(ClientError::HttpStatus {
                status: response.status(),
                status_text: response.status_text().to_owned(),
                message: Some("role created without a Location header".to_owned()),
            });
        };

        tracing::debug!(location, "role created");
        Ok(location.to_owned())
    }

    fn delete_role(&self, id: u64) -> Result<(), ClientError> {
        self.api.delete(&format!("{ROLES}/{id}"))
    }

    fn users(&self) -> Result<Vec<User>, ClientError> {
        self.api.get(USERS)
    }

    fn user(&self, id: &str) -> Result<User, ClientError> {
        self.api.get(&format!("{USERS}/{id}"))
    }
}
