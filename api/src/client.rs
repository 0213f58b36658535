use anyhow::Context;
use reqwest::{Client, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use types::{Employee, EmployeeId, EmployeeInput, EmployeePatch, Error, Operation, Result};

use crate::{ApiConfig, EmployeeApi};

trait ReqwestExt {
    async fn try_send<T: DeserializeOwned>(self) -> anyhow::Result<T>;
    async fn try_send_empty(self) -> anyhow::Result<()>;
}

impl ReqwestExt for RequestBuilder {
    async fn try_send<T: DeserializeOwned>(self) -> anyhow::Result<T> {
        let response = self.send().await?.error_for_status()?;
        let body = response.bytes().await?;

        serde_json::from_slice(&body).context("unexpected response body")
    }

    async fn try_send_empty(self) -> anyhow::Result<()> {
        self.send().await?.error_for_status()?;
        Ok(())
    }
}

/// REST client for `/employees` on the configured backend.
///
/// Every call is a single attempt: no retries, no timeout beyond the
/// transport's own, no caching between calls.
#[derive(Debug, Clone)]
pub struct EmployeeClient {
    client: Client,
    config: ApiConfig,
}

impl EmployeeClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    fn request(&self, method: Method, segments: &[&str]) -> anyhow::Result<RequestBuilder> {
        let url = self.config.endpoint(segments)?;
        tracing::debug!(%method, %url, "sending request");

        Ok(self.client.request(method, url))
    }

    fn collection(&self, method: Method) -> anyhow::Result<RequestBuilder> {
        self.request(method, &["employees"])
    }

    fn member(&self, method: Method, id: &EmployeeId) -> anyhow::Result<RequestBuilder> {
        self.request(method, &["employees", id.as_str()])
    }

    async fn send<T: DeserializeOwned>(
        &self,
        operation: Operation,
        request: anyhow::Result<RequestBuilder>,
    ) -> Result<T> {
        let response = match request {
            Ok(request) => request.try_send().await,
            Err(e) => Err(e),
        };
        response.map_err(|e| self.fail(operation, e))
    }

    async fn send_empty(
        &self,
        operation: Operation,
        request: anyhow::Result<RequestBuilder>,
    ) -> Result<()> {
        let response = match request {
            Ok(request) => request.try_send_empty().await,
            Err(e) => Err(e),
        };
        response.map_err(|e| self.fail(operation, e))
    }

    fn fail(&self, operation: Operation, report: anyhow::Error) -> Error {
        let error = Error::new(operation, report);
        tracing::warn!(?operation, cause = %error.message, "request failed");
        error
    }
}

impl EmployeeApi for EmployeeClient {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.send(Operation::List, self.collection(Method::GET))
            .await
    }

    async fn get_employee(&self, id: &EmployeeId) -> Result<Employee> {
        self.send(Operation::Get, self.member(Method::GET, id))
            .await
    }

    async fn create_employee(&self, employee: &EmployeeInput) -> Result<Employee> {
        let request = self.collection(Method::POST).map(|r| r.json(employee));
        self.send(Operation::Create, request).await
    }

    async fn update_employee(&self, id: &EmployeeId, patch: &EmployeePatch) -> Result<Employee> {
        let request = self.member(Method::PUT, id).map(|r| r.json(patch));
        self.send(Operation::Update, request).await
    }

    async fn delete_employee(&self, id: &EmployeeId) -> Result<()> {
        self.send_empty(Operation::Delete, self.member(Method::DELETE, id))
            .await
    }
}
