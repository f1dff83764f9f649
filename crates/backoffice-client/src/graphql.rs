//! GraphQL-over-HTTP transport.

use std::time::Duration;

use backoffice_model::Record;
use reqwest::StatusCode;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use url::Url;

use crate::api::{ContentApi, ListQuery, Page};
use crate::config::AdminConfig;
use crate::documents;
use crate::error::{ApiError, Result};

const USER_AGENT_VALUE: &str = concat!("backoffice/", env!("CARGO_PKG_VERSION"));

/// Message Lighthouse uses for a missing or rejected bearer token.
const UNAUTHENTICATED: &str = "Unauthenticated.";

#[derive(Serialize)]
struct Request<'a, V> {
    query: &'a str,
    variables: V,
}

#[derive(Deserialize)]
struct Response {
    data: Option<Value>,
    #[serde(default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Deserialize)]
struct ErrorEntry {
    message: String,
}

/// A GraphQL endpoint with an optional bearer token.
#[derive(Debug, Clone)]
pub struct GraphQlClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl GraphQlClient {
    /// Client for the content endpoint of `config`.
    pub fn new(config: &AdminConfig, token: Option<&str>) -> Result<Self> {
        Self::with_endpoint(config.graphql_endpoint()?, config, token)
    }

    /// Client for an arbitrary endpoint, sharing the timeout setting.
    pub fn with_endpoint(endpoint: Url, config: &AdminConfig, token: Option<&str>) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|_| ApiError::Config("session token is not a valid header".to_string()))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ApiError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Run `document` and return the `data` object.
    pub async fn execute<V: Serialize>(&self, document: &str, variables: V) -> Result<Value> {
        tracing::debug!(endpoint = %self.endpoint, "graphql request");
        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&Request {
                query: document,
                variables,
            })
            .send()
            .await?;
        self.handle_response(response).await
    }

    /// Run `document` and decode `data.<field>`.
    pub async fn query_field<D, V>(&self, document: &str, variables: V, field: &str) -> Result<D>
    where
        D: DeserializeOwned,
        V: Serialize,
    {
        let data = self.execute(document, variables).await?;
        take_field(data, field)
    }

    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Unauthorized);
        }
        if !status.is_success() && status != StatusCode::BAD_REQUEST {
            tracing::warn!(%status, "graphql endpoint returned an error status");
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        // GraphQL servers report validation failures as 400 with an errors array.
        let body: Response = response.json().await?;
        if let Some(first) = body.errors.into_iter().next() {
            if first.message == UNAUTHENTICATED {
                return Err(ApiError::Unauthorized);
            }
            return Err(ApiError::GraphQl {
                message: first.message,
            });
        }
        if status == StatusCode::BAD_REQUEST {
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }
        body.data
            .ok_or_else(|| ApiError::Decode("response carried no data".to_string()))
    }
}

/// Decode `data[field]`. A JSON `null` decodes as whatever `D` makes of it.
pub(crate) fn take_field<D: DeserializeOwned>(mut data: Value, field: &str) -> Result<D> {
    let value = data
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| ApiError::Decode(format!("missing field `{field}`")))?;
    serde_json::from_value(value).map_err(|e| ApiError::Decode(format!("{field}: {e}")))
}

impl ContentApi for GraphQlClient {
    async fn list<T: Record>(&self, query: &ListQuery) -> Result<Page<T>> {
        let spec = T::DOMAIN.spec();
        self.query_field(&documents::list::<T>(), query, spec.list_field)
            .await
    }

    async fn get<T: Record>(&self, id: &str) -> Result<Option<T>> {
        let spec = T::DOMAIN.spec();
        self.query_field(&documents::item::<T>(), json!({ "id": id }), spec.item_field)
            .await
    }

    async fn create<T: Record>(&self, input: &T::Input) -> Result<T> {
        let field = format!("create{}", T::DOMAIN.spec().type_name);
        tracing::info!(domain = %T::DOMAIN, "creating record");
        self.query_field(&documents::create::<T>(), json!({ "input": input }), &field)
            .await
    }

    async fn update<T: Record>(&self, id: &str, input: &T::Input) -> Result<T> {
        let field = format!("update{}", T::DOMAIN.spec().type_name);
        tracing::info!(domain = %T::DOMAIN, id, "updating record");
        let updated: Option<T> = self
            .query_field(
                &documents::update::<T>(),
                json!({ "id": id, "input": input }),
                &field,
            )
            .await?;
        updated.ok_or_else(|| ApiError::NotFound {
            domain: T::DOMAIN,
            id: id.to_string(),
        })
    }

    async fn delete<T: Record>(&self, id: &str) -> Result<()> {
        let field = format!("delete{}", T::DOMAIN.spec().type_name);
        tracing::info!(domain = %T::DOMAIN, id, "deleting record");
        let deleted: Option<Value> = self
            .query_field(&documents::delete::<T>(), json!({ "id": id }), &field)
            .await?;
        match deleted {
            Some(_) => Ok(()),
            None => Err(ApiError::NotFound {
                domain: T::DOMAIN,
                id: id.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_creation() {
        let config = AdminConfig::default();
        let client = GraphQlClient::new(&config, Some("secret")).unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost:8000/graphql");
    }

    #[test]
    fn take_field_reports_missing_keys() {
        let data = json!({ "banner": null });
        let absent: Option<Value> = take_field(data.clone(), "banner").unwrap();
        assert!(absent.is_none());
        assert!(matches!(
            take_field::<Option<Value>>(data, "faq"),
            Err(ApiError::Decode(_))
        ));
    }
}
