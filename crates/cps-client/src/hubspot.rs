//! HubSpot-backed [`SchemaService`] implementation over the CRM v3
//! properties API.
//!
//! Access token is read by the caller (CLI) and passed in; do not log it.

use serde::{Deserialize, Serialize};

use cps_schema::PropertyPayload;

use crate::api::{ClientError, CreateOutcome, Existence, GroupDescriptor, SchemaService};

/// Production base URL for the CRM properties API.
pub const DEFAULT_BASE_URL: &str = "https://api.hubapi.com/crm/v3/properties";

/// Duplicate-label rejection subcategory; surfaced as
/// [`CreateOutcome::DuplicateLabel`] so callers never string-match.
const NON_UNIQUE_LABEL: &str = "PropertyValidationError.NON_UNIQUE_PROPERTY_LABEL";

/// Bearer-token client for the CRM properties API.
#[derive(Debug, Clone)]
pub struct HubSpotSchemaClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl HubSpotSchemaClient {
    pub fn new(token: String) -> Self {
        Self::new_with_base_url(token, DEFAULT_BASE_URL.to_string())
    }

    pub fn new_with_base_url(token: String, base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            token,
        }
    }

    fn object_url(&self, object_type: &str) -> String {
        format!("{}/{object_type}", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Debug, Deserialize)]
struct GroupListResponse {
    #[serde(default)]
    results: Vec<GroupDescriptor>,
}

#[derive(Debug, Serialize)]
struct GroupCreatePayload<'a> {
    name: &'a str,
    label: &'a str,
    #[serde(rename = "displayOrder")]
    display_order: i32,
}

/// The slice of an error body we care about. HubSpot error responses carry
/// `status`, `message`, `category`, and sometimes `subCategory`.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(rename = "subCategory")]
    sub_category: Option<String>,
}

#[async_trait::async_trait]
impl SchemaService for HubSpotSchemaClient {
    async fn list_groups(&self, object_type: &str) -> Result<Vec<GroupDescriptor>, ClientError> {
        let url = format!("{}/groups", self.object_url(object_type));
        let resp = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: GroupListResponse = resp
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        Ok(body.results)
    }

    async fn create_group(
        &self,
        object_type: &str,
        name: &str,
        label: &str,
    ) -> Result<(), ClientError> {
        let url = format!("{}/groups", self.object_url(object_type));
        let payload = GroupCreatePayload {
            name,
            label,
            display_order: cps_schema::PROPERTY_GROUP_DISPLAY_ORDER,
        };

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.to_string()))?;

        let status = resp.status();
        if status.is_success() {
            Ok(())
        } else {
            let body = resp.text().await.unwrap_or_default();
            Err(ClientError::Api {
                status: status.as_u16(),
                body,
            })
        }
    }

    async fn property_exists(&self, object_type: &str, name: &str) -> Existence {
        let url = format!("{}/{name}", self.object_url(object_type));
        let resp = match self.http.get(&url).bearer_auth(&self.token).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!(object_type, property = name, error = %e, "existence check transport failure");
                return Existence::Unknown {
                    status: None,
                    detail: e.to_string(),
                };
            }
        };

        let status = resp.status();
        match status.as_u16() {
            200 => Existence::Exists,
            404 => Existence::Absent,
            s => {
                let detail = resp.text().await.unwrap_or_default();
                tracing::error!(object_type, property = name, status = s, %detail, "ambiguous existence response");
                Existence::Unknown {
                    status: Some(s),
                    detail,
                }
            }
        }
    }

    async fn create_property(
        &self,
        object_type: &str,
        payload: &PropertyPayload,
    ) -> CreateOutcome {
        let url = self.object_url(object_type);
        let resp = match self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(payload)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                return CreateOutcome::Failed {
                    status: None,
                    detail: e.to_string(),
                }
            }
        };

        let status = resp.status();
        if status.is_success() {
            return CreateOutcome::Created;
        }

        let body = resp.text().await.unwrap_or_default();
        let sub_category = serde_json::from_str::<ApiErrorBody>(&body)
            .ok()
            .and_then(|b| b.sub_category);

        if sub_category.as_deref() == Some(NON_UNIQUE_LABEL) {
            CreateOutcome::DuplicateLabel
        } else {
            CreateOutcome::Failed {
                status: Some(status.as_u16()),
                detail: body,
            }
        }
    }
}
