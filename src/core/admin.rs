use crate::domain::model::{
    AdminSettings, AdminUser, ContentItem, ContentStatusChange, GradeChange, NotificationRecord,
    NotificationRequest,
};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SajuError};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use url::Url;

pub const SETTINGS_PATH: &str = "/api/saju/settings";
pub const USERS_PATH: &str = "/api/user-management/users";
pub const CONTENTS_PATH: &str = "/api/content-management/contents";
pub const NOTIFICATION_HISTORY_PATH: &str = "/api/notification/history";
pub const NOTIFICATION_SEND_PATH: &str = "/api/notification/send";

impl Validate for AdminSettings {
    fn validate(&self) -> Result<()> {
        let geo = &self.geo_defaults;
        validate_non_empty_string("geo_defaults.city", &geo.city)?;
        validate_non_empty_string("geo_defaults.timezone", &geo.timezone)?;
        validate_range("geo_defaults.latitude", geo.latitude, -90.0, 90.0)?;
        validate_range("geo_defaults.longitude", geo.longitude, -180.0, 180.0)?;
        Ok(())
    }
}

/// Typed client for the admin dashboard endpoints.
///
/// Every call returns the backend's answer or an error; nothing falls back
/// to defaults here. Callers that want a stale-but-usable view do that
/// themselves.
#[derive(Debug, Clone)]
pub struct AdminClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl AdminClient {
    pub fn new(client: Client, base_url: impl Into<String>, timeout: Duration) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client,
            base_url,
            timeout,
        }
    }

    pub fn from_config<C: ConfigProvider>(client: Client, config: &C) -> Self {
        Self::new(client, config.api_base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_settings(&self) -> Result<AdminSettings> {
        self.get_json(self.endpoint(SETTINGS_PATH, &[])?).await
    }

    pub async fn update_settings(&self, settings: &AdminSettings) -> Result<AdminSettings> {
        settings.validate()?;
        let url = self.endpoint(SETTINGS_PATH, &[])?;
        self.send_json(Method::PUT, url, settings).await
    }

    pub async fn list_users(&self) -> Result<Vec<AdminUser>> {
        self.get_json(self.endpoint(USERS_PATH, &[])?).await
    }

    pub async fn update_user_grade(
        &self,
        user_id: &str,
        new_grade: &str,
        reason: &str,
    ) -> Result<AdminUser> {
        validate_non_empty_string("user_id", user_id)?;
        validate_non_empty_string("new_grade", new_grade)?;
        let body = GradeChange {
            new_grade: new_grade.to_string(),
            reason: reason.to_string(),
        };
        let url = self.endpoint(USERS_PATH, &[user_id, "grade"])?;
        self.send_json(Method::PUT, url, &body).await
    }

    pub async fn list_contents(&self) -> Result<Vec<ContentItem>> {
        self.get_json(self.endpoint(CONTENTS_PATH, &[])?).await
    }

    pub async fn update_content_status(
        &self,
        content_id: &str,
        status: &str,
    ) -> Result<ContentItem> {
        validate_non_empty_string("content_id", content_id)?;
        validate_non_empty_string("status", status)?;
        let body = ContentStatusChange {
            status: status.to_string(),
        };
        let url = self.endpoint(CONTENTS_PATH, &[content_id, "status"])?;
        self.send_json(Method::PUT, url, &body).await
    }

    pub async fn delete_content(&self, content_id: &str) -> Result<()> {
        validate_non_empty_string("content_id", content_id)?;
        let url = self.endpoint(CONTENTS_PATH, &[content_id])?;
        self.execute(self.request(Method::DELETE, url)).await?;
        Ok(())
    }

    pub async fn list_notifications(&self) -> Result<Vec<NotificationRecord>> {
        self.get_json(self.endpoint(NOTIFICATION_HISTORY_PATH, &[])?)
            .await
    }

    pub async fn send_notification(
        &self,
        notification_type: &str,
        user_ids: &[String],
        content: &str,
    ) -> Result<serde_json::Value> {
        validate_non_empty_string("notification_type", notification_type)?;
        validate_non_empty_string("content", content)?;
        if user_ids.is_empty() {
            return Err(SajuError::ValidationError {
                message: "A notification needs at least one recipient".to_string(),
            });
        }
        let body = NotificationRequest {
            notification_type: notification_type.to_string(),
            user_ids: user_ids.to_vec(),
            content: content.to_string(),
        };
        let url = self.endpoint(NOTIFICATION_SEND_PATH, &[])?;
        self.send_json(Method::POST, url, &body).await
    }

    /// Joins `path` onto the base url and appends each id as one
    /// percent-encoded path segment.
    fn endpoint(&self, path: &str, ids: &[&str]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path)).map_err(|e| {
            SajuError::InvalidConfigValueError {
                field: "api.base_url".to_string(),
                value: self.base_url.clone(),
                reason: e.to_string(),
            }
        })?;
        if !ids.is_empty() {
            for id in ids {
                validate_path_segment(id)?;
            }
            url.path_segments_mut()
                .map_err(|_| SajuError::InvalidConfigValueError {
                    field: "api.base_url".to_string(),
                    value: self.base_url.clone(),
                    reason: "cannot carry path segments".to_string(),
                })?
                .extend(ids);
        }
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("{} {}", method, url);
        self.client.request(method, url).timeout(self.timeout)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
        let response = self.execute(self.request(Method::GET, url)).await?;
        Ok(response.json().await?)
    }

    async fn send_json<B: Serialize, T: DeserializeOwned>(
        &self,
        method: Method,
        url: Url,
        body: &B,
    ) -> Result<T> {
        let response = self.execute(self.request(method, url).json(body)).await?;
        Ok(response.json().await?)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await?;
        let status = response.status();
        let endpoint = response.url().path().to_string();
        tracing::debug!("{} -> {}", endpoint, status);

        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!("Admin API {} failed with {}", endpoint, status);
        Err(SajuError::ApiStatusError {
            status: status.as_u16(),
            endpoint,
            body,
        })
    }
}

/// `.` and `..` would be resolved away by the url parser and address a
/// parent resource instead of the id.
fn validate_path_segment(id: &str) -> Result<()> {
    if id == "." || id == ".." {
        return Err(SajuError::ValidationError {
            message: format!("'{}' is not a valid resource id", id),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::GeoDefaults;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let client = AdminClient::new(Client::new(), "http://localhost:8000/", Duration::from_secs(1));
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_settings_validation() {
        assert!(AdminSettings::default().validate().is_ok());

        let bad = AdminSettings {
            geo_defaults: GeoDefaults {
                latitude: 91.0,
                ..GeoDefaults::default()
            },
            ..AdminSettings::default()
        };
        assert!(bad.validate().is_err());

        let bad = AdminSettings {
            geo_defaults: GeoDefaults {
                timezone: " ".to_string(),
                ..GeoDefaults::default()
            },
            ..AdminSettings::default()
        };
        assert!(bad.validate().is_err());
    }

    #[tokio::test]
    async fn test_empty_recipients_rejected_before_request() {
        // unroutable base url: the call must fail on validation, not on the network
        let client = AdminClient::new(Client::new(), "http://127.0.0.1:9", Duration::from_millis(50));
        let err = tokio_test::assert_err!(client.send_notification("push", &[], "hi").await);
        assert!(matches!(err, SajuError::ValidationError { .. }));
    }

    #[test]
    fn test_ids_are_encoded_as_single_segments() {
        let client = AdminClient::new(Client::new(), "http://localhost:8000/", Duration::from_secs(1));

        let url = client.endpoint(USERS_PATH, &["u1?x=1", "grade"]).unwrap();
        assert_eq!(url.path(), "/api/user-management/users/u1%3Fx=1/grade");
        assert_eq!(url.query(), None);

        let url = client.endpoint(CONTENTS_PATH, &["a/b#c"]).unwrap();
        assert_eq!(url.path(), "/api/content-management/contents/a%2Fb%23c");
        assert_eq!(url.fragment(), None);

        assert!(client.endpoint(CONTENTS_PATH, &[".."]).is_err());
    }
}
