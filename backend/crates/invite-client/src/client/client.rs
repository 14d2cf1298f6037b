use crate::client::responses::ErrorEnvelope;
use crate::{
    AccessResponse, ClaimResponse, ClientError, ClientResult, CodeAvailability, CoursesResponse,
    FeedResponse, UserResponse,
};

use log::debug;
use reqwest::{Client as ReqwestClient, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// HTTP client for the invite server REST API
#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    pub token: Option<String>,
    client: ReqwestClient,
}

impl Client {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Server URL (e.g., "http://127.0.0.1:8000")
    /// * `token` - Optional bearer token from the auth provider
    pub fn new(base_url: &str, token: Option<&str>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.map(String::from),
            client: ReqwestClient::new(),
        }
    }

    /// Same server and connection pool, different bearer token
    pub fn with_token(&self, token: Option<&str>) -> Self {
        Self {
            base_url: self.base_url.clone(),
            token: token.map(String::from),
            client: self.client.clone(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let req = self.client.request(method, &url);

        match self.token {
            Some(ref token) => req.bearer_auth(token),
            None => req,
        }
    }

    /// `{base}/api/codes/{id}` with `id` as one percent-encoded segment
    fn code_url(&self, id: &str) -> ClientResult<Url> {
        // Dot segments would be dropped from the path
        if id.is_empty() || id == "." || id == ".." {
            return Err(ClientError::invalid_url(format!("invalid invite code: {:?}", id)));
        }

        let mut url =
            Url::parse(&self.base_url).map_err(|e| ClientError::invalid_url(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| ClientError::invalid_url(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(["api", "codes", id]);

        Ok(url)
    }

    fn authorized(&self, method: Method, path: &str) -> ClientResult<reqwest::RequestBuilder> {
        if self.token.is_none() {
            return Err(ClientError::missing_token());
        }
        Ok(self.request(method, path))
    }

    /// Execute request, turning the `{message, code}` envelope into an API error
    async fn execute<T: DeserializeOwned>(&self, req: reqwest::RequestBuilder) -> ClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let message = match serde_json::from_slice::<ErrorEnvelope>(&bytes) {
                Ok(envelope) => {
                    debug!("API error {}: {}", envelope.code, envelope.message);
                    envelope.message
                }
                Err(_) => String::from_utf8_lossy(&bytes).into_owned(),
            };
            return Err(ClientError::api_error(status.as_u16(), message));
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    // =========================================================================
    // Invite Operations
    // =========================================================================

    /// Submit a phone number; the server texts two invite codes to it
    pub async fn request_codes(&self, phone: &str) -> ClientResult<UserResponse> {
        #[derive(Serialize)]
        struct CreateUserRequest<'a> {
            phone: &'a str,
        }

        let req = self
            .authorized(Method::POST, "/api/users")?
            .json(&CreateUserRequest { phone });
        self.execute(req).await
    }

    /// Redeem a code for the signed-in identity
    pub async fn claim_code(&self, code: &str) -> ClientResult<ClaimResponse> {
        #[derive(Serialize)]
        struct ClaimRequest<'a> {
            code: &'a str,
        }

        let req = self
            .authorized(Method::POST, "/api/codes/claim")?
            .json(&ClaimRequest { code });
        self.execute(req).await
    }

    /// Whether the signed-in identity has redeemed any code
    pub async fn check_access(&self) -> ClientResult<AccessResponse> {
        let req = self.authorized(Method::GET, "/api/access")?;
        self.execute(req).await
    }

    /// Whether a code exists and is still unclaimed. No token needed.
    pub async fn code_available(&self, id: &str) -> ClientResult<CodeAvailability> {
        let url = self.code_url(id)?;
        let req = self.client.get(url);
        self.execute(req).await
    }

    pub async fn current_user(&self) -> ClientResult<UserResponse> {
        let req = self.authorized(Method::GET, "/api/users/me")?;
        self.execute(req).await
    }

    // =========================================================================
    // Feed Operations
    // =========================================================================

    pub async fn list_courses(&self) -> ClientResult<CoursesResponse> {
        let req = self.request(Method::GET, "/api/courses");
        self.execute(req).await
    }

    /// Tests for a course, newest first. Server defaults apply to omitted filters.
    pub async fn feed(
        &self,
        course: Option<&str>,
        school: Option<&str>,
    ) -> ClientResult<FeedResponse> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(course) = course {
            query.push(("c", course));
        }
        if let Some(school) = school {
            query.push(("s", school));
        }

        let req = self.authorized(Method::GET, "/api/tests")?.query(&query);
        self.execute(req).await
    }
}
