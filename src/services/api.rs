//! The request executor: builds, signs and sends API calls, retrying on
//! throttling responses.

use crate::config::Profile;
use crate::errors::CliError;
use crate::services::{input, signing};
use chrono::Utc;
use reqwest::blocking::Client;
use reqwest::Method;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Initial throttling interval between retries of a throttled call.
pub const API_RETRY_INTERVAL: Duration = Duration::from_millis(500);

/// The only status code that triggers an internal retry. Other error
/// statuses are surfaced to the caller for display, by policy.
const STATUS_THROTTLED: u16 = 429;

/// A response obtained from the API, consumed once by the formatter or the
/// report exporter.
pub struct ApiResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Makes signed calls to the API using one profile's settings. One request
/// is in flight at a time.
pub struct ApiClient {
    http: Client,
    base_url: String,
    profile: Profile,
}

impl ApiClient {
    pub fn new(profile: Profile, base_url: String) -> anyhow::Result<Self> {
        let http = Client::builder().build()?;
        Ok(ApiClient {
            http,
            base_url,
            profile,
        })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    /// Makes a single attempt at the call. A transport-level failure (no
    /// response at all) is `ApiUnreachable` and is never retried.
    fn try_request(
        &self,
        method: &Method,
        path: &str,
        body: Option<&[u8]>,
    ) -> anyhow::Result<ApiResponse> {
        let sig = signing::sign(&self.profile.access_key, method.as_str(), path, Utc::now())?;
        let mut req = self
            .http
            .request(method.clone(), format!("{}{}", self.base_url, path))
            .header("X-Els-Date", &sig.date)
            .header(reqwest::header::AUTHORIZATION, &sig.authorization);
        if let Some(b) = body {
            req = req.body(b.to_vec());
        }

        let rep = match req.send() {
            Ok(r) => r,
            Err(err) => {
                debug!(%method, path, %err, "could not access the API");
                return Err(CliError::ApiUnreachable.into());
            }
        };

        let status = rep.status().as_u16();
        let body = rep.bytes()?.to_vec();
        Ok(ApiResponse { status, body })
    }

    /// Attempts the call, retrying throttled (429) responses up to the
    /// profile's maximum try count. The last throttled response is returned
    /// as final once attempts are exhausted.
    pub fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> anyhow::Result<ApiResponse> {
        let max_tries = self.profile.max_api_tries.max(1);
        let mut attempt = 0;
        loop {
            attempt += 1;
            let rep = self.try_request(&method, path, body.as_deref())?;
            if rep.status != STATUS_THROTTLED || attempt >= max_tries {
                return Ok(rep);
            }
            debug!(%method, path, attempt, "throttled by the API, retrying");
            std::thread::sleep(API_RETRY_INTERVAL);
        }
    }

    /// Executes a call whose body comes from the given file or, if no file
    /// is given, from piped input. POST and PUT require a body; PATCH
    /// tolerates its absence since some endpoints accept an empty PATCH.
    pub fn call_with_input(
        &self,
        method: Method,
        path: &str,
        src: Option<&Path>,
    ) -> anyhow::Result<ApiResponse> {
        let body = if method == Method::POST || method == Method::PUT {
            Some(input::read_body(src)?)
        } else if method == Method::PATCH {
            input::read_body(src).ok()
        } else {
            None
        };
        self.execute(method, path, body)
    }

    /// Requests a new access key for the user. This is the only call made
    /// without a signature (it is what produces signing credentials) and the
    /// only one with an explicit timeout, taken from the profile.
    pub fn create_access_key(
        &self,
        email: &str,
        password: &str,
        expiry_days: u32,
    ) -> anyhow::Result<ApiResponse> {
        let path = format!("/users/{}/accessKeys?expiryDays={}", email, expiry_days);
        let rep = self
            .http
            .post(format!("{}{}", self.base_url, path))
            .timeout(Duration::from_secs(self.profile.api_timeout_secs))
            .json(&serde_json::json!({ "password": password }))
            .send();

        let rep = match rep {
            Ok(r) => r,
            Err(err) => {
                debug!(path, %err, "could not access the API");
                return Err(CliError::ApiUnreachable.into());
            }
        };

        let status = rep.status().as_u16();
        let body = rep.bytes()?.to_vec();
        Ok(ApiResponse { status, body })
    }
}
