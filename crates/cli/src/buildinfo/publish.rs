// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Publishing build-info documents to the server.

use reqwest::header::CONTENT_TYPE;
use thiserror::Error;

use crate::buildinfo::BuildInfo;
use crate::config::ServerConfig;

/// Content type the build-info endpoint expects.
pub const BUILD_INFO_CONTENT_TYPE: &str = "application/vnd.org.jfrog.artifactory+json";

/// Header carrying an API key when one is configured.
pub const API_KEY_HEADER: &str = "X-JFrog-Art-Api";

/// Failures while sending a document to the server.
#[derive(Debug, Error)]
pub enum PublishError {
    #[error("no server url configured; set [server] url in quarry.toml or pass --url")]
    MissingUrl,
    #[error("server rejected build info: status {status}\n{body}")]
    ServerRejection { status: u16, body: String },
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("serializing build info: {0}")]
    Json(#[from] serde_json::Error),
}

/// PUT the document to the build endpoint. Anything but a 204 from the
/// server is a rejection, reported with the response body.
pub fn publish_build_info(
    server: &ServerConfig,
    build_info: &BuildInfo,
) -> Result<(), PublishError> {
    let Some(base) = server.url.as_deref() else {
        return Err(PublishError::MissingUrl);
    };
    let payload = serde_json::to_string(build_info)?;

    let client = reqwest::blocking::Client::new();
    let mut request = client
        .put(build_api_url(base))
        .header(CONTENT_TYPE, BUILD_INFO_CONTENT_TYPE)
        .body(payload);
    if let Some(user) = &server.user {
        request = request.basic_auth(user, server.password.as_deref());
    }
    if let Some(api_key) = &server.api_key {
        request = request.header(API_KEY_HEADER, api_key);
    }

    let response = request.send()?;
    let status = response.status();
    let body = response.text()?;
    if status.as_u16() != 204 {
        return Err(PublishError::ServerRejection {
            status: status.as_u16(),
            body,
        });
    }
    tracing::debug!("server response: {status}");
    Ok(())
}

/// The build-info endpoint under a server base URL.
pub fn build_api_url(base: &str) -> String {
    format!("{}/api/build", base.trim_end_matches('/'))
}

/// Where the published build can be browsed.
pub fn browse_url(base: &str, name: &str, number: &str) -> String {
    format!("{}/webapp/builds/{name}/{number}", base.trim_end_matches('/'))
}

#[cfg(test)]
#[path = "publish_tests.rs"]
mod tests;
