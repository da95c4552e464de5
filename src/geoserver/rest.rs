//! geoserver::rest
//!
//! GeoServer catalog implementation over the REST API.
//!
//! # Design
//!
//! This module implements the `CoverageCatalog` trait against GeoServer's
//! JSON REST endpoints:
//!
//! - `POST {base}workspaces/{ws}/coveragestores` - create a coverage store
//! - `POST {base}workspaces/{ws}/coveragestores/{store}/coverages` - publish
//!   a coverage
//! - `PUT {base}layers/{ws}:{layer}` - set the default style
//!
//! Request bodies are typed `Serialize` structs so field names, nesting, and
//! ordering match the GeoServer schema exactly.
//!
//! # Authentication
//!
//! Static basic credentials from the configuration, sent on every request.
//!
//! # Failure handling
//!
//! A response with an unexpected status becomes a failed [`StepReport`]
//! carrying the status code and raw body. Transport faults become
//! [`CatalogError::Network`] and propagate to the caller.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::Serialize;

use super::traits::{CatalogError, CoverageCatalog};
use crate::core::config::Config;
use crate::core::types::{PublishStep, StepReport};

/// User-Agent header value for API requests.
const USER_AGENT_VALUE: &str = "geopub-cli";

/// Interpolation methods advertised on every published coverage.
const INTERPOLATION_METHODS: &[&str] = &["nearest neighbor", "bilinear", "bicubic"];

/// Default interpolation method for published coverages.
const DEFAULT_INTERPOLATION: &str = "nearest neighbor";

/// Spatial reference system for published coverages.
const SRS: &str = "EPSG:4326";

/// Vocabulary marker keyword attached to every coverage.
const VOCABULARY_KEYWORD: &str = "type\\@language=fr\\;\\@vocabulary=test\\;";

/// GeoServer REST catalog client.
///
/// Holds the connection configuration and a reusable HTTP client; no other
/// state. One instance drives an entire batch.
pub struct GeoServerRest {
    /// HTTP client for making requests.
    client: Client,
    /// REST base URL, ending with `/`.
    base_url: String,
    /// Workspace receiving stores, layers, and style references.
    workspace: String,
    /// Basic-auth username.
    username: String,
    /// Basic-auth password.
    password: String,
}

// Custom Debug to avoid exposing the password.
impl std::fmt::Debug for GeoServerRest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeoServerRest")
            .field("base_url", &self.base_url)
            .field("workspace", &self.workspace)
            .field("username", &self.username)
            .finish()
    }
}

impl GeoServerRest {
    /// Create a client from loaded configuration.
    pub fn new(config: &Config) -> Self {
        GeoServerRest {
            client: Client::new(),
            base_url: config.base_url.clone(),
            workspace: config.workspace_name.clone(),
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    /// Common headers for API requests.
    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));
        headers
    }

    /// URL of the workspace's coverage store collection.
    fn coveragestores_url(&self) -> String {
        format!("{}workspaces/{}/coveragestores", self.base_url, self.workspace)
    }

    /// URL of a store's coverage collection.
    fn coverages_url(&self, store: &str) -> String {
        format!(
            "{}workspaces/{}/coveragestores/{}/coverages",
            self.base_url, self.workspace, store
        )
    }

    /// URL of a published layer.
    fn layer_url(&self, layer: &str) -> String {
        format!("{}layers/{}:{}", self.base_url, self.workspace, layer)
    }

    /// Coverage body for `publish_layer`.
    fn coverage_body(&self, store: &str, layer: &str) -> CoverageRequest {
        CoverageRequest {
            coverage: Coverage {
                default_interpolation_method: DEFAULT_INTERPOLATION,
                description: format!("{} layer", layer),
                enabled: true,
                interpolation_methods: StringList {
                    string: INTERPOLATION_METHODS.iter().map(|s| s.to_string()).collect(),
                },
                keywords: StringList {
                    string: vec![
                        store.to_string(),
                        "WCS".to_string(),
                        "GeoTIFF".to_string(),
                        VOCABULARY_KEYWORD.to_string(),
                    ],
                },
                name: layer.to_string(),
                namespace: NamespaceRef {
                    href: format!(
                        "{}/workspaces/{}/coveragestores/{}/{}",
                        self.base_url, self.workspace, store, layer
                    ),
                    name: layer.to_string(),
                },
                request_srs: StringList {
                    string: vec![SRS.to_string()],
                },
                response_srs: StringList {
                    string: vec![SRS.to_string()],
                },
                srs: SRS,
                store: StoreRef {
                    class: "coverageStore",
                    href: format!(
                        "{}/workspaces/{}/coveragestores/{}.json",
                        self.base_url, self.workspace, store
                    ),
                    name: format!("{}:{}", self.workspace, store),
                },
                title: layer.to_string(),
            },
        }
    }

    /// Send a request and fold the response into a step report.
    ///
    /// Only transport faults become `Err`; any readable response, whatever
    /// its status, becomes an `Ok` report.
    async fn execute(
        &self,
        request: RequestBuilder,
        step: PublishStep,
        expected: StatusCode,
    ) -> Result<StepReport, CatalogError> {
        let response = request
            .basic_auth(&self.username, Some(&self.password))
            .headers(Self::headers())
            .send()
            .await
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = response.status();
        if status == expected {
            Ok(StepReport::success(step))
        } else {
            let body = response
                .text()
                .await
                .map_err(|e| CatalogError::Network(e.to_string()))?;
            Ok(StepReport::failure(step, status.as_u16(), body))
        }
    }
}

#[async_trait]
impl CoverageCatalog for GeoServerRest {
    async fn create_store(
        &self,
        store: &str,
        source_url: &str,
    ) -> Result<StepReport, CatalogError> {
        let body = CoverageStoreRequest {
            coverage_store: CoverageStore {
                name: store.to_string(),
                description: store.to_string(),
                kind: "GeoTIFF",
                workspace: self.workspace.clone(),
                enabled: true,
                url: source_url.to_string(),
            },
        };

        let request = self.client.post(self.coveragestores_url()).json(&body);
        self.execute(request, PublishStep::CreateStore, StatusCode::CREATED)
            .await
    }

    async fn publish_layer(&self, store: &str, layer: &str) -> Result<StepReport, CatalogError> {
        let body = self.coverage_body(store, layer);

        let request = self.client.post(self.coverages_url(store)).json(&body);
        self.execute(request, PublishStep::PublishLayer, StatusCode::CREATED)
            .await
    }

    async fn set_default_style(
        &self,
        layer: &str,
        style: &str,
    ) -> Result<StepReport, CatalogError> {
        let body = LayerStyleRequest {
            layer: LayerStyle {
                name: layer.to_string(),
                default_style: StyleRef {
                    name: format!("{}:{}", self.workspace, style),
                },
            },
        };

        let request = self.client.put(self.layer_url(layer)).json(&body);
        self.execute(request, PublishStep::SetDefaultStyle, StatusCode::OK)
            .await
    }
}

// =============================================================================
// Request bodies (GeoServer schema; field order matters for the wire bytes)
// =============================================================================

#[derive(Debug, Serialize)]
struct CoverageStoreRequest {
    #[serde(rename = "coverageStore")]
    coverage_store: CoverageStore,
}

#[derive(Debug, Serialize)]
struct CoverageStore {
    name: String,
    description: String,
    #[serde(rename = "type")]
    kind: &'static str,
    workspace: String,
    enabled: bool,
    url: String,
}

#[derive(Debug, Serialize)]
struct CoverageRequest {
    coverage: Coverage,
}

#[derive(Debug, Serialize)]
struct Coverage {
    #[serde(rename = "defaultInterpolationMethod")]
    default_interpolation_method: &'static str,
    description: String,
    enabled: bool,
    #[serde(rename = "interpolationMethods")]
    interpolation_methods: StringList,
    keywords: StringList,
    name: String,
    namespace: NamespaceRef,
    #[serde(rename = "requestSRS")]
    request_srs: StringList,
    #[serde(rename = "responseSRS")]
    response_srs: StringList,
    srs: &'static str,
    store: StoreRef,
    title: String,
}

/// GeoServer's JSON spelling of a string array.
#[derive(Debug, Serialize)]
struct StringList {
    string: Vec<String>,
}

#[derive(Debug, Serialize)]
struct NamespaceRef {
    href: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct StoreRef {
    #[serde(rename = "@class")]
    class: &'static str,
    href: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct LayerStyleRequest {
    layer: LayerStyle,
}

#[derive(Debug, Serialize)]
struct LayerStyle {
    name: String,
    #[serde(rename = "defaultStyle")]
    default_style: StyleRef,
}

#[derive(Debug, Serialize)]
struct StyleRef {
    name: String,
}
