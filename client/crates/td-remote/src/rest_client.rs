use crate::session_file::{SESSION_FILENAME, SessionFile};
use crate::{
    CredentialRecord, NewIdentity, ProfileUpdate, RemoteDataService, RemoteError, RemoteResult,
};

use td_config::RemoteConfig;
use td_core::{Identity, Notification, Project, Task};

use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info};
use reqwest::{Client as ReqwestClient, Method, RequestBuilder, Response, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use uuid::Uuid;

const REST_PREFIX: &str = "/rest/v1";
const USERS_TABLE: &str = "users";
const PROJECTS_TABLE: &str = "projects";
const TASKS_TABLE: &str = "tasks";
const NOTIFICATIONS_TABLE: &str = "notifications";

const CREDENTIAL_COLUMNS: &str = "id,username,email,password_hash";
const PROFILE_COLUMNS: &str = "id,username,email,bio,avatar,links";

/// HTTP client for a PostgREST-style data API
pub struct RestClient {
    pub base_url: String,
    api_key: String,
    client: ReqwestClient,
    session: RwLock<Option<Uuid>>,
    session_file: Option<SessionFile>,
}

impl RestClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Service URL (e.g., "https://example.supabase.co")
    /// * `api_key` - Public API key sent as `apikey` and bearer token
    /// * `timeout` - Per-request timeout
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> RemoteResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| RemoteError::config(e.to_string()))?;

        let client = ReqwestClient::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
            client,
            session: RwLock::new(None),
            session_file: None,
        })
    }

    /// Keep the session in `path` and restore whatever it already holds
    pub fn with_session_file(mut self, path: impl Into<PathBuf>) -> RemoteResult<Self> {
        let file = SessionFile::new(path);
        let stored = file.load()?;
        if let Some(id) = stored {
            info!("Restored stored session {id} from {}", file.path().display());
        }

        self.set_session(stored);
        self.session_file = Some(file);
        Ok(self)
    }

    /// Create a client from the `[remote]` config section, persisting the
    /// session under `config_dir`
    pub fn from_config(config: &RemoteConfig, config_dir: &Path) -> RemoteResult<Self> {
        let api_key = config
            .api_key
            .as_deref()
            .ok_or_else(|| RemoteError::config("remote.api_key is not configured"))?;

        Self::new(
            &config.url,
            api_key,
            Duration::from_secs(config.timeout_secs),
        )?
        .with_session_file(config_dir.join(SESSION_FILENAME))
    }

    /// Identity id of the cached session, if any
    pub fn session_identity_id(&self) -> Option<Uuid> {
        *self.session.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Build the URL for `table` with PostgREST filters as query pairs
    pub(crate) fn table_url(&self, table: &str, filters: &[(&str, String)]) -> RemoteResult<Url> {
        let mut url = Url::parse(&format!("{}{}/{}", self.base_url, REST_PREFIX, table))
            .map_err(|e| RemoteError::config(e.to_string()))?;

        if !filters.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in filters {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Build a request with the API key headers
    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("apikey", &self.api_key)
            .header("Authorization", format!("Bearer {}", self.api_key))
    }

    /// Execute request and turn non-success statuses into API errors
    async fn execute(&self, req: RequestBuilder) -> RemoteResult<Response> {
        let response = req.send().await?;
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::Null);

        let code = body
            .get("code")
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| status.as_u16().to_string());
        let message = body
            .get("message")
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| {
                if text.is_empty() {
                    status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_string()
                } else {
                    text.clone()
                }
            });

        Err(RemoteError::api_error(status.as_u16(), code, message))
    }

    /// Select rows from `table`
    async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        filters: &[(&str, String)],
    ) -> RemoteResult<Vec<T>> {
        let url = self.table_url(table, filters)?;
        debug!("GET {}", url.path());

        let response = self.execute(self.request(Method::GET, url)).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Write a JSON body without asking for the row back
    async fn write<B: Serialize + ?Sized>(
        &self,
        method: Method,
        table: &str,
        filters: &[(&str, String)],
        body: &B,
    ) -> RemoteResult<()> {
        let url = self.table_url(table, filters)?;
        debug!("{} {}", method, url.path());

        let req = self
            .request(method, url)
            .header("Prefer", "return=minimal")
            .json(body);
        self.execute(req).await?;
        Ok(())
    }

    fn set_session(&self, id: Option<Uuid>) {
        *self.session.write().unwrap_or_else(PoisonError::into_inner) = id;
    }

    /// Update the cached session and the session file together
    fn store_session(&self, id: Option<Uuid>) -> RemoteResult<()> {
        self.set_session(id);

        match (&self.session_file, id) {
            (Some(file), Some(id)) => file.save(id),
            (Some(file), None) => file.remove(),
            (None, _) => Ok(()),
        }
    }
}

fn eq_filter(value: impl std::fmt::Display) -> String {
    format!("eq.{value}")
}

#[async_trait]
impl RemoteDataService for RestClient {
    // =========================================================================
    // Identity Operations
    // =========================================================================

    async fn insert_identity(&self, identity: &NewIdentity) -> RemoteResult<()> {
        self.write(Method::POST, USERS_TABLE, &[], identity).await
    }

    async fn find_identities(&self, username: &str) -> RemoteResult<Vec<CredentialRecord>> {
        self.select(
            USERS_TABLE,
            &[
                ("select", CREDENTIAL_COLUMNS.to_string()),
                ("username", eq_filter(username)),
            ],
        )
        .await
    }

    async fn update_identity(&self, id: Uuid, update: &ProfileUpdate) -> RemoteResult<()> {
        self.write(Method::PATCH, USERS_TABLE, &[("id", eq_filter(id))], update)
            .await
    }

    async fn get_profile(&self, id: Uuid) -> RemoteResult<Option<Identity>> {
        let rows: Vec<Identity> = self
            .select(
                USERS_TABLE,
                &[
                    ("select", PROFILE_COLUMNS.to_string()),
                    ("id", eq_filter(id)),
                ],
            )
            .await?;

        Ok(rows.into_iter().next())
    }

    // =========================================================================
    // Dashboard Collections
    // =========================================================================

    async fn list_projects(&self, created_by: Uuid) -> RemoteResult<Vec<Project>> {
        self.select(
            PROJECTS_TABLE,
            &[
                ("select", "*".to_string()),
                ("created_by", eq_filter(created_by)),
            ],
        )
        .await
    }

    async fn list_tasks(&self, user_id: Uuid) -> RemoteResult<Vec<Task>> {
        self.select(
            TASKS_TABLE,
            &[
                ("select", "*".to_string()),
                (
                    "or",
                    format!("(created_by.eq.{user_id},assigned_to.eq.{user_id})"),
                ),
            ],
        )
        .await
    }

    async fn list_notifications(&self, user_id: Uuid) -> RemoteResult<Vec<Notification>> {
        self.select(
            NOTIFICATIONS_TABLE,
            &[
                ("select", "*".to_string()),
                ("user_id", eq_filter(user_id)),
                ("is_read", eq_filter(false)),
            ],
        )
        .await
    }

    // =========================================================================
    // Session Operations
    // =========================================================================

    async fn open_session(&self, identity: &Identity) -> RemoteResult<()> {
        self.store_session(Some(identity.id))?;
        info!("Session opened for {}", identity.id);
        Ok(())
    }

    async fn get_current_session(&self) -> RemoteResult<Option<Identity>> {
        let Some(id) = self.session_identity_id() else {
            return Ok(None);
        };

        let identity = self.get_profile(id).await?;
        if identity.is_none() {
            info!("Cached session {id} no longer has an identity row");
            self.store_session(None)?;
        }

        Ok(identity)
    }

    async fn sign_out_session(&self) -> RemoteResult<()> {
        self.store_session(None)
    }
}
