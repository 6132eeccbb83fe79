//! Redirect Login
//!
//! Glue for a hosted identity provider using the browser redirect flow:
//! build the authorize/logout URLs, read the token back from the callback
//! fragment, and fetch the user's profile from the provider. The token is
//! kept for the rest of the tab's life so a reload resumes the session.

use async_trait::async_trait;
use reqwest::Client;

use crate::api::ApiError;
use crate::config::IdentityConfig;
use crate::models::UserProfile;
use crate::session::{IdentityProvider, Session, SessionError};

/// Key under which the pending login's state token is stashed
pub const STATE_KEY: &str = "bookhive.login_state";

/// Key under which the access token is kept for the rest of the tab's life
pub const TOKEN_KEY: &str = "bookhive.access_token";

/// Browser capabilities the redirect flow needs
pub trait BrowserEnv {
    /// Origin of the running app, e.g. `http://localhost:8080`
    fn origin(&self) -> String;

    /// Navigate away from the app
    fn redirect(&self, url: &str) -> Result<(), SessionError>;

    /// Return the current URL fragment (without `#`) and clear it
    fn take_fragment(&self) -> Option<String>;

    /// Keep a value across the login round trip
    fn stash(&self, key: &str, value: &str);

    /// Read and forget a stashed value
    fn take_stashed(&self, key: &str) -> Option<String>;

    /// Unpredictable token for the login `state` parameter
    fn random_token(&self) -> String;
}

impl<E: BrowserEnv + ?Sized> BrowserEnv for &E {
    fn origin(&self) -> String {
        (**self).origin()
    }

    fn redirect(&self, url: &str) -> Result<(), SessionError> {
        (**self).redirect(url)
    }

    fn take_fragment(&self) -> Option<String> {
        (**self).take_fragment()
    }

    fn stash(&self, key: &str, value: &str) {
        (**self).stash(key, value)
    }

    fn take_stashed(&self, key: &str) -> Option<String> {
        (**self).take_stashed(key)
    }

    fn random_token(&self) -> String {
        (**self).random_token()
    }
}

/// Parameters returned by the provider in the callback fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CallbackParams {
    pub access_token: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

fn tenant_base(domain: &str) -> String {
    let domain = domain.trim_end_matches('/');
    if domain.starts_with("http://") || domain.starts_with("https://") {
        domain.to_string()
    } else {
        format!("https://{}", domain)
    }
}

/// Provider login page for this app
pub fn authorize_url(config: &IdentityConfig, redirect_uri: &str, state: &str) -> String {
    format!(
        "{}/authorize?response_type=token&client_id={}&redirect_uri={}&scope={}&state={}",
        tenant_base(&config.domain),
        urlencoding::encode(&config.client_id),
        urlencoding::encode(redirect_uri),
        urlencoding::encode(&config.scope),
        urlencoding::encode(state),
    )
}

/// Provider logout endpoint returning to `return_to`
pub fn logout_url(config: &IdentityConfig, return_to: &str) -> String {
    format!(
        "{}/v2/logout?client_id={}&returnTo={}",
        tenant_base(&config.domain),
        urlencoding::encode(&config.client_id),
        urlencoding::encode(return_to),
    )
}

/// Provider endpoint describing the token's user
pub fn userinfo_url(config: &IdentityConfig) -> String {
    format!("{}/userinfo", tenant_base(&config.domain))
}

/// Decode a callback fragment.
///
/// Returns `None` when the fragment carries neither a token nor an error.
pub fn parse_callback(fragment: &str) -> Option<CallbackParams> {
    let mut params = CallbackParams::default();

    for pair in fragment.trim_start_matches('#').split('&') {
        let Some((key, raw)) = pair.split_once('=') else {
            continue;
        };
        let value = urlencoding::decode(&raw.replace('+', " "))
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| raw.to_string());

        match key {
            "access_token" => params.access_token = Some(value),
            "state" => params.state = Some(value),
            "error" => params.error = Some(value),
            "error_description" => params.error_description = Some(value),
            _ => {}
        }
    }

    if params.access_token.is_none() && params.error.is_none() {
        None
    } else {
        Some(params)
    }
}

/// [`IdentityProvider`] speaking the hosted redirect flow
pub struct RedirectIdentity<E> {
    config: IdentityConfig,
    env: E,
    client: Client,
}

impl<E: BrowserEnv> RedirectIdentity<E> {
    pub fn new(config: IdentityConfig, env: E) -> Self {
        Self {
            config,
            env,
            client: Client::new(),
        }
    }

    fn redirect_uri(&self) -> String {
        self.config
            .redirect_uri
            .clone()
            .unwrap_or_else(|| self.env.origin())
    }

    async fn fetch_user(&self, access_token: &str) -> Result<UserProfile, SessionError> {
        let response = self
            .client
            .get(userinfo_url(&self.config))
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let user = response.json().await.map_err(ApiError::from)?;
        Ok(user)
    }

    /// Re-validate a token kept from an earlier login in this tab
    async fn resume(&self) -> Result<Session, SessionError> {
        let Some(token) = self.env.take_stashed(TOKEN_KEY) else {
            return Ok(Session::anonymous());
        };

        match self.fetch_user(&token).await {
            Ok(user) => {
                self.env.stash(TOKEN_KEY, &token);
                tracing::debug!(user = %user.name, "Session resumed");
                Ok(Session::signed_in(user))
            }
            Err(SessionError::UserInfo(e)) if e.is_rejection() => {
                tracing::info!("Stored session no longer valid: {}", e);
                Ok(Session::anonymous())
            }
            Err(e) => {
                // Provider unreachable; try again on the next load
                self.env.stash(TOKEN_KEY, &token);
                Err(e)
            }
        }
    }
}

#[async_trait(?Send)]
impl<E: BrowserEnv> IdentityProvider for RedirectIdentity<E> {
    async fn restore(&self) -> Result<Session, SessionError> {
        let Some(params) = self.env.take_fragment().as_deref().and_then(parse_callback) else {
            return self.resume().await;
        };

        let expected = self.env.take_stashed(STATE_KEY);

        if let Some(error) = params.error {
            return Err(SessionError::Provider {
                error,
                description: params.error_description,
            });
        }

        if expected.is_none() || expected != params.state {
            return Err(SessionError::StateMismatch);
        }

        let Some(token) = params.access_token else {
            return Ok(Session::anonymous());
        };

        let user = self.fetch_user(&token).await?;
        self.env.stash(TOKEN_KEY, &token);
        tracing::info!(user = %user.name, "Signed in");
        Ok(Session::signed_in(user))
    }

    fn login(&self) -> Result<(), SessionError> {
        if !self.config.is_configured() {
            return Err(SessionError::NotConfigured);
        }

        let state = self.env.random_token();
        self.env.stash(STATE_KEY, &state);
        self.env
            .redirect(&authorize_url(&self.config, &self.redirect_uri(), &state))
    }

    fn logout(&self) -> Result<(), SessionError> {
        if !self.config.is_configured() {
            return Err(SessionError::NotConfigured);
        }

        self.env.take_stashed(TOKEN_KEY);
        self.env
            .redirect(&logout_url(&self.config, &self.env.origin()))
    }
}
