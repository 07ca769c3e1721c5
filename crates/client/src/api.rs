use board::{
    ChallengeId, LeaderboardView,
    dto::{
        leaderboard::ChallengeLeaderboardResponse,
        session::{LoginRequest, LoginResponse, ProfileResponse, UserProfile},
    },
};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};

use crate::{ClientConfig, Result, error::ClientError, session::Session};

/// Client for the platform REST API.
///
/// Requests carry the session's bearer token when one is set. Any `401`
/// answer signs the session out, the token being expired or revoked.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
    session: Session,
}

impl ApiClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            base_url: config.base_url,
            client,
            session: Session::new(),
        })
    }

    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        token: Option<String>,
    ) -> Result<T> {
        let request = match token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status == StatusCode::UNAUTHORIZED {
            warn!("API rejected credentials, clearing session");
            self.session.clear().await;
        }

        if !status.is_success() {
            return Err(ClientError::from_status(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }

    pub async fn challenge_leaderboard(
        &self,
        challenge: &ChallengeId,
    ) -> Result<ChallengeLeaderboardResponse> {
        let url = self.url(&format!("/challenges/{}/leaderboard", challenge));
        debug!("Fetching challenge leaderboard: {}", url);

        let response: ChallengeLeaderboardResponse = self
            .send(self.client.get(&url), self.session.token().await)
            .await?;

        debug!(
            "Leaderboard for '{}': {} timeline events, {} ranked entries",
            challenge,
            response.timeline.len(),
            response.leaderboard.len()
        );

        Ok(response)
    }

    /// Fetches the leaderboard once and turns the outcome into view state.
    /// Failures are not retried.
    pub async fn leaderboard_view(&self, challenge: &ChallengeId) -> LeaderboardView {
        LeaderboardView::from_fetch(self.challenge_leaderboard(challenge).await)
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<UserProfile> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response: LoginResponse = self
            .send(self.client.post(self.url("/auth/login")).json(&request), None)
            .await?;

        info!("Signed in as {}", response.user.username);
        self.session
            .sign_in(response.access_token, response.user.clone())
            .await;

        Ok(response.user)
    }

    /// Re-establishes a session from a stored token. An invalid token leaves
    /// the session signed out.
    pub async fn restore(&self, token: &str) -> Result<UserProfile> {
        let result: Result<ProfileResponse> = self
            .send(
                self.client.get(self.url("/auth/validate-token")),
                Some(token.to_string()),
            )
            .await;

        match result {
            Ok(response) => {
                self.session
                    .sign_in(token.to_string(), response.user.clone())
                    .await;
                Ok(response.user)
            }
            Err(e) => {
                self.session.clear().await;
                Err(e)
            }
        }
    }

    pub async fn refresh_user(&self) -> Result<UserProfile> {
        let response: ProfileResponse = self
            .send(
                self.client.get(self.url("/auth/profile")),
                self.session.token().await,
            )
            .await?;

        self.session.set_user(response.user.clone()).await;
        Ok(response.user)
    }

    pub async fn logout(&self) {
        self.session.clear().await;
        info!("Signed out");
    }
}
