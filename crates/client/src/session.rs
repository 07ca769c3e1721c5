use std::sync::Arc;

use board::dto::session::UserProfile;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user: Option<UserProfile>,
}

/// The signed-in user and their bearer token.
///
/// One session is created at startup and handed to every consumer; clones
/// share the same state. Only the login, restore, refresh and logout flows
/// of [`crate::ApiClient`] write to it, and the last write wins.
#[derive(Debug, Clone, Default)]
pub struct Session {
    state: Arc<RwLock<SessionState>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn token(&self) -> Option<String> {
        self.state.read().await.token.clone()
    }

    pub async fn user(&self) -> Option<UserProfile> {
        self.state.read().await.user.clone()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.state.read().await.user.is_some()
    }

    pub async fn is_admin(&self) -> bool {
        self.state
            .read()
            .await
            .user
            .as_ref()
            .is_some_and(|user| user.is_admin)
    }

    pub(crate) async fn sign_in(&self, token: String, user: UserProfile) {
        let mut state = self.state.write().await;
        state.token = Some(token);
        state.user = Some(user);
    }

    pub(crate) async fn set_user(&self, user: UserProfile) {
        self.state.write().await.user = Some(user);
    }

    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.token = None;
        state.user = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use board::UserId;

    fn profile(is_admin: bool) -> UserProfile {
        UserProfile {
            id: UserId::from(1),
            username: "alice".to_string(),
            email: None,
            is_admin,
            total_points: None,
        }
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let session = Session::new();
        let handle = session.clone();

        session.sign_in("token".to_string(), profile(false)).await;

        assert_eq!(handle.token().await.as_deref(), Some("token"));
        assert!(handle.is_authenticated().await);
        assert!(!handle.is_admin().await);
    }

    #[tokio::test]
    async fn test_clear_signs_out() {
        let session = Session::new();
        session.sign_in("token".to_string(), profile(true)).await;
        assert!(session.is_admin().await);

        session.clear().await;

        assert!(session.token().await.is_none());
        assert!(session.user().await.is_none());
        assert!(!session.is_authenticated().await);
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let session = Session::new();
        session.sign_in("first".to_string(), profile(false)).await;
        session.sign_in("second".to_string(), profile(true)).await;

        assert_eq!(session.token().await.as_deref(), Some("second"));
        assert!(session.is_admin().await);
    }
}
