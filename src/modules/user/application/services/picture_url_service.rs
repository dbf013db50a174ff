use async_trait::async_trait;
use tracing::error;

use crate::user::application::{
    domain::entities::{validate_username, PictureKind},
    ports::{
        incoming::use_cases::{PictureUrlError, PictureUrlUseCase},
        outgoing::{PictureQuery, UserQuery},
    },
};

#[derive(Debug, Clone)]
pub struct PictureUrlService<Q, P>
where
    Q: UserQuery + Send + Sync,
    P: PictureQuery + Send + Sync,
{
    users: Q,
    pictures: P,
}

impl<Q, P> PictureUrlService<Q, P>
where
    Q: UserQuery + Send + Sync,
    P: PictureQuery + Send + Sync,
{
    pub fn new(users: Q, pictures: P) -> Self {
        Self { users, pictures }
    }
}

#[async_trait]
impl<Q, P> PictureUrlUseCase for PictureUrlService<Q, P>
where
    Q: UserQuery + Send + Sync,
    P: PictureQuery + Send + Sync,
{
    async fn execute(&self, username: &str, kind: PictureKind) -> Result<String, PictureUrlError> {
        let username = validate_username(username).map_err(|_| PictureUrlError::UserNotFound)?;

        let user = self
            .users
            .find_by_username(&username)
            .await
            .map_err(|e| {
                error!(username = %username, "failed to fetch user: {}", e);
                PictureUrlError::QueryFailed(e.to_string())
            })?
            .ok_or(PictureUrlError::UserNotFound)?;

        self.pictures
            .latest_url(user.id, kind)
            .await
            .map_err(|e| {
                error!(user_id = %user.id, ?kind, "failed to fetch picture: {}", e);
                PictureUrlError::QueryFailed(e.to_string())
            })?
            .ok_or(PictureUrlError::PictureNotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::stubs::{sample_user, StubUserQuery};
    use crate::user::application::{
        domain::entities::UserId, ports::outgoing::PictureQueryError,
    };

    #[derive(Clone)]
    struct StubPictureQuery {
        result: Result<Option<String>, PictureQueryError>,
    }

    #[async_trait]
    impl PictureQuery for StubPictureQuery {
        async fn latest_url(
            &self,
            _user: UserId,
            _kind: PictureKind,
        ) -> Result<Option<String>, PictureQueryError> {
            self.result.clone()
        }
    }

    #[tokio::test]
    async fn resolves_latest_picture_url() {
        let users = StubUserQuery::with_users(vec![sample_user("jdoe")]);
        let pictures = StubPictureQuery {
            result: Ok(Some("https://unsplash.com/photos/x/download?w=200".into())),
        };

        let url = PictureUrlService::new(users, pictures)
            .execute("jdoe", PictureKind::Profile)
            .await
            .unwrap();

        assert_eq!(url, "https://unsplash.com/photos/x/download?w=200");
    }

    #[tokio::test]
    async fn unknown_user_is_not_found() {
        let users = StubUserQuery::with_users(vec![]);
        let pictures = StubPictureQuery {
            result: Ok(Some("unused".into())),
        };

        let result = PictureUrlService::new(users, pictures)
            .execute("ghost", PictureKind::Bio)
            .await;

        assert!(matches!(result, Err(PictureUrlError::UserNotFound)));
    }

    #[tokio::test]
    async fn missing_picture_is_not_found() {
        let users = StubUserQuery::with_users(vec![sample_user("jdoe")]);
        let pictures = StubPictureQuery { result: Ok(None) };

        let result = PictureUrlService::new(users, pictures)
            .execute("jdoe", PictureKind::Bio)
            .await;

        assert!(matches!(result, Err(PictureUrlError::PictureNotFound)));
    }

    #[tokio::test]
    async fn picture_store_failure_is_reported() {
        let users = StubUserQuery::with_users(vec![sample_user("jdoe")]);
        let pictures = StubPictureQuery {
            result: Err(PictureQueryError::DatabaseError("timeout".into())),
        };

        let result = PictureUrlService::new(users, pictures)
            .execute("jdoe", PictureKind::Profile)
            .await;

        assert!(matches!(result, Err(PictureUrlError::QueryFailed(_))));
    }
}
