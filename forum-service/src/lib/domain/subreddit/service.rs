use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::subreddit::errors::SubredditError;
use crate::domain::subreddit::models::CreateSubredditCommand;
use crate::domain::subreddit::models::NewSubreddit;
use crate::domain::subreddit::models::Subreddit;
use crate::domain::subreddit::models::SubredditName;
use crate::domain::subreddit::ports::SubredditRepository;
use crate::domain::subreddit::ports::SubredditServicePort;
use crate::domain::user::models::UserId;

/// Domain service implementation for subreddit operations.
pub struct SubredditService<SR>
where
    SR: SubredditRepository,
{
    repository: Arc<SR>,
}

impl<SR> SubredditService<SR>
where
    SR: SubredditRepository,
{
    pub fn new(repository: Arc<SR>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<SR> SubredditServicePort for SubredditService<SR>
where
    SR: SubredditRepository,
{
    async fn create_subreddit(
        &self,
        command: CreateSubredditCommand,
        owner: UserId,
    ) -> Result<Subreddit, SubredditError> {
        let subreddit = NewSubreddit {
            name: command.name,
            description: command.description,
            owner_id: owner,
        };

        self.repository.create(subreddit).await
    }

    async fn list_subreddits(&self) -> Result<Vec<Subreddit>, SubredditError> {
        self.repository.list_all().await
    }

    async fn get_subreddit(&self, name: &SubredditName) -> Result<Subreddit, SubredditError> {
        self.repository
            .find_by_name(name)
            .await?
            .ok_or(SubredditError::NotFound(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::subreddit::models::SubredditId;

    mock! {
        pub TestSubredditRepository {}

        #[async_trait]
        impl SubredditRepository for TestSubredditRepository {
            async fn create(&self, subreddit: NewSubreddit) -> Result<Subreddit, SubredditError>;
            async fn find_by_name(&self, name: &SubredditName) -> Result<Option<Subreddit>, SubredditError>;
            async fn list_all(&self) -> Result<Vec<Subreddit>, SubredditError>;
        }
    }

    fn stored(id: i64, name: &str, owner: i64) -> Subreddit {
        Subreddit {
            id: SubredditId(id),
            name: SubredditName::new(name.to_string()).unwrap(),
            description: None,
            owner_id: UserId(owner),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_subreddit_binds_owner() {
        let mut repository = MockTestSubredditRepository::new();

        repository
            .expect_create()
            .withf(|sub| sub.name.as_str() == "rust" && sub.owner_id == UserId(7))
            .times(1)
            .returning(|sub| {
                Ok(Subreddit {
                    id: SubredditId(1),
                    name: sub.name,
                    description: sub.description,
                    owner_id: sub.owner_id,
                    created_at: Utc::now(),
                })
            });

        let service = SubredditService::new(Arc::new(repository));

        let command = CreateSubredditCommand {
            name: SubredditName::new("rust".to_string()).unwrap(),
            description: Some("systems programming".to_string()),
        };

        let subreddit = service.create_subreddit(command, UserId(7)).await.unwrap();
        assert_eq!(subreddit.owner_id, UserId(7));
    }

    #[tokio::test]
    async fn test_create_subreddit_duplicate_name() {
        let mut repository = MockTestSubredditRepository::new();

        repository.expect_create().times(1).returning(|sub| {
            Err(SubredditError::NameAlreadyExists(
                sub.name.as_str().to_string(),
            ))
        });

        let service = SubredditService::new(Arc::new(repository));

        let command = CreateSubredditCommand {
            name: SubredditName::new("rust".to_string()).unwrap(),
            description: None,
        };

        assert!(matches!(
            service.create_subreddit(command, UserId(7)).await,
            Err(SubredditError::NameAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn test_get_subreddit_not_found() {
        let mut repository = MockTestSubredditRepository::new();
        repository
            .expect_find_by_name()
            .times(1)
            .returning(|_| Ok(None));

        let service = SubredditService::new(Arc::new(repository));

        let result = service
            .get_subreddit(&SubredditName::new("missing".to_string()).unwrap())
            .await;
        assert!(matches!(result, Err(SubredditError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_list_subreddits() {
        let mut repository = MockTestSubredditRepository::new();
        repository
            .expect_list_all()
            .times(1)
            .returning(|| Ok(vec![stored(1, "golang", 1), stored(2, "rust", 2)]));

        let service = SubredditService::new(Arc::new(repository));

        let subreddits = service.list_subreddits().await.unwrap();
        assert_eq!(subreddits.len(), 2);
        assert_eq!(subreddits[0].name.as_str(), "golang");
    }
}
