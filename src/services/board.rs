//! Board aggregate
//!
//! One call returning everything the frontend needs for a full render, so
//! startup is a single round trip instead of three.

use crate::database::{Board, Repository, Status};
use crate::error::Result;

/// Service assembling the full board view
#[derive(Clone)]
pub struct BoardService {
    repo: Repository,
}

impl BoardService {
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// Fetch groups, tasks and settings together, along with the status
    /// enumeration the frontend uses for dropdowns and validation.
    pub async fn get_board(&self) -> Result<Board> {
        let groups = self.repo.list_groups().await?;
        let tasks = self.repo.list_tasks().await?;
        let settings = self.repo.get_settings().await?;

        Ok(Board {
            groups,
            tasks,
            settings,
            statuses: Status::ALL.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::repository::test_support::memory_repo;
    use crate::database::UpsertTaskRequest;

    #[tokio::test]
    async fn test_board_on_fresh_store() {
        let service = BoardService::new(memory_repo().await);

        let board = service.get_board().await.unwrap();

        assert_eq!(board.groups.len(), 1);
        assert!(board.tasks.is_empty());
        assert_eq!(board.settings.view_mode, "cards");
        assert_eq!(board.statuses, vec![Status::Todo, Status::Doing, Status::Done]);
    }

    #[tokio::test]
    async fn test_board_reflects_stored_data() {
        let repo = memory_repo().await;
        let service = BoardService::new(repo.clone());

        repo.upsert_group(0, "Work").await.unwrap();
        repo.upsert_task(UpsertTaskRequest {
            id: 0,
            group_id: 1,
            title: "First".to_string(),
            content: String::new(),
            status: "todo".to_string(),
            important: true,
            urgent: false,
        })
        .await
        .unwrap();

        let board = service.get_board().await.unwrap();

        assert_eq!(board.groups.len(), 2);
        assert_eq!(board.tasks.len(), 1);
        assert!(board.tasks[0].important);
    }
}
