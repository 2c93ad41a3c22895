//! 命令/查询共用的仓储访问

use crate::application::error::ApplicationError;
use crate::application::ports::RecordedVoiceoversRepositoryPort;
use crate::domain::voiceover::RecordedVoiceovers;

/// 加载 owner 的配音，不存在时返回 NotFound
pub(crate) async fn load_recorded(
    repo: &dyn RecordedVoiceoversRepositoryPort,
    owner_id: &str,
) -> Result<RecordedVoiceovers, ApplicationError> {
    repo.find_by_owner(owner_id)
        .await?
        .ok_or_else(|| ApplicationError::not_found("RecordedVoiceovers", owner_id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryVoiceoverRepository;

    #[tokio::test]
    async fn test_load_recorded() {
        let repo = InMemoryVoiceoverRepository::new();
        repo.save("exp_1", &RecordedVoiceovers::new()).await.unwrap();

        assert!(load_recorded(&repo, "exp_1").await.is_ok());

        let err = load_recorded(&repo, "exp_2").await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::NotFound { resource_type: "RecordedVoiceovers", ref id } if id == "exp_2"
        ));
    }
}
