use serde_json::json;

use super::*;

impl ApiClient {
    pub async fn get_story(&self, id: StoryId) -> Result<StorySnapshot, ApiError> {
        self.call("get_story", &[("id", json!(id))]).await
    }

    pub async fn get_paragraph(
        &self,
        story_id: StoryId,
        number: u32,
    ) -> Result<ParagraphDetail, ApiError> {
        self.call(
            "get_paragraph",
            &[("story_id", json!(story_id)), ("number", json!(number))],
        )
        .await
    }

    pub async fn lock_story(&self, id: StoryId) -> Result<LockGrant, ApiError> {
        self.call("lock_story", &[("id", json!(id))]).await
    }

    pub async fn suggest_paragraph(
        &self,
        story_id: StoryId,
        text: &str,
        auth: &str,
    ) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .call(
                "suggest_paragraph",
                &[
                    ("story_id", json!(story_id)),
                    ("text", json!(text)),
                    ("auth", json!(auth)),
                ],
            )
            .await?;
        Ok(())
    }

    pub async fn vote(&self, story_id: StoryId, vote: Vote) -> Result<(), ApiError> {
        let _: serde_json::Value = self
            .call(vote.method(), &[("story_id", json!(story_id))])
            .await?;
        Ok(())
    }

    /// Returns the id of the newly created story.
    pub async fn branch_story(&self, id: StoryId) -> Result<StoryId, ApiError> {
        self.call("branch_story", &[("id", json!(id))]).await
    }

    /// Adds `text` after paragraph `paragraph_number`. The server may branch
    /// the story; the returned ids point at wherever the paragraph landed.
    pub async fn add_paragraph(
        &self,
        story_id: StoryId,
        paragraph_number: u32,
        text: &str,
    ) -> Result<NewParagraph, ApiError> {
        self.call(
            "add_paragraph",
            &[
                ("story_id", json!(story_id)),
                ("paragraph_number", json!(paragraph_number)),
                ("text", json!(text)),
            ],
        )
        .await
    }
}
