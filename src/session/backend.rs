use std::future::Future;

use crate::model::{LockGrant, NewParagraph, ParagraphDetail, StoryId, StorySnapshot, Vote};
use crate::remote::{ApiClient, ApiError};

/// The API calls a session makes. Implemented by [`ApiClient`]; tests swap in
/// an in-memory server.
pub trait StoryBackend: Clone + Send + Sync + 'static {
    fn get_story(
        &self,
        id: StoryId,
    ) -> impl Future<Output = Result<StorySnapshot, ApiError>> + Send;

    fn get_paragraph(
        &self,
        story_id: StoryId,
        number: u32,
    ) -> impl Future<Output = Result<ParagraphDetail, ApiError>> + Send;

    fn lock_story(&self, id: StoryId) -> impl Future<Output = Result<LockGrant, ApiError>> + Send;

    fn suggest_paragraph(
        &self,
        story_id: StoryId,
        text: String,
        auth: String,
    ) -> impl Future<Output = Result<(), ApiError>> + Send;

    fn vote(&self, story_id: StoryId, vote: Vote)
    -> impl Future<Output = Result<(), ApiError>> + Send;

    fn branch_story(&self, id: StoryId) -> impl Future<Output = Result<StoryId, ApiError>> + Send;

    fn add_paragraph(
        &self,
        story_id: StoryId,
        paragraph_number: u32,
        text: String,
    ) -> impl Future<Output = Result<NewParagraph, ApiError>> + Send;
}

impl StoryBackend for ApiClient {
    fn get_story(
        &self,
        id: StoryId,
    ) -> impl Future<Output = Result<StorySnapshot, ApiError>> + Send {
        ApiClient::get_story(self, id)
    }

    fn get_paragraph(
        &self,
        story_id: StoryId,
        number: u32,
    ) -> impl Future<Output = Result<ParagraphDetail, ApiError>> + Send {
        ApiClient::get_paragraph(self, story_id, number)
    }

    fn lock_story(&self, id: StoryId) -> impl Future<Output = Result<LockGrant, ApiError>> + Send {
        ApiClient::lock_story(self, id)
    }

    fn suggest_paragraph(
        &self,
        story_id: StoryId,
        text: String,
        auth: String,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        async move { ApiClient::suggest_paragraph(self, story_id, &text, &auth).await }
    }

    fn vote(
        &self,
        story_id: StoryId,
        vote: Vote,
    ) -> impl Future<Output = Result<(), ApiError>> + Send {
        ApiClient::vote(self, story_id, vote)
    }

    fn branch_story(&self, id: StoryId) -> impl Future<Output = Result<StoryId, ApiError>> + Send {
        ApiClient::branch_story(self, id)
    }

    fn add_paragraph(
        &self,
        story_id: StoryId,
        paragraph_number: u32,
        text: String,
    ) -> impl Future<Output = Result<NewParagraph, ApiError>> + Send {
        async move { ApiClient::add_paragraph(self, story_id, paragraph_number, &text).await }
    }
}
