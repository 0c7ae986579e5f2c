//! Timeline APIs.
//!
//! All timelines are paginated lists of posts under `/timelines`:
//!
//! | Method                             | Path                                 |
//! |------------------------------------|--------------------------------------|
//! | [`VineClient::user_timeline`]      | `/timelines/users/{userId}`          |
//! | [`VineClient::user_likes`]         | `/timelines/users/{userId}/likes`    |
//! | [`VineClient::post`]               | `/timelines/posts/{postId}`          |
//! | [`VineClient::tag_timeline`]       | `/timelines/tags/{tag}`              |
//! | [`VineClient::popular`]            | `/timelines/popular`                 |
//! | [`VineClient::promoted`]           | `/timelines/promoted`                |
//! | [`VineClient::graph`]              | `/timelines/graph`                   |
//! | [`VineClient::venue_timeline`]     | `/timelines/venues/{venueId}`        |
//! | [`VineClient::channel_popular`]    | `/timelines/channels/{channelId}/popular` |
//! | [`VineClient::channel_recent`]     | `/timelines/channels/{channelId}/recent`  |
//!
//! Response `data`:
//! ```json
//! {
//!   "count": 120,
//!   "anchor": 906345798374325453,
//!   "nextPage": 2,
//!   "previousPage": null,
//!   "size": 20,
//!   "records": [ { "postId": 906345798374325453, "userId": 934940633704046592, "videoUrl": "..." } ]
//! }
//! ```

use crate::client::{segment, VineClient};
use crate::error::{Result, VineError};
use crate::request::{PageOptions, Request};
use crate::transport::Transport;
use crate::types::{Page, Post};

impl<T: Transport> VineClient<T> {
    /// Posts by a user.
    pub async fn user_timeline(&self, user_id: &str, options: &PageOptions) -> Result<Page<Post>> {
        self.timeline(format!("users/{}", segment(user_id)), options)
            .await
    }

    /// Posts a user has liked.
    pub async fn user_likes(&self, user_id: &str, options: &PageOptions) -> Result<Page<Post>> {
        self.timeline(format!("users/{}/likes", segment(user_id)), options)
            .await
    }

    /// A single post.
    ///
    /// # Errors
    ///
    /// Returns [`VineError::Other`] if the timeline comes back empty.
    pub async fn post(&self, post_id: &str) -> Result<Post> {
        let page = self
            .timeline(format!("posts/{}", segment(post_id)), &PageOptions::default())
            .await?;
        page.records
            .into_iter()
            .next()
            .ok_or_else(|| VineError::Other(format!("post not found: {post_id}")))
    }

    /// Posts carrying a hashtag (`tag` without the `#`).
    pub async fn tag_timeline(&self, tag: &str, options: &PageOptions) -> Result<Page<Post>> {
        self.timeline(format!("tags/{}", segment(tag)), options)
            .await
    }

    /// Popular posts right now.
    pub async fn popular(&self, options: &PageOptions) -> Result<Page<Post>> {
        self.timeline("popular".to_owned(), options).await
    }

    /// Editor's picks.
    pub async fn promoted(&self, options: &PageOptions) -> Result<Page<Post>> {
        self.timeline("promoted".to_owned(), options).await
    }

    /// Home feed of the logged-in user. Requires a session.
    pub async fn graph(&self, options: &PageOptions) -> Result<Page<Post>> {
        self.timeline("graph".to_owned(), options).await
    }

    /// Posts tagged with a venue.
    pub async fn venue_timeline(&self, venue_id: &str, options: &PageOptions) -> Result<Page<Post>> {
        self.timeline(format!("venues/{}", segment(venue_id)), options)
            .await
    }

    /// Popular posts in a channel.
    pub async fn channel_popular(
        &self,
        channel_id: &str,
        options: &PageOptions,
    ) -> Result<Page<Post>> {
        self.timeline(format!("channels/{}/popular", segment(channel_id)), options)
            .await
    }

    /// Most recent posts in a channel.
    pub async fn channel_recent(
        &self,
        channel_id: &str,
        options: &PageOptions,
    ) -> Result<Page<Post>> {
        self.timeline(format!("channels/{}/recent", segment(channel_id)), options)
            .await
    }

    async fn timeline(&self, path: String, options: &PageOptions) -> Result<Page<Post>> {
        let req = Request::get(format!("timelines/{path}")).page_options(options);
        self.send_as(req).await
    }
}
