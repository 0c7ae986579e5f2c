//! Post interaction APIs: comments, likes, reposts.
//!
//! # Endpoints
//!
//! ## Listings — `GET /posts/{postId}/comments|likes|reposts`
//!
//! Paginated like timelines (`count`, `records`, `nextPage`, ...).
//!
//! ## `like` — `POST /posts/{postId}/likes`
//!
//! Requires a session. Response `data`:
//! ```json
//! { "likeId": 1012345678901234567, "postId": 906345798374325453 }
//! ```
//!
//! ## `unlike` — `DELETE /posts/{postId}/likes`
//!
//! Requires a session. No `data`.

use crate::client::{segment, VineClient};
use crate::error::Result;
use crate::request::{PageOptions, Request};
use crate::transport::Transport;
use crate::types::{Comment, Like, LikeReceipt, Page, User};

impl<T: Transport> VineClient<T> {
    /// Comments on a post, oldest first.
    pub async fn comments(&self, post_id: &str, options: &PageOptions) -> Result<Page<Comment>> {
        let req =
            Request::get(format!("posts/{}/comments", segment(post_id))).page_options(options);
        self.send_as(req).await
    }

    /// Likes on a post.
    pub async fn likes(&self, post_id: &str, options: &PageOptions) -> Result<Page<Like>> {
        let req = Request::get(format!("posts/{}/likes", segment(post_id))).page_options(options);
        self.send_as(req).await
    }

    /// Users who reposted a post.
    pub async fn reposts(&self, post_id: &str, options: &PageOptions) -> Result<Page<User>> {
        let req =
            Request::get(format!("posts/{}/reposts", segment(post_id))).page_options(options);
        self.send_as(req).await
    }

    /// Like a post as the logged-in user.
    pub async fn like(&self, post_id: &str) -> Result<LikeReceipt> {
        self.send_as(Request::post(format!("posts/{}/likes", segment(post_id))))
            .await
    }

    /// Remove the logged-in user's like from a post.
    pub async fn unlike(&self, post_id: &str) -> Result<()> {
        self.send(Request::delete(format!("posts/{}/likes", segment(post_id))))
            .await?;
        Ok(())
    }
}
