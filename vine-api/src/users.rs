//! User profile, social graph, search and notification APIs.
//!
//! # Endpoints
//!
//! | Method | Path                          |
//! |--------|-------------------------------|
//! | `GET`  | `/users/me`                   |
//! | `GET`  | `/users/profiles/{userId}`    |
//! | `GET`  | `/users/{userId}/followers`   |
//! | `GET`  | `/users/{userId}/following`   |
//! | `GET`  | `/users/search/{query}`       |
//! | `GET`  | `/users/{userId}/notifications` |
//!
//! Profile response:
//! ```json
//! {
//!   "code": "",
//!   "data": {
//!     "userId": 906345798374325453,
//!     "username": "alice",
//!     "avatarUrl": "https://v.cdn.vine.co/r/avatars/...",
//!     "followerCount": 1204,
//!     "followingCount": 88,
//!     "postCount": 31,
//!     "verified": 0
//!   },
//!   "success": true,
//!   "error": ""
//! }
//! ```

use crate::client::{segment, VineClient};
use crate::error::Result;
use crate::request::{PageOptions, Request};
use crate::transport::Transport;
use crate::types::{Notification, Page, User};

impl<T: Transport> VineClient<T> {
    /// Profile of the logged-in user. Requires a session.
    pub async fn me(&self) -> Result<User> {
        self.send_as("users/me").await
    }

    /// Profile of any user.
    pub async fn user(&self, user_id: &str) -> Result<User> {
        self.send_as(format!("users/profiles/{}", segment(user_id)))
            .await
    }

    /// Users following `user_id`.
    pub async fn followers(&self, user_id: &str, options: &PageOptions) -> Result<Page<User>> {
        let req =
            Request::get(format!("users/{}/followers", segment(user_id))).page_options(options);
        self.send_as(req).await
    }

    /// Users `user_id` follows.
    pub async fn following(&self, user_id: &str, options: &PageOptions) -> Result<Page<User>> {
        let req =
            Request::get(format!("users/{}/following", segment(user_id))).page_options(options);
        self.send_as(req).await
    }

    /// Search users by name.
    pub async fn search_users(&self, query: &str, options: &PageOptions) -> Result<Page<User>> {
        let req = Request::get(format!("users/search/{}", segment(query))).page_options(options);
        self.send_as(req).await
    }

    /// Activity notifications for `user_id` (normally the logged-in user).
    pub async fn notifications(
        &self,
        user_id: &str,
        options: &PageOptions,
    ) -> Result<Page<Notification>> {
        let req = Request::get(format!("users/{}/notifications", segment(user_id)))
            .page_options(options);
        self.send_as(req).await
    }
}
