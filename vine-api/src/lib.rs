//! Vine API client library.
//!
//! Async access to the (undocumented) Vine mobile API: login/logout, user
//! profiles, timelines, comments, likes and tags.
//!
//! # Authentication
//!
//! Most read endpoints work anonymously. Logging in stores a session
//! credential that is sent as `vine-session-id` on every later request.
//!
//! ```no_run
//! use vine_api::config::ClientConfig;
//! use vine_api::session::Settings;
//! use vine_api::VineClient;
//!
//! # async fn run() -> vine_api::Result<()> {
//! // Log in and keep the session for next time
//! let client = VineClient::connect(ClientConfig::default(), "alice@example.com", "hunter2").await?;
//! if let Some(settings) = client.session().settings() {
//!     settings.save()?;
//! }
//!
//! // Later: reuse the saved session
//! if let Some(settings) = Settings::load()? {
//!     let client = VineClient::with_settings(ClientConfig::default(), settings)?;
//!     let me = client.me().await?;
//!     println!("{} has {} followers", me.username, me.follower_count);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API endpoint mapping
//!
//! | Method                              | Endpoint                              | Description            |
//! |-------------------------------------|---------------------------------------|------------------------|
//! | [`VineClient::login`]               | `POST /users/authenticate`            | Start a session        |
//! | [`VineClient::logout`]              | `DELETE /users/authenticate`          | End the session        |
//! | [`VineClient::me`]                  | `/users/me`                           | Own profile            |
//! | [`VineClient::user`]                | `/users/profiles/{id}`                | User profile           |
//! | [`VineClient::followers`]           | `/users/{id}/followers`               | Followers              |
//! | [`VineClient::following`]           | `/users/{id}/following`               | Followed users         |
//! | [`VineClient::search_users`]        | `/users/search/{query}`               | User search            |
//! | [`VineClient::notifications`]       | `/users/{id}/notifications`           | Activity               |
//! | [`VineClient::user_timeline`]       | `/timelines/users/{id}`               | A user's posts         |
//! | [`VineClient::user_likes`]          | `/timelines/users/{id}/likes`         | Posts a user liked     |
//! | [`VineClient::post`]                | `/timelines/posts/{id}`               | Single post            |
//! | [`VineClient::tag_timeline`]        | `/timelines/tags/{tag}`               | Posts by hashtag       |
//! | [`VineClient::popular`]             | `/timelines/popular`                  | Popular posts          |
//! | [`VineClient::promoted`]            | `/timelines/promoted`                 | Editor's picks         |
//! | [`VineClient::graph`]               | `/timelines/graph`                    | Home feed              |
//! | [`VineClient::venue_timeline`]      | `/timelines/venues/{id}`              | Posts at a venue       |
//! | [`VineClient::channel_popular`]     | `/timelines/channels/{id}/popular`    | Channel, popular       |
//! | [`VineClient::channel_recent`]      | `/timelines/channels/{id}/recent`     | Channel, recent        |
//! | [`VineClient::comments`]            | `/posts/{id}/comments`                | Comments on a post     |
//! | [`VineClient::likes`]               | `/posts/{id}/likes`                   | Likes on a post        |
//! | [`VineClient::reposts`]             | `/posts/{id}/reposts`                 | Reposters of a post    |
//! | [`VineClient::like`]                | `POST /posts/{id}/likes`              | Like a post            |
//! | [`VineClient::unlike`]              | `DELETE /posts/{id}/likes`            | Unlike a post          |
//! | [`VineClient::search_tags`]         | `/tags/search/{query}`                | Tag search             |
//! | [`VineClient::trending_tags`]       | `/tags/trending`                      | Trending tags          |
//!
//! Anything not listed can be reached with [`VineClient::send`].

pub mod callback;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
mod posts;
pub mod request;
pub mod session;
mod tags;
mod timelines;
pub mod transport;
pub mod types;
mod users;

pub use callback::CallbackExt;
pub use client::VineClient;
pub use error::{Result, VineError};
