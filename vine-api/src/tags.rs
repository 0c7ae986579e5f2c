//! Tag APIs.
//!
//! - `GET /tags/search/{query}` — tags matching a prefix
//! - `GET /tags/trending` — currently trending tags
//!
//! Records look like `{ "tagId": 914170217574551552, "tag": "cats", "postCount": 51234 }`.

use crate::client::{segment, VineClient};
use crate::error::Result;
use crate::request::{PageOptions, Request};
use crate::transport::Transport;
use crate::types::{Page, Tag};

impl<T: Transport> VineClient<T> {
    /// Tags matching `query`.
    pub async fn search_tags(&self, query: &str, options: &PageOptions) -> Result<Page<Tag>> {
        let req = Request::get(format!("tags/search/{}", segment(query))).page_options(options);
        self.send_as(req).await
    }

    /// Currently trending tags.
    pub async fn trending_tags(&self, options: &PageOptions) -> Result<Page<Tag>> {
        self.send_as(Request::get("tags/trending").page_options(options))
            .await
    }
}
