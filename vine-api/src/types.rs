//! Data types for Vine API responses.
//!
//! Field names follow Rust conventions (`snake_case`) and are mapped from the
//! API's camelCase. The API is undocumented and its records carry many more
//! fields than modelled here; anything not named below is kept in each
//! record's `extra` map rather than dropped.
//!
//! IDs are `String`s throughout. The response pipeline quotes them before
//! parsing (see [`envelope`](crate::envelope)), and [`id_string`] also accepts
//! bare numbers for values that did not pass through it.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Serde adapter storing an ID as a string while accepting either a JSON
/// string or a JSON integer.
pub mod id_string {
    use serde::de::{self, Deserializer, Visitor};
    use serde::Serializer;
    use std::fmt;

    pub fn serialize<S: Serializer>(id: &str, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(id)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        deserializer.deserialize_any(IdVisitor)
    }

    struct IdVisitor;

    impl Visitor<'_> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or integer ID")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_owned())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    /// Same as the parent module, for `Option<String>` fields.
    pub mod option {
        use serde::{Deserialize, Deserializer, Serializer};

        #[allow(clippy::ref_option)]
        pub fn serialize<S: Serializer>(id: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
            match id {
                Some(id) => serializer.serialize_some(id),
                None => serializer.serialize_none(),
            }
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Option<String>, D::Error> {
            #[derive(Deserialize)]
            struct Wrapped(#[serde(with = "super")] String);

            Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(id)| id))
        }
    }
}

/// One page of a paginated listing.
///
/// API JSON fields: `count` (total on the server), `records`, `nextPage`,
/// `previousPage`, `anchor`, `size`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    #[serde(default)]
    pub count: u64,
    #[serde(default = "Vec::new")]
    pub records: Vec<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_page: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_page: Option<u64>,
    /// Opaque cursor; pass back through [`PageOptions::anchor`](crate::request::PageOptions).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// A user profile.
///
/// Returned by `me`, `user`, and inside follower/following/search listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(with = "id_string")]
    pub user_id: String,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub follower_count: u64,
    #[serde(default)]
    pub following_count: u64,
    #[serde(default)]
    pub post_count: u64,
    #[serde(default)]
    pub like_count: u64,
    /// Verified accounts have `verified: 1`.
    #[serde(default)]
    pub verified: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A video post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(with = "id_string")]
    pub post_id: String,
    #[serde(with = "id_string")]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permalink_url: Option<String>,
    /// Creation timestamp as sent by the API (`2013-06-01T12:00:00.000000`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(default, with = "id_string::option", skip_serializing_if = "Option::is_none")]
    pub venue_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue_name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(with = "id_string")]
    pub comment_id: String,
    #[serde(with = "id_string")]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A like on a post, as listed by `likes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Like {
    #[serde(with = "id_string")]
    pub like_id: String,
    #[serde(with = "id_string")]
    pub user_id: String,
    #[serde(default)]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Payload returned by `like`. `unlike` returns no payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeReceipt {
    #[serde(with = "id_string")]
    pub like_id: String,
    #[serde(default, with = "id_string::option", skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A hashtag, as returned by tag search and trending tags.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    #[serde(with = "id_string")]
    pub tag_id: String,
    /// Tag text without the leading `#`.
    #[serde(alias = "tagName")]
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_count: Option<u64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// An activity notification (new follower, like, comment, mention).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default, with = "id_string::option", skip_serializing_if = "Option::is_none")]
    pub notification_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_type_id: Option<u64>,
    #[serde(default, with = "id_string::option", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, with = "id_string::option", skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
