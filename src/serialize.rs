//! Flat key-value projections of each entity, the boundary format handed to
//! any API layer built on top of this crate.
//!
//! Key names and nesting are fixed:
//!
//! | Entity  | Keys                                                       |
//! |---------|------------------------------------------------------------|
//! | User    | `id`, `email`                                              |
//! | Post    | `id`, `user_id`, `image_url`, `description`, `tags`        |
//! | Comment | `id`, `post_id`, `user_id`, `content`                      |
//! | Product | `id`, `user_id`, `name`, `pricing`, `weight`, `color`, `tags` |
//! | Tag     | `id`, `name`                                               |
//!
//! A user's `password` and `is_active` never appear in the output.

use crate::entity::{
    comment,
    post::{self, PostWithTags},
    product::{self, ProductWithTags},
    tag, user,
};
use serde_json::{json, Value as Json};

/// Projects a loaded entity to a JSON object.
pub trait Serializable {
    fn serialize(&self) -> Json;
}

impl Serializable for user::Model {
    fn serialize(&self) -> Json {
        json!({
            "id": self.id,
            "email": self.email,
        })
    }
}

impl Serializable for tag::Model {
    fn serialize(&self) -> Json {
        json!({
            "id": self.id,
            "name": self.name,
        })
    }
}

impl Serializable for comment::Model {
    fn serialize(&self) -> Json {
        json!({
            "id": self.id,
            "post_id": self.post_id,
            "user_id": self.user_id,
            "content": self.content,
        })
    }
}

impl Serializable for PostWithTags {
    fn serialize(&self) -> Json {
        let post::Model {
            id,
            user_id,
            image_url,
            description,
        } = &self.post;
        json!({
            "id": id,
            "user_id": user_id,
            "image_url": image_url,
            "description": description,
            "tags": serialize_all(&self.tags),
        })
    }
}

impl Serializable for ProductWithTags {
    fn serialize(&self) -> Json {
        let product::Model {
            id,
            user_id,
            name,
            pricing,
            weight,
            color,
        } = &self.product;
        json!({
            "id": id,
            "user_id": user_id,
            "name": name,
            "pricing": pricing,
            "weight": weight,
            "color": color,
            "tags": serialize_all(&self.tags),
        })
    }
}

pub fn serialize_all<T: Serializable>(items: &[T]) -> Json {
    Json::Array(items.iter().map(Serializable::serialize).collect())
}
