//! Relational data model for a small social storefront.
//!
//! Five entities ([`entity::user`], [`entity::post`], [`entity::comment`],
//! [`entity::product`], [`entity::tag`]) and two association tables
//! ([`entity::post_tag`], [`entity::product_tag`]) declared as SeaORM
//! entities, a flat JSON projection for each ([`Serializable`]), a
//! [`schema::Registry`] producing the DDL, and a [`Query`] / [`Mutation`]
//! service layer that takes the connection explicitly.
//!
//! ```no_run
//! use bazaar::{config::Config, entity::user, Mutation, Serializable};
//!
//! # async fn run() -> Result<(), bazaar::Error> {
//! let db = bazaar::config::connect_and_create(&Config::new("sqlite::memory:")).await?;
//! let user = Mutation::create_user(
//!     &db,
//!     user::Model {
//!         id: 0,
//!         email: "a@x.com".to_owned(),
//!         password: "argon2id$...".to_owned(),
//!         is_active: true,
//!     },
//! )
//! .await?;
//! assert_eq!(user.serialize()["email"], "a@x.com");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod entity;
mod error;
mod mutation;
mod query;
pub mod schema;
mod serialize;

pub use error::*;
pub use mutation::*;
pub use query::*;
pub use serialize::*;

pub use sea_orm;
