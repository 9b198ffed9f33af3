pub use super::comment::Entity as Comment;
pub use super::post::Entity as Post;
pub use super::post_tag::Entity as PostTag;
pub use super::product::Entity as Product;
pub use super::product_tag::Entity as ProductTag;
pub use super::tag::Entity as Tag;
pub use super::user::Entity as User;
