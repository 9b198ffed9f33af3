use crate::entity::{
    comment,
    post::{self, PostWithTags},
    prelude::*,
    product::{self, ProductWithTags},
    tag, user,
};
use sea_orm::*;

/// Read side of the store. Every method takes the connection it runs on.
pub struct Query;

impl Query {
    pub async fn find_user_by_id(db: &DbConn, id: i32) -> Result<Option<user::Model>, DbErr> {
        User::find_by_id(id).one(db).await
    }

    pub async fn find_user_by_email(
        db: &DbConn,
        email: &str,
    ) -> Result<Option<user::Model>, DbErr> {
        User::find()
            .filter(user::Column::Email.eq(email))
            .one(db)
            .await
    }

    /// If ok, returns (user models, num pages). `page` starts at 1.
    ///
    /// A zero `users_per_page`, or a page whose row offset does not fit in
    /// `u64`, is rejected with `DbErr::Custom`.
    pub async fn find_users_in_page(
        db: &DbConn,
        page: u64,
        users_per_page: u64,
    ) -> Result<(Vec<user::Model>, u64), DbErr> {
        if users_per_page == 0 {
            return Err(DbErr::Custom("users_per_page must be positive".to_owned()));
        }
        if page.saturating_sub(1).checked_mul(users_per_page).is_none() {
            return Err(DbErr::Custom(format!(
                "page {page} of {users_per_page} users is out of range"
            )));
        }

        let paginator = User::find()
            .order_by_asc(user::Column::Id)
            .paginate(db, users_per_page);
        let num_pages = paginator.num_pages().await?;

        paginator
            .fetch_page(page.saturating_sub(1))
            .await
            .map(|p| (p, num_pages))
    }

    pub async fn find_post_by_id(db: &DbConn, id: i32) -> Result<Option<post::Model>, DbErr> {
        Post::find_by_id(id).one(db).await
    }

    pub async fn find_post_with_tags(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<PostWithTags>, DbErr> {
        let Some(post) = Post::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        let tags = post
            .find_related(Tag)
            .order_by_asc(tag::Column::Id)
            .all(db)
            .await?;
        Ok(Some(PostWithTags { post, tags }))
    }

    pub async fn find_posts_with_tags(db: &DbConn) -> Result<Vec<PostWithTags>, DbErr> {
        let rows = Post::find().find_with_related(Tag).all(db).await?;
        Ok(rows.into_iter().map(PostWithTags::from).collect())
    }

    pub async fn find_posts_by_user(db: &DbConn, user_id: i32) -> Result<Vec<post::Model>, DbErr> {
        Post::find()
            .filter(post::Column::UserId.eq(user_id))
            .order_by_asc(post::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_comment_by_id(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<comment::Model>, DbErr> {
        Comment::find_by_id(id).one(db).await
    }

    pub async fn find_comments_by_post(
        db: &DbConn,
        post_id: i32,
    ) -> Result<Vec<comment::Model>, DbErr> {
        Comment::find()
            .filter(comment::Column::PostId.eq(post_id))
            .order_by_asc(comment::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_comments_by_user(
        db: &DbConn,
        user_id: i32,
    ) -> Result<Vec<comment::Model>, DbErr> {
        Comment::find()
            .filter(comment::Column::UserId.eq(user_id))
            .order_by_asc(comment::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_product_by_id(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<product::Model>, DbErr> {
        Product::find_by_id(id).one(db).await
    }

    pub async fn find_product_by_name(
        db: &DbConn,
        name: &str,
    ) -> Result<Option<product::Model>, DbErr> {
        Product::find()
            .filter(product::Column::Name.eq(name))
            .one(db)
            .await
    }

    pub async fn find_product_with_tags(
        db: &DbConn,
        id: i32,
    ) -> Result<Option<ProductWithTags>, DbErr> {
        let Some(product) = Product::find_by_id(id).one(db).await? else {
            return Ok(None);
        };
        let tags = product
            .find_related(Tag)
            .order_by_asc(tag::Column::Id)
            .all(db)
            .await?;
        Ok(Some(ProductWithTags { product, tags }))
    }

    pub async fn find_products_with_tags(db: &DbConn) -> Result<Vec<ProductWithTags>, DbErr> {
        let rows = Product::find().find_with_related(Tag).all(db).await?;
        Ok(rows.into_iter().map(ProductWithTags::from).collect())
    }

    /// Products whose owner is `user_id`. Ownerless products never match.
    pub async fn find_products_by_user(
        db: &DbConn,
        user_id: i32,
    ) -> Result<Vec<product::Model>, DbErr> {
        Product::find()
            .filter(product::Column::UserId.eq(user_id))
            .order_by_asc(product::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_tag_by_id(db: &DbConn, id: i32) -> Result<Option<tag::Model>, DbErr> {
        Tag::find_by_id(id).one(db).await
    }

    pub async fn find_tag_by_name(db: &DbConn, name: &str) -> Result<Option<tag::Model>, DbErr> {
        Tag::find().filter(tag::Column::Name.eq(name)).one(db).await
    }

    pub async fn find_all_tags(db: &DbConn) -> Result<Vec<tag::Model>, DbErr> {
        Tag::find().order_by_asc(tag::Column::Name).all(db).await
    }

    pub async fn find_posts_by_tag(db: &DbConn, tag_id: i32) -> Result<Vec<post::Model>, DbErr> {
        let Some(tag) = Tag::find_by_id(tag_id).one(db).await? else {
            return Ok(Vec::new());
        };
        tag.find_related(Post)
            .order_by_asc(post::Column::Id)
            .all(db)
            .await
    }

    pub async fn find_products_by_tag(
        db: &DbConn,
        tag_id: i32,
    ) -> Result<Vec<product::Model>, DbErr> {
        let Some(tag) = Tag::find_by_id(tag_id).one(db).await? else {
            return Ok(Vec::new());
        };
        tag.find_related(Product)
            .order_by_asc(product::Column::Id)
            .all(db)
            .await
    }
}
