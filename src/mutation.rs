use crate::entity::{
    comment,
    post::{self, PostWithTags},
    post_tag,
    prelude::*,
    product, product_tag, tag, user,
};
use sea_orm::*;

/// Write side of the store.
///
/// Constraint failures from the database (duplicate email, tag or product
/// name, dangling foreign key, missing required column) are returned as the
/// [`DbErr`] the driver produced.
pub struct Mutation;

impl Mutation {
    #[tracing::instrument(skip_all, fields(email = %form_data.email))]
    pub async fn create_user(db: &DbConn, form_data: user::Model) -> Result<user::Model, DbErr> {
        user::ActiveModel {
            email: Set(form_data.email),
            password: Set(form_data.password),
            is_active: Set(form_data.is_active),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    #[tracing::instrument(skip(db, form_data))]
    pub async fn update_user_by_id(
        db: &DbConn,
        id: i32,
        form_data: user::Model,
    ) -> Result<user::Model, DbErr> {
        let user: user::ActiveModel = User::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("user {id}")))
            .map(Into::into)?;

        user::ActiveModel {
            id: user.id,
            email: Set(form_data.email),
            password: Set(form_data.password),
            is_active: Set(form_data.is_active),
        }
        .update(db)
        .await
    }

    /// Fails with a foreign-key violation while the user still owns posts or
    /// comments. Owned products are kept with `user_id` cleared.
    #[tracing::instrument(skip(db))]
    pub async fn delete_user(db: &DbConn, id: i32) -> Result<DeleteResult, DbErr> {
        User::delete_by_id(id).exec(db).await
    }

    #[tracing::instrument(skip_all, fields(user_id = form_data.user_id))]
    pub async fn create_post(db: &DbConn, form_data: post::Model) -> Result<post::Model, DbErr> {
        post::ActiveModel {
            user_id: Set(form_data.user_id),
            image_url: Set(form_data.image_url),
            description: Set(form_data.description),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Creates a post and links it to the named tags in one transaction,
    /// creating any tag that does not exist yet.
    ///
    /// A name repeated in `tag_names` is linked once; the returned tags keep
    /// the order of first appearance. Any failure rolls back the post and
    /// every tag created for it.
    #[tracing::instrument(skip(db, form_data), fields(user_id = form_data.user_id))]
    pub async fn create_post_with_tags(
        db: &DbConn,
        form_data: post::Model,
        tag_names: &[&str],
    ) -> Result<PostWithTags, DbErr> {
        let txn = db.begin().await?;

        let post = post::ActiveModel {
            user_id: Set(form_data.user_id),
            image_url: Set(form_data.image_url),
            description: Set(form_data.description),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut tags: Vec<tag::Model> = Vec::with_capacity(tag_names.len());
        for name in tag_names {
            if tags.iter().any(|t| t.name == *name) {
                continue;
            }
            let tag = find_or_create_tag(&txn, name).await?;
            PostTag::insert(post_tag::ActiveModel {
                post_id: Set(post.id),
                tag_id: Set(tag.id),
            })
            .exec_without_returning(&txn)
            .await?;
            tags.push(tag);
        }

        txn.commit().await?;
        tracing::debug!(post_id = post.id, tags = tags.len(), "post created");

        Ok(PostWithTags { post, tags })
    }

    #[tracing::instrument(skip(db, form_data))]
    pub async fn update_post_by_id(
        db: &DbConn,
        id: i32,
        form_data: post::Model,
    ) -> Result<post::Model, DbErr> {
        let post: post::ActiveModel = Post::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("post {id}")))
            .map(Into::into)?;

        post::ActiveModel {
            id: post.id,
            user_id: Set(form_data.user_id),
            image_url: Set(form_data.image_url),
            description: Set(form_data.description),
        }
        .update(db)
        .await
    }

    /// Tag links are removed with the post. Fails while comments remain.
    #[tracing::instrument(skip(db))]
    pub async fn delete_post(db: &DbConn, id: i32) -> Result<DeleteResult, DbErr> {
        Post::delete_by_id(id).exec(db).await
    }

    #[tracing::instrument(skip_all, fields(post_id = form_data.post_id, user_id = form_data.user_id))]
    pub async fn create_comment(
        db: &DbConn,
        form_data: comment::Model,
    ) -> Result<comment::Model, DbErr> {
        comment::ActiveModel {
            post_id: Set(form_data.post_id),
            user_id: Set(form_data.user_id),
            content: Set(form_data.content),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    #[tracing::instrument(skip(db, content))]
    pub async fn update_comment_by_id(
        db: &DbConn,
        id: i32,
        content: String,
    ) -> Result<comment::Model, DbErr> {
        let mut comment: comment::ActiveModel = Comment::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("comment {id}")))
            .map(Into::into)?;

        comment.content = Set(content);
        comment.update(db).await
    }

    #[tracing::instrument(skip(db))]
    pub async fn delete_comment(db: &DbConn, id: i32) -> Result<DeleteResult, DbErr> {
        Comment::delete_by_id(id).exec(db).await
    }

    #[tracing::instrument(skip_all, fields(name = %form_data.name))]
    pub async fn create_product(
        db: &DbConn,
        form_data: product::Model,
    ) -> Result<product::Model, DbErr> {
        product::ActiveModel {
            user_id: Set(form_data.user_id),
            name: Set(form_data.name),
            pricing: Set(form_data.pricing),
            weight: Set(form_data.weight),
            color: Set(form_data.color),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    #[tracing::instrument(skip(db, form_data))]
    pub async fn update_product_by_id(
        db: &DbConn,
        id: i32,
        form_data: product::Model,
    ) -> Result<product::Model, DbErr> {
        let product: product::ActiveModel = Product::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("product {id}")))
            .map(Into::into)?;

        product::ActiveModel {
            id: product.id,
            user_id: Set(form_data.user_id),
            name: Set(form_data.name),
            pricing: Set(form_data.pricing),
            weight: Set(form_data.weight),
            color: Set(form_data.color),
        }
        .update(db)
        .await
    }

    /// Tag links are removed with the product.
    #[tracing::instrument(skip(db))]
    pub async fn delete_product(db: &DbConn, id: i32) -> Result<DeleteResult, DbErr> {
        Product::delete_by_id(id).exec(db).await
    }

    #[tracing::instrument(skip(db))]
    pub async fn create_tag(db: &DbConn, name: &str) -> Result<tag::Model, DbErr> {
        tag::ActiveModel {
            name: Set(name.to_owned()),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    /// Unlinks the tag from every post and product, then removes it.
    #[tracing::instrument(skip(db))]
    pub async fn delete_tag(db: &DbConn, id: i32) -> Result<DeleteResult, DbErr> {
        Tag::delete_by_id(id).exec(db).await
    }

    /// Linking a pair that is already linked is a uniqueness violation.
    #[tracing::instrument(skip(db))]
    pub async fn tag_post(db: &DbConn, post_id: i32, tag_id: i32) -> Result<(), DbErr> {
        PostTag::insert(post_tag::ActiveModel {
            post_id: Set(post_id),
            tag_id: Set(tag_id),
        })
        .exec_without_returning(db)
        .await?;
        Ok(())
    }

    #[tracing::instrument(skip(db))]
    pub async fn untag_post(db: &DbConn, post_id: i32, tag_id: i32) -> Result<DeleteResult, DbErr> {
        PostTag::delete_by_id((post_id, tag_id)).exec(db).await
    }

    /// Linking a pair that is already linked is a uniqueness violation.
    #[tracing::instrument(skip(db))]
    pub async fn tag_product(db: &DbConn, product_id: i32, tag_id: i32) -> Result<(), DbErr> {
        ProductTag::insert(product_tag::ActiveModel {
            product_id: Set(product_id),
            tag_id: Set(tag_id),
        })
        .exec_without_returning(db)
        .await?;
        Ok(())
    }

    #[tracing::instrument(skip(db))]
    pub async fn untag_product(
        db: &DbConn,
        product_id: i32,
        tag_id: i32,
    ) -> Result<DeleteResult, DbErr> {
        ProductTag::delete_by_id((product_id, tag_id)).exec(db).await
    }
}

async fn find_or_create_tag<C>(db: &C, name: &str) -> Result<tag::Model, DbErr>
where
    C: ConnectionTrait,
{
    if let Some(tag) = Tag::find()
        .filter(tag::Column::Name.eq(name))
        .one(db)
        .await?
    {
        return Ok(tag);
    }

    tag::ActiveModel {
        name: Set(name.to_owned()),
        ..Default::default()
    }
    .insert(db)
    .await
}
