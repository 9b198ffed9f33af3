pub mod common;

use bazaar::{
    entity::{post, user},
    Mutation, Query,
};
use common::{seed, TestContext};
use sea_orm::{entity::*, error::*, DbErr};

fn assert_unique(err: DbErr) {
    assert!(
        matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))),
        "expected uniqueness violation, got {err:?}"
    );
}

fn assert_foreign_key(err: DbErr) {
    assert!(
        matches!(err.sql_err(), Some(SqlErr::ForeignKeyConstraintViolation(_))),
        "expected foreign-key violation, got {err:?}"
    );
}

#[tokio::test]
async fn duplicate_email() {
    let ctx = TestContext::new().await;
    let db = &ctx.db;

    seed::user(db, "a@x.com").await;
    let err = Mutation::create_user(db, seed::user_form("a@x.com"))
        .await
        .expect_err("inserting should fail due to duplicate email");
    assert_unique(err);
}

#[tokio::test]
async fn duplicate_tag_and_product_name() {
    let ctx = TestContext::new().await;
    let db = &ctx.db;

    seed::tag(db, "red").await;
    assert_unique(Mutation::create_tag(db, "red").await.unwrap_err());

    seed::product(db, None, "Shoe").await;
    assert_unique(
        Mutation::create_product(db, seed::product_form(None, "Shoe"))
            .await
            .unwrap_err(),
    );
}

#[tokio::test]
async fn dangling_references() {
    let ctx = TestContext::new().await;
    let db = &ctx.db;

    assert_foreign_key(
        Mutation::create_post(db, seed::post_form(1000, "https://img.example/x.png"))
            .await
            .unwrap_err(),
    );

    let user = seed::user(db, "a@x.com").await;
    assert_foreign_key(
        Mutation::create_comment(db, seed::comment_form(1000, user.id, "orphan"))
            .await
            .unwrap_err(),
    );
    assert_foreign_key(
        Mutation::create_product(db, seed::product_form(Some(1000), "Ghost"))
            .await
            .unwrap_err(),
    );

    let tag = seed::tag(db, "red").await;
    assert_foreign_key(Mutation::tag_post(db, 1000, tag.id).await.unwrap_err());
    assert_foreign_key(Mutation::tag_product(db, 1000, tag.id).await.unwrap_err());
}

#[tokio::test]
async fn missing_required_column() {
    let ctx = TestContext::new().await;
    let db = &ctx.db;

    let err = user::ActiveModel {
        email: Set("a@x.com".to_owned()),
        is_active: Set(true),
        ..Default::default()
    }
    .insert(db)
    .await
    .expect_err("password is required");
    assert!(err.to_string().contains("NOT NULL"), "{err}");
}

#[tokio::test]
async fn column_width() {
    let ctx = TestContext::new().await;
    let db = &ctx.db;

    let long_email = format!("{}@x.com", "a".repeat(user::EMAIL_LEN));
    let err = Mutation::create_user(db, seed::user_form(&long_email))
        .await
        .unwrap_err();
    assert!(matches!(err, DbErr::Custom(_)), "{err:?}");

    let err = Mutation::create_tag(db, &"t".repeat(51)).await.unwrap_err();
    assert!(matches!(err, DbErr::Custom(_)), "{err:?}");
    assert!(Query::find_all_tags(db).await.unwrap().is_empty());

    let user = seed::user(db, "a@x.com").await;
    let mut form = seed::product_form(Some(user.id), "Shoe");
    form.color = "c".repeat(51);
    let err = Mutation::create_product(db, form).await.unwrap_err();
    assert!(matches!(err, DbErr::Custom(_)), "{err:?}");

    let err = Mutation::create_post(
        db,
        seed::post_form(user.id, &format!("https://img.example/{}", "p".repeat(post::IMAGE_URL_LEN))),
    )
    .await
    .unwrap_err();
    assert!(matches!(err, DbErr::Custom(_)), "{err:?}");

    // exactly at the bound is fine
    Mutation::create_tag(db, &"t".repeat(50)).await.unwrap();
}

#[tokio::test]
async fn column_width_on_update() {
    let ctx = TestContext::new().await;
    let db = &ctx.db;

    let user = seed::user(db, "a@x.com").await;
    let long_email = format!("{}@x.com", "a".repeat(user::EMAIL_LEN));
    let err = Mutation::update_user_by_id(db, user.id, seed::user_form(&long_email))
        .await
        .unwrap_err();
    assert!(matches!(err, DbErr::Custom(_)), "{err:?}");
    assert_eq!(
        Query::find_user_by_id(db, user.id).await.unwrap(),
        Some(user.clone())
    );

    let shoe = seed::product(db, Some(user.id), "Shoe").await;
    let mut form = seed::product_form(Some(user.id), "Shoe");
    form.color = "c".repeat(51);
    let err = Mutation::update_product_by_id(db, shoe.id, form)
        .await
        .unwrap_err();
    assert!(matches!(err, DbErr::Custom(_)), "{err:?}");
    assert_eq!(Query::find_product_by_id(db, shoe.id).await.unwrap(), Some(shoe));
}

#[tokio::test]
async fn delete_user_with_posts_is_restricted() {
    let ctx = TestContext::new().await;
    let db = &ctx.db;

    let user = seed::user(db, "a@x.com").await;
    let post = seed::post(db, user.id, "https://img.example/1.png").await;

    assert_foreign_key(Mutation::delete_user(db, user.id).await.unwrap_err());
    assert!(Query::find_user_by_id(db, user.id).await.unwrap().is_some());

    let other = seed::user(db, "b@x.com").await;
    Mutation::create_comment(db, seed::comment_form(post.id, other.id, "hi"))
        .await
        .unwrap();

    assert_foreign_key(Mutation::delete_post(db, post.id).await.unwrap_err());
    assert_foreign_key(Mutation::delete_user(db, other.id).await.unwrap_err());
}

#[tokio::test]
async fn delete_user_orphans_products() {
    let ctx = TestContext::new().await;
    let db = &ctx.db;

    let user = seed::user(db, "a@x.com").await;
    let shoe = seed::product(db, Some(user.id), "Shoe").await;

    assert_eq!(
        Mutation::delete_user(db, user.id).await.unwrap().rows_affected,
        1
    );

    let shoe = Query::find_product_by_id(db, shoe.id)
        .await
        .unwrap()
        .expect("product survives its owner");
    assert_eq!(shoe.user_id, None);
}

#[tokio::test]
async fn link_twice() {
    let ctx = TestContext::new().await;
    let db = &ctx.db;

    let user = seed::user(db, "a@x.com").await;
    let post = seed::post(db, user.id, "https://img.example/1.png").await;
    let shoe = seed::product(db, None, "Shoe").await;
    let red = seed::tag(db, "red").await;

    Mutation::tag_post(db, post.id, red.id).await.unwrap();
    assert_unique(Mutation::tag_post(db, post.id, red.id).await.unwrap_err());

    Mutation::tag_product(db, shoe.id, red.id).await.unwrap();
    assert_unique(
        Mutation::tag_product(db, shoe.id, red.id)
            .await
            .unwrap_err(),
    );
}
