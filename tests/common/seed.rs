use bazaar::{
    entity::{comment, post, product, tag, user},
    Mutation,
};
use sea_orm::DbConn;

pub fn user_form(email: &str) -> user::Model {
    user::Model {
        id: 0,
        email: email.to_owned(),
        password: "argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_owned(),
        is_active: true,
    }
}

pub fn post_form(user_id: i32, image_url: &str) -> post::Model {
    post::Model {
        id: 0,
        user_id,
        image_url: image_url.to_owned(),
        description: None,
    }
}

pub fn comment_form(post_id: i32, user_id: i32, content: &str) -> comment::Model {
    comment::Model {
        id: 0,
        post_id,
        user_id,
        content: content.to_owned(),
    }
}

pub fn product_form(user_id: Option<i32>, name: &str) -> product::Model {
    product::Model {
        id: 0,
        user_id,
        name: name.to_owned(),
        pricing: 9.99,
        weight: 1.2,
        color: "red".to_owned(),
    }
}

pub async fn user(db: &DbConn, email: &str) -> user::Model {
    Mutation::create_user(db, user_form(email))
        .await
        .expect("could not insert user")
}

pub async fn post(db: &DbConn, user_id: i32, image_url: &str) -> post::Model {
    Mutation::create_post(db, post_form(user_id, image_url))
        .await
        .expect("could not insert post")
}

pub async fn product(db: &DbConn, user_id: Option<i32>, name: &str) -> product::Model {
    Mutation::create_product(db, product_form(user_id, name))
        .await
        .expect("could not insert product")
}

pub async fn tag(db: &DbConn, name: &str) -> tag::Model {
    Mutation::create_tag(db, name)
        .await
        .expect("could not insert tag")
}
