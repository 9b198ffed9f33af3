use super::check_len;
use sea_orm::{entity::prelude::*, ConnectionTrait};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key)]
    #[serde(skip_deserializing)]
    pub id: i32,
    #[serde(default)]
    pub user_id: Option<i32>,
    #[sea_orm(column_type = "String(StringLen::N(120))", unique)]
    pub name: String,
    #[sea_orm(column_type = "Double")]
    pub pricing: f64,
    #[sea_orm(column_type = "Double")]
    pub weight: f64,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub color: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id",
        on_update = "Cascade",
        on_delete = "SetNull"
    )]
    User,
    #[sea_orm(has_many = "super::product_tag::Entity")]
    ProductTag,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::product_tag::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductTag.def()
    }
}

impl Related<super::tag::Entity> for Entity {
    fn to() -> RelationDef {
        super::product_tag::Relation::Tag.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::product_tag::Relation::Product.def().rev())
    }
}

pub const NAME_LEN: usize = 120;
pub const COLOR_LEN: usize = 50;

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        check_len("product", "name", &self.name, NAME_LEN)?;
        check_len("product", "color", &self.color, COLOR_LEN)?;
        Ok(self)
    }
}

/// A product together with the tags linked through `product_tag`.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductWithTags {
    pub product: Model,
    pub tags: Vec<super::tag::Model>,
}

impl From<(Model, Vec<super::tag::Model>)> for ProductWithTags {
    fn from((product, tags): (Model, Vec<super::tag::Model>)) -> Self {
        Self { product, tags }
    }
}
