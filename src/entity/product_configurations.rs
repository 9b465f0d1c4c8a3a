use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "product_configurations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub product_item_id: i32,
    pub variation_option_id: i32,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::product_items::Entity",
        from = "Column::ProductItemId",
        to = "super::product_items::Column::Id"
    )]
    ProductItems,
    #[sea_orm(
        belongs_to = "super::variation_options::Entity",
        from = "Column::VariationOptionId",
        to = "super::variation_options::Column::Id"
    )]
    VariationOptions,
}

impl Related<super::product_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductItems.def()
    }
}

impl Related<super::variation_options::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VariationOptions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
