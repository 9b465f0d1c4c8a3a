use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "variation_options")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub variation_id: i32,
    pub value: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::variations::Entity",
        from = "Column::VariationId",
        to = "super::variations::Column::Id"
    )]
    Variations,
    #[sea_orm(has_many = "super::product_configurations::Entity")]
    ProductConfigurations,
}

impl Related<super::variations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Variations.def()
    }
}

impl Related<super::product_configurations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ProductConfigurations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
