use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

use storefront_api::{
    entity::products::Entity as Products,
    routes::params::ProductQuery,
    services::product_service::{escape_like, product_filter},
};

fn filter_sql(query: &ProductQuery) -> String {
    Products::find()
        .filter(product_filter(query))
        .build(DbBackend::Postgres)
        .to_string()
}

#[test]
fn like_wildcards_in_search_text_are_escaped() {
    assert_eq!(escape_like("50%"), "50\\%");
    assert_eq!(escape_like("a_b"), "a\\_b");
    assert_eq!(escape_like("C:\\dir"), "C:\\\\dir");
    assert_eq!(escape_like("Samsung"), "Samsung");
}

#[test]
fn search_matches_name_or_description_with_escape_clause() {
    let query = ProductQuery {
        q: Some("  50%  ".to_string()),
        ..Default::default()
    };
    let sql = filter_sql(&query);
    assert!(sql.contains("ILIKE"), "{sql}");
    assert!(sql.contains("ESCAPE"), "{sql}");
    assert!(sql.contains("\"name\""), "{sql}");
    assert!(sql.contains("\"description\""), "{sql}");
    assert!(sql.contains(" OR "), "{sql}");
}

#[test]
fn blank_search_adds_no_condition() {
    let query = ProductQuery {
        q: Some("   ".to_string()),
        ..Default::default()
    };
    let sql = filter_sql(&query);
    assert!(!sql.contains("WHERE"), "{sql}");
}

#[test]
fn price_range_and_flags_are_combined() {
    let query = ProductQuery {
        category_id: Some(3),
        brand_id: Some(2),
        min_price: Some(1000),
        max_price: Some(5000),
        is_aksiya: Some(true),
        ..Default::default()
    };
    let sql = filter_sql(&query);
    assert!(sql.contains("\"products\".\"category_id\" = 3"), "{sql}");
    assert!(sql.contains("\"products\".\"brand_id\" = 2"), "{sql}");
    assert!(sql.contains("\"products\".\"price\" >= 1000"), "{sql}");
    assert!(sql.contains("\"products\".\"price\" <= 5000"), "{sql}");
    assert!(sql.contains("\"products\".\"is_aksiya\""), "{sql}");
    assert!(!sql.contains(" OR "), "{sql}");
}
