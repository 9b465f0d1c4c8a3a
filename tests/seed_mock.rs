use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, MockDatabase, Value};

use storefront_api::seed::{
    SeedOutcome, fixture_sizes, seed_all, seed_banners, seed_brands, seed_product_configurations,
    seed_products, seed_users,
};

fn count_row(n: i64) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("num_items", Value::BigInt(Some(n)))])
}

#[tokio::test]
async fn non_empty_table_is_left_alone() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[count_row(1)]])
        .into_connection();

    let outcome = seed_users(&db).await.unwrap();
    assert_eq!(outcome, SeedOutcome::AlreadySeeded);

    // Only the count ran; nothing was inserted.
    assert_eq!(db.into_transaction_log().len(), 1);
}

#[tokio::test]
async fn products_wait_for_categories() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[count_row(0)], [count_row(0)]])
        .into_connection();

    let outcome = seed_products(&db).await.unwrap();
    assert_eq!(outcome, SeedOutcome::MissingParent("categories"));
    assert_eq!(db.into_transaction_log().len(), 2);
}

#[tokio::test]
async fn products_wait_for_brands() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[count_row(0)], [count_row(7)], [count_row(0)]])
        .into_connection();

    let outcome = seed_products(&db).await.unwrap();
    assert_eq!(outcome, SeedOutcome::MissingParent("brands"));
}

#[tokio::test]
async fn banners_wait_for_products() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[count_row(0)], [count_row(0)]])
        .into_connection();

    assert_eq!(
        seed_banners(&db).await.unwrap(),
        SeedOutcome::MissingParent("products")
    );
}

#[tokio::test]
async fn configurations_wait_for_options() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[count_row(0)], [count_row(10)], [count_row(0)]])
        .into_connection();

    assert_eq!(
        seed_product_configurations(&db).await.unwrap(),
        SeedOutcome::MissingParent("variation_options")
    );
}

fn id_row(id: i32) -> BTreeMap<&'static str, Value> {
    BTreeMap::from([("id", Value::Int(Some(id)))])
}

#[tokio::test]
async fn empty_brands_table_gets_fixture_rows() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[count_row(0)]])
        .append_query_results([[id_row(7)]])
        .into_connection();

    assert_eq!(seed_brands(&db).await.unwrap(), SeedOutcome::Inserted(7));

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 2);
    let insert = format!("{:?}", log[1]);
    assert!(insert.contains("INSERT INTO \"brands\""), "{insert}");
    assert!(insert.contains("Huwavei"), "{insert}");
    assert!(insert.contains("/samsung_brand.png"), "{insert}");
}

#[tokio::test]
async fn product_fixture_text_is_kept_as_published() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[count_row(0)], [count_row(7)], [count_row(7)]])
        .append_query_results([[id_row(10)]])
        .into_connection();

    assert_eq!(seed_products(&db).await.unwrap(), SeedOutcome::Inserted(10));

    let log = db.into_transaction_log();
    let insert = format!("{:?}", log[3]);
    assert!(insert.contains("Sony Play Station 5 osez kayp qib o'ynesiz."), "{insert}");
    assert!(
        insert.contains("faollikni bostirish funksiyasi"),
        "{insert}"
    );
}

#[tokio::test]
async fn seeded_database_runs_only_counts_in_dependency_order() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results((0..10).map(|_| [count_row(1)]))
        .into_connection();

    let report = seed_all(&db).await.unwrap();
    let tables: Vec<&str> = report.steps.iter().map(|(table, _)| *table).collect();
    let expected: Vec<&str> = fixture_sizes().iter().map(|(table, _)| *table).collect();
    assert_eq!(tables, expected);
    assert!(
        report
            .steps
            .iter()
            .all(|(_, outcome)| *outcome == SeedOutcome::AlreadySeeded)
    );
    assert_eq!(report.inserted(), 0);
    assert_eq!(report.outcome("banners"), Some(SeedOutcome::AlreadySeeded));
    assert_eq!(db.into_transaction_log().len(), 10);
}

#[test]
fn fixture_catalog_sizes() {
    let sizes: Vec<usize> = fixture_sizes().iter().map(|(_, n)| *n).collect();
    assert_eq!(sizes, vec![1, 7, 7, 5, 10, 3, 10, 10, 10, 9]);
    assert_eq!(fixture_sizes()[0].0, "users");
    assert_eq!(fixture_sizes()[9].0, "product_configurations");
}
