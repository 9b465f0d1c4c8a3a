use std::{collections::BTreeMap, sync::Arc};

use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Transaction, Value};

use storefront_api::{
    config::AppConfig,
    dto::banners::UpdateBannerRequest,
    entity::banners,
    middleware::auth::AuthUser,
    models::ROLE_ADMIN,
    services::{banner_service, catalog_service, variation_service},
    state::AppState,
};

fn config() -> AppConfig {
    AppConfig {
        database_url: "postgres://unused".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: "audit-secret".to_string(),
        jwt_ttl_hours: 1,
        seed_on_startup: false,
        cors_origin: None,
        migrations_dir: "migrations".to_string(),
    }
}

fn admin() -> AuthUser {
    AuthUser {
        user_id: 1,
        role: ROLE_ADMIN.to_string(),
    }
}

fn deleted(rows: u64) -> MockExecResult {
    MockExecResult {
        last_insert_id: 0,
        rows_affected: rows,
    }
}

fn transaction_log(state: AppState) -> Vec<Transaction> {
    Arc::try_unwrap(state.orm).ok().unwrap().into_transaction_log()
}

fn last_statement(log: &[Transaction]) -> String {
    format!("{:?}", log.last().unwrap())
}

#[tokio::test]
async fn color_delete_is_audited() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[BTreeMap::from([("num_items", Value::BigInt(Some(0)))])]])
        .append_exec_results([deleted(1)])
        .into_connection();
    let state = AppState::new(db, config());

    catalog_service::delete_color(&state, &admin(), 4)
        .await
        .unwrap();

    let log = transaction_log(state);
    assert_eq!(log.len(), 3);
    let audit = last_statement(&log);
    assert!(audit.contains("audit_logs"), "{audit}");
    assert!(audit.contains("color_delete"), "{audit}");
}

#[tokio::test]
async fn option_delete_is_audited() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([deleted(1)])
        .into_connection();
    let state = AppState::new(db, config());

    variation_service::delete_option(&state, &admin(), 5)
        .await
        .unwrap();

    let log = transaction_log(state);
    assert!(last_statement(&log).contains("variation_option_delete"));
}

#[tokio::test]
async fn banner_update_is_audited() {
    let banner = banners::Model {
        id: 2,
        product_id: 2,
        name: "Samsung Galaxy S25 Ultra yangiliklari".to_string(),
        description: None,
        image: Some("s25ultra.png".to_string()),
        created_at: chrono::Utc::now().fixed_offset(),
    };
    let renamed = banners::Model {
        name: "Yangi S25".to_string(),
        ..banner.clone()
    };
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![banner], vec![renamed]])
        .into_connection();
    let state = AppState::new(db, config());

    let payload = UpdateBannerRequest {
        product_id: None,
        name: Some("Yangi S25".to_string()),
        description: None,
        image: None,
    };
    let response = banner_service::update_banner(&state, &admin(), 2, payload)
        .await
        .unwrap();
    assert_eq!(response.data.unwrap().name, "Yangi S25");

    let log = transaction_log(state);
    assert!(last_statement(&log).contains("banner_update"));
}
