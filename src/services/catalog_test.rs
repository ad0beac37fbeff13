use super::*;

fn sample_service() -> Service {
    Service {
        id: "s1".into(),
        name: "Laundry".into(),
        price: 200.0,
        duration: Some("24h".into()),
        status: "Active".into(),
        usage_count: 3,
    }
}

// =============================================================================
// ServiceChanges::apply — partial merge semantics
// =============================================================================

#[test]
fn apply_empty_changes_is_identity() {
    let mut service = sample_service();
    ServiceChanges::default().apply(&mut service);
    assert_eq!(service.name, "Laundry");
    assert!((service.price - 200.0).abs() < f64::EPSILON);
    assert_eq!(service.duration.as_deref(), Some("24h"));
    assert_eq!(service.status, "Active");
    assert_eq!(service.usage_count, 3);
}

#[test]
fn apply_price_only_leaves_other_fields() {
    let mut service = sample_service();
    let changes = ServiceChanges { price: Some(250.0), ..ServiceChanges::default() };
    changes.apply(&mut service);
    assert!((service.price - 250.0).abs() < f64::EPSILON);
    assert_eq!(service.name, "Laundry");
    assert_eq!(service.duration.as_deref(), Some("24h"));
    assert_eq!(service.status, "Active");
}

#[test]
fn apply_all_fields_overwrites_everything_but_counter() {
    let mut service = sample_service();
    let changes = ServiceChanges {
        name: Some("Express Laundry".into()),
        price: Some(350.0),
        duration: Some("6h".into()),
        status: Some("Inactive".into()),
    };
    changes.apply(&mut service);
    assert_eq!(service.name, "Express Laundry");
    assert!((service.price - 350.0).abs() < f64::EPSILON);
    assert_eq!(service.duration.as_deref(), Some("6h"));
    assert_eq!(service.status, "Inactive");
    assert_eq!(service.usage_count, 3, "usage counter is never merged from payloads");
}

#[test]
fn changes_deserialize_from_partial_payload() {
    let changes: ServiceChanges = serde_json::from_str(r#"{"price": 99.5}"#).unwrap();
    assert_eq!(changes.price, Some(99.5));
    assert!(changes.name.is_none());
    assert!(changes.duration.is_none());
    assert!(changes.status.is_none());
}

// =============================================================================
// Service serialization — the key surface the admin UI depends on
// =============================================================================

#[test]
fn service_serializes_with_snake_case_keys() {
    let json = serde_json::to_value(sample_service()).unwrap();
    assert_eq!(json["id"], "s1");
    assert_eq!(json["name"], "Laundry");
    assert_eq!(json["price"], 200.0);
    assert_eq!(json["duration"], "24h");
    assert_eq!(json["status"], "Active");
    assert_eq!(json["usage_count"], 3);
}

#[test]
fn service_missing_duration_serializes_null() {
    let mut service = sample_service();
    service.duration = None;
    let json = serde_json::to_value(service).unwrap();
    assert!(json["duration"].is_null());
}

// =============================================================================
// Live database coverage
// =============================================================================

#[cfg(feature = "live-db-tests")]
mod live {
    use super::*;
    use sqlx::postgres::PgPoolOptions;

    async fn live_pool() -> sqlx::PgPool {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required for live-db-tests");
        let pool = PgPoolOptions::new().connect(&url).await.expect("connect");
        sqlx::migrate!("src/db/migrations").run(&pool).await.expect("migrate");
        pool
    }

    #[tokio::test]
    async fn create_update_delete_round_trip() {
        let pool = live_pool().await;

        let created = create_service(&pool, "Test Wash", 123.0, Some("1h"))
            .await
            .expect("create");
        assert_eq!(created.status, "Active");
        assert_eq!(created.usage_count, 0);

        let changes = ServiceChanges { price: Some(150.0), ..ServiceChanges::default() };
        let updated = update_service(&pool, &created.id, &changes).await.expect("update");
        assert!((updated.price - 150.0).abs() < f64::EPSILON);
        assert_eq!(updated.name, "Test Wash");

        delete_service(&pool, &created.id).await.expect("delete");
        assert!(get_service(&pool, &created.id).await.expect("get").is_none());
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let pool = live_pool().await;
        let err = update_service(&pool, "zzzzzzzz", &ServiceChanges::default())
            .await
            .expect_err("should fail");
        assert!(matches!(err, CatalogError::NotFound(_)));
    }
}
