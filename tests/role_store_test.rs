//! Integration tests for the role store
//!
//! Run against in-memory SQLite through the `Any` driver.

mod common;

use common::{memory_store, new_role, recorded_store};
use rolestore::prelude::*;
use store_object::datetime::MAX_DATETIME;

#[tokio::test]
async fn test_create_then_find_round_trip() {
    let store = memory_store().await;
    let mut ctx = ExecContext::ambient();

    let mut role = new_role("ADMIN", "Administrator", RoleStatus::Active);
    role.set_memo("built in");
    store.roles().create(&mut ctx, &mut role).await.unwrap();

    assert!(!role.record().is_dirty());
    assert_eq!(role.created_at(), role.updated_at());
    assert_eq!(role.soft_deleted_at(), MAX_DATETIME);

    let found = store
        .roles()
        .find_by_id(&mut ctx, role.id())
        .await
        .unwrap()
        .expect("created role should be found");

    assert_eq!(found.id(), role.id());
    assert_eq!(found.handle(), "ADMIN");
    assert_eq!(found.title(), "Administrator");
    assert_eq!(found.status(), "active");
    assert_eq!(found.memo(), "built in");
    assert_eq!(found.created_at(), role.created_at());
    assert!(found.record().changed_data().is_empty());
}

#[tokio::test]
async fn test_create_assigns_missing_id() {
    let store = memory_store().await;
    let mut ctx = ExecContext::ambient();

    let mut role = new_role("EDITOR", "Editor", RoleStatus::Inactive);
    role.set_id("");
    store.roles().create(&mut ctx, &mut role).await.unwrap();

    assert_eq!(role.id().len(), 32);
    assert!(store
        .roles()
        .find_by_id(&mut ctx, role.id())
        .await
        .unwrap()
        .is_some());
}

#[tokio::test]
async fn test_id_only_list() {
    let store = memory_store().await;
    let mut ctx = ExecContext::ambient();

    let mut first = new_role("A", "Alpha", RoleStatus::Active);
    let mut second = new_role("B", "Beta", RoleStatus::Active);
    store.roles().create(&mut ctx, &mut first).await.unwrap();
    store.roles().create(&mut ctx, &mut second).await.unwrap();

    let roles = store
        .roles()
        .list(&mut ctx, &RoleQuery::new().id(first.id()))
        .await
        .unwrap();

    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].id(), first.id());

    let none = store
        .roles()
        .list(&mut ctx, &RoleQuery::new().id("missing"))
        .await
        .unwrap();
    assert!(none.is_empty());
}

#[tokio::test]
async fn test_update_is_idempotent() {
    let (store, logger) = recorded_store().await;
    let mut ctx = ExecContext::ambient();

    let mut role = new_role("ADMIN", "Administrator", RoleStatus::Inactive);
    store.roles().create(&mut ctx, &mut role).await.unwrap();
    assert_eq!(logger.operations(), vec!["create"]);
    logger.clear();

    store.roles().update(&mut ctx, &mut role).await.unwrap();
    assert!(logger.operations().is_empty());

    role.set_title("Admin");
    store.roles().update(&mut ctx, &mut role).await.unwrap();
    assert_eq!(logger.operations(), vec!["update"]);

    let sql = &logger.statements()[0];
    assert!(sql.contains(r#""title" = ?"#));
    assert!(sql.contains(r#""updated_at" = ?"#));
    assert!(!sql.contains(r#""handle""#));
    assert!(!sql.contains(r#"SET "id""#));

    logger.clear();
    store.roles().update(&mut ctx, &mut role).await.unwrap();
    assert!(logger.operations().is_empty());

    let found = store
        .roles()
        .find_by_handle(&mut ctx, "ADMIN")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.title(), "Admin");
}

#[tokio::test]
async fn test_debug_toggle_controls_statement_logging() {
    let (store, logger) = recorded_store().await;
    let mut ctx = ExecContext::ambient();

    store.enable_debug(false);
    assert!(!store.is_debug_enabled());
    let mut role = new_role("QUIET", "Quiet", RoleStatus::Active);
    store.roles().create(&mut ctx, &mut role).await.unwrap();
    assert!(logger.operations().is_empty());

    store.enable_debug(true);
    store
        .roles()
        .count(&mut ctx, &RoleQuery::new())
        .await
        .unwrap();
    assert_eq!(logger.operations(), vec!["count"]);
    assert!(logger.statements()[0].starts_with("SELECT COUNT(*) AS count"));
}

#[tokio::test]
async fn test_soft_delete_visibility() {
    let store = memory_store().await;
    let mut ctx = ExecContext::ambient();

    let mut role = new_role("TEMP", "Temporary", RoleStatus::Active);
    store.roles().create(&mut ctx, &mut role).await.unwrap();
    store.roles().soft_delete(&mut ctx, &mut role).await.unwrap();

    assert!(store
        .roles()
        .find_by_id(&mut ctx, role.id())
        .await
        .unwrap()
        .is_none());
    assert!(store
        .roles()
        .find_by_handle(&mut ctx, "TEMP")
        .await
        .unwrap()
        .is_none());

    let all = store
        .roles()
        .list(
            &mut ctx,
            &RoleQuery::new().id(role.id()).soft_deleted_included(true),
        )
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
    assert!(all[0].is_soft_deleted());

    let visible = store
        .roles()
        .count(&mut ctx, &RoleQuery::new())
        .await
        .unwrap();
    assert_eq!(visible, 0);
}

#[tokio::test]
async fn test_soft_delete_by_id() {
    let store = memory_store().await;
    let mut ctx = ExecContext::ambient();

    store
        .roles()
        .soft_delete_by_id(&mut ctx, "does-not-exist")
        .await
        .unwrap();

    let mut role = new_role("GONE", "Gone", RoleStatus::Active);
    store.roles().create(&mut ctx, &mut role).await.unwrap();
    store
        .roles()
        .soft_delete_by_id(&mut ctx, role.id())
        .await
        .unwrap();

    assert!(store
        .roles()
        .find_by_id(&mut ctx, role.id())
        .await
        .unwrap()
        .is_none());

    // Already hidden, so nothing happens
    store
        .roles()
        .soft_delete_by_id(&mut ctx, role.id())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_hard_delete() {
    let store = memory_store().await;
    let mut ctx = ExecContext::ambient();

    let mut keep = new_role("KEEP", "Keep", RoleStatus::Active);
    let mut dropped = new_role("DROP", "Drop", RoleStatus::Active);
    store.roles().create(&mut ctx, &mut keep).await.unwrap();
    store.roles().create(&mut ctx, &mut dropped).await.unwrap();

    assert!(store.roles().delete(&mut ctx, &dropped).await.unwrap());
    assert!(!store
        .roles()
        .delete_by_id(&mut ctx, dropped.id())
        .await
        .unwrap());

    let remaining = store
        .roles()
        .list(&mut ctx, &RoleQuery::new().soft_deleted_included(true))
        .await
        .unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].handle(), "KEEP");
}

/// Creates roles R1..Rn with created_at on consecutive days of January 2024.
async fn seed_dated_roles(store: &RoleStore, count: usize) -> Vec<Role> {
    let mut ctx = ExecContext::ambient();
    let mut roles = Vec::new();
    // Inserted newest first so insertion order never matches the sort
    for day in (1..=count).rev() {
        let mut role = new_role(&format!("R{}", day), &format!("Role {}", day), RoleStatus::Active);
        store.roles().create(&mut ctx, &mut role).await.unwrap();
        role.set_created_at(format!("2024-01-{:02} 00:00:00", day));
        store.roles().update(&mut ctx, &mut role).await.unwrap();
        roles.push(role);
    }
    roles
}

fn handles(roles: &[Role]) -> Vec<&str> {
    roles.iter().map(Role::handle).collect()
}

#[tokio::test]
async fn test_ordering_and_pagination() {
    let store = memory_store().await;
    let mut ctx = ExecContext::ambient();
    seed_dated_roles(&store, 3).await;

    let oldest = store
        .roles()
        .list(
            &mut ctx,
            &RoleQuery::new()
                .order_by("created_at")
                .sort_direction("asc")
                .limit(2),
        )
        .await
        .unwrap();
    assert_eq!(handles(&oldest), vec!["R1", "R2"]);

    let newest = store
        .roles()
        .list(&mut ctx, &RoleQuery::new().order_by("created_at").limit(2))
        .await
        .unwrap();
    assert_eq!(handles(&newest), vec!["R3", "R2"]);

    let misspelled = store
        .roles()
        .list(
            &mut ctx,
            &RoleQuery::new()
                .order_by("created_at")
                .sort_direction("ascending"),
        )
        .await
        .unwrap();
    assert_eq!(handles(&misspelled), vec!["R3", "R2", "R1"]);

    let second_page = store
        .roles()
        .list(
            &mut ctx,
            &RoleQuery::new()
                .order_by("created_at")
                .sort_direction("ASC")
                .limit(2)
                .offset(2),
        )
        .await
        .unwrap();
    assert_eq!(handles(&second_page), vec!["R3"]);

    let offset_only = store
        .roles()
        .list(
            &mut ctx,
            &RoleQuery::new()
                .order_by("created_at")
                .sort_direction("asc")
                .offset(1),
        )
        .await
        .unwrap();
    assert_eq!(handles(&offset_only), vec!["R2", "R3"]);
}

#[tokio::test]
async fn test_count_ignores_pagination() {
    let store = memory_store().await;
    let mut ctx = ExecContext::ambient();
    seed_dated_roles(&store, 3).await;

    let count = store
        .roles()
        .count(
            &mut ctx,
            &RoleQuery::new()
                .order_by("created_at")
                .limit(1)
                .offset(2),
        )
        .await
        .unwrap();
    assert_eq!(count, 3);
}

#[tokio::test]
async fn test_created_at_range() {
    let store = memory_store().await;
    let mut ctx = ExecContext::ambient();
    seed_dated_roles(&store, 4).await;

    let query = RoleQuery::new()
        .created_at_gte("2024-01-02 00:00:00")
        .created_at_lte("2024-01-03 00:00:00")
        .order_by("created_at")
        .sort_direction("asc");
    let between = store.roles().list(&mut ctx, &query).await.unwrap();
    assert_eq!(handles(&between), vec!["R2", "R3"]);

    let after = store
        .roles()
        .count(
            &mut ctx,
            &RoleQuery::new().created_at_gte("2024-01-03 00:00:00"),
        )
        .await
        .unwrap();
    assert_eq!(after, 2);

    let before = store
        .roles()
        .count(
            &mut ctx,
            &RoleQuery::new().created_at_lte("2024-01-01 00:00:00"),
        )
        .await
        .unwrap();
    assert_eq!(before, 1);
}

#[tokio::test]
async fn test_status_title_and_membership_filters() {
    let store = memory_store().await;
    let mut ctx = ExecContext::ambient();

    let mut admin = new_role("ADMIN", "Administrator", RoleStatus::Active);
    let mut editor = new_role("EDITOR", "Content Editor", RoleStatus::Inactive);
    let mut viewer = new_role("VIEWER", "Viewer", RoleStatus::Deleted);
    for role in [&mut admin, &mut editor, &mut viewer] {
        store.roles().create(&mut ctx, role).await.unwrap();
    }

    let active = store
        .roles()
        .list(&mut ctx, &RoleQuery::new().status(RoleStatus::Active))
        .await
        .unwrap();
    assert_eq!(handles(&active), vec!["ADMIN"]);

    let some = store
        .roles()
        .count(
            &mut ctx,
            &RoleQuery::new().status_in([RoleStatus::Active, RoleStatus::Inactive]),
        )
        .await
        .unwrap();
    assert_eq!(some, 2);

    let titled = store
        .roles()
        .list(&mut ctx, &RoleQuery::new().title_like("EDIT"))
        .await
        .unwrap();
    assert_eq!(handles(&titled), vec!["EDITOR"]);

    let by_ids = store
        .roles()
        .count(
            &mut ctx,
            &RoleQuery::new().id_in([admin.id(), viewer.id()]),
        )
        .await
        .unwrap();
    assert_eq!(by_ids, 2);
}

#[tokio::test]
async fn test_column_projection() {
    let store = memory_store().await;
    let mut ctx = ExecContext::ambient();

    let mut role = new_role("ADMIN", "Administrator", RoleStatus::Active);
    store.roles().create(&mut ctx, &mut role).await.unwrap();

    let roles = store
        .roles()
        .list(&mut ctx, &RoleQuery::new().columns(["id", "handle"]))
        .await
        .unwrap();

    assert_eq!(roles.len(), 1);
    assert_eq!(roles[0].handle(), "ADMIN");
    assert!(!roles[0].record().contains("title"));
    assert_eq!(roles[0].title(), "");
}

#[tokio::test]
async fn test_admin_scenario() {
    let store = memory_store().await;
    let mut ctx = ExecContext::ambient();

    let mut role = new_role("ADMIN", "Administrator", RoleStatus::Inactive);
    store.roles().create(&mut ctx, &mut role).await.unwrap();
    assert_eq!(
        store
            .roles()
            .count(&mut ctx, &RoleQuery::new())
            .await
            .unwrap(),
        1
    );

    role.set_status(RoleStatus::Active);
    store.roles().update(&mut ctx, &mut role).await.unwrap();

    let found = store
        .roles()
        .find_by_handle(&mut ctx, "ADMIN")
        .await
        .unwrap()
        .expect("ADMIN should exist");
    assert_eq!(found.status(), "active");
    assert!(found.is_active());
}

#[tokio::test]
async fn test_metas_round_trip() {
    let store = memory_store().await;
    let mut ctx = ExecContext::ambient();

    let mut metas = Metas::new();
    metas.insert("a".to_string(), "1".to_string());
    metas.insert("b".to_string(), "2".to_string());

    let mut role = new_role("META", "Meta", RoleStatus::Active);
    role.set_metas(&metas).unwrap();
    assert_eq!(role.metas().unwrap(), metas);
    store.roles().create(&mut ctx, &mut role).await.unwrap();

    let mut found = store
        .roles()
        .find_by_id(&mut ctx, role.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.metas().unwrap(), metas);

    found.set_meta("c", "3").unwrap();
    store.roles().update(&mut ctx, &mut found).await.unwrap();

    let reloaded = store
        .roles()
        .find_by_id(&mut ctx, role.id())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(reloaded.meta("c"), "3");
    assert_eq!(reloaded.metas().unwrap().len(), 3);

    let mut empty = new_role("EMPTY", "Empty", RoleStatus::Active);
    empty.set_metas(&Metas::new()).unwrap();
    store.roles().create(&mut ctx, &mut empty).await.unwrap();
    let empty = store
        .roles()
        .find_by_handle(&mut ctx, "EMPTY")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(empty.metas_raw(), "{}");
    assert!(empty.metas().unwrap().is_empty());
}

#[tokio::test]
async fn test_validation_errors_before_io() {
    let (store, logger) = recorded_store().await;
    let mut ctx = ExecContext::ambient();

    let cases = [
        RoleQuery::new().id(""),
        RoleQuery::new().handle(""),
        RoleQuery::new().id_in(Vec::<String>::new()),
        RoleQuery::new().limit(0),
        RoleQuery::new().offset(-1),
        RoleQuery::new().order_by(""),
    ];
    for query in cases {
        let err = store.roles().list(&mut ctx, &query).await.unwrap_err();
        assert!(err.is_validation(), "expected validation error, got {err:?}");
        let err = store.roles().count(&mut ctx, &query).await.unwrap_err();
        assert!(err.is_validation(), "expected validation error, got {err:?}");
    }

    assert!(matches!(
        store.roles().find_by_id(&mut ctx, "").await,
        Err(StoreError::Validation(ValidationError::EmptyValue { field: "id" }))
    ));
    assert!(matches!(
        store.roles().find_by_handle(&mut ctx, "").await,
        Err(StoreError::Validation(_))
    ));
    assert!(matches!(
        store.roles().delete_by_id(&mut ctx, "").await,
        Err(StoreError::Validation(_))
    ));

    assert!(logger.operations().is_empty());
}

#[tokio::test]
async fn test_closed_pool_is_connection_error() {
    let store = memory_store().await;
    store.health_check().await.unwrap();
    store.close().await;

    let mut ctx = ExecContext::ambient();
    let err = store
        .roles()
        .list(&mut ctx, &RoleQuery::new())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Connection(_)));
}
