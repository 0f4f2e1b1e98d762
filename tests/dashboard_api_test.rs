// ==========================================
// 看板查询 API 测试
// ==========================================
// 测试目标: 款式分组视图、首页汇总、任务列表
// ==========================================


use std::sync::Arc;

use chrono::NaiveDate;
use warehouse_inventory::api::dashboard_api::DashboardApi;
use warehouse_inventory::domain::{TaskStatus, Warehouse, WarehouseTask};
use warehouse_inventory::logging;
use warehouse_inventory::store::item_store::ItemStore;
use warehouse_inventory::store::sqlite_store::SqliteItemStore;

use test_helpers::{create_test_db, sample_inventory, sample_product};

async fn seed_store(store: &SqliteItemStore) {
    store
        .upsert_item_master(&[
            sample_product("CRS-TEE-S", "Retail Tee", Warehouse::Retail),
            sample_product("CRS-TEE-M", "Retail Tee", Warehouse::Retail),
            sample_product("CRS-TEE-L", "Retail Tee", Warehouse::Retail),
            sample_product("CTS-JRS-M", "Pro Jersey", Warehouse::Teamwear),
            sample_product("BALL", "Match Ball", Warehouse::Teamwear),
        ])
        .await
        .expect("Failed to seed products");

    store
        .replace_inventory(
            Warehouse::Retail,
            &[
                sample_inventory("CRS-TEE-S", "R-01", 6, Warehouse::Retail),
                sample_inventory("CRS-TEE-M", "R-01", 4, Warehouse::Retail),
                sample_inventory("CRS-TEE-M", "R-02", 5, Warehouse::Retail),
            ],
        )
        .await
        .expect("Failed to seed retail inventory");
    store
        .replace_inventory(
            Warehouse::Teamwear,
            &[sample_inventory("CTS-JRS-M", "A-01", 10, Warehouse::Teamwear)],
        )
        .await
        .expect("Failed to seed teamwear inventory");
}

#[tokio::test]
async fn test_style_groups_view() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let store = Arc::new(SqliteItemStore::new(&db_path).expect("Failed to open store"));
    seed_store(&store).await;

    let api = DashboardApi::new(store.clone());
    let groups = api.style_groups().await.expect("style groups query failed");

    // 组按款式编码排序: BALL < CRS-TEE < CTS-JRS
    let styles: Vec<&str> = groups.iter().map(|g| g.style.as_str()).collect();
    assert_eq!(styles, vec!["BALL", "CRS-TEE", "CTS-JRS"]);

    // 无连字符 SKU 自成一组, 尺码 OS
    assert_eq!(groups[0].variants.len(), 1);
    assert_eq!(groups[0].variants[0].size, "OS");

    // 变体按尺码榜排序, 多库位数量求和
    let tee = &groups[1];
    let sizes: Vec<&str> = tee.variants.iter().map(|v| v.size.as_str()).collect();
    assert_eq!(sizes, vec!["S", "M", "L"]);
    let tee_m = tee.variants.iter().find(|v| v.size == "M").unwrap();
    assert_eq!(tee_m.quantity, 9, "quantities across bins should sum");
    assert_eq!(tee.total_quantity, 15);

    // 无库存的变体数量为 0
    let tee_l = tee.variants.iter().find(|v| v.size == "L").unwrap();
    assert_eq!(tee_l.quantity, 0);
}

#[tokio::test]
async fn test_dashboard_summary() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let store = Arc::new(SqliteItemStore::new(&db_path).expect("Failed to open store"));
    seed_store(&store).await;

    let api = DashboardApi::new(store.clone());
    let summary = api.summary().await.expect("summary query failed");

    assert_eq!(summary.items, 5);
    assert_eq!(summary.styles, 3);
    assert_eq!(summary.inventory_records, 4);
    assert_eq!(summary.total_quantity, 25);
}

#[tokio::test]
async fn test_dashboard_tasks() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let store = Arc::new(SqliteItemStore::new(&db_path).expect("Failed to open store"));

    store
        .upsert_task(&WarehouseTask {
            id: "T-100".to_string(),
            title: "上架新款".to_string(),
            description: String::new(),
            assigned_to: None,
            due_date: NaiveDate::from_ymd_opt(2025, 10, 1),
            status: TaskStatus::Open,
        })
        .await
        .expect("Failed to upsert task");
    store
        .upsert_task(&WarehouseTask {
            id: "T-101".to_string(),
            title: "清点球类".to_string(),
            description: "全部 BALL 系列".to_string(),
            assigned_to: Some("Alex".to_string()),
            due_date: NaiveDate::from_ymd_opt(2025, 9, 15),
            status: TaskStatus::InProgress,
        })
        .await
        .expect("Failed to upsert task");

    let api = DashboardApi::new(store.clone());
    let tasks = api.tasks().await.expect("tasks query failed");

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, "T-101", "earlier due date lists first");
    assert_eq!(tasks[0].status, TaskStatus::InProgress);
    assert_eq!(tasks[1].id, "T-100");
}

#[tokio::test]
async fn test_empty_dashboard() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let store = Arc::new(SqliteItemStore::new(&db_path).expect("Failed to open store"));

    let api = DashboardApi::new(store);
    let groups = api.style_groups().await.expect("style groups query failed");
    assert!(groups.is_empty());

    let summary = api.summary().await.expect("summary query failed");
    assert_eq!(summary.items, 0);
    assert_eq!(summary.total_quantity, 0);
}
