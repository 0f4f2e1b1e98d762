// ==========================================
// SqliteItemStore 集成测试
// ==========================================
// 测试目标: 商品主数据 upsert、库存整体替换、任务读写
// ==========================================


use chrono::NaiveDate;
use warehouse_inventory::domain::{ProductStatus, TaskStatus, Warehouse, WarehouseTask};
use warehouse_inventory::logging;
use warehouse_inventory::store::item_store::ItemStore;
use warehouse_inventory::store::sqlite_store::SqliteItemStore;

use test_helpers::{create_test_db, sample_inventory, sample_product};

#[tokio::test]
async fn test_upsert_inserts_then_updates() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let store = SqliteItemStore::new(&db_path).expect("Failed to open store");

    let count = store
        .upsert_item_master(&[
            sample_product("CTS-JRS-M", "Jersey M", Warehouse::Teamwear),
            sample_product("CTS-JRS-S", "Jersey S", Warehouse::Teamwear),
        ])
        .await
        .expect("first upsert should succeed");
    assert_eq!(count, 2);
    assert_eq!(store.count_item_master().await.unwrap(), 2);

    // 记录首次写入时间
    let conn = rusqlite::Connection::open(&db_path).expect("Failed to open db");
    let (created_1, updated_1): (String, String) = conn
        .query_row(
            "SELECT created_at, updated_at FROM item_master WHERE sku = 'CTS-JRS-M'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("Failed to read timestamps");

    tokio::time::sleep(std::time::Duration::from_millis(10)).await;

    // 同 SKU 再写入: 覆盖字段, 不新增行
    let mut updated_product = sample_product("CTS-JRS-M", "Home Jersey M", Warehouse::Teamwear);
    updated_product.barcode = Some("5060101300028".to_string());
    store
        .upsert_item_master(&[updated_product])
        .await
        .expect("second upsert should succeed");

    assert_eq!(store.count_item_master().await.unwrap(), 2, "upsert must not duplicate");
    let products = store.list_item_master().await.unwrap();
    let jersey = products.iter().find(|p| p.sku == "CTS-JRS-M").unwrap();
    assert_eq!(jersey.name, "Home Jersey M");
    assert_eq!(jersey.barcode.as_deref(), Some("5060101300028"));

    // created_at 保留首次值, updated_at 更新
    let (created_2, updated_2): (String, String) = conn
        .query_row(
            "SELECT created_at, updated_at FROM item_master WHERE sku = 'CTS-JRS-M'",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .expect("Failed to read timestamps");
    assert_eq!(created_2, created_1, "created_at must survive the update");
    assert_ne!(updated_2, updated_1, "updated_at must change on update");
}

#[tokio::test]
async fn test_list_item_master_sorted_and_lenient() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let store = SqliteItemStore::new(&db_path).expect("Failed to open store");

    store
        .upsert_item_master(&[sample_product("ZZ-TOP-L", "Last", Warehouse::Teamwear)])
        .await
        .unwrap();

    // 直接塞一行带历史遗留状态值的数据, 读取层必须宽容
    let conn = rusqlite::Connection::open(&db_path).expect("Failed to open db");
    conn.execute(
        "INSERT INTO item_master (sku, name, barcode, image, warehouse, status, created_at, updated_at)
         VALUES ('AA-ONE-S', 'First', NULL, NULL, 'Retail', 'Discontinued',
                 '2024-01-01T00:00:00+00:00', '2024-01-01T00:00:00+00:00')",
        [],
    )
    .expect("Failed to insert raw row");

    let products = store.list_item_master().await.unwrap();
    assert_eq!(products.len(), 2);
    assert_eq!(products[0].sku, "AA-ONE-S", "list must be sku-sorted");
    assert_eq!(products[1].sku, "ZZ-TOP-L");
    assert_eq!(
        products[0].status,
        ProductStatus::Active,
        "unknown status falls back to Active"
    );
    assert_eq!(products[0].warehouse, Warehouse::Retail);
}

#[tokio::test]
async fn test_replace_inventory_is_idempotent() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let store = SqliteItemStore::new(&db_path).expect("Failed to open store");

    let teamwear = vec![
        sample_inventory("CTS-JRS-M", "A-01", 10, Warehouse::Teamwear),
        sample_inventory("CTS-JRS-S", "A-02", 4, Warehouse::Teamwear),
    ];
    let retail = vec![sample_inventory("CRS-TEE-M", "R-01", 9, Warehouse::Retail)];

    store.replace_inventory(Warehouse::Teamwear, &teamwear).await.unwrap();
    store.replace_inventory(Warehouse::Retail, &retail).await.unwrap();
    assert_eq!(store.list_inventory().await.unwrap().len(), 3);

    // 同一批数据重复替换, 总数不变
    store.replace_inventory(Warehouse::Teamwear, &teamwear).await.unwrap();
    assert_eq!(
        store.list_inventory().await.unwrap().len(),
        3,
        "re-running the same import must not accumulate rows"
    );

    // 替换只影响目标分部
    let smaller = vec![sample_inventory("CTS-JRS-M", "A-01", 7, Warehouse::Teamwear)];
    store.replace_inventory(Warehouse::Teamwear, &smaller).await.unwrap();
    let records = store.list_inventory().await.unwrap();
    assert_eq!(records.len(), 2);
    let retail_record = records
        .iter()
        .find(|r| r.warehouse == Warehouse::Retail)
        .expect("retail inventory must survive a teamwear replace");
    assert_eq!(retail_record.quantity, 9);
}

#[tokio::test]
async fn test_task_round_trip_and_ordering() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let store = SqliteItemStore::new(&db_path).expect("Failed to open store");

    let dated = WarehouseTask {
        id: "T-001".to_string(),
        title: "盘点 A 区".to_string(),
        description: "货架 A-01 至 A-12".to_string(),
        assigned_to: Some("Sam".to_string()),
        due_date: NaiveDate::from_ymd_opt(2025, 9, 1),
        status: TaskStatus::Open,
    };
    let undated = WarehouseTask {
        id: "T-002".to_string(),
        title: "整理退货".to_string(),
        description: String::new(),
        assigned_to: None,
        due_date: None,
        status: TaskStatus::Open,
    };

    store.upsert_task(&undated).await.unwrap();
    store.upsert_task(&dated).await.unwrap();

    // 同 id 再写入更新状态
    let mut in_progress = dated.clone();
    in_progress.status = TaskStatus::InProgress;
    store.upsert_task(&in_progress).await.unwrap();

    let tasks = store.list_tasks().await.unwrap();
    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, "T-001", "dated tasks sort before undated ones");
    assert_eq!(tasks[0].status, TaskStatus::InProgress);
    assert_eq!(tasks[0].due_date, NaiveDate::from_ymd_opt(2025, 9, 1));
    assert_eq!(tasks[1].id, "T-002");
    assert_eq!(tasks[1].due_date, None);
}

#[tokio::test]
async fn test_empty_store_lists_nothing() {
    logging::init_test();

    let (_temp_file, db_path) = create_test_db().expect("Failed to create test db");
    let store = SqliteItemStore::new(&db_path).expect("Failed to open store");

    assert_eq!(store.count_item_master().await.unwrap(), 0);
    assert!(store.list_item_master().await.unwrap().is_empty());
    assert!(store.list_inventory().await.unwrap().is_empty());
    assert!(store.list_tasks().await.unwrap().is_empty());
}
