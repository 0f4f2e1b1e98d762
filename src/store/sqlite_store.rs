// ==========================================
// 仓库库存看板系统 - SQLite 商品存储实现
// ==========================================
// 表结构: item_master / inventory / warehouse_tasks
// 策略: 商品主数据 ON CONFLICT(sku) DO UPDATE（保留 created_at）;
//       库存明细按分部整体替换, 重复导入幂等
// ==========================================

use crate::db::open_sqlite_connection;
use crate::domain::{
    InventoryRecord, ProductRecord, ProductStatus, TaskStatus, Warehouse, WarehouseTask,
};
use crate::store::error::{StoreError, StoreResult};
use crate::store::item_store::ItemStore;
use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection, Transaction};
use std::sync::{Arc, Mutex};
use tracing::debug;

// ==========================================
// SqliteItemStore
// ==========================================
pub struct SqliteItemStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteItemStore {
    /// 打开数据库并初始化表结构
    ///
    /// # 参数
    /// - db_path: 数据库文件路径
    pub fn new(db_path: &str) -> StoreResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| StoreError::ConnectionError(e.to_string()))?;
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// 建表（IF NOT EXISTS, 重复打开无副作用）
    fn init_schema(conn: &Connection) -> StoreResult<()> {
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS item_master (
                sku         TEXT PRIMARY KEY,
                name        TEXT NOT NULL,
                barcode     TEXT,
                image       TEXT,
                warehouse   TEXT NOT NULL,
                status      TEXT NOT NULL DEFAULT 'Active',
                created_at  TEXT NOT NULL,
                updated_at  TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS inventory (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                sku         TEXT NOT NULL,
                bin         TEXT NOT NULL DEFAULT '',
                quantity    INTEGER NOT NULL DEFAULT 0,
                warehouse   TEXT NOT NULL,
                created_at  TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_inventory_sku ON inventory(sku);
            CREATE INDEX IF NOT EXISTS idx_inventory_warehouse ON inventory(warehouse);

            CREATE TABLE IF NOT EXISTS warehouse_tasks (
                id          TEXT PRIMARY KEY,
                title       TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                assigned_to TEXT,
                due_date    TEXT,
                status      TEXT NOT NULL DEFAULT 'Open'
            );
            "#,
        )?;
        Ok(())
    }

    /// 在事务中批量 upsert 商品主数据
    ///
    /// created_at 只在首次插入时写入, 后续冲突更新保留原值。
    fn upsert_item_master_tx(tx: &Transaction, products: &[ProductRecord]) -> StoreResult<usize> {
        let now = Utc::now();
        let mut stmt = tx.prepare(
            r#"
            INSERT INTO item_master (
                sku, name, barcode, image, warehouse, status, created_at, updated_at
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            ON CONFLICT(sku) DO UPDATE SET
                name = excluded.name,
                barcode = excluded.barcode,
                image = excluded.image,
                warehouse = excluded.warehouse,
                status = excluded.status,
                updated_at = excluded.updated_at
            "#,
        )?;

        let mut count = 0;
        for product in products {
            stmt.execute(params![
                product.sku,
                product.name,
                product.barcode,
                product.image,
                product.warehouse.division_name(),
                product.status.as_str(),
                now,
                now,
            ])?;
            count += 1;
        }
        Ok(count)
    }

    fn insert_inventory_tx(tx: &Transaction, records: &[InventoryRecord]) -> StoreResult<usize> {
        let now = Utc::now();
        let mut stmt = tx.prepare(
            r#"
            INSERT INTO inventory (sku, bin, quantity, warehouse, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )?;

        let mut count = 0;
        for record in records {
            stmt.execute(params![
                record.sku,
                record.bin,
                record.quantity,
                record.warehouse.division_name(),
                now,
            ])?;
            count += 1;
        }
        Ok(count)
    }
}

#[async_trait]
impl ItemStore for SqliteItemStore {
    async fn upsert_item_master(&self, products: &[ProductRecord]) -> StoreResult<usize> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))?;
        let tx = conn
            .transaction()
            .map_err(|e| StoreError::TransactionError(e.to_string()))?;
        let count = Self::upsert_item_master_tx(&tx, products)?;
        tx.commit()
            .map_err(|e| StoreError::TransactionError(e.to_string()))?;
        debug!(count = count, "商品主数据 upsert 完成");
        Ok(count)
    }

    async fn list_item_master(&self) -> StoreResult<Vec<ProductRecord>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))?;
        let mut stmt = conn.prepare(
            "SELECT sku, name, barcode, image, warehouse, status
             FROM item_master ORDER BY sku ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(ProductRecord {
                sku: row.get(0)?,
                name: row.get(1)?,
                barcode: row.get(2)?,
                image: row.get(3)?,
                warehouse: Warehouse::parse_lenient(&row.get::<_, String>(4)?),
                status: ProductStatus::parse_lenient(&row.get::<_, String>(5)?),
            })
        })?;
        let mut products = Vec::new();
        for row in rows {
            products.push(row?);
        }
        Ok(products)
    }

    async fn count_item_master(&self) -> StoreResult<usize> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM item_master", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    async fn replace_inventory(
        &self,
        warehouse: Warehouse,
        records: &[InventoryRecord],
    ) -> StoreResult<usize> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))?;
        let tx = conn
            .transaction()
            .map_err(|e| StoreError::TransactionError(e.to_string()))?;
        tx.execute(
            "DELETE FROM inventory WHERE warehouse = ?1",
            params![warehouse.division_name()],
        )?;
        let count = Self::insert_inventory_tx(&tx, records)?;
        tx.commit()
            .map_err(|e| StoreError::TransactionError(e.to_string()))?;
        debug!(warehouse = %warehouse, count = count, "库存明细替换完成");
        Ok(count)
    }

    async fn list_inventory(&self) -> StoreResult<Vec<InventoryRecord>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))?;
        let mut stmt = conn.prepare(
            "SELECT sku, bin, quantity, warehouse FROM inventory ORDER BY id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(InventoryRecord {
                sku: row.get(0)?,
                bin: row.get(1)?,
                quantity: row.get(2)?,
                warehouse: Warehouse::parse_lenient(&row.get::<_, String>(3)?),
            })
        })?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    async fn upsert_task(&self, task: &WarehouseTask) -> StoreResult<()> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))?;
        conn.execute(
            r#"
            INSERT INTO warehouse_tasks (id, title, description, assigned_to, due_date, status)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            ON CONFLICT(id) DO UPDATE SET
                title = excluded.title,
                description = excluded.description,
                assigned_to = excluded.assigned_to,
                due_date = excluded.due_date,
                status = excluded.status
            "#,
            params![
                task.id,
                task.title,
                task.description,
                task.assigned_to,
                task.due_date,
                task.status.as_str(),
            ],
        )?;
        Ok(())
    }

    async fn list_tasks(&self) -> StoreResult<Vec<WarehouseTask>> {
        let conn = self
            .conn
            .lock()
            .map_err(|e| StoreError::LockError(e.to_string()))?;
        let mut stmt = conn.prepare(
            "SELECT id, title, description, assigned_to, due_date, status
             FROM warehouse_tasks ORDER BY due_date IS NULL, due_date ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(WarehouseTask {
                id: row.get(0)?,
                title: row.get(1)?,
                description: row.get(2)?,
                assigned_to: row.get(3)?,
                due_date: row.get(4)?,
                status: TaskStatus::parse_lenient(&row.get::<_, String>(5)?),
            })
        })?;
        let mut tasks = Vec::new();
        for row in rows {
            tasks.push(row?);
        }
        Ok(tasks)
    }
}
