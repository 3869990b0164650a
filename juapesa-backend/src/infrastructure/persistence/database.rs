//! SQLite store for users, wallets, ledger entries and liquidity pools
//!
//! The pool connects lazily so a missing database never blocks startup;
//! `/readyz` reports reachability through [`Database::ping`].

use crate::domain::{
    LedgerEntry, LiquidityPoolRecord, NewLedgerEntry, NewUser, NewWallet, User, Wallet,
};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(3);
const MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("invalid database url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: sqlx::Error,
    },

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

const SCHEMA: &[(&str, &str)] = &[
    (
        "users",
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            phone TEXT NOT NULL UNIQUE CHECK (length(phone) <= 32),
            pin_hash TEXT NOT NULL CHECK (length(pin_hash) <= 128),
            kyc_level INTEGER NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "wallets",
        r#"
        CREATE TABLE IF NOT EXISTS wallets (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id),
            balance_local REAL NOT NULL DEFAULT 0,
            balance_usdc REAL NOT NULL DEFAULT 0
        );
        "#,
    ),
    (
        "ledger_entries",
        r#"
        CREATE TABLE IF NOT EXISTS ledger_entries (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            wallet_id INTEGER NOT NULL REFERENCES wallets(id),
            amount REAL NOT NULL,
            asset TEXT NOT NULL CHECK (length(asset) <= 16),
            note TEXT NOT NULL DEFAULT '' CHECK (length(note) <= 255)
        );
        "#,
    ),
    (
        "liquidity_pools",
        r#"
        CREATE TABLE IF NOT EXISTS liquidity_pools (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE CHECK (length(name) <= 64),
            balance REAL NOT NULL DEFAULT 0
        );
        "#,
    ),
];

/// Shared handle over a lazily-connecting SQLite pool
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Build the pool without opening a connection.
    /// In-memory URLs get a single long-lived connection so every query sees one schema.
    pub fn connect(url: &str) -> Result<Self, PersistenceError> {
        let options = SqliteConnectOptions::from_str(url)
            .map_err(|source| PersistenceError::InvalidUrl {
                url: url.to_string(),
                source,
            })?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool_options = SqlitePoolOptions::new().acquire_timeout(ACQUIRE_TIMEOUT);
        let pool_options = if is_memory_url(url) {
            pool_options
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            pool_options.max_connections(MAX_CONNECTIONS)
        };

        info!(url, "Database pool configured");

        Ok(Self {
            pool: pool_options.connect_lazy_with(options),
        })
    }

    /// Connect and create the schema, logging instead of failing
    pub async fn connect_and_init(url: &str) -> Result<Self, PersistenceError> {
        let db = Self::connect(url)?;
        if let Err(e) = db.init_schema().await {
            warn!(error = %e, "Schema initialisation failed, continuing without it");
        }
        Ok(db)
    }

    pub async fn init_schema(&self) -> Result<(), PersistenceError> {
        let mut conn = self.pool.acquire().await?;

        for (table, ddl) in SCHEMA {
            sqlx::query(*ddl).execute(&mut *conn).await?;
            tracing::debug!(table, "Table ready");
        }

        info!(tables = SCHEMA.len(), "Database schema initialised");
        Ok(())
    }

    /// Round trip used by the readiness check
    pub async fn ping(&self) -> Result<(), PersistenceError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    // Users

    pub async fn insert_user(&self, user: &NewUser) -> Result<User, PersistenceError> {
        let row = sqlx::query(
            r#"
            INSERT INTO users (phone, pin_hash, kyc_level)
            VALUES (?, ?, ?)
            RETURNING id, phone, pin_hash, kyc_level
            "#,
        )
        .bind(&user.phone)
        .bind(&user.pin_hash)
        .bind(user.kyc_level)
        .fetch_one(&self.pool)
        .await?;

        map_user(&row)
    }

    pub async fn get_user(&self, id: i64) -> Result<Option<User>, PersistenceError> {
        let row = sqlx::query("SELECT id, phone, pin_hash, kyc_level FROM users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        row.as_ref().map(map_user).transpose()
    }

    // Wallets

    pub async fn insert_wallet(&self, wallet: &NewWallet) -> Result<Wallet, PersistenceError> {
        let row = sqlx::query(
            r#"
            INSERT INTO wallets (user_id, balance_local, balance_usdc)
            VALUES (?, ?, ?)
            RETURNING id, user_id, balance_local, balance_usdc
            "#,
        )
        .bind(wallet.user_id)
        .bind(wallet.balance_local)
        .bind(wallet.balance_usdc)
        .fetch_one(&self.pool)
        .await?;

        map_wallet(&row)
    }

    pub async fn wallet_for_user(&self, user_id: i64) -> Result<Option<Wallet>, PersistenceError> {
        let row = sqlx::query(
            "SELECT id, user_id, balance_local, balance_usdc FROM wallets WHERE user_id = ? ORDER BY id LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(map_wallet).transpose()
    }

    // Ledger

    pub async fn insert_ledger_entry(
        &self,
        entry: &NewLedgerEntry,
    ) -> Result<LedgerEntry, PersistenceError> {
        let row = sqlx::query(
            r#"
            INSERT INTO ledger_entries (wallet_id, amount, asset, note)
            VALUES (?, ?, ?, ?)
            RETURNING id, wallet_id, amount, asset, note
            "#,
        )
        .bind(entry.wallet_id)
        .bind(entry.amount)
        .bind(&entry.asset)
        .bind(&entry.note)
        .fetch_one(&self.pool)
        .await?;

        map_ledger_entry(&row)
    }

    pub async fn ledger_entries_for_wallet(
        &self,
        wallet_id: i64,
    ) -> Result<Vec<LedgerEntry>, PersistenceError> {
        let rows = sqlx::query(
            "SELECT id, wallet_id, amount, asset, note FROM ledger_entries WHERE wallet_id = ? ORDER BY id",
        )
        .bind(wallet_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(map_ledger_entry).collect()
    }

    // Liquidity pools

    /// Insert the pool or overwrite the balance of an existing one with the same name
    pub async fn upsert_pool(
        &self,
        name: &str,
        balance: f64,
    ) -> Result<LiquidityPoolRecord, PersistenceError> {
        let row = sqlx::query(
            r#"
            INSERT INTO liquidity_pools (name, balance)
            VALUES (?, ?)
            ON CONFLICT(name) DO UPDATE SET balance = excluded.balance
            RETURNING id, name, balance
            "#,
        )
        .bind(name)
        .bind(balance)
        .fetch_one(&self.pool)
        .await?;

        map_pool(&row)
    }

    pub async fn list_pools(&self) -> Result<Vec<LiquidityPoolRecord>, PersistenceError> {
        let rows = sqlx::query("SELECT id, name, balance FROM liquidity_pools ORDER BY name")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(map_pool).collect()
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

fn map_user(row: &SqliteRow) -> Result<User, PersistenceError> {
    Ok(User {
        id: row.try_get("id")?,
        phone: row.try_get("phone")?,
        pin_hash: row.try_get("pin_hash")?,
        kyc_level: row.try_get("kyc_level")?,
    })
}

fn map_wallet(row: &SqliteRow) -> Result<Wallet, PersistenceError> {
    Ok(Wallet {
        id: row.try_get("id")?,
        user_id: row.try_get("user_id")?,
        balance_local: row.try_get("balance_local")?,
        balance_usdc: row.try_get("balance_usdc")?,
    })
}

fn map_ledger_entry(row: &SqliteRow) -> Result<LedgerEntry, PersistenceError> {
    Ok(LedgerEntry {
        id: row.try_get("id")?,
        wallet_id: row.try_get("wallet_id")?,
        amount: row.try_get("amount")?,
        asset: row.try_get("asset")?,
        note: row.try_get("note")?,
    })
}

fn map_pool(row: &SqliteRow) -> Result<LiquidityPoolRecord, PersistenceError> {
    Ok(LiquidityPoolRecord {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        balance: row.try_get("balance")?,
    })
}
