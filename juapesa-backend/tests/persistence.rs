//! Integration tests for the SQLite store

use juapesa_backend::Database;
use juapesa_backend::domain::{NewLedgerEntry, NewUser, NewWallet};

async fn memory_db() -> Database {
    let db = Database::connect("sqlite::memory:").unwrap();
    db.init_schema().await.unwrap();
    db
}

#[tokio::test]
async fn test_schema_initialises_in_memory() {
    let db = memory_db().await;

    // Running it again is a no-op
    db.init_schema().await.unwrap();
    db.ping().await.unwrap();
    assert!(db.list_pools().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_user_and_wallet_link_by_id() {
    let db = memory_db().await;

    let user = db
        .insert_user(&NewUser::new("+254700000001", "hash").with_kyc_level(1))
        .await
        .unwrap();
    let wallet = db
        .insert_wallet(&NewWallet::for_user(user.id).with_balances(1500.0, 12.5))
        .await
        .unwrap();

    assert_eq!(wallet.user_id, user.id);

    let fetched = db.get_user(user.id).await.unwrap().unwrap();
    assert_eq!(fetched, user);
    assert_eq!(fetched.kyc_level, 1);

    let found = db.wallet_for_user(user.id).await.unwrap().unwrap();
    assert_eq!(found, wallet);
    assert_eq!(found.balance_usdc, 12.5);
}

#[tokio::test]
async fn test_new_wallet_defaults_to_zero() {
    let db = memory_db().await;
    let user = db.insert_user(&NewUser::new("+254711", "h")).await.unwrap();

    let wallet = db.insert_wallet(&NewWallet::for_user(user.id)).await.unwrap();

    assert_eq!(wallet.balance_local, 0.0);
    assert_eq!(wallet.balance_usdc, 0.0);
}

#[tokio::test]
async fn test_duplicate_phone_rejected() {
    let db = memory_db().await;
    db.insert_user(&NewUser::new("+254722", "h")).await.unwrap();

    assert!(db.insert_user(&NewUser::new("+254722", "h2")).await.is_err());
}

#[tokio::test]
async fn test_phone_length_enforced() {
    let db = memory_db().await;
    let long_phone = "9".repeat(33);

    assert!(db.insert_user(&NewUser::new(long_phone, "h")).await.is_err());
}

#[tokio::test]
async fn test_wallet_requires_existing_user() {
    let db = memory_db().await;

    assert!(db.insert_wallet(&NewWallet::for_user(999)).await.is_err());
}

#[tokio::test]
async fn test_ledger_entries_for_wallet() {
    let db = memory_db().await;
    let user = db.insert_user(&NewUser::new("+254733", "h")).await.unwrap();
    let wallet = db.insert_wallet(&NewWallet::for_user(user.id)).await.unwrap();

    db.insert_ledger_entry(&NewLedgerEntry::new(wallet.id, 100.0, "LOCAL").with_note("topup"))
        .await
        .unwrap();
    db.insert_ledger_entry(&NewLedgerEntry::new(wallet.id, -0.75, "USDC"))
        .await
        .unwrap();

    let entries = db.ledger_entries_for_wallet(wallet.id).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].asset, "LOCAL");
    assert_eq!(entries[0].note, "topup");
    assert_eq!(entries[1].amount, -0.75);
    assert_eq!(entries[1].note, "");

    assert!(db.ledger_entries_for_wallet(wallet.id + 1).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upsert_pool_overwrites_balance() {
    let db = memory_db().await;

    let first = db.upsert_pool("kes-main", 1000.0).await.unwrap();
    db.upsert_pool("usdc-hedera", 50.0).await.unwrap();
    let updated = db.upsert_pool("kes-main", 750.0).await.unwrap();

    assert_eq!(first.id, updated.id);
    assert_eq!(updated.balance, 750.0);

    let pools = db.list_pools().await.unwrap();
    let names: Vec<&str> = pools.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["kes-main", "usdc-hedera"]);
}

#[tokio::test]
async fn test_ping_fails_for_unreachable_path() {
    let db = Database::connect("sqlite:///nonexistent/dir/db.sqlite?mode=ro").unwrap();

    assert!(db.ping().await.is_err());
}

#[tokio::test]
async fn test_connect_and_init_survives_unreachable_path() {
    // Schema failure is logged, not returned
    let db = Database::connect_and_init("sqlite:///nonexistent/dir/db.sqlite")
        .await
        .unwrap();

    assert!(db.ping().await.is_err());
}
