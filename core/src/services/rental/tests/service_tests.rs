//! Tests for every observable property of the rental transaction

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use uuid::Uuid;

use crate::domain::entities::{Equipment, User};
use crate::errors::DomainError;
use crate::repositories::{EquipmentRepository, InMemoryStore, UserRepository};
use crate::services::rental::{NewRental, RentalService, RentalUpdate};

type Engine = RentalService<InMemoryStore, InMemoryStore, InMemoryStore, InMemoryStore>;

fn engine(store: &Arc<InMemoryStore>) -> Engine {
    RentalService::new(
        store.clone(),
        store.clone(),
        store.clone(),
        store.clone(),
    )
}

async fn seed_user(store: &InMemoryStore, deposit: Decimal) -> User {
    let mut user = User::new("renter@example.com".to_string(), "hash".to_string());
    user.credit(deposit);
    UserRepository::create(store, user).await.unwrap()
}

async fn seed_equipment(store: &InMemoryStore, available: bool, cost: Decimal) -> Equipment {
    let mut unit = Equipment::new(
        "Mini excavator".to_string(),
        true,
        cost,
        "earthmoving".to_string(),
    );
    if !available {
        unit.mark_rented().unwrap();
    }
    EquipmentRepository::create(store, unit).await.unwrap()
}

fn request(user_id: Uuid, equipment_id: Uuid) -> NewRental {
    NewRental {
        user_id,
        equipment_id,
        rental_date: Utc::now(),
        return_date: None,
        status: "ongoing".to_string(),
    }
}

#[tokio::test]
async fn successful_rental_debits_flips_and_records() {
    let store = Arc::new(InMemoryStore::new());
    let user = seed_user(&store, dec!(100)).await;
    let unit = seed_equipment(&store, true, dec!(30)).await;

    let outcome = engine(&store)
        .create_rental(request(user.id, unit.id))
        .await
        .unwrap();

    // Deposit decreased by exactly the rental cost
    assert_eq!(outcome.deposit_balance, dec!(70));
    assert_eq!(outcome.record.user_id, user.id);
    assert_eq!(outcome.record.equipment_id, unit.id);

    let stored_user = UserRepository::find_by_id(&*store, user.id).await.unwrap().unwrap();
    let stored_unit = EquipmentRepository::find_by_id(&*store, unit.id).await.unwrap().unwrap();
    assert_eq!(stored_user.deposit, dec!(70));
    assert!(!stored_unit.availability);
    assert_eq!(store.rental_count().await, 1);
}

#[tokio::test]
async fn unavailable_equipment_is_a_conflict_with_no_state_change() {
    let store = Arc::new(InMemoryStore::new());
    let user = seed_user(&store, dec!(100)).await;
    let unit = seed_equipment(&store, false, dec!(30)).await;

    let err = engine(&store)
        .create_rental(request(user.id, unit.id))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::EquipmentUnavailable));

    let stored_user = UserRepository::find_by_id(&*store, user.id).await.unwrap().unwrap();
    assert_eq!(stored_user.deposit, dec!(100));
    assert_eq!(store.rental_count().await, 0);
}

#[tokio::test]
async fn insufficient_deposit_is_payment_required_with_no_state_change() {
    let store = Arc::new(InMemoryStore::new());
    let user = seed_user(&store, dec!(10)).await;
    let unit = seed_equipment(&store, true, dec!(30)).await;

    let err = engine(&store)
        .create_rental(request(user.id, unit.id))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::InsufficientDeposit {
            required,
            available,
        } if required == dec!(30) && available == dec!(10)
    ));

    let stored_unit = EquipmentRepository::find_by_id(&*store, unit.id).await.unwrap().unwrap();
    assert!(stored_unit.availability);
    assert_eq!(store.rental_count().await, 0);
}

#[tokio::test]
async fn missing_user_wins_over_missing_equipment() {
    let store = Arc::new(InMemoryStore::new());

    // Neither exists; the user check comes first
    let err = engine(&store)
        .create_rental(request(Uuid::new_v4(), Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { ref resource } if resource == "user"));
}

#[tokio::test]
async fn missing_equipment_is_not_found() {
    let store = Arc::new(InMemoryStore::new());
    let user = seed_user(&store, dec!(100)).await;

    let err = engine(&store)
        .create_rental(request(user.id, Uuid::new_v4()))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { ref resource } if resource == "equipment"));
}

#[tokio::test]
async fn unavailability_is_checked_before_the_deposit() {
    let store = Arc::new(InMemoryStore::new());
    // Both preconditions would fail; the availability check comes first
    let user = seed_user(&store, dec!(1)).await;
    let unit = seed_equipment(&store, false, dec!(30)).await;

    let err = engine(&store)
        .create_rental(request(user.id, unit.id))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::EquipmentUnavailable));
}

#[tokio::test]
async fn failed_persist_leaves_no_partial_state() {
    let store = Arc::new(InMemoryStore::new());
    let user = seed_user(&store, dec!(100)).await;
    let unit = seed_equipment(&store, true, dec!(30)).await;

    store.fail_next_commit();
    let err = engine(&store)
        .create_rental(request(user.id, unit.id))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Database { .. }));

    // Deposit and availability are untouched
    let stored_user = UserRepository::find_by_id(&*store, user.id).await.unwrap().unwrap();
    let stored_unit = EquipmentRepository::find_by_id(&*store, unit.id).await.unwrap().unwrap();
    assert_eq!(stored_user.deposit, dec!(100));
    assert!(stored_unit.availability);
    assert_eq!(store.rental_count().await, 0);
}

#[tokio::test]
async fn concurrent_rentals_of_one_unit_yield_exactly_one_success() {
    let store = Arc::new(InMemoryStore::new());
    let user = seed_user(&store, dec!(100)).await;
    let unit = seed_equipment(&store, true, dec!(30)).await;

    let engine = Arc::new(engine(&store));
    let (a, b) = tokio::join!(
        {
            let engine = engine.clone();
            let req = request(user.id, unit.id);
            async move { engine.create_rental(req).await }
        },
        {
            let engine = engine.clone();
            let req = request(user.id, unit.id);
            async move { engine.create_rental(req).await }
        },
    );

    let successes = [a.is_ok(), b.is_ok()].iter().filter(|&&ok| ok).count();
    assert_eq!(successes, 1, "exactly one rental must win the race");

    // The loser surfaced as a conflict, and only one debit happened
    let loser = if a.is_ok() { b } else { a };
    assert!(matches!(loser.unwrap_err(), DomainError::EquipmentUnavailable));

    let stored_user = UserRepository::find_by_id(&*store, user.id).await.unwrap().unwrap();
    assert_eq!(stored_user.deposit, dec!(70));
    assert_eq!(store.rental_count().await, 1);
}

#[tokio::test]
async fn renting_twice_sequentially_conflicts_the_second_time() {
    let store = Arc::new(InMemoryStore::new());
    let user = seed_user(&store, dec!(100)).await;
    let unit = seed_equipment(&store, true, dec!(30)).await;
    let engine = engine(&store);

    engine.create_rental(request(user.id, unit.id)).await.unwrap();
    let err = engine
        .create_rental(request(user.id, unit.id))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::EquipmentUnavailable));
}

#[tokio::test]
async fn update_overwrites_every_field() {
    let store = Arc::new(InMemoryStore::new());
    let user = seed_user(&store, dec!(100)).await;
    let unit = seed_equipment(&store, true, dec!(30)).await;
    let engine = engine(&store);

    let outcome = engine.create_rental(request(user.id, unit.id)).await.unwrap();

    let other_user = Uuid::new_v4();
    let return_date = Some(Utc::now());
    let updated = engine
        .update_rental(
            outcome.record.id,
            RentalUpdate {
                user_id: other_user,
                equipment_id: unit.id,
                rental_date: outcome.record.rental_date,
                return_date,
                status: "returned".to_string(),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.user_id, other_user);
    assert_eq!(updated.return_date, return_date);
    assert_eq!(updated.status, "returned");
}

#[tokio::test]
async fn update_and_delete_of_missing_record_are_not_found() {
    let store = Arc::new(InMemoryStore::new());
    let engine = engine(&store);

    let err = engine
        .update_rental(
            Uuid::new_v4(),
            RentalUpdate {
                user_id: Uuid::new_v4(),
                equipment_id: Uuid::new_v4(),
                rental_date: Utc::now(),
                return_date: None,
                status: "x".to_string(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));

    let err = engine.delete_rental(Uuid::new_v4()).await.unwrap_err();
    assert!(matches!(err, DomainError::NotFound { .. }));
}

#[tokio::test]
async fn list_returns_records_in_creation_order() {
    let store = Arc::new(InMemoryStore::new());
    let user = seed_user(&store, dec!(100)).await;
    let first = seed_equipment(&store, true, dec!(10)).await;
    let second = seed_equipment(&store, true, dec!(20)).await;
    let engine = engine(&store);

    engine.create_rental(request(user.id, first.id)).await.unwrap();
    engine.create_rental(request(user.id, second.id)).await.unwrap();

    let all = engine.list_rentals().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].equipment_id, first.id);
    assert_eq!(all[1].equipment_id, second.id);
}
