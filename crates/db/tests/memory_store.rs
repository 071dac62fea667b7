//! Contract tests for the in-memory store.
//!
//! These pin down the owner-scoping, search, filter, and patch semantics the
//! Postgres store must share (see `pg_store.rs`).

use assert_matches::assert_matches;
use dvdshelf_core::catalog::DvdCriteria;
use dvdshelf_core::dvd::{DvdFields, DvdPatch, DvdStatus};
use dvdshelf_db::models::user::UpsertUser;
use dvdshelf_db::store::{DvdStore, MemoryStore, UserStore};

const ALICE: &str = "user-alice";
const BOB: &str = "user-bob";

fn dvd(title: &str, status: DvdStatus, year: Option<i32>, genre: Option<&str>, director: Option<&str>) -> DvdFields {
    DvdFields {
        year,
        genre: genre.map(str::to_string),
        director: director.map(str::to_string),
        ..DvdFields::new(title, status)
    }
}

async fn seeded() -> MemoryStore {
    let store = MemoryStore::new();
    let shelf = [
        dvd("Inception", DvdStatus::Owned, Some(2010), Some("Action, Sci-Fi"), Some("Christopher Nolan")),
        dvd("Heat", DvdStatus::Wishlist, Some(1995), Some("Crime, Drama"), Some("Michael Mann")),
        dvd("Memento", DvdStatus::Owned, Some(2000), Some("Drama, Mystery"), Some("Christopher Nolan")),
    ];
    for fields in &shelf {
        store.insert(fields, ALICE).await.unwrap();
    }
    store
        .insert(&dvd("Paprika", DvdStatus::Owned, Some(2006), Some("Animation, Sci-Fi"), None), BOB)
        .await
        .unwrap();
    store
}

fn titles(dvds: &[dvdshelf_db::models::dvd::Dvd]) -> Vec<&str> {
    dvds.iter().map(|d| d.title.as_str()).collect()
}

// ---------------------------------------------------------------------------
// Insert / get
// ---------------------------------------------------------------------------

#[tokio::test]
async fn insert_assigns_sequential_ids_and_owner() {
    let store = MemoryStore::new();
    let first = store.insert(&DvdFields::new("Alien", DvdStatus::Owned), ALICE).await.unwrap();
    let second = store.insert(&DvdFields::new("Aliens", DvdStatus::Owned), ALICE).await.unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(second.id, 2);
    assert_eq!(first.owner_id, ALICE);
}

#[tokio::test]
async fn round_trip_preserves_fields() {
    let store = MemoryStore::new();
    let fields = DvdFields {
        poster_url: Some("https://example.com/p.jpg".into()),
        barcode: Some("012345678905".into()),
        ..dvd("Inception", DvdStatus::Owned, Some(2010), Some("Action, Sci-Fi"), Some("Christopher Nolan"))
    };
    let created = store.insert(&fields, ALICE).await.unwrap();

    let fetched = store.get(created.id, ALICE).await.unwrap().expect("record should exist");
    assert_eq!(fetched, created);
    assert_eq!(fetched.fields(), fields);
}

#[tokio::test]
async fn other_owners_records_are_invisible() {
    let store = seeded().await;
    let bobs = store.list(BOB).await.unwrap();
    let paprika_id = bobs[0].id;

    assert!(store.get(paprika_id, ALICE).await.unwrap().is_none());
    assert_eq!(store.list(ALICE).await.unwrap().len(), 3);
    assert!(!titles(&store.search("paprika", ALICE).await.unwrap()).contains(&"Paprika"));
}

// ---------------------------------------------------------------------------
// Update / delete
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_changes_only_patched_fields() {
    let store = seeded().await;
    let heat = store.search("heat", ALICE).await.unwrap().remove(0);

    let patch = DvdPatch {
        status: Some(DvdStatus::Owned),
        director: Some(None),
        ..DvdPatch::default()
    };
    let updated = store.update(heat.id, &patch, ALICE).await.unwrap().unwrap();

    assert_eq!(updated.status, DvdStatus::Owned);
    assert_eq!(updated.director, None);
    assert_eq!(updated.title, heat.title);
    assert_eq!(updated.year, heat.year);
    assert_eq!(updated.genre, heat.genre);
    assert_eq!(updated.created_at, heat.created_at);
}

#[tokio::test]
async fn update_never_creates() {
    let store = seeded().await;
    let patch = DvdPatch {
        title: Some("Ghost".into()),
        ..DvdPatch::default()
    };
    assert_matches!(store.update(999, &patch, ALICE).await, Ok(None));

    let paprika = store.list(BOB).await.unwrap().remove(0);
    assert_matches!(store.update(paprika.id, &patch, ALICE).await, Ok(None));
    assert_eq!(store.get(paprika.id, BOB).await.unwrap().unwrap().title, "Paprika");
    assert_eq!(store.list(ALICE).await.unwrap().len(), 3);
}

#[tokio::test]
async fn delete_reports_whether_a_row_was_removed() {
    let store = seeded().await;
    let inception = store.search("inception", ALICE).await.unwrap().remove(0);

    assert!(store.delete(inception.id, ALICE).await.unwrap());
    assert!(!store.delete(inception.id, ALICE).await.unwrap());
    assert!(store.get(inception.id, ALICE).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_of_foreign_record_is_refused() {
    let store = seeded().await;
    let paprika = store.list(BOB).await.unwrap().remove(0);

    assert!(!store.delete(paprika.id, ALICE).await.unwrap());
    assert!(store.get(paprika.id, BOB).await.unwrap().is_some());
}

// ---------------------------------------------------------------------------
// Search / filter
// ---------------------------------------------------------------------------

#[tokio::test]
async fn search_matches_any_text_field_case_insensitively() {
    let store = seeded().await;
    assert_eq!(titles(&store.search("NOLAN", ALICE).await.unwrap()), vec!["Inception", "Memento"]);
    assert_eq!(titles(&store.search("drama", ALICE).await.unwrap()), vec!["Heat", "Memento"]);
    assert_eq!(titles(&store.search("eat", ALICE).await.unwrap()), vec!["Heat"]);
    assert_eq!(store.search("", ALICE).await.unwrap().len(), 3);
}

#[tokio::test]
async fn filter_combines_criteria_with_and() {
    let store = seeded().await;

    let owned_drama = DvdCriteria {
        status: Some(DvdStatus::Owned),
        genre: Some("Drama".into()),
        year: None,
    };
    assert_eq!(titles(&store.filter(&owned_drama, ALICE).await.unwrap()), vec!["Memento"]);

    let by_year = DvdCriteria {
        year: Some(1995),
        ..DvdCriteria::default()
    };
    assert_eq!(titles(&store.filter(&by_year, ALICE).await.unwrap()), vec!["Heat"]);

    assert_eq!(store.filter(&DvdCriteria::default(), ALICE).await.unwrap().len(), 3);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn upsert_creates_then_refreshes_user() {
    let store = MemoryStore::new();
    let mut input = UpsertUser {
        id: ALICE.into(),
        email: Some("alice@example.com".into()),
        display_name: Some("Alice".into()),
        avatar_url: None,
    };

    let created = store.upsert_user(&input).await.unwrap();
    assert_eq!(created.created_at, created.updated_at);

    let unchanged = store.upsert_user(&input).await.unwrap();
    assert_eq!(unchanged.updated_at, created.updated_at);

    input.display_name = Some("Alice L.".into());
    let refreshed = store.upsert_user(&input).await.unwrap();
    assert_eq!(refreshed.display_name.as_deref(), Some("Alice L."));
    assert_eq!(refreshed.created_at, created.created_at);

    assert_eq!(store.get_user(ALICE).await.unwrap(), Some(refreshed));
    assert!(store.get_user(BOB).await.unwrap().is_none());
}
