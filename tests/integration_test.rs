use std::collections::BTreeSet;
use user_directory::lifecycle::UserDirectory;
use user_directory::model::{UserCreate, UserId, UserUpdate};
use user_directory::user_actor::UserError;

fn user(name: &str, email: &str) -> UserCreate {
    UserCreate::new(name, email)
}

/// Create two users, delete the first, and check what is left.
#[tokio::test]
async fn test_create_delete_list_scenario() {
    let directory = UserDirectory::new();
    let users = directory.client();

    let alice = users
        .create_user(user("Alice", "alice@example.com"))
        .await
        .expect("Failed to create Alice");
    let bob = users
        .create_user(user("Bob", "bob@example.com"))
        .await
        .expect("Failed to create Bob");
    assert_eq!(alice.id, UserId(1));
    assert_eq!(bob.id, UserId(2));

    let fetched = users.get_user(alice.id).await.unwrap();
    assert_eq!(fetched.name, "Alice");
    assert_eq!(fetched.email, "alice@example.com");

    assert!(users.delete_user(UserId(1)).await.unwrap());
    assert_eq!(
        users.get_user(UserId(1)).await,
        Err(UserError::NotFound("1".to_string()))
    );

    let remaining = users.list_users().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, UserId(2));
    assert_eq!(remaining[0].name, "Bob");

    drop(users);
    directory.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_rejected_create_leaves_store_unchanged() {
    let directory = UserDirectory::new();
    let users = directory.client();

    let missing_name = UserCreate {
        name: None,
        email: Some("x@example.com".to_string()),
    };
    let err = users.create_user(missing_name).await.unwrap_err();
    assert!(matches!(err, UserError::InvalidArgument(_)));

    let empty_email = user("Dana", "");
    assert!(matches!(
        users.create_user(empty_email).await,
        Err(UserError::InvalidArgument(_))
    ));

    assert!(users.list_users().await.unwrap().is_empty());

    // Counter was not advanced by either failure
    let first = users.create_user(user("Dana", "dana@example.com")).await.unwrap();
    assert_eq!(first.id, UserId(1));

    drop(users);
    directory.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_creates_get_distinct_ids() {
    let directory = UserDirectory::new();

    let mut handles = Vec::new();
    for i in 0..10 {
        let users = directory.client();
        handles.push(tokio::spawn(async move {
            users
                .create_user(user(&format!("user{i}"), &format!("user{i}@example.com")))
                .await
        }));
    }

    let mut ids = BTreeSet::new();
    for handle in handles {
        let created = handle.await.unwrap().unwrap();
        assert!(ids.insert(created.id.0), "duplicate id {}", created.id);
    }
    assert_eq!(ids, (1..=10).collect::<BTreeSet<u64>>());
    assert_eq!(directory.client().list_users().await.unwrap().len(), 10);

    directory.shutdown().await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_parallel_creates_and_deletes_keep_ids_unique() {
    let directory = UserDirectory::new();

    let mut handles = Vec::new();
    for i in 0..200 {
        let users = directory.client();
        handles.push(tokio::spawn(async move {
            let created = users
                .create_user(user(&format!("p{i}"), &format!("p{i}@example.com")))
                .await
                .unwrap();
            // Every third worker removes its own record again
            if i % 3 == 0 {
                assert!(users.delete_user(created.id).await.unwrap());
            }
            created.id.0
        }));
    }

    let mut ids = BTreeSet::new();
    for handle in handles {
        assert!(ids.insert(handle.await.unwrap()));
    }
    assert_eq!(ids, (1..=200).collect::<BTreeSet<u64>>());

    let users = directory.client();
    let live = users.list_users().await.unwrap();
    assert_eq!(live.len(), 200 - 67);
    assert!(live.windows(2).all(|pair| pair[0].id < pair[1].id));

    let next = users.create_user(user("late", "late@example.com")).await.unwrap();
    assert_eq!(next.id, UserId(201));

    drop(users);
    directory.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_twice() {
    let directory = UserDirectory::new();
    let users = directory.client();

    let created = users.create_user(user("Eve", "eve@example.com")).await.unwrap();
    assert!(users.delete_user(created.id).await.unwrap());
    assert!(!users.delete_user(created.id).await.unwrap());
    assert!(!users.delete_user(UserId(99)).await.unwrap());

    // Ids are not reused after delete
    let next = users.create_user(user("Finn", "finn@example.com")).await.unwrap();
    assert_eq!(next.id, UserId(2));

    drop(users);
    directory.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_partial_update() {
    let directory = UserDirectory::new();
    let users = directory.client();
    let created = users.create_user(user("Gus", "gus@example.com")).await.unwrap();

    let updated = users
        .update_user(
            created.id,
            UserUpdate {
                name: None,
                email: Some("x".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Gus");
    assert_eq!(updated.email, "x");

    // Empty strings are written as given
    let blanked = users
        .update_user(
            created.id,
            UserUpdate {
                name: Some(String::new()),
                email: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(blanked.name, "");
    assert_eq!(users.get_user(created.id).await.unwrap(), blanked);

    drop(users);
    directory.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_update_of_missing_user_changes_nothing() {
    let directory = UserDirectory::new();
    let users = directory.client();
    users.create_user(user("Hal", "hal@example.com")).await.unwrap();

    let err = users
        .update_user(
            UserId(5),
            UserUpdate {
                name: Some("Ghost".to_string()),
                email: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err, UserError::NotFound("5".to_string()));

    let all = users.list_users().await.unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].name, "Hal");

    drop(users);
    directory.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_list_size_tracks_creates_and_deletes() {
    let directory = UserDirectory::new();
    let users = directory.client();

    for i in 0..6 {
        users
            .create_user(user(&format!("u{i}"), &format!("u{i}@example.com")))
            .await
            .unwrap();
    }
    for id in [2, 4, 4, 42] {
        users.delete_user(UserId(id)).await.unwrap();
    }

    let ids: Vec<u64> = users
        .list_users()
        .await
        .unwrap()
        .iter()
        .map(|u| u.id.0)
        .collect();
    assert_eq!(ids, vec![1, 3, 5, 6]);

    drop(users);
    directory.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_seed_and_reset() {
    let directory = UserDirectory::new();

    let seeded = directory.seed_defaults().await.unwrap();
    let names: Vec<&str> = seeded.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);
    assert_eq!(seeded[2].id, UserId(3));
    assert_eq!(seeded[2].email, "charlie@example.com");

    directory.reset().await.unwrap();
    let users = directory.client();
    assert!(users.list_users().await.unwrap().is_empty());
    let fresh = users.create_user(user("Ivy", "ivy@example.com")).await.unwrap();
    assert_eq!(fresh.id, UserId(1));

    drop(users);
    directory.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_client_after_shutdown_is_unavailable() {
    let directory = UserDirectory::new();
    let stray = directory.client();
    directory.seed_defaults().await.unwrap();

    // The stray clone keeps the store alive, so shutdown has to abort it
    tokio::time::pause();
    directory.shutdown().await.unwrap();

    let err = stray.list_users().await.unwrap_err();
    assert!(matches!(err, UserError::StoreUnavailable(_)));
}
