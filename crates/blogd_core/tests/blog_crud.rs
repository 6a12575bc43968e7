use blogd_core::db::migrations::latest_version;
use blogd_core::db::open_db_in_memory;
use blogd_core::{
    Blog, BlogDraft, BlogPatch, BlogRepository, BlogService, RepoError, SqliteBlogRepository,
};
use rusqlite::Connection;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBlogRepository::try_new(&conn).unwrap();

    let id = repo.create_blog(&BlogDraft::new("first post", "hello")).unwrap();

    let loaded = repo.get_blog(id).unwrap().unwrap();
    assert_eq!(
        loaded,
        Blog {
            id,
            title: Some("first post".to_string()),
            body: Some("hello".to_string()),
        }
    );
}

#[test]
fn create_assigns_increasing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBlogRepository::try_new(&conn).unwrap();

    let first = repo.create_blog(&BlogDraft::new("a", "1")).unwrap();
    let second = repo.create_blog(&BlogDraft::new("b", "2")).unwrap();

    assert!(second > first);
}

#[test]
fn list_returns_every_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBlogRepository::try_new(&conn).unwrap();

    repo.create_blog(&BlogDraft::new("a", "1")).unwrap();
    repo.create_blog(&BlogDraft::new("b", "2")).unwrap();

    let blogs = repo.list_blogs().unwrap();
    assert_eq!(blogs.len(), 2);
    assert_eq!(blogs[0].title.as_deref(), Some("a"));
    assert_eq!(blogs[1].title.as_deref(), Some("b"));
}

#[test]
fn get_missing_blog_is_none_not_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBlogRepository::try_new(&conn).unwrap();

    assert!(repo.get_blog(42).unwrap().is_none());
}

#[test]
fn replace_overwrites_all_fields_including_omitted_ones() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBlogRepository::try_new(&conn).unwrap();

    let id = repo.create_blog(&BlogDraft::new("draft", "original body")).unwrap();
    repo.replace_blog(id, Some("final"), None).unwrap();

    let loaded = repo.get_blog(id).unwrap().unwrap();
    assert_eq!(loaded.title.as_deref(), Some("final"));
    assert_eq!(loaded.body, None);
}

#[test]
fn replace_missing_blog_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBlogRepository::try_new(&conn).unwrap();

    let err = repo.replace_blog(7, Some("x"), Some("y")).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(7)));
}

#[test]
fn merge_leaves_omitted_fields_untouched() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBlogRepository::try_new(&conn).unwrap();

    let id = repo.create_blog(&BlogDraft::new("draft", "original body")).unwrap();

    let patch = BlogPatch {
        title: Some(Some("final".to_string())),
        body: None,
    };
    repo.merge_blog(id, &patch).unwrap();

    let loaded = repo.get_blog(id).unwrap().unwrap();
    assert_eq!(loaded.title.as_deref(), Some("final"));
    assert_eq!(loaded.body.as_deref(), Some("original body"));
}

#[test]
fn merge_writes_explicit_null() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBlogRepository::try_new(&conn).unwrap();

    let id = repo.create_blog(&BlogDraft::new("draft", "original body")).unwrap();

    let patch = BlogPatch {
        title: None,
        body: Some(None),
    };
    repo.merge_blog(id, &patch).unwrap();

    let loaded = repo.get_blog(id).unwrap().unwrap();
    assert_eq!(loaded.title.as_deref(), Some("draft"));
    assert_eq!(loaded.body, None);
}

#[test]
fn empty_merge_still_requires_an_existing_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBlogRepository::try_new(&conn).unwrap();

    let id = repo.create_blog(&BlogDraft::new("draft", "body")).unwrap();
    repo.merge_blog(id, &BlogPatch::default()).unwrap();

    let err = repo.merge_blog(id + 1, &BlogPatch::default()).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[test]
fn delete_removes_the_row_and_second_delete_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBlogRepository::try_new(&conn).unwrap();

    let id = repo.create_blog(&BlogDraft::new("short lived", "bye")).unwrap();

    repo.delete_blog(id).unwrap();
    assert!(repo.get_blog(id).unwrap().is_none());

    let err = repo.delete_blog(id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(deleted) if deleted == id));
}

#[test]
fn service_wraps_repository_calls() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteBlogRepository::try_new(&conn).unwrap();
    let service = BlogService::new(repo);

    let id = service
        .create_blog(&BlogDraft::new("from service", "body"))
        .unwrap();

    let fetched = service.get_blog(id).unwrap().unwrap();
    assert_eq!(fetched.title.as_deref(), Some("from service"));

    assert_eq!(service.list_blogs().unwrap().len(), 1);

    service.delete_blog(id).unwrap();
    assert!(service.get_blog(id).unwrap().is_none());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteBlogRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_blogs_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteBlogRepository::try_new(&conn);
    assert!(matches!(result, Err(RepoError::MissingRequiredTable("blogs"))));
}

#[test]
fn repository_rejects_connection_missing_required_blogs_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE blogs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteBlogRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "blogs",
            column: "body"
        })
    ));
}
