mod helpers;

use helpers::{blocking, server_note_json};
use notify_notes::application::NoteRepository;
use notify_notes::domain::{DomainError, NoteDraft, NoteId};
use notify_notes::infrastructure::HttpNoteRepository;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn api_url(server: &MockServer) -> String {
    format!("{}/api", server.uri())
}

#[tokio::test(flavor = "multi_thread")]
async fn given_server_notes_when_listing_then_parses_mongo_ids() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notes/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            server_note_json("a1", "First", "one"),
            server_note_json("b2", "Second", "two"),
        ])))
        .expect(1)
        .mount(&server)
        .await;
    let url = api_url(&server);

    // Act
    let notes = blocking(move || {
        let mut repo = HttpNoteRepository::new(&url, None).unwrap();
        repo.list_notes()
    })
    .await
    .expect("List should succeed");

    // Assert
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0].id, NoteId::from("a1"));
    assert_eq!(notes[1].title, "Second");
    assert!(notes[0].created_at.is_some());
}

#[tokio::test(flavor = "multi_thread")]
async fn given_token_when_requesting_then_sends_bearer_header() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notes/all"))
        .and(header("authorization", "Bearer secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;
    let url = api_url(&server);

    // Act
    let notes = blocking(move || {
        let mut repo = HttpNoteRepository::new(&url, Some("secret".to_string())).unwrap();
        repo.list_notes()
    })
    .await
    .expect("Authorized list should succeed");

    // Assert
    assert!(notes.is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn given_draft_when_creating_then_posts_fields_and_reads_envelope() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/notes"))
        .and(body_partial_json(json!({"title": "Groceries", "content": "milk"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Note created",
            "note": server_note_json("c3", "Groceries", "milk"),
        })))
        .expect(1)
        .mount(&server)
        .await;
    let url = api_url(&server);

    // Act
    let (draft, note) = blocking(move || {
        let mut repo = HttpNoteRepository::new(&url, None).unwrap();
        let draft = NoteDraft::new("Groceries", "milk").unwrap();
        let note = repo.create_note(&draft);
        (draft, note)
    })
    .await;
    let note = note.expect("Create should succeed");

    // Assert
    assert_eq!(note.id, NoteId::from("c3"));
    assert!(!note.id.is_ephemeral());
    assert!(draft.client_id.is_ephemeral());
    assert_eq!(note.content, "milk");
}

#[tokio::test(flavor = "multi_thread")]
async fn given_existing_note_when_updating_then_puts_title_and_content() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/notes/a1"))
        .and(body_json(json!({"title": "New", "content": "Body"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "note": server_note_json("a1", "New", "Body"),
        })))
        .expect(1)
        .mount(&server)
        .await;
    let url = api_url(&server);

    // Act
    let note = blocking(move || {
        let mut repo = HttpNoteRepository::new(&url, None).unwrap();
        repo.update_note(&NoteId::from("a1"), "New", "Body")
    })
    .await
    .expect("Update should succeed");

    // Assert
    assert_eq!(note.title, "New");
    assert_eq!(note.content, "Body");
}

#[tokio::test(flavor = "multi_thread")]
async fn given_note_id_when_deleting_then_sends_delete() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/notes/a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Note deleted"})))
        .expect(1)
        .mount(&server)
        .await;
    let url = api_url(&server);

    // Act
    let result = blocking(move || {
        let mut repo = HttpNoteRepository::new(&url, None).unwrap();
        repo.delete_note(&NoteId::from("a1"))
    })
    .await;

    // Assert
    assert!(result.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn given_note_id_when_archiving_then_puts_empty_body_to_archive_route() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/api/notes/archive/a1"))
        .and(body_json(json!({})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "Note archived"})))
        .expect(1)
        .mount(&server)
        .await;
    let url = api_url(&server);

    // Act
    let result = blocking(move || {
        let mut repo = HttpNoteRepository::new(&url, None).unwrap();
        repo.archive_note(&NoteId::from("a1"))
    })
    .await;

    // Assert
    assert!(result.is_ok());
}

#[tokio::test(flavor = "multi_thread")]
async fn given_query_with_special_characters_when_searching_then_query_is_encoded() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notes/search"))
        .and(query_param("query", "milk & eggs?"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([server_note_json("a1", "Groceries", "milk & eggs")])),
        )
        .expect(1)
        .mount(&server)
        .await;
    let url = api_url(&server);

    // Act
    let notes = blocking(move || {
        let mut repo = HttpNoteRepository::new(&url, None).unwrap();
        repo.search_notes("milk & eggs?")
    })
    .await
    .expect("Search should succeed");

    // Assert
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].content, "milk & eggs");
}

#[tokio::test(flavor = "multi_thread")]
async fn given_server_error_when_listing_then_returns_remote_error_with_status() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notes/all"))
        .respond_with(ResponseTemplate::new(500).set_body_string("database down"))
        .mount(&server)
        .await;
    let url = api_url(&server);

    // Act
    let result = blocking(move || {
        let mut repo = HttpNoteRepository::new(&url, None).unwrap();
        repo.list_notes()
    })
    .await;

    // Assert
    match result {
        Err(DomainError::Remote(message)) => {
            assert!(message.contains("500"), "unexpected message: {message}");
            assert!(message.contains("database down"));
        }
        other => panic!("Expected Remote error, got {other:?}"),
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn given_malformed_body_when_listing_then_returns_malformed_payload() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/notes/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;
    let url = api_url(&server);

    // Act
    let result = blocking(move || {
        let mut repo = HttpNoteRepository::new(&url, None).unwrap();
        repo.list_notes()
    })
    .await;

    // Assert
    assert!(matches!(result, Err(DomainError::MalformedPayload(_))));
}

#[tokio::test(flavor = "multi_thread")]
async fn given_missing_note_when_deleting_then_returns_remote_error() {
    // Arrange
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/notes/zz"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"message": "Note not found"})))
        .mount(&server)
        .await;
    let url = api_url(&server);

    // Act
    let result = blocking(move || {
        let mut repo = HttpNoteRepository::new(&url, None).unwrap();
        repo.delete_note(&NoteId::from("zz"))
    })
    .await;

    // Assert
    assert!(matches!(result, Err(DomainError::Remote(ref m)) if m.contains("404")));
}
