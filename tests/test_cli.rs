use clap::Parser;
use notify_notes::cli::args::{Args, Command, ConfigAction, SortArg, ViewArg};
use std::path::PathBuf;

#[test]
fn given_no_subcommand_when_parsing_then_fails() {
    // Arrange
    let args = vec!["notify-notes", "65f0c2"];

    // Act & Assert
    let result = Args::try_parse_from(args);
    assert!(result.is_err(), "Should fail without subcommand");
}

#[test]
fn given_list_command_when_parsing_then_defaults_to_active_notes() {
    // Arrange
    let args = vec!["notify-notes", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List {
            view,
            sort,
            offline,
            json,
        } => {
            assert_eq!(view, ViewArg::Notes);
            assert_eq!(sort, None);
            assert!(!offline);
            assert!(!json);
        }
        _ => panic!("Expected List command"),
    }
    assert_eq!(parsed.config, None);
}

#[test]
fn given_list_with_view_and_sort_when_parsing_then_succeeds() {
    // Arrange
    let args = vec![
        "notify-notes", "list", "--view", "trash", "--sort", "content", "--offline", "--json",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::List {
            view,
            sort,
            offline,
            json,
        } => {
            assert_eq!(view, ViewArg::Trash);
            assert_eq!(sort, Some(SortArg::Content));
            assert!(offline);
            assert!(json);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn given_unknown_sort_key_when_parsing_then_fails() {
    // Arrange
    let args = vec!["notify-notes", "list", "--sort", "size"];

    // Act & Assert
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_add_command_when_parsing_then_captures_title_and_content() {
    // Arrange
    let args = vec!["notify-notes", "add", "Groceries", "milk, eggs"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Add { title, content } => {
            assert_eq!(title, "Groceries");
            assert_eq!(content, "milk, eggs");
        }
        _ => panic!("Expected Add command"),
    }
}

#[test]
fn given_add_without_content_when_parsing_then_fails() {
    // Arrange
    let args = vec!["notify-notes", "add", "Groceries"];

    // Act & Assert
    assert!(Args::try_parse_from(args).is_err());
}

#[test]
fn given_edit_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notify-notes", "edit", "65f0c2", "New title", "New body"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Edit {
            note_id,
            title,
            content,
        } => {
            assert_eq!(note_id, "65f0c2");
            assert_eq!(title, "New title");
            assert_eq!(content, "New body");
        }
        _ => panic!("Expected Edit command"),
    }
}

#[test]
fn given_delete_archive_trash_commands_when_parsing_then_capture_id() {
    for (name, expected) in [("delete", "a1"), ("archive", "b2"), ("trash", "c3")] {
        // Arrange
        let args = vec!["notify-notes", name, expected];

        // Act
        let parsed = Args::try_parse_from(args).unwrap();

        // Assert
        let note_id = match parsed.command {
            Command::Delete { note_id } | Command::Archive { note_id } | Command::Trash { note_id } => {
                note_id
            }
            other => panic!("Unexpected command {other:?}"),
        };
        assert_eq!(note_id, expected);
    }
}

#[test]
fn given_search_command_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notify-notes", "search", "milk", "-s", "date"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Search { query, sort, json } => {
            assert_eq!(query, "milk");
            assert_eq!(sort, Some(SortArg::Date));
            assert!(!json);
        }
        _ => panic!("Expected Search command"),
    }
}

#[test]
fn given_ocr_command_with_enhance_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notify-notes", "ocr", "scan.png", "--enhance"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Ocr { image, enhance } => {
            assert_eq!(image, PathBuf::from("scan.png"));
            assert!(enhance);
        }
        _ => panic!("Expected Ocr command"),
    }
}

#[test]
fn given_config_init_with_force_when_parsing_then_succeeds() {
    // Arrange
    let args = vec!["notify-notes", "config", "init", "--force"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    match parsed.command {
        Command::Config {
            action: ConfigAction::Init { force },
        } => assert!(force),
        _ => panic!("Expected Config Init command"),
    }
}

#[test]
fn given_global_flags_after_subcommand_when_parsing_then_succeeds() {
    // Arrange - global flags work anywhere when marked as global
    let args = vec![
        "notify-notes",
        "list",
        "--server",
        "http://notes.local/api",
        "-c",
        "/tmp/notify.toml",
        "--cache-dir",
        "/tmp/cache",
    ];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.server.as_deref(), Some("http://notes.local/api"));
    assert_eq!(parsed.config, Some(PathBuf::from("/tmp/notify.toml")));
    assert_eq!(parsed.cache_dir, Some(PathBuf::from("/tmp/cache")));
}

#[test]
fn given_token_flag_when_parsing_then_captured() {
    // Arrange
    let args = vec!["notify-notes", "--token", "abc123", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.token.as_deref(), Some("abc123"));
}

#[test]
fn given_verbose_flag_when_parsing_then_increments_count() {
    // Arrange
    let args = vec!["notify-notes", "-vv", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();

    // Assert
    assert_eq!(parsed.verbose, 2);
}

#[test]
fn given_token_flag_when_debug_formatting_then_token_is_redacted() {
    // Arrange
    let args = vec!["notify-notes", "--token", "s3cr3t-bearer", "list"];

    // Act
    let parsed = Args::try_parse_from(args).unwrap();
    let debug = format!("{parsed:?}");

    // Assert
    assert!(!debug.contains("s3cr3t-bearer"), "token leaked: {debug}");
    assert!(debug.contains("<redacted>"));
    assert!(debug.contains("List"));
}
