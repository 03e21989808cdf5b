// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::Path;
use anyhow::{bail, Context, Result};
use application::{AssistantPrompt, NoteCollectionManager, TextPipeline};
use domain::{CollectionKind, DomainError, NoteId};
use infrastructure::{
    AiEnhancementClient, Config, HttpAssistant, HttpNoteRepository, JsonFileCache, OcrSpaceClient,
};
use ports::NotePresenter;
use tracing::{debug, error, info, warn};
use crate::cli::args::{Args, Command, ConfigAction};

type Manager = NoteCollectionManager<HttpNoteRepository, JsonFileCache>;

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting notify-notes with arguments");

    let config_path = match &args.config {
        Some(path) => path.clone(),
        None => Config::default_path()?,
    };

    if let Command::Config { action } = &args.command {
        return run_config(action, &config_path);
    }

    let config = resolve_config(&args, &config_path)?;
    let presenter = NotePresenter::new();

    match args.command {
        Command::List {
            view,
            sort,
            offline,
            json,
        } => {
            let mut manager = open_manager(&config)?;
            if !offline {
                refresh_or_warn(&mut manager);
            }

            let kind = CollectionKind::from(view);
            let notes = match kind {
                CollectionKind::Active => {
                    if let Some(sort) = sort {
                        manager.sort(sort.into());
                    }
                    manager.view().to_vec()
                }
                other => {
                    let mut notes = manager.collection(other).to_vec();
                    if let Some(sort) = sort {
                        domain::sort_notes(&mut notes, sort.into());
                    }
                    notes
                }
            };
            print_notes(&presenter, &notes, json)?;
        }
        Command::Add { title, content } => {
            let mut manager = open_manager(&config)?;
            let note = manager
                .add(&title, &content)
                .map_err(|e| report("Error adding note", e))?;
            info!(note_id = %note.id, "Note added");
            print!("{}", presenter.render_note(&note));
        }
        Command::Edit {
            note_id,
            title,
            content,
        } => {
            let mut manager = open_manager(&config)?;
            refresh_or_warn(&mut manager);
            let note = manager
                .edit(&NoteId::from(note_id), &title, &content)
                .map_err(|e| report("Error updating note", e))?;
            print!("{}", presenter.render_note(&note));
        }
        Command::Delete { note_id } => {
            let mut manager = open_manager(&config)?;
            let id = NoteId::from(note_id);
            manager
                .remove(&id)
                .map_err(|e| report("Error deleting note", e))?;
            println!("Deleted note {id}");
        }
        Command::Archive { note_id } => {
            let mut manager = open_manager(&config)?;
            refresh_or_warn(&mut manager);
            let id = NoteId::from(note_id);
            manager
                .archive(&id)
                .map_err(|e| report("Error archiving note", e))?;
            println!("Archived note {id}");
        }
        Command::Trash { note_id } => {
            let mut manager = open_manager(&config)?;
            let id = NoteId::from(note_id);
            manager
                .trash(&id)
                .map_err(|e| report("Error moving note to trash", e))?;
            println!("Moved note {id} to trash");
        }
        Command::Search { query, sort, json } => {
            let mut manager = open_manager(&config)?;
            if let Some(sort) = sort {
                manager.sort(sort.into());
            }
            manager
                .search(&query)
                .map_err(|e| report("Search error", e))?;
            print_notes(&presenter, manager.view(), json)?;
        }
        Command::Ocr { image, enhance } => {
            let pipeline = text_pipeline(&config)?;
            let text = pipeline
                .extract_text(&image)
                .map_err(|e| report("Error extracting text", e))?;
            println!("{text}");
            if enhance {
                let enhancement = pipeline
                    .enhance_text(&text)
                    .map_err(|e| report("Error enhancing text", e))?;
                print!("\n{}", presenter.render_enhancement(&enhancement));
            }
        }
        Command::Enhance { text } => {
            let pipeline = text_pipeline(&config)?;
            let enhancement = pipeline
                .enhance_text(&text)
                .map_err(|e| report("Error enhancing text", e))?;
            print!("{}", presenter.render_enhancement(&enhancement));
        }
        Command::Ask { message } => {
            let prompt = AssistantPrompt::new(HttpAssistant::new(&config.server.base_url)?);
            match prompt.ask(&message) {
                Some(reply) => println!("{reply}"),
                None => bail!("Message must not be empty"),
            }
        }
        Command::Config { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Config file values with command-line overrides applied
pub fn resolve_config(args: &Args, config_path: &Path) -> Result<Config> {
    let mut config = Config::load_or_default(config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(server) = &args.server {
        config.server.base_url = server.clone();
    }
    if let Some(token) = &args.token {
        config.server.token = token.clone();
    }
    if let Some(dir) = &args.cache_dir {
        config.cache.dir = dir.to_string_lossy().into_owned();
    }
    debug!(base_url = %config.server.base_url, "Resolved configuration");
    Ok(config)
}

fn run_config(action: &ConfigAction, config_path: &Path) -> Result<()> {
    match action {
        ConfigAction::Init { force } => {
            if config_path.exists() && !force {
                bail!(
                    "Config file already exists: {} (use --force to overwrite)",
                    config_path.display()
                );
            }
            Config::create_default(config_path)?;
            println!("Wrote {}", config_path.display());
        }
    }
    Ok(())
}

fn open_manager(config: &Config) -> Result<Manager> {
    let repository = HttpNoteRepository::new(&config.server.base_url, config.token())?;
    let cache_dir = config.cache_dir()?;
    debug!(?cache_dir, "Opening note cache");
    let cache = JsonFileCache::new(cache_dir, config.cache.capacity);
    Ok(NoteCollectionManager::open(repository, cache, config.debounce()))
}

fn text_pipeline(config: &Config) -> Result<TextPipeline<OcrSpaceClient, AiEnhancementClient>> {
    let extractor = OcrSpaceClient::new(&config.ocr.url, &config.ocr.api_key, &config.ocr.language)?;
    let enhancer = AiEnhancementClient::new(&config.ai.url, config.ai_model(), config.ai_timeout())?;
    Ok(TextPipeline::new(extractor, enhancer))
}

/// Cached notes stay usable when the server is unreachable
fn refresh_or_warn(manager: &mut Manager) {
    if let Err(e) = manager.refresh() {
        warn!(error = %e, "Could not refresh notes, showing cached data");
        eprintln!("{} (showing cached notes)", e.user_message());
    }
}

/// Log the full error, hand the user the short message
fn report(action: &str, e: DomainError) -> anyhow::Error {
    error!(error = %e, "{action}");
    let message = format!("{action}: {}", e.user_message());
    anyhow::Error::new(e).context(message)
}

fn print_notes(presenter: &NotePresenter, notes: &[domain::Note], json: bool) -> Result<()> {
    if json {
        println!("{}", presenter.render_json(notes)?);
    } else {
        print!("{}", presenter.render_list(notes));
    }
    Ok(())
}
