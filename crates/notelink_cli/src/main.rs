//! CLI probe for the note content engine.
//!
//! # Responsibility
//! - Verify `notelink_core` linkage (no arguments).
//! - `parse`: print the segments of a note body read from stdin as JSON.
//! - `backlinks <notes.json> <note-id>`: print titles of backlink notes.

use notelink_core::{backlinks, parse_content, Note, NoteId};
use std::io::Read;
use std::process::ExitCode;

const USAGE: &str = "usage: notelink_cli [parse | backlinks <notes.json> <note-id>]";

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let result = match args.first().map(String::as_str) {
        None => {
            println!("notelink_core ping={}", notelink_core::ping());
            println!("notelink_core version={}", notelink_core::core_version());
            Ok(())
        }
        Some("parse") => run_parse(),
        Some("backlinks") => match (args.get(1), args.get(2)) {
            (Some(path), Some(note_id)) => run_backlinks(path, note_id),
            _ => Err(USAGE.to_string()),
        },
        Some(_) => Err(USAGE.to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{message}");
            ExitCode::from(2)
        }
    }
}

fn run_parse() -> Result<(), String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .map_err(|err| format!("failed to read stdin: {err}"))?;
    let segments = parse_content(&content);
    let json = serde_json::to_string_pretty(&segments)
        .map_err(|err| format!("failed to encode segments: {err}"))?;
    println!("{json}");
    Ok(())
}

fn run_backlinks(path: &str, note_id: &str) -> Result<(), String> {
    let raw =
        std::fs::read_to_string(path).map_err(|err| format!("failed to read `{path}`: {err}"))?;
    let notes: Vec<Note> =
        serde_json::from_str(&raw).map_err(|err| format!("invalid notes file `{path}`: {err}"))?;
    let note_id =
        NoteId::parse_str(note_id.trim()).map_err(|err| format!("invalid note id: {err}"))?;
    let target = notes
        .iter()
        .find(|note| note.id == note_id)
        .ok_or_else(|| format!("note not found: {note_id}"))?;

    for source in backlinks(target.id, &target.title, &notes) {
        println!("{}\t{}", source.id, source.title);
    }
    Ok(())
}
