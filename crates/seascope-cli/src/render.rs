//! Terminal output. Results go to stdout, errors to stderr.

use serde_json::Value;

use seascope_catalog::DataHub;
use seascope_client::{DataPage, DataRow, ModelStatus};
use seascope_common::{DatasetRecord, SeascopeError};
use seascope_search::{SearchOutcome, SearchSession, SUGGESTED_TOPICS};

/// Print the session's settled outcome; returns whether it was a success.
pub fn session_outcome(session: &SearchSession) -> bool {
    match session.outcome() {
        Some(SearchOutcome::Success { result_text, note }) => {
            if let Some(label) = session.result_label() {
                println!("[{label}]\n");
            }
            println!("{result_text}");
            if let Some(note) = note {
                println!("\nNote: {note}");
            }
            true
        }
        Some(SearchOutcome::Failure { message }) => {
            eprintln!("Error: {message}");
            false
        }
        None => false,
    }
}

/// Report a backend error. Always returns `false`.
pub fn error(err: &SeascopeError) -> bool {
    eprintln!("Error: {err}");
    if let SeascopeError::Status { detail: Some(detail), .. } = err {
        eprintln!("  {detail}");
    }
    false
}

pub fn topics() {
    println!("Suggested topics:");
    for topic in SUGGESTED_TOPICS {
        println!("  {topic}");
    }
}

pub fn tabs(hub: &DataHub) {
    let active = &hub.filter().active_domain;
    let line: Vec<String> = hub
        .tabs()
        .into_iter()
        .map(|tab| {
            if &tab.key == active {
                format!("[{}]", tab.label)
            } else {
                tab.label
            }
        })
        .collect();
    println!("{}\n", line.join("  "));
}

pub fn records(records: &[&DatasetRecord]) {
    if records.is_empty() {
        println!("No results. Try a different search.");
        return;
    }
    for record in records {
        println!("{} • {}", record.provider, record.coverage);
        println!("{}", record.name);
        println!("  Preview: {}", record.preview_url);
        println!("  API:     {}", record.api_url);
        if !record.columns_url.is_empty() {
            println!("  Columns: {}", record.columns_url);
        }
    }
}

pub fn rows(rows: Vec<DataRow>) {
    for row in rows {
        println!("{}", Value::Object(row));
    }
}

pub fn page(page: DataPage) {
    let shown = page.rows.len() as u64;
    eprintln!(
        "rows {}-{} of {}",
        page.offset + u64::from(shown > 0),
        page.offset + shown,
        page.total
    );
    rows(page.rows);
}

pub fn model_status(status: &ModelStatus) {
    match (&status.model_name, status.hugging_face_loaded) {
        (Some(name), true) => println!("Image model: loaded ({name})"),
        (None, true) => println!("Image model: loaded"),
        _ => println!("Image model: not loaded (describe images instead)"),
    }
}
