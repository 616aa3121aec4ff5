//! Interactive menu loop for the Datebook event tracker.
//!
//! # Responsibility
//! - Drive `datebook_core` operations from terminal input.
//! - Own all message formatting; core returns typed failure kinds only.
//!
//! # Invariants
//! - Displayed event indices are 1-based and match the date-sorted listing.
//! - Core errors are rendered and the loop continues; nothing here exits
//!   the process except the Exit menu item and end of input.

use chrono::{Local, NaiveDate};
use datebook_core::{
    core_version, default_log_level, export_all_events, init_logging, read_menu_choice, Event,
    EventDraft, EventPatch, EventStore, DATE_FORMAT,
};
use log::info;
use std::fs::File;
use std::io::{self, BufRead, Write};

const LINE: &str = "------------------------------------------------------------";
const MENU_MIN: i64 = 1;
const MENU_MAX: i64 = 11;
const DEFAULT_EXPORT_FILE: &str = "events_export.csv";

fn main() {
    if let Err(err) = init_logging(default_log_level(), &default_log_dir()) {
        eprintln!("logging disabled: {err}");
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut store = EventStore::new();

    println!("datebook {}", core_version());

    loop {
        print_menu();
        let raw = prompt(&mut input, &format!("Choose ({MENU_MIN}-{MENU_MAX}): "));
        let choice = match read_menu_choice(&raw, MENU_MIN, MENU_MAX) {
            Ok(choice) => choice,
            Err(err) => {
                println!("Invalid choice: {err}\n");
                continue;
            }
        };

        match choice {
            1 => add_event(&mut input, &mut store),
            2 => render_events(&store.list_all_events()),
            3 => list_on_date(&mut input, &store),
            4 => list_in_range(&mut input, &store),
            5 => delete_event(&mut input, &mut store),
            6 => show_today(),
            7 => edit_event(&mut input, &mut store),
            8 => search_events(&mut input, &store),
            9 => export_csv(&mut input, &store),
            10 => weekly_view(&mut input, &store),
            11 => {
                println!("Goodbye!");
                break;
            }
            _ => unreachable!("read_menu_choice bounds the value"),
        }
    }
}

fn print_menu() {
    println!("{LINE}");
    println!("{:-^60}", "Calendar Event Tracker");
    println!("{LINE}");
    println!("1. Add event");
    println!("2. List all events");
    println!("3. List events on a certain date");
    println!("4. List events in a date range");
    println!("5. Delete an event");
    println!("6. Show today's date");
    println!("7. Edit an event (title/location/note)");
    println!("8. Search events by keyword");
    println!("9. Export all events to CSV");
    println!("10. Weekly view (7-day range)");
    println!("11. Exit");
    println!("{LINE}");
}

/// Reads one trimmed line after printing `label`. End of input ends the
/// program; looping on a closed stdin would spin forever.
fn prompt(input: &mut impl BufRead, label: &str) -> String {
    print!("{label}");
    let _ = io::stdout().flush();

    let mut line = String::new();
    match input.read_line(&mut line) {
        Ok(0) | Err(_) => {
            println!("\nGoodbye!");
            std::process::exit(0);
        }
        Ok(_) => line.trim().to_string(),
    }
}

fn add_event(input: &mut impl BufRead, store: &mut EventStore) {
    println!("\n--- Add Event ---");
    let draft = EventDraft {
        date: prompt(input, &format!("Date ({DATE_FORMAT}): ")),
        title: prompt(input, "Title: "),
        location: prompt(input, "Location (optional): "),
        note: prompt(input, "Note (optional): "),
    };
    let date = draft.date.clone();

    match store.add_event_detailed(draft) {
        Ok(()) => {
            info!(
                "event=event_added module=cli date={date} count={}",
                store.len()
            );
            println!("Event added.\n");
        }
        Err(err) => println!("{err}\n"),
    }
}

fn list_on_date(input: &mut impl BufRead, store: &EventStore) {
    let date = prompt(input, &format!("\nShow events on ({DATE_FORMAT}): "));
    match store.list_events_on_date(&date) {
        Ok(events) => render_events(&events),
        Err(err) => println!("{err}\n"),
    }
}

fn list_in_range(input: &mut impl BufRead, store: &EventStore) {
    let start = prompt(input, &format!("\nStart date ({DATE_FORMAT}): "));
    let end = prompt(input, &format!("End date ({DATE_FORMAT}): "));
    match store.list_events_in_range(&start, &end) {
        Ok(events) => render_events(&events),
        Err(err) => println!("{err}\n"),
    }
}

fn delete_event(input: &mut impl BufRead, store: &mut EventStore) {
    if store.is_empty() {
        println!("\nNo events available to delete.\n");
        return;
    }

    render_events(&store.list_all_events());
    let raw_index = prompt(input, "Index to delete: ");
    match store.delete_event(&raw_index) {
        Ok(removed) => {
            info!(
                "event=event_deleted module=cli date={} count={}",
                removed.date,
                store.len()
            );
            println!("Event deleted.\n");
        }
        Err(err) => println!("{err}\n"),
    }
}

fn show_today() {
    println!("\nToday's date is: {}\n", Local::now().format("%Y-%m-%d"));
}

fn edit_event(input: &mut impl BufRead, store: &mut EventStore) {
    if store.is_empty() {
        println!("\nNo events to edit.\n");
        return;
    }

    render_events(&store.list_all_events());
    let raw_index = prompt(input, "Index to edit: ");

    println!("Leave a field blank to keep the current value.");
    let patch = EventPatch {
        title: non_blank(prompt(input, "New title: ")),
        location: non_blank(prompt(input, "New location: ")),
        note: non_blank(prompt(input, "New note: ")),
    };

    match store.edit_event(&raw_index, &patch) {
        Ok(()) => {
            info!("event=event_edited module=cli index={raw_index}");
            println!("Event updated.\n");
        }
        Err(err) => println!("{err}\n"),
    }
}

fn search_events(input: &mut impl BufRead, store: &EventStore) {
    let keyword = prompt(input, "\nKeyword to search in title/note: ");
    match store.search_events(&keyword) {
        Ok(events) => render_events(&events),
        Err(err) => println!("{err}\n"),
    }
}

fn export_csv(input: &mut impl BufRead, store: &EventStore) {
    let mut path = prompt(
        input,
        &format!("\nExport file [{DEFAULT_EXPORT_FILE}]: "),
    );
    if path.is_empty() {
        path = DEFAULT_EXPORT_FILE.to_string();
    }

    let file = match File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            println!("cannot create `{path}`: {err}\n");
            return;
        }
    };

    match export_all_events(store, file) {
        Ok(rows) => {
            info!("event=events_exported module=cli rows={rows}");
            println!("Exported {rows} events to `{path}`.\n");
        }
        Err(err) => println!("{err}\n"),
    }
}

fn weekly_view(input: &mut impl BufRead, store: &EventStore) {
    let start = prompt(input, &format!("\nWeek start date ({DATE_FORMAT}): "));
    let buckets = match store.list_events_in_week(&start) {
        Ok(buckets) => buckets,
        Err(err) => {
            println!("{err}\n");
            return;
        }
    };

    println!("\nWeekly view starting {start}:\n");
    for bucket in &buckets {
        println!("{LINE}");
        println!("{} ({})", bucket.date, weekday_name(&bucket.date));
        println!("{LINE}");

        if bucket.events.is_empty() {
            println!("No events.");
        } else {
            for event in &bucket.events {
                let location = if event.location.is_empty() {
                    "N/A"
                } else {
                    event.location.as_str()
                };
                println!(" - {} @ {location}", event.title);
                if !event.note.is_empty() {
                    println!("   Note: {}", event.note);
                }
            }
        }
        println!();
    }
}

/// Weekday name for a canonical date, empty when chrono cannot parse it.
fn weekday_name(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|parsed| parsed.format("%A").to_string())
        .unwrap_or_default()
}

fn render_events(events: &[&Event]) {
    if events.is_empty() {
        println!("\nNo events.\n");
        return;
    }

    println!("\nIdx | Date       | Title                   | Location           | Note");
    println!("{}", "-".repeat(100));
    for (position, event) in events.iter().enumerate() {
        println!(
            "{:>3} | {} | {:<23} | {:<18} | {:<40}",
            position + 1,
            event.date,
            clip(&event.title, 23),
            clip(&event.location, 18),
            clip(&event.note, 40),
        );
    }
    println!();
}

fn clip(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn non_blank(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

fn default_log_dir() -> String {
    std::env::temp_dir()
        .join("datebook")
        .join("logs")
        .to_string_lossy()
        .into_owned()
}
