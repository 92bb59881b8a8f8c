//! Playlist editing with the order-list controller.
//!
//! Builds a playlist of JSON tracks, wires the controller's signals to log
//! output, and replays a short editing session: selecting tracks, moving
//! them, filtering and dragging within the filtered view.
//!
//! Run with:
//!
//! ```sh
//! RUST_LOG=orderlist=debug cargo run -p orderlist --example playlist
//! ```

use orderlist::prelude::*;
use orderlist::widget::{SlotTemplates, TemplateSlot};
use serde_json::{Value, json};
use tracing_subscriber::EnvFilter;

const CONFIG: &str = r#"
header = "Playlist"
filterBy = "title,artist"
filterPlaceholder = "Search tracks"
dragdrop = true
responsive = true
breakpoint = "720px"
"#;

fn title(track: &Value) -> &str {
    track["title"].as_str().unwrap_or("?")
}

fn print_list(label: &str, tracks: &[Value]) {
    let titles: Vec<&str> = tracks.iter().map(title).collect();
    println!("{label:>10}: {}", titles.join(" | "));
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = OrderListConfig::from_toml_str(CONFIG)?;
    let tracks = vec![
        json!({ "title": "Blue in Green", "artist": "Miles Davis", "length": 337 }),
        json!({ "title": "Naima", "artist": "John Coltrane", "length": 261 }),
        json!({ "title": "So What", "artist": "Miles Davis", "length": 562 }),
        json!({ "title": "Peace Piece", "artist": "Bill Evans", "length": 405 }),
        json!({ "title": "Alabama", "artist": "John Coltrane", "length": 305 }),
    ];

    let mut playlist = OrderList::new(tracks).with_config(config);
    println!("playlist {}", playlist.id());

    playlist.selection_changed.connect(|selection| {
        let titles: Vec<&str> = selection.iter().map(title).collect();
        println!("  selected: {titles:?}");
    });
    playlist.reordered.connect(|event| {
        println!("  {:?}: {} position(s) changed", event.cause, event.moved);
    });
    playlist.scroll_hint.connect(|hint| {
        println!("  scroll {:?} to row {:?}", hint.edge, hint.row);
    });
    playlist.filter_applied.connect(|visible| {
        println!("  filter shows {} track(s)", visible.len());
    });

    let templates = SlotTemplates::from_tagged([
        ("header", "== {header} =="),
        ("empty", "No tracks"),
        ("emptyfilter", "No matching tracks"),
    ]);

    print_list("start", playlist.value());

    // Select two tracks and move them to the top
    let naima = playlist.value()[1].clone();
    let alabama = playlist.value()[4].clone();
    playlist.on_item_click(&naima, 1, KeyboardModifiers::NONE);
    playlist.on_item_click(&alabama, 4, KeyboardModifiers::CTRL);
    playlist.move_top();
    print_list("move top", playlist.value());

    // One step down
    playlist.move_down();
    print_list("move down", playlist.value());

    // Filter by artist and drag within the filtered view
    playlist.filter("miles");
    print_list("filtered", playlist.visible_items());
    let so_what = playlist.visible_items()[1].clone();
    playlist.on_drop(DropEvent::new(1, 0, so_what));
    print_list("dropped", playlist.value());

    playlist.filter("zz top");
    let slots = playlist.empty_slots(&templates);
    if slots.empty_filter {
        if let Some(message) = templates.get(TemplateSlot::EmptyFilter) {
            println!("{:>10}: {message}", "empty");
        }
    }

    playlist.reset_filter();
    print_list("final", playlist.value());
    println!("{playlist:?}");
    Ok(())
}
