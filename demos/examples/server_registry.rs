// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A filtered server registry, scrolled through a windowed list.
//!
//! Simulates a host UI: the list configuration is loaded from JSON, a search
//! box narrows the registry, and scroll events arrive faster than rows change.
//! Each frame prints the spacer height, the slice translation, and the keys
//! the host would create or destroy.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p understory_demos --example server_registry`

use understory_windowed_list::{KeyDelta, KeyedVec, ScrollAlign, WindowConfig, WindowManager};

#[derive(Clone, Debug)]
struct Server {
    name: String,
    category: &'static str,
    installed: bool,
}

type Servers = KeyedVec<Server, fn(&Server) -> String>;

fn server_key(server: &Server) -> String {
    server.name.clone()
}

fn registry() -> Vec<Server> {
    const CATEGORIES: [&str; 4] = ["database", "filesystem", "search", "devtools"];
    (0..5_000)
        .map(|i| Server {
            name: format!("{}-{i:04}", CATEGORIES[i % 4]),
            category: CATEGORIES[i % 4],
            installed: i % 7 == 0,
        })
        .collect()
}

fn search(all: &[Server], query: &str) -> Servers {
    let matches = all
        .iter()
        .filter(|s| s.name.contains(query) || s.category == query)
        .cloned()
        .collect();
    Servers::new(matches, server_key)
}

fn print_frame(label: &str, list: &WindowManager<Servers>, delta: &KeyDelta<String>) {
    let view = list.view();
    println!(
        "{label}: rows {}..{} of {} | spacer {}px | translate {}px | +{} -{}",
        view.window().start,
        view.window().end,
        list.len(),
        view.total_content_height(),
        view.window_offset(),
        delta.entered.len(),
        delta.exited.len(),
    );
    for row in view.items() {
        let marker = if row.item.installed { "*" } else { " " };
        println!("  {marker} [{:>4}] {}", row.index, row.key);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config: WindowConfig<f64> = serde_json::from_str(
        r#"{ "item_height": 72.0, "initial_viewport_height": 360.0, "overscan_count": 2 }"#,
    )?;
    let all = registry();
    let mut list = WindowManager::new(search(&all, ""), config)?;
    print_frame("initial", &list, &KeyDelta::none());

    // A fling: many events, few row changes.
    let mut published = list.revision();
    for step in 1..=40 {
        let delta = list.on_scroll(f64::from(step) * 9.0);
        if list.revision() != published {
            published = list.revision();
            log::info!("frame at offset {}: {:?}", list.scroll_offset(), list.window());
            if !delta.is_empty() {
                print_frame("fling", &list, &delta);
            }
        }
    }

    let delta = list.scroll_to_index(2_500, ScrollAlign::Center);
    print_frame("jump to 2500", &list, &delta);

    // The search narrows the registry; the stale offset now points past the end.
    let delta = list.on_collection_changed(search(&all, "database-00"));
    print_frame("search `database-00`", &list, &delta);
    let clamped = list.clamp_scroll_offset(list.scroll_offset());
    let delta = list.on_scroll(clamped);
    print_frame("host clamps", &list, &delta);

    let delta = list.on_viewport_resize(720.0)?;
    print_frame("window resized", &list, &delta);

    Ok(())
}
