//! Minimal event polling example.
//!
//! This example demonstrates:
//! 1. Loading the vendor engine library
//! 2. Connecting to a running EmoComposer emulator
//! 3. Polling the event queue and reading EmoState snapshots
//!
//! Start EmoComposer first, then run:
//! `cargo run --example poll_events`

use lib_edk_ffi::{default_library_name, EdkLibrary, EngineSession, EMOCOMPOSER_PORT};
use lib_edk_types::EventKind;
use std::path::Path;
use std::time::{Duration, Instant};

fn main() -> anyhow::Result<()> {
    let library = EdkLibrary::load(Path::new(default_library_name()))?;
    let mut session = EngineSession::new(library);

    println!("=== EmoEngine Event Polling Example ===\n");
    session.connect_remote("127.0.0.1", EMOCOMPOSER_PORT)?;
    println!("Connected to EmoComposer on port {EMOCOMPOSER_PORT}");

    let mut event = session.create_event_handle()?;
    let mut state = session.create_state_handle()?;

    // Poll for ten seconds, then disconnect.
    let deadline = Instant::now() + Duration::from_secs(10);
    while Instant::now() < deadline {
        match session.poll_next_event(&mut event)? {
            Some(EventKind::UserAdded) => {
                let user = session.event_user(&event)?;
                println!("User {user} added");
            }
            Some(EventKind::EmoStateUpdated) => {
                session.copy_state_from_event(&event, &mut state)?;
                println!(
                    "t={:.2}s battery={}/{} meditation={:.2} excitement={:.2}",
                    state.time_from_start(),
                    state.battery_charge().level,
                    state.battery_charge().max_level,
                    state.meditation(),
                    state.excitement_short_term(),
                );
            }
            Some(kind) => println!("Event: {kind:?}"),
            None => std::thread::sleep(Duration::from_millis(10)),
        }
    }

    session.disconnect()?;
    println!("\nDisconnected.");
    Ok(())
}
