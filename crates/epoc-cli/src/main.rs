//! EPOC CLI: terminal poller for the Emotiv EPOC EmoEngine.
//!
//! This is the main entry point for the `epoc` demo tool. It drives the
//! vendor engine through `lib-edk-ffi`: connect, poll the event queue,
//! and print what the headset reports.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lib_edk_ffi::{
    default_library_name, EdkLibrary, EngineSession, StateHandle, EMOCOMPOSER_PORT,
};
use lib_edk_types::{EventKind, InputChannel, UserId};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "epoc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the vendor engine library (defaults to the platform name,
    /// resolved through the loader search path)
    #[arg(short, long, global = true)]
    library: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Poll the engine and print one line per EmoState update
    Monitor {
        /// Connect to a remote endpoint instead of the local headset
        #[arg(long)]
        remote: Option<String>,

        /// Port for the remote endpoint (1726 is EmoComposer, 3008 is
        /// Control Panel)
        #[arg(long, default_value_t = EMOCOMPOSER_PORT)]
        port: u16,

        /// Sleep between polls when the queue is empty (milliseconds)
        #[arg(long, default_value = "10")]
        interval_ms: u64,

        /// Stop after this many state updates
        #[arg(long)]
        count: Option<u64>,
    },

    /// Print the sensor descriptor table
    Sensors,

    /// Print engine software and headset hardware versions
    Version {
        /// User to query the hardware version for
        #[arg(long, default_value = "0")]
        user: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let library_path = cli
        .library
        .unwrap_or_else(|| PathBuf::from(default_library_name()));
    let library = EdkLibrary::load(&library_path)
        .with_context(|| format!("loading engine library {library_path:?}"))?;
    let mut session = EngineSession::new(library);

    match cli.command {
        Commands::Monitor {
            remote,
            port,
            interval_ms,
            count,
        } => {
            match remote {
                Some(host) => session
                    .connect_remote(&host, port)
                    .with_context(|| format!("connecting to {host}:{port}"))?,
                None => session
                    .connect()
                    .context("connecting to the local engine; is a headset plugged in?")?,
            }
            run_monitor(&mut session, interval_ms, count, cli.format)?;
            session.disconnect()?;
        }
        Commands::Sensors => {
            run_sensors(&session)?;
        }
        Commands::Version { user } => {
            run_version(&mut session, UserId(user))?;
        }
    }

    Ok(())
}

fn run_monitor(
    session: &mut EngineSession,
    interval_ms: u64,
    count: Option<u64>,
    format: OutputFormat,
) -> Result<()> {
    let mut event = session.create_event_handle()?;
    let mut state = session.create_state_handle()?;
    let mut delivered: u64 = 0;

    if let Some(endpoint) = session.target() {
        tracing::info!(endpoint = %endpoint, "Polling for engine events");
    }

    loop {
        match session.poll_next_event(&mut event)? {
            Some(EventKind::EmoStateUpdated) => {
                let user = session.event_user(&event)?;
                session.copy_state_from_event(&event, &mut state)?;
                print_state(user, &state, format)?;
                delivered += 1;
                if count.is_some_and(|limit| delivered >= limit) {
                    return Ok(());
                }
            }
            Some(EventKind::UserAdded) => {
                let user = session.event_user(&event)?;
                println!("User {user} added");
            }
            Some(EventKind::UserRemoved) => {
                let user = session.event_user(&event)?;
                println!("User {user} removed");
            }
            Some(EventKind::ExpressivEvent) => {
                let user = session.event_user(&event)?;
                let detail = session.expressiv_event_kind(&event);
                println!("User {user} expressiv training: {detail:?}");
            }
            Some(EventKind::CognitivEvent) => {
                let user = session.event_user(&event)?;
                let detail = session.cognitiv_event_kind(&event);
                println!("User {user} cognitiv training: {detail:?}");
            }
            Some(kind) => {
                tracing::debug!(kind = ?kind, "Ignoring engine event");
            }
            None => std::thread::sleep(Duration::from_millis(interval_ms)),
        }
    }
}

fn print_state(user: UserId, state: &StateHandle, format: OutputFormat) -> Result<()> {
    let battery = state.battery_charge();
    let wireless = state.wireless_signal()?;
    let cognitiv = state.cognitiv_action();

    match format {
        OutputFormat::Text => {
            println!(
                "t={:8.2}s user={} wireless={:?} battery={}/{} \
                 excitement={:.2}/{:.2} meditation={:.2} frustration={:.2} \
                 cognitiv={:?} ({:.2})",
                state.time_from_start(),
                user,
                wireless,
                battery.level,
                battery.max_level,
                state.excitement_short_term(),
                state.excitement_long_term(),
                state.meditation(),
                state.frustration(),
                cognitiv,
                state.cognitiv_power(),
            );
        }
        OutputFormat::Json => {
            let line = serde_json::json!({
                "t": state.time_from_start(),
                "user": user.0,
                "wireless": format!("{wireless:?}"),
                "battery": { "level": battery.level, "max": battery.max_level },
                "excitement_short": state.excitement_short_term(),
                "excitement_long": state.excitement_long_term(),
                "meditation": state.meditation(),
                "frustration": state.frustration(),
                "cognitiv": { "action": format!("{cognitiv:?}"), "power": state.cognitiv_power() },
            });
            println!("{}", serde_json::to_string(&line)?);
        }
    }
    Ok(())
}

fn run_sensors(session: &EngineSession) -> Result<()> {
    println!("channel  label  exists        x        y        z");
    for channel in InputChannel::ALL {
        let sensor = session
            .sensor_details(channel)
            .with_context(|| format!("querying sensor details for {channel}"))?;
        println!(
            "{:>7}  {:>5}  {:>6}  {:7.3}  {:7.3}  {:7.3}",
            channel.as_raw(),
            sensor.label,
            if sensor.exists { "yes" } else { "no" },
            sensor.x,
            sensor.y,
            sensor.z,
        );
    }
    Ok(())
}

fn run_version(session: &mut EngineSession, user: UserId) -> Result<()> {
    // Version queries need a live engine; the emulator answers them too.
    session
        .connect()
        .context("connecting to the local engine")?;

    let software = session.software_version()?;
    println!("Software: {software}");

    match session.hardware_version(user) {
        Ok(hardware) => println!("Hardware: {hardware}"),
        Err(e) => println!("Hardware: unavailable for user {user} ({e})"),
    }

    session.disconnect()?;
    Ok(())
}
