use clap::{Parser, Subcommand};
use glam::{Quat, Vec3};
use handspace_common::{Handedness, Transform};
use handspace_device::{
    ButtonState, ControllerConfig, DevicePose, DeviceProfile, DeviceSnapshot, TickContext,
    TrackedController,
};
use handspace_frame::InputFrame;
use handspace_scene::SceneGraph;
use handspace_tools::FrameInspector;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "handspace-cli", about = "CLI tool for handspace input operations")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print pipeline version and built-in profile info
    Info,
    /// Run the pipeline against a synthetic device and scene
    Simulate {
        /// Number of ticks to simulate
        #[arg(short, long, default_value = "10")]
        ticks: u64,
        /// Ticks before the device reports its hand identity
        #[arg(long, default_value = "3")]
        handless_ticks: u64,
        /// Dump the final frame as JSON instead of formatted entries
        #[arg(long)]
        json: bool,
    },
    /// Dump the built-in profile, or load and validate a profile file
    Profile {
        /// YAML profile file to load; omit to print the built-in profile
        path: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("handspace-cli v{}", env!("CARGO_PKG_VERSION"));
            let profile = DeviceProfile::vive_wand();
            println!(
                "built-in profile: {} ({} buttons, {} axes)",
                profile.name,
                profile.buttons.len(),
                profile.axes.len()
            );
            println!(
                "seated eye height: {:.2} m",
                TickContext::SEATED_EYE_HEIGHT
            );
        }
        Commands::Simulate {
            ticks,
            handless_ticks,
            json,
        } => {
            println!("Simulating {ticks} ticks ({handless_ticks} before hand resolution)");

            let mut scene = SceneGraph::new();
            let left = scene.insert(
                "player-left-controller",
                Transform::from_rotation_translation(Quat::IDENTITY, Vec3::new(-0.2, 1.4, -0.3)),
            );
            scene.insert(
                "player-right-controller",
                Transform::from_rotation_translation(Quat::IDENTITY, Vec3::new(0.2, 1.4, -0.3)),
            );

            let mut frame = InputFrame::new();
            let mut controller =
                TrackedController::new(ControllerConfig::default(), 0, None, &mut frame, &scene)?;
            let ctx = TickContext::seated_default();

            for tick in 0..ticks {
                frame.begin_tick();

                // external transform-update pass: wave the controller node
                let angle = tick as f32 * 0.1;
                scene.set_transform(
                    left,
                    Transform::from_rotation_translation(
                        Quat::from_rotation_y(angle),
                        Vec3::new(-0.2, 1.4, -0.3),
                    ),
                );

                let hand = (tick >= handless_ticks).then_some(Handedness::Left);
                let snapshot = synthetic_snapshot(tick, hand);
                controller.tick(&snapshot, &ctx, &scene, &mut frame)?;

                println!(
                    "tick {tick:>3} hand={} {}",
                    controller.hand().map_or("?", |h| h.as_str()),
                    FrameInspector::summary(&frame)
                );
            }

            println!("final frame:");
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&FrameInspector::to_json(&frame))?
                );
            } else {
                for entry in FrameInspector::entries(&frame) {
                    println!("  {entry}");
                }
            }
        }
        Commands::Profile { path } => match path {
            Some(path) => {
                let profile = DeviceProfile::from_yaml_file(&path)?;
                println!(
                    "loaded profile {:?}: {} buttons ({} raw slots), {} axes ({} raw slots)",
                    profile.name,
                    profile.buttons.len(),
                    profile.raw_button_count(),
                    profile.axes.len(),
                    profile.raw_axis_count()
                );
            }
            None => {
                print!("{}", DeviceProfile::vive_wand().to_yaml()?);
            }
        },
    }

    Ok(())
}

/// Deterministic synthetic device state for the simulator.
fn synthetic_snapshot(tick: u64, hand: Option<Handedness>) -> DeviceSnapshot {
    let pull = (tick % 10) as f32 / 10.0;
    let sweep = (tick as f32 * 0.2).sin();
    DeviceSnapshot {
        connected: true,
        index: 0,
        hand,
        buttons: vec![
            ButtonState {
                pressed: sweep > 0.5,
                touched: true,
                value: sweep.max(0.0),
            },
            ButtonState {
                pressed: pull > 0.5,
                touched: pull > 0.1,
                value: pull,
            },
            ButtonState {
                pressed: tick % 4 == 0,
                touched: tick % 2 == 0,
                value: if tick % 4 == 0 { 1.0 } else { 0.0 },
            },
            ButtonState::default(),
        ],
        axes: vec![sweep, -sweep],
        pose: DevicePose {
            position: Some(Vec3::new(0.1, -0.2 + pull * 0.1, -0.4)),
            orientation: Some(Quat::from_rotation_y(tick as f32 * 0.05)),
        },
    }
}
