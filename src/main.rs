//! Hypocrite Scanner entry point
//!
//! The browser build is driven from JS through `platform::web::WebGame`.
//! Natively this runs a headless scripted walk for smoke-testing the sim.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use glam::Vec2;
    use hypocrite_scanner::sim::{GameSession, SimEvent, TickInput, tick};

    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| {
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0)
        });
    log::info!("Hypocrite Scanner (native, headless) starting with seed {}", seed);

    let mut session = GameSession::new(seed);
    let mut input = TickInput {
        forward: true,
        ..Default::default()
    };

    const DT: f32 = 1.0 / 60.0;
    const MAX_TICKS: u32 = 60 * 120;
    let (mut collected, mut tolls) = (0u32, 0u32);

    for frame in 0..MAX_TICKS {
        // Sweep the scanner every half second, turn a little every few seconds
        input.scan = frame % 30 == 0;
        if frame % 180 == 0 {
            input.look = Vec2::new(260.0, 0.0);
        }

        tick(&mut session, &input, DT);
        input.clear_one_shots();

        for event in session.drain_events() {
            match event {
                SimEvent::Revealed { id, state } => log::debug!("{id} revealed as {state:?}"),
                SimEvent::Collected { .. } => collected += 1,
                SimEvent::TollPaid { .. } => tolls += 1,
                SimEvent::Caught { id } => log::info!("Caught by {id} at frame {frame}"),
                _ => {}
            }
        }

        if session.is_over() {
            break;
        }
    }

    println!(
        "seed {}: {} ticks, {} collected, {} tolls paid, {} coins left, {}",
        seed,
        session.time_ticks(),
        collected,
        tolls,
        session.currency(),
        if session.is_over() { "caught" } else { "survived" }
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is platform::web::start, this is just to satisfy the compiler
}
