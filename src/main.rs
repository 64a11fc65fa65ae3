mod app;
mod mesh;
mod radar;
mod util;

use std::path::PathBuf;
use std::time::SystemTime;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::mesh::{DEFAULT_PEER_COUNT, JsonFileStore, PeerField, PreferenceStore};
use crate::radar::RadarSession;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of synthetic peers placed on the radar.
    #[arg(long, default_value_t = DEFAULT_PEER_COUNT)]
    peers: usize,
    /// Seed for peer generation and signal drift; random when omitted.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value = "radar-prefs.json")]
    prefs: PathBuf,
    /// Show the radar tutorial again on launch.
    #[arg(long)]
    reset_tutorial: bool,
}

fn reset_tutorial(store: &mut JsonFileStore) {
    let result = store.load().and_then(|mut prefs| {
        prefs.has_seen_radar_tutorial = false;
        store.save(&prefs)
    });
    if let Err(error) = result {
        warn!("failed to reset tutorial flag: {error:#}");
    }
}

fn main() -> eframe::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mesh_radar=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);

    let field = PeerField::generate(args.peers, &mut rng, SystemTime::now());
    info!(peers = field.len(), seed, "generated peer field");

    let mut store = JsonFileStore::new(args.prefs);
    info!(path = %store.path().display(), "using preferences store");
    if args.reset_tutorial {
        reset_tutorial(&mut store);
    }

    let session = RadarSession::new(field, Box::new(store), rng);
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "mesh-radar",
        options,
        Box::new(move |cc| Ok(Box::new(app::MeshRadarApp::new(cc, session)))),
    )
}
