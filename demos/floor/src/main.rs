//! floor — end-to-end demo of the AGV floor-plan toolkit.
//!
//! Lays out a small 20 × 20 warehouse with the placement engine, persists it
//! through the JSON file store, reloads it, and animates one full putaway
//! task in the terminal.  Swap the embedded capacity table and grid size for
//! a production floor; everything else scales unchanged.

use std::io::Cursor;
use std::thread;
use std::time::Instant;

use anyhow::Result;

use agv_core::{Cell, ComponentKind, FloorMap, GridSpec, SimTiming};
use agv_layout::PlacementEngine;
use agv_path::BfsPathfinder;
use agv_sim::TaskSimulator;
use agv_store::{load_capacity_reader, JsonFileStore, MapStore};

// ── Constants ─────────────────────────────────────────────────────────────────

const ROWS: u32 = 20;
const COLS: u32 = 20;

// Faster than the reference 500 ms so the demo finishes quickly.
const STEP_INTERVAL_MS: u64 = 50;

// ── Capacity CSV ──────────────────────────────────────────────────────────────

// Reference warehouse budgets; in production this table comes from the
// external configuration source.
const CAPACITY_CSV: &str = "\
component,max\n\
Robot,13\n\
Shelf,26\n\
Station,10\n\
Charging,6\n\
Disable,unbounded\n\
";

// ── Layout ────────────────────────────────────────────────────────────────────

fn build_floor(engine: &PlacementEngine) -> Result<FloorMap> {
    let mut map = FloorMap::new("Demo Floor", GridSpec::new(ROWS, COLS));

    // Stations load on the outer ring; chargers sit just inside it.
    engine.place(&mut map, ComponentKind::Station, Cell::new(0, 3))?;
    engine.place(&mut map, ComponentKind::Station, Cell::new(0, 7))?;
    engine.place(&mut map, ComponentKind::Charging, Cell::new(18, 3))?;
    engine.place(&mut map, ComponentKind::Charging, Cell::new(18, 7))?;

    // A robot and a bank of shelves in the interior.
    engine.place(&mut map, ComponentKind::Robot, Cell::new(10, 10))?;
    for row in [6, 8] {
        for col in 5..10 {
            engine.place(&mut map, ComponentKind::Shelf, Cell::new(row, col))?;
        }
    }

    // A blocked aisle the robot has to route around.
    for col in 2..14 {
        engine.place(&mut map, ComponentKind::Disable, Cell::new(4, col))?;
    }

    Ok(map)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== floor — AGV warehouse demo ===");
    println!("Grid: {ROWS} × {COLS}  |  Step: {STEP_INTERVAL_MS} ms");
    println!();

    // 1. Capacity table, then a placement engine that honors it.
    let capacity = load_capacity_reader(Cursor::new(CAPACITY_CSV))?;
    let engine = PlacementEngine::with_capacity(capacity);

    // 2. Lay the floor out.
    let map = build_floor(&engine)?;
    println!(
        "Placed {} components ({} shelves, {} disabled cells)",
        map.components.len(),
        map.count_of(ComponentKind::Shelf),
        map.count_of(ComponentKind::Disable),
    );
    if let Some(left) = engine.remaining_for(&map, ComponentKind::Shelf)? {
        println!("Shelf budget remaining: {left}");
    }

    // 3. Persist and reload through the store, as the editor would.
    let store = JsonFileStore::open("output/floor")?;
    let saved = store.save_map(&map)?;
    let id = saved.id.as_deref().expect("save assigns an id");
    println!("Saved as {id}");
    let map = store.load_map(id)?;
    println!("Reloaded: {} ({} components)", map.name, map.components.len());
    println!();

    // 4. One full putaway task, paced like the on-screen animation.
    let timing = SimTiming { step_interval_ms: STEP_INTERVAL_MS, ..SimTiming::default() };
    let sim = TaskSimulator::new(BfsPathfinder).timing(timing);

    let t0 = Instant::now();
    let mut snapshots = 0usize;
    let mut last_phase = None;
    for snap in sim.start_run(&map)? {
        if last_phase != Some(snap.phase) {
            println!("{}  phase -> {}", snap.tick, snap.phase);
            last_phase = Some(snap.phase);
        }
        println!("{}  robot {}  shelf {}", snap.tick, snap.robot, snap.shelf);
        snapshots += 1;
        thread::sleep(timing.step_interval());
    }
    let elapsed = t0.elapsed();

    println!();
    println!(
        "Run complete: {snapshots} snapshots in {:.2} s",
        elapsed.as_secs_f64()
    );

    Ok(())
}
