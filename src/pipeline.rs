//! End-to-end conversion driver and batch controller.
//!
//! Two independent windowing axes:
//! - the **fan-out window** groups placements so child queries run with a
//!   bounded id-set filter;
//! - the **flush threshold** retires the accumulator to a new Turtle unit
//!   after a configured number of placements, bounding live memory by the
//!   unit size rather than the input size.
//!
//! The pending window is always drained before a flush and at end of input,
//! so every unit holds complete placement subgraphs and the fan-out window
//! size never changes the emitted triple set.

use std::fs::File;
use std::io::BufWriter;

use crate::config::PipelineConfig;
use crate::error::ConvertError;
use crate::graph::GraphAccumulator;
use crate::mapping::{map_bracket, map_mount, map_placement, map_sign};
use crate::register::SignRegister;
use crate::source::SqliteSource;

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, Copy)]
pub struct PipelineStats {
    pub placements: u64,
    pub signs: u64,
    pub mounts: u64,
    pub brackets: u64,
    pub units_written: u64,
    pub triples_written: u64,
}

pub struct Pipeline {
    config: PipelineConfig,
    source: SqliteSource,
    register: SignRegister,
}

impl Pipeline {
    pub fn new(config: PipelineConfig, source: SqliteSource, register: SignRegister) -> Self {
        Self {
            config,
            source,
            register,
        }
    }

    /// Run the conversion to completion, writing Turtle units as thresholds
    /// are reached and printing the register miss report at the end.
    pub fn run(self) -> Result<PipelineStats, ConvertError> {
        let Pipeline {
            config,
            source,
            mut register,
        } = self;
        std::fs::create_dir_all(&config.output_dir)?;

        // Unit counter bumps on every accumulator creation, the initial one
        // included, whether or not the previous unit had content.
        let mut accumulator = GraphAccumulator::new(1);
        let mut next_unit: u64 = 2;
        let mut window: Vec<i64> = Vec::new();
        let mut since_flush: usize = 0;
        let mut stats = PipelineStats::default();

        source.for_each_placement(|placement| {
            accumulator.merge(map_placement(&placement)?);
            window.push(placement.id);
            stats.placements += 1;
            since_flush += 1;

            if window.len() >= config.batch_size {
                drain_window(&source, &mut register, &mut accumulator, &mut window, &mut stats)?;
            }
            if since_flush >= config.write_size {
                // Children of the still-open window belong to this unit.
                drain_window(&source, &mut register, &mut accumulator, &mut window, &mut stats)?;
                flush_unit(&config, &mut accumulator, &mut next_unit, &mut stats)?;
                since_flush = 0;
            }
            Ok(())
        })?;

        drain_window(&source, &mut register, &mut accumulator, &mut window, &mut stats)?;
        flush_unit(&config, &mut accumulator, &mut next_unit, &mut stats)?;

        log::info!(
            "processed {} placements, {} signs, {} mounts, {} brackets into {} units ({} triples)",
            stats.placements,
            stats.signs,
            stats.mounts,
            stats.brackets,
            stats.units_written,
            stats.triples_written,
        );
        println!("could not find info in register for following signs:");
        println!("{}", register.missed_codes().join(", "));

        Ok(stats)
    }
}

/// Fetch and map all children of the pending placement window, then clear it.
fn drain_window(
    source: &SqliteSource,
    register: &mut SignRegister,
    accumulator: &mut GraphAccumulator,
    window: &mut Vec<i64>,
    stats: &mut PipelineStats,
) -> Result<(), ConvertError> {
    if window.is_empty() {
        return Ok(());
    }

    for sign in source.signs_for(window)? {
        if sign.id.is_some() {
            stats.signs += 1;
        }
        accumulator.merge(map_sign(&sign, register)?);
    }

    let mounts = source.mounts_for(window)?;
    let mount_ids: Vec<i64> = mounts.iter().filter_map(|m| m.id).collect();
    for mount in &mounts {
        if mount.id.is_some() {
            stats.mounts += 1;
        }
        accumulator.merge(map_mount(mount)?);
    }

    for bracket in source.brackets_for(&mount_ids)? {
        if bracket.id.is_some() {
            stats.brackets += 1;
        }
        accumulator.merge(map_bracket(&bracket));
    }

    window.clear();
    Ok(())
}

/// Serialize the accumulator if non-empty and start a fresh one. The unit
/// counter advances either way.
fn flush_unit(
    config: &PipelineConfig,
    accumulator: &mut GraphAccumulator,
    next_unit: &mut u64,
    stats: &mut PipelineStats,
) -> Result<(), ConvertError> {
    if !accumulator.is_empty() {
        let path = config
            .output_dir
            .join(format!("{}_{}.ttl", config.file_stem, accumulator.unit()));
        let file = File::create(&path)?;
        accumulator.write_turtle(BufWriter::new(file))?;
        log::info!("wrote {} with {} triples", path.display(), accumulator.len());
        stats.units_written += 1;
        stats.triples_written += accumulator.len() as u64;
    } else {
        log::debug!("skipping empty unit {}", accumulator.unit());
    }
    *accumulator = GraphAccumulator::new(*next_unit);
    *next_unit += 1;
    Ok(())
}
