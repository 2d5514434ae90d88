//! Command-line front end for inspecting the configuration tables.
//!
//! # Usage
//!
//! ```text
//! blockfall [COMMAND] [--format text|json]
//!
//! COMMAND:
//!   show                 print every table (default)
//!   json                 same as `show --format json`
//!   validate             re-check table invariants, exit non-zero on failure
//!   shape <PIECE> [ROT]  one piece, or one rotation state (0-3 / north..west)
//!   speed <LEVEL>        drop interval for a level
//!   points <LINES|EVENT> points for clearing 1-4 lines, or for a named event
//!                        (single, double, triple, tetris, soft_drop, hard_drop)
//!   level <LINES>        level reached after a running line total
//! ```
//!
//! # Environment Variables
//!
//! - `BLOCKFALL_FORMAT`: default output format, `text` or `json` (default: `text`)
//! - `BLOCKFALL_LOG`: log filter for env_logger (default: `warn`)

use std::io::Write;

use anyhow::{anyhow, Context, Result};
use serde_json::json;

use crate::core::{parse_piece, parse_rotation, ConfigSnapshot, GameConfig};
use crate::preview::{render_rotations, render_shape, rotation_labels};
use crate::types::{PieceKind, Rotation, ScoringEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Show,
    Validate,
    Shape(PieceKind, Option<Rotation>),
    Speed(u32),
    Points(u32),
    Event(ScoringEvent),
    Level(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CliConfig {
    pub command: Command,
    pub format: OutputFormat,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            command: Command::Show,
            format: OutputFormat::Text,
        }
    }
}

impl CliConfig {
    /// Defaults overridden by `BLOCKFALL_FORMAT`; unparseable values are ignored
    pub fn from_env() -> Self {
        let format = std::env::var("BLOCKFALL_FORMAT")
            .ok()
            .and_then(|s| OutputFormat::from_str(&s))
            .unwrap_or(OutputFormat::Text);

        Self {
            format,
            ..Self::default()
        }
    }
}

fn parse_number(cmd: &str, what: &str, value: Option<&String>) -> Result<u32> {
    let v = value.ok_or_else(|| anyhow!("{}: missing {}", cmd, what))?;
    v.parse::<u32>()
        .map_err(|_| anyhow!("{}: invalid {}: {}", cmd, what, v))
}

/// Parse arguments (program name already stripped) on top of `base`
pub fn parse_args(args: &[String], base: CliConfig) -> Result<CliConfig> {
    let mut config = base;
    let mut positional: Vec<&String> = Vec::new();

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--format" | "-f" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --format"))?;
                config.format =
                    OutputFormat::from_str(v).ok_or_else(|| anyhow!("invalid --format value: {}", v))?;
            }
            flag if flag.starts_with('-') && flag.len() > 1 && flag.parse::<i64>().is_err() => {
                return Err(anyhow!("unknown argument: {}", flag));
            }
            _ => positional.push(&args[i]),
        }
        i += 1;
    }

    let Some((cmd, rest)) = positional.split_first() else {
        return Ok(config);
    };
    let expect_max = |n: usize| -> Result<()> {
        if rest.len() > n {
            return Err(anyhow!("{}: unexpected argument: {}", cmd, rest[n]));
        }
        Ok(())
    };

    config.command = match cmd.as_str() {
        "show" => {
            expect_max(0)?;
            Command::Show
        }
        "json" => {
            expect_max(0)?;
            config.format = OutputFormat::Json;
            Command::Show
        }
        "validate" => {
            expect_max(0)?;
            Command::Validate
        }
        "shape" => {
            expect_max(2)?;
            let piece = rest.first().ok_or_else(|| anyhow!("shape: missing piece"))?;
            let kind = parse_piece(piece)?;
            let rotation = rest.get(1).map(|r| parse_rotation(r)).transpose()?;
            Command::Shape(kind, rotation)
        }
        "speed" => {
            expect_max(1)?;
            Command::Speed(parse_number("speed", "level", rest.first().copied())?)
        }
        "points" => {
            expect_max(1)?;
            match rest.first().and_then(|s| ScoringEvent::from_str(s)) {
                Some(event) => Command::Event(event),
                None => Command::Points(parse_number(
                    "points",
                    "line count",
                    rest.first().copied(),
                )?),
            }
        }
        "level" => {
            expect_max(1)?;
            Command::Level(parse_number("level", "line total", rest.first().copied())?)
        }
        other => return Err(anyhow!("unknown command: {}", other)),
    };

    Ok(config)
}

/// Execute `config.command` against the standard table, writing to `out`
pub fn run(config: &CliConfig, out: &mut impl Write) -> Result<()> {
    let cfg = GameConfig::standard();
    log::debug!("running {:?} as {:?}", config.command, config.format);

    match (config.command, config.format) {
        (Command::Show, OutputFormat::Json) => {
            let json = ConfigSnapshot::from(cfg)
                .to_json_pretty()
                .context("serialize configuration")?;
            writeln!(out, "{}", json)?;
        }
        (Command::Show, OutputFormat::Text) => write_tables(cfg, out)?,
        (Command::Validate, format) => {
            cfg.validate().context("configuration table failed validation")?;
            match format {
                OutputFormat::Json => writeln!(out, "{}", json!({ "valid": true }))?,
                OutputFormat::Text => writeln!(out, "ok")?,
            }
        }
        (Command::Shape(kind, None), OutputFormat::Text) => write_piece(cfg, kind, out)?,
        (Command::Shape(kind, None), OutputFormat::Json) => {
            let def = cfg.shape_of(kind);
            let rotations: Vec<_> = def
                .all_cells()
                .iter()
                .map(|s| s.map(|(x, y)| [x, y]))
                .collect();
            writeln!(
                out,
                "{}",
                json!({ "kind": kind.as_str(), "color": def.color, "rotations": rotations })
            )?;
        }
        (Command::Shape(kind, Some(rotation)), format) => {
            let cells = cfg.get_shape(kind, rotation);
            match format {
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    json!({
                        "kind": kind.as_str(),
                        "rotation": rotation.index(),
                        "name": rotation.as_str(),
                        "cells": cells.map(|(x, y)| [x, y]),
                    })
                )?,
                OutputFormat::Text => {
                    writeln!(
                        out,
                        "{} state {} ({}) {:?}",
                        kind.as_str(),
                        rotation.index(),
                        rotation.as_str(),
                        cells
                    )?;
                    for row in render_shape(&cells) {
                        writeln!(out, "  {}", row)?;
                    }
                }
            }
        }
        (Command::Speed(level), format) => {
            let ms = cfg.drop_interval_ms(level)?;
            match format {
                OutputFormat::Json => {
                    writeln!(out, "{}", json!({ "level": level, "interval_ms": ms }))?
                }
                OutputFormat::Text => writeln!(out, "{}", ms)?,
            }
        }
        (Command::Points(lines), format) => {
            let points = cfg.points_for(lines)?;
            match format {
                OutputFormat::Json => {
                    writeln!(out, "{}", json!({ "lines": lines, "points": points }))?
                }
                OutputFormat::Text => writeln!(out, "{}", points)?,
            }
        }
        (Command::Event(event), format) => {
            let points = cfg.points(event);
            match format {
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    json!({
                        "event": event.as_str(),
                        "points": points,
                        "per_cell": event.is_per_cell(),
                    })
                )?,
                OutputFormat::Text => writeln!(out, "{}", points)?,
            }
        }
        (Command::Level(lines), format) => {
            let level = cfg.level_for_lines(lines);
            let ms = cfg.drop_interval_ms(level)?;
            match format {
                OutputFormat::Json => writeln!(
                    out,
                    "{}",
                    json!({ "lines": lines, "level": level, "interval_ms": ms })
                )?,
                OutputFormat::Text => writeln!(out, "{}", level)?,
            }
        }
    }

    Ok(())
}

fn write_piece(cfg: &GameConfig, kind: PieceKind, out: &mut impl Write) -> Result<()> {
    let def = cfg.shape_of(kind);
    writeln!(out, "  {} (color {})", kind.as_str(), def.color)?;
    writeln!(out, "    {}", rotation_labels(def, 2).trim_end())?;
    for row in render_rotations(def, 2) {
        writeln!(out, "    {}", row)?;
    }
    Ok(())
}

fn write_tables(cfg: &GameConfig, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Pieces")?;
    for kind in PieceKind::ALL {
        write_piece(cfg, kind, out)?;
    }

    let (x, y) = cfg.spawn_position();
    writeln!(out)?;
    writeln!(out, "Spawn: ({}, {})", x, y)?;

    writeln!(out)?;
    writeln!(out, "Speeds")?;
    for (level, ms) in cfg.speeds.entries() {
        writeln!(out, "  level {:>2}: {:>4} ms", level, ms)?;
    }

    writeln!(out)?;
    writeln!(out, "Points")?;
    for event in ScoringEvent::ALL {
        let suffix = if event.is_per_cell() { " per cell" } else { "" };
        writeln!(out, "  {:<10} {:>4}{}", event.as_str(), cfg.points(event), suffix)?;
    }

    writeln!(out)?;
    writeln!(out, "Lines per level: {}", cfg.lines_per_level)?;
    Ok(())
}
