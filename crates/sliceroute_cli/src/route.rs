//! `sliceroute route`: replay an event script and write the netlist.
//!
//! 1. Resolve settings from `sliceroute.toml` and flags
//! 2. Scan the device dump into a site grid
//! 3. Parse the event script
//! 4. Replay every event against a fresh sketch
//! 5. Render diagnostics
//! 6. Generate and write the netlist, unless the sketch is empty

use std::path::PathBuf;

use sliceroute_config::{is_verilog_identifier, module_name_for};
use sliceroute_diagnostics::{Diagnostic, DiagnosticCode, Location};
use sliceroute_path::{PathModel, SketchEvent};

use crate::pipeline::{load_grid, render_diagnostics, resolve_settings};
use crate::script::{parse_script, ScriptStep};
use crate::{GlobalArgs, RouteArgs};

/// Runs the `sliceroute route` command.
///
/// Returns exit code 0 if no errors, 1 if there are errors.
pub fn run(args: &RouteArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let settings = resolve_settings(global, args.device.as_deref())?;

    let output = args
        .output
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| settings.output.clone());
    let module = args
        .module
        .clone()
        .or_else(|| settings.module.clone())
        .unwrap_or_else(|| module_name_for(&output));
    if !is_verilog_identifier(&module) {
        return Err(format!("module name '{module}' is not a Verilog identifier").into());
    }

    let grid = load_grid(&settings, global)?;
    let script = std::fs::read_to_string(&args.script)
        .map_err(|e| format!("failed to read {}: {e}", args.script))?;
    let steps = parse_script(&script)?;

    let mut model = PathModel::new(&grid);
    model.set_intermediate_count(args.intermediates.unwrap_or(settings.intermediate_count))?;
    model.set_parallel_wires(args.wires.unwrap_or(settings.wires))?;
    replay(&mut model, &steps)?;

    if model.point_count() == 0 {
        model.diagnostics().emit(
            Diagnostic::error(DiagnosticCode::EMPTY_SKETCH, "script selected no sites")
                .with_note(format!("{} not written", output.display()))
                .with_help("add `select <x> <y>` lines naming sites on the grid"),
        );
    }

    render_diagnostics(model.diagnostics(), global.color);

    if model.point_count() > 0 {
        let netlist = model.generate_as(&module, &settings.entry_signal);
        if let Some(parent) = output.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&output, &netlist.text)?;

        if !global.quiet {
            eprintln!(
                "      Wrote {} ({} LUTs, {} stages in {} segments, {})",
                output.display(),
                netlist.cell_count,
                netlist.stage_count,
                netlist.segment_count,
                model.parallel_wires()
            );
        }
    }

    if !global.quiet {
        eprintln!(
            "   Result: {} error(s), {} warning(s)",
            model.diagnostics().error_count(),
            model.diagnostics().warning_count()
        );
    }

    if model.diagnostics().has_errors() {
        Ok(1)
    } else {
        Ok(0)
    }
}

/// Applies every scripted event in order.
///
/// A selection off the grid is skipped with a warning naming the script
/// line; an out-of-range setting aborts the replay.
fn replay(model: &mut PathModel<'_>, steps: &[ScriptStep]) -> Result<(), Box<dyn std::error::Error>> {
    for step in steps {
        let delta = model
            .apply(step.event)
            .map_err(|e| format!("line {}: {e}", step.line))?;
        if let SketchEvent::Select(coord) = step.event {
            if delta.is_unchanged() {
                model.diagnostics().emit(
                    Diagnostic::warning(
                        DiagnosticCode::SELECTION_OFF_GRID,
                        format!("no site at {coord}, selection ignored"),
                    )
                    .at(Location::Site(coord))
                    .with_note(format!("script line {}", step.line)),
                );
            }
        }
    }
    log::info!(
        "replayed {} events: {} segments, {} points",
        steps.len(),
        model.segments().len(),
        model.point_count()
    );
    Ok(())
}
