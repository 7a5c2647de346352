//! `sliceroute import`: recover a sketch from a generated netlist.

use std::path::PathBuf;

use serde::Serialize;
use sliceroute_common::SiteCoord;
use sliceroute_config::module_name_for;
use sliceroute_diagnostics::{Diagnostic, DiagnosticSink};
use sliceroute_path::PathModel;

use crate::pipeline::{load_grid, render_diagnostics, resolve_settings};
use crate::{GlobalArgs, ImportArgs, ReportFormat};

/// Machine-readable result of an import.
#[derive(Debug, Serialize)]
struct ImportReport<'a> {
    segments: &'a [Vec<SiteCoord>],
    diagnostics: Vec<Diagnostic>,
}

/// Runs the `sliceroute import` command.
///
/// Prints the recovered segments and, when no error was reported,
/// optionally regenerates the netlist.
/// Returns exit code 0 if no errors, 1 if there are errors.
pub fn run(args: &ImportArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let settings = resolve_settings(global, args.device.as_deref())?;
    let grid = load_grid(&settings, global)?;
    let text = std::fs::read_to_string(&args.netlist)
        .map_err(|e| format!("failed to read {}: {e}", args.netlist))?;

    let mut model = PathModel::new(&grid);
    model.set_parallel_wires(args.wires.unwrap_or(settings.wires))?;
    model.import(&text);
    let segments = model.snapshot();

    match args.format {
        ReportFormat::Text => {
            render_diagnostics(model.diagnostics(), global.color);
            print!("{}", format_segments(&segments));
        }
        ReportFormat::Json => {
            println!("{}", json_report(&segments, model.diagnostics())?);
        }
    }

    if let Some(output) = args.output.as_ref().filter(|_| !model.diagnostics().has_errors()) {
        let output = PathBuf::from(output);
        let module = settings
            .module
            .clone()
            .unwrap_or_else(|| module_name_for(&output));
        let netlist = model.generate_as(&module, &settings.entry_signal);
        std::fs::write(&output, &netlist.text)?;
        if !global.quiet {
            eprintln!(
                "      Wrote {} ({} LUTs, {})",
                output.display(),
                netlist.cell_count,
                model.parallel_wires()
            );
        }
    }

    if !global.quiet && args.format == ReportFormat::Text {
        eprintln!(
            "   Result: {} segment(s), {} site(s), {} error(s), {} warning(s)",
            segments.len(),
            model.point_count(),
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

/// Pretty JSON holding the recovered segments and every diagnostic so far.
fn json_report(
    segments: &[Vec<SiteCoord>],
    sink: &DiagnosticSink,
) -> Result<String, serde_json::Error> {
    let report = ImportReport {
        segments,
        diagnostics: sink.diagnostics(),
    };
    serde_json::to_string_pretty(&report)
}

/// One line per segment: index, length, then the sites in chain order.
fn format_segments(segments: &[Vec<SiteCoord>]) -> String {
    let mut out = String::new();
    for (index, segment) in segments.iter().enumerate() {
        out.push_str(&format!("segment {index} ({} sites):", segment.len()));
        for coord in segment {
            out.push_str(&format!(" {coord}"));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sliceroute_device::SiteGrid;
    use std::fs;
    use tempfile::TempDir;

    const NETLIST: &str = r#"
module sketch_route (
    input antenna_in
    );
    (* S = "TRUE" *) (* dont_touch = "TRUE" *) wire seg_0_in; ///// SEGMENT 0 BEGINNING /////
    assign seg_0_in = antenna_in; /// PUT SEGMENT 0 INPUT HERE
    (* S="TRUE", dont_touch="TRUE", LOC="SLICE_X0Y0" *)
    (* S="TRUE", dont_touch="TRUE", LOC="SLICE_X1Y0" *)
    (* S = "TRUE" *) (* dont_touch = "TRUE" *) wire seg_1_in; ///// SEGMENT 1 BEGINNING /////
    (* S="TRUE", dont_touch="TRUE", LOC="SLICE_X7Y7" *)
    (* S="TRUE", dont_touch="TRUE", LOC="SLICE_X1Y1" *)
endmodule
"#;

    fn setup() -> (TempDir, GlobalArgs) {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("device.xdlrc"),
            "SLICE_X0Y0 SLICE_X1Y0 SLICE_X0Y1 SLICE_X1Y1",
        )
        .unwrap();
        fs::write(
            tmp.path().join("sliceroute.toml"),
            "[device]\npath = \"device.xdlrc\"\n",
        )
        .unwrap();
        fs::write(tmp.path().join("in.v"), NETLIST).unwrap();
        let global = GlobalArgs {
            quiet: true,
            verbose: false,
            color: false,
            config: Some(tmp.path().display().to_string()),
        };
        (tmp, global)
    }

    fn args(tmp: &TempDir) -> ImportArgs {
        ImportArgs {
            netlist: tmp.path().join("in.v").display().to_string(),
            device: None,
            format: ReportFormat::Text,
            output: None,
            wires: None,
        }
    }

    #[test]
    fn import_and_regenerate() {
        let (tmp, global) = setup();
        let mut args = args(&tmp);
        args.output = Some(tmp.path().join("again.v").display().to_string());
        assert_eq!(run(&args, &global).unwrap(), 0);

        let text = fs::read_to_string(tmp.path().join("again.v")).unwrap();
        assert!(text.contains("module again ("));
        assert!(text.contains("// Total LUTs: 3 across 2 segments, 1 wire"));
        assert!(!text.contains("SLICE_X7Y7"));
    }

    #[test]
    fn json_format_regenerates_with_flag_wires() {
        let (tmp, global) = setup();
        let mut args = args(&tmp);
        args.format = ReportFormat::Json;
        args.wires = Some(3);
        args.output = Some(tmp.path().join("wide.v").display().to_string());
        assert_eq!(run(&args, &global).unwrap(), 0);

        let text = fs::read_to_string(tmp.path().join("wide.v")).unwrap();
        assert!(text.contains("3 parallel wires"));
        assert!(text.contains("BEL=\"C5LUT\""));
    }

    #[test]
    fn json_report_lists_segments_and_skipped_sites() {
        let grid = SiteGrid::from_coords([
            SiteCoord::new(0, 0),
            SiteCoord::new(1, 0),
            SiteCoord::new(0, 1),
            SiteCoord::new(1, 1),
        ])
        .unwrap();
        let mut model = PathModel::new(&grid);
        model.import(NETLIST);

        let json = json_report(&model.snapshot(), model.diagnostics()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let segments = value["segments"].as_array().unwrap();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].as_array().unwrap().len(), 2);
        assert_eq!(segments[1][0]["x"], 1);
        assert_eq!(segments[1][0]["y"], 1);

        let diagnostics = value["diagnostics"].as_array().unwrap();
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0]["severity"], "Warning");
        assert_eq!(diagnostics[0]["location"]["Site"]["x"], 7);
        assert_eq!(diagnostics[0]["notes"][0], "segment 1");
    }

    #[test]
    fn netlist_without_markers_fails() {
        let (tmp, global) = setup();
        fs::write(tmp.path().join("in.v"), "module empty (input a);\nendmodule\n").unwrap();
        let mut args = args(&tmp);
        args.output = Some(tmp.path().join("again.v").display().to_string());
        assert_eq!(run(&args, &global).unwrap(), 1);
        assert!(!tmp.path().join("again.v").exists());
    }

    #[test]
    fn bad_wire_count_is_an_error() {
        let (tmp, global) = setup();
        let mut args = args(&tmp);
        args.wires = Some(0);
        assert!(run(&args, &global).is_err());
    }

    #[test]
    fn report_serializes_segments_and_diagnostics() {
        let segments = vec![vec![SiteCoord::new(0, 0), SiteCoord::new(1, 0)]];
        let report = ImportReport {
            segments: &segments,
            diagnostics: Vec::new(),
        };
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["segments"][0][1]["x"], 1);
        assert!(json["diagnostics"].as_array().unwrap().is_empty());
    }

    #[test]
    fn segment_listing() {
        let segments = vec![
            vec![SiteCoord::new(0, 0), SiteCoord::new(1, 0)],
            Vec::new(),
        ];
        assert_eq!(
            format_segments(&segments),
            "segment 0 (2 sites): X0Y0 X1Y0\nsegment 1 (0 sites):\n"
        );
    }
}
