//! Netlist generation: site paths to a chain of placed LUT6 cells.
//!
//! Each path position becomes one pass-through `LUT6` (output follows `I5`)
//! driven by the previous position's output and pinned to the position's
//! site. With more than one parallel wire, every position is emitted once per
//! lane, lanes interleaved position by position, each lane pinned to its own
//! LUT of the same slice. Segment 0 is fed by the module's entry signal; every
//! later segment is fed by the last lane-A output of the segment before it.

use sliceroute_common::{site_name, ParallelWires, SiteCoord};

use crate::names::{self, LaneTag};

/// `INIT` value making a LUT6 output equal its `I5` input.
const PASS_THROUGH_INIT: &str = "64'hFFFFFFFF00000000";

const KEEP_ATTRS: &str = "(* S = \"TRUE\" *) (* dont_touch = \"TRUE\" *)";

/// Knobs for netlist generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetlistOptions {
    /// Number of parallel redundant chains.
    pub wires: ParallelWires,
    /// Name of the generated module.
    pub module_name: String,
    /// Name of the module's single input port.
    pub entry_signal: String,
}

impl Default for NetlistOptions {
    fn default() -> Self {
        Self {
            wires: ParallelWires::SINGLE,
            module_name: "sketch_route".to_string(),
            entry_signal: "antenna_in".to_string(),
        }
    }
}

/// The output of [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedNetlist {
    /// Verilog source text.
    pub text: String,
    /// Number of logical chain positions across all segments.
    pub stage_count: usize,
    /// Number of LUT cells emitted, `stage_count` times the lane count.
    pub cell_count: usize,
    /// Number of segments emitted, including empty ones.
    pub segment_count: usize,
}

/// Generates the netlist for `segments` in path order.
///
/// Output is byte-for-byte deterministic for a given input. Empty segments
/// still get their boundary marker and input wiring, so they survive a
/// round trip through [`parse`](crate::parse).
pub fn generate<S: AsRef<[SiteCoord]>>(
    segments: &[S],
    options: &NetlistOptions,
) -> GeneratedNetlist {
    let lanes: Vec<LaneTag> = if options.wires.is_single() {
        vec![None]
    } else {
        options.wires.lanes().iter().copied().map(Some).collect()
    };

    let mut body = String::new();
    let mut stage = 0usize;
    let mut upstream = options.entry_signal.clone();

    for (index, segment) in segments.iter().enumerate() {
        let mut previous: Vec<String> = lanes
            .iter()
            .map(|&lane| names::segment_input(index, lane))
            .collect();
        write_segment_inputs(&mut body, index, &lanes, &previous, &upstream);

        for &coord in segment.as_ref() {
            let site = site_name(coord);
            for (&lane, prev) in lanes.iter().zip(previous.iter_mut()) {
                let output = names::stage_output(stage, lane);
                write_cell(&mut body, stage, lane, &site, prev, &output);
                *prev = output;
            }
            stage += 1;
        }

        upstream = previous.swap_remove(0);
    }

    let lane_count = lanes.len();
    let cell_count = stage * lane_count;
    log::debug!(
        "generated {} cells ({} stages x {} lanes) in {} segments",
        cell_count,
        stage,
        lane_count,
        segments.len()
    );

    let mut text = String::new();
    text.push_str("// Auto-generated by sliceroute\n");
    text.push_str(&format!(
        "// Total LUTs: {cell_count} across {} segments, {}\n\n",
        segments.len(),
        options.wires
    ));
    text.push_str(&format!(
        "module {} (\n    input {}\n    );\n    // hand-drawn segments\n",
        options.module_name, options.entry_signal
    ));
    text.push_str(&body);
    text.push_str("endmodule\n");

    GeneratedNetlist {
        text,
        stage_count: stage,
        cell_count,
        segment_count: segments.len(),
    }
}

/// Declares a segment's per-lane input wires and ties them to `upstream`.
///
/// Only the first lane's declaration carries the boundary marker.
fn write_segment_inputs(
    out: &mut String,
    index: usize,
    lanes: &[LaneTag],
    inputs: &[String],
    upstream: &str,
) {
    out.push('\n');
    for (position, (&lane, input)) in lanes.iter().zip(inputs).enumerate() {
        if position == 0 {
            out.push_str(&format!(
                "    {KEEP_ATTRS} wire {input}; {}\n",
                names::segment_marker(index)
            ));
        } else {
            out.push_str(&format!("    {KEEP_ATTRS} wire {input};\n"));
        }
        let which = match lane {
            None => String::new(),
            Some(lane) => format!(" LUT {}", lane.letter()),
        };
        out.push_str(&format!(
            "    assign {input} = {upstream}; /// PUT SEGMENT {index}{which} INPUT HERE\n"
        ));
    }
}

fn write_cell(
    out: &mut String,
    stage: usize,
    lane: LaneTag,
    site: &str,
    input: &str,
    output: &str,
) {
    let bel = match lane {
        None => String::new(),
        Some(lane) => format!(", BEL=\"{}\"", lane.bel()),
    };
    let instance = names::cell_instance(stage, lane);
    out.push('\n');
    out.push_str(&format!("    {KEEP_ATTRS} wire {output};\n"));
    out.push_str(&format!(
        "    (* S=\"TRUE\", dont_touch=\"TRUE\", {}{site}\"{bel} *)\n",
        names::LOC_ATTR
    ));
    out.push_str(&format!("    LUT6 #(.INIT({PASS_THROUGH_INIT})) {instance} (\n"));
    out.push_str(&format!("        .O({output}),\n"));
    out.push_str("        .I0(1'b0), .I1(1'b0), .I2(1'b0),\n");
    out.push_str(&format!("        .I3(1'b0), .I4(1'b0), .I5({input})\n"));
    out.push_str("    );\n");
}
