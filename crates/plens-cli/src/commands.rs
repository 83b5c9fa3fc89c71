//! Command implementations driving the view controller.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context as _;

use plens_ingest::{ColumnMapping, load_events};
use plens_mining::{HeuristicMiner, MiningEngine as _};
use plens_model::{ImageFormat, ParameterState};
use plens_render::GraphvizRenderer;
use plens_view::{GraphViewController, ParameterChange};

use crate::cli::{ColumnArgs, FormatArg, InfoArgs, MineArgs};
use crate::summary::{LogSummary, MineSummary};

fn mapping(columns: &ColumnArgs) -> ColumnMapping {
    ColumnMapping::new(&columns.time_col, &columns.case_col, &columns.event_col)
}

impl From<FormatArg> for ImageFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Raster => Self::Raster,
            FormatArg::Vector => Self::Vector,
        }
    }
}

/// Mine the log with the requested parameters and write the exported
/// image.
pub fn run_mine(args: &MineArgs) -> anyhow::Result<MineSummary> {
    let format = ImageFormat::from(args.format);
    let threshold = ParameterState::dependency_threshold_from_slider(args.threshold);

    let mut controller = GraphViewController::new(
        Arc::new(HeuristicMiner::new()),
        Arc::new(GraphvizRenderer::with_program(&args.renderer)),
    );
    controller
        .load(&args.event_log, &mapping(&args.columns))
        .map(|_| ())
        .with_context(|| format!("failed to load {}", args.event_log.display()))?;

    // Defaults already mined on load; only re-mine when asked for
    // something else.
    if args.min_frequency != controller.params().min_frequency() {
        controller.apply(ParameterChange::MinFrequency(args.min_frequency))?;
    }
    if threshold != controller.params().dependency_threshold() {
        controller.apply(ParameterChange::DependencyThreshold(threshold))?;
    }

    let image = controller.export(format)?;
    let output = args.output.clone().unwrap_or_else(|| {
        let stem = args
            .event_log
            .file_stem()
            .map_or_else(|| "graph".into(), std::ffi::OsStr::to_os_string);
        PathBuf::from(stem).with_extension(format.extension())
    });
    std::fs::write(&output, &image.bytes)
        .with_context(|| format!("failed to write {}", output.display()))?;
    tracing::info!(output = %output.display(), bytes = image.len(), "image written");

    let graph = controller
        .graph()
        .context("controller has no graph after mining")?;
    Ok(MineSummary {
        output,
        format,
        threshold: controller.params().dependency_threshold(),
        min_frequency: controller.params().min_frequency(),
        max_frequency: controller.params().max_frequency(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
    })
}

/// Ingest only; report per-activity statistics.
pub fn run_info(args: &InfoArgs) -> anyhow::Result<LogSummary> {
    let log = load_events(&args.event_log, &mapping(&args.columns))?;
    let miner = HeuristicMiner::new();
    let max_frequency = miner.max_observed_frequency(&log);
    // A full-detail mine gives per-activity frequencies without filters.
    let graph = miner.build_graph(&log, 0.0, 1);

    Ok(LogSummary {
        path: args.event_log.clone(),
        cases: log.case_count(),
        events: log.event_count(),
        max_frequency,
        activities: graph
            .nodes()
            .iter()
            .map(|n| (n.name.clone(), n.frequency))
            .collect(),
    })
}
