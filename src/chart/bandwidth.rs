//! Bandwidth-vs-buffer-size line chart

use charming::Chart;
use charming::component::{Axis, Legend, Title};
use charming::element::{
    AxisType, Label, MarkLine, MarkLineData, MarkLineVariant, Symbol, Tooltip, Trigger,
};
use charming::series::Line;

use crate::chart::{Series, format_bytes};
use crate::cli::{Routine, Target};

/// Chart metadata derived from the plot arguments
#[derive(Debug, Clone, Copy)]
pub struct BandwidthMeta {
    pub routine: Routine,
    pub target: Option<Target>,
    pub aligned_alloc: bool,
    pub full_sizes: bool,
}

/// Build the bandwidth line chart: one series per implementation, log
/// x-axis and cache-level markers for full-size runs
pub fn bandwidth_chart(series: &[Series], meta: &BandwidthMeta) -> Chart {
    let hardware = meta
        .target
        .map_or("unknown hardware", |t| t.hardware_name());
    let subtitle = format!(
        "on {}{} - Higher is Better",
        hardware,
        if meta.aligned_alloc { ", aligned data" } else { "" }
    );

    let x_axis_type = if meta.full_sizes {
        AxisType::Log
    } else {
        AxisType::Value
    };

    let mut chart = Chart::new()
        .title(
            Title::new()
                .text(format!("Average Bandwidth of `{}`", meta.routine.as_str()))
                .subtext(subtitle),
        )
        .legend(Legend::new())
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .x_axis(Axis::new().type_(x_axis_type).name("Buffer size (Bytes)"))
        .y_axis(Axis::new().type_(AxisType::Value).name("Average bandwidth (GiB/s)"));

    for (idx, s) in series.iter().enumerate() {
        let data: Vec<Vec<f64>> = s
            .points
            .iter()
            .map(|p| vec![p.buf_bytes as f64, p.bw_avg])
            .collect();

        let mut line = Line::new()
            .name(s.implementation.clone())
            .data(data)
            .show_symbol(meta.full_sizes);

        // Cache markers belong to the chart as a whole; attach them once
        if idx == 0 && meta.full_sizes {
            if let Some(target) = meta.target {
                line = line.mark_line(cache_mark_lines(target));
            }
        }

        chart = chart.series(line);
    }

    chart
}

/// Vertical markers at the target's cache capacities
fn cache_mark_lines(target: Target) -> MarkLine {
    let data: Vec<MarkLineVariant> = target
        .cache_levels()
        .iter()
        .map(|level| {
            MarkLineVariant::Simple(
                MarkLineData::new()
                    .name(format!("{} ({})", level.label, format_bytes(level.bytes)))
                    .x_axis(level.bytes as f64),
            )
        })
        .collect();

    MarkLine::new()
        .symbol(vec![Symbol::None, Symbol::None])
        .label(Label::new().formatter("{b}"))
        .data(data)
}
