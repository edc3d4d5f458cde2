//! Grouped bandwidth bar chart

use charming::Chart;
use charming::component::{Axis, Legend, Title};
use charming::element::{AxisType, Tooltip, Trigger};
use charming::series::Bar;

use crate::chart::{Series, format_bytes};

/// Build a grouped bar chart: one bar series per implementation, one
/// category per buffer size in first-seen order. Sizes an implementation
/// did not measure render as gaps.
pub fn bars_chart(series: &[Series], source_name: &str) -> Chart {
    let mut sizes: Vec<u64> = Vec::new();
    for s in series {
        for p in &s.points {
            if !sizes.contains(&p.buf_bytes) {
                sizes.push(p.buf_bytes);
            }
        }
    }

    let categories: Vec<String> = sizes.iter().map(|b| format_bytes(*b)).collect();

    let mut chart = Chart::new()
        .title(
            Title::new()
                .text(format!("Comparative bandwidth performance of `{source_name}`"))
                .subtext("Higher is Better"),
        )
        .legend(Legend::new())
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Buffer size")
                .data(categories),
        )
        .y_axis(Axis::new().type_(AxisType::Value).name("Bandwidth (GiB/s)"));

    for s in series {
        // NaN serializes to null, which ECharts renders as a gap
        let data: Vec<f64> = sizes
            .iter()
            .map(|size| {
                s.points
                    .iter()
                    .find(|p| p.buf_bytes == *size)
                    .map_or(f64::NAN, |p| p.bw_avg)
            })
            .collect();

        chart = chart.series(Bar::new().name(s.implementation.clone()).data(data));
    }

    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::Point;

    fn point(buf_bytes: u64, bw_avg: f64) -> Point {
        Point {
            buf_bytes,
            bw_avg,
            bw_stdev: None,
        }
    }

    #[test]
    fn test_bars_chart_categories_and_series() {
        let series = vec![
            Series {
                implementation: "memcpy_LI-PaRAD_v1".to_string(),
                points: vec![point(64, 10.0), point(32_768, 20.0)],
            },
            Series {
                implementation: "memcpy_aarch64_sve".to_string(),
                points: vec![point(64, 8.0)],
            },
        ];

        let json = bars_chart(&series, "memcpy").to_string();
        assert!(json.contains("64 B"));
        assert!(json.contains("32 KiB"));
        assert!(json.contains("memcpy_LI-PaRAD_v1"));
        assert!(json.contains("memcpy_aarch64_sve"));
        assert!(json.contains("Comparative bandwidth performance of `memcpy`"));
    }

    #[test]
    fn test_bars_chart_missing_size_is_gap() {
        let series = vec![
            Series {
                implementation: "a".to_string(),
                points: vec![point(64, 10.0), point(128, 12.0)],
            },
            Series {
                implementation: "b".to_string(),
                points: vec![point(128, 9.0)],
            },
        ];

        let json = bars_chart(&series, "memcpy").to_string();
        // Implementation `b` has no 64-byte measurement, so its series
        // starts with a null
        assert!(json.contains("null"));
    }
}
