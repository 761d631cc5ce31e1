//! Chart Rendering
//!
//! Static SVG charts for the dashboard. Both charts draw their series in the
//! user's chart color on a light background with horizontal grid lines.

use crate::data::{PerformanceRecord, SalesRecord};
use crate::prefs::ChartColor;

const GRID_COLOR: &str = "#e0e0e0";
const AXIS_COLOR: &str = "#333333";
const LABEL_COLOR: &str = "#444444";
const GRID_LINES: usize = 5;

/// Canvas size and plot margins shared by both charts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 420.0,
            margin_left: 70.0,
            margin_right: 20.0,
            margin_top: 50.0,
            margin_bottom: 100.0,
        }
    }
}

impl ChartLayout {
    fn plot_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    fn plot_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }

    fn plot_bottom(&self) -> f64 {
        self.margin_top + self.plot_height()
    }

    /// Centre of the category band at `index`
    fn band_center(&self, index: usize, count: usize) -> f64 {
        let band = self.plot_width() / count.max(1) as f64;
        self.margin_left + band * (index as f64 + 0.5)
    }

    fn band_width(&self, count: usize) -> f64 {
        self.plot_width() / count.max(1) as f64
    }

    /// Map a data value onto the y pixel coordinate
    fn scale_y(&self, value: f64, y_min: f64, y_max: f64) -> f64 {
        self.margin_top + ((y_max - value) / (y_max - y_min)) * self.plot_height()
    }
}

/// Line chart of monthly sales with a marker on each month
pub fn line_chart(records: &[SalesRecord], color: &ChartColor, layout: &ChartLayout) -> String {
    let values: Vec<f64> = records.iter().map(|r| r.sales as f64).collect();

    let mut y_min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let mut y_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if !y_min.is_finite() || !y_max.is_finite() {
        y_min = 0.0;
        y_max = 1.0;
    }

    // Pad the y range so markers don't sit on the frame
    let y_range = y_max - y_min;
    let y_padding = if y_range > 0.0 { y_range * 0.1 } else { 1.0 };
    y_min -= y_padding;
    y_max += y_padding;

    let mut svg = open_svg(layout, "Tendencia de Ventas Mensuales");
    svg.push_str(&grid(layout, y_min, y_max));

    let points: Vec<(f64, f64)> = values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            (
                layout.band_center(i, values.len()),
                layout.scale_y(*v, y_min, y_max),
            )
        })
        .collect();

    let polyline = points
        .iter()
        .map(|(x, y)| format!("{:.1},{:.1}", x, y))
        .collect::<Vec<_>>()
        .join(" ");

    svg.push_str(&format!(
        "<polyline class=\"series\" fill=\"none\" stroke=\"{}\" stroke-width=\"2\" points=\"{}\"/>\n",
        color, polyline
    ));

    for ((x, y), record) in points.iter().zip(records) {
        svg.push_str(&format!(
            "<circle class=\"marker\" cx=\"{:.1}\" cy=\"{:.1}\" r=\"4\" fill=\"{}\"><title>{}: {}</title></circle>\n",
            x, y, color, record.month, record.sales
        ));
    }

    let labels: Vec<&str> = records.iter().map(|r| r.month).collect();
    svg.push_str(&category_labels(layout, &labels, true));
    svg.push_str(&axis_titles(layout, "Mes", "Ventas"));
    svg.push_str("</svg>\n");
    svg
}

/// Bar chart of department performance scores
pub fn bar_chart(records: &[PerformanceRecord], color: &ChartColor, layout: &ChartLayout) -> String {
    let max_score = records.iter().map(|r| r.score).max().unwrap_or(0) as f64;

    // Bars grow from zero; headroom above the tallest bar
    let y_min = 0.0;
    let y_max = if max_score > 0.0 { max_score * 1.1 } else { 1.0 };

    let mut svg = open_svg(layout, "Rendimiento por Departamento");
    svg.push_str(&grid(layout, y_min, y_max));

    let band = layout.band_width(records.len());
    let bar_width = band * 0.8;

    for (i, record) in records.iter().enumerate() {
        let x = layout.band_center(i, records.len()) - bar_width / 2.0;
        let top = layout.scale_y(record.score as f64, y_min, y_max);
        let height = layout.plot_bottom() - top;

        svg.push_str(&format!(
            "<rect class=\"bar\" x=\"{:.1}\" y=\"{:.1}\" width=\"{:.1}\" height=\"{:.1}\" fill=\"{}\"><title>{}: {}</title></rect>\n",
            x, top, bar_width, height, color, record.department, record.score
        ));
    }

    let labels: Vec<&str> = records.iter().map(|r| r.department).collect();
    svg.push_str(&category_labels(layout, &labels, false));
    svg.push_str(&axis_titles(layout, "Departamento", "Rendimiento (%)"));
    svg.push_str("</svg>\n");
    svg
}

fn open_svg(layout: &ChartLayout, title: &str) -> String {
    let mut svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" font-family=\"sans-serif\">\n",
        w = layout.width,
        h = layout.height
    );
    svg.push_str(&format!(
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"#ffffff\"/>\n",
        layout.width, layout.height
    ));
    svg.push_str(&format!(
        "<text class=\"title\" x=\"{:.1}\" y=\"30\" text-anchor=\"middle\" font-size=\"16\" fill=\"{}\">{}</text>\n",
        layout.width / 2.0,
        AXIS_COLOR,
        title
    ));
    svg
}

/// Horizontal grid lines with y-axis value labels, plus the axis frame
fn grid(layout: &ChartLayout, y_min: f64, y_max: f64) -> String {
    let mut out = String::new();
    let right = layout.width - layout.margin_right;

    for i in 0..=GRID_LINES {
        let y = layout.margin_top + (i as f64 / GRID_LINES as f64) * layout.plot_height();
        let value = y_max - (i as f64 / GRID_LINES as f64) * (y_max - y_min);

        out.push_str(&format!(
            "<line x1=\"{:.1}\" y1=\"{:.1}\" x2=\"{:.1}\" y2=\"{:.1}\" stroke=\"{}\" stroke-width=\"1\"/>\n",
            layout.margin_left, y, right, y, GRID_COLOR
        ));
        out.push_str(&format!(
            "<text x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"end\" font-size=\"11\" fill=\"{}\">{:.0}</text>\n",
            layout.margin_left - 6.0,
            y + 4.0,
            LABEL_COLOR,
            value
        ));
    }

    out.push_str(&format!(
        "<line x1=\"{l:.1}\" y1=\"{t:.1}\" x2=\"{l:.1}\" y2=\"{b:.1}\" stroke=\"{c}\"/>\n<line x1=\"{l:.1}\" y1=\"{b:.1}\" x2=\"{r:.1}\" y2=\"{b:.1}\" stroke=\"{c}\"/>\n",
        l = layout.margin_left,
        t = layout.margin_top,
        b = layout.plot_bottom(),
        r = right,
        c = AXIS_COLOR
    ));

    out
}

/// Category labels under the x-axis, optionally rotated 45 degrees
fn category_labels(layout: &ChartLayout, labels: &[&str], rotated: bool) -> String {
    let mut out = String::new();
    let y = layout.plot_bottom() + 16.0;

    for (i, label) in labels.iter().enumerate() {
        let x = layout.band_center(i, labels.len());
        if rotated {
            out.push_str(&format!(
                "<text class=\"x-label\" x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"end\" font-size=\"11\" fill=\"{c}\" transform=\"rotate(-45 {x:.1} {y:.1})\">{label}</text>\n",
                c = LABEL_COLOR
            ));
        } else {
            out.push_str(&format!(
                "<text class=\"x-label\" x=\"{x:.1}\" y=\"{y:.1}\" text-anchor=\"middle\" font-size=\"11\" fill=\"{c}\">{label}</text>\n",
                c = LABEL_COLOR
            ));
        }
    }

    out
}

fn axis_titles(layout: &ChartLayout, x_title: &str, y_title: &str) -> String {
    let x_center = layout.margin_left + layout.plot_width() / 2.0;
    let y_center = layout.margin_top + layout.plot_height() / 2.0;

    format!(
        "<text class=\"x-title\" x=\"{:.1}\" y=\"{:.1}\" text-anchor=\"middle\" font-size=\"13\" fill=\"{c}\">{}</text>\n<text class=\"y-title\" x=\"18\" y=\"{yc:.1}\" text-anchor=\"middle\" font-size=\"13\" fill=\"{c}\" transform=\"rotate(-90 18 {yc:.1})\">{}</text>\n",
        x_center,
        layout.height - 12.0,
        x_title,
        y_title,
        c = AXIS_COLOR,
        yc = y_center
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataGenerator;

    #[test]
    fn test_line_chart_has_marker_per_month() {
        let data = DataGenerator::default().generate();
        let svg = line_chart(&data.sales, &ChartColor::default(), &ChartLayout::default());

        assert_eq!(svg.matches("class=\"marker\"").count(), 12);
        assert!(svg.contains("Tendencia de Ventas Mensuales"));
        assert!(svg.contains(">Mes</text>"));
        assert!(svg.contains(">Ventas</text>"));
        assert!(svg.contains("rotate(-45"));
        assert!(svg.contains(">Enero</text>"));
        assert!(svg.contains(">Diciembre</text>"));
    }

    #[test]
    fn test_month_labels_in_calendar_order() {
        let data = DataGenerator::default().generate();
        let svg = line_chart(&data.sales, &ChartColor::default(), &ChartLayout::default());

        let enero = svg.find(">Enero<").unwrap();
        let junio = svg.find(">Junio<").unwrap();
        let diciembre = svg.find(">Diciembre<").unwrap();
        assert!(enero < junio && junio < diciembre);
    }

    #[test]
    fn test_bar_chart_has_bar_per_department() {
        let data = DataGenerator::default().generate();
        let svg = bar_chart(&data.performance, &ChartColor::default(), &ChartLayout::default());

        assert_eq!(svg.matches("class=\"bar\"").count(), 4);
        assert!(svg.contains("Rendimiento por Departamento"));
        assert!(svg.contains("Rendimiento (%)"));
        assert!(svg.contains(">Marketing</text>"));
    }

    #[test]
    fn test_black_renders_in_both_charts() {
        let data = DataGenerator::default().generate();
        let black = ChartColor::parse("#000000").unwrap();
        let layout = ChartLayout::default();

        let line = line_chart(&data.sales, &black, &layout);
        let bars = bar_chart(&data.performance, &black, &layout);

        assert!(line.contains("stroke=\"#000000\""));
        assert_eq!(line.matches("fill=\"#000000\"").count(), 12);
        assert_eq!(bars.matches("fill=\"#000000\"").count(), 4);
    }

    #[test]
    fn test_bars_stay_inside_plot() {
        let data = DataGenerator::new(7).generate();
        let layout = ChartLayout::default();
        let svg = bar_chart(&data.performance, &ChartColor::default(), &layout);

        for part in svg.split("class=\"bar\"").skip(1) {
            let y: f64 = attr(part, "y").parse().unwrap();
            let h: f64 = attr(part, "height").parse().unwrap();
            assert!(y >= layout.margin_top);
            assert!((y + h - (layout.height - layout.margin_bottom)).abs() < 0.2);
        }
    }

    #[test]
    fn test_empty_series_does_not_panic() {
        let svg = line_chart(&[], &ChartColor::default(), &ChartLayout::default());
        assert!(svg.ends_with("</svg>\n"));
        let svg = bar_chart(&[], &ChartColor::default(), &ChartLayout::default());
        assert!(svg.ends_with("</svg>\n"));
    }

    fn attr<'a>(fragment: &'a str, name: &str) -> &'a str {
        let key = format!(" {}=\"", name);
        let start = fragment.find(&key).unwrap() + key.len();
        let end = fragment[start..].find('"').unwrap() + start;
        &fragment[start..end]
    }
}
