//! Terminal charts.
//!
//! Curves render as point-connected line charts with tenor in years on the
//! x-axis and yield on the y-axis; basis-point changes render as a
//! horizontal bar chart split around zero.

use colored::{Color, Colorize};

/// Default plot area in characters.
pub const CHART_WIDTH: usize = 64;
/// Default plot height in rows.
pub const CHART_HEIGHT: usize = 16;

/// One line on a chart.
#[derive(Debug, Clone)]
pub struct Series {
    /// Legend text.
    pub name: String,
    /// `(tenor in years, decimal yield)` points.
    pub points: Vec<(f64, f64)>,
    /// Point marker.
    pub marker: char,
    /// Line and marker colour.
    pub color: Color,
}

impl Series {
    /// Creates a series.
    pub fn new(name: impl Into<String>, points: Vec<(f64, f64)>, marker: char, color: Color) -> Self {
        Self {
            name: name.into(),
            points,
            marker,
            color,
        }
    }
}

type Cell = Option<(char, Color)>;

/// Renders series as a line chart with connected points.
pub fn line_chart(title: &str, series: &[Series], width: usize, height: usize) -> String {
    let width = width.max(2);
    let height = height.max(2);

    let all = series.iter().flat_map(|s| s.points.iter().copied());
    let Some((x_min, x_max, y_min, y_max)) = bounds(all) else {
        return format!("{title}\n(no data)\n");
    };
    let (y_min, y_max) = if (y_max - y_min).abs() < f64::EPSILON {
        (y_min - 0.0005, y_max + 0.0005)
    } else {
        (y_min, y_max)
    };

    let col_of = |x: f64| scale(x, x_min, x_max, width);
    let row_of = |y: f64| height - 1 - scale(y, y_min, y_max, height);

    let mut grid: Vec<Vec<Cell>> = vec![vec![None; width]; height];

    for s in series {
        let mut points = s.points.clone();
        points.sort_by(|a, b| a.0.total_cmp(&b.0));

        for pair in points.windows(2) {
            let (x0, y0) = pair[0];
            let (x1, y1) = pair[1];
            let (c0, c1) = (col_of(x0), col_of(x1));
            for col in c0..=c1 {
                let t = if c1 == c0 {
                    0.0
                } else {
                    (col - c0) as f64 / (c1 - c0) as f64
                };
                let row = row_of(y0 + (y1 - y0) * t);
                if grid[row][col].is_none() {
                    grid[row][col] = Some(('·', s.color));
                }
            }
        }

        for &(x, y) in &points {
            grid[row_of(y)][col_of(x)] = Some((s.marker, s.color));
        }
    }

    let mut out = String::new();
    out.push_str(&format!("{}\n", title.bold()));
    for (idx, row) in grid.iter().enumerate() {
        let label = if idx == 0 {
            format!("{:>7.2}%", y_max * 100.0)
        } else if idx == height - 1 {
            format!("{:>7.2}%", y_min * 100.0)
        } else if idx == (height - 1) / 2 {
            format!("{:>7.2}%", (y_min + y_max) / 2.0 * 100.0)
        } else {
            " ".repeat(8)
        };
        out.push_str(&format!("{label} │{}\n", render_row(row)));
    }
    out.push_str(&format!("{} └{}\n", " ".repeat(8), "─".repeat(width)));

    let left = format!("{x_min}y");
    let right = format!("{x_max}y");
    let gap = width.saturating_sub(left.len() + right.len());
    out.push_str(&format!("{}  {left}{}{right}\n", " ".repeat(8), " ".repeat(gap)));
    out.push_str(&format!("{}  Tenor (years)\n", " ".repeat(8)));

    for s in series {
        out.push_str(&format!(
            "  {} {}\n",
            s.marker.to_string().color(s.color),
            s.name
        ));
    }
    out
}

/// Renders labelled basis-point changes as bars around a zero axis.
///
/// Non-negative bars are green and extend right; negative bars are red and
/// extend left.
pub fn bar_chart(title: &str, bars: &[(String, f64)], width: usize) -> String {
    let half = (width / 2).max(1);
    let max_abs = bars
        .iter()
        .map(|(_, v)| v.abs())
        .filter(|v| v.is_finite())
        .fold(0.0_f64, f64::max);
    let label_width = bars.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(&format!("{}\n", title.bold()));
    for (label, value) in bars {
        let len = if max_abs > 0.0 && value.is_finite() {
            ((value.abs() / max_abs) * half as f64).round() as usize
        } else {
            0
        };
        let bar = "█".repeat(len);
        let (left, right) = if *value < 0.0 {
            (
                format!("{}{}", " ".repeat(half - len), bar.red()),
                " ".repeat(half),
            )
        } else {
            (
                " ".repeat(half),
                format!("{}{}", bar.green(), " ".repeat(half - len)),
            )
        };
        out.push_str(&format!(
            "{label:>label_width$} {left}│{right} {:>+9.2} bps\n",
            value
        ));
    }
    out
}

/// Data bounds over finite points.
fn bounds(points: impl Iterator<Item = (f64, f64)>) -> Option<(f64, f64, f64, f64)> {
    points
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .fold(None, |acc, (x, y)| match acc {
            None => Some((x, x, y, y)),
            Some((x0, x1, y0, y1)) => Some((x0.min(x), x1.max(x), y0.min(y), y1.max(y))),
        })
}

/// Maps `v` in `[lo, hi]` onto `0..cells`.
fn scale(v: f64, lo: f64, hi: f64, cells: usize) -> usize {
    if hi <= lo {
        return 0;
    }
    let pos = ((v - lo) / (hi - lo) * (cells - 1) as f64).round();
    (pos.max(0.0) as usize).min(cells - 1)
}

fn render_row(row: &[Cell]) -> String {
    row.iter()
        .map(|cell| match cell {
            Some((ch, color)) => ch.to_string().color(*color).to_string(),
            None => " ".to_string(),
        })
        .collect()
}
