//! Line charts for the three sweep series.
//!
//! BER spans several decades, so that series is plotted as `log10(ber)` with
//! decade labels on the y axis.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Style, Stylize},
    symbols,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
};

use netsight_core::model::{BER_CEILING, BER_FLOOR, ChartPoint, ChartSeries};

use super::{Component, EventResult};
use crate::state::DashboardState;
use crate::util::format::format_decade;
use crate::util::styles::{HEADER_COLOR, focused_block};

/// Chart coordinates for a series; BER values become decade exponents
pub fn plot_points(series: ChartSeries, points: &[ChartPoint]) -> Vec<(f64, f64)> {
    points
        .iter()
        .map(|p| {
            if series.is_log_scale() {
                (p.x, p.y.log10())
            } else {
                (p.x, p.y)
            }
        })
        .collect()
}

/// Y bounds with a little headroom; log series use whole decades
pub fn y_bounds(series: ChartSeries, data: &[(f64, f64)]) -> [f64; 2] {
    if series.is_log_scale() {
        return [BER_FLOOR.log10().floor(), BER_CEILING.log10().ceil()];
    }

    let min = data.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);
    let max = data.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let padding = (max - min).abs().max(1.0) * 0.1;
    [min - padding, max + padding]
}

fn y_labels(series: ChartSeries, bounds: [f64; 2]) -> Vec<Span<'static>> {
    let [lo, hi] = bounds;
    if series.is_log_scale() {
        // One label every three decades
        let mut labels = Vec::new();
        let mut exp = lo;
        while exp <= hi {
            labels.push(Span::raw(format_decade(exp)));
            exp += 3.0;
        }
        return labels;
    }
    vec![
        Span::raw(format!("{:.0}", lo)),
        Span::raw(format!("{:.0}", (lo + hi) / 2.0)),
        Span::raw(format!("{:.0}", hi)),
    ]
}

/// The three sweep charts side by side, one of them highlighted
pub struct ChartPanel {
    focused: usize,
}

impl ChartPanel {
    pub fn new() -> Self {
        Self { focused: 0 }
    }

    pub fn focused_series(&self) -> ChartSeries {
        ChartSeries::ALL[self.focused % ChartSeries::ALL.len()]
    }

    fn render_series(
        &self,
        frame: &mut Frame,
        area: Rect,
        state: &DashboardState,
        series: ChartSeries,
    ) {
        let block = focused_block(series.title(), series == self.focused_series());
        let data = plot_points(series, state.outcome.charts.series(series));

        if data.is_empty() {
            frame.render_widget(Paragraph::new("  No data to display.").block(block), area);
            return;
        }

        let x_min = data.first().map(|(x, _)| *x).unwrap_or(0.0);
        let x_max = data.last().map(|(x, _)| *x).unwrap_or(1.0);
        let bounds = y_bounds(series, &data);

        let dataset = Dataset::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(HEADER_COLOR))
            .data(&data);

        let x_axis = Axis::default()
            .title(series.x_label().dark_gray())
            .bounds([x_min, x_max])
            .labels(vec![
                Span::raw(format!("{:.0}", x_min)),
                Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
                Span::raw(format!("{:.0}", x_max)),
            ]);

        let y_axis = Axis::default()
            .title(series.y_label().dark_gray())
            .bounds(bounds)
            .labels(y_labels(series, bounds));

        let chart = Chart::new(vec![dataset])
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis);

        frame.render_widget(chart, area);
    }
}

impl Default for ChartPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ChartPanel {
    fn handle_key(&mut self, key: KeyEvent, _state: &mut DashboardState) -> EventResult {
        match key.code {
            KeyCode::Tab => {
                self.focused = (self.focused + 1) % ChartSeries::ALL.len();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &DashboardState) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 3); 3])
            .split(area);

        for (series, chunk) in ChartSeries::ALL.into_iter().zip(chunks.iter()) {
            self.render_series(frame, *chunk, state, series);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ber_is_plotted_in_decades() {
        let points = [ChartPoint::new(0.0, 1e-3), ChartPoint::new(10.0, 1e-9)];
        let data = plot_points(ChartSeries::BerVsSnr, &points);
        assert!((data[0].1 + 3.0).abs() < 1e-12);
        assert!((data[1].1 + 9.0).abs() < 1e-12);

        let linear = plot_points(ChartSeries::SignalVsDistance, &points);
        assert_eq!(linear[0], (0.0, 1e-3));
    }

    #[test]
    fn test_log_bounds_and_labels() {
        let bounds = y_bounds(ChartSeries::BerVsSnr, &[]);
        assert_eq!(bounds, [-9.0, 0.0]);

        let labels: Vec<String> = y_labels(ChartSeries::BerVsSnr, bounds)
            .into_iter()
            .map(|s| s.content.into_owned())
            .collect();
        assert_eq!(labels, vec!["1e-9", "1e-6", "1e-3", "1e0"]);
    }

    #[test]
    fn test_linear_bounds_pad_the_data() {
        let data = [(1.0, 0.0), (96.0, 100.0)];
        assert_eq!(y_bounds(ChartSeries::ThroughputVsBandwidth, &data), [-10.0, 110.0]);
        assert_eq!(y_bounds(ChartSeries::SignalVsDistance, &[]), [0.0, 1.0]);
    }

    #[test]
    fn test_tab_cycles_focus() {
        let mut panel = ChartPanel::new();
        let mut state =
            DashboardState::new(netsight_core::SimulationParameters::default()).unwrap();
        let tab = KeyEvent::new(KeyCode::Tab, crossterm::event::KeyModifiers::NONE);

        panel.handle_key(tab, &mut state);
        assert_eq!(panel.focused_series(), ChartSeries::BerVsSnr);
        panel.handle_key(tab, &mut state);
        panel.handle_key(tab, &mut state);
        assert_eq!(panel.focused_series(), ChartSeries::SignalVsDistance);
    }
}
