use std::f32::consts::TAU;

use eframe::egui::{self, Color32, Pos2, RichText, Sense, Shape, Stroke, Ui, Vec2};
use egui_extras::{Column, TableBuilder};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use crate::color::{tsunami_color, MagnitudeScale, TREND_LINE};
use crate::data::aggregate::{TsunamiTally, YearlyMean};
use crate::data::filter::{preview, PREVIEW_ROWS};
use crate::data::model::{EarthquakeRecord, TsunamiFlag};
use crate::state::AppState;

const CHART_HEIGHT: f32 = 260.0;

// ---------------------------------------------------------------------------
// Dashboard (central panel)
// ---------------------------------------------------------------------------

/// Render every chart in the central panel.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let outcome = state.filter_outcome();
    let dataset = state.store.dataset();

    ui.heading(format!("Current selection: {}", state.criteria));
    ui.add_space(6.0);

    ui.strong("Average magnitude per year");
    trend_chart(ui, state.store.yearly_means());
    ui.separator();

    ui.strong(format!("Depth vs. magnitude ({})", state.criteria.year));
    depth_magnitude_scatter(ui, outcome.records());
    ui.separator();

    // Tallied over every record, not the current selection.
    ui.strong("Tsunami share (all years)");
    tsunami_pie(ui, state.store.tsunami_tally());
    ui.separator();

    ui.strong(format!("Epicentres ({})", state.criteria.year));
    if outcome.is_empty() {
        empty_notice(ui);
    } else {
        let scale = MagnitudeScale::new(dataset.magnitude_bounds);
        epicentre_map(ui, outcome.records(), &scale);
    }
    ui.separator();

    egui::CollapsingHeader::new(format!("Filtered data (first {PREVIEW_ROWS} rows)"))
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            preview_table(ui, preview(outcome.records(), PREVIEW_ROWS), dataset.has_place);
        });
}

fn empty_notice(ui: &mut Ui) {
    ui.label(
        RichText::new("No earthquakes match the current selection. Adjust the magnitude range or pick another year.")
            .color(Color32::from_rgb(0x3A, 0x7B, 0xD5)),
    );
}

// ---------------------------------------------------------------------------
// Trend line
// ---------------------------------------------------------------------------

fn trend_chart(ui: &mut Ui, means: &[YearlyMean]) {
    let points: Vec<[f64; 2]> = means
        .iter()
        .map(|m| [m.year as f64, m.mean_magnitude])
        .collect();

    Plot::new("trend_plot")
        .height(CHART_HEIGHT)
        .x_axis_label("Year")
        .y_axis_label("Mean magnitude")
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(PlotPoints::from(points.clone()))
                    .name("mean magnitude")
                    .color(TREND_LINE)
                    .width(3.0),
            );
            plot_ui.points(
                Points::new(PlotPoints::from(points))
                    .radius(4.0)
                    .color(TREND_LINE),
            );
        });
}

// ---------------------------------------------------------------------------
// Depth / magnitude scatter
// ---------------------------------------------------------------------------

fn depth_magnitude_scatter(ui: &mut Ui, records: &[&EarthquakeRecord]) {
    Plot::new("depth_magnitude_plot")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .x_axis_label("Depth (km)")
        .y_axis_label("Magnitude")
        .allow_boxed_zoom(true)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            for flag in TsunamiFlag::ALL {
                let points: Vec<[f64; 2]> = records
                    .iter()
                    .filter(|r| r.tsunami == flag)
                    .map(|r| [r.depth, r.magnitude])
                    .collect();
                plot_ui.points(
                    Points::new(PlotPoints::from(points))
                        .radius(3.5)
                        .color(tsunami_color(flag))
                        .name(format!("tsunami: {flag}")),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Tsunami pie
// ---------------------------------------------------------------------------

/// Angular extent of each wedge, starting at 12 o'clock, clockwise.
fn wedges(tally: &TsunamiTally) -> Vec<(TsunamiFlag, f32, f32)> {
    let mut start = -TAU / 4.0;
    tally
        .entries()
        .into_iter()
        .filter(|&(_, count)| count > 0)
        .map(|(flag, _)| {
            let sweep = tally.share(flag) as f32 * TAU;
            let wedge = (flag, start, start + sweep);
            start += sweep;
            wedge
        })
        .collect()
}

fn tsunami_pie(ui: &mut Ui, tally: TsunamiTally) {
    ui.horizontal(|ui: &mut Ui| {
        let size = Vec2::splat(CHART_HEIGHT * 0.7);
        let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = rect.width().min(rect.height()) * 0.45;

        for (flag, from, to) in wedges(&tally) {
            let steps = (((to - from) / TAU) * 180.0).ceil().max(1.0) as usize;
            let at = |angle: f32| Pos2::new(center.x + radius * angle.cos(), center.y + radius * angle.sin());
            for i in 0..steps {
                let a = from + (to - from) * i as f32 / steps as f32;
                let b = from + (to - from) * (i + 1) as f32 / steps as f32;
                painter.add(Shape::convex_polygon(
                    vec![center, at(a), at(b)],
                    tsunami_color(flag),
                    Stroke::NONE,
                ));
            }
        }

        ui.vertical(|ui: &mut Ui| {
            for (flag, count) in tally.entries() {
                ui.label(
                    RichText::new(format!(
                        "■ {flag}: {count} ({:.1}%)",
                        tally.share(flag) * 100.0
                    ))
                    .color(tsunami_color(flag)),
                );
            }
            ui.label(RichText::new(format!("{} events in total", tally.total())).weak());
        });
    });
}

// ---------------------------------------------------------------------------
// Epicentre map
// ---------------------------------------------------------------------------

fn hover_label(record: &EarthquakeRecord) -> String {
    let place = record.place.as_deref().unwrap_or("unknown location");
    format!(
        "{place}\nM {:.1}, depth {:.1} km, tsunami {}",
        record.magnitude, record.depth, record.tsunami
    )
}

fn epicentre_map(ui: &mut Ui, records: &[&EarthquakeRecord], scale: &MagnitudeScale) {
    Plot::new("epicentre_map")
        .height(CHART_HEIGHT * 1.4)
        .data_aspect(1.0)
        .include_x(-180.0)
        .include_x(180.0)
        .include_y(-90.0)
        .include_y(90.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .allow_scroll(false)
        .label_formatter(|name, value| {
            if name.is_empty() {
                format!("{:.2}°, {:.2}°", value.y, value.x)
            } else {
                name.to_string()
            }
        })
        .show(ui, |plot_ui| {
            for record in records {
                let position = scale.position(record.magnitude);
                plot_ui.points(
                    Points::new(PlotPoints::from(vec![[record.longitude, record.latitude]]))
                        .radius(2.0 + 6.0 * position)
                        .color(scale.color_for(record.magnitude))
                        .name(hover_label(record)),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Preview table
// ---------------------------------------------------------------------------

fn preview_table(ui: &mut Ui, records: &[&EarthquakeRecord], has_place: bool) {
    let mut headers = vec!["Year", "Magnitude", "Depth (km)", "Latitude", "Longitude", "Tsunami"];
    if has_place {
        headers.push("Place");
    }

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::auto().at_least(60.0), headers.len())
        .header(20.0, |mut header| {
            for title in &headers {
                header.col(|ui| {
                    ui.strong(*title);
                });
            }
        })
        .body(|mut body| {
            for record in records {
                body.row(18.0, |mut row| {
                    let mut cells = vec![
                        record.year.to_string(),
                        format!("{:.1}", record.magnitude),
                        format!("{:.1}", record.depth),
                        format!("{:.3}", record.latitude),
                        format!("{:.3}", record.longitude),
                        record.tsunami.to_string(),
                    ];
                    if has_place {
                        cells.push(record.place.clone().unwrap_or_default());
                    }
                    for cell in cells {
                        row.col(|ui| {
                            ui.label(cell.as_str());
                        });
                    }
                });
            }
        });
}
