use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, Plot};

use crate::data::aggregate::{AggregationTables, CategoryAverage, SalaryBucket};
use crate::state::AppState;

const CHART_HEIGHT: f32 = 260.0;
const BAR_FILL: Color32 = Color32::from_rgb(70, 130, 180);

// ---------------------------------------------------------------------------
// KPI strip
// ---------------------------------------------------------------------------

/// The four headline metrics over the filtered subset. With zero records
/// every value renders as a placeholder dash.
pub fn metrics_strip(ui: &mut Ui, state: &AppState) {
    let summary = &state.summary;
    let empty = summary.record_count == 0;

    ui.columns(4, |cols| {
        metric(&mut cols[0], "Mean salary", if empty {
            "–".to_string()
        } else {
            format_usd(summary.mean_salary)
        });
        metric(&mut cols[1], "Max salary", if empty {
            "–".to_string()
        } else {
            format_usd(summary.max_salary)
        });
        metric(&mut cols[2], "Records", summary.record_count.to_string());
        metric(&mut cols[3], "Most frequent role", if empty {
            "–".to_string()
        } else {
            summary.most_frequent_role.clone()
        });
    });
}

fn metric(ui: &mut Ui, label: &str, value: String) {
    ui.vertical(|ui: &mut Ui| {
        ui.label(RichText::new(label).small().weak());
        ui.label(RichText::new(value).heading());
    });
}

/// `$1,234,567` – rounded to whole dollars, thousands separated.
pub fn format_usd(value: f64) -> String {
    let whole = value.round() as i64;
    let digits = whole.abs().to_string();
    let mut out = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if whole < 0 {
        format!("-${out}")
    } else {
        format!("${out}")
    }
}

// ---------------------------------------------------------------------------
// Chart grid
// ---------------------------------------------------------------------------

/// The 2×2 chart grid fed by the aggregation tables.
pub fn chart_grid(ui: &mut Ui, state: &AppState) {
    let tables = &state.tables;

    ui.columns(2, |cols| {
        top_roles_chart(&mut cols[0], tables);
        distribution_chart(&mut cols[1], &tables.salary_distribution);
    });
    ui.add_space(8.0);
    ui.columns(2, |cols| {
        arrangement_chart(&mut cols[0], state);
        country_chart(&mut cols[1], &tables.data_scientist_by_country);
    });
}

fn no_data(ui: &mut Ui) {
    ui.add_space(CHART_HEIGHT / 2.0 - 10.0);
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new("No data for the current filters").weak());
    });
    ui.add_space(CHART_HEIGHT / 2.0 - 10.0);
}

/// Horizontal bar chart of the top roles by mean salary; the table is
/// already ascending, so the highest mean draws topmost.
fn top_roles_chart(ui: &mut Ui, tables: &AggregationTables) {
    ui.strong("Top roles by mean salary");
    if tables.top_roles.is_empty() {
        no_data(ui);
        return;
    }

    let labels: Vec<String> = tables.top_roles.iter().map(|r| r.label.clone()).collect();
    let bars: Vec<Bar> = tables
        .top_roles
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Bar::new(i as f64, row.mean_salary)
                .name(&row.label)
                .fill(BAR_FILL)
        })
        .collect();

    Plot::new("top_roles")
        .height(CHART_HEIGHT)
        .y_axis_formatter(move |mark, _range| category_tick(mark.value, &labels))
        .x_axis_label("Mean salary (USD)")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal());
        });
}

/// Salary histogram: one bar per bucket, centred on the bucket midpoint.
fn distribution_chart(ui: &mut Ui, buckets: &[SalaryBucket]) {
    ui.strong("Salary distribution");
    if buckets.is_empty() {
        no_data(ui);
        return;
    }

    let bars: Vec<Bar> = buckets
        .iter()
        .map(|b| {
            let center = (b.lower + b.upper) / 2.0;
            let width = (b.upper - b.lower).max(1.0);
            Bar::new(center, b.count as f64)
                .width(width)
                .fill(BAR_FILL)
        })
        .collect();

    Plot::new("salary_distribution")
        .height(CHART_HEIGHT)
        .x_axis_label("Salary (USD)")
        .y_axis_label("Records")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Work-arrangement proportions: a segmented ratio bar plus one row per
/// arrangement with its share of the subset.
fn arrangement_chart(ui: &mut Ui, state: &AppState) {
    ui.strong("Work arrangements");
    let counts = &state.tables.work_arrangements;
    if counts.is_empty() {
        no_data(ui);
        return;
    }

    let total: usize = counts.iter().map(|c| c.count).sum();

    // Segmented bar, one span per arrangement.
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), 18.0),
        egui::Sense::hover(),
    );
    let mut x = rect.left();
    for entry in counts {
        let w = rect.width() * entry.count as f32 / total as f32;
        let seg = egui::Rect::from_min_size(egui::pos2(x, rect.top()), egui::vec2(w, rect.height()));
        ui.painter()
            .rect_filled(seg, 2, state.arrangement_colors.color_for(&entry.label));
        x += w;
    }

    ui.add_space(6.0);
    for entry in counts {
        let percent = 100.0 * entry.count as f64 / total as f64;
        ui.horizontal(|ui: &mut Ui| {
            let (swatch, _) =
                ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
            ui.painter().rect_filled(
                swatch,
                2,
                state.arrangement_colors.color_for(&entry.label),
            );
            ui.label(format!(
                "{}  –  {} records ({percent:.1}%)",
                entry.label, entry.count
            ));
        });
    }
}

/// Mean Data Scientist salary per residence country.
fn country_chart(ui: &mut Ui, table: &[CategoryAverage]) {
    ui.strong("Data Scientist mean salary by country");
    if table.is_empty() {
        no_data(ui);
        return;
    }

    let labels: Vec<String> = table.iter().map(|r| r.label.clone()).collect();
    let bars: Vec<Bar> = table
        .iter()
        .enumerate()
        .map(|(i, row)| {
            Bar::new(i as f64, row.mean_salary)
                .name(&row.label)
                .fill(BAR_FILL)
        })
        .collect();

    Plot::new("ds_by_country")
        .height(CHART_HEIGHT)
        .x_axis_formatter(move |mark, _range| category_tick(mark.value, &labels))
        .y_axis_label("Mean salary (USD)")
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Axis tick text for categorical axes: label integer positions, hide the
/// fractional grid marks egui interpolates between them.
fn category_tick(value: f64, labels: &[String]) -> String {
    let rounded = value.round();
    if (value - rounded).abs() > 0.25 || rounded < 0.0 {
        return String::new();
    }
    labels
        .get(rounded as usize)
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usd_formatting_groups_thousands() {
        assert_eq!(format_usd(0.0), "$0");
        assert_eq!(format_usd(950.4), "$950");
        assert_eq!(format_usd(90_000.0), "$90,000");
        assert_eq!(format_usd(1_234_567.8), "$1,234,568");
    }

    #[test]
    fn category_ticks_only_label_integer_positions() {
        let labels = vec!["USA".to_string(), "BRA".to_string()];
        assert_eq!(category_tick(0.0, &labels), "USA");
        assert_eq!(category_tick(1.02, &labels), "BRA");
        assert_eq!(category_tick(0.5, &labels), "");
        assert_eq!(category_tick(5.0, &labels), "");
        assert_eq!(category_tick(-1.0, &labels), "");
    }
}
