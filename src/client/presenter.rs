use super::labels::{climate_label, cost_label};
use super::pagination::Paginator;
use crate::models::{Recommendation, Season};
use std::fmt::Write;

const NO_RESULTS: &str = "No results";

/// Renders a page of recommendations as a plain-text table.
pub struct ResultsPresenter {
    /// Season whose climate is shown in the table, when one was selected.
    season: Option<Season>,
}

impl ResultsPresenter {
    pub fn new(season: Option<Season>) -> Self {
        Self { season }
    }

    pub fn render(&self, pager: &Paginator<Recommendation>) -> String {
        let season_header = self.season.map(|s| s.label()).unwrap_or("Climate");
        let mut out = String::new();

        let _ = writeln!(
            out,
            "{:>4}  {:<20} {:<24} {:>10} {:>7}  {:<9} {:<8}",
            "#", "City", "Country", "Dist (km)", "Hours", "Cost", season_header
        );

        if pager.total_items() == 0 {
            let _ = writeln!(out, "{:>4}  {}", "-", NO_RESULTS);
        }

        for (i, rec) in pager.current().iter().enumerate() {
            let climate = match self.season {
                Some(season) => climate_label(rec.season_code(season)).to_string(),
                None => Season::ALL
                    .iter()
                    .map(|&s| climate_label(rec.season_code(s)).chars().next().unwrap_or('?'))
                    .collect(),
            };
            let _ = writeln!(
                out,
                "{:>4}  {:<20} {:<24} {:>10.0} {:>7.1}  {:<9} {:<8}",
                pager.offset() + i + 1,
                truncate(&rec.city, 20),
                truncate(&rec.country, 24),
                rec.distance_km,
                rec.flight_hours,
                cost_label(rec.final_cost_level),
                climate
            );
        }

        let _ = write!(
            out,
            "Page {} of {} ({} results)",
            pager.page(),
            pager.total_pages(),
            pager.total_items()
        );
        out
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut cut: String = s.chars().take(max.saturating_sub(1)).collect();
        cut.push('…');
        cut
    }
}
