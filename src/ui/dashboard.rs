//! Terminal rendering of the KPI scorecard.
//!
//! Everything here is presentation: the view arrives typed and validated,
//! and this module only decides labels, units, colors and layout.

use crate::models::agent::AgentIdentity;
use crate::models::kpi::KpiView;
use crate::utils::colors::{self, BLUE, GREEN, ORANGE, PURPLE, RED};
use crate::utils::formatting::{center, decimal, percent};
use ansi_term::Colour;

/// Width of the gap between two cards of the same row.
const GUTTER: usize = 2;
const MIN_CARD_WIDTH: usize = 16;

pub struct Card {
    pub title: &'static str,
    pub value: String,
    pub unit: &'static str,
    pub colour: Colour,
}

impl Card {
    fn new(title: &'static str, value: String, unit: &'static str, colour: Colour) -> Self {
        Self {
            title,
            value,
            unit,
            colour,
        }
    }
}

pub struct Section {
    pub title: &'static str,
    pub cards: Vec<Card>,
}

/// The three scorecard sections, in display order.
/// Cards alternate left/right column.
pub fn sections(view: &KpiView) -> Vec<Section> {
    vec![
        Section {
            title: "📞 Volume & Satisfaction",
            cards: vec![
                Card::new("Answered Volume", view.answered_volume().to_string(), "calls", BLUE),
                Card::new("Surveyed", view.surveyed().to_string(), "surveys", BLUE),
                Card::new("CSAT", percent(view.csat_ratio()), "%", GREEN),
                Card::new("DSAT", percent(view.dsat_ratio()), "%", RED),
            ],
        },
        Section {
            title: "✅ Resolution & Quality",
            cards: vec![
                Card::new("Solved Rate", percent(view.resolution_ratio()), "%", PURPLE),
                Card::new("Passed", view.passed().to_string(), "cases", GREEN),
                Card::new("Evaluated", view.evaluated().to_string(), "cases", BLUE),
                Card::new("Failed", view.failed().to_string(), "cases", RED),
            ],
        },
        Section {
            title: "⏱ Efficiency & Attendance",
            cards: vec![
                Card::new("AHT", decimal(view.aht_minutes()), "minutes", BLUE),
                Card::new("ART", decimal(view.art_minutes()), "minutes", BLUE),
                Card::new("Absent Days", view.absent_days().to_string(), "days", RED),
                Card::new("Variable Score", decimal(view.variable_score()), "%", ORANGE),
            ],
        },
    ]
}

pub struct DashboardRenderer {
    pub title: String,
    pub color: bool,
    pub card_width: usize,
}

impl DashboardRenderer {
    pub fn new(title: &str, color: bool, card_width: usize) -> Self {
        Self {
            title: title.to_string(),
            color,
            card_width: card_width.max(MIN_CARD_WIDTH),
        }
    }

    fn total_width(&self) -> usize {
        self.card_width * 2 + GUTTER
    }

    /// Page title + centered identity block.
    pub fn render_header(&self, identity: &AgentIdentity) -> String {
        let w = self.total_width();
        let mut out = String::new();
        out.push_str(&center(&colors::paint(&self.title, BLUE, self.color), w));
        out.push('\n');
        out.push('\n');
        out.push_str(&center("👤", w));
        out.push('\n');
        out.push_str(&center(&colors::paint(&identity.display_name, Colour::White, self.color), w));
        out.push('\n');
        out.push_str(&center(&colors::dim(&identity.identifier, self.color), w));
        out.push('\n');
        out.push_str(&"─".repeat(w));
        out.push('\n');
        out
    }

    pub fn render_dashboard(&self, identity: &AgentIdentity, view: &KpiView) -> String {
        let mut out = self.render_header(identity);
        out.push_str(&colors::paint("📊 Performance Dashboard", Colour::White, self.color));
        out.push('\n');

        for section in sections(view) {
            out.push('\n');
            out.push_str(section.title);
            out.push('\n');
            for pair in section.cards.chunks(2) {
                let left = self.render_card(&pair[0]);
                let right = pair.get(1).map(|c| self.render_card(c)).unwrap_or_default();
                out.push_str(&self.join_columns(&left, &right));
            }
        }

        out
    }

    /// Box of `card_width` columns; the title wraps when it does not fit.
    pub fn render_card(&self, card: &Card) -> Vec<String> {
        let inner = self.card_width - 2;
        let mut lines = Vec::new();

        lines.push(format!("╭{}╮", "─".repeat(inner)));
        for t in textwrap::wrap(card.title, inner.saturating_sub(2)) {
            lines.push(format!("│{}│", center(&t, inner)));
        }
        let value = colors::paint(&card.value, card.colour, self.color);
        lines.push(format!("│{}│", center(&value, inner)));
        lines.push(format!("│{}│", center(&colors::dim(card.unit, self.color), inner)));
        lines.push(format!("╰{}╯", "─".repeat(inner)));

        lines
    }

    fn join_columns(&self, left: &[String], right: &[String]) -> String {
        let blank = " ".repeat(self.card_width);
        let rows = left.len().max(right.len());
        let mut out = String::new();
        for i in 0..rows {
            let l = left.get(i).map(String::as_str).unwrap_or(&blank);
            let r = right.get(i).map(String::as_str).unwrap_or("");
            out.push_str(l);
            out.push_str(&" ".repeat(GUTTER));
            out.push_str(r);
            out.push('\n');
        }
        out
    }
}
