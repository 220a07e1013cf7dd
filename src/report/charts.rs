//! Chart Rendering
//!
//! Word clouds and the top-words bar chart, emitted as inline SVG.
//!
//! The cloud uses a row-flow layout: words are placed largest first, left to
//! right, wrapping to a new row when the canvas width is exhausted. Glyph size is
//! linear in the word count. Words that no longer fit vertically are dropped.

use super::page::escape_html;
use super::types::{BarChart, PlacedWord, WordCloud};
use crate::text::frequency::token_frequencies;
use std::fmt::Write;

pub const CLOUD_WIDTH: u32 = 1200;
pub const CLOUD_HEIGHT: u32 = 800;
pub const MAX_CLOUD_WORDS: usize = 200;

const MIN_FONT: f32 = 12.0;
const MAX_FONT: f32 = 110.0;
/// Average glyph advance relative to the font size.
const CHAR_ADVANCE: f32 = 0.6;
const LINE_GAP: f32 = 1.15;
const CANVAS_PADDING: f32 = 10.0;

const PALETTE: &[&str] = &[
    "#440154", "#3b528b", "#21918c", "#5ec962", "#2a788e", "#414487", "#22a884", "#7ad151",
];

const CHART_WIDTH: f32 = 1000.0;
const BAR_HEIGHT: f32 = 26.0;
const BAR_GAP: f32 = 8.0;
const LABEL_WIDTH: f32 = 180.0;
const CHART_TOP: f32 = 20.0;
const AXIS_SPACE: f32 = 50.0;
const BAR_COLOR: &str = "#4c72b0";

fn font_size_for(count: usize, max_count: usize) -> f32 {
    if max_count == 0 {
        return MIN_FONT;
    }
    MIN_FONT + (MAX_FONT - MIN_FONT) * (count as f32 / max_count as f32)
}

/// Lays out the most frequent tokens of `cleaned` on a `width` x `height` canvas.
pub fn layout_word_cloud(cleaned: &str, width: u32, height: u32) -> WordCloud {
    let ranked = token_frequencies(cleaned).most_common(MAX_CLOUD_WORDS);
    let max_count = ranked.first().map(|(_, count)| *count).unwrap_or(0);
    let (canvas_w, canvas_h) = (width as f32, height as f32);

    let mut words = Vec::with_capacity(ranked.len());
    let mut x = CANVAS_PADDING;
    let mut line_top = CANVAS_PADDING;
    let mut line_height = 0.0_f32;

    for (text, count) in ranked {
        let font_size = font_size_for(count, max_count);
        let word_width = text.chars().count() as f32 * font_size * CHAR_ADVANCE;
        if word_width + 2.0 * CANVAS_PADDING > canvas_w {
            continue;
        }

        if x > CANVAS_PADDING && x + word_width > canvas_w - CANVAS_PADDING {
            line_top += line_height * LINE_GAP;
            x = CANVAS_PADDING;
            line_height = 0.0;
        }
        // First word of a row is the largest one in it.
        if line_height == 0.0 {
            line_height = font_size;
        }

        let baseline = line_top + line_height;
        if baseline > canvas_h - CANVAS_PADDING {
            break;
        }

        words.push(PlacedWord {
            text,
            count,
            font_size,
            x,
            y: baseline,
        });
        x += word_width + font_size * 0.3;
    }

    WordCloud {
        width,
        height,
        words,
    }
}

pub fn word_cloud_svg(cloud: &WordCloud) -> String {
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" class="chart" role="img"><rect width="{w}" height="{h}" fill="white"/>"#,
        w = cloud.width,
        h = cloud.height
    );

    for (idx, word) in cloud.words.iter().enumerate() {
        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{:.1}" font-size="{:.1}" fill="{}" font-family="sans-serif"><title>{}: {}</title>{}</text>"#,
            word.x,
            word.y,
            word.font_size,
            PALETTE[idx % PALETTE.len()],
            escape_html(&word.text),
            word.count,
            escape_html(&word.text)
        );
    }

    svg.push_str("</svg>");
    svg
}

impl BarChart {
    /// Wraps top-K output. Order is kept exactly as given.
    pub fn from_top_words(bars: Vec<(String, usize)>) -> Self {
        Self {
            bars,
            x_label: "Frekuensi".to_string(),
            y_label: "Kata".to_string(),
        }
    }
}

pub fn bar_chart_svg(chart: &BarChart) -> String {
    let rows = chart.bars.len() as f32;
    let plot_bottom = CHART_TOP + rows * (BAR_HEIGHT + BAR_GAP);
    let height = plot_bottom + AXIS_SPACE;
    let plot_width = CHART_WIDTH - LABEL_WIDTH - 60.0;
    let max_count = chart.bars.iter().map(|(_, c)| *c).max().unwrap_or(0);

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" class="chart" role="img" font-family="sans-serif"><rect width="{w}" height="{h}" fill="white"/>"#,
        w = CHART_WIDTH,
        h = height
    );

    for (idx, (word, count)) in chart.bars.iter().enumerate() {
        let y = CHART_TOP + idx as f32 * (BAR_HEIGHT + BAR_GAP);
        let bar_width = if max_count == 0 {
            0.0
        } else {
            plot_width * (*count as f32 / max_count as f32)
        };
        let _ = write!(
            svg,
            r#"<text x="{lx:.1}" y="{ty:.1}" font-size="14" text-anchor="end">{word}</text><rect x="{bx:.1}" y="{y:.1}" width="{bw:.1}" height="{bh:.1}" fill="{color}"/><text x="{cx:.1}" y="{ty:.1}" font-size="12">{count}</text>"#,
            lx = LABEL_WIDTH - 8.0,
            ty = y + BAR_HEIGHT * 0.7,
            word = escape_html(word),
            bx = LABEL_WIDTH,
            bw = bar_width,
            bh = BAR_HEIGHT,
            color = BAR_COLOR,
            cx = LABEL_WIDTH + bar_width + 4.0,
            count = count,
        );
    }

    let _ = write!(
        svg,
        r#"<line x1="{x:.1}" y1="{top:.1}" x2="{x:.1}" y2="{bottom:.1}" stroke="black"/><line x1="{x:.1}" y1="{bottom:.1}" x2="{right:.1}" y2="{bottom:.1}" stroke="black"/><text x="{mid:.1}" y="{xl:.1}" font-size="14" text-anchor="middle">{x_label}</text><text x="16" y="{ym:.1}" font-size="14" text-anchor="middle" transform="rotate(-90 16 {ym:.1})">{y_label}</text></svg>"#,
        x = LABEL_WIDTH,
        top = CHART_TOP - 4.0,
        bottom = plot_bottom,
        right = LABEL_WIDTH + plot_width,
        mid = LABEL_WIDTH + plot_width / 2.0,
        xl = plot_bottom + 35.0,
        x_label = escape_html(&chart.x_label),
        ym = (CHART_TOP + plot_bottom) / 2.0,
        y_label = escape_html(&chart.y_label),
    );

    svg
}
