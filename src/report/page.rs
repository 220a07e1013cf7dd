//! HTML Page
//!
//! Assembles a `Report` into the dashboard page: wide layout, title heading and
//! the sections in their fixed order. Article content is always escaped.

use super::charts::{bar_chart_svg, word_cloud_svg};
use super::types::{Notice, NoticeLevel, Report, SearchResults, TableSection, PAGE_TITLE};
use std::fmt::Write;

const STYLE: &str = r#"
body { font-family: sans-serif; margin: 0 2rem 3rem; color: #262730; }
main { max-width: none; }
h1 { margin-top: 1.5rem; }
.chart { width: 100%; max-width: 1000px; height: auto; display: block; }
.notice { padding: 0.75rem 1rem; border-radius: 0.4rem; margin: 0.75rem 0; }
.notice.error { background: #ffe4e4; color: #7d1a1a; }
.notice.warning { background: #fff8d6; color: #6b5200; }
.table-wrap { max-height: 480px; overflow: auto; border: 1px solid #ddd; }
table { border-collapse: collapse; width: 100%; font-size: 0.85rem; }
th, td { border-bottom: 1px solid #eee; padding: 0.3rem 0.5rem; text-align: left; vertical-align: top; }
th { position: sticky; top: 0; background: #f7f7f9; }
td.body { max-width: 480px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
"#;

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Renders the full dashboard. `query` pre-fills the search box.
pub fn render_page(report: &Report, query: &str) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html lang=\"id\"><head><meta charset=\"utf-8\"><title>{title}</title><style>{style}</style></head><body><main><h1>{title}</h1>",
        title = escape_html(PAGE_TITLE),
        style = STYLE,
    );

    for notice in &report.notices {
        push_notice(&mut html, notice);
    }

    if report.halted {
        html.push_str("</main></body></html>");
        return html;
    }

    if let Some(cloud) = &report.body_cloud {
        html.push_str("<section id=\"body-cloud\"><h3>Word Cloud Isi Artikel</h3>");
        html.push_str(&word_cloud_svg(cloud));
        html.push_str("</section>");
    }

    if let Some(cloud) = &report.title_cloud {
        html.push_str("<section id=\"title-cloud\"><h3>Word Cloud Judul Artikel</h3>");
        html.push_str(&word_cloud_svg(cloud));
        html.push_str("</section>");
    }

    if let Some(chart) = &report.title_chart {
        html.push_str("<section id=\"title-chart\"><h3>Top 15 Kata di Judul Artikel</h3>");
        html.push_str(&bar_chart_svg(chart));
        html.push_str("</section>");
    }

    html.push_str(
        "<section id=\"article-table\"><h3>Tabel Artikel: Judul, Isi, Tanggal, dan Link</h3>",
    );
    match &report.table {
        Some(TableSection::Rows(table)) => {
            html.push_str(
                "<div class=\"table-wrap\"><table><thead><tr><th></th><th>judul</th><th>isi</th><th>tanggal</th><th>link</th></tr></thead><tbody>",
            );
            for row in &table.rows {
                let _ = write!(
                    html,
                    "<tr><td>{}</td><td>{}</td><td class=\"body\">{}</td><td>{}</td><td>{}</td></tr>",
                    row.number,
                    escape_html(&row.title),
                    escape_html(&row.body),
                    escape_html(&row.published_date),
                    link_cell(&row.link)
                );
            }
            html.push_str("</tbody></table></div>");
        }
        Some(TableSection::Skipped { warning }) => push_notice(&mut html, warning),
        None => {}
    }
    html.push_str("</section>");

    let _ = write!(
        html,
        "<section id=\"search\"><h3>Pencarian Judul Artikel</h3><form method=\"get\" action=\"/\"><label for=\"q\">Masukkan kata kunci untuk mencari judul:</label><br><input type=\"text\" id=\"q\" name=\"q\" value=\"{}\" size=\"60\"></form>",
        escape_html(query)
    );
    if let Some(results) = &report.search {
        push_search_results(&mut html, results);
    }
    html.push_str("</section></main></body></html>");

    html
}

fn push_notice(html: &mut String, notice: &Notice) {
    let class = match notice.level {
        NoticeLevel::Error => "error",
        NoticeLevel::Warning => "warning",
    };
    let _ = write!(
        html,
        "<div class=\"notice {}\">{}</div>",
        class,
        escape_html(&notice.message)
    );
}

fn push_search_results(html: &mut String, results: &SearchResults) {
    let _ = write!(
        html,
        "<div id=\"search-results\"><p>{}</p><div class=\"table-wrap\"><table><thead><tr><th></th><th>judul</th><th>tanggal</th><th>link</th></tr></thead><tbody>",
        escape_html(&results.summary())
    );
    for row in &results.rows {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            row.number,
            escape_html(&row.title),
            escape_html(&row.published_date),
            link_cell(&row.link)
        );
    }
    html.push_str("</tbody></table></div></div>");
}

fn link_cell(link: &str) -> String {
    let escaped = escape_html(link);
    if link.starts_with("http://") || link.starts_with("https://") {
        format!("<a href=\"{0}\" target=\"_blank\" rel=\"noopener\">{0}</a>", escaped)
    } else {
        escaped
    }
}
