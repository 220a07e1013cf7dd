//! Report Module Tests
//!
//! ## Test Scopes
//! - **Renderer**: Section computation, empty-corpus halt, schema fallback.
//! - **Search**: Case-insensitive title matching and the query-changed handler.
//! - **Charts**: Word cloud scaling and bar order.
//! - **Page**: Section order, escaping and conditional output.

#[cfg(test)]
mod tests {
    use crate::corpus::loader::LoadOutcome;
    use crate::corpus::types::{Corpus, StoreError};
    use crate::report::charts::{bar_chart_svg, layout_word_cloud, word_cloud_svg};
    use crate::report::page::{escape_html, render_page};
    use crate::report::renderer::{build_table, render_report};
    use crate::report::search::{on_search_query_changed, search_titles};
    use crate::report::types::{
        BarChart, NoticeLevel, Report, SectionId, TableSection, MSG_DATA_NOT_FOUND,
        MSG_MISSING_COLUMNS, PLACEHOLDER, TABLE_ROW_LIMIT,
    };
    use crate::text::stopwords::StopwordSet;
    use mongodb::bson::doc;

    fn scenario_corpus() -> Corpus {
        Corpus::from_documents(&[
            doc! { "judul": "Tim A menang", "isi": "Laga berjalan ketat", "tanggal": "2024-01-01", "link": "http://x" },
            doc! { "judul": "Tim B kalah", "isi": "Kekalahan kandang", "tanggal": "2024-01-02", "link": "http://y" },
        ])
    }

    fn no_stopwords() -> StopwordSet {
        StopwordSet::from_words(["zzz"])
    }

    fn render(corpus: &Corpus) -> Report {
        render_report(
            LoadOutcome {
                corpus,
                error: None,
            },
            &no_stopwords(),
        )
    }

    // ============================================================
    // RENDERER TESTS
    // ============================================================

    #[test]
    fn test_render_full_report() {
        let corpus = scenario_corpus();
        let report = render(&corpus);

        assert!(!report.halted);
        assert!(report.notices.is_empty());
        assert!(report.body_cloud.is_some());
        assert!(report.title_cloud.is_some());
        assert!(report.search.is_none());

        let chart = report.title_chart.expect("bar chart");
        assert_eq!(chart.bars[0], ("tim".to_string(), 2));
        assert_eq!(chart.bars.len(), 5);
    }

    #[test]
    fn test_render_empty_corpus_halts() {
        let corpus = Corpus::empty();
        let report = render(&corpus);

        assert!(report.halted);
        assert_eq!(report.notices.len(), 1);
        assert_eq!(report.notices[0].level, NoticeLevel::Warning);
        assert_eq!(report.notices[0].message, MSG_DATA_NOT_FOUND);
        assert!(report.body_cloud.is_none());
        assert!(report.title_cloud.is_none());
        assert!(report.title_chart.is_none());
        assert!(report.table.is_none());
    }

    #[test]
    fn test_render_store_failure_shows_diagnostic() {
        let corpus = Corpus::empty();
        let error = StoreError::Unreachable("No servers available".to_string());
        let report = render_report(
            LoadOutcome {
                corpus: &corpus,
                error: Some(&error),
            },
            &no_stopwords(),
        );

        assert!(report.halted);
        assert_eq!(report.notices.len(), 2);
        assert_eq!(report.notices[0].level, NoticeLevel::Error);
        assert!(report.notices[0].message.starts_with("Gagal koneksi MongoDB:"));
        assert!(report.notices[0].message.contains("No servers available"));
        assert_eq!(report.notices[1].message, MSG_DATA_NOT_FOUND);
    }

    #[test]
    fn test_table_uses_placeholder_for_missing_date() {
        let corpus = Corpus::from_documents(&[
            doc! { "judul": "Ada tanggal", "isi": "a", "tanggal": "2024-02-02", "link": "http://a" },
            doc! { "judul": "Tanpa tanggal", "isi": "b", "link": "http://b" },
        ]);
        let report = render(&corpus);

        match report.table {
            Some(TableSection::Rows(table)) => {
                assert_eq!(table.rows.len(), 2);
                assert_eq!(table.rows[0].number, 1);
                assert_eq!(table.rows[1].number, 2);
                assert_eq!(table.rows[1].published_date, PLACEHOLDER);
                assert_eq!(table.rows[1].title, "Tanpa tanggal");
            }
            other => panic!("expected table rows, got {:?}", other),
        }

        // Charts are unaffected by the missing value
        let chart = report.title_chart.unwrap();
        assert!(chart.bars.iter().any(|(w, _)| w == "tanggal"));
    }

    #[test]
    fn test_table_skipped_when_column_missing() {
        let corpus = Corpus::from_documents(&[
            doc! { "judul": "Tim A menang", "isi": "Laga seru" },
        ]);
        let report = render(&corpus);

        match report.table {
            Some(TableSection::Skipped { warning }) => {
                assert_eq!(warning.message, MSG_MISSING_COLUMNS);
            }
            other => panic!("expected skipped table, got {:?}", other),
        }
        assert!(report.body_cloud.is_some());
        assert!(report.title_chart.is_some());
    }

    #[test]
    fn test_missing_title_field_still_renders_charts() {
        let corpus = Corpus::from_documents(&[doc! { "isi": "Bola basket" }]);
        let report = render(&corpus);

        assert!(!report.halted);
        assert!(report.title_chart.unwrap().bars.is_empty());
        assert!(report.title_cloud.unwrap().words.is_empty());
        assert_eq!(report.body_cloud.unwrap().words.len(), 2);
    }

    #[test]
    fn test_table_capped_at_row_limit() {
        let docs: Vec<_> = (0..TABLE_ROW_LIMIT + 25)
            .map(|i| {
                doc! {
                    "judul": format!("Artikel {}", i),
                    "isi": "isi",
                    "tanggal": "2024-03-03",
                    "link": format!("http://x/{}", i),
                }
            })
            .collect();
        let corpus = Corpus::from_documents(&docs);

        match build_table(&corpus) {
            TableSection::Rows(table) => {
                assert_eq!(table.rows.len(), TABLE_ROW_LIMIT);
                assert_eq!(table.rows[0].title, "Artikel 0");
                assert_eq!(table.rows.last().unwrap().number, TABLE_ROW_LIMIT);
            }
            other => panic!("expected table rows, got {:?}", other),
        }
    }

    // ============================================================
    // SEARCH TESTS
    // ============================================================

    #[test]
    fn test_search_is_case_insensitive() {
        let corpus = scenario_corpus();
        let matches = search_titles(&corpus, "TIM");
        assert_eq!(matches.len(), 2);

        let matches = search_titles(&corpus, "kalah");
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].title.as_deref(), Some("Tim B kalah"));
    }

    #[test]
    fn test_search_preserves_corpus_order() {
        let corpus = scenario_corpus();
        let titles: Vec<_> = search_titles(&corpus, "tim")
            .iter()
            .map(|r| r.title.clone().unwrap())
            .collect();
        assert_eq!(titles, vec!["Tim A menang", "Tim B kalah"]);
    }

    #[test]
    fn test_search_skips_records_without_title() {
        let corpus = Corpus::from_documents(&[doc! { "isi": "tim" }, doc! { "judul": "Tim" }]);
        assert_eq!(search_titles(&corpus, "tim").len(), 1);
    }

    #[test]
    fn test_query_changed_empty_hides_results() {
        let update = on_search_query_changed(&scenario_corpus(), "");
        assert_eq!(update.affected, vec![SectionId::SearchResults]);
        assert!(update.results.is_none());
    }

    #[test]
    fn test_query_changed_counts_matches() {
        let update = on_search_query_changed(&scenario_corpus(), "tim");
        let results = update.results.expect("results");

        assert_eq!(results.total_count, 2);
        assert_eq!(results.summary(), "Ditemukan 2 artikel:");
        assert_eq!(results.rows[0].number, 1);
        assert_eq!(results.rows[1].link, "http://y");
    }

    #[test]
    fn test_query_changed_no_match() {
        let update = on_search_query_changed(&scenario_corpus(), "playoff");
        let results = update.results.unwrap();
        assert_eq!(results.total_count, 0);
        assert!(results.rows.is_empty());
    }

    #[test]
    fn test_apply_search_ignored_on_halted_report() {
        let mut report = render(&Corpus::empty());
        report.apply_search(on_search_query_changed(&scenario_corpus(), "tim"));
        assert!(report.search.is_none());
    }

    // ============================================================
    // CHART TESTS
    // ============================================================

    #[test]
    fn test_word_cloud_scales_with_frequency() {
        let cloud = layout_word_cloud("ring ring ring bola bola pemain", 1200, 800);

        assert_eq!(cloud.words.len(), 3);
        assert_eq!(cloud.words[0].text, "ring");
        assert!(cloud.words[0].font_size > cloud.words[1].font_size);
        assert!(cloud.words[1].font_size > cloud.words[2].font_size);
        for word in &cloud.words {
            assert!(word.x >= 0.0 && word.x < 1200.0);
            assert!(word.y > 0.0 && word.y <= 800.0);
        }
    }

    #[test]
    fn test_word_cloud_empty_text() {
        let cloud = layout_word_cloud("", 1200, 800);
        assert!(cloud.words.is_empty());
        assert!(word_cloud_svg(&cloud).starts_with("<svg"));
    }

    #[test]
    fn test_word_cloud_drops_words_that_do_not_fit() {
        let text: Vec<String> = (0..500).map(|i| format!("kata{}", i)).collect();
        let cloud = layout_word_cloud(&text.join(" "), 1200, 300);
        assert!(!cloud.words.is_empty());
        assert!(cloud.words.len() < 200);
    }

    #[test]
    fn test_bar_chart_keeps_aggregator_order() {
        let chart = BarChart::from_top_words(vec![
            ("zebra".to_string(), 5),
            ("alpha".to_string(), 3),
        ]);
        let svg = bar_chart_svg(&chart);

        let zebra = svg.find("zebra").unwrap();
        let alpha = svg.find("alpha").unwrap();
        assert!(zebra < alpha, "highest frequency bar must be drawn first");
        assert!(svg.contains("Frekuensi"));
        assert!(svg.contains("Kata"));
    }

    // ============================================================
    // PAGE TESTS
    // ============================================================

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_page_section_order() {
        let report = render(&scenario_corpus());
        let html = render_page(&report, "");

        let positions: Vec<usize> = [
            "id=\"body-cloud\"",
            "id=\"title-cloud\"",
            "id=\"title-chart\"",
            "id=\"article-table\"",
            "id=\"search\"",
        ]
        .iter()
        .map(|marker| html.find(marker).expect(marker))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("Visualisasi Artikel Basket dari Detik.com"));
        assert!(!html.contains("search-results"));
    }

    #[test]
    fn test_page_empty_corpus_only_warning() {
        let report = render(&Corpus::empty());
        let html = render_page(&report, "");

        assert!(html.contains(MSG_DATA_NOT_FOUND));
        assert!(!html.contains("<svg"));
        assert!(!html.contains("<table"));
        assert!(!html.contains("name=\"q\""));
    }

    #[test]
    fn test_page_shows_search_results() {
        let corpus = scenario_corpus();
        let mut report = render(&corpus);
        report.apply_search(on_search_query_changed(&corpus, "tim"));
        let html = render_page(&report, "tim");

        assert!(html.contains("Ditemukan 2 artikel:"));
        assert!(html.contains("id=\"search-results\""));
        assert!(html.contains("value=\"tim\""));
    }

    #[test]
    fn test_page_escapes_article_content() {
        let corpus = Corpus::from_documents(&[doc! {
            "judul": "<script>alert(1)</script>",
            "isi": "isi",
            "tanggal": "2024-01-01",
            "link": "javascript:alert(1)",
        }]);
        let html = render_page(&render(&corpus), "");

        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("href=\"javascript"));
    }
}
