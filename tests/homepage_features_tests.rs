mod common;

#[cfg(test)]
pub mod homepage_features_tests {
    use super::common::*;

    use eksdocs::config::SiteConfig;
    use eksdocs::content::FEATURE_LIST;
    use eksdocs::frontend::{render_features_section, render_homepage, render_not_found};

    #[test]
    fn test_section_renders_one_column_per_feature() {
        let html = render_features_section(&FEATURE_LIST);
        assert_eq!(count(&html, COLUMN_SELECTOR), 3);
    }

    #[test]
    fn test_section_headings_follow_list_order() {
        let html = render_features_section(&FEATURE_LIST);
        assert_eq!(
            texts(&html, "div.col h3"),
            ["Amazon EKS", "EKS Auto Mode", "EKS Capabilities"]
        );
    }

    #[test]
    fn test_section_columns_match_source_entries() {
        let html = render_features_section(&FEATURE_LIST);
        let columns = columns(&html);

        assert_eq!(columns.len(), FEATURE_LIST.len());
        for (column, item) in columns.iter().zip(FEATURE_LIST.iter()) {
            assert_eq!(column.title, item.title);
            assert_eq!(column.description, item.description.plain_text());
        }
    }

    #[test]
    fn test_section_marks_columns_with_position() {
        let html = render_features_section(&FEATURE_LIST);
        assert_eq!(
            positions(&columns(&html)),
            [Some("0"), Some("1"), Some("2")]
        );
    }

    #[test]
    fn test_section_embeds_icons_with_label() {
        let html = render_features_section(&FEATURE_LIST);

        assert_eq!(count(&html, "div.col span.feature-svg[role=\"img\"]"), 3);
        assert_eq!(count(&html, "span.feature-svg svg"), 3);
        assert_eq!(count(&html, "span[aria-label=\"EKS Auto Mode\"]"), 1);
    }

    #[test]
    fn test_section_rendering_is_idempotent() {
        let first = render_features_section(&FEATURE_LIST);
        let second = render_features_section(&FEATURE_LIST);
        assert_eq!(first, second);
    }

    #[test]
    fn test_section_output_has_no_hydration_markers() {
        let html = render_features_section(&FEATURE_LIST);
        assert!(!html.contains("<!>"));
    }

    #[test]
    fn test_section_with_empty_list_keeps_container_and_row() {
        let html = render_features_section(&[]);

        assert_eq!(count(&html, COLUMN_SELECTOR), 0);
        assert_eq!(count(&html, "section.features > div.container > div.row"), 1);
    }

    #[test]
    fn test_section_removing_entry_leaves_others_unchanged() {
        let full = columns(&render_features_section(&FEATURE_LIST));

        let mut items = shipped();
        items.remove(1);
        let reduced = columns(&render_features_section(leak(items)));

        assert_eq!(
            reduced.iter().map(Column::content).collect::<Vec<_>>(),
            [full[0].content(), full[2].content()]
        );
        assert_eq!(positions(&reduced), [Some("0"), Some("1")]);
    }

    #[test]
    fn test_section_reordering_moves_blocks_only() {
        let full = columns(&render_features_section(&FEATURE_LIST));

        let items = vec![FEATURE_LIST[2], FEATURE_LIST[0], FEATURE_LIST[1]];
        let reordered = columns(&render_features_section(leak(items)));

        assert_eq!(
            reordered.iter().map(Column::content).collect::<Vec<_>>(),
            [full[2].content(), full[0].content(), full[1].content()]
        );
        assert_eq!(positions(&reordered), [Some("0"), Some("1"), Some("2")]);
    }

    #[test]
    fn test_section_renders_rich_description() {
        let html = render_features_section(leak(vec![get_rich_feature()]));

        assert_eq!(texts(&html, "div.col p strong"), ["Karpenter"]);
        assert_eq!(texts(&html, "div.col p code"), ["NodePool"]);
        assert_eq!(texts(&html, "div.col p a[href=\"/docs/karpenter\"]"), ["guide"]);
        assert_eq!(texts(&html, "span[role=\"img\"]"), ["🚀"]);

        let columns = columns(&html);
        assert_eq!(columns.len(), 1);
        assert_eq!(
            columns[0].description,
            get_rich_feature().description.plain_text()
        );
    }

    #[test]
    fn test_homepage_contains_header_and_features() {
        let config = SiteConfig {
            tagline: "Run Kubernetes the easy way".to_string(),
            ..SiteConfig::default()
        };
        let html = render_homepage(&config);

        assert_eq!(texts(&html, "header.hero h1.hero__title"), ["Amazon EKS Guide"]);
        assert_eq!(
            texts(&html, "header.hero p.hero__subtitle"),
            ["Run Kubernetes the easy way"]
        );
        assert_eq!(count(&html, "header.hero a.button[href=\"/docs/intro\"]"), 1);
        assert_eq!(count(&html, &format!("main {COLUMN_SELECTOR}")), 3);
        assert!(!html.contains("<!>"));

        let order = texts(&html, "h1.hero__title, section.features h3");
        assert_eq!(order[0], "Amazon EKS Guide");
        assert_eq!(order.len(), 4);
    }

    #[test]
    fn test_not_found_page_links_home() {
        let html = render_not_found();

        assert_eq!(texts(&html, "main.not-found h1"), ["Page Not Found"]);
        assert_eq!(count(&html, "main.not-found a[href=\"/\"]"), 1);
        assert_eq!(count(&html, "main.not-found span.not-found__icon[role=\"img\"]"), 1);
        assert!(!html.contains("<!>"));
    }
}
