mod common;

use courier::{FontMetrics, PageSize, Paginator, SheetFormat};

#[test]
fn a_full_screenplay_respects_the_page_budget() {
    let format = SheetFormat::screenplay();
    let metrics = FontMetrics::courier_12();
    let doc = common::long_screenplay(40);

    let result = Paginator::new(&format, metrics).paginate(&doc);
    assert!(result.total_pages > 1);

    for page in &result.pages {
        assert!(
            page.used_height <= format.page_budget() + 0.01,
            "page uses {:.1}pt of a {:.1}pt budget",
            page.used_height,
            format.page_budget()
        );
    }
}

#[test]
fn concatenated_pages_reproduce_the_document() {
    let format = SheetFormat::screenplay();
    let metrics = FontMetrics::courier_12();
    let doc = common::long_screenplay(25);

    let result = Paginator::new(&format, metrics).paginate(&doc);
    let flattened: Vec<_> = result.flattened().collect();
    assert_eq!(flattened.len(), doc.len());
    for (input, output) in doc.iter().zip(flattened) {
        assert_eq!(input, output);
    }
}

#[test]
fn character_cues_stay_with_their_dialogue() {
    let format = SheetFormat::screenplay();
    let metrics = FontMetrics::courier_12();
    let doc = common::long_screenplay(40);

    let result = Paginator::new(&format, metrics).paginate(&doc);
    for page in &result.pages[..result.pages.len() - 1] {
        let last = page.elements.last().expect("pages are never empty");
        let style = format.style_for(last.element.kind_tag());
        assert!(
            !style.keeps_with_next(),
            "{} element stranded at a page bottom",
            last.element.kind_tag()
        );
    }
}

#[test]
fn a_tighter_sheet_produces_more_pages() {
    let metrics = FontMetrics::courier_12();
    let doc = common::long_screenplay(30);

    let letter = SheetFormat::screenplay();
    let mut half_height = SheetFormat::screenplay();
    half_height.size = PageSize::Custom {
        width: 612.0,
        height: 396.0,
    };

    let letter_pages = Paginator::new(&letter, metrics).paginate(&doc).total_pages;
    let half_pages = Paginator::new(&half_height, metrics)
        .paginate(&doc)
        .total_pages;
    assert!(half_pages > letter_pages);
}

#[test]
fn a_format_from_json_paginates() {
    let format: SheetFormat = serde_json::from_str(
        r#"{
            "size": "letter",
            "margins": "1in 1in 1in 1.5in",
            "styles": {
                "scene-heading": { "linesBefore": 2, "keepWithNext": true },
                "action": { "linesBefore": 1 },
                "character": { "indent": 158.4, "linesBefore": 1, "keepWithNext": true },
                "dialogue": { "indent": 72.0, "width": 252.0 }
            }
        }"#,
    )
    .expect("sheet format fixture parses");

    let result =
        Paginator::new(&format, FontMetrics::courier_12()).paginate(&common::long_screenplay(10));
    assert!(result.total_pages >= 1);
    assert_eq!(
        result.flattened().count(),
        common::long_screenplay(10).len()
    );
}
