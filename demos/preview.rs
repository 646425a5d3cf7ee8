//! Paginate a synthetic screenplay and print the resulting page map.
//!
//! ```sh
//! cargo run --example preview -- --scenes 24 --page-size a4
//! ```

use clap::Parser;
use courier::{
    Element, ElementKind, FontMetrics, LayoutConfig, PageSize, PaginationSession, SharedElement,
    SheetFormat,
};
use itertools::Itertools;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(about = "Render the page map for a synthetic screenplay")]
struct Args {
    /// Number of scenes to generate
    #[arg(long, default_value_t = 12)]
    scenes: usize,

    /// Page size name: letter, a4, or legal
    #[arg(long, default_value = "letter")]
    page_size: String,
}

fn synthetic_screenplay(scenes: usize) -> Vec<SharedElement> {
    let mut elements = Vec::new();
    for i in 0..scenes {
        elements.push(
            Element::new(ElementKind::SceneHeading, format!("INT. STAGE {i} - NIGHT")).shared(),
        );
        elements.push(
            Element::new(
                ElementKind::Action,
                "The stage is dark. A single spotlight snaps on and sweeps \
                 across rows of empty seats before settling on a battered \
                 typewriter at center stage.",
            )
            .shared(),
        );
        elements.push(Element::new(ElementKind::Character, "NARRATOR").shared());
        elements.push(Element::new(ElementKind::Parenthetical, "(quietly)").shared());
        elements.push(
            Element::new(
                ElementKind::Dialogue,
                "Fifty-four lines to a page, and not one of them wasted. \
                 Watch where the breaks fall.",
            )
            .shared(),
        );
        elements.push(Element::new(ElementKind::Transition, "CUT TO:").shared());
    }
    elements
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut format = SheetFormat::screenplay();
    format.size = serde_json::from_value::<PageSize>(serde_json::Value::String(
        args.page_size.clone(),
    ))?;
    let metrics = FontMetrics::courier_12();
    let elements = synthetic_screenplay(args.scenes);

    let session = PaginationSession::spawn(LayoutConfig::default());
    let mut updates = session.subscribe();

    let start = Instant::now();
    session.submit(elements.clone(), format.clone(), metrics)?;
    updates.changed().await?;
    let result = updates
        .borrow()
        .clone()
        .ok_or("no pagination result published")?;
    println!(
        "Paginated {} elements into {} pages in {:?}",
        elements.len(),
        result.total_pages,
        start.elapsed()
    );

    for (number, page) in result.pages.iter().enumerate() {
        let kinds = page
            .elements
            .iter()
            .map(|placed| placed.element.kind_tag())
            .join(", ");
        println!(
            "  page {:>3} | {:6.1}pt used | {kinds}",
            number + 1,
            page.used_height
        );
    }

    // An unchanged resubmission is served from the result cache.
    let start = Instant::now();
    session.submit(elements.clone(), format, metrics)?;
    updates.changed().await?;
    println!(
        "Resubmitted the unchanged document: {:?} (cache hit)",
        start.elapsed()
    );

    session.close().await?;
    Ok(())
}
