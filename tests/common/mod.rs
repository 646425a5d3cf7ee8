use courier::{Element, ElementKind, SharedElement};

/// A short scene in the JSON shape the parsing collaborator produces.
const SCENE_JSON: &str = r#"[
    { "kind": "scene-heading", "text": "INT. WRITERS ROOM - NIGHT" },
    { "kind": "action",
      "text": "Crumpled pages everywhere. MARA, 40s, red pen behind one ear, stares down a cork board covered in index cards." },
    { "kind": "character", "text": "MARA" },
    { "kind": "parenthetical", "text": "(not looking up)" },
    { "kind": "dialogue",
      "text": "The scene does not end until the page says it ends." },
    { "kind": "transition", "text": "CUT TO:" }
]"#;

pub fn sample_screenplay() -> Vec<SharedElement> {
    let elements: Vec<Element> =
        serde_json::from_str(SCENE_JSON).expect("sample screenplay fixture parses");
    elements.into_iter().map(Element::shared).collect()
}

/// The sample scene repeated until the document spans multiple pages.
pub fn long_screenplay(scenes: usize) -> Vec<SharedElement> {
    let mut elements = Vec::new();
    for i in 0..scenes {
        for element in sample_screenplay() {
            let mut element = (*element).clone();
            if element.kind == ElementKind::SceneHeading {
                element.text = format!("INT. WRITERS ROOM - NIGHT {i}");
            }
            elements.push(element.shared());
        }
    }
    elements
}
