use notebooklm_notes2md::segment::{segment, Segmenter, Signal};
use notebooklm_notes2md::{convert_default, dom, Options};

const FIXTURE: &str = include_str!("fixtures/two_notes.html");

fn content(text: &str) -> Signal {
    Signal::Content(text.to_string())
}

#[test]
fn fixture_yields_two_notes_last_discovered_first() {
    let conversion = convert_default(FIXTURE);

    let titles: Vec<&str> = conversion.notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["Closing Price", "Opening Bids"]);
    assert!(conversion.warnings.is_empty());
}

#[test]
fn note_bodies_keep_raw_fragments() {
    let conversion = convert_default(FIXTURE);
    let opening = &conversion.notes[1];

    assert!(opening.body.starts_with("## Opening Bids\n"));
    // Citation markers are only stripped at export time.
    assert!(opening.body.contains("and raise [1]."));
    assert!(opening.body.contains("**low**"));
}

#[test]
fn sections_are_normalized_bodies() {
    let conversion = convert_default(FIXTURE);
    let sections = conversion.sections();

    assert_eq!(sections.len(), 2);
    assert!(sections[0].starts_with("## Closing Price\n\n"));
    assert!(sections[0].contains("`fair_price`"));
    assert!(sections[0].contains("- Ties go to the earliest bid."));
    assert!(!sections[1].contains("[1]"));
}

#[test]
fn note_count_matches_boundaries_plus_flush() {
    // The first separator and the empty fragment end notes; the second
    // separator has nothing to close.
    let signals = vec![
        content("a"),
        Signal::Separator,
        Signal::Separator,
        content("b"),
        content("c"),
        content(""),
        content("d"),
    ];

    let mut segmenter = Segmenter::new();
    for signal in signals {
        segmenter.feed(signal);
    }
    let notes = segmenter.finish();

    // Two boundaries fired plus the trailing flush of "d".
    assert_eq!(notes.len(), 3);
    assert_eq!(notes[0].title, "d");
    assert_eq!(notes[2].title, "a");
    assert_eq!(notes[1].body, "b\n\n\nc\n\n");
}

#[test]
fn missing_container_is_a_warning_not_an_error() {
    let doc = dom::parse("<html><body><div class=\"paragraph\">loose</div></body></html>");
    let segmentation = segment(&doc, &Options::default());

    assert!(segmentation.notes.is_empty());
    assert_eq!(
        segmentation.warnings,
        ["Could not find 'labs-tailwind-doc-viewer' in the HTML."]
    );
}

#[test]
fn empty_block_element_ends_a_note() {
    let html = r#"
        <labs-tailwind-doc-viewer><div>
          <div class="paragraph"><span>first</span></div>
          <div class="paragraph"></div>
          <div class="paragraph"><span>second</span></div>
        </div></labs-tailwind-doc-viewer>
    "#;
    let conversion = convert_default(html);

    let titles: Vec<&str> = conversion.notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, ["second", "first"]);
}

#[test]
fn non_empty_comments_are_ignored() {
    let html = r#"
        <labs-tailwind-doc-viewer><div>
          <div class="paragraph"><span>one</span></div>
          <!-- ng-container -->
          <div class="paragraph"><span>two</span></div>
        </div></labs-tailwind-doc-viewer>
    "#;
    let conversion = convert_default(html);

    assert_eq!(conversion.notes.len(), 1);
    assert_eq!(conversion.notes[0].title, "one");
}

#[test]
fn untitled_note_when_first_fragment_is_only_markers() {
    let html = r#"
        <labs-tailwind-doc-viewer><div>
          <div class="heading3"></div>
          <div class="paragraph"><span>body</span></div>
        </div></labs-tailwind-doc-viewer>
    "#;
    let conversion = convert_default(html);

    assert_eq!(conversion.notes.len(), 1);
    assert_eq!(conversion.notes[0].title, "Untitled Note");
}

#[test]
fn custom_container_tag() {
    let options = Options {
        container_tag: "notes-viewer".to_string(),
        ..Options::default()
    };
    let html = r#"<notes-viewer><div><div class="paragraph"><span>kept</span></div></div></notes-viewer>"#;
    let doc = dom::parse(html);

    let segmentation = segment(&doc, &options);
    assert_eq!(segmentation.notes.len(), 1);
    assert_eq!(segmentation.notes[0].title, "kept");
}
