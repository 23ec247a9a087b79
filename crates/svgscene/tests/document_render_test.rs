//! Integration tests for document rendering.
//!
//! These check the exact markup produced through the public API.

use proptest::prelude::*;

use svgscene::prelude::*;

const PROLOGUE: &str = r#"<?xml version="1.0" encoding="UTF-8" ?><svg xmlns="http://www.w3.org/2000/svg" version="1.1">"#;
const EPILOGUE: &str = "</svg>";

fn wrap(body: &str) -> String {
    format!("{PROLOGUE}{body}{EPILOGUE}")
}

#[test]
fn test_circle_example() {
    let mut circle = Circle::new();
    circle
        .set_center(Point::new(10.0, 10.0))
        .set_radius(5.0)
        .set_fill_color("red");

    let mut document = Document::new();
    document.add(circle);

    assert_eq!(
        document.render_to_string(),
        wrap(r#"<circle fill="red" stroke="none" stroke-width="1" cx="10" cy="10" r="5" />"#)
    );
}

#[test]
fn test_polyline_example() {
    let mut polyline = Polyline::new();
    polyline.add_point((0.0, 0.0)).add_point((10.0, 10.0));

    let mut document = Document::new();
    document.add(polyline);

    assert_eq!(
        document.render_to_string(),
        wrap(r#"<polyline fill="none" stroke="none" stroke-width="1" points="0,0 10,10 " />"#)
    );
}

#[test]
fn test_text_example() {
    let mut text = Text::new();
    text.set_data("Hi").set_font_size(14);

    let mut document = Document::new();
    document.add(text);

    let output = document.render_to_string();
    assert!(output.contains(r#" font-size="14" >Hi</text>"#));
    assert!(!output.contains("font-family"));
    assert!(!output.contains("/>"));
}

#[test]
fn test_fully_styled_shapes() {
    let mut document = Document::new();

    let mut circle = Circle::new();
    circle
        .set_center((50.0, 50.0))
        .set_radius(25.5)
        .set_fill_color(Rgb::new(255, 0, 128))
        .set_stroke_color("black")
        .set_stroke_width(0.5)
        .set_stroke_line_cap(StrokeCap::Butt)
        .set_stroke_line_join(StrokeJoin::Bevel);
    document.add(circle);

    let mut text = Text::new();
    text.set_position((1.0, 2.0))
        .set_offset((3.0, 4.0))
        .set_font_size(9)
        .set_font_family("Verdana")
        .set_data("label")
        .set_stroke_line_join("round");
    document.add(text);

    assert_eq!(
        document.render_to_string(),
        wrap(concat!(
            r#"<circle fill="rgb(255,0,128)" stroke="black" stroke-width="0.5" stroke-linecap="butt" stroke-linejoin="bevel" cx="50" cy="50" r="25.5" />"#,
            r#"<text fill="none" stroke="none" stroke-width="1" stroke-linejoin="round" x="1" y="2" dx="3" dy="4" font-size="9" font-family="Verdana" >label</text>"#,
        ))
    );
}

#[test]
fn test_clear_then_render() {
    let mut document = Document::new();
    document.add(Circle::new());
    document.add(Polyline::new());
    document.clear();

    assert_eq!(
        document.render_to_string(),
        r#"<?xml version="1.0" encoding="UTF-8" ?><svg xmlns="http://www.w3.org/2000/svg" version="1.1"></svg>"#
    );
}

#[test]
fn test_copy_add_isolates_later_mutation() {
    let mut document = Document::new();
    let mut circle = Circle::new();
    circle.set_radius(5.0);
    document.add_cloned(&circle);
    let before = document.render_to_string();

    circle.set_radius(50.0).set_fill_color("blue");

    assert_eq!(document.render_to_string(), before);
    assert!(before.contains(r#"r="5""#));
    assert!(!before.contains("blue"));
}

#[test]
fn test_move_add_transfers_all_state() {
    let mut polyline = Polyline::new();
    for i in 0..100 {
        polyline.add_point((f64::from(i), f64::from(i * 2)));
    }
    let mut text = Text::new();
    text.set_data("a fairly long run of character data");

    let mut document = Document::new();
    document.add(polyline);
    document.add(text);

    let output = document.render_to_string();
    let expected_points: String = (0..100).map(|i| format!("{},{} ", i, i * 2)).collect();
    assert!(output.contains(&format!(r#"points="{expected_points}""#)));
    assert!(output.contains(">a fairly long run of character data</text>"));
}

#[test]
fn test_values_are_not_escaped_or_validated() {
    let mut text = Text::new();
    text.set_data("<b>&</b>").set_fill_color("not-a-color");
    let mut circle = Circle::new();
    circle.set_radius(-1.0).set_stroke_width(-2.0);

    let mut document = Document::new();
    document.add(text);
    document.add(circle);

    let output = document.render_to_string();
    assert!(output.contains("><b>&</b></text>"));
    assert!(output.contains(r#"fill="not-a-color""#));
    assert!(output.contains(r#"stroke-width="-2""#));
    assert!(output.contains(r#"r="-1""#));
}

#[test]
fn test_css_color_errors_convert_into_crate_error() {
    fn styled_circle(color: &str) -> Result<Circle, svgscene::Error> {
        let mut circle = Circle::new();
        circle.set_fill_color(Color::from_css(color)?);
        Ok(circle)
    }

    let circle = styled_circle("rebeccapurple").unwrap();
    assert_eq!(circle.style().fill().to_string(), "rgb(102,51,153)");

    let err = styled_circle("no-such-color").unwrap_err();
    assert!(matches!(err, svgscene::Error::InvalidColor(_)));
}

#[test]
fn test_save_writes_rendered_document() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("scene.svg");

    let mut document = Document::new();
    document.add(Circle::new());
    document.save(&path).expect("Failed to save document");

    let written = std::fs::read_to_string(&path).expect("Failed to read saved document");
    assert_eq!(written, document.render_to_string());
}

#[test]
fn test_save_reports_path_on_failure() {
    let dir = tempfile::tempdir().expect("Failed to create temp directory");
    let path = dir.path().join("missing").join("scene.svg");

    let err = Document::new().save(&path).unwrap_err();
    assert!(matches!(err, svgscene::Error::Io { .. }));
    assert!(err.to_string().contains("scene.svg"));
}

/// Builds one shape of the variant chosen by `kind`, tagged with `id` so it
/// can be found in the output.
fn numbered_shape(kind: u8, id: usize) -> Shape {
    let id = id as f64;
    match kind % 3 {
        0 => {
            let mut circle = Circle::new();
            circle.set_radius(id);
            circle.into()
        }
        1 => {
            let mut polyline = Polyline::new();
            polyline.add_point((id, id));
            polyline.into()
        }
        _ => {
            let mut text = Text::new();
            text.set_data(format!("#{id}"));
            text.into()
        }
    }
}

proptest! {
    #[test]
    fn prop_render_follows_insertion_order(
        kinds in prop::collection::vec(any::<u8>(), 0..24),
        copies in prop::collection::vec(any::<bool>(), 24),
    ) {
        let shapes: Vec<Shape> = kinds
            .iter()
            .enumerate()
            .map(|(id, kind)| numbered_shape(*kind, id))
            .collect();

        let mut document = Document::new();
        for (shape, copy) in shapes.iter().zip(&copies) {
            if *copy {
                document.add_cloned(shape);
            } else {
                document.add(shape.clone());
            }
        }

        let body: String = shapes.iter().map(ToString::to_string).collect();
        prop_assert_eq!(document.render_to_string(), wrap(&body));
    }

    #[test]
    fn prop_render_is_idempotent(kinds in prop::collection::vec(any::<u8>(), 0..16)) {
        let document: Document = kinds
            .iter()
            .enumerate()
            .map(|(id, kind)| numbered_shape(*kind, id))
            .collect();

        let first = document.render_to_string();
        let mut second = Vec::new();
        document.render(&mut second).unwrap();
        prop_assert_eq!(first.as_bytes(), second.as_slice());
    }
}
