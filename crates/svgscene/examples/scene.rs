//! Builds a small scene and writes it to stdout.
//!
//! Run with:
//! ```sh
//! cargo run --example scene > scene.svg
//! ```

use std::io::{self, Write};

use svgscene::prelude::*;

fn main() -> io::Result<()> {
    let mut document = Document::new();

    let mut sun = Circle::new();
    sun.set_center((80.0, 40.0))
        .set_radius(20.0)
        .set_fill_color(Rgb::new(255, 200, 0))
        .set_stroke_color("orange")
        .set_stroke_width(2.0);
    document.add(sun);

    let mut ground = Polyline::new();
    ground
        .add_point((0.0, 120.0))
        .add_point((60.0, 90.0))
        .add_point((120.0, 110.0))
        .add_point((200.0, 80.0))
        .set_stroke_color("green")
        .set_stroke_width(3.0)
        .set_stroke_line_cap(StrokeCap::Round)
        .set_stroke_line_join(StrokeJoin::Round);
    document.add(ground);

    let mut caption = Text::new();
    caption
        .set_position((10.0, 20.0))
        .set_offset((0.0, 4.0))
        .set_font_size(12)
        .set_font_family("Verdana")
        .set_data("Morning")
        .set_fill_color("black");
    document.add(caption);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    document.render(&mut out)?;
    writeln!(out)
}
