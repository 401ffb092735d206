//! Test-only helpers for rendering and expected report text.

use crate::classify::{Outcome, classify_reader};
use crate::report::{Format, write_outcome};

/// Render `outcome` into a string.
pub fn render(outcome: &Outcome, format: Format) -> String {
    let mut buf = Vec::new();
    write_outcome(&mut buf, outcome, format).expect("write outcome");
    String::from_utf8(buf).expect("utf-8 report")
}

/// Run the whole pipeline on `input` and render it as text.
pub fn render_input(input: &str) -> String {
    let outcome = classify_reader(input.as_bytes()).expect("classify input");
    render(&outcome, Format::Text)
}

/// Expected text for one ranked number.
pub fn report_block(label: &str, value: u32, sastry: bool, apocalyptic: bool) -> String {
    format!(
        "{label}: {value}.\n- Es Sastry: {}\n- Es Apocaliptico:{}\n",
        u8::from(sastry),
        u8::from(apocalyptic)
    )
}
