//! lessonmark CLI - render lesson content to HTML

use std::io::{self, Read, Write};

use lessonmark::Mode;

fn main() -> io::Result<()> {
    let mut forced: Option<Mode> = None;
    let mut path: Option<String> = None;

    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--raw" => forced = Some(Mode::RawHtml),
            "--structured" => forced = Some(Mode::Structured),
            other => path = Some(other.to_string()),
        }
    }

    // Read from file or stdin
    let input = match path.as_deref() {
        Some(p) if p != "-" => std::fs::read_to_string(p)?,
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let html = match forced {
        Some(mode) => lessonmark::to_html_with_mode(&input, mode),
        None => lessonmark::to_html(&input),
    };
    io::stdout().write_all(html.as_bytes())?;

    Ok(())
}
