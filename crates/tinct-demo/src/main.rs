#![forbid(unsafe_code)]

//! Attribute gallery: renders every style and color tinct knows about,
//! under whichever capability mode the caller selects.

mod cli;

use std::io::{self, Write};

use tinct::{Background, Foreground, Modifier, Style, StyledStream};

const STYLES: &[(&str, Style)] = &[
    ("bold", Style::Bold),
    ("dim", Style::Dim),
    ("italic", Style::Italic),
    ("underline", Style::Underline),
    ("blink", Style::Blink),
    ("rapid-blink", Style::RapidBlink),
    ("reversed", Style::Reversed),
    ("conceal", Style::Conceal),
    ("crossed-out", Style::CrossedOut),
];

const FOREGROUNDS: &[(&str, Foreground)] = &[
    ("black", Foreground::Black),
    ("red", Foreground::Red),
    ("green", Foreground::Green),
    ("yellow", Foreground::Yellow),
    ("blue", Foreground::Blue),
    ("magenta", Foreground::Magenta),
    ("cyan", Foreground::Cyan),
    ("white", Foreground::White),
    ("bright-black", Foreground::BrightBlack),
    ("bright-red", Foreground::BrightRed),
    ("bright-green", Foreground::BrightGreen),
    ("bright-yellow", Foreground::BrightYellow),
    ("bright-blue", Foreground::BrightBlue),
    ("bright-magenta", Foreground::BrightMagenta),
    ("bright-cyan", Foreground::BrightCyan),
    ("bright-white", Foreground::BrightWhite),
];

const BACKGROUNDS: &[(&str, Background)] = &[
    ("black", Background::Black),
    ("red", Background::Red),
    ("green", Background::Green),
    ("yellow", Background::Yellow),
    ("blue", Background::Blue),
    ("magenta", Background::Magenta),
    ("cyan", Background::Cyan),
    ("white", Background::White),
];

fn heading<W: Write>(out: &mut StyledStream<'_, W>, text: &str) -> io::Result<()> {
    let style = Modifier::new().style(Style::Bold).fg(Foreground::Cyan);
    out.apply_all(style)?;
    writeln!(out, "{text}")?;
    out.apply(Style::Reset)?;
    Ok(())
}

fn gallery<W: Write>(out: &mut StyledStream<'_, W>) -> io::Result<()> {
    heading(out, "styles")?;
    for (name, style) in STYLES {
        out.apply(*style)?;
        write!(out, "{name:>14}")?;
        out.apply(Style::Reset)?;
        writeln!(out)?;
    }
    writeln!(out)?;

    heading(out, "foreground colors")?;
    for (name, fg) in FOREGROUNDS {
        out.apply(*fg)?;
        write!(out, "{name:>16}")?;
        out.apply(Foreground::Reset)?;
        writeln!(out)?;
    }
    writeln!(out)?;

    heading(out, "background colors")?;
    for (name, bg) in BACKGROUNDS {
        out.apply(*bg)?;
        write!(out, "{name:>10}")?;
        out.apply(Background::Reset)?;
        writeln!(out)?;
    }
    writeln!(out)?;

    heading(out, "modifiers")?;
    let alert = Modifier::new()
        .style(Style::Bold)
        .fg(Foreground::White)
        .bg(Background::Red);
    out.apply_all(alert)?;
    write!(out, " alert ")?;
    out.apply(Style::Reset)?;
    writeln!(out)?;

    let note = Modifier::new().style(Style::Italic).fg(Foreground::BrightBlack);
    out.apply_all(note)?;
    write!(out, "capability mode: {}", tinct::mode())?;
    out.apply(Style::Reset)?;
    writeln!(out)?;

    out.flush()
}

fn main() -> io::Result<()> {
    let opts = cli::Opts::parse();
    tinct::set_mode(opts.mode);

    match opts.stream.as_str() {
        "stderr" => gallery(&mut StyledStream::stderr()),
        "diagnostic" => gallery(&mut StyledStream::diagnostic()),
        _ => gallery(&mut StyledStream::stdout()),
    }
}
