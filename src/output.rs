//! Terminal output for parsed filters, search results and catalog facets

use crate::catalog::{Facets, ShipRecord};
use crate::query::{Category, SearchFilters};
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Width of the name column in ship listings
const NAME_WIDTH: usize = 24;

/// Open stdout. `configured` is the color setting from config.json; it and
/// terminal detection only apply when no explicit choice was made
pub fn stdout(choice: ColorChoice, configured: bool) -> StandardStream {
    let choice = match choice {
        ColorChoice::Auto if !configured || !io::stdout().is_terminal() => ColorChoice::Never,
        other => other,
    };
    StandardStream::stdout(choice)
}

/// Print a one-line summary of the recognized filters
pub fn print_filters<W: WriteColor>(out: &mut W, filters: &SearchFilters) -> io::Result<()> {
    if filters.is_empty() {
        writeln!(out, "(no filters)")?;
        return Ok(());
    }

    let mut first = true;
    let mut field = |out: &mut W, label: &str, values: &[String]| -> io::Result<()> {
        if values.is_empty() {
            return Ok(());
        }
        if !first {
            write!(out, "  ")?;
        }
        first = false;
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "{label}:")?;
        out.reset()?;
        write!(out, " {}", values.join(", "))
    };

    field(out, "tiers", &labels(&filters.tiers))?;
    field(out, "types", &labels(&filters.types))?;
    field(out, "nations", &labels(&filters.nations))?;
    field(out, "categories", &labels(&filters.categories))?;
    if !filters.ship_name.is_empty() {
        field(out, "name", &[format!("\"{}\"", filters.ship_name)])?;
    }
    writeln!(out)?;

    Ok(())
}

fn labels<T: Display>(values: &[T]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// Print matching ships, one per line
pub fn print_ships<W: WriteColor>(out: &mut W, ships: &[&ShipRecord]) -> io::Result<()> {
    for ship in ships {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(out, "T{:<3}", ship.tier)?;
        out.reset()?;

        out.set_color(ColorSpec::new().set_bold(true))?;
        write!(out, "{:<width$}", ship.name, width = NAME_WIDTH)?;
        out.reset()?;

        out.set_color(ColorSpec::new().set_fg(Some(Color::Magenta)))?;
        write!(out, " {:<11}", ship.ship_type)?;
        out.reset()?;

        write!(out, " {:<13}", ship.nation)?;

        let category = ship.category();
        if category == Category::Premium {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
        }
        writeln!(out, " {category}")?;
        out.reset()?;
    }

    Ok(())
}

/// Print the match count footer
pub fn print_summary<W: WriteColor>(out: &mut W, shown: usize, matched: usize) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_dimmed(true))?;
    if shown < matched {
        writeln!(out, "{shown} of {matched} ships")?;
    } else {
        writeln!(out, "{matched} ships")?;
    }
    out.reset()
}

/// Print the distinct values available for filtering
pub fn print_facets<W: WriteColor>(out: &mut W, facets: &Facets) -> io::Result<()> {
    let rows = [
        ("nations", facets.nations.join(", ")),
        ("tiers", labels(&facets.tiers).join(", ")),
        ("types", facets.types.join(", ")),
    ];

    for (label, values) in rows {
        out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        write!(out, "{label}:")?;
        out.reset()?;
        writeln!(out, " {values}")?;
    }

    Ok(())
}
