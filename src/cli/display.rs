use std::io::{self, Write};

use crate::model::{entry::Entry, statement::Page};

pub const SAVED: &str = "Saved successfully";
pub const EMPTY_PHONEBOOK: &str = "Phonebook is empty";
pub const NO_MATCHES: &str = "No entries matching the criteria";
pub const NEXT_PAGE_PROMPT: &str = "Next page? (y/n) ";
pub const LAST_PAGE: &str = "It was the last page";

pub fn write_entries<W: Write>(output: &mut W, entries: &[Entry]) -> io::Result<()> {
    for entry in entries {
        writeln!(output, "{}", entry)?;
    }

    Ok(())
}

pub fn write_page<W: Write>(output: &mut W, page: &Page) -> io::Result<()> {
    writeln!(output, "-- Page {} --", page.number)?;
    write_entries(output, &page.entries)
}

pub fn write_search_result<W: Write>(output: &mut W, entries: &[Entry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(output, "{}", NO_MATCHES);
    }

    write_entries(output, entries)
}

pub fn write_update_result<W: Write>(output: &mut W, entries: &[Entry]) -> io::Result<()> {
    if entries.is_empty() {
        return writeln!(output, "{}", NO_MATCHES);
    }

    write_entries(output, entries)?;
    writeln!(output, "{} (updated {} entries)", SAVED, entries.len())
}

/// Prints the error with its causes on one line. The debug form, with every cause on its own line, only goes to the log
pub fn write_error<W: Write>(output: &mut W, err: &anyhow::Error) -> io::Result<()> {
    log::debug!("Command failed: {:?}", err);
    writeln!(output, "Error: {:#}", err)
}
