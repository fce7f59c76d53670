use std::io::{self, Write};

pub fn print_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{line}")
}

pub fn print_json<W: Write>(out: &mut W, json: &str) -> io::Result<()> {
    writeln!(out, "{json}")
}
