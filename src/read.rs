extern crate termcolor;

use std::{
    fs::File,
    io::{self, stdin, Read, Write},
};
use termcolor::{StandardStream, WriteColor};

/// Returns false once stdin is closed.
pub fn read_line_to(stdout: &mut StandardStream, prompt: &[u8], dest: &mut String) -> bool {
    dest.clear();
    loop {
        let _ = stdout.write_all(prompt);
        let _ = stdout.flush();
        match stdin().read_line(dest) {
            Ok(0) => return false,
            Ok(_) => {
                dest.truncate(dest.trim_end().len());
                return true;
            }
            Err(e) => write_error!(stdout, "Error", "Read: {}", e),
        }
        let _ = stdout.reset();
    }
}
pub fn read_line(stdout: &mut StandardStream, prompt: &[u8]) -> String {
    let mut ret = String::new();
    read_line_to(stdout, prompt, &mut ret);
    ret
}
pub fn read_command(stdout: &mut StandardStream, prompt: &[u8]) -> Option<String> {
    let mut ret = String::new();
    if read_line_to(stdout, prompt, &mut ret) {
        Some(ret)
    } else {
        None
    }
}
/// Empty input picks `default`.
pub fn read_or(stdout: &mut StandardStream, prompt: &str, default: Option<&str>) -> String {
    let line = match default {
        Some(d) => read_line(stdout, format!("{} [{}]: ", prompt, d).as_bytes()),
        None => read_line(stdout, format!("{}: ", prompt).as_bytes()),
    };
    match (line.trim(), default) {
        ("", Some(d)) => d.to_string(),
        (v, _) => v.to_string(),
    }
}
pub fn read_field(stdout: &mut StandardStream, prompt: &str, max: usize) -> String {
    let mut buf = String::new();
    loop {
        if !read_line_to(stdout, format!("{}: ", prompt).as_bytes(), &mut buf) {
            return String::new();
        }
        let len = buf.trim().chars().count();
        if len > max {
            write_error!(
                stdout,
                "Error",
                "{} characters entered, at most {} allowed",
                len,
                max
            );
        } else {
            return buf;
        }
        let _ = stdout.reset();
    }
}
pub fn read_yes(stdout: &mut StandardStream, prompt: &[u8]) -> bool {
    matches!(
        read_line(stdout, prompt).trim().to_lowercase().as_str(),
        "y" | "yes"
    )
}

fn read_file_path<F: Fn(&String) -> Result<Ret, io::Error>, Ret>(
    stdout: &mut StandardStream,
    fun: F,
) -> Option<Ret> {
    let mut path = String::new();
    loop {
        if !read_line_to(stdout, b"File path: ", &mut path) || path.is_empty() {
            return None;
        }
        match fun(&path) {
            Ok(v) => break Some(v),
            Err(e) => write_error!(stdout, "Error", "Error open {}: {}", path, e),
        }
        let _ = stdout.reset();
    }
}

pub fn read_reader(stdout: &mut StandardStream) -> Option<impl Read> {
    read_file_path(stdout, |x| File::open(x))
}

pub fn read_writer(stdout: &mut StandardStream) -> Option<impl Write> {
    read_file_path(stdout, |x| File::create(x))
}
