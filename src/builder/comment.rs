//! Comments, written before the problem line of a formula.
//!
//! A comment is either a string, split into lines on the [configured newline](crate::config::Config::newline), or some collection of strings, each taken as a line.
//! Lines are written as given, prefixed with `c `.
//!
//! ```rust
//! # use otter_cnf::builder::Builder;
//! let mut from_string = Builder::default();
//! from_string.add_comment("line1\nline2");
//!
//! let mut from_lines = Builder::default();
//! from_lines.add_comment(["line1", "line2"]);
//!
//! assert_eq!(from_string.build(), from_lines.build());
//! assert_eq!(from_lines.build(), "c line1\nc line2\np cnf 0 0");
//! ```

use crate::{builder::Builder, misc::log::targets};

/// Something which may be read as the lines of a comment.
pub trait Comment {
    /// The lines of the comment, with `newline` used to split a single string.
    fn into_lines(self, newline: &str) -> Vec<String>;
}

/// Splits `text` on `newline`, with an empty `newline` leaving `text` whole.
fn split_lines(text: &str, newline: &str) -> Vec<String> {
    match newline.is_empty() {
        true => vec![text.to_string()],
        false => text.split(newline).map(|line| line.to_string()).collect(),
    }
}

impl Comment for &str {
    fn into_lines(self, newline: &str) -> Vec<String> {
        split_lines(self, newline)
    }
}

impl Comment for String {
    fn into_lines(self, newline: &str) -> Vec<String> {
        split_lines(&self, newline)
    }
}

impl Comment for &String {
    fn into_lines(self, newline: &str) -> Vec<String> {
        split_lines(self, newline)
    }
}

impl Comment for Vec<String> {
    fn into_lines(self, _newline: &str) -> Vec<String> {
        self
    }
}

impl Comment for Vec<&str> {
    fn into_lines(self, _newline: &str) -> Vec<String> {
        self.into_iter().map(|line| line.to_string()).collect()
    }
}

impl Comment for &[&str] {
    fn into_lines(self, _newline: &str) -> Vec<String> {
        self.iter().map(|line| line.to_string()).collect()
    }
}

impl Comment for &[String] {
    fn into_lines(self, _newline: &str) -> Vec<String> {
        self.to_vec()
    }
}

impl<const N: usize> Comment for [&str; N] {
    fn into_lines(self, _newline: &str) -> Vec<String> {
        self.iter().map(|line| line.to_string()).collect()
    }
}

impl Builder {
    /// Adds a comment, to be written as one or more lines before the problem line.
    ///
    /// Comments are written in the order added, and are not escaped.
    pub fn add_comment(&mut self, comment: impl Comment) {
        let lines = comment.into_lines(&self.config.newline.value);
        log::trace!(target: targets::BUILDER, "Added {} comment lines", lines.len());
        self.comments.extend(lines);
    }
}
