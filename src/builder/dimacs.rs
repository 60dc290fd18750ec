use crate::{
    builder::{Builder, Numbering},
    misc::log::targets::{self},
    structures::variable::Variable,
    types::err::{self},
};

use std::{fmt::Write as FmtWrite, io::Write};

/// Passes writes through to some [io writer](std::io::Write), holding on to the first error.
struct IoAdapter<W: Write> {
    inner: W,
    error: Option<std::io::Error>,
}

impl<W: Write> std::fmt::Write for IoAdapter<W> {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        match self.inner.write_all(s.as_bytes()) {
            Ok(()) => Ok(()),
            Err(e) => {
                self.error = Some(e);
                Err(std::fmt::Error)
            }
        }
    }
}

impl Builder {
    /// The numbering of atoms used to write the formula, made afresh from the clauses added.
    pub fn numbering(&self) -> Numbering {
        Numbering::from_clauses(&self.clauses, self.fresh_atom as usize, self.has_sentinels())
    }

    /// The formula of the builder, in DIMACS form.
    ///
    /// Lines are joined by the [configured newline](crate::config::Config::newline), without a newline after the last line.
    /// In order, the lines are:
    /// - Each comment, as `c <comment>`.
    /// - If [variable_names](crate::config::Config::variable_names) is set, `c <number> <name>` for each numbered atom.
    /// - The problem line `p cnf <atoms> <clauses>`, counting only numbered atoms.
    /// - If some clause contains a sentinel, the unit clauses `1 0` and `-2 0` fixing the sentinels.
    /// - Each clause, as the numbers of its literals (negative, if negated) followed by `0`.
    ///
    /// The builder is unchanged, and a build is determined by what has been added to the builder.
    ///
    /// ```rust
    /// # use otter_cnf::builder::Builder;
    /// # use otter_cnf::constraints;
    /// let mut builder = Builder::default();
    /// let p = builder.fresh_or_max_variable("p");
    ///
    /// builder.add_comment("An empty clause, and a tautology.");
    /// assert!(builder.add_clause_set(&constraints::or(&[])).is_ok());
    /// assert!(builder.add_clause_set(&constraints::or(&[p, -p])).is_ok());
    ///
    /// assert_eq!(builder.build(), "c An empty clause, and a tautology.\np cnf 1 2\n0\n1 -1 0");
    /// assert_eq!(builder.build(), builder.build());
    /// ```
    pub fn build(&self) -> String {
        let mut dimacs = String::new();
        let rendered = self.render(&mut dimacs);
        // Writes to a string do not fail, and every atom of an added clause is numbered.
        debug_assert!(rendered.is_ok());
        dimacs
    }

    /// Writes the formula of the builder to `writer`, exactly as [build](Builder::build).
    pub fn write_dimacs(&self, writer: impl Write) -> Result<(), err::ErrorKind> {
        let mut adapter = IoAdapter {
            inner: writer,
            error: None,
        };

        match self.render(&mut adapter) {
            Ok(()) => {
                adapter.inner.flush()?;
                Ok(())
            }
            Err(_) => match adapter.error {
                Some(e) => Err(err::ErrorKind::from(e)),
                None => Err(err::ErrorKind::Write(std::io::ErrorKind::Other)),
            },
        }
    }

    fn render(&self, out: &mut impl FmtWrite) -> std::fmt::Result {
        let newline = self.config.newline.value.as_str();
        let numbering = self.numbering();

        log::debug!(target: targets::DIMACS, "Writing {} atoms and {} clauses", numbering.count(), self.clauses.len());
        debug_assert_eq!(numbering.count(), self.referenced.len());

        for comment in &self.comments {
            write!(out, "c {comment}{newline}")?;
        }

        if self.config.variable_names.value {
            for (atom, number) in numbering.iter() {
                let name = self.name_of(atom).unwrap_or_default();
                write!(out, "c {number} {name}{newline}")?;
            }
        }

        let sentinel_units = [Variable::TOP, Variable::BOTTOM.negate()];
        let fixed = match numbering.has_sentinels() {
            true => &sentinel_units[..],
            false => &sentinel_units[..0],
        };

        write!(out, "p cnf {} {}", numbering.count(), fixed.len() + self.clauses.len())?;

        for literal in fixed {
            out.write_str(newline)?;
            match numbering.literal_of(*literal) {
                Some(number) => write!(out, "{number} 0")?,
                None => return Err(std::fmt::Error),
            }
        }

        for clause in &self.clauses {
            out.write_str(newline)?;
            for literal in clause {
                match numbering.literal_of(*literal) {
                    Some(number) => write!(out, "{number} ")?,
                    None => {
                        log::error!(target: targets::DIMACS, "Atom {} missing from the numbering", literal.atom());
                        return Err(std::fmt::Error);
                    }
                }
            }
            out.write_char('0')?;
        }

        Ok(())
    }
}
