use crate::{
    builder::Builder,
    misc::log::targets::{self},
    structures::{
        atom::{Atom, ATOM_MAX},
        clause::Clause,
        clause_set::ClauseSet,
        variable::Variable,
    },
    types::err::{self},
};

impl Builder {
    /// Returns a fresh variable, named `name`.
    ///
    /// The variable is not part of any written formula until it appears in some added clause.
    ///
    /// For a practical alternative, see [fresh_or_max_variable](Builder::fresh_or_max_variable).
    pub fn fresh_variable(
        &mut self,
        name: impl Into<String>,
    ) -> Result<Variable, err::AtomDBError> {
        let atom = self.fresh_atom;
        if atom > ATOM_MAX {
            log::warn!(target: targets::BUILDER, "Atoms exhausted");
            return Err(err::AtomDBError::AtomsExhausted);
        }

        let name = name.into();
        log::trace!(target: targets::BUILDER, "Fresh atom {atom}: {name}");

        self.fresh_atom += 1;
        self.names.push(name);

        Ok(Variable::new(atom, true))
    }

    /// Returns a fresh variable, or a variable over the maximum atom.
    ///
    /// In short, a safe alternative to unwrapping the result of [fresh_variable](Builder::fresh_variable), by defaulting to the maximum limit of an atom.
    /// And, as exhausting the atom limit is unlikely in many applications, this may be preferred.
    ///
    /// Note, once atoms are exhausted every variable returned is the *same* variable, over [ATOM_MAX].
    /// Each such fallback is logged as a warning.
    pub fn fresh_or_max_variable(&mut self, name: impl Into<String>) -> Variable {
        match self.fresh_variable(name) {
            Ok(variable) => variable,
            Err(err::AtomDBError::AtomsExhausted) => {
                log::warn!(target: targets::BUILDER, "Atoms exhausted, falling back to atom {ATOM_MAX}");
                Variable::new(ATOM_MAX, true)
            }
        }
    }

    /// Returns a vector containing a fresh (or maximum) variable for each name, in order.
    pub fn fresh_or_max_variables<N: Into<String>>(
        &mut self,
        names: impl IntoIterator<Item = N>,
    ) -> Vec<Variable> {
        names
            .into_iter()
            .map(|name| self.fresh_or_max_variable(name))
            .collect()
    }

    /// Adds the clauses of a clause set to the end of the formula, in order.
    ///
    /// Adding the same clause set twice adds each clause twice.
    ///
    /// If the set contains some atom not minted by the builder (and not reserved) an error is returned and nothing is added.
    ///
    /// ```rust
    /// # use otter_cnf::builder::Builder;
    /// # use otter_cnf::constraints;
    /// # use otter_cnf::structures::variable::Variable;
    /// # use otter_cnf::types::err::{BuildError, ErrorKind};
    /// let mut builder = Builder::default();
    /// let p = builder.fresh_or_max_variable("p");
    /// let stray = Variable::new(9, true);
    ///
    /// assert_eq!(
    ///     builder.add_clause_set(&constraints::or(&[p, stray])),
    ///     Err(ErrorKind::Build(BuildError::UnknownAtom(9)))
    /// );
    /// assert_eq!(builder.clause_count(), 0);
    /// ```
    pub fn add_clause_set(&mut self, clause_set: &ClauseSet) -> Result<(), err::ErrorKind> {
        if let Some(atom) = clause_set.atoms().find(|atom| !self.is_known(*atom)) {
            log::error!(target: targets::BUILDER, "Clause set over unknown atom {atom}");
            return Err(err::ErrorKind::from(err::BuildError::UnknownAtom(atom)));
        }

        self.referenced.extend(clause_set.atoms());
        self.clauses.extend(clause_set.clauses().iter().cloned());

        log::trace!(target: targets::BUILDER, "Added {} clauses", clause_set.len());

        Ok(())
    }

    /// Adds a single clause to the end of the formula.
    ///
    /// The same as adding a clause set containing only the clause.
    pub fn add_clause(&mut self, clause: impl Clause) -> Result<(), err::ErrorKind> {
        self.add_clause_set(&ClauseSet::from(clause.canonical()))
    }

    /// Whether the atom is reserved or was minted by the builder.
    fn is_known(&self, atom: Atom) -> bool {
        atom < self.fresh_atom
    }
}
