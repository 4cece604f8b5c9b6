//! Feasibility of a target layout as a SAT problem.

use std::collections::HashSet;
use std::convert::identity;

use itertools::Itertools;
use log::trace;
use varisat::{CnfFormula, ExtendFormula, Lit, Solver, Var};

use crate::arrangement::POSITIONS;
use crate::card::Card;
use crate::logic::exactly_one;
use crate::mark::Mark;
use crate::solver::SolverFailure;

/// The bipartite matching between grid positions and the cards able to show each position's target mark,
/// expressed as a Boolean satisfiability problem.
///
/// # Logical setup
/// For every position P and every card C able to show the mark wanted at P there is one variable,
/// true iff C is placed at P.
///
/// 1. Every position holds exactly one of its candidate cards.
/// 2. Every card is placed at exactly one of the positions it can serve.
///
/// A model is then a perfect matching, and an inconsistent formula proves no arrangement of the nine
/// cards shows `targets`.
pub struct Matching {
    targets: [Mark; POSITIONS],
}

impl Matching {
    /// The matching for the marks wanted at each position.
    pub fn new(targets: &[Mark; POSITIONS]) -> Self {
        Self { targets: *targets }
    }

    #[inline]
    fn placement_var(position: usize, card: Card) -> Var {
        Var::from_index(position * Card::COUNT + card.index())
    }

    fn formula(&self) -> CnfFormula {
        let mut formula = CnfFormula::new();

        for (position, mark) in self.targets.iter().enumerate() {
            let clauses = exactly_one(
                Card::showing(*mark).iter()
                    .map(|card| Self::placement_var(position, *card))
                    .collect_vec()
            );
            clauses.iter().for_each(|clause| formula.add_clause(clause));
        }

        for card in Card::ALL {
            // no candidates at all leaves a single empty clause, which is unsatisfiable
            let clauses = exactly_one(
                self.targets.iter()
                    .positions(|mark| card.can_show(*mark))
                    .map(|position| Self::placement_var(position, card))
                    .collect_vec()
            );
            clauses.iter().for_each(|clause| formula.add_clause(clause));
        }

        formula
    }

    /// Find some placement of the cards realizing the target marks.
    ///
    /// Returns [`Err`] with [`SolverFailure::Inconsistent`] if none exists.
    pub fn solve(&self) -> Result<[Card; POSITIONS], SolverFailure> {
        let formula = self.formula();
        trace!("matching formula has {} clauses over {} variables", formula.len(), formula.var_count());

        let mut solver = Solver::new();
        solver.add_formula(&formula);
        if !solver.solve().is_ok_and(identity) {
            return Err(SolverFailure::Inconsistent);
        }
        let model: HashSet<Lit> = solver.model().ok_or(SolverFailure::Inconsistent)?.into_iter().collect();

        let mut placement = Card::ALL;
        for (position, mark) in self.targets.iter().enumerate() {
            placement[position] = Card::showing(*mark).into_iter()
                .find(|card| model.contains(&Self::placement_var(position, *card).positive()))
                .ok_or(SolverFailure::NoAssignmentFound)?;
        }

        Ok(placement)
    }
}

/// Whether some arrangement of the nine cards shows `targets`.
pub fn is_matchable(targets: &[Mark; POSITIONS]) -> bool {
    Matching::new(targets).solve().is_ok()
}
