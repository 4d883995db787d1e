//! # Pivot rules
//!
//! Strategies for moving from basis to basis in the primal Simplex method.
use log::debug;

use crate::algorithm::two_phase::tableau::{BasisChangeComputationInfo, Tableau};
use crate::algorithm::two_phase::tableau::kind::Kind;
use crate::data::number_types::traits::Real;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. This decision
/// is made independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule<F: Real> {
    /// Create a new instance.
    fn new<K: Kind>(tableau: &Tableau<F, K>) -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// A column that is not in the basis with a negative relative cost (beyond the tolerance),
    /// together with that cost. If there is no such column, the current basic feasible solution is
    /// optimal.
    fn select_primal_pivot_column<K: Kind>(&mut self, tableau: &Tableau<F, K>) -> Option<(usize, F)>;

    /// Update the state of the rule after a basis change.
    fn after_basis_update(&mut self, _info: &BasisChangeComputationInfo<F>) {
    }
}

/// Candidate columns: non basic, not artificial and with a negative relative cost.
fn profitable_columns<F: Real, K: Kind>(tableau: &Tableau<F, K>) -> impl Iterator<Item = (usize, F)> + '_ {
    (tableau.start_index()..tableau.nr_columns())
        .filter(move |&column| !tableau.is_in_basis(column))
        .map(move |column| (column, tableau.relative_cost(column)))
        .filter(move |&(_, cost)| tableau.configuration().is_negative(cost))
}

/// The profitable column with the most negative relative cost, lowest index on ties.
fn most_profitable_column<F: Real, K: Kind>(tableau: &Tableau<F, K>) -> Option<(usize, F)> {
    profitable_columns(tableau)
        .fold(None, |best: Option<(usize, F)>, (column, cost)| match best {
            Some((_, best_cost)) if best_cost <= cost => best,
            _ => Some((column, cost)),
        })
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Together with the ratio test breaking ties on the lowest basis column index, this is Bland's
/// rule, which never cycles.
#[derive(Debug)]
pub struct FirstProfitable;
impl<F: Real> PivotRule<F> for FirstProfitable {
    fn new<K: Kind>(_tableau: &Tableau<F, K>) -> Self {
        Self
    }

    fn select_primal_pivot_column<K: Kind>(&mut self, tableau: &Tableau<F, K>) -> Option<(usize, F)> {
        profitable_columns(tableau).next()
    }
}

/// Find the column with the most negative relative cost (Dantzig's rule).
///
/// Ties are broken in favor of the lowest column index.
#[derive(Debug)]
pub struct SteepestDescentAlongVariable;
impl<F: Real> PivotRule<F> for SteepestDescentAlongVariable {
    fn new<K: Kind>(_tableau: &Tableau<F, K>) -> Self {
        Self
    }

    fn select_primal_pivot_column<K: Kind>(&mut self, tableau: &Tableau<F, K>) -> Option<(usize, F)> {
        most_profitable_column(tableau)
    }
}

/// Dantzig's rule until the solution stops moving, Bland's rule from then on.
///
/// After a number of consecutive degenerate pivots (see
/// `Configuration::degenerate_pivot_limit`), the rule switches to `FirstProfitable` for the rest
/// of its lifetime, such that the method terminates.
#[derive(Debug)]
pub struct DantzigWithBlandFallback {
    /// Consecutive degenerate pivots.
    degenerate_pivots: usize,
    limit: usize,
    /// Whether the switch to Bland's rule has happened.
    bland: bool,
}

impl DantzigWithBlandFallback {
    /// Whether Bland's rule is in use.
    pub fn is_using_bland(&self) -> bool {
        self.bland
    }
}

impl<F: Real> PivotRule<F> for DantzigWithBlandFallback {
    fn new<K: Kind>(tableau: &Tableau<F, K>) -> Self {
        let limit = tableau.configuration().degenerate_pivot_limit(tableau.nr_rows(), tableau.nr_columns());

        Self {
            degenerate_pivots: 0,
            limit,
            bland: limit == 0,
        }
    }

    fn select_primal_pivot_column<K: Kind>(&mut self, tableau: &Tableau<F, K>) -> Option<(usize, F)> {
        if self.bland {
            profitable_columns(tableau).next()
        } else {
            most_profitable_column(tableau)
        }
    }

    fn after_basis_update(&mut self, info: &BasisChangeComputationInfo<F>) {
        if self.bland {
            return;
        }

        if info.is_degenerate() {
            self.degenerate_pivots += 1;
            if self.degenerate_pivots >= self.limit {
                debug!("{} consecutive degenerate pivots, switching to Bland's rule", self.degenerate_pivots);
                self.bland = true;
            }
        } else {
            self.degenerate_pivots = 0;
        }
    }
}
