//! Closed-form solution of a single count's simultaneous-move game.
//!
//! - [`Payoff`] — the bilinear payoff `a·t·s + b·(t+s) + c`
//! - [`Equilibrium`] — game value and shared mixing probability

mod equilibrium;
mod payoff;

pub use equilibrium::*;
pub use payoff::*;
