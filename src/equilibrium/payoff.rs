use crate::*;

/// Expected runs at one count as a bilinear function of both mixes.
///
/// With `t` the probability the pitcher throws a genuine strike and `s` the
/// probability the batter swings, the four pure outcomes are:
///
/// - strike, swing: home run with probability `p`, else a strike
/// - strike, take: called strike
/// - ball, swing: swinging strike
/// - ball, take: ball
///
/// Collecting terms gives `a·t·s + b·(t+s) + c` with
/// `a = 4p + ball − strike − strike·p`, `b = strike − ball`, `c = ball`.
/// The form is symmetric in `t` and `s`, so both players mix identically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Payoff {
    a: Utility,
    b: Utility,
    c: Utility,
}

impl Payoff {
    /// `ball` and `strike` are the values of the counts (or terminal
    /// outcomes) a ball or a strike lead to; `p` is the home-run probability.
    pub fn new(ball: Utility, strike: Utility, p: Probability) -> Self {
        Self {
            a: HOMERUN_RUNS * p + ball - strike - strike * p,
            b: strike - ball,
            c: ball,
        }
    }
    pub fn a(&self) -> Utility {
        self.a
    }
    pub fn b(&self) -> Utility {
        self.b
    }
    pub fn c(&self) -> Utility {
        self.c
    }
    /// Expected runs when the pitcher throws strikes with probability `t`
    /// and the batter swings with probability `s`.
    pub fn eval(&self, t: Probability, s: Probability) -> Utility {
        self.a * t * s + self.b * (t + s) + self.c
    }
    /// Stationary point `-b/a` of the form. NaN or infinite when `a = 0`.
    pub fn stationary(&self) -> Probability {
        -self.b / self.a
    }
}
