/// Which segment ring a dart landed in.
///
/// Carried explicitly on every throw so the display layer never has to
/// guess whether a 60 was a triple 20 (a bare single 60 does not exist,
/// but the numeric value alone cannot prove that).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Multiplier {
    Single,
    Double,
    Triple,
}

/// A single dart as entered by the player.
///
/// Valid combinations are singles 1-20, doubles of 1-20, triples of 1-20,
/// the outer bull (25, single) and the double bull (50, double). The
/// notation parser is the only place that builds throws from text; the
/// constructors below exist for the rest of the crate and for tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Throw {
    pub value: u16,
    pub multiplier: Multiplier,
}

impl Throw {
    pub fn single(n: u16) -> Self {
        Self {
            value: n,
            multiplier: Multiplier::Single,
        }
    }

    pub fn double(n: u16) -> Self {
        Self {
            value: n * 2,
            multiplier: Multiplier::Double,
        }
    }

    pub fn triple(n: u16) -> Self {
        Self {
            value: n * 3,
            multiplier: Multiplier::Triple,
        }
    }

    /// The outer bull ring, worth 25. Not a double.
    pub fn outer_bull() -> Self {
        Self::single(25)
    }

    /// The inner bull, worth 50. Counts as a finishing double.
    pub fn double_bull() -> Self {
        Self {
            value: 50,
            multiplier: Multiplier::Double,
        }
    }

    /// True for D1..D20 and the double bull; only these can end a checkout.
    pub fn is_double(&self) -> bool {
        self.multiplier == Multiplier::Double
    }
}
