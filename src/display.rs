use crate::throw::{Multiplier, Throw};
use itertools::Itertools;

/// Render a throw sequence for display, e.g. `T20 + S20 + D20`.
pub fn format_throws(throws: &[Throw]) -> String {
    throws.iter().map(label).join(" + ")
}

/// Render a throw sequence in the compact lowercase form the parser
/// accepts, e.g. `t20s20d20`. Because every throw carries its multiplier,
/// parsing this string reproduces the sequence exactly.
pub fn to_notation(throws: &[Throw]) -> String {
    throws.iter().map(notation).collect()
}

fn label(throw: &Throw) -> String {
    match (throw.value, throw.multiplier) {
        (50, Multiplier::Double) => "DB".to_string(),
        (25, Multiplier::Single) => "OB".to_string(),
        (v, Multiplier::Double) => format!("D{}", v / 2),
        (v, Multiplier::Triple) => format!("T{}", v / 3),
        (v, Multiplier::Single) => v.to_string(),
    }
}

fn notation(throw: &Throw) -> String {
    match (throw.value, throw.multiplier) {
        (50, Multiplier::Double) => "db".to_string(),
        (25, Multiplier::Single) => "ob".to_string(),
        (v, Multiplier::Double) => format!("d{}", v / 2),
        (v, Multiplier::Triple) => format!("t{}", v / 3),
        (v, Multiplier::Single) => format!("s{v}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse;

    #[test]
    fn test_format_classic_checkout() {
        let throws = [Throw::triple(20), Throw::single(20), Throw::double(20)];
        assert_eq!(format_throws(&throws), "T20 + 20 + D20");
    }

    #[test]
    fn test_format_bulls() {
        let throws = [Throw::triple(18), Throw::double_bull()];
        assert_eq!(format_throws(&throws), "T18 + DB");

        let throws = [Throw::outer_bull(), Throw::double(20)];
        assert_eq!(format_throws(&throws), "OB + D20");
    }

    #[test]
    fn test_format_single_throw() {
        assert_eq!(format_throws(&[Throw::double(16)]), "D16");
    }

    #[test]
    fn test_format_empty() {
        assert_eq!(format_throws(&[]), "");
    }

    #[test]
    fn test_d25_formats_as_double_bull() {
        let throws = parse("d25").unwrap();
        assert_eq!(format_throws(&throws), "DB");
    }

    #[test]
    fn test_triple_label_reads_multiplier_not_value() {
        // value 60 can only be a triple 20; the multiplier says so directly
        assert_eq!(format_throws(&[Throw::triple(20)]), "T20");
        // value 15 is ambiguous by value alone: T5 and a plain 15 both score it
        assert_eq!(format_throws(&[Throw::triple(5)]), "T5");
        assert_eq!(format_throws(&[Throw::single(15)]), "15");
    }

    #[test]
    fn test_notation_round_trip() {
        for line in ["t20s20d20", "t18db", "obd20", "s5t15d8", "d25"] {
            let throws = parse(line).unwrap();
            assert_eq!(parse(&to_notation(&throws)).unwrap(), throws);
        }
    }

    #[test]
    fn test_notation_is_canonical_compact_form() {
        let throws = [Throw::triple(20), Throw::single(20), Throw::double(20)];
        assert_eq!(to_notation(&throws), "t20s20d20");

        let throws = [Throw::triple(18), Throw::double_bull()];
        assert_eq!(to_notation(&throws), "t18db");

        assert_eq!(to_notation(&[Throw::outer_bull()]), "ob");
    }
}
