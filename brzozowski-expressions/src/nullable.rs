use crate::Regex;
use std::sync::Arc;

impl<T> Regex<T> {
    /// Returns true if the language of this expression contains the empty sequence.
    pub fn is_nullable(&self) -> bool {
        match self {
            Regex::Empty => false,
            Regex::Epsilon => true,
            Regex::Token(_) => false,
            Regex::Union(l, r) => l.is_nullable() || r.is_nullable(),
            Regex::Concatenation(l, r) => l.is_nullable() && r.is_nullable(),
            Regex::KleeneStar(_) => true,
        }
    }

    /// The tree-shaped nullability of this expression, as used by the derivative of a
    /// concatenation.
    ///
    /// Leaves become [`Regex::Empty`] or [`Regex::Epsilon`], a Kleene star becomes
    /// [`Regex::Epsilon`], and unions and concatenations keep their shape. The result denotes
    /// `{ε}` exactly when this expression is nullable and `∅` otherwise, but it is not collapsed
    /// to a single leaf.
    pub fn delta(&self) -> Arc<Regex<T>> {
        match self {
            Regex::Empty => Regex::Empty.into(),
            Regex::Epsilon => Regex::Epsilon.into(),
            Regex::Token(_) => Regex::Empty.into(),
            Regex::Union(l, r) => Regex::Union(l.delta(), r.delta()).into(),
            Regex::Concatenation(l, r) => Regex::Concatenation(l.delta(), r.delta()).into(),
            Regex::KleeneStar(_) => Regex::Epsilon.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{parse_regex, Regex};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn delta_of(input: &str) -> Arc<Regex<char>> {
        parse_regex(input).unwrap().delta()
    }

    fn parsed(input: &str) -> Arc<Regex<char>> {
        Arc::new(parse_regex(input).unwrap())
    }

    #[test]
    fn nullable() {
        assert!(!parse_regex("∅").unwrap().is_nullable());
        assert!(parse_regex("ε").unwrap().is_nullable());
        assert!(!parse_regex("a").unwrap().is_nullable());
        assert!(parse_regex("a*").unwrap().is_nullable());
        assert!(parse_regex("∅*").unwrap().is_nullable());

        assert!(parse_regex("ε|b").unwrap().is_nullable());
        assert!(parse_regex("a|ε").unwrap().is_nullable());
        assert!(!parse_regex("a|b").unwrap().is_nullable());

        assert!(!parse_regex("aε").unwrap().is_nullable());
        assert!(!parse_regex("εb").unwrap().is_nullable());
        assert!(parse_regex("a*b*").unwrap().is_nullable());
        assert!(parse_regex("(a|ε)(b|ε)").unwrap().is_nullable());
    }

    #[test]
    fn delta_leaves() {
        assert_eq!(delta_of("∅"), parsed("∅"));
        assert_eq!(delta_of("ε"), parsed("ε"));
        assert_eq!(delta_of("a"), parsed("∅"));
        assert_eq!(delta_of("a*"), parsed("ε"));
        assert_eq!(delta_of("(a|b)*"), parsed("ε"));
    }

    #[test]
    fn delta_keeps_shape() {
        assert_eq!(delta_of("a|b"), parsed("∅|∅"));
        assert_eq!(delta_of("ε|b"), parsed("ε|∅"));
        assert_eq!(delta_of("a|ε"), parsed("∅|ε"));

        assert_eq!(delta_of("ab"), parsed("∅∅"));
        assert_eq!(delta_of("εb"), parsed("ε∅"));
        assert_eq!(delta_of("aε"), parsed("∅ε"));

        // not collapsed to a single leaf, even when the language is {ε}
        assert_ne!(delta_of("ε|ε"), parsed("ε"));
    }

    #[test]
    fn delta_agrees_with_nullable() {
        for input in ["a", "ε", "∅", "a*", "ab", "a*b*", "(a|ε)b", "(a|ε)(b*|c)", "a|b|c*"] {
            let regex = parse_regex(input).unwrap();
            let delta = regex.delta();
            assert_eq!(
                delta.is_nullable(),
                regex.is_nullable(),
                "delta of {input} disagrees with nullable"
            );
            // the delta never contains tokens
            assert!(delta.alphabet().is_empty());
        }
    }
}
