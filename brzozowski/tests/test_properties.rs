use brzozowski::{parse_regex, DerivativeRelation, Regex, RegexMatcher};
use proptest::prelude::*;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

#[ctor::ctor]
fn init() {
    env_logger::init();
}

/// Expressions over `a` and `b`.
fn regex_strategy() -> impl Strategy<Value = Regex<char>> {
    let leaf = prop_oneof![
        Just(Regex::Empty),
        Just(Regex::Epsilon),
        prop::sample::select(vec!['a', 'b']).prop_map(Regex::Token),
    ];

    leaf.prop_recursive(4, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Regex::union(l, r)),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Regex::concatenation(l, r)),
            inner.prop_map(Regex::kleene_star),
        ]
    })
}

/// The same language in the syntax of the `regex` crate.
fn to_reference(regex: &Regex<char>) -> String {
    match regex {
        // a class that matches no character
        Regex::Empty => r"[^\x00-\x{10FFFF}]".to_string(),
        Regex::Epsilon => "(?:)".to_string(),
        Regex::Token(c) => regex::escape(&c.to_string()),
        Regex::Union(l, r) => format!("(?:{}|{})", to_reference(l), to_reference(r)),
        Regex::Concatenation(l, r) => format!("(?:{}{})", to_reference(l), to_reference(r)),
        Regex::KleeneStar(i) => format!("(?:{})*", to_reference(i)),
    }
}

fn reference_matches(regex: &Regex<char>, word: &str) -> bool {
    let reference = regex::Regex::new(&format!("^(?:{})$", to_reference(regex))).unwrap();
    reference.is_match(word)
}

// builds an equal tree that shares no nodes with the input
fn rebuild(regex: &Regex<char>) -> Regex<char> {
    match regex {
        Regex::Empty => Regex::Empty,
        Regex::Epsilon => Regex::Epsilon,
        Regex::Token(c) => Regex::Token(*c),
        Regex::Union(l, r) => Regex::union(rebuild(l), rebuild(r)),
        Regex::Concatenation(l, r) => Regex::concatenation(rebuild(l), rebuild(r)),
        Regex::KleeneStar(i) => Regex::kleene_star(rebuild(i)),
    }
}

// leaves become ∅ or ε according to their nullability, composite nodes keep their variant
fn has_delta_shape(regex: &Regex<char>, delta: &Regex<char>) -> bool {
    match (regex, delta) {
        (Regex::Empty, Regex::Empty) => true,
        (Regex::Epsilon, Regex::Epsilon) => true,
        (Regex::Token(_), Regex::Empty) => true,
        (Regex::KleeneStar(_), Regex::Epsilon) => true,
        (Regex::Union(l1, r1), Regex::Union(l2, r2))
        | (Regex::Concatenation(l1, r1), Regex::Concatenation(l2, r2)) => {
            has_delta_shape(l1, l2) && has_delta_shape(r1, r2)
        }
        _ => false,
    }
}

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

proptest! {
    #[test]
    fn derivative_then_nullable_is_membership(regex in regex_strategy(), word in "[ab]{0,5}") {
        let expected = reference_matches(&regex, &word);

        let tokens: Vec<char> = word.chars().collect();
        let derived = Arc::new(regex.clone()).derive_word(&tokens);
        prop_assert_eq!(derived.is_nullable(), expected);

        let relation = DerivativeRelation::new("generated", regex);
        prop_assert_eq!(relation.matcher().accepts(word.chars()), expected);
    }

    #[test]
    fn printed_expressions_parse_back(regex in regex_strategy()) {
        prop_assert_eq!(parse_regex(regex.to_string()).unwrap(), regex);
    }

    #[test]
    fn delta_shape(regex in regex_strategy()) {
        let delta = regex.delta();
        prop_assert!(has_delta_shape(&regex, &delta));
        prop_assert_eq!(delta.is_nullable(), regex.is_nullable());
    }

    #[test]
    fn structural_equality(regex in regex_strategy(), word in "[ab]{0,3}") {
        let copy = rebuild(&regex);
        prop_assert_eq!(&copy, &regex);
        prop_assert_eq!(hash_of(&copy), hash_of(&regex));

        let tokens: Vec<char> = word.chars().collect();
        let left = Arc::new(regex).derive_word(&tokens);
        let right = Arc::new(copy).derive_word(&tokens);
        prop_assert_eq!(hash_of(&left), hash_of(&right));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn changing_a_leaf_breaks_equality(regex in regex_strategy()) {
        let changed = Regex::union(regex.clone(), Regex::Token('c'));
        let other = Regex::union(regex, Regex::Token('d'));
        prop_assert_ne!(changed, other);
    }
}
