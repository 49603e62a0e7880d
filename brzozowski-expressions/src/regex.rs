use std::collections::HashSet;
use std::fmt::{Display, Formatter};
use std::hash::Hash;
use std::sync::Arc;

/// A regular expression over tokens of type `T`.
///
/// Trees are immutable: every operation builds new nodes and shares the operands it does not
/// change. Equality and hashing are structural, so two independently built trees with the same
/// shape and equal tokens are the same value. Callers that deduplicate states rely on this.
#[derive(Hash, Debug, Clone, PartialEq, Eq)]
pub enum Regex<T> {
    /// The empty language, matches nothing.
    Empty,
    /// The language containing only the empty sequence.
    Epsilon,
    /// Exactly the one-token sequence `[t]`.
    Token(T),
    Union(Arc<Regex<T>>, Arc<Regex<T>>),
    Concatenation(Arc<Regex<T>>, Arc<Regex<T>>),
    KleeneStar(Arc<Regex<T>>),
}

impl<T> Regex<T> {
    pub fn union(l: impl Into<Arc<Regex<T>>>, r: impl Into<Arc<Regex<T>>>) -> Self {
        Regex::Union(l.into(), r.into())
    }

    pub fn concatenation(l: impl Into<Arc<Regex<T>>>, r: impl Into<Arc<Regex<T>>>) -> Self {
        Regex::Concatenation(l.into(), r.into())
    }

    pub fn kleene_star(inner: impl Into<Arc<Regex<T>>>) -> Self {
        Regex::KleeneStar(inner.into())
    }

    /// The display glyph of the outermost variant.
    pub fn symbol(&self) -> &'static str {
        match self {
            Regex::Empty => "∅",
            Regex::Epsilon => "ε",
            Regex::Token(_) => "τ",
            Regex::Union(_, _) => "|",
            Regex::Concatenation(_, _) => "∘",
            Regex::KleeneStar(_) => "*",
        }
    }

    /// The operands of this node, in order.
    pub fn operands(&self) -> Vec<&Arc<Regex<T>>> {
        match self {
            Regex::Empty | Regex::Epsilon | Regex::Token(_) => vec![],
            Regex::Union(l, r) | Regex::Concatenation(l, r) => vec![l, r],
            Regex::KleeneStar(i) => vec![i],
        }
    }

    /// Number of nodes in the tree. Shared subtrees are counted once per occurrence.
    pub fn size(&self) -> usize {
        match self {
            Regex::Empty | Regex::Epsilon | Regex::Token(_) => 1,
            Regex::Union(l, r) | Regex::Concatenation(l, r) => 1 + l.size() + r.size(),
            Regex::KleeneStar(i) => 1 + i.size(),
        }
    }

    /// Returns true if this expression denotes the empty language.
    ///
    /// A configuration whose expression is empty can never accept again, whatever input follows.
    pub fn is_empty_language(&self) -> bool {
        match self {
            Regex::Empty => true,
            Regex::Epsilon => false,
            Regex::Token(_) => false,
            Regex::Union(l, r) => l.is_empty_language() && r.is_empty_language(),
            Regex::Concatenation(l, r) => l.is_empty_language() || r.is_empty_language(),
            Regex::KleeneStar(_) => false,
        }
    }
}

impl<T: Hash + Eq + Clone> Regex<T> {
    /// All tokens that occur in this expression.
    pub fn alphabet(&self) -> HashSet<T> {
        let mut alphabet = HashSet::new();
        self.search_alphabet(&mut alphabet);
        alphabet
    }

    fn search_alphabet(&self, alphabet: &mut HashSet<T>) {
        match self {
            Regex::Empty => {}
            Regex::Epsilon => {}
            Regex::Token(t) => {
                alphabet.insert(t.clone());
            }
            Regex::KleeneStar(i) => i.search_alphabet(alphabet),
            Regex::Union(l, r) | Regex::Concatenation(l, r) => {
                l.search_alphabet(alphabet);
                r.search_alphabet(alphabet);
            }
        }
    }
}

// prints in the syntax accepted by the reader, fully parenthesized
impl<T: Display> Display for Regex<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Regex::Empty => write!(f, "∅"),
            Regex::Epsilon => write!(f, "ε"),
            Regex::Token(t) => write!(f, "{t}"),
            Regex::Union(a, b) => write!(f, "({a}|{b})"),
            Regex::Concatenation(a, b) => write!(f, "({a}.{b})"),
            Regex::KleeneStar(r) => write!(f, "({r})*"),
        }
    }
}
