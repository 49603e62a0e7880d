use crate::Regex;
use std::sync::Arc;

impl<T: PartialEq> Regex<T> {
    /// Applies a token to a regex. The result matches exactly the suffixes of the words of this
    /// regex that start with `token`, so `ab` derived by `a` denotes the same language as `b`.
    ///
    /// The result is not simplified: it is the literal right-hand side of the derivative
    /// equations, and repeated derivation grows the tree.
    pub fn derive(&self, token: &T) -> Arc<Regex<T>> {
        match self {
            // D ∅ t = ∅
            Regex::Empty => Regex::Empty.into(),
            // D ε t = ∅
            Regex::Epsilon => Regex::Empty.into(),
            // D c c = ε
            // D c t = ∅
            Regex::Token(c) => {
                if c == token {
                    Regex::Epsilon.into()
                } else {
                    Regex::Empty.into()
                }
            }
            // D (l | r) t = D l t | D r t
            Regex::Union(l, r) => Regex::Union(l.derive(token), r.derive(token)).into(),
            // D (l r) t = (D l t) r | (Δ l) (D r t)
            Regex::Concatenation(l, r) => Regex::Union(
                Regex::Concatenation(l.derive(token), r.clone()).into(),
                Regex::Concatenation(l.delta(), r.derive(token)).into(),
            )
            .into(),
            // D l* t = (D l t) l*
            Regex::KleeneStar(l) => {
                Regex::Concatenation(l.derive(token), Regex::KleeneStar(l.clone()).into()).into()
            }
        }
    }

    /// Derives by every token of `word` in turn.
    pub fn derive_word<'a>(
        self: &Arc<Self>,
        word: impl IntoIterator<Item = &'a T>,
    ) -> Arc<Regex<T>>
    where
        T: 'a,
    {
        word.into_iter()
            .fold(self.clone(), |regex, token| regex.derive(token))
    }
}
