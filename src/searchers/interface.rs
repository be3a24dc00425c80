use crate::checkers::signature::Signature;
use crate::cipher::KeyCandidate;

///! The Interface defines what the struct for each searcher looks like
pub struct Searcher<Type> {
    /// The English name of the searcher.
    pub name: &'static str,
    /// we don't use the Type, so we use PhantomData to mark it!
    pub phantom: std::marker::PhantomData<Type>,
}

/// All searchers share the same Search trait
/// so the CLI can pick one at runtime and call `.search()` on it.
pub trait Search {
    /// This function generates a new searcher
    fn new() -> Self
    where
        Self: Sized;
    /// Looks for the first key in the search order that decrypts the
    /// ciphertext header into `signature`.
    ///
    /// Running out of keys is an expected outcome, not an error, so this
    /// returns `None` rather than failing.
    fn search(&self, ciphertext: &[u8], signature: &Signature) -> Option<KeyCandidate>;
    /// Get the name of the current searcher
    fn get_name(&self) -> &str;
}
