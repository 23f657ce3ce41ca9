use crate::Flake;

/// A minimal interface for generating Flakes.
///
/// Generation is infallible and never blocks: an implementation reads its
/// clock once and draws its random words.
pub trait FlakeGenerator {
    /// Returns a new Flake.
    fn next_flake(&self) -> Flake;
}

impl<G: FlakeGenerator + ?Sized> FlakeGenerator for &G {
    fn next_flake(&self) -> Flake {
        (**self).next_flake()
    }
}
