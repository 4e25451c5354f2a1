pub mod error;
pub mod random;

pub use error::Error;
pub use random::{RandomGenerator, SlugPolicy};

use linkhop_core::Slug;

/// Trait for generating slugs.
///
/// Implementations are pure generators that don't interact with storage.
/// Uniqueness is enforced by the repository; a generator only has to make
/// collisions unlikely.
pub trait Generator: Send + Sync + 'static {
    type Output: Into<Slug>;

    /// Generates a candidate slug.
    fn generate(&self) -> Self::Output;
}
