use crate::error::Error;
use crate::Generator;
use linkhop_core::Slug;
use rand::Rng;
use typed_builder::TypedBuilder;

/// The 64-symbol alphabet used by default: letters, digits, `_` and `-`.
pub const DEFAULT_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";
pub const DEFAULT_LENGTH: usize = 10;
pub const MAX_LENGTH: usize = 64;

/// Length and alphabet of generated slugs.
#[derive(Debug, Clone, TypedBuilder)]
pub struct SlugPolicy {
    #[builder(default = DEFAULT_LENGTH)]
    pub length: usize,
    #[builder(default = DEFAULT_ALPHABET.to_string(), setter(into))]
    pub alphabet: String,
}

impl Default for SlugPolicy {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl SlugPolicy {
    /// Checks the policy and returns the deduplicated alphabet.
    ///
    /// Symbols must be unreserved URL characters (RFC 3986 section 2.3) so a
    /// slug never needs percent-encoding in a path segment.
    fn validate(&self) -> Result<Vec<u8>, Error> {
        if self.length == 0 || self.length > MAX_LENGTH {
            return Err(Error::InvalidLength {
                length: self.length,
                max_length: MAX_LENGTH,
            });
        }

        let mut symbols: Vec<u8> = Vec::with_capacity(self.alphabet.len());
        for symbol in self.alphabet.chars() {
            if !is_unreserved(symbol) {
                return Err(Error::UnsafeSymbol { symbol });
            }
            let byte = symbol as u8;
            if !symbols.contains(&byte) {
                symbols.push(byte);
            }
        }

        if symbols.len() < 2 {
            return Err(Error::AlphabetTooSmall {
                distinct: symbols.len(),
            });
        }

        Ok(symbols)
    }
}

fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~')
}

/// Draws slugs uniformly from the policy alphabet.
///
/// Uses the thread-local CSPRNG (`rand::rng()`, ChaCha12 seeded from the OS),
/// so slugs are unguessable as well as unlikely to collide.
#[derive(Debug, Clone)]
pub struct RandomGenerator {
    symbols: Vec<u8>,
    length: usize,
}

impl RandomGenerator {
    pub fn new(policy: SlugPolicy) -> Result<Self, Error> {
        let symbols = policy.validate()?;
        Ok(Self {
            symbols,
            length: policy.length,
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn next_slug(&self) -> Slug {
        let mut rng = rand::rng();
        let slug: String = (0..self.length)
            .map(|_| self.symbols[rng.random_range(0..self.symbols.len())] as char)
            .collect();
        Slug::new_unchecked(slug)
    }
}

impl Default for RandomGenerator {
    fn default() -> Self {
        Self {
            symbols: DEFAULT_ALPHABET.as_bytes().to_vec(),
            length: DEFAULT_LENGTH,
        }
    }
}

impl Generator for RandomGenerator {
    type Output = Slug;

    fn generate(&self) -> Self::Output {
        self.next_slug()
    }
}
