use crate::generator::CodeGenerator;
use rand::Rng;
use snip_core::ShortCode;

/// Generates candidates uniformly at random, with replacement, from the
/// tenant's alphabet.
///
/// Draws from the thread-local RNG on every call, so the generator
/// itself carries no state and is freely shared across requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomGenerator;

impl RandomGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl CodeGenerator for RandomGenerator {
    fn generate(&self, alphabet: &str, length: usize) -> ShortCode {
        let chars: Vec<char> = alphabet.chars().collect();
        let mut rng = rand::thread_rng();
        let code: String = (0..length)
            .map(|_| chars[rng.gen_range(0..chars.len())])
            .collect();
        ShortCode::new(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snip_core::DEFAULT_CHARACTERS;

    #[test]
    fn generates_exactly_the_requested_length() {
        let generator = RandomGenerator::new();

        for length in 1..=8 {
            let code = generator.generate(DEFAULT_CHARACTERS, length);
            assert_eq!(code.as_str().chars().count(), length);
        }
    }

    #[test]
    fn only_draws_from_the_alphabet() {
        let generator = RandomGenerator::new();

        for _ in 0..100 {
            let code = generator.generate("AB", 4);
            assert!(code.as_str().chars().all(|c| c == 'A' || c == 'B'));
        }
    }

    #[test]
    fn single_character_alphabet_is_deterministic() {
        let generator = RandomGenerator::new();

        assert_eq!(generator.generate("x", 3).as_str(), "xxx");
    }
}
