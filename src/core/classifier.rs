use crate::core::number::{armstrong_fact, digit_sum, is_armstrong, is_perfect, is_prime, parity};
use crate::core::{Classification, FactProvider, Result};
use crate::utils::validation::parse_number;

/// Stateless classification service, generic over where facts come from.
pub struct NumberClassifier<F: FactProvider> {
    facts: F,
}

impl<F: FactProvider> NumberClassifier<F> {
    pub fn new(facts: F) -> Self {
        Self { facts }
    }

    /// Validates the raw input and assembles the full classification.
    ///
    /// Armstrong numbers get their fact synthesized locally; everything else
    /// goes through the provider. At most one outbound lookup per call, and
    /// the only error is invalid input.
    pub async fn classify(&self, raw: &str) -> Result<Classification> {
        let n = parse_number(raw)?;

        let mut properties = Vec::new();
        if is_armstrong(n) {
            properties.push("armstrong".to_string());
        }
        properties.push(parity(n).to_string());

        let fun_fact = if is_armstrong(n) {
            armstrong_fact(n)
        } else {
            self.facts.fetch(n).await
        };

        Ok(Classification {
            number: n,
            is_prime: is_prime(n),
            is_perfect: is_perfect(n),
            properties,
            digit_sum: digit_sum(n),
            fun_fact,
        })
    }
}
