use serde::{Deserialize, Serialize};

/// Everything we know about one classified number. Serialized verbatim as the
/// 200 response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Classification {
    pub number: i64,
    pub is_prime: bool,
    pub is_perfect: bool,
    /// Ordered tags: "armstrong" when applicable, then "even" or "odd".
    pub properties: Vec<String>,
    pub digit_sum: u32,
    pub fun_fact: String,
}
