use crate::core::signs::{self, SIGNS};
use crate::domain::model::{Compatibility, ZodiacId, ZodiacSign};

/// Classifies how `a` relates to `b`, looking only at `a`'s record.
pub fn compatibility(a: ZodiacId, b: ZodiacId) -> Compatibility {
    classify(signs::sign(a), b)
}

/// String-keyed lookup on the exact table ids; anything else, including a
/// differently cased id, gives `Compatibility::Unknown`.
pub fn check_compatibility(a: &str, b: &str) -> Compatibility {
    match (a.parse::<ZodiacId>(), b.parse::<ZodiacId>()) {
        (Ok(a), Ok(b)) => compatibility(a, b),
        _ => Compatibility::Unknown,
    }
}

fn classify(sign: &ZodiacSign, other: ZodiacId) -> Compatibility {
    let c = &sign.compatibility;
    if c.best.contains(&other) {
        Compatibility::VeryGood
    } else if c.good.contains(&other) {
        Compatibility::Good
    } else if c.challenging.contains(&other) {
        Compatibility::NeedsCaution
    } else {
        Compatibility::Neutral
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AsymmetricPair {
    pub a: ZodiacId,
    pub b: ZodiacId,
    pub forward: Compatibility,
    pub backward: Compatibility,
}

/// Pairs (a < b) whose classification differs by direction.
pub fn asymmetric_pairs_in(table: &[ZodiacSign]) -> Vec<AsymmetricPair> {
    let mut pairs = Vec::new();

    for a in table {
        for b in table.iter().filter(|b| b.id > a.id) {
            let forward = classify(a, b.id);
            let backward = classify(b, a.id);
            if forward != backward {
                pairs.push(AsymmetricPair {
                    a: a.id,
                    b: b.id,
                    forward,
                    backward,
                });
            }
        }
    }

    pairs
}

pub fn asymmetric_pairs() -> Vec<AsymmetricPair> {
    asymmetric_pairs_in(&SIGNS)
}
