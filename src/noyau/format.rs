// src/noyau/format.rs
//
// Affichage d’un résultat :
// - partie fractionnaire nulle => entier exact, sans point (via BigInt, pas de borne i64)
// - sinon => décimal le plus court qui se relit à l’identique
// - non fini => inf / -inf / nan

use num_bigint::BigInt;
use num_traits::{FromPrimitive, Zero};

pub fn format_resultat(v: f64) -> String {
    if v.is_nan() {
        return "nan".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    if v.fract().is_zero() {
        // -0.0 tombe ici aussi : BigInt n’a pas de zéro signé
        if let Some(n) = BigInt::from_f64(v) {
            return n.to_string();
        }
    }

    v.to_string()
}
