//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le pipeline sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - oracle : évaluateur de référence par niveaux (^ puis * / puis + -, gauche d’abord)
//! - invariant clé : aucune entrée ne fait paniquer le noyau

use std::time::{Duration, Instant};

use super::erreur::ErreurCalcul;
use super::evaluate;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Oracle ------------------------ */

/// Réduit une chaîne `v0 op1 v1 op2 v2 ...` niveau par niveau.
/// Chaque niveau est parcouru de gauche à droite => associativité gauche partout.
fn reduire(mut vals: Vec<f64>, mut ops: Vec<char>) -> Result<f64, ErreurCalcul> {
    for niveau in [&['^'][..], &['*', '/'][..], &['+', '-'][..]] {
        let mut i = 0;
        while i < ops.len() {
            if !niveau.contains(&ops[i]) {
                i += 1;
                continue;
            }
            let (a, b) = (vals[i], vals[i + 1]);
            let r = match ops[i] {
                '+' => a + b,
                '-' => a - b,
                '*' => a * b,
                '/' => {
                    if b == 0.0 {
                        return Err(ErreurCalcul::DivisionParZero);
                    }
                    a / b
                }
                _ => a.powf(b),
            };
            vals[i] = r;
            vals.remove(i + 1);
            ops.remove(i);
        }
    }
    Ok(vals[0])
}

/* ------------------------ Génération d’expressions (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> (String, f64) {
    // petits entiers (0 inclus, utile pour la division par zéro) ou décimaux simples
    let a = rng.pick(10);
    let txt = if rng.pick(4) == 0 {
        format!("{a}.{}", rng.pick(10))
    } else {
        format!("{a}")
    };
    let v = txt.parse::<f64>().unwrap();
    (txt, v)
}

/// Renvoie (texte, valeur attendue).
fn gen_expr(rng: &mut Rng, depth: usize) -> (String, Result<f64, ErreurCalcul>) {
    let n_ops = rng.pick(4) as usize;

    let mut txt = String::new();
    let mut vals = Vec::new();
    let mut ops = Vec::new();
    let mut erreur = None;

    for k in 0..=n_ops {
        if k > 0 {
            // '^' rare et seulement sur petits nombres pour rester fini
            let op = match rng.pick(9) {
                0 | 1 => '+',
                2 | 3 => '-',
                4 | 5 => '*',
                6 | 7 => '/',
                _ => '^',
            };
            txt.push(op);
            ops.push(op);
        }

        if depth > 0 && rng.pick(3) == 0 {
            let (sous_txt, sous_val) = gen_expr(rng, depth - 1);
            txt.push('(');
            txt.push_str(&sous_txt);
            txt.push(')');
            match sous_val {
                Ok(v) => vals.push(v),
                Err(e) => {
                    erreur.get_or_insert(e);
                    vals.push(1.0);
                }
            }
        } else {
            let (n_txt, n_val) = gen_nombre(rng);
            txt.push_str(&n_txt);
            vals.push(n_val);
        }
    }

    let attendu = match erreur {
        Some(e) => Err(e),
        None => reduire(vals, ops),
    };
    (txt, attendu)
}

fn memes_resultats(a: &Result<f64, ErreurCalcul>, b: &Result<f64, ErreurCalcul>) -> bool {
    match (a, b) {
        (Ok(x), Ok(y)) => x == y || (x.is_nan() && y.is_nan()),
        (Err(x), Err(y)) => x == y,
        _ => false,
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_contre_oracle() {
    let start = Instant::now();
    let max = Duration::from_secs(3);
    let mut rng = Rng::new(0xC0FFEE);

    for _ in 0..3_000 {
        let (txt, attendu) = gen_expr(&mut rng, 3);
        let obtenu = evaluate(&txt);
        assert!(
            memes_resultats(&obtenu, &attendu),
            "expr={txt:?} attendu={attendu:?} obtenu={obtenu:?}"
        );
        budget(start, max);
    }
}

#[test]
fn fuzz_determinisme() {
    let mut rng = Rng::new(42);
    for _ in 0..500 {
        let (txt, _) = gen_expr(&mut rng, 2);
        let a = evaluate(&txt);
        let b = evaluate(&txt);
        assert!(memes_resultats(&a, &b), "expr={txt:?}");
    }
}

#[test]
fn fuzz_soupe_de_caracteres() {
    // entrées arbitraires : jamais de panic, toujours une valeur ou une erreur typée
    let start = Instant::now();
    let max = Duration::from_secs(2);
    let alphabet: Vec<char> = "0123456789.+-*/^()  xé√π\t".chars().collect();
    let mut rng = Rng::new(7);

    for _ in 0..5_000 {
        let len = rng.pick(24) as usize;
        let s: String = (0..len)
            .map(|_| alphabet[rng.pick(alphabet.len() as u32) as usize])
            .collect();
        match evaluate(&s) {
            Ok(_) => {}
            Err(
                ErreurCalcul::ParenthesesNonAppariees
                | ErreurCalcul::DivisionParZero
                | ErreurCalcul::ExpressionInvalide,
            ) => {}
            Err(e) => panic!("erreur inattendue pour {s:?}: {e}"),
        }
        budget(start, max);
    }
}

#[test]
fn fuzz_parentheses_desequilibrees() {
    let mut rng = Rng::new(2024);
    for _ in 0..500 {
        let (txt, _) = gen_expr(&mut rng, 2);
        let s = if rng.coin() {
            format!("({txt}")
        } else {
            format!("{txt})")
        };
        assert_eq!(
            evaluate(&s),
            Err(ErreurCalcul::ParenthesesNonAppariees),
            "expr={s:?}"
        );
    }
}
