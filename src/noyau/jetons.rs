// src/noyau/jetons.rs

use super::erreur::ErreurCalcul;

/// Opérateurs binaires reconnus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^
}

impl Operateur {
    fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Star),
            '/' => Some(Self::Slash),
            '^' => Some(Self::Caret),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Minus => '-',
            Self::Star => '*',
            Self::Slash => '/',
            Self::Caret => '^',
        }
    }

    /// Table fixe : + - => 1 ; * / => 2 ; ^ => 3.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Star | Self::Slash => 2,
            Self::Caret => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),
    Op(Operateur),
    LPar,
    RPar,
}

/// Mode de tokenisation : que faire d’un caractère inconnu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Lexique {
    /// Le caractère disparaît (comportement historique de la calculatrice).
    #[default]
    Permissif,
    /// Le premier caractère inconnu est une erreur.
    Strict,
}

/// Tokenize une chaîne en jetons (mode permissif).
/// Supporte:
/// - nombres décimaux `chiffres[.chiffres]` (ex: 12, 3.5, 3.)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - moins en tête : "-5+3" est lu "0-5+3"
///
/// Tout autre caractère est ignoré.
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    tokenize_avec(s, Lexique::Permissif)
}

/// Comme `tokenize`, mais refuse le premier caractère inconnu.
pub fn tokenize_strict(s: &str) -> Result<Vec<Tok>, ErreurCalcul> {
    tokenize_avec(s, Lexique::Strict)
}

pub fn tokenize_avec(s: &str, lexique: Lexique) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    if chars.first() == Some(&'-') {
        chars.insert(0, '0');
    }

    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        // Nombre : chiffres, '.' optionnel, chiffres
        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let litteral: String = chars[start..i].iter().collect();
            let v = litteral
                .parse::<f64>()
                .map_err(|_| ErreurCalcul::ExpressionInvalide)?;
            out.push(Tok::Num(v));
            continue;
        }

        if let Some(op) = Operateur::depuis_char(c) {
            out.push(Tok::Op(op));
        } else if c == '(' {
            out.push(Tok::LPar);
        } else if c == ')' {
            out.push(Tok::RPar);
        } else {
            match lexique {
                Lexique::Strict => return Err(ErreurCalcul::CaractereInattendu(c)),
                Lexique::Permissif => log::debug!("caractère ignoré: {c:?}"),
            }
        }
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(v) => v.to_string(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
