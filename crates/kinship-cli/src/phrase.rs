//! Locale phrase tables for relationship descriptors.

use crate::error::{CliError, Result};
use kinship_domain::{
    Gender, RelationshipDescriptor, RelationshipFormatter, RelationshipKind, UnionType,
};

/// Phrase table for the given locale tag.
pub fn formatter_for(locale: &str) -> Result<Box<dyn RelationshipFormatter>> {
    match locale.to_lowercase().as_str() {
        "en" | "en-us" | "en-gb" | "en_us" | "en_gb" => Ok(Box::new(EnglishFormatter)),
        other => Err(CliError::UnsupportedLocale(other.to_string())),
    }
}

/// English relationship phrases.
#[derive(Debug, Default, Clone, Copy)]
pub struct EnglishFormatter;

impl RelationshipFormatter for EnglishFormatter {
    fn locale(&self) -> &str {
        "en"
    }

    fn format(&self, descriptor: &RelationshipDescriptor, gender: Gender) -> String {
        let base = match descriptor.kind {
            RelationshipKind::SamePerson => return "same person".to_string(),
            RelationshipKind::Unrelated => return "not related".to_string(),
            RelationshipKind::Spouse { union } => spouse(union, gender).to_string(),
            RelationshipKind::LinealAncestor { generations } => {
                lineal(generations, gendered(gender, "father", "mother", "parent"))
            }
            RelationshipKind::LinealDescendant { generations } => {
                lineal(generations, gendered(gender, "son", "daughter", "child"))
            }
            RelationshipKind::Sibling => {
                gendered(gender, "brother", "sister", "sibling").to_string()
            }
            RelationshipKind::AuntUncle { removal } => {
                greats(removal, gendered(gender, "uncle", "aunt", "aunt/uncle"))
            }
            RelationshipKind::NieceNephew { removal } => {
                let word = gendered(gender, "nephew", "niece", "niece/nephew");
                match removal {
                    0 => word.to_string(),
                    n => greats(n - 1, &format!("grand{word}")),
                }
            }
            RelationshipKind::Cousin { degree, removal } => cousin(degree, removal),
        };

        let phrase = if descriptor.is_step() {
            step(&descriptor.kind, base)
        } else if descriptor.in_law {
            in_law(&descriptor.kind, base)
        } else {
            base
        };

        if descriptor.by_birth {
            phrase
        } else {
            format!("{phrase} (not by birth)")
        }
    }
}

fn gendered<'a>(gender: Gender, male: &'a str, female: &'a str, neutral: &'a str) -> &'a str {
    match gender {
        Gender::Male => male,
        Gender::Female => female,
        Gender::Unknown => neutral,
    }
}

fn spouse(union: UnionType, gender: Gender) -> &'static str {
    match union {
        UnionType::Married => gendered(gender, "husband", "wife", "spouse"),
        UnionType::Partnered => "partner",
        UnionType::Unknown => "spouse",
    }
}

/// parent, grandparent, great-grandparent, ...
fn lineal(generations: u32, word: &str) -> String {
    match generations {
        0 | 1 => word.to_string(),
        n => greats(n - 2, &format!("grand{word}")),
    }
}

/// `count` "great-" prefixes, switching to an ordinal past two
fn greats(count: u32, word: &str) -> String {
    match count {
        0 => word.to_string(),
        1 => format!("great-{word}"),
        2 => format!("great-great-{word}"),
        n => format!("{} great-{word}", ordinal(n)),
    }
}

fn cousin(degree: u32, removal: u32) -> String {
    let removed = match removal {
        0 => String::new(),
        1 => " once removed".to_string(),
        2 => " twice removed".to_string(),
        n => format!(" {n} times removed"),
    };
    format!("{} cousin{removed}", ordinal_word(degree))
}

/// stepmother, stepson, step-grandfather, ...
fn step(kind: &RelationshipKind, phrase: String) -> String {
    match kind {
        RelationshipKind::LinealAncestor { generations: 1 }
        | RelationshipKind::LinealDescendant { generations: 1 } => format!("step{phrase}"),
        _ => format!("step-{phrase}"),
    }
}

/// Close relations take "-in-law"; the rest are "by marriage"
fn in_law(kind: &RelationshipKind, phrase: String) -> String {
    match kind {
        RelationshipKind::Sibling
        | RelationshipKind::LinealAncestor { generations: 1 }
        | RelationshipKind::LinealDescendant { generations: 1 } => format!("{phrase}-in-law"),
        _ => format!("{phrase} by marriage"),
    }
}

fn ordinal_word(n: u32) -> String {
    const WORDS: [&str; 10] = [
        "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
        "tenth",
    ];
    match n {
        1..=10 => WORDS[(n - 1) as usize].to_string(),
        n => ordinal(n),
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
