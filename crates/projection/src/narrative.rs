//! Generated prose: the projected data carries several fields that are not
//! raw intake values but full sentences the documents print verbatim.

use codicil_intake::{Child, NamedParty, ServeType};
use itertools::Itertools;

/// Pronoun set derived from an intake `sex` field. Unrecognized or absent
/// values fall back to they/them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pronouns {
    pub subject: &'static str,
    pub object: &'static str,
    pub possessive: &'static str,
    pub possessive_pronoun: &'static str,
    pub reflexive: &'static str,
}

impl Pronouns {
    pub fn for_sex(sex: &str) -> Self {
        match sex.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Pronouns {
                subject: "he",
                object: "him",
                possessive: "his",
                possessive_pronoun: "his",
                reflexive: "himself",
            },
            "female" | "f" => Pronouns {
                subject: "she",
                object: "her",
                possessive: "her",
                possessive_pronoun: "hers",
                reflexive: "herself",
            },
            _ => Pronouns {
                subject: "they",
                object: "them",
                possessive: "their",
                possessive_pronoun: "theirs",
                reflexive: "themselves",
            },
        }
    }
}

/// First-person marital status sentence for the declarations page.
pub fn marital_status_statement(marital_status: &str) -> String {
    let status = marital_status.trim().to_ascii_lowercase();
    match status.as_str() {
        "" => String::new(),
        "single" | "unmarried" | "never married" => "I am not married".to_string(),
        "married" => "I am married".to_string(),
        "divorced" => "I am divorced".to_string(),
        "widowed" | "widow" | "widower" => "I am widowed".to_string(),
        "separated" => "I am separated".to_string(),
        "domestic partnership" | "registered domestic partner" => {
            "I am in a registered domestic partnership".to_string()
        }
        _ => format!("My marital status is {status}"),
    }
}

/// Spelled-out count for small numbers, digits beyond ten.
pub fn count_word(n: usize) -> String {
    match n {
        1 => "one".to_string(),
        2 => "two".to_string(),
        3 => "three".to_string(),
        4 => "four".to_string(),
        5 => "five".to_string(),
        6 => "six".to_string(),
        7 => "seven".to_string(),
        8 => "eight".to_string(),
        9 => "nine".to_string(),
        10 => "ten".to_string(),
        n => n.to_string(),
    }
}

fn child_entry(child: &Child) -> String {
    let name = child.full_name();
    if child.date_of_birth.trim().is_empty() {
        name
    } else {
        format!("{name}, born {}", child.date_of_birth.trim())
    }
}

/// First-person children sentence with count agreement.
///
/// Each entry carries its own ", born <dob>" clause, so the enumeration
/// always uses a comma (and an Oxford comma) before the final "and", even
/// for two children.
pub fn children_statement(children: &[Child]) -> String {
    match children {
        [] => "I have no children.".to_string(),
        [only] => format!("I have one child: {}.", child_entry(only)),
        [init @ .., last] => {
            let list = init.iter().map(child_entry).join(", ");
            format!(
                "I have {} children: {}, and {}.",
                count_word(children.len()),
                list,
                child_entry(last)
            )
        }
    }
}

/// Numbered one-per-line children block for the family information table.
pub fn children_table(children: &[Child]) -> String {
    children
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{}. {}", i + 1, child_entry(c)))
        .join("\n")
}

/// Comma-joined children names for in-sentence references.
pub fn children_references(children: &[Child]) -> String {
    children.iter().map(|c| c.full_name()).join(", ")
}

/// Natural-language name list: "A", "A and B", "A, B, and C".
pub fn oxford_join(names: &[String]) -> String {
    match names {
        [] => String::new(),
        [only] => only.clone(),
        [a, b] => format!("{a} and {b}"),
        [init @ .., last] => format!("{}, and {last}", init.join(", ")),
    }
}

/// The succession narrative printed in the trustee article.
///
/// Sequential trustees are listed one per line with "then" connectors;
/// concurrent trustees are a single name list qualified by the
/// survivorship clause.
pub fn trustee_narrative(trustees: &[NamedParty], serve_type: ServeType) -> String {
    let names: Vec<String> = trustees.iter().map(NamedParty::full_name).collect();
    match serve_type {
        ServeType::Sequential => names.join(",\nthen "),
        ServeType::Together => match names.len() {
            0 => String::new(),
            1 => names[0].clone(),
            _ => format!("{}, jointly or the survivor of them", oxford_join(&names)),
        },
    }
}

/// Numbered appointee list with whatever contact details are on file.
pub fn numbered_party_list(parties: &[NamedParty]) -> String {
    parties
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let contact: Vec<String> = [
                p.address.trim().to_string(),
                format_phone(&p.phone),
                p.email.trim().to_string(),
            ]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
            if contact.is_empty() {
                format!("{}. {}", i + 1, p.full_name())
            } else {
                format!("{}. {} ({})", i + 1, p.full_name(), contact.join(", "))
            }
        })
        .join("\n")
}

/// Comma-joined appointee names.
pub fn party_references(parties: &[NamedParty]) -> String {
    parties.iter().map(NamedParty::full_name).join(", ")
}

/// Ten-digit numbers render as "(XXX) XXX-XXXX"; anything else is passed
/// through as entered.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    let digits = digits.strip_prefix('1').filter(|d| d.len() == 10).unwrap_or(&digits);
    if digits.len() == 10 {
        format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
    } else {
        phone.trim().to_string()
    }
}

/// Share percentage without a trailing ".0" for whole numbers.
pub fn share_display(share: f64) -> String {
    if share.fract() == 0.0 {
        format!("{}", share as i64)
    } else {
        format!("{share}")
    }
}

/// Today's date in the long en-US form the documents use.
pub fn long_date_today() -> String {
    chrono::Local::now().format("%B %-d, %Y").to_string()
}
