//! Identity records for the people named in an intake: the client and
//! spouse, their children, and the various appointed parties (trustees,
//! guardians, agents, personal representatives).

use serde::{Deserialize, Serialize};

/// Joins name parts with single spaces, skipping empty parts.
///
/// This is the one invariant every derived full name in the system obeys:
/// a missing middle name never produces a doubled space.
pub(crate) fn join_name_parts(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Full identity record for a client or spouse.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub county: String,
    pub phone: String,
    pub email: String,
    pub ssn: String,
    pub date_of_birth: String,
    pub sex: String,
    pub marital_status: String,
    pub notary_date: String,
}

impl Person {
    /// First, middle, and last name joined with single spaces.
    pub fn full_name(&self) -> String {
        join_name_parts(&[&self.first_name, &self.middle_name, &self.last_name])
    }

    /// Street address followed by "city, state zip", omitting empty parts.
    pub fn full_address(&self) -> String {
        let mut parts = Vec::new();
        if !self.address.trim().is_empty() {
            parts.push(self.address.trim().to_string());
        }
        let locality: Vec<&str> = [&self.city, &self.state, &self.zip]
            .into_iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .collect();
        if !locality.is_empty() {
            parts.push(locality.join(", "));
        }
        parts.join(", ")
    }
}

/// A child listed on the intake, in the order entered.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Child {
    pub first_name: String,
    pub middle_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub relation: String,
    pub sex: String,
}

impl Child {
    pub fn full_name(&self) -> String {
        join_name_parts(&[&self.first_name, &self.middle_name, &self.last_name])
    }
}

/// A named appointee: successor trustee, guardian, POA agent, or personal
/// representative. Some intakes carry a pre-joined `name`, others first/last
/// parts; `full_name` tolerates either.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NamedParty {
    pub name: String,
    pub first_name: String,
    pub last_name: String,
    pub relationship: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub sex: String,
}

impl NamedParty {
    pub fn full_name(&self) -> String {
        if !self.name.trim().is_empty() {
            self.name.trim().to_string()
        } else {
            join_name_parts(&[&self.first_name, &self.last_name])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_skips_missing_middle() {
        let p = Person {
            first_name: "Udo".into(),
            last_name: "Gyene".into(),
            ..Person::default()
        };
        assert_eq!(p.full_name(), "Udo Gyene");
    }

    #[test]
    fn full_name_includes_middle() {
        let p = Person {
            first_name: "John".into(),
            middle_name: "Michael".into(),
            last_name: "Smith".into(),
            ..Person::default()
        };
        assert_eq!(p.full_name(), "John Michael Smith");
    }

    #[test]
    fn full_address_omits_empty_parts() {
        let p = Person {
            address: "450 N Brand Blvd".into(),
            city: "Glendale".into(),
            zip: "91203".into(),
            ..Person::default()
        };
        assert_eq!(p.full_address(), "450 N Brand Blvd, Glendale, 91203");
        assert_eq!(Person::default().full_address(), "");
    }

    #[test]
    fn named_party_prefers_prejoined_name() {
        let t = NamedParty {
            name: "Ilona Farag".into(),
            first_name: "Wrong".into(),
            last_name: "Parts".into(),
            ..NamedParty::default()
        };
        assert_eq!(t.full_name(), "Ilona Farag");

        let t = NamedParty {
            first_name: "Ilona".into(),
            last_name: "Farag".into(),
            ..NamedParty::default()
        };
        assert_eq!(t.full_name(), "Ilona Farag");
    }
}
