//! Participant and roster fixtures.

use giftdraw_core::{Participant, Restriction, Roster};

/// Participants whose id and name are both the given label.
pub fn participants(labels: &[&str]) -> Vec<Participant> {
    labels
        .iter()
        .map(|label| Participant::new(*label, *label))
        .collect()
}

/// `n` participants labelled `A`, `B`, `C`, ...
pub fn lettered(n: usize) -> Vec<Participant> {
    (0..n)
        .map(|i| {
            let label = char::from(b'A' + (i % 26) as u8).to_string();
            let label = if i < 26 { label } else { format!("{}{}", label, i / 26) };
            Participant::new(label.clone(), label)
        })
        .collect()
}

/// A thirteen-person family with couples and one household that must
/// not draw each other.
///
/// Ids are `p-0` to `p-12`. Each couple excludes the partner in both
/// directions; the five members of household `p-4`..`p-8` exclude one
/// another.
pub fn family_of_thirteen() -> Roster {
    let names = [
        "Segundo", "Dorys", "Carlos", "Susanita", "Juni", "Ita", "Jeank", "Keyla", "Charlie",
        "Grace", "Freddy", "Ivo", "George",
    ];
    let participants: Vec<Participant> = names
        .iter()
        .enumerate()
        .map(|(i, name)| Participant::new(format!("p-{}", i), *name))
        .collect();

    let mut restrictions = Vec::new();
    for (a, b) in [(0, 1), (9, 10), (11, 12), (2, 3)] {
        restrictions.push(Restriction::new(format!("p-{}", a), [format!("p-{}", b)]));
        restrictions.push(Restriction::new(format!("p-{}", b), [format!("p-{}", a)]));
    }
    let household = 4..=8;
    for member in household.clone() {
        restrictions.push(Restriction::new(
            format!("p-{}", member),
            household
                .clone()
                .filter(|other| *other != member)
                .map(|other| format!("p-{}", other)),
        ));
    }

    Roster::from_parts(participants, restrictions).with_name("Family Christmas")
}
