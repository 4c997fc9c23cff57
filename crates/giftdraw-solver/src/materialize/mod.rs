//! Materialization of a search mapping into tokened assignments.

mod token;

use std::collections::{HashMap, HashSet};

use giftdraw_core::{Assignment, DrawError, Participant, ParticipantId, Token};

use crate::search::AssignmentMap;

pub use token::{TimestampTokenGenerator, TokenGenerator};

/// Fresh tokens drawn before giving up on a generator that keeps repeating.
const MAX_TOKEN_ATTEMPTS: usize = 16;

/// Converts a giver-to-receiver mapping into assignment records.
///
/// Output order is the mapping's order; nothing is reshuffled. Every
/// assignment gets a token that is unique within the draw and starts
/// unaccessed.
///
/// # Example
///
/// ```
/// use giftdraw_core::Participant;
/// use giftdraw_solver::{AssignmentMap, Materializer, TimestampTokenGenerator};
///
/// let participants = vec![Participant::new("a", "Ana"), Participant::new("b", "Luis")];
/// let mut mapping = AssignmentMap::new();
/// mapping.insert("b".into(), "a".into());
/// mapping.insert("a".into(), "b".into());
///
/// let mut materializer = Materializer::new(TimestampTokenGenerator::new(13));
/// let assignments = materializer.materialize(&mapping, &participants).unwrap();
///
/// assert_eq!(assignments[0].giver, "Luis");
/// assert_eq!(assignments[0].receiver, "Ana");
/// assert!(!assignments[0].accessed);
/// ```
#[derive(Debug)]
pub struct Materializer<G> {
    generator: G,
}

impl<G: TokenGenerator> Materializer<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn materialize(
        &mut self,
        mapping: &AssignmentMap,
        participants: &[Participant],
    ) -> Result<Vec<Assignment>, DrawError> {
        let names: HashMap<&str, &str> = participants
            .iter()
            .map(|p| (p.id.as_str(), p.name.as_str()))
            .collect();
        let mut issued = HashSet::with_capacity(mapping.len());
        let mut assignments = Vec::with_capacity(mapping.len());

        for (giver, receiver) in mapping {
            let giver = resolve(&names, giver)?;
            let receiver = resolve(&names, receiver)?;
            let token = self.unique_token(&mut issued)?;
            assignments.push(Assignment::new(giver, receiver, token));
        }

        Ok(assignments)
    }

    fn unique_token(&mut self, issued: &mut HashSet<Token>) -> Result<Token, DrawError> {
        for _ in 0..MAX_TOKEN_ATTEMPTS {
            let token = self.generator.generate();
            if issued.insert(token.clone()) {
                return Ok(token);
            }
        }
        Err(DrawError::InvariantViolated(format!(
            "token generator repeated itself {} times",
            MAX_TOKEN_ATTEMPTS
        )))
    }
}

fn resolve<'a>(names: &HashMap<&str, &'a str>, id: &ParticipantId) -> Result<&'a str, DrawError> {
    names
        .get(id.as_str())
        .copied()
        .ok_or_else(|| DrawError::DanglingReference(id.clone()))
}
