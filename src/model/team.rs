use super::Person;
use std::fmt;

/// One project's staffing: a lead and the other people working with them.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Team {
    pub lead: Person,
    pub members: Vec<Person>,
}

impl Team {
    pub fn new(lead: Person, members: Vec<Person>) -> Team {
        debug_assert!(
            !members.contains(&lead),
            "the lead cannot also be a member of the team"
        );
        Team { lead, members }
    }

    /// Number of people on the team, lead included.
    pub fn size(&self) -> usize {
        1 + self.members.len()
    }

    pub fn is_lead(&self, person: &Person) -> bool {
        self.lead == *person
    }

    pub fn involves(&self, person: &Person) -> bool {
        self.is_lead(person) || self.members.contains(person)
    }

    /// The lead first, then the members in order.
    pub fn people(&self) -> impl Iterator<Item = &Person> {
        std::iter::once(&self.lead).chain(&self.members)
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lead {}", self.lead)?;
        if self.members.is_empty() {
            return f.write_str(", no members");
        }
        f.write_str(", members ")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{member}")?;
        }
        Ok(())
    }
}
