use serde::Deserialize;
use std::fmt;
use std::rc::Rc;

/// A team member, identified by name.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize)]
#[serde(from = "String")]
pub struct Person(Rc<str>);

impl Person {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<String> for Person {
    fn from(name: String) -> Person {
        Person(name.into())
    }
}

impl From<&str> for Person {
    fn from(name: &str) -> Person {
        Person(name.into())
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
