use serde::Deserialize;
use std::fmt;
use std::rc::Rc;

#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, Deserialize)]
#[serde(from = "String")]
pub struct Project(Rc<str>);

impl Project {
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl From<String> for Project {
    fn from(name: String) -> Project {
        Project(name.into())
    }
}

impl From<&str> for Project {
    fn from(name: &str) -> Project {
        Project(name.into())
    }
}

impl fmt::Display for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
