pub use self::assignment::{Assignment, TeamList};
pub use self::person::Person;
pub use self::problem::{Interest, Limits, Problem, Role};
pub use self::project::Project;
pub use self::team::Team;

mod assignment;
mod person;
mod problem;
mod project;
mod team;
