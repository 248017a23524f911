pub mod builders;

pub use self::builders::*;
pub use self::project::TestProject;
