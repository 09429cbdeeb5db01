mod grade;
mod level;
mod pretty;
mod question;

pub use grade::*;
pub use level::*;
pub use pretty::*;
pub use question::*;
