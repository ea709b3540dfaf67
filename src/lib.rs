pub mod catalogue;
pub mod command;
pub mod formula;
pub mod goal;
pub mod goal_stack;
pub mod printer;
pub mod session;
pub mod shell;
pub mod tactic;

pub mod prelude {
    pub use crate::catalogue::prelude::*;
    pub use crate::command::prelude::*;
    pub use crate::formula::prelude::*;
    pub use crate::goal::prelude::*;
    pub use crate::goal_stack::prelude::*;
    pub use crate::printer::prelude::*;
    pub use crate::session::prelude::*;
    pub use crate::shell::prelude::*;
    pub use crate::tactic::prelude::*;
}
