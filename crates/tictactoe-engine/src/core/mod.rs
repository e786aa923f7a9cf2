pub use self::{board::*, game_result::*, mark::*, moves::*};

pub(crate) mod board;
pub(crate) mod game_result;
pub(crate) mod mark;
pub(crate) mod moves;
