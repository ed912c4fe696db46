mod call;
mod channel;
mod community;
mod conversation;
mod message;
mod view;

pub use call::*;
pub use channel::*;
pub use community::*;
pub use conversation::*;
pub use message::*;
pub use view::*;
