mod messages;
mod state;
mod update;

pub use messages::{ClickTarget, HoverTarget, Key, Message, PageOutline, PointerPhase};
pub use state::{App, ModalState, NavEntry, NavbarStyle, Section, current_section};
pub use update::{Effect, RevealTarget, ToastKind, TransformTarget};
