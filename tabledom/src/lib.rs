pub mod animation;
pub mod element;
pub mod event;
pub mod hit;
pub mod render;
pub mod transitions;

pub use animation::RevealState;
pub use element::{find_element, find_element_mut, Content, Element};
pub use event::Event;
pub use hit::{bubble_path, contains};
pub use render::to_html;
pub use transitions::{Easing, TransitionConfig};
