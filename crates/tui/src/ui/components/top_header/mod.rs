//! Top header: project title, user name and the avatar control that opens
//! the identity popup (name, email, Logout).

mod state;
mod top_header_component;

pub use state::TopHeaderState;
pub use top_header_component::TopHeaderComponent;
