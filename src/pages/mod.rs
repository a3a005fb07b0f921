//! Page components for the invitation.

mod invitation;

pub use invitation::Invitation;
