//! Platform-free core of the MusicToy step sequencer: grid layout, hit
//! testing, the URL-hash state codec and rendering of the grid into a piece.

pub mod button;
pub mod codec;
pub mod constants;
pub mod geometry;
pub mod layout;
pub mod music;
pub mod piece;
pub mod sequencer;
pub mod state;
pub mod surface;
pub mod transport;

pub use button::*;
pub use codec::CodecError;
pub use constants::*;
pub use geometry::*;
pub use layout::*;
pub use music::*;
pub use piece::*;
pub use sequencer::*;
pub use state::*;
pub use surface::*;
pub use transport::*;
