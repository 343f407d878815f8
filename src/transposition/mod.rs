pub mod capo;
pub mod chord;
pub mod lookup_table;

pub use capo::{calculate_capo, CapoResult};
pub use chord::{normalize_semitones, transpose, transpose_with};
pub use lookup_table::{pitch_class, spell};
