// Fri Oct 16 2026 - Alex

pub mod alignment;
pub mod field;
pub mod layout;
pub mod pad;
pub mod record;

pub use alignment::Alignment;
pub use field::Field;
pub use layout::Layout;
pub use pad::pad_field;
pub use record::Structure;
