pub mod models;
pub mod writer;

pub use models::BookingOutcome;
pub use writer::BookingWriter;
