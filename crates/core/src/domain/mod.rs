pub mod booking;
pub mod design;
pub mod designer;
