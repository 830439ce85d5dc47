pub mod design;
pub mod scan;
