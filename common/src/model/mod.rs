pub mod counter;
pub mod filter;
pub mod form;
pub mod parcel;
