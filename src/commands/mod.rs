pub mod inspect;
pub mod list;
pub mod status;
pub mod survey;
pub mod view;
