pub mod draft;
pub mod form;
pub mod page;
pub mod submit;
