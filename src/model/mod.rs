pub mod department;
pub mod draft;
pub mod leave_type;
