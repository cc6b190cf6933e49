pub mod route;
pub mod stay;
