//! Screen widgets, one module per page or session screen.

pub mod footer;
pub mod landing;
pub mod loading;
pub mod question;
pub mod results;
