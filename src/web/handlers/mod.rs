//! Page rendering and form handling for the listings site.

mod listings;
mod reviews;
mod root;

pub use listings::{
    EditTemplate, IndexTemplate, NewTemplate, ShowTemplate, create_handler, delete_handler,
    edit_form_handler, index_handler, new_form_handler, show_handler, update_handler,
};
pub use reviews::{create_review_handler, delete_review_handler};
pub use root::{not_found_handler, root_handler};
