mod download;
mod home;
mod not_found;
mod test_page;

pub use download::Download;
pub use home::Home;
pub use not_found::NotFound;
pub use test_page::TestPage;
