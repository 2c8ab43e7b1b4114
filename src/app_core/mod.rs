mod app;
mod jobs;
mod select;

pub use app::Minitune;
pub use jobs::LibraryJob;
