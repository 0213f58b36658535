mod landing;
pub use landing::Landing;

mod dashboard;
pub use dashboard::Dashboard;

mod toaster;
