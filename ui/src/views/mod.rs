mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod coming_soon;
pub use coming_soon::ComingSoon;
