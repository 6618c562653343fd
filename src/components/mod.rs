//! UI Components

mod auth_callback;
mod auth_layout;
mod landing;
mod login;
mod nav_bar;
mod signup;
mod todo_dashboard;

pub use auth_callback::AuthCallback;
pub use auth_layout::AuthLayout;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use nav_bar::NavBar;
pub use signup::SignupPage;
pub use todo_dashboard::TodoDashboard;
