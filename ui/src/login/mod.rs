mod engine;
pub use engine::{Completion, LoginError, LoginForm, LoginPhase, SubmitOutcome};

mod submit;
pub use submit::authenticate_and_store;

mod view;
pub use view::LoginView;
