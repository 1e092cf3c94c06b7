mod directory;
mod form;
mod route;
mod submit;

pub use directory::{ClientError, DirectoryClient};
pub use form::{FormError, LoginForm};
pub use route::Route;
pub use submit::{RejectionBody, Submission, SubmitOutcome, submit};
