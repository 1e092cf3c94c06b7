use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Welcome,
    Login,
    Resume,
}

impl Route {
    /// How long the welcome animation plays before moving on to the form.
    pub const WELCOME_DURATION: Duration = Duration::from_millis(5390);

    pub fn path(self) -> &'static str {
        match self {
            Route::Welcome => "/",
            Route::Login => "/login",
            Route::Resume => "/resume",
        }
    }

    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Welcome),
            "/login" => Some(Route::Login),
            "/resume" => Some(Route::Resume),
            _ => None,
        }
    }

    /// Where the view goes on its own, without user input.
    pub fn after_timeout(self) -> Option<Self> {
        match self {
            Route::Welcome => Some(Route::Login),
            Route::Login | Route::Resume => None,
        }
    }
}
