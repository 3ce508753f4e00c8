use super::constants::BASE_PATH;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Loading,
    Welcome,
    About,
}

impl Route {
    /// Resolve a `location.pathname`, with or without the export base path.
    pub fn from_path(path: &str) -> Self {
        let path = strip_base(path);
        match path.trim_matches('/') {
            "welcome" => Route::Welcome,
            "about" => Route::About,
            _ => Route::Loading,
        }
    }

    /// Canonical path relative to the base, trailing slash included.
    pub fn path(&self) -> &'static str {
        match self {
            Route::Loading => "/",
            Route::Welcome => "/welcome/",
            Route::About => "/about/",
        }
    }

    pub fn href(&self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }

    /// Where this view sends the visitor on its own, and after how long.
    pub fn auto_next(&self) -> Option<(Route, AutoNav)> {
        match self {
            Route::Loading => Some((Route::Welcome, AutoNav::Replace)),
            Route::Welcome => Some((Route::About, AutoNav::PushAfterSplash)),
            Route::About => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AutoNav {
    /// Immediately, replacing the history entry.
    Replace,
    /// After the splash finishes, as a new history entry.
    PushAfterSplash,
}

/// The base path prefix active for `path`, empty during local development.
pub fn base_for(path: &str) -> &'static str {
    if path == BASE_PATH || path.starts_with(&format!("{BASE_PATH}/")) {
        BASE_PATH
    } else {
        ""
    }
}

fn strip_base(path: &str) -> &str {
    let base = base_for(path);
    &path[base.len()..]
}
