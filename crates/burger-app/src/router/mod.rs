//! # Overlay Router
//!
//! Navigation with modal-as-navigable-location semantics. A detail route is
//! simultaneously a full page and an overlay: which one it renders as is
//! decided entirely by whether the current location carries a *background*
//! route - the page that was current when an in-page action triggered the
//! navigation. Direct entry (refresh, shared link) carries no background,
//! so the same path renders as the sole page.
//!
//! There is no browser history stack here, so the router keeps an explicit
//! location stack: dismissal is one step back, which restores whatever was
//! beneath - never a jump to a fixed path.

use crate::model::IngredientId;

/// Every navigable location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Constructor,
    IngredientDetail(IngredientId),
    Feed,
    FeedOrder(u32),
    Login,
    Register,
    ForgotPassword,
    ResetPassword,
    Profile,
    ProfileOrders,
    ProfileOrder(u32),
    NotFound,
}

impl Route {
    /// Parses a path. Unknown paths resolve to `NotFound`, mirroring the
    /// catch-all route.
    pub fn parse(path: &str) -> Route {
        let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
        match segments.as_slice() {
            [""] => Route::Constructor,
            ["ingredients", id] => Route::IngredientDetail(IngredientId::from(*id)),
            ["feed"] => Route::Feed,
            ["feed", number] => match number.parse() {
                Ok(n) => Route::FeedOrder(n),
                Err(_) => Route::NotFound,
            },
            ["login"] => Route::Login,
            ["register"] => Route::Register,
            ["forgot-password"] => Route::ForgotPassword,
            ["reset-password"] => Route::ResetPassword,
            ["profile"] => Route::Profile,
            ["profile", "orders"] => Route::ProfileOrders,
            ["profile", "orders", number] => match number.parse() {
                Ok(n) => Route::ProfileOrder(n),
                Err(_) => Route::NotFound,
            },
            _ => Route::NotFound,
        }
    }

    /// The canonical path for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Constructor => "/".to_string(),
            Route::IngredientDetail(id) => format!("/ingredients/{id}"),
            Route::Feed => "/feed".to_string(),
            Route::FeedOrder(n) => format!("/feed/{n}"),
            Route::Login => "/login".to_string(),
            Route::Register => "/register".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::ResetPassword => "/reset-password".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::ProfileOrders => "/profile/orders".to_string(),
            Route::ProfileOrder(n) => format!("/profile/orders/{n}"),
            Route::NotFound => "/404".to_string(),
        }
    }

    fn requires_auth(&self) -> bool {
        matches!(
            self,
            Route::Profile | Route::ProfileOrders | Route::ProfileOrder(_)
        )
    }

    fn only_unauthenticated(&self) -> bool {
        matches!(
            self,
            Route::Login | Route::Register | Route::ForgotPassword | Route::ResetPassword
        )
    }

    /// Applies the auth guards: protected routes fall back to login,
    /// guest-only routes fall back to the constructor. Guards apply the
    /// same way whether the route renders as page or overlay.
    fn resolve(&self, authenticated: bool) -> Route {
        if self.requires_auth() && !authenticated {
            Route::Login
        } else if self.only_unauthenticated() && authenticated {
            Route::Constructor
        } else {
            self.clone()
        }
    }
}

/// One entry in the navigation stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub route: Route,
    /// The page to keep rendering beneath this route. Present only when
    /// the navigation was triggered in-page.
    pub background: Option<Route>,
}

/// What the view layer should render right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    pub page: Route,
    pub overlay: Option<Route>,
}

/// The navigation state machine. There is always a current location;
/// prior locations pile up behind it for `back` to restore.
#[derive(Debug, Clone)]
pub struct Router {
    current: Location,
    previous: Vec<Location>,
}

impl Router {
    /// Direct navigation: a fresh history with no background, as after a
    /// refresh or a shared link.
    pub fn enter(route: Route) -> Self {
        Self {
            current: Location {
                route,
                background: None,
            },
            previous: Vec::new(),
        }
    }

    pub fn current(&self) -> &Location {
        &self.current
    }

    /// The page currently rendered beneath everything, overlay or not.
    fn current_page(&self) -> Route {
        self.current
            .background
            .clone()
            .unwrap_or_else(|| self.current.route.clone())
    }

    /// In-page navigation to a full page (no overlay).
    pub fn push(&mut self, route: Route) {
        let next = Location {
            route,
            background: None,
        };
        self.previous.push(std::mem::replace(&mut self.current, next));
    }

    /// In-page navigation to a detail route, keeping the current page
    /// rendered beneath it.
    pub fn push_overlay(&mut self, route: Route) {
        let next = Location {
            route,
            background: Some(self.current_page()),
        };
        self.previous.push(std::mem::replace(&mut self.current, next));
    }

    /// One step back in history. No-op at the first location.
    pub fn back(&mut self) {
        if let Some(prev) = self.previous.pop() {
            self.current = prev;
        }
    }

    /// Dismissal of the overlay (close control, backdrop, Escape): one step
    /// back, restoring the background location. No-op when nothing is
    /// overlaid.
    pub fn close_overlay(&mut self) {
        if self.current().background.is_some() {
            self.back();
        }
    }

    /// Resolves what to render. With a background present two trees render
    /// at once: the page against the background route, the overlay against
    /// the current route. A guarded overlay collapses to its redirect
    /// target as the page.
    pub fn presentation(&self, authenticated: bool) -> Presentation {
        let current = self.current();
        match &current.background {
            Some(background) => {
                let resolved = current.route.resolve(authenticated);
                if resolved == current.route {
                    Presentation {
                        page: background.resolve(authenticated),
                        overlay: Some(resolved),
                    }
                } else {
                    Presentation {
                        page: resolved,
                        overlay: None,
                    }
                }
            }
            None => Presentation {
                page: current.route.resolve(authenticated),
                overlay: None,
            },
        }
    }
}
