//! Page navigation
//!
//! The site is a set of page sections with exactly one visible at a time,
//! plus in-page sections that can be scrolled to. The URL fragment mirrors
//! the visible page so a reload lands on the same page.

/// Id of the landing page
pub const HOME: &str = "home";

/// Scroll offset past which the navbar is drawn elevated
pub const NAVBAR_ELEVATION_OFFSET: u32 = 50;

/// What to do with a clicked link
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkAction {
    /// In-page target: default navigation prevented, scroll to it
    ScrollTo(String),
    /// Let the browser follow the link
    Follow(String),
}

/// Result of [`Router::navigate_to_section`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavOutcome {
    /// The page is now the visible one
    Shown(String),
    /// Not a page here; go to its dedicated document instead
    External(String),
    /// Nothing to do (empty id)
    Ignored,
}

/// Hamburger menu shown on narrow screens
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Whether the menu is expanded
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger clicked
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Collapse the menu
    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click landed somewhere on the page
    ///
    /// Clicks outside both the hamburger and the menu collapse it.
    pub fn click(&mut self, on_hamburger: bool, inside_menu: bool) {
        if !on_hamburger && !inside_menu {
            self.close();
        }
    }
}

/// Navbar look, driven by the scroll offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavbarStyle {
    /// At the top of the page
    Flat,
    /// Scrolled down: stronger shadow
    Elevated,
}

impl NavbarStyle {
    /// Style for a vertical scroll offset
    pub fn for_scroll(offset: u32) -> Self {
        if offset > NAVBAR_ELEVATION_OFFSET {
            NavbarStyle::Elevated
        } else {
            NavbarStyle::Flat
        }
    }
}

/// Visible-page state and link handling
#[derive(Debug, Clone)]
pub struct Router {
    pages: Vec<String>,
    sections: Vec<String>,
    visible: usize,
    fragment: String,
    scroll_top: u32,
    /// Mobile navigation menu
    pub menu: MobileMenu,
}

impl Router {
    /// Create a router over page ids and other in-page section ids
    ///
    /// `home` is visible initially when it is one of the pages, else the first page.
    pub fn new<P, S>(pages: P, sections: S) -> Self
    where
        P: IntoIterator,
        P::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        let pages: Vec<String> = pages.into_iter().map(Into::into).collect();
        let visible = pages.iter().position(|p| p == HOME).unwrap_or(0);
        Self {
            pages,
            sections: sections.into_iter().map(Into::into).collect(),
            visible,
            fragment: String::new(),
            scroll_top: 0,
            menu: MobileMenu::default(),
        }
    }

    /// Apply the fragment present at load time; a page fragment shows that page
    pub fn with_fragment(mut self, fragment: &str) -> Self {
        let id = fragment.trim_start_matches('#');
        if let Some(index) = self.page_index(id) {
            self.visible = index;
        }
        self.fragment = id.to_string();
        self
    }

    fn page_index(&self, id: &str) -> Option<usize> {
        self.pages.iter().position(|p| p == id)
    }

    /// Whether `id` names a page or section on this site
    pub fn has_target(&self, id: &str) -> bool {
        !id.is_empty() && (self.page_index(id).is_some() || self.sections.iter().any(|s| s == id))
    }

    /// Page ids in navigation order
    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    /// Id of the visible page
    pub fn visible_page(&self) -> Option<&str> {
        self.pages.get(self.visible).map(String::as_str)
    }

    /// Current URL fragment, without `#`
    pub fn fragment(&self) -> &str {
        &self.fragment
    }

    /// Current scroll offset
    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    /// Record a scroll offset
    pub fn set_scroll_top(&mut self, offset: u32) {
        self.scroll_top = offset;
    }

    /// Handle a click on a link
    ///
    /// `#id` links to a known target scroll to it; everything else follows
    /// normal navigation. The mobile menu closes either way.
    pub fn click_link(&mut self, href: &str) -> LinkAction {
        self.menu.close();

        match href.strip_prefix('#') {
            Some(id) if self.has_target(id) => LinkAction::ScrollTo(id.to_string()),
            _ => LinkAction::Follow(href.to_string()),
        }
    }

    /// Show a page, hiding all others
    ///
    /// Unknown ids resolve to their dedicated document, `<id>.html`.
    pub fn navigate_to_section(&mut self, id: &str) -> NavOutcome {
        let id = id.trim_start_matches('#');
        if id.is_empty() {
            return NavOutcome::Ignored;
        }

        match self.page_index(id) {
            Some(index) => {
                self.visible = index;
                self.fragment = id.to_string();
                self.scroll_top = 0;
                self.menu.close();
                NavOutcome::Shown(id.to_string())
            }
            None => NavOutcome::External(format!("{}.html", id)),
        }
    }

    /// The URL fragment changed (back/forward, manual edit)
    pub fn hash_changed(&mut self, fragment: &str) {
        self.fragment = fragment.trim_start_matches('#').to_string();
    }

    /// Whether the "back to home" button is shown
    pub fn back_to_home_visible(&self) -> bool {
        match self.visible_page() {
            Some(page) if page != HOME => true,
            _ => !self.fragment.is_empty() && self.fragment != HOME,
        }
    }

    /// Whether the API settings button is shown (never on the home page)
    pub fn api_settings_visible(&self) -> bool {
        let page = self
            .visible_page()
            .or_else(|| (!self.fragment.is_empty()).then_some(self.fragment.as_str()))
            .unwrap_or(HOME);
        page != HOME
    }

    /// Navbar style for the current scroll offset
    pub fn navbar_style(&self) -> NavbarStyle {
        NavbarStyle::for_scroll(self.scroll_top)
    }
}
