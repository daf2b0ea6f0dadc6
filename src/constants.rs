// Element ids, selectors and class names the page markup provides.

// Navigation
pub const NAVBAR_ID: &str = "navbar";
pub const MOBILE_TOGGLE_ID: &str = "mobileToggle";
pub const NAV_MENU_ID: &str = "navMenu";
pub const NAV_LINK_SELECTOR: &str = ".nav-link";
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
pub const BACK_TO_TOP_ID: &str = "backToTop";

// Theme
pub const THEME_TOGGLE_ID: &str = "themeToggle";
pub const THEME_ICON_SELECTOR: &str = "i";

// Hero
pub const HERO_SELECTOR: &str = ".hero";
pub const TYPING_SELECTOR: &str = ".typing-code";
pub const FLUID_CANVAS_CLASS: &str = "fluid-canvas";

// Shared state classes
pub const ACTIVE_CLASS: &str = "active";
pub const VISIBLE_CLASS: &str = "visible";

// Easter egg banner
pub const EASTER_EGG_MESSAGE: &str = "\u{1F389} You found the secret! \u{1F389}";
pub const EASTER_EGG_STYLE: &str = "position: fixed; top: 50%; left: 50%; \
    transform: translate(-50%, -50%) scale(0); \
    background: linear-gradient(135deg, var(--primary-500), var(--accent-color)); \
    color: white; padding: 2rem 4rem; border-radius: 1rem; font-size: 2rem; \
    font-weight: bold; z-index: 9999; box-shadow: 0 20px 60px rgba(0, 0, 0, 0.3);";
pub const EASTER_EGG_SHOWN_TRANSFORM: &str = "translate(-50%, -50%) scale(1)";

pub const WELCOME_BANNER: &str = "Welcome to the portfolio! Built with Rust + WebAssembly, \
    GSAP for scroll animations, and modern CSS. Interested in the code? Let's connect.";
