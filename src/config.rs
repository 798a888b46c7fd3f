use log::Level;

pub const OWNER_NAME: &str = "John Doe";
pub const OWNER_ROLE: &str = "Full Stack Developer & UI/UX Designer";
pub const RESUME_URL: &str = "/resume.pdf";
pub const CONTACT_EMAIL: &str = "hello@johndoe.dev";

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("GitHub", "https://github.com/johndoe"),
    ("LinkedIn", "https://www.linkedin.com/in/johndoe"),
    ("Twitter", "https://twitter.com/johndoe"),
];

/// Frame rate caps for the decorative scenes.
pub const LOADER_FPS: u32 = 30;
pub const SCENE_FPS: u32 = 60;

/// Upper bound for the device pixel ratio used when sizing drawing buffers.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

pub const TOAST_LIMIT: usize = 3;
pub const TOAST_DISMISS_MS: u32 = 5000;

pub const THEME_STORAGE_KEY: &str = "theme";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
