//! Landing page copy.

/// Static content of the welcome page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Welcome {
    pub headline: &'static str,
    pub tagline: &'static str,
}

impl Welcome {
    pub const fn new() -> Self {
        Self {
            headline: "📚 Welcome to BookHive",
            tagline: "Discover, read, and manage your favorite books with ease. Built for readers and learners.",
        }
    }
}

impl Default for Welcome {
    fn default() -> Self {
        Self::new()
    }
}
