//! Scroll-reactive navbar appearance.
//!
//! The appearance is a pure function of the scroll offset and is re-applied in
//! full on every call, whether or not it changed since the previous one.

pub const SCROLLED_CLASS: &str = "navbar--scrolled";
pub const TRANSPARENT_CLASS: &str = "navbar--transparent";

pub trait NavbarSurface {
    fn set_class(&mut self, class: &str, on: bool);
    fn set_logo_src(&mut self, src: &str);
}

/// Light and dark logo sources. Both must be present for the swap to happen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoVariants {
    pub light: String,
    pub dark: String,
}

impl LogoVariants {
    pub fn from_attributes(light: Option<String>, dark: Option<String>) -> Option<Self> {
        match (light, dark) {
            (Some(light), Some(dark)) if !light.is_empty() && !dark.is_empty() => {
                Some(Self { light, dark })
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavbarAppearance {
    pub scrolled: bool,
}

impl NavbarAppearance {
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        Self {
            scrolled: offset > threshold,
        }
    }

    pub fn logo_src<'a>(&self, logo: &'a LogoVariants) -> &'a str {
        if self.scrolled {
            logo.dark.as_str()
        } else {
            logo.light.as_str()
        }
    }
}

#[derive(Debug, Clone)]
pub struct ScrollAppearanceController {
    threshold: f64,
    logo: Option<LogoVariants>,
}

impl ScrollAppearanceController {
    pub fn new(threshold: f64, logo: Option<LogoVariants>) -> Self {
        Self { threshold, logo }
    }

    pub fn has_logo_swap(&self) -> bool {
        self.logo.is_some()
    }

    /// Applies the appearance for `offset` and returns it.
    pub fn sync(&self, offset: f64, surface: &mut impl NavbarSurface) -> NavbarAppearance {
        let appearance = NavbarAppearance::from_offset(offset, self.threshold);
        surface.set_class(SCROLLED_CLASS, appearance.scrolled);
        surface.set_class(TRANSPARENT_CLASS, !appearance.scrolled);
        if let Some(logo) = &self.logo {
            surface.set_logo_src(appearance.logo_src(logo));
        }
        appearance
    }
}
