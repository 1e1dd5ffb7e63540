//! Page controllers. Each one owns its state and reaches the page only through
//! the port trait declared next to it.

pub mod contact_form;
pub mod counter;
pub mod headline;
pub mod navbar;
pub mod pin_map;

pub use contact_form::{ContactForm, FormSurface};
pub use counter::{AnimationToken, CounterAnimator, Frame, Trigger};
pub use headline::{HeadlineRotator, HeadlineSurface, MotionPreference};
pub use navbar::{LogoVariants, NavbarSurface, ScrollAppearanceController};
pub use pin_map::{DetailView, ModalCapability, ModalContent, PinMap, PinMarker};
